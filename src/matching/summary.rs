use serde::Serialize;

use crate::core::sample::SampleSheet;
use crate::core::types::{Classification, UNDETERMINED_NAME};

/// Convert a read count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Per-sample tallies of classified reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationCounts {
    /// Reads assigned to each sample, indexed by sample id
    pub per_sample: Vec<u64>,

    /// Reads that matched no sample
    pub undetermined: u64,
}

/// One row of a rendered summary
#[derive(Debug, Clone, Serialize)]
pub struct SampleCount<'a> {
    pub file: &'a str,
    pub reads: u64,
    pub fraction: f64,
}

impl ClassificationCounts {
    #[must_use]
    pub fn new(sample_count: usize) -> Self {
        Self {
            per_sample: vec![0; sample_count],
            undetermined: 0,
        }
    }

    pub fn add(&mut self, classification: Classification) {
        match classification.sample().and_then(|id| self.per_sample.get_mut(id)) {
            Some(count) => *count += 1,
            None => self.undetermined += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.per_sample.iter().sum::<u64>() + self.undetermined
    }

    /// Rows in sheet order followed by the undetermined row
    #[must_use]
    pub fn rows<'a>(&self, sheet: &'a SampleSheet) -> Vec<SampleCount<'a>> {
        let total = self.total();
        let fraction = |reads: u64| {
            if total == 0 {
                0.0
            } else {
                count_to_f64(reads) / count_to_f64(total)
            }
        };

        sheet
            .iter()
            .zip(&self.per_sample)
            .map(|(record, &reads)| SampleCount {
                file: record.file.as_str(),
                reads,
                fraction: fraction(reads),
            })
            .chain(std::iter::once(SampleCount {
                file: UNDETERMINED_NAME,
                reads: self.undetermined,
                fraction: fraction(self.undetermined),
            }))
            .collect()
    }
}
