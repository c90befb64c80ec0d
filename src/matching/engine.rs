use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::core::read::IndexedRead;
use crate::core::sample::SampleSheet;
use crate::core::types::{Classification, IndexSlot, MatchMode};
use crate::matching::encoding::{encode_kmer, table_size};
use crate::matching::validation::{validate_sheet, SheetError, SheetLayout};
use crate::parsing::sample_sheet::{parse_sample_sheet_file, ParseError};

/// Dense table cell value for "no sample"
const NO_SAMPLE: u32 = u32::MAX;

/// Sample identifiers are bounded by `MAX_SAMPLES`, far below `u32::MAX`
#[inline]
fn to_cell(id: usize) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    {
        id as u32
    }
}

/// Configuration for building an [`IndexMatcher`]
#[derive(Debug, Clone, Default)]
pub struct DemuxConfig {
    /// The expected samples, in output order
    pub samples: SampleSheet,
}

impl DemuxConfig {
    #[must_use]
    pub fn new(samples: SampleSheet) -> Self {
        Self { samples }
    }

    /// Load the sample sheet from a CSV/TSV file
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the sheet cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        Ok(Self::new(parse_sample_sheet_file(path)?))
    }
}

/// Lookup structure owned by the matcher
#[derive(Debug, Clone)]
enum IndexLookup {
    /// `4^L` cells addressed by the 2-bit encoding of an index of length `L`
    Exact { table: Box<[u32]> },
    /// Literal index sequence to sample id
    Prefix { samples: HashMap<Vec<u8>, usize> },
}

/// Assigns reads to samples by their index sequence.
///
/// Built once from a sample sheet and read-only afterwards, so a single matcher can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct IndexMatcher {
    slot: IndexSlot,
    longest: usize,
    shortest: usize,
    sample_count: usize,
    lookup: IndexLookup,
}

impl IndexMatcher {
    /// Validate the configured sample sheet and build the lookup structure
    ///
    /// # Errors
    ///
    /// Returns a `SheetError` describing the first configuration problem found. In exact
    /// mode, `SheetError::InvalidBase` is returned for an index with a base other than A/T/C/G.
    pub fn new(config: &DemuxConfig) -> Result<Self, SheetError> {
        let sheet = &config.samples;
        let layout = validate_sheet(sheet)?;

        let lookup = match layout.mode {
            MatchMode::Exact => build_exact(sheet, &layout)?,
            MatchMode::PrefixFallback => build_prefix(sheet, &layout),
        };

        Ok(Self {
            slot: layout.slot,
            longest: layout.longest,
            shortest: layout.shortest,
            sample_count: sheet.len(),
            lookup,
        })
    }

    #[must_use]
    pub fn mode(&self) -> MatchMode {
        match self.lookup {
            IndexLookup::Exact { .. } => MatchMode::Exact,
            IndexLookup::Prefix { .. } => MatchMode::PrefixFallback,
        }
    }

    #[must_use]
    pub fn slot(&self) -> IndexSlot {
        self.slot
    }

    #[must_use]
    pub fn longest_index(&self) -> usize {
        self.longest
    }

    #[must_use]
    pub fn shortest_index(&self) -> usize {
        self.shortest
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Classify a read by the index in the sheet's slot
    pub fn classify<R: IndexedRead + ?Sized>(&self, read: &R) -> Classification {
        let index = match self.slot {
            IndexSlot::First => read.first_index(),
            IndexSlot::Second => read.second_index(),
        };
        self.classify_index(index)
    }

    /// Classify a raw index sequence.
    ///
    /// Exact mode: indices shorter than the sheet's length are undetermined, longer ones are
    /// truncated to it. Prefix mode: prefixes are tried from the longest usable length down to
    /// the shortest sheet index, and the first exact string hit wins.
    #[must_use]
    pub fn classify_index(&self, index: &[u8]) -> Classification {
        match &self.lookup {
            IndexLookup::Exact { table } => {
                if index.len() < self.longest {
                    return Classification::Undetermined;
                }
                encode_kmer(&index[..self.longest])
                    .ok()
                    .map(|kmer| table[kmer as usize])
                    .filter(|&cell| cell != NO_SAMPLE)
                    .map(|cell| cell as usize)
                    .into()
            }
            IndexLookup::Prefix { samples } => {
                let upper = self.longest.min(index.len());
                (self.shortest..=upper)
                    .rev()
                    .find_map(|len| samples.get(&index[..len]).copied())
                    .into()
            }
        }
    }
}

fn build_exact(sheet: &SampleSheet, layout: &SheetLayout) -> Result<IndexLookup, SheetError> {
    let mut table = vec![NO_SAMPLE; table_size(layout.longest)].into_boxed_slice();

    for (id, record) in sheet.iter().enumerate() {
        let index = record.index(layout.slot);
        let kmer = encode_kmer(index.as_bytes()).map_err(|source| SheetError::InvalidBase {
            file: record.file.clone(),
            index: index.to_string(),
            source,
        })?;

        let cell = &mut table[kmer as usize];
        if *cell != NO_SAMPLE {
            warn!(
                index,
                previous = %sheet.records[*cell as usize].file,
                file = %record.file,
                "Duplicate index, later sample wins"
            );
        }
        *cell = to_cell(id);
    }

    Ok(IndexLookup::Exact { table })
}

fn build_prefix(sheet: &SampleSheet, layout: &SheetLayout) -> IndexLookup {
    let mut samples = HashMap::with_capacity(sheet.len());

    for (id, record) in sheet.iter().enumerate() {
        let index = record.index(layout.slot);
        if let Some(previous) = samples.insert(index.as_bytes().to_vec(), id) {
            warn!(
                index,
                previous = %sheet.records[previous].file,
                file = %record.file,
                "Duplicate index, later sample wins"
            );
        }
    }

    IndexLookup::Prefix { samples }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::read::ReadIndices;
    use crate::core::sample::SampleRecord;

    fn config(records: &[(&str, &str, &str)]) -> DemuxConfig {
        DemuxConfig::new(
            records
                .iter()
                .map(|(file, i1, i2)| SampleRecord::new(*file, *i1, *i2))
                .collect(),
        )
    }

    fn matcher(records: &[(&str, &str, &str)]) -> IndexMatcher {
        IndexMatcher::new(&config(records)).unwrap()
    }

    #[test]
    fn test_exact_mode_lookup() {
        let m = matcher(&[
            ("a.fq", "ACGT", ""),
            ("b.fq", "TTGC", ""),
            ("c.fq", "GGAA", ""),
        ]);

        assert_eq!(m.mode(), MatchMode::Exact);
        assert_eq!(m.sample_count(), 3);
        assert_eq!(m.classify_index(b"ACGT"), Classification::Sample(0));
        assert_eq!(m.classify_index(b"TTGC"), Classification::Sample(1));
        assert_eq!(m.classify_index(b"GGAA"), Classification::Sample(2));
        assert_eq!(m.classify_index(b"CCCC"), Classification::Undetermined);
    }

    #[test]
    fn test_exact_mode_truncates_long_reads() {
        let m = matcher(&[("a.fq", "ACGT", ""), ("b.fq", "TTGC", "")]);
        assert_eq!(m.classify_index(b"ACGTTT"), m.classify_index(b"ACGT"));
        assert_eq!(m.classify_index(b"TTGCNN"), Classification::Sample(1));
    }

    #[test]
    fn test_exact_mode_short_reads_undetermined() {
        let m = matcher(&[("a.fq", "ACGT", "")]);
        assert_eq!(m.classify_index(b"ACG"), Classification::Undetermined);
        assert_eq!(m.classify_index(b""), Classification::Undetermined);
    }

    #[test]
    fn test_exact_mode_invalid_read_bases_undetermined() {
        let m = matcher(&[("a.fq", "ACGT", "")]);
        assert_eq!(m.classify_index(b"ACNT"), Classification::Undetermined);
        assert_eq!(m.classify_index(b"acgt"), Classification::Undetermined);
    }

    #[test]
    fn test_exact_mode_invalid_sheet_base() {
        let err = IndexMatcher::new(&config(&[("a.fq", "ACGT", ""), ("b.fq", "acgt", "")]))
            .unwrap_err();
        match err {
            SheetError::InvalidBase { file, index, .. } => {
                assert_eq!(file, "b.fq");
                assert_eq!(index, "acgt");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_index_last_write_wins() {
        let m = matcher(&[("a.fq", "ACGT", ""), ("b.fq", "ACGT", "")]);
        assert_eq!(m.mode(), MatchMode::Exact);
        assert_eq!(m.classify_index(b"ACGT"), Classification::Sample(1));

        let m = matcher(&[("a.fq", "AC", ""), ("b.fq", "ACGT", ""), ("c.fq", "AC", "")]);
        assert_eq!(m.mode(), MatchMode::PrefixFallback);
        assert_eq!(m.classify_index(b"ACTT"), Classification::Sample(2));
    }

    #[test]
    fn test_prefix_mode_longest_match_wins() {
        let m = matcher(&[("short.fq", "AC", ""), ("long.fq", "ACGT", "")]);
        assert_eq!(m.mode(), MatchMode::PrefixFallback);
        assert_eq!(m.shortest_index(), 2);
        assert_eq!(m.longest_index(), 4);

        assert_eq!(m.classify_index(b"ACGTA"), Classification::Sample(1));
        assert_eq!(m.classify_index(b"ACGT"), Classification::Sample(1));
        assert_eq!(m.classify_index(b"ACGA"), Classification::Sample(0));
        assert_eq!(m.classify_index(b"ACG"), Classification::Sample(0));
        assert_eq!(m.classify_index(b"AC"), Classification::Sample(0));
    }

    #[test]
    fn test_prefix_mode_no_match() {
        let m = matcher(&[("short.fq", "AC", ""), ("long.fq", "ACGT", "")]);
        assert_eq!(m.classify_index(b"A"), Classification::Undetermined);
        assert_eq!(m.classify_index(b""), Classification::Undetermined);
        assert_eq!(m.classify_index(b"TTGCA"), Classification::Undetermined);
        assert_eq!(m.classify_index(b"NCGT"), Classification::Undetermined);
    }

    #[test]
    fn test_prefix_mode_for_long_indices() {
        let m = matcher(&[
            ("a.fq", "ACGTACGTACGTACGT", ""),
            ("b.fq", "TTTTACGTACGTACGT", ""),
        ]);
        assert_eq!(m.mode(), MatchMode::PrefixFallback);
        assert_eq!(
            m.classify_index(b"TTTTACGTACGTACGTAA"),
            Classification::Sample(1)
        );
        assert_eq!(
            m.classify_index(b"TTTTACGTACGTACG"),
            Classification::Undetermined
        );
    }

    #[test]
    fn test_classify_uses_sheet_slot() {
        let read = ReadIndices::new("AAAA", "CCCC");

        let first = matcher(&[("a.fq", "AAAA", ""), ("b.fq", "CCCC", "")]);
        assert_eq!(first.slot(), IndexSlot::First);
        assert_eq!(first.classify(&read), Classification::Sample(0));

        let second = matcher(&[("a.fq", "", "AAAA"), ("b.fq", "", "CCCC")]);
        assert_eq!(second.slot(), IndexSlot::Second);
        assert_eq!(second.classify(&read), Classification::Sample(1));
    }

    #[test]
    fn test_matcher_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IndexMatcher>();

        let m = matcher(&[("a.fq", "ACGT", ""), ("b.fq", "TTGC", "")]);
        let reads = [b"ACGT", b"TTGC", b"GGGG"];

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let ids: Vec<i64> = reads
                        .iter()
                        .map(|r| m.classify_index(&r[..]).as_signed())
                        .collect();
                    assert_eq!(ids, vec![0, 1, -1]);
                });
            }
        });
    }
}
