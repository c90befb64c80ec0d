use serde::{Deserialize, Serialize};

use crate::core::types::IndexSlot;

/// One sample sheet entry: an output file identifier and up to two expected indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Opaque identifier of the sample (usually the output file name)
    pub file: String,

    /// Expected first index (i7), empty when unused
    #[serde(default)]
    pub index1: String,

    /// Expected second index (i5), empty when unused
    #[serde(default)]
    pub index2: String,
}

impl SampleRecord {
    pub fn new(file: impl Into<String>, index1: impl Into<String>, index2: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            index1: index1.into(),
            index2: index2.into(),
        }
    }

    /// The index stored in the given slot (possibly empty)
    #[must_use]
    pub fn index(&self, slot: IndexSlot) -> &str {
        match slot {
            IndexSlot::First => &self.index1,
            IndexSlot::Second => &self.index2,
        }
    }

    /// True when neither index is populated
    #[must_use]
    pub fn has_no_index(&self) -> bool {
        self.index1.is_empty() && self.index2.is_empty()
    }
}

/// Ordered list of samples; a record's position is its sample identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSheet {
    /// Path the sheet was loaded from (if known)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub records: Vec<SampleRecord>,
}

impl SampleSheet {
    #[must_use]
    pub fn new(records: Vec<SampleRecord>) -> Self {
        Self {
            source: None,
            records,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by sample identifier
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&SampleRecord> {
        self.records.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SampleRecord> {
        self.records.iter()
    }
}

impl FromIterator<SampleRecord> for SampleSheet {
    fn from_iter<I: IntoIterator<Item = SampleRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SampleSheet {
    type Item = &'a SampleRecord;
    type IntoIter = std::slice::Iter<'a, SampleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_index_by_slot() {
        let record = SampleRecord::new("a.fq", "ACGT", "");
        assert_eq!(record.index(IndexSlot::First), "ACGT");
        assert_eq!(record.index(IndexSlot::Second), "");
        assert!(!record.has_no_index());
        assert!(SampleRecord::new("b.fq", "", "").has_no_index());
    }

    #[test]
    fn test_sheet_ordering_defines_ids() {
        let sheet: SampleSheet = vec![
            SampleRecord::new("a.fq", "AAAA", ""),
            SampleRecord::new("b.fq", "CCCC", ""),
        ]
        .into_iter()
        .collect();

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get(1).map(|r| r.file.as_str()), Some("b.fq"));
        assert!(sheet.get(2).is_none());
    }
}
