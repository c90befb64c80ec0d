/// A read that can expose the index sequences it was tagged with.
///
/// Implementations return the raw index bytes; no validation is assumed. An empty slice
/// means the read carries no index in that position.
pub trait IndexedRead {
    /// The first index (i7)
    fn first_index(&self) -> &[u8];

    /// The second index (i5)
    fn second_index(&self) -> &[u8];
}

/// Owned pair of index sequences extracted from a read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadIndices {
    pub first: Vec<u8>,
    pub second: Vec<u8>,
}

impl ReadIndices {
    pub fn new(first: impl Into<Vec<u8>>, second: impl Into<Vec<u8>>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Extract indices from an Illumina-style FASTQ comment such as `1:N:0:ACGTACGT+GGTTAACC`.
    ///
    /// The index field is everything after the last `:`. The first index runs up to a `+`
    /// (or to the end); the second index is what follows the `+`. Single-index reads report
    /// their only index in both positions. A comment without `:` yields empty indices.
    #[must_use]
    pub fn from_description(description: &[u8]) -> Self {
        let description = description.trim_ascii_end();

        let Some(colon) = description.iter().rposition(|&b| b == b':') else {
            return Self::default();
        };
        let field = &description[colon + 1..];

        match field.iter().position(|&b| b == b'+') {
            Some(plus) => Self::new(&field[..plus], &field[plus + 1..]),
            None => Self::new(field, field),
        }
    }
}

impl IndexedRead for ReadIndices {
    fn first_index(&self) -> &[u8] {
        &self.first
    }

    fn second_index(&self) -> &[u8] {
        &self.second
    }
}
