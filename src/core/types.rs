use serde::{Deserialize, Serialize};

/// Sentinel returned by [`Classification::as_signed`] for reads that match no sample
pub const UNDETERMINED: i64 = -1;

/// Display name used for reads that match no sample
pub const UNDETERMINED_NAME: &str = "Undetermined";

/// Which of the two index positions of a read a sample sheet is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexSlot {
    /// The first index (i7)
    First,
    /// The second index (i5)
    Second,
}

impl std::fmt::Display for IndexSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "index1"),
            Self::Second => write!(f, "index2"),
        }
    }
}

/// Lookup strategy chosen once for a whole sample sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Every index has the same length (at most 14 bases): dense table keyed by 2-bit encoding
    Exact,
    /// Indices of differing or long lengths: string map, longest prefix wins
    PrefixFallback,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::PrefixFallback => write!(f, "prefix-fallback"),
        }
    }
}

/// Outcome of classifying a single read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Position of the matched record in the sample sheet
    Sample(usize),
    Undetermined,
}

impl Classification {
    /// The matched sample position, if any
    #[must_use]
    pub fn sample(self) -> Option<usize> {
        match self {
            Self::Sample(id) => Some(id),
            Self::Undetermined => None,
        }
    }

    #[must_use]
    pub fn is_undetermined(self) -> bool {
        matches!(self, Self::Undetermined)
    }

    /// Sample position as a signed integer, [`UNDETERMINED`] (-1) when nothing matched
    #[must_use]
    pub fn as_signed(self) -> i64 {
        match self {
            Self::Sample(id) => id as i64,
            Self::Undetermined => UNDETERMINED,
        }
    }
}

impl From<Option<usize>> for Classification {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::Undetermined, Self::Sample)
    }
}
