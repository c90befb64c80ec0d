//! Sample sheet validation and lookup mode selection.

use thiserror::Error;
use tracing::{debug, info};

use crate::core::sample::SampleSheet;
use crate::core::types::{IndexSlot, MatchMode};
use crate::matching::encoding::{EncodeError, MAX_EXACT_INDEX_LEN};
use crate::utils::validation::MAX_SAMPLES;

/// Base that marks an ambiguous call in an index
pub const AMBIGUOUS_BASE: char = 'N';

/// Configuration errors detected while building a matcher
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("bad format sample sheet: no records found")]
    EmptySheet,

    #[error("bad format sample sheet: {0} records exceeds maximum allowed ({MAX_SAMPLES})")]
    TooManySamples(usize),

    #[error("bad format sample sheet: record {record} ({file}) must specify index1 or index2")]
    MalformedSheet { record: usize, file: String },

    #[error("bad format sample sheet: you can use either index1 or index2, but cannot use both")]
    MixedIndexSlots,

    #[error("bad format sample sheet: N base is not supported (sample {file}, index {index})")]
    UnsupportedAmbiguousBase { file: String, index: String },

    #[error("index can only have A/T/C/G bases (sample {file}, index {index})")]
    InvalidBase {
        file: String,
        index: String,
        #[source]
        source: EncodeError,
    },
}

/// Properties of a sheet that decide how its indices are looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// The single index slot used by every record
    pub slot: IndexSlot,

    /// Lookup strategy
    pub mode: MatchMode,

    /// Longest index length across the sheet
    pub longest: usize,

    /// Shortest index length in the selected slot
    pub shortest: usize,
}

/// Scan every record once and decide the slot and lookup mode.
///
/// # Errors
///
/// Returns `SheetError::EmptySheet` or `SheetError::TooManySamples` for a sheet of unusable
/// size, `SheetError::MalformedSheet` for the first record without any index,
/// `SheetError::MixedIndexSlots` if records use both slots, and
/// `SheetError::UnsupportedAmbiguousBase` if any index contains `N`.
pub fn validate_sheet(sheet: &SampleSheet) -> Result<SheetLayout, SheetError> {
    if sheet.is_empty() {
        return Err(SheetError::EmptySheet);
    }
    if sheet.len() > MAX_SAMPLES {
        return Err(SheetError::TooManySamples(sheet.len()));
    }

    let mut use_index1 = false;
    let mut use_index2 = false;
    let mut ambiguous: Option<(&str, &str)> = None;
    let mut longest = 0;
    let mut shortest1 = usize::MAX;
    let mut shortest2 = usize::MAX;
    let mut same_length = true;

    for (i, record) in sheet.iter().enumerate() {
        debug!(
            file = %record.file,
            index1 = %record.index1,
            index2 = %record.index2,
            "Sample record"
        );

        if record.has_no_index() {
            return Err(SheetError::MalformedSheet {
                record: i + 1,
                file: record.file.clone(),
            });
        }

        if !record.index1.is_empty() {
            use_index1 = true;
            shortest1 = shortest1.min(record.index1.len());
        }
        if !record.index2.is_empty() {
            use_index2 = true;
            shortest2 = shortest2.min(record.index2.len());
        }

        if ambiguous.is_none() {
            ambiguous = [&record.index1, &record.index2]
                .into_iter()
                .find(|index| index.contains(AMBIGUOUS_BASE))
                .map(|index| (record.file.as_str(), index.as_str()));
        }

        longest = longest.max(record.index1.len()).max(record.index2.len());

        if let Some(previous) = i.checked_sub(1).and_then(|p| sheet.get(p)) {
            if previous.index1.len() != record.index1.len()
                || previous.index2.len() != record.index2.len()
            {
                same_length = false;
            }
        }
    }

    if use_index1 && use_index2 {
        return Err(SheetError::MixedIndexSlots);
    }
    if let Some((file, index)) = ambiguous {
        return Err(SheetError::UnsupportedAmbiguousBase {
            file: file.to_string(),
            index: index.to_string(),
        });
    }

    let (slot, shortest) = if use_index1 {
        (IndexSlot::First, shortest1)
    } else {
        (IndexSlot::Second, shortest2)
    };

    let mode = if same_length && longest <= MAX_EXACT_INDEX_LEN {
        MatchMode::Exact
    } else {
        MatchMode::PrefixFallback
    };

    info!(
        %mode,
        %slot,
        shortest,
        longest,
        samples = sheet.len(),
        "Selected index lookup mode"
    );

    Ok(SheetLayout {
        slot,
        mode,
        longest,
        shortest,
    })
}
