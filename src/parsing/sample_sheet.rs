use std::path::Path;
use thiserror::Error;

use crate::core::sample::{SampleRecord, SampleSheet};
use crate::utils::validation::{exceeds_sample_limit, MAX_SAMPLES};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many samples: {0} exceeds maximum allowed ({MAX_SAMPLES})")]
    TooManySamples(usize),
}

/// Field delimiter for a sample sheet path: tab for `.tsv`/`.txt`, comma otherwise
#[must_use]
pub fn delimiter_for(path: &Path) -> char {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("tsv" | "txt") => '\t',
        _ => ',',
    }
}

/// Parse a sample sheet file with columns: file, index1, [index2]
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_sample_sheet_file(path: &Path) -> Result<SampleSheet, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let sheet = parse_sample_sheet_text(&content, delimiter_for(path))?;
    Ok(sheet.with_source(path.display().to_string()))
}

/// A header names both the file column and the first index column, so a sample whose file
/// identifier happens to be `sample` or `name` is still read as data.
fn is_header(fields: &[&str]) -> bool {
    let column = |i: usize| fields.get(i).map(|s| s.to_lowercase()).unwrap_or_default();
    matches!(column(0).as_str(), "file" | "filename" | "sample" | "name")
        && matches!(column(1).as_str(), "index1" | "index")
}

/// Parse sample sheet text with columns: file, index1, [index2]
///
/// An empty column means the index is unused, so single-index sheets may be written either
/// as `file,index1` or `file,,index2`.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if lines have fewer than 2 fields, a file
/// identifier is empty, or no records are found, or
/// `ParseError::TooManySamples` if the limit is exceeded.
pub fn parse_sample_sheet_text(text: &str, delimiter: char) -> Result<SampleSheet, ParseError> {
    let mut records = Vec::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();

        // Check if first non-empty/non-comment line is a header
        if first_data_line {
            first_data_line = false;
            if is_header(&fields) {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if fields.len() < 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        }

        let file = fields[0];
        if file.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has an empty file name"
            )));
        }

        let index2 = fields.get(2).copied().unwrap_or_default();

        if exceeds_sample_limit(records.len()) {
            return Err(ParseError::TooManySamples(records.len() + 1));
        }

        records.push(SampleRecord::new(file, fields[1], index2));
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No samples found in sample sheet".to_string(),
        ));
    }

    Ok(SampleSheet::new(records))
}
