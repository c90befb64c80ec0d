//! FASTQ reading using noodles.
//!
//! Only read names and comments are used: the index sequences are taken from the
//! Illumina-style comment (`1:N:0:ACGTACGT+GGTTAACC`).
//! Supports both uncompressed and gzip/bgzip compressed files, and `-` for stdin.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fastq;

use crate::core::read::{IndexedRead, ReadIndices};
use crate::parsing::sample_sheet::ParseError;
use crate::utils::validation::is_gzipped;

/// A read name paired with the indices from its comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    pub name: String,
    pub indices: ReadIndices,
}

impl IndexedRecord {
    fn from_fastq(record: &fastq::Record) -> Self {
        let name: &[u8] = record.name();
        let description: &[u8] = record.description();

        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            indices: ReadIndices::from_description(description),
        }
    }
}

impl IndexedRead for IndexedRecord {
    fn first_index(&self) -> &[u8] {
        self.indices.first_index()
    }

    fn second_index(&self) -> &[u8] {
        self.indices.second_index()
    }
}

/// Iterator over the records of a FASTQ stream, reusing one record buffer
pub struct IndexedRecords<R> {
    reader: fastq::io::Reader<R>,
    record: fastq::Record,
}

impl<R: BufRead> IndexedRecords<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: fastq::io::Reader::new(inner),
            record: fastq::Record::default(),
        }
    }
}

impl<R: BufRead> Iterator for IndexedRecords<R> {
    type Item = Result<IndexedRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(0) => None,
            Ok(_) => Some(Ok(IndexedRecord::from_fastq(&self.record))),
            Err(e) => Some(Err(ParseError::Noodles(format!(
                "Failed to parse FASTQ record: {e}"
            )))),
        }
    }
}

/// Open a FASTQ file (or stdin for `-`), decompressing `.gz`/`.bgz` input
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_fastq(path: &Path) -> Result<IndexedRecords<Box<dyn BufRead>>, ParseError> {
    let inner: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(path)?;
        if is_gzipped(path) {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(IndexedRecords::new(inner))
}
