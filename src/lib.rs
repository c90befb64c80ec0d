//! # index-demux
//!
//! A library for assigning sequencing reads to samples by their index (barcode) sequences.
//!
//! Multiplexed sequencing runs tag every read with a short index identifying the sample it
//! came from. `index-demux` compares each read's index against a sample sheet of expected
//! indices and reports the matching sample, or `Undetermined` when nothing matches.
//!
//! ## Features
//!
//! - **Dense lookup**: Sheets with one index length (at most 14 bases) are matched with a
//!   single table read per index, independent of the number of samples
//! - **Longest-prefix fallback**: Sheets with mixed or long index lengths are matched by the
//!   longest exact prefix of the read's index
//! - **Strict sheet validation**: Mixed index slots, missing indices and ambiguous `N` bases are
//!   rejected up front, while odd reads are simply reported as undetermined
//! - **Shareable**: A built matcher is immutable and can be used from many threads
//!
//! ## Example
//!
//! ```rust
//! use index_demux::{Classification, DemuxConfig, IndexMatcher, ReadIndices};
//! use index_demux::core::sample::{SampleRecord, SampleSheet};
//!
//! let sheet = SampleSheet::new(vec![
//!     SampleRecord::new("sample1.fq", "ACGTACGT", ""),
//!     SampleRecord::new("sample2.fq", "TTGCAAGC", ""),
//! ]);
//! let matcher = IndexMatcher::new(&DemuxConfig::new(sheet)).unwrap();
//!
//! let read = ReadIndices::from_description(b"1:N:0:ACGTACGT");
//! assert_eq!(matcher.classify(&read), Classification::Sample(0));
//!
//! let read = ReadIndices::from_description(b"1:N:0:GGGGGGGG");
//! assert_eq!(matcher.classify(&read).as_signed(), -1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sample sheet, read and result types
//! - [`matching`]: Index encoding, sheet validation and the matcher
//! - [`parsing`]: Sample sheet and FASTQ parsers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::read::{IndexedRead, ReadIndices};
pub use crate::core::sample::{SampleRecord, SampleSheet};
pub use crate::core::types::*;
pub use matching::engine::{DemuxConfig, IndexMatcher};
pub use matching::validation::SheetError;
