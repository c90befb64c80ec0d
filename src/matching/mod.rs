//! Index matching: sample sheet validation, lookup construction and read classification.
//!
//! - [`IndexMatcher`]: built once from a [`DemuxConfig`], then classifies reads
//! - [`SheetError`]: configuration problems found while building a matcher
//! - [`encoding`]: 2-bit packing of index sequences
//!
//! ## Lookup modes
//!
//! When every index uses the same slot, has the same length `L` and `L <= 14`, the matcher
//! allocates a dense table of `4^L` cells addressed by the 2-bit encoding of the index. A read
//! is classified by encoding its first `L` index bases and reading one cell.
//!
//! Any other valid sheet uses a map from index sequence to sample. Prefixes of the read's index
//! are tried from the longest sheet length down to the shortest, and the longest exact hit wins.
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
//! let read = ReadIndices::from_description(b"1:N:0:TTGCAAGC");
//! assert_eq!(matcher.classify(&read), Classification::Sample(1));
//! ```
//!
//! [`IndexMatcher`]: engine::IndexMatcher
//! [`DemuxConfig`]: engine::DemuxConfig
//! [`SheetError`]: validation::SheetError

pub mod encoding;
pub mod engine;
pub mod summary;
pub mod validation;
