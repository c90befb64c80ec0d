//! Parsers for the inputs of a demultiplexing run.
//!
//! This module provides parsers for:
//!
//! - **Sample sheets**: CSV/TSV files listing each sample's output file and index sequences
//! - **FASTQ files**: plain or gzip-compressed reads whose Illumina-style comments carry the
//!   index sequences (`@READ 1:N:0:ACGTACGT+GGTTAACC`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use index_demux::parsing::sample_sheet::parse_sample_sheet_file;
//! use index_demux::parsing::fastq::open_fastq;
//! use std::path::Path;
//!
//! let sheet = parse_sample_sheet_file(Path::new("samples.csv")).unwrap();
//! for result in open_fastq(Path::new("reads.fastq.gz")).unwrap() {
//!     let read = result.unwrap();
//!     println!("{} {:?}", read.name, read.indices);
//! }
//! ```
//!
//! ## Sample sheet columns
//!
//! | Column | Description | Required |
//! |--------|-------------|----------|
//! | file   | Output file / sample identifier | Yes |
//! | index1 | First index (i7) | One of index1/index2 |
//! | index2 | Second index (i5) | One of index1/index2 |

pub mod fastq;
pub mod sample_sheet;
