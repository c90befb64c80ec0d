//! Core data types for index demultiplexing.
//!
//! - [`SampleRecord`], [`SampleSheet`]: the expected samples and their index sequences
//! - [`IndexedRead`], [`ReadIndices`]: reads that expose the indices they were sequenced with
//! - [`IndexSlot`], [`MatchMode`], [`Classification`]: matcher configuration and results
//!
//! ## Sample identifiers
//!
//! A sample is identified by its 0-based position in the sheet. Reads that match no sample
//! are reported as [`Classification::Undetermined`], which maps to `-1` where a signed
//! identifier is needed.
//!
//! [`SampleRecord`]: sample::SampleRecord
//! [`SampleSheet`]: sample::SampleSheet
//! [`IndexedRead`]: read::IndexedRead
//! [`ReadIndices`]: read::ReadIndices
//! [`IndexSlot`]: types::IndexSlot
//! [`MatchMode`]: types::MatchMode
//! [`Classification`]: types::Classification
//! [`Classification::Undetermined`]: types::Classification::Undetermined

pub mod read;
pub mod sample;
pub mod types;
