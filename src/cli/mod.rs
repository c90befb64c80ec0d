//! Command-line interface for index-demux.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **check**: Validate a sample sheet and report how its indices will be matched
//! - **classify**: Assign every read of a FASTQ file to a sample
//!
//! ## Usage
//!
//! ```text
//! # Validate a sample sheet
//! index-demux check samples.csv
//!
//! # Count reads per sample
//! index-demux classify samples.csv reads.fastq.gz
//!
//! # Per-read assignments as TSV, reading from stdin
//! zcat reads.fastq.gz | index-demux classify samples.csv - --assignments --format tsv
//! ```

use clap::{Parser, Subcommand};

pub mod check;
pub mod classify;

#[derive(Parser)]
#[command(name = "index-demux")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Assign sequencing reads to samples by their index sequences")]
#[command(
    long_about = "index-demux matches the index sequence of each read against a sample sheet.\n\nSheets whose indices share one length (at most 14 bases) are matched through a dense lookup table; any other sheet is matched by longest exact prefix. Reads that match no sample are reported as Undetermined."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a sample sheet and show the selected lookup mode
    Check(check::CheckArgs),

    /// Classify the reads of a FASTQ file
    Classify(classify::ClassifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
