use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::core::sample::SampleSheet;
use crate::core::types::{Classification, UNDETERMINED_NAME};
use crate::matching::engine::{DemuxConfig, IndexMatcher};
use crate::matching::summary::ClassificationCounts;
use crate::parsing::fastq::open_fastq;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Sample sheet (CSV or TSV): file, index1, [index2]
    #[arg(required = true)]
    pub sample_sheet: PathBuf,

    /// FASTQ input (plain or .gz); use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Also report the sample assigned to each read
    #[arg(long)]
    pub assignments: bool,
}

/// One read's assignment
#[derive(Debug, serde::Serialize)]
struct Assignment<'a> {
    read: &'a str,
    sample_id: i64,
    sample: &'a str,
}

pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = DemuxConfig::from_path(&args.sample_sheet)?;
    let matcher = IndexMatcher::new(&config)?;

    if verbose {
        eprintln!(
            "Matching {} samples on {} ({} mode)",
            matcher.sample_count(),
            matcher.slot(),
            matcher.mode()
        );
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut counts = ClassificationCounts::new(matcher.sample_count());

    if args.assignments && matches!(format, OutputFormat::Tsv) {
        writeln!(out, "read\tsample_id\tsample")?;
    }

    for result in open_fastq(&args.input)? {
        let read = result?;
        let classification = matcher.classify(&read);
        counts.add(classification);

        if !args.assignments {
            continue;
        }

        let sample = sample_name(&config.samples, classification);
        match format {
            OutputFormat::Text | OutputFormat::Tsv => writeln!(
                out,
                "{}\t{}\t{}",
                read.name,
                classification.as_signed(),
                sample
            )?,
            // One object per line, followed by the summary line
            OutputFormat::Json => {
                let assignment = Assignment {
                    read: &read.name,
                    sample_id: classification.as_signed(),
                    sample,
                };
                serde_json::to_writer(&mut out, &assignment)?;
                writeln!(out)?;
            }
        }
    }

    debug!(
        total = counts.total(),
        undetermined = counts.undetermined,
        "Finished classifying reads"
    );

    match format {
        OutputFormat::Text => write_text_counts(&mut out, &config.samples, &counts)?,
        OutputFormat::Json => {
            write_json_counts(&mut out, &config.samples, &counts, &matcher, args.assignments)?;
        }
        OutputFormat::Tsv => {
            if !args.assignments {
                write_tsv_counts(&mut out, &config.samples, &counts)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn sample_name(sheet: &SampleSheet, classification: Classification) -> &str {
    classification
        .sample()
        .and_then(|id| sheet.get(id))
        .map_or(UNDETERMINED_NAME, |record| record.file.as_str())
}

fn write_text_counts(
    out: &mut impl Write,
    sheet: &SampleSheet,
    counts: &ClassificationCounts,
) -> anyhow::Result<()> {
    writeln!(out, "Classification Results")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "\nTotal reads: {}", counts.total())?;

    for row in counts.rows(sheet) {
        writeln!(
            out,
            "  {:<30} {:>12} ({:.2}%)",
            row.file,
            row.reads,
            row.fraction * 100.0
        )?;
    }
    Ok(())
}

fn write_json_counts(
    out: &mut impl Write,
    sheet: &SampleSheet,
    counts: &ClassificationCounts,
    matcher: &IndexMatcher,
    line_delimited: bool,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "mode": matcher.mode(),
        "slot": matcher.slot(),
        "total_reads": counts.total(),
        "undetermined": counts.undetermined,
        "samples": counts.rows(sheet),
    });

    // The summary closes the assignment stream as its final line
    if line_delimited {
        serde_json::to_writer(&mut *out, &output)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &output)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_tsv_counts(
    out: &mut impl Write,
    sheet: &SampleSheet,
    counts: &ClassificationCounts,
) -> anyhow::Result<()> {
    writeln!(out, "sample\treads\tfraction")?;
    for row in counts.rows(sheet) {
        writeln!(out, "{}\t{}\t{:.4}", row.file, row.reads, row.fraction)?;
    }
    Ok(())
}
