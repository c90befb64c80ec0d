use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::engine::{DemuxConfig, IndexMatcher};

#[derive(Args)]
pub struct CheckArgs {
    /// Sample sheet (CSV or TSV): file, index1, [index2]
    #[arg(required = true)]
    pub sample_sheet: PathBuf,
}

pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = DemuxConfig::from_path(&args.sample_sheet)?;
    let matcher = IndexMatcher::new(&config)?;

    if verbose {
        eprintln!(
            "Loaded {} samples from {}",
            config.samples.len(),
            args.sample_sheet.display()
        );
    }

    match format {
        OutputFormat::Text => print_text_summary(&config, &matcher),
        OutputFormat::Json => print_json_summary(&config, &matcher)?,
        OutputFormat::Tsv => print_tsv_summary(&matcher),
    }

    Ok(())
}

fn print_text_summary(config: &DemuxConfig, matcher: &IndexMatcher) {
    println!("Sample Sheet");
    println!("{}", "=".repeat(60));
    if let Some(source) = &config.samples.source {
        println!("\nPath: {source}");
    }
    println!("  Samples: {}", matcher.sample_count());
    println!("  Index slot: {}", matcher.slot());
    println!("  Lookup mode: {}", matcher.mode());
    println!("  Shortest index: {}", matcher.shortest_index());
    println!("  Longest index: {}", matcher.longest_index());

    println!("\nSamples:");
    for (id, record) in config.samples.iter().enumerate() {
        println!("  {id:>4}  {}  {}", record.index(matcher.slot()), record.file);
    }
}

fn print_json_summary(config: &DemuxConfig, matcher: &IndexMatcher) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "source": config.samples.source,
        "sample_count": matcher.sample_count(),
        "slot": matcher.slot(),
        "mode": matcher.mode(),
        "shortest_index": matcher.shortest_index(),
        "longest_index": matcher.longest_index(),
        "samples": config.samples.records,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(matcher: &IndexMatcher) {
    println!("sample_count\tslot\tmode\tshortest_index\tlongest_index");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        matcher.sample_count(),
        matcher.slot(),
        matcher.mode(),
        matcher.shortest_index(),
        matcher.longest_index(),
    );
}
