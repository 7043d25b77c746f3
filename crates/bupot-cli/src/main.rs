//! CLI application for SPT bukti pemotongan extraction.

use std::fs::{self, File};
use std::path::PathBuf;

use clap::Parser;
use console::style;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use bupot_core::{BupotError, Pipeline};

/// Extract structured fields from an SPT bukti pemotongan PDF
#[derive(Parser)]
#[command(name = "bupot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(default_value = "bupot.pdf")]
    input: PathBuf,

    /// File receiving the normalized document text
    #[arg(long, default_value = "raw_result.txt")]
    raw_output: PathBuf,

    /// File receiving the structured KEY: value result
    #[arg(long, default_value = "structured_result.txt")]
    structured_output: PathBuf,

    /// Also print the field record as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if !cli.input.exists() {
        anyhow::bail!("Input file not found: {}", cli.input.display());
    }

    debug!("Processing file: {}", cli.input.display());

    let data = fs::read(&cli.input).map_err(BupotError::InputUnavailable)?;

    // Both artifacts are truncated up front; a conversion failure leaves them
    // empty, never stale.
    let mut raw_sink = File::create(&cli.raw_output).map_err(BupotError::OutputWrite)?;
    let mut structured_sink =
        File::create(&cli.structured_output).map_err(BupotError::OutputWrite)?;

    let pipeline = Pipeline::new();
    let fields = pipeline.run(&data, &mut raw_sink, &mut structured_sink)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
    }

    println!(
        "{} {} and {} saved successfully.",
        style("✓").green(),
        cli.raw_output.display(),
        cli.structured_output.display()
    );

    Ok(())
}
