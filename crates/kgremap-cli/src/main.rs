//! kgremap CLI
//!
//! Converts a KB2E-style dataset directory (`entity2id.txt`,
//! `relation2id.txt`, `train.txt`, `valid.txt`, `test.txt`) into one
//! HolE-layout artifact.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use kgremap_core::{sink, DatasetLayout};

#[derive(Parser)]
#[command(name = "kgremap")]
#[command(
    author,
    version,
    about = "Convert KB2E tab-separated data into a single HolE-layout dataset file"
)]
struct Cli {
    /// Input data directory (entity2id.txt, relation2id.txt, train/valid/test.txt)
    #[arg(long = "in-dir", alias = "inDir", value_name = "DIR")]
    in_dir: PathBuf,

    /// Output path; `.cbor` and `.bin` select CBOR and bincode, anything else is JSON
    #[arg(long, value_name = "FILE")]
    out: PathBuf,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kgremap=info,kgremap_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    eprintln!(
        "{} {}",
        "Converting".green().bold(),
        cli.in_dir.display()
    );

    let layout = DatasetLayout::in_dir(&cli.in_dir);
    let dataset = kgremap_core::Dataset::build(&layout)
        .with_context(|| format!("failed to read dataset from {}", cli.in_dir.display()))?;
    eprintln!("  {} {}", "→".cyan(), dataset.summary());

    let format = sink::write_dataset(&dataset, &cli.out)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    eprintln!(
        "{} {} ({format})",
        "wrote".green().bold(),
        cli.out.display().to_string().bold()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    run(&cli)
}
