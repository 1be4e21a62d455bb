//! techbase CLI - technical-basis table extraction
//!
//! Reads the mortality and lookup factor tables out of a workbook and writes
//! them, with a metadata record, as JSON files.

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use techbase::{ExtractOptions, JsonFormat};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Extract mortality and lookup factor tables from a workbook into JSON
#[derive(Parser)]
#[command(
    name = "techbase",
    author = "iyulab",
    version,
    about = "Extract technical-basis tables from a workbook",
    long_about = "techbase - extract the mortality table and lookup factor table from a \
                  spreadsheet workbook.\n\n\
                  Writes mortality-table.json, lookup-factor-table.json and metadata.json \
                  into the output directory."
)]
struct Cli {
    /// Source workbook path
    #[arg(long, default_value = "data/source/technical-bases.xlsm")]
    xlsm: PathBuf,

    /// Output directory (created if missing)
    #[arg(long, default_value = "data/technical/v2025")]
    outdir: PathBuf,

    /// Output compact JSON (no indentation)
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let options = ExtractOptions::new().with_json_format(format);
    debug!(
        source = %cli.xlsm.display(),
        outdir = %cli.outdir.display(),
        "starting extraction"
    );

    let pb = create_spinner("Reading workbook...");
    let bases = match techbase::extract_file(&cli.xlsm, &options) {
        Ok(bases) => bases,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    pb.set_message("Writing tables...");
    let written = techbase::write_outputs(&bases, &cli.outdir, options.json_format);
    pb.finish_and_clear();
    written?;

    println!("Wrote {} mortality rows", bases.mortality.len());
    println!("Wrote {} lookup rows", bases.lookup.len());

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
