//! Textstat CLI - Locale-Sensitive Text Statistics
//!
//! Reads a text document, analyzes it under an input locale, and writes an
//! HTML statistics report labeled in an output locale.

use clap::Parser;
use log::{error, info};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use textstat::{render_report, Analysis, FormatProvider, Locale, Result};

#[derive(Parser)]
#[command(name = "textstat")]
#[command(version)]
#[command(about = "Locale-sensitive text statistics", long_about = None)]
struct Cli {
    /// Locale of the input document, e.g. "en_US"
    input_locale: String,

    /// Locale of the report labels, e.g. "ru_RU"
    output_locale: String,

    /// Input text file
    input: PathBuf,

    /// Output HTML file
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input_locale = Locale::parse(&cli.input_locale)?;
    let output_locale = Locale::parse(&cli.output_locale)?;
    let provider = FormatProvider::new(input_locale);

    let reader = BufReader::new(File::open(&cli.input)?);
    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;
    info!("read {} lines from {}", lines.len(), cli.input.display());

    let analysis = Analysis::of_lines(&lines, &provider);
    let report = render_report(
        &analysis,
        &provider,
        &output_locale,
        &cli.input.display().to_string(),
    );
    fs::write(&cli.output, report)?;
    info!("report written to {}", cli.output.display());
    Ok(())
}
