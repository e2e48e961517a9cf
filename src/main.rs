use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use text_analyzer::config::{AnalysisConfig, OutputFormat};
use text_analyzer::output;
use text_analyzer::pipeline::analysis;
use text_analyzer::ranking::DEFAULT_TOP_K;

/// Text analysis through TF-IDF computation.
///
/// Reads a text file or a directory of `.txt` files (one document each) and
/// prints the top-K words by corpus TF, IDF and TF-IDF.
#[derive(Parser)]
#[command(name = "text-analyzer", version, about)]
struct Cli {
    /// Input text file, or a directory of .txt files
    #[arg(short, long)]
    input: PathBuf,

    /// Number of top-scoring words to show per listing
    #[arg(short = 'k', long = "top-k", alias = "top_k", default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Also rank one document's TF-IDF against the corpus (e.g. 18 or 18.txt)
    #[arg(long = "tfidf", value_name = "DOC_ID")]
    tfidf: Option<String>,

    /// Print the report as JSON instead of colored listings
    #[arg(long)]
    json: bool,

    /// Log debug detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up structured logging on stderr; stdout carries only the report
    let default_filter = if cli.verbose {
        "text_analyzer=debug"
    } else {
        "text_analyzer=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let config = AnalysisConfig::new(cli.input)
        .with_top_k(cli.top_k)
        .with_compare(cli.tfidf)
        .with_output_format(format);
    debug!(?config, "Parsed options");

    let report = analysis::run(&config)
        .with_context(|| format!("Analysis of {} failed", config.input.display()))?;

    match config.output_format {
        OutputFormat::Text => output::terminal::display_report(&report),
        OutputFormat::Json => {
            let json = output::json::render(&report).context("Could not serialize report")?;
            println!("{json}");
        }
    }

    Ok(())
}
