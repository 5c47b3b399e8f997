//! callsight CLI
//!
//! Analyzes one call transcript per invocation and appends the result to a
//! CSV file. Runs offline when no API key is configured.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use secrecy::SecretString;

use callsight_core::samples::SAMPLE_TRANSCRIPTS;
use callsight_pipeline::{AnalysisPipeline, PipelineConfig};
use callsight_store::CsvStore;

#[derive(Debug, Parser)]
#[command(name = "callsight")]
#[command(about = "Summarize a customer call transcript and score its sentiment")]
struct Cli {
    /// Transcript text; reads stdin when no input option is given
    transcript: Option<String>,

    /// Read the transcript from a file
    #[arg(long, conflicts_with = "transcript")]
    file: Option<PathBuf>,

    /// Use one of the built-in sample transcripts (1-based)
    #[arg(long, conflicts_with_all = ["transcript", "file"])]
    sample: Option<usize>,

    /// List the built-in sample transcripts and exit
    #[arg(long)]
    list_samples: bool,

    /// CSV file the result is appended to
    #[arg(long, default_value = "call_analysis.csv")]
    output: PathBuf,

    /// Model name for the hosted provider
    #[arg(long)]
    model: Option<String>,

    /// Groq API key; omit to run offline
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Force offline mode even when an API key is configured
    #[arg(long)]
    offline: bool,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    if cli.list_samples {
        for (i, sample) in SAMPLE_TRANSCRIPTS.iter().enumerate() {
            println!("{:2}. {}", i + 1, sample);
        }
        return Ok(());
    }

    let transcript = read_transcript(&cli)?;

    let api_key = if cli.offline {
        None
    } else {
        cli.api_key.map(SecretString::new)
    };

    let config = PipelineConfig {
        api_key,
        model: cli.model,
        ..PipelineConfig::default()
    };
    let pipeline = AnalysisPipeline::new(config);
    if pipeline.is_offline() {
        tracing::info!("No API key configured, running in offline mode");
    }

    let record = pipeline.analyze(&transcript).await?;

    let store = CsvStore::new(&cli.output);
    store
        .append(&record)
        .with_context(|| format!("failed to save the result to {}", cli.output.display()))?;

    println!("Summary:   {}", record.summary);
    println!("Sentiment: {}", record.sentiment);
    println!("Source:    {}", record.source);
    println!("Saved to {}", cli.output.display());

    Ok(())
}

/// Resolve the transcript from the chosen input option, or stdin.
fn read_transcript(cli: &Cli) -> anyhow::Result<String> {
    if let Some(text) = &cli.transcript {
        return Ok(text.clone());
    }

    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    if let Some(index) = cli.sample {
        let sample = index
            .checked_sub(1)
            .and_then(|i| SAMPLE_TRANSCRIPTS.get(i))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "sample index must be between 1 and {}",
                    SAMPLE_TRANSCRIPTS.len()
                )
            })?;
        return Ok((*sample).to_string());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read transcript from stdin")?;
    Ok(buffer)
}
