use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use conductor::{logging, ConductorConfig, QueryForwarder, SubmitOptions};

#[derive(Parser)]
#[command(name = "conductor")]
#[command(author, version, about = "Ask a chat model one question, no memory", long_about = None)]
struct Cli {
    /// Path to a conductor.toml file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON result.
    #[arg(long)]
    pretty: bool,

    /// The question to ask. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConductorConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ConductorConfig::default(),
    };

    logging::init(&config.general.log_level)?;

    let forwarder = QueryForwarder::from_env(&config.llm)?;
    let query = cli.query.join(" ");
    let result = forwarder.submit(&query, &SubmitOptions::new()).await?;

    let out = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{out}");

    Ok(())
}
