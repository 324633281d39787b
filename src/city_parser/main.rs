//! Export administrative subdivisions and metro stations of cities from
//! Wikidata into a workbook with one sheet per city.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use city_parser::config::Config;
use city_parser::pipeline::{run_pipeline, Outcome};

#[derive(Parser, Debug)]
#[command(name = "city-parser")]
#[command(about = "Export city subdivisions and metro stations from Wikidata to XLSX")]
struct Args {
    /// Optional TOML config file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// City list, one name per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output workbook
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// SPARQL endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Label language tag
    #[arg(long)]
    language: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Hide the query spinner
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)?,
            None => Config::default(),
        };
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let show_progress = !args.quiet;
    let config = args.into_config()?;

    info!("City Parser");
    info!("Input: {}", config.input.display());

    match run_pipeline(&config, show_progress).await? {
        Outcome::NoCities => println!("Список городов пуст."),
        Outcome::Written { path, sheets } => {
            info!("{} sheets written", sheets);
            println!("Файл сохранен: {}", path.display());
        }
    }

    Ok(())
}
