use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use jaundice::config::Config;
use jaundice::lexicon::Lexicons;
use jaundice::morph::DictionaryMorph;
use jaundice::output;
use jaundice::pipeline::batch;
use jaundice::sanitize::inosmi::InosmiSanitizer;
use jaundice::web::{self, AppState};

/// Jaundice: charged-vocabulary scoring for news articles.
///
/// Fetches each article, extracts its body text, and reports what share
/// of its words comes from the positive and negative charged lexicons.
#[derive(Parser)]
#[command(name = "jaundice", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more article URLs and print their scores
    Analyze {
        /// Article URLs to process
        #[arg(required = true)]
        urls: Vec<String>,

        /// Per-article deadline in seconds (overrides JAUNDICE_TIMEOUT_SECS)
        #[arg(long)]
        timeout: Option<f64>,
    },

    /// Run the HTTP endpoint
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on
        #[arg(long, default_value = "5000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jaundice=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let lexicons = Lexicons::load(&config.positive_words_path, &config.negative_words_path)?;
    let morph = match &config.lemma_dict_path {
        Some(path) => DictionaryMorph::load(path)?,
        None => {
            info!("No lemma dictionary configured, normalization lowercases only");
            DictionaryMorph::empty()
        }
    };

    match cli.command {
        Commands::Analyze { urls, timeout } => {
            let deadline = timeout
                .map(Duration::from_secs_f64)
                .unwrap_or(config.process_timeout);

            let started = Instant::now();
            let results = batch::process_batch(
                &InosmiSanitizer,
                &morph,
                &lexicons,
                &urls,
                deadline,
            )
            .await?;

            output::print_results(&results);
            println!("{:.2} sec", started.elapsed().as_secs_f64());
        }

        Commands::Serve { bind, port } => {
            let state = AppState {
                config: Arc::new(config),
                lexicons: Arc::new(lexicons),
                morph: Arc::new(morph),
                sanitizer: Arc::new(InosmiSanitizer),
            };
            web::run_server(state, &bind, port).await?;
        }
    }

    Ok(())
}
