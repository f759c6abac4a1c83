mod commands;
mod fetch;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tripcheck")]
#[command(version, about = "Quality gate for the Seattle bike-trip open dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the dataset and run the quality checks against it
    Check {
        /// Dataset source: an http(s) URL or a local CSV file path.
        /// Defaults to the Seattle Open Data trips endpoint.
        source: Option<String>,

        /// Number of leading rows to keep before validation
        #[arg(short, long, default_value_t = 100)]
        sample_size: usize,

        /// Use the corrected check semantics instead of the legacy ones
        #[arg(long)]
        strict: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the expected trip dataset columns
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Check {
            source,
            sample_size,
            strict,
            format,
        } => commands::check::execute(source.as_deref(), sample_size, strict, &format).await,

        Commands::Schema => commands::schema::execute(),
    }
}
