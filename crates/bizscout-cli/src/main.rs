mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::search::{OutputFormat, SearchArgs};

#[derive(Debug, Parser)]
#[command(name = "bizscout-cli")]
#[command(about = "Find local businesses and export them as JSON or CSV")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for businesses of a category around a location
    Search {
        /// Free-text location (e.g., "Austin, TX")
        #[arg(long)]
        location: String,
        /// Business category (e.g., "Bakery")
        #[arg(long)]
        category: String,
        /// Maximum number of results (clamped to 1..=1000)
        #[arg(long, default_value_t = bizscout_core::DEFAULT_LIMIT)]
        limit: u32,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Write output to this file instead of stdout
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = bizscout_core::load_app_config_from_env()?;

    // stdout is reserved for the result document.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            location,
            category,
            limit,
            format,
            output,
        } => {
            search::run_search(
                &config,
                SearchArgs {
                    location,
                    category,
                    limit,
                    format,
                    output,
                },
            )
            .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
