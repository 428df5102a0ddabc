mod analyze;
mod history;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::history::HistoryCommands;

#[derive(Debug, Parser)]
#[command(name = "tonal-cli")]
#[command(about = "Score customer feedback sentiment and manage analysis history")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a piece of feedback text or a CSV/TXT file
    Analyze {
        /// Feedback text to analyze
        text: Option<String>,
        /// Read feedback from a .csv or .txt file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Print the full outcome as JSON
        #[arg(long)]
        json: bool,
        /// Do not record the result in history
        #[arg(long)]
        no_save: bool,
    },
    /// Inspect or manage recorded analyses
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = tonal_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Analyze {
            text,
            file,
            json,
            no_save,
        }) => {
            let input = analyze::AnalyzeInput::from_args(text, file)?;
            analyze::run_analyze(&config, input, json, no_save).await?;
        }
        Some(Commands::History { command }) => history::run_history(&config, command)?,
        None => println!("tonal-cli ready; run `tonal-cli --help` for commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
