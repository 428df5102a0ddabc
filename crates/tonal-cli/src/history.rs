//! History command handlers for the CLI.
//!
//! All subcommands operate directly on the JSON history file named by
//! `TONAL_HISTORY_PATH`.

use std::path::PathBuf;

use clap::Subcommand;
use tonal_core::AppConfig;
use tonal_history::{export_csv, HistoryStats, HistoryStore};

/// Sub-commands available under `history`.
#[derive(Debug, Subcommand)]
pub enum HistoryCommands {
    /// List the most recent analyses
    List {
        /// Maximum number of entries to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Show aggregate statistics over the history
    Stats,
    /// Delete one analysis by id
    Delete {
        /// Id of the analysis to delete
        id: String,
    },
    /// Delete every recorded analysis
    Clear,
    /// Export the history as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Dispatch a `history` subcommand.
///
/// # Errors
///
/// Returns an error if the history file cannot be written.
pub(crate) fn run_history(config: &AppConfig, command: HistoryCommands) -> anyhow::Result<()> {
    let mut store = HistoryStore::open(&config.history_path, config.history_max_items);

    match command {
        HistoryCommands::List { limit } => print!("{}", render_list(&store, limit)),
        HistoryCommands::Stats => match store.stats() {
            Some(stats) => print!("{}", render_stats(&stats)),
            None => println!("no analyses recorded yet"),
        },
        HistoryCommands::Delete { id } => {
            if store.delete(&id)? {
                println!("deleted {id}");
            } else {
                anyhow::bail!("no analysis with id '{id}'");
            }
        }
        HistoryCommands::Clear => {
            let count = store.len();
            store.clear()?;
            println!("cleared {count} analyses");
        }
        HistoryCommands::Export { output } => {
            let csv = export_csv(store.items());
            match output {
                Some(path) => {
                    std::fs::write(&path, csv)?;
                    tracing::info!(path = %path.display(), rows = store.len(), "history exported");
                    println!("exported {} analyses to {}", store.len(), path.display());
                }
                None => println!("{csv}"),
            }
        }
    }

    Ok(())
}

/// Truncate `text` to `max` characters, marking the cut.
fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}

pub(crate) fn render_list(store: &HistoryStore, limit: usize) -> String {
    let entries = store.recent(limit);
    if entries.is_empty() {
        return "no analyses recorded yet; run `analyze` first\n".to_string();
    }

    let mut out = format!(
        "{:<11}{:<18}{:<10}{:<8}TEXT\n",
        "ID", "WHEN", "LABEL", "RATING"
    );
    for r in entries {
        out.push_str(&format!(
            "{:<11}{:<18}{:<10}{:<8}{}\n",
            r.id,
            r.timestamp.format("%Y-%m-%d %H:%M"),
            r.overall_sentiment.as_str(),
            r.rating,
            preview(&r.text, 50)
        ));
    }
    out
}

pub(crate) fn render_stats(stats: &HistoryStats) -> String {
    let counts = &stats.sentiment_counts;
    format!(
        "Total analyses:  {}\n\
         Positive:        {}\n\
         Neutral:         {}\n\
         Negative:        {}\n\
         Average rating:  {:.1}\n\
         Avg confidence:  {:.0}%\n",
        stats.total_analyses,
        counts.positive,
        counts.neutral,
        counts.negative,
        stats.avg_rating,
        stats.avg_confidence * 100.0,
    )
}
