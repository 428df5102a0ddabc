//! The `analyze` command.

use std::path::PathBuf;

use tokio::sync::Mutex;
use tonal_core::AppConfig;
use tonal_history::HistoryStore;
use tonal_intake::{AlertStatus, Intake, ProcessOutcome};

/// Where the feedback to analyze comes from.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AnalyzeInput {
    Text(String),
    File(PathBuf),
}

impl AnalyzeInput {
    /// # Errors
    ///
    /// Returns an error if neither text nor a file was given.
    pub(crate) fn from_args(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<Self> {
        match (text, file) {
            (_, Some(path)) => Ok(Self::File(path)),
            (Some(text), None) => Ok(Self::Text(text)),
            (None, None) => anyhow::bail!("provide feedback TEXT or --file PATH"),
        }
    }
}

/// Analyze feedback, print the outcome and record it unless `no_save`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the text is empty, or the
/// outbound clients cannot be built.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    input: AnalyzeInput,
    json: bool,
    no_save: bool,
) -> anyhow::Result<()> {
    let text = match input {
        AnalyzeInput::Text(text) => text,
        AnalyzeInput::File(path) => tonal_intake::extract_text(&path).await?,
    };

    let store = if no_save {
        HistoryStore::in_memory(1)
    } else {
        HistoryStore::open(&config.history_path, config.history_max_items)
    };
    let history = Mutex::new(store);

    let intake = Intake::from_config(config)?;
    let outcome = intake.process(&text, &history).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_outcome(&outcome));
    }
    Ok(())
}

fn percent(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}

fn alert_label(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::NotRequired => "not required",
        AlertStatus::Sent => "sent",
        AlertStatus::Triggered => "triggered (not delivered)",
    }
}

/// Human-readable report for one outcome.
pub(crate) fn render_outcome(outcome: &ProcessOutcome) -> String {
    let r = &outcome.result;
    let mut out = String::new();
    out.push_str(&format!(
        "Sentiment:  {} (confidence {})\n",
        r.overall_sentiment,
        percent(r.confidence)
    ));
    out.push_str(&format!("Rating:     {}/5\n", r.rating));
    out.push_str(&format!("Compound:   {:.2}\n", r.compound));
    out.push_str(&format!(
        "Breakdown:  positive {} | neutral {} | negative {}\n",
        percent(r.positive),
        percent(r.neutral),
        percent(r.negative)
    ));
    if let Some(translation) = &outcome.translation {
        if translation.translated_text != translation.original_text {
            out.push_str(&format!("Translated: {}\n", translation.translated_text));
        }
    }
    if let Some(language) = &r.language {
        out.push_str(&format!("Language:   {language}\n"));
    }
    out.push_str(&format!("Alert:      {}\n", alert_label(outcome.alert)));
    out.push_str(&format!("ID:         {}\n", r.id));
    out
}
