use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use tonal_history::HistoryStore;
use tonal_intake::{AlertStatus, ProcessOutcome};
use tonal_sentiment::{analyze_sentiment, SentimentResult};

use super::*;
use crate::analyze::{render_outcome, AnalyzeInput};
use crate::history::{render_list, render_stats};

fn fixed(text: &str, id: &str) -> SentimentResult {
    let mut result = analyze_sentiment(text);
    result.id = id.to_string();
    result.timestamp = Utc.with_ymd_and_hms(2024, 6, 2, 9, 15, 0).unwrap();
    result.language = Some("en".to_string());
    result
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["tonal-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_analyze_text() {
    let cli = Cli::try_parse_from(["tonal-cli", "analyze", "great coffee"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            text: Some(ref t),
            file: None,
            json: false,
            no_save: false,
        }) if t == "great coffee"
    ));
}

#[test]
fn parses_analyze_file_with_flags() {
    let cli = Cli::try_parse_from([
        "tonal-cli",
        "analyze",
        "--file",
        "survey.csv",
        "--json",
        "--no-save",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            text: None,
            file: Some(ref p),
            json: true,
            no_save: true,
        }) if p == &PathBuf::from("survey.csv")
    ));
}

#[test]
fn analyze_text_and_file_conflict() {
    let result = Cli::try_parse_from(["tonal-cli", "analyze", "hi", "--file", "a.txt"]);
    assert!(result.is_err());
}

#[test]
fn analyze_input_requires_a_source() {
    assert!(AnalyzeInput::from_args(None, None).is_err());
    assert_eq!(
        AnalyzeInput::from_args(Some("ok".to_string()), None).unwrap(),
        AnalyzeInput::Text("ok".to_string())
    );
    assert_eq!(
        AnalyzeInput::from_args(None, Some(PathBuf::from("a.txt"))).unwrap(),
        AnalyzeInput::File(PathBuf::from("a.txt"))
    );
}

#[test]
fn history_list_defaults_limit() {
    let cli = Cli::try_parse_from(["tonal-cli", "history", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::History {
            command: HistoryCommands::List { limit: 10 }
        })
    ));
}

#[test]
fn history_list_with_limit() {
    let cli = Cli::try_parse_from(["tonal-cli", "history", "list", "--limit", "3"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::History {
            command: HistoryCommands::List { limit: 3 }
        })
    ));
}

#[test]
fn history_delete_requires_id() {
    assert!(Cli::try_parse_from(["tonal-cli", "history", "delete"]).is_err());

    let cli = Cli::try_parse_from(["tonal-cli", "history", "delete", "abc123xyz"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::History {
            command: HistoryCommands::Delete { ref id }
        }) if id == "abc123xyz"
    ));
}

#[test]
fn history_export_output_is_optional() {
    let cli = Cli::try_parse_from(["tonal-cli", "history", "export"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::History {
            command: HistoryCommands::Export { output: None }
        })
    ));

    let cli =
        Cli::try_parse_from(["tonal-cli", "history", "export", "--output", "out.csv"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::History {
            command: HistoryCommands::Export { output: Some(_) }
        })
    ));
}

#[test]
fn history_stats_and_clear_parse() {
    assert!(matches!(
        Cli::try_parse_from(["tonal-cli", "history", "stats"]).unwrap().command,
        Some(Commands::History {
            command: HistoryCommands::Stats
        })
    ));
    assert!(matches!(
        Cli::try_parse_from(["tonal-cli", "history", "clear"]).unwrap().command,
        Some(Commands::History {
            command: HistoryCommands::Clear
        })
    ));
}

#[test]
fn render_outcome_reports_scores() {
    let outcome = ProcessOutcome {
        result: fixed("very bad service", "bad000001"),
        translation: None,
        alert: AlertStatus::Triggered,
    };
    let text = render_outcome(&outcome);
    assert!(text.contains("Sentiment:  negative (confidence 69%)"));
    assert!(text.contains("Rating:     2/5"));
    assert!(text.contains("Compound:   -0.67"));
    assert!(text.contains("negative 100%"));
    assert!(text.contains("Alert:      triggered (not delivered)"));
    assert!(text.contains("ID:         bad000001"));
}

#[test]
fn render_list_shows_newest_first() {
    let mut store = HistoryStore::in_memory(10);
    store.append(fixed("good food", "first0001")).unwrap();
    store.append(fixed("awful wait", "second001")).unwrap();

    let text = render_list(&store, 10);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].starts_with("second001"));
    assert!(lines[2].starts_with("first0001"));
}

#[test]
fn render_list_when_empty() {
    let store = HistoryStore::in_memory(10);
    assert!(render_list(&store, 5).starts_with("no analyses recorded yet"));
}

#[test]
fn render_stats_summarizes_counts() {
    let mut store = HistoryStore::in_memory(10);
    store.append(fixed("good", "a")).unwrap();
    store.append(fixed("bad", "b")).unwrap();
    store.append(fixed("great", "c")).unwrap();

    let text = render_stats(&store.stats().unwrap());
    assert!(text.contains("Total analyses:  3"));
    assert!(text.contains("Positive:        2"));
    assert!(text.contains("Negative:        1"));
}
