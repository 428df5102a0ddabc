//! Pulling feedback text out of uploaded files.

use std::path::Path;

use crate::error::IntakeError;

/// Extracted text must be longer than this to be worth scoring.
pub const MIN_EXTRACTED_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Csv,
    PlainText,
}

fn classify(path: &Path) -> Option<FileKind> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("csv") => Some(FileKind::Csv),
        None | Some("txt" | "text") => Some(FileKind::PlainText),
        _ => None,
    }
}

/// Join the last column of every data row into one block of text.
///
/// The first line is treated as a header. Quotes are stripped and empty
/// cells skipped; rows are joined with `". "`.
#[must_use]
pub fn csv_feedback_text(contents: &str) -> String {
    contents
        .lines()
        .skip(1)
        .filter_map(|row| row.rsplit(',').next())
        .map(|cell| cell.replace('"', "").trim().to_owned())
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join(". ")
}

/// Read `path` and return the feedback text it contains.
///
/// # Errors
///
/// - [`IntakeError::UnsupportedFile`] for anything other than CSV or plain text.
/// - [`IntakeError::Io`] if the file cannot be read.
/// - [`IntakeError::InsufficientText`] if no more than
///   [`MIN_EXTRACTED_CHARS`] characters were extracted.
pub async fn extract_text(path: &Path) -> Result<String, IntakeError> {
    let kind = classify(path).ok_or_else(|| IntakeError::UnsupportedFile(path.to_path_buf()))?;

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let text = match kind {
        FileKind::Csv => csv_feedback_text(&contents),
        FileKind::PlainText => contents,
    };

    if text.chars().count() <= MIN_EXTRACTED_CHARS {
        return Err(IntakeError::InsufficientText(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), chars = text.len(), "extracted file text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use uuid::Uuid;

    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tonal-intake-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn classify_by_extension() {
        assert_eq!(classify(Path::new("a.csv")), Some(FileKind::Csv));
        assert_eq!(classify(Path::new("a.CSV")), Some(FileKind::Csv));
        assert_eq!(classify(Path::new("notes.txt")), Some(FileKind::PlainText));
        assert_eq!(classify(Path::new("README")), Some(FileKind::PlainText));
        assert_eq!(classify(Path::new("scan.pdf")), None);
        assert_eq!(classify(Path::new("photo.png")), None);
    }

    #[test]
    fn csv_takes_last_column_after_header() {
        let csv = "id,date,comment\n1,2024-01-01,\"Great service\"\n2,2024-01-02,\n3,2024-01-03,Awful food\n";
        assert_eq!(csv_feedback_text(csv), "Great service. Awful food");
    }

    #[test]
    fn csv_header_only_is_empty() {
        assert_eq!(csv_feedback_text("comment\n"), "");
    }

    #[tokio::test]
    async fn extracts_plain_text() {
        let path = temp_file("feedback.txt", "The staff were really friendly.");
        let text = extract_text(&path).await.expect("text");
        assert_eq!(text, "The staff were really friendly.");
    }

    #[tokio::test]
    async fn extracts_csv() {
        let path = temp_file("survey.csv", "name,feedback\nann,loved it all\nbob,\"not good\"\n");
        let text = extract_text(&path).await.expect("text");
        assert_eq!(text, "loved it all. not good");
    }

    #[tokio::test]
    async fn short_text_is_rejected() {
        let path = temp_file("tiny.txt", "ok thanks");
        let err = extract_text(&path).await.unwrap_err();
        assert!(matches!(err, IntakeError::InsufficientText(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unsupported_type_is_rejected_before_reading() {
        let err = extract_text(Path::new("/nonexistent/scan.pdf")).await.unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedFile(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = extract_text(Path::new("/nonexistent/feedback.txt")).await.unwrap_err();
        assert!(matches!(err, IntakeError::Io { .. }), "got {err:?}");
    }
}
