use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation API error: {0}")]
    TranslationApi(String),

    #[error("text is empty")]
    EmptyText,

    #[error("unsupported file type: {0}")]
    UnsupportedFile(PathBuf),

    #[error("not enough text extracted from {0}")]
    InsufficientText(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
