//! The history store and its JSON file persistence.

use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tonal_sentiment::SentimentResult;

use crate::error::HistoryError;
use crate::stats::HistoryStats;

/// Default cap on stored results.
pub const DEFAULT_MAX_ITEMS: usize = 100;

/// Results ordered most-recent-first, capped at `max_items`.
///
/// When backed by a file, every mutation rewrites the file. A failed write
/// leaves the in-memory state updated and is reported to the caller.
#[derive(Debug)]
pub struct HistoryStore {
    items: VecDeque<SentimentResult>,
    max_items: usize,
    path: Option<PathBuf>,
}

impl HistoryStore {
    /// An empty store that is never written to disk.
    #[must_use]
    pub fn in_memory(max_items: usize) -> Self {
        Self {
            items: VecDeque::new(),
            max_items: max_items.max(1),
            path: None,
        }
    }

    /// Open the store persisted at `path`.
    ///
    /// A missing file yields an empty store. An unreadable or malformed file
    /// is logged and also yields an empty store; it is overwritten on the
    /// next mutation.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>, max_items: usize) -> Self {
        let path = path.into();
        let max_items = max_items.max(1);

        let mut items = match load(&path) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load history; starting empty");
                VecDeque::new()
            }
        };
        items.truncate(max_items);

        tracing::debug!(path = %path.display(), count = items.len(), "history loaded");

        Self {
            items,
            max_items,
            path: Some(path),
        }
    }

    /// Insert `result` as the most recent entry, evicting the oldest entries
    /// beyond the cap.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the backing file cannot be written.
    pub fn append(&mut self, result: SentimentResult) -> Result<(), HistoryError> {
        self.items.push_front(result);
        self.items.truncate(self.max_items);
        self.persist()
    }

    /// Remove the entry with `id`. Returns whether an entry was removed.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the backing file cannot be written.
    pub fn delete(&mut self, id: &str) -> Result<bool, HistoryError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove every entry and the backing file.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`] if the backing file exists but cannot be
    /// removed. The entries are kept in that case.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        if let Some(path) = &self.path {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(HistoryError::Io {
                        path: path.clone(),
                        source,
                    })
                }
            }
        }
        self.items.clear();
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SentimentResult> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All entries, most recent first.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &SentimentResult> {
        self.items.iter()
    }

    /// Up to `limit` most recent entries.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<&SentimentResult> {
        self.items.iter().take(limit).collect()
    }

    /// Aggregate statistics, or `None` when the store is empty.
    #[must_use]
    pub fn stats(&self) -> Option<HistoryStats> {
        HistoryStats::compute(self.items.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn persist(&self) -> Result<(), HistoryError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let io_err = |source| HistoryError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let body = serde_json::to_vec_pretty(&self.items)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;

        tracing::debug!(path = %path.display(), count = self.items.len(), "history saved");
        Ok(())
    }
}

fn load(path: &Path) -> Result<VecDeque<SentimentResult>, HistoryError> {
    match fs::read(path) {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(VecDeque::new()),
        Err(source) => Err(HistoryError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
