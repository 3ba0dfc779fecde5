//! File-backed document store

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use super::document::Document;
use super::error::{StoreError, StoreResult};
use super::migrate;

/// File-backed store for the single workout document.
///
/// Every save rewrites the whole file through a temp-file rename, so a
/// concurrent load never observes a torn document. The store holds no lock
/// of its own; callers serialize whole load-mutate-save sequences.
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with an empty document if it does not exist.
    ///
    /// Idempotent; an existing file is left untouched.
    pub async fn ensure_initialized(&self) -> StoreResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::io(&self.path, e))?;
            }
        }

        self.save(&Document::default()).await
    }

    /// Read and deserialize the backing document, initializing it first if
    /// needed.
    ///
    /// A legacy flat data file is migrated and persisted before being
    /// returned, so the migration runs at most once per file.
    pub async fn load(&self) -> StoreResult<Document> {
        self.ensure_initialized().await?;

        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        let value: serde_json::Value = serde_json::from_str(&contents)
            .map_err(|e| StoreError::corrupt(&self.path, e))?;

        if migrate::is_legacy(&value) {
            let doc =
                migrate::migrate_legacy(value).map_err(|e| StoreError::corrupt(&self.path, e))?;
            self.save(&doc).await?;
            info!(path = %self.path.display(), "migrated legacy data file");
            return Ok(doc);
        }

        serde_json::from_value(value).map_err(|e| StoreError::corrupt(&self.path, e))
    }

    /// Serialize the full document and overwrite the backing file.
    pub async fn save(&self, doc: &Document) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| StoreError::write_failed(&self.path, std::io::Error::other(e)))?;

        // Write to a temp file, then atomic rename.
        let temp_file = self.path.with_extension("json.tmp");
        fs::write(&temp_file, json)
            .await
            .map_err(|e| StoreError::write_failed(&self.path, e))?;
        fs::rename(&temp_file, &self.path)
            .await
            .map_err(|e| StoreError::write_failed(&self.path, e))?;

        Ok(())
    }
}
