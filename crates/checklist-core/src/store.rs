use crate::error::{ChecklistError, Result};
use crate::paths;
use crate::types::Row;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File-level facts about a stored ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerMeta {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// One CSV file per blueprint title, all under a single directory.
///
/// Every mutation rewrites the whole file. There is no locking, so two
/// writers racing on the same title lose one update (last write wins).
#[derive(Debug, Clone)]
pub struct LedgerStore {
    dir: PathBuf,
}

impl LedgerStore {
    /// The directory is not created until the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, title: &str) -> Result<PathBuf> {
        paths::validate_title(title)?;
        Ok(paths::ledger_path(&self.dir, title))
    }

    pub fn exists(&self, title: &str) -> Result<bool> {
        Ok(self.path_for(title)?.is_file())
    }

    /// All rows, header first. Ragged rows are returned as-is.
    pub fn read(&self, title: &str) -> Result<Vec<Row>> {
        let path = self.existing_path(title)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_owned).collect());
        }
        Ok(rows)
    }

    pub fn write(&self, title: &str, rows: &[Row]) -> Result<()> {
        let path = self.path_for(title)?;
        if !self.dir.exists() {
            tracing::debug!(dir = %self.dir.display(), "creating ledger directory");
            crate::io::ensure_dir(&self.dir)?;
        }

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        for row in rows {
            writer.write_record(row)?;
        }
        let data = writer.into_inner().map_err(|e| e.into_error())?;

        crate::io::atomic_write(&path, &data)?;
        tracing::debug!(title, rows = rows.len(), "wrote ledger");
        Ok(())
    }

    /// Permanently remove the ledger file. No copy is kept.
    pub fn delete(&self, title: &str) -> Result<()> {
        let path = self.existing_path(title)?;
        std::fs::remove_file(&path)?;
        tracing::info!(title, path = %path.display(), "deleted ledger");
        Ok(())
    }

    pub fn metadata(&self, title: &str) -> Result<LedgerMeta> {
        let path = self.existing_path(title)?;
        let meta = std::fs::metadata(&path)?;
        Ok(LedgerMeta {
            size_bytes: meta.len(),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
            path,
        })
    }

    /// Titles containing `filter` (case-insensitive), sorted, at most `limit`.
    pub fn list_titles(&self, filter: &str, limit: usize) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let needle = filter.to_lowercase();
        let mut titles = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(title) = paths::title_from_path(&entry.path()) {
                // Files no operation could open are not offered.
                if paths::validate_title(&title).is_err() {
                    continue;
                }
                if title.to_lowercase().contains(&needle) {
                    titles.push(title);
                }
            }
        }
        titles.sort();
        titles.truncate(limit);
        Ok(titles)
    }

    fn existing_path(&self, title: &str) -> Result<PathBuf> {
        let path = self.path_for(title)?;
        if !path.is_file() {
            return Err(ChecklistError::NotFound(title.to_string()));
        }
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
