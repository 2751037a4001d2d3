//! Flat JSON store of processed emails

use crate::error::{Error, Result};
use crate::types::{EmailInput, ExtractionResult, ProcessedEmail};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// A JSON file holding processed emails, newest first
#[derive(Debug, Clone)]
pub struct EmailStore {
    path: PathBuf,
}

impl EmailStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records. A missing or empty file is an empty store.
    pub fn load(&self) -> Result<Vec<ProcessedEmail>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io_error(source)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Replace the stored records.
    ///
    /// Writes a temporary file next to the store and renames it over the
    /// old one, so an interrupted save leaves the previous records intact.
    pub fn save(&self, emails: &[ProcessedEmail]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;

        let json = serde_json::to_string_pretty(emails)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|source| self.io_error(source))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        info!("Saved {} emails to {}", emails.len(), self.path.display());
        Ok(())
    }

    /// Stamp an extraction and put it at the front of the store.
    ///
    /// The new id is kept above every numeric id already stored.
    pub fn record(&self, input: EmailInput, extracted: ExtractionResult) -> Result<ProcessedEmail> {
        let mut emails = self.load()?;
        let mut processed = ProcessedEmail::new(input, extracted);

        if let Some(newest) = emails.iter().filter_map(ProcessedEmail::numeric_id).max()
            && processed.numeric_id().is_none_or(|id| id <= newest)
        {
            processed.id = (newest + 1).to_string();
        }

        emails.insert(0, processed.clone());
        self.save(&emails)?;

        Ok(processed)
    }

    /// Remove every record
    pub fn clear(&self) -> Result<()> {
        self.save(&[])
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}
