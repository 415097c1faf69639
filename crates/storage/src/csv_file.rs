//! CSV-backed visit persistence implementation.
//!
//! The file layout is a header row (`name,service,responsible,date,outcome,
//! status`) followed by one row per visit in store order. Saving overwrites
//! the whole file; the design assumes exclusive single-process access with no
//! file locking, so there is no partial-update mode to reason about.

use crate::StorageError;
use cvl_core::Visit;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Raw row shape as it appears in the file, before validation.
///
/// Rows are deserialised into plain strings first and then handed to
/// [`Visit::new`], which is the single conversion boundary between persisted
/// text and the typed domain. Field order matches `cvl_core::visit::FIELD_NAMES`.
#[derive(Debug, serde::Deserialize)]
struct RawRow {
    name: String,
    service: String,
    responsible: String,
    date: String,
    outcome: String,
    status: String,
}

/// CSV persistence bound to one data file.
///
/// The path is resolved once at startup and passed in; the adapter performs
/// no path discovery of its own.
#[derive(Debug)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    /// Creates a storage adapter for the given data file path.
    ///
    /// The file does not need to exist yet; it is created on the first save
    /// and an absent file loads as zero visits.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the bound data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves all visits to the data file, overwriting any previous content.
    ///
    /// The parent directory is created if missing. The writer is scoped to
    /// this call and flushed before returning, so the file handle is released
    /// on every exit path.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the directory or file cannot be created,
    /// or a row cannot be written or flushed. The caller's in-memory visits
    /// are untouched either way.
    pub fn save(&self, visits: &[Visit]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StorageError::DirCreation)?;
            }
        }

        let file = File::create(&self.path).map_err(StorageError::FileCreate)?;
        let mut writer = csv::Writer::from_writer(file);

        for visit in visits {
            // Serde derive on Visit emits the header from the struct fields
            // on the first row.
            writer.serialize(visit).map_err(StorageError::Write)?;
        }
        // An empty journal still gets its header row.
        if visits.is_empty() {
            writer
                .write_record(cvl_core::visit::FIELD_NAMES)
                .map_err(StorageError::Write)?;
        }

        writer.flush().map_err(StorageError::Flush)?;

        tracing::info!(count = visits.len(), path = %self.path.display(), "visits saved");
        Ok(())
    }

    /// Loads all visits from the data file.
    ///
    /// An absent file is not an error and yields an empty list. Every row is
    /// validated through `Visit::new`; the first invalid row aborts the load
    /// with its line number so a bad import is reported rather than silently
    /// truncated.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the file exists but cannot be opened or
    /// parsed, or if a row fails visit validation.
    pub fn load(&self) -> Result<Vec<Visit>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no visits file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::FileOpen(e)),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut visits = Vec::new();

        for (index, row) in reader.deserialize::<RawRow>().enumerate() {
            // Line 1 is the header row.
            let line = index + 2;
            let row = row.map_err(StorageError::Read)?;
            let visit = Visit::new(
                &row.name,
                &row.service,
                &row.responsible,
                &row.date,
                &row.outcome,
                &row.status,
            )
            .map_err(|source| StorageError::InvalidRow { line, source })?;
            visits.push(visit);
        }

        tracing::info!(count = visits.len(), path = %self.path.display(), "visits loaded");
        Ok(visits)
    }
}
