//! CVL CSV Persistence
//!
//! This crate is the persistence adapter for the clinic visit log: it saves
//! the in-memory visit journal to a CSV file and loads it back.
//!
//! ## Design Principles
//!
//! - The file path is bound once, at construction; no module-level state
//! - Saves are a full overwrite of the file, never an append
//! - An absent file on load is "zero visits", not an error
//! - Every row read from disk passes through `Visit::new`, so nothing
//!   malformed can reach the store; bad rows are reported with their line
//!   number
//! - Persistence failure leaves the in-memory store untouched (visits are
//!   borrowed, never consumed)
//!
//! ## Example Usage
//!
//! ```no_run
//! use cvl_storage::CsvStorage;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = CsvStorage::new(Path::new("data/visits.csv"));
//! let visits = storage.load()?;
//! storage.save(&visits)?;
//! # Ok(())
//! # }
//! ```

mod csv_file;

pub use csv_file::CsvStorage;

use cvl_core::ValidationError;

/// Errors that can occur during CSV persistence
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Creating the parent directory for the data file failed
    #[error("failed to create data directory: {0}")]
    DirCreation(std::io::Error),

    /// Creating or truncating the data file for writing failed
    #[error("failed to create visits file: {0}")]
    FileCreate(std::io::Error),

    /// Opening the data file for reading failed (other than file-absent,
    /// which loads as zero visits)
    #[error("failed to open visits file: {0}")]
    FileOpen(std::io::Error),

    /// Writing a CSV row failed
    #[error("failed to write visits file: {0}")]
    Write(csv::Error),

    /// Flushing buffered output to the data file failed
    #[error("failed to flush visits file: {0}")]
    Flush(std::io::Error),

    /// Reading or parsing a CSV row failed at the format level
    #[error("failed to read visits file: {0}")]
    Read(csv::Error),

    /// A row parsed as CSV but its fields failed visit validation
    #[error("invalid visit row at line {line}: {source}")]
    InvalidRow {
        line: usize,
        #[source]
        source: ValidationError,
    },
}
