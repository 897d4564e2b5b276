//! Error kinds surfaced by the sync pipeline.
//!
//! Every failure is fatal to the run. There is no retry logic anywhere; the
//! CLI prints the error and exits with a non-zero status.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// No configuration file could be found.
    #[error("You don't have the configuration file! (searched upwards from {})", searched_from.display())]
    ConfigMissing { searched_from: PathBuf },

    /// The configuration file exists but could not be read or parsed.
    #[error("Invalid configuration file {}: {message}", path.display())]
    ConfigInvalid { path: PathBuf, message: String },

    /// Credential or connection setup failed.
    #[error("Authentication failed: {0}")]
    AuthFailure(String),

    /// A worksheet (or the worksheet listing) could not be retrieved.
    #[error("Failed to fetch worksheet '{worksheet}': {message}")]
    FetchFailure { worksheet: String, message: String },

    /// A worksheet title cannot be used as an output file name.
    #[error("Invalid worksheet '{worksheet}': {message}")]
    InvalidWorksheet { worksheet: String, message: String },

    /// A directory or file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A dictionary could not be rendered by its serializer.
    #[error("Failed to serialize dictionary: {0}")]
    Serialize(String),
}

impl SyncError {
    pub fn fetch(worksheet: impl Into<String>, message: impl ToString) -> Self {
        SyncError::FetchFailure {
            worksheet: worksheet.into(),
            message: message.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SyncError::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
