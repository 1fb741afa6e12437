//! # Error Types
//!
//! Parsing, formatting and duplicate detection never fail: malformed ChordPro
//! degrades to plain text and a short or empty title yields no matches. The
//! errors here belong to the surfaces that touch the outside world: reading
//! chart and catalog files, decoding configuration, and the command line.
//!
//! ## Error Types
//! - `Io` - A file could not be read
//! - `Catalog` - A song catalog snapshot could not be decoded
//! - `Config` - Configuration YAML is malformed or holds an invalid value
//! - `Json` - A document could not be encoded as JSON
//! - `Usage` - Command-line arguments are missing or wrong

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// Reading a file failed.
    ///
    /// # Example
    /// ```
    /// # use chordchart::ChartError;
    /// let err = ChartError::Io {
    ///     path: "song.cho".into(),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    /// };
    /// assert_eq!(err.to_string(), "Failed to read 'song.cho': missing");
    /// ```
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog snapshot is not a valid list of songs.
    #[error("Invalid catalog: {0}")]
    Catalog(String),

    /// Configuration is malformed or out of range.
    ///
    /// # Example
    /// ```
    /// # use chordchart::ChartError;
    /// let err = ChartError::Config("threshold must be between 0 and 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: threshold must be between 0 and 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrong command-line usage.
    #[error("{0}")]
    Usage(String),
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChartError::Io {
            path: path.into(),
            source,
        }
    }
}
