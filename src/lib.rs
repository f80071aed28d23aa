//! Cohort Stats Library
//!
//! A Rust library for summarising whitespace-delimited student measurement
//! tables with header/comment handling and missing-value tolerance.
//!
//! This library provides tools for:
//! - Loading positional text tables with a configurable header offset
//! - Skipping comment-prefixed and blank lines in the data region
//! - Per-column converter overrides for fields with missing-value markers
//! - Masked group-by aggregation over the loaded records
//! - Comprehensive error handling with explicit empty-group behavior

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod table_loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Measurement, Record};
pub use app::services::aggregation::CohortSummary;
pub use app::services::table_loader::{LoadResult, LoadStats, TableLoader, TableSpec};

/// Result type alias for cohort processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for table loading and aggregation
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Data row that cannot be loaded (short row, unparsable required field)
    #[error("Malformed row at line {line} in '{file}': {message}")]
    MalformedRow {
        file: String,
        line: usize,
        message: String,
    },

    /// Field token rejected by a strict converter
    #[error("Invalid field '{token}': {message}")]
    FieldParse { token: String, message: String },

    /// Aggregation requested over a group with no usable values
    #[error("Empty group '{group}': no valid values to aggregate")]
    EmptyGroup { group: String },

    /// Mask not aligned with the record table
    #[error("Mask length {actual} does not match record count {expected}")]
    MaskLength { expected: usize, actual: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a malformed row error
    pub fn malformed_row(
        file: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedRow {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a field parse error
    pub fn field_parse(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FieldParse {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create an empty group error
    pub fn empty_group(group: impl Into<String>) -> Self {
        Self::EmptyGroup {
            group: group.into(),
        }
    }

    /// Create a mask length error
    pub fn mask_length(expected: usize, actual: usize) -> Self {
        Self::MaskLength { expected, actual }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
