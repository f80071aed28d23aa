//! Core table loader implementation
//!
//! This module provides the loading orchestration: file reading, line
//! filtering (header offset, comments, blanks), column extraction, and
//! field conversion into typed records.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use super::converters::{self, Converter};
use super::stats::{LoadResult, LoadStats};
use crate::app::models::Record;
use crate::constants::COMMENT_MARKER;
use crate::{Error, Result};

/// Shape of a two-column record table within a wider positional file
///
/// Selects the gender column and one numeric value column by zero-based
/// token index. Converter overrides are scoped to a column index; columns
/// without an override use the strict decimal converter.
#[derive(Debug, Clone)]
pub struct TableSpec {
    /// Number of leading lines to skip before the data region
    pub skip_rows: usize,

    /// Zero-based token index of the gender column
    pub gender_column: usize,

    /// Zero-based token index of the value column
    pub value_column: usize,

    /// Leading marker that disables a data line entirely
    pub comment_marker: char,

    /// Converter overrides keyed by column index
    converters: HashMap<usize, Converter>,
}

impl TableSpec {
    /// Create a spec for the given gender and value columns with no header
    /// offset and no converter overrides
    pub fn new(gender_column: usize, value_column: usize) -> Self {
        Self {
            skip_rows: 0,
            gender_column,
            value_column,
            comment_marker: COMMENT_MARKER,
            converters: HashMap::new(),
        }
    }

    /// Set the number of header lines to skip
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    /// Set the comment marker character
    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    /// Attach a converter override to a single column index
    pub fn with_converter(mut self, column: usize, converter: Converter) -> Self {
        self.converters.insert(column, converter);
        self
    }

    /// Resolve the converter for a column: the override if one is attached,
    /// otherwise strict decimal conversion
    pub fn converter_for(&self, column: usize) -> Converter {
        self.converters
            .get(&column)
            .copied()
            .unwrap_or(converters::decimal)
    }
}

/// Loader for whitespace-delimited record tables
///
/// Performs a single pass over the file: the header offset is skipped by
/// line count, comment and blank lines in the data region are excluded,
/// and every remaining line yields exactly one record. Row order is
/// preserved and a row that cannot be fully converted fails the load.
#[derive(Debug)]
pub struct TableLoader {
    spec: TableSpec,
}

impl TableLoader {
    /// Create a new loader for the given table shape
    pub fn new(spec: TableSpec) -> Self {
        Self { spec }
    }

    /// Load a record table from a file
    pub fn load(&self, path: &Path) -> Result<LoadResult> {
        info!("Loading table: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::io(format!("Failed to read file {}", path.display()), e)
            }
        })?;

        let result = self.load_str(&content, &path.display().to_string())?;

        info!(
            "Loaded {} records from {} lines ({} missing values)",
            result.stats.records_loaded,
            result.stats.lines_total,
            result.stats.missing_values
        );

        Ok(result)
    }

    /// Load a record table from in-memory content
    ///
    /// `source` names the origin in error messages.
    pub fn load_str(&self, content: &str, source: &str) -> Result<LoadResult> {
        let converter = self.spec.converter_for(self.spec.value_column);
        let last_column = self.spec.gender_column.max(self.spec.value_column);

        let mut stats = LoadStats::new();
        let mut records = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            stats.lines_total += 1;

            if index < self.spec.skip_rows {
                stats.header_skipped += 1;
                continue;
            }

            let trimmed = line.trim_start();
            if trimmed.is_empty() {
                stats.blanks_skipped += 1;
                continue;
            }
            if trimmed.starts_with(self.spec.comment_marker) {
                debug!("Skipping commented line {}", line_number);
                stats.comments_skipped += 1;
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() <= last_column {
                return Err(Error::malformed_row(
                    source,
                    line_number,
                    format!(
                        "expected at least {} whitespace-delimited columns, found {}",
                        last_column + 1,
                        tokens.len()
                    ),
                ));
            }

            // Single-character categorical field, no category validation
            let gender = tokens[self.spec.gender_column]
                .chars()
                .next()
                .ok_or_else(|| {
                    Error::malformed_row(source, line_number, "empty gender field")
                })?;

            let value = converter(tokens[self.spec.value_column]).map_err(|e| {
                Error::malformed_row(
                    source,
                    line_number,
                    format!("column {}: {}", self.spec.value_column, e),
                )
            })?;

            if value.is_missing() {
                debug!(
                    "Missing value in column {} at line {}",
                    self.spec.value_column, line_number
                );
                stats.missing_values += 1;
            }

            records.push(Record::new(gender, value));
            stats.records_loaded += 1;
        }

        Ok(LoadResult { records, stats })
    }
}
