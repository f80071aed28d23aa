//! Whitespace-delimited table loader for student measurement files
//!
//! This module provides a loader for positional text tables with a fixed
//! header offset, comment-prefixed lines, and missing-value markers in
//! selected columns.
//!
//! ## Architecture
//!
//! The loader is organized into logical components:
//! - [`loader`] - Core loading orchestration and line filtering
//! - [`converters`] - Field conversion strategies for value columns
//! - [`stats`] - Loading statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use cohort_stats::app::services::table_loader::{converters, TableLoader, TableSpec};
//!
//! # fn example() -> cohort_stats::Result<()> {
//! let spec = TableSpec::new(1, 4)
//!     .with_skip_rows(9)
//!     .with_converter(4, converters::decimal_or_missing);
//! let result = TableLoader::new(spec).load(std::path::Path::new("data.txt"))?;
//!
//! println!("Loaded {} records ({} missing values)",
//!          result.stats.records_loaded,
//!          result.stats.missing_values);
//! # Ok(())
//! # }
//! ```

pub mod converters;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use converters::Converter;
pub use loader::{TableLoader, TableSpec};
pub use stats::{LoadResult, LoadStats};
