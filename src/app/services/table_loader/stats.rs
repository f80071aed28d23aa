//! Loading statistics and result structures for table processing

use crate::app::models::Record;

/// Loading result with records and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Successfully loaded records, in input row order
    pub records: Vec<Record>,

    /// Basic loading statistics
    pub stats: LoadStats,
}

/// Simple loading statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of lines read from the source
    pub lines_total: usize,

    /// Lines consumed by the header offset
    pub header_skipped: usize,

    /// Comment-prefixed lines excluded from the data region
    pub comments_skipped: usize,

    /// Blank lines excluded from the data region
    pub blanks_skipped: usize,

    /// Number of records loaded
    pub records_loaded: usize,

    /// Number of records whose value field held a missing-value marker
    pub missing_values: usize,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_total: 0,
            header_skipped: 0,
            comments_skipped: 0,
            blanks_skipped: 0,
            records_loaded: 0,
            missing_values: 0,
        }
    }

    /// Share of loaded records with a missing value, as a percentage
    pub fn missing_rate(&self) -> f64 {
        if self.records_loaded == 0 {
            0.0
        } else {
            (self.missing_values as f64 / self.records_loaded as f64) * 100.0
        }
    }

    /// Check whether every loaded record carried an observed value
    pub fn is_complete(&self) -> bool {
        self.missing_values == 0
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
