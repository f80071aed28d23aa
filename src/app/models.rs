//! Core data models for cohort measurement records
//!
//! This module defines the record shape produced by the table loader and the
//! explicit present/absent measurement type used in place of a numeric
//! missing-value sentinel.

use serde::{Deserialize, Serialize};

/// A single numeric measurement that may be absent in the source table
///
/// Absent values arise when a column with a lenient converter encounters a
/// token that is not a decimal literal (the `-` marker in the standard
/// student-data layout). An absent measurement never participates in
/// aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measurement {
    /// Value parsed from the source table
    Observed(f64),
    /// Field held a missing-value marker or otherwise unparsable token
    Missing,
}

impl Measurement {
    /// The observed value, if present
    pub fn observed(self) -> Option<f64> {
        match self {
            Measurement::Observed(value) => Some(value),
            Measurement::Missing => None,
        }
    }

    /// Check whether a value was observed
    pub fn is_observed(self) -> bool {
        matches!(self, Measurement::Observed(_))
    }

    /// Check whether the field was missing in the source
    pub fn is_missing(self) -> bool {
        matches!(self, Measurement::Missing)
    }
}

/// One loaded table row: a categorical gender code paired with a measurement
///
/// The gender code is opaque categorical data taken from the first character
/// of its token; it is not validated against a known category set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Single-character gender code (e.g. 'M' / 'F')
    pub gender: char,
    /// Measurement value for the selected column
    pub value: Measurement,
}

impl Record {
    /// Create a new record
    pub fn new(gender: char, value: Measurement) -> Self {
        Self { gender, value }
    }

    /// Create a record with an observed value
    pub fn observed(gender: char, value: f64) -> Self {
        Self::new(gender, Measurement::Observed(value))
    }

    /// Create a record with a missing value
    pub fn missing(gender: char) -> Self {
        Self::new(gender, Measurement::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_accessors() {
        let observed = Measurement::Observed(1.82);
        assert!(observed.is_observed());
        assert!(!observed.is_missing());
        assert_eq!(observed.observed(), Some(1.82));

        let missing = Measurement::Missing;
        assert!(missing.is_missing());
        assert!(!missing.is_observed());
        assert_eq!(missing.observed(), None);
    }

    #[test]
    fn test_record_constructors() {
        let record = Record::observed('M', 92.4);
        assert_eq!(record.gender, 'M');
        assert_eq!(record.value, Measurement::Observed(92.4));

        let record = Record::missing('F');
        assert_eq!(record.gender, 'F');
        assert!(record.value.is_missing());
    }
}
