//! Application constants for cohort stats
//!
//! This module contains the default values and column positions used
//! throughout the cohort stats application.

// =============================================================================
// Input File Layout
// =============================================================================

/// Number of header/comment lines before the data region in the standard
/// student-data layout
pub const DEFAULT_HEADER_ROWS: usize = 9;

/// Leading marker that disables a line anywhere in the file
pub const COMMENT_MARKER: char = '#';

/// Zero-based token index of the gender column
pub const GENDER_COLUMN: usize = 1;

/// Zero-based token index of the height column (metres, always populated)
pub const HEIGHT_COLUMN: usize = 3;

/// Zero-based token index of the weight column (kilograms, may be missing)
pub const WEIGHT_COLUMN: usize = 4;

// =============================================================================
// Group Codes
// =============================================================================

/// Gender code selecting the male group; the complement mask selects female
pub const MALE_CODE: char = 'M';

// =============================================================================
// Report Formatting
// =============================================================================

/// Unit label for height values in report output
pub const HEIGHT_UNIT: &str = "m";

/// Unit label for weight values in report output
pub const WEIGHT_UNIT: &str = "kg";
