//! Masked group-by aggregation over loaded record tables
//!
//! This module computes group means over measurement records using boolean
//! masks: a group mask selects records by gender code and an optional
//! validity mask excludes records whose value was missing in the source.
//!
//! ## Architecture
//!
//! - [`masks`] - Group, complement, and validity mask construction
//! - [`mean`] - Masked arithmetic mean with explicit empty-group behavior
//! - [`summary`] - Cohort-level height/weight summary over a whole file

pub mod masks;
pub mod mean;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use masks::{complement, group_mask, validity_mask};
pub use mean::group_mean;
pub use summary::{summarize, summarize_file, CohortSummary, SummaryResult};
