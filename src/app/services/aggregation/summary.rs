//! Cohort-level summary over a whole measurement file
//!
//! The summary is a pure result structure; formatting and printing are a
//! CLI concern.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::masks::{complement, group_mask, validity_mask};
use super::mean::group_mean;
use crate::app::models::Record;
use crate::app::services::table_loader::{converters, LoadStats, TableLoader, TableSpec};
use crate::constants::{GENDER_COLUMN, HEIGHT_COLUMN, MALE_CODE, WEIGHT_COLUMN};
use crate::Result;

/// Group averages for the cohort
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CohortSummary {
    /// Mean height of the male group, metres
    pub male_height_avg: f64,

    /// Mean height of the female group, metres
    pub female_height_avg: f64,

    /// Mean weight of the male group over observed values, kilograms
    pub male_weight_avg: f64,

    /// Mean weight of the female group over observed values, kilograms
    pub female_weight_avg: f64,
}

/// Summary together with the load statistics of both source tables
#[derive(Debug, Clone)]
pub struct SummaryResult {
    /// Computed group averages
    pub summary: CohortSummary,

    /// Statistics from loading the height table
    pub height_stats: LoadStats,

    /// Statistics from loading the weight table
    pub weight_stats: LoadStats,
}

/// Compute group averages over already-loaded height and weight tables
///
/// The male group is selected by gender code; the female group is its
/// complement. Weight means are restricted to observed values via a
/// validity mask.
pub fn summarize(height: &[Record], weight: &[Record]) -> Result<CohortSummary> {
    let male_heights = group_mask(height, MALE_CODE);
    let male_height_avg = group_mean(height, &male_heights, None, "male height")?;
    let female_height_avg =
        group_mean(height, &complement(&male_heights), None, "female height")?;

    let male_weights = group_mask(weight, MALE_CODE);
    let observed = validity_mask(weight);
    let male_weight_avg = group_mean(weight, &male_weights, Some(&observed), "male weight")?;
    let female_weight_avg = group_mean(
        weight,
        &complement(&male_weights),
        Some(&observed),
        "female weight",
    )?;

    Ok(CohortSummary {
        male_height_avg,
        female_height_avg,
        male_weight_avg,
        female_weight_avg,
    })
}

/// Load the height and weight tables from a file and compute the summary
///
/// Both tables are built from the same rows with different value columns:
/// height with the strict decimal converter, weight with the lenient
/// converter that records missing-value markers.
pub fn summarize_file(path: &Path, skip_rows: usize) -> Result<SummaryResult> {
    let height_spec = TableSpec::new(GENDER_COLUMN, HEIGHT_COLUMN).with_skip_rows(skip_rows);
    let weight_spec = TableSpec::new(GENDER_COLUMN, WEIGHT_COLUMN)
        .with_skip_rows(skip_rows)
        .with_converter(WEIGHT_COLUMN, converters::decimal_or_missing);

    let height = TableLoader::new(height_spec).load(path)?;
    let weight = TableLoader::new(weight_spec).load(path)?;

    info!(
        "Summarising {} records ({} weight values missing)",
        height.records.len(),
        weight.stats.missing_values
    );

    let summary = summarize(&height.records, &weight.records)?;

    Ok(SummaryResult {
        summary,
        height_stats: height.stats,
        weight_stats: weight.stats,
    })
}
