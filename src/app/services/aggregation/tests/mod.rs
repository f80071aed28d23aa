//! Test utilities for aggregation testing

use crate::app::models::Record;


/// Build a record table from (gender, optional value) pairs
pub fn records(pairs: &[(char, Option<f64>)]) -> Vec<Record> {
    pairs
        .iter()
        .map(|&(gender, value)| match value {
            Some(v) => Record::observed(gender, v),
            None => Record::missing(gender),
        })
        .collect()
}
