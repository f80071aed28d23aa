//! Field conversion strategies for value columns
//!
//! A converter turns one whitespace-delimited token into a [`Measurement`].
//! The loader applies the strict [`decimal`] converter to every value column
//! unless the caller attaches an override for a specific column index, so a
//! lenient column never affects parsing of the others.

use crate::app::models::Measurement;
use crate::{Error, Result};

/// Conversion capability applied to a single value column
pub type Converter = fn(&str) -> Result<Measurement>;

/// Strict decimal conversion
///
/// The default capability for value columns: the token must be a valid
/// decimal literal. Used for columns the input guarantees are always
/// populated, such as height.
pub fn decimal(token: &str) -> Result<Measurement> {
    token
        .trim()
        .parse::<f64>()
        .map(Measurement::Observed)
        .map_err(|_| Error::field_parse(token, "not a valid decimal literal"))
}

/// Lenient decimal conversion for columns with missing-value markers
///
/// Any token that does not parse as a decimal literal (the `-` marker
/// included) yields [`Measurement::Missing`] instead of failing the load.
/// Attach this to the one column that may hold markers, such as weight.
pub fn decimal_or_missing(token: &str) -> Result<Measurement> {
    Ok(token
        .trim()
        .parse::<f64>()
        .map(Measurement::Observed)
        .unwrap_or(Measurement::Missing))
}
