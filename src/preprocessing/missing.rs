//! Missing-value handling: missing fractions, mode computation, null filling

use crate::error::{PrepError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Value used to fill the holes of a single column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FillValue {
    Numeric(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for FillValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillValue::Numeric(v) => write!(f, "{v}"),
            FillValue::Text(v) => write!(f, "{v}"),
            FillValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Fraction of missing cells in a column. An empty table has no missing cells.
pub(crate) fn missing_fraction(column: &Column, height: usize) -> f64 {
    if height == 0 {
        0.0
    } else {
        column.as_materialized_series().null_count() as f64 / height as f64
    }
}

/// Mode of a column's valid values.
///
/// Ties resolve to the value encountered first in row order, so the result is
/// deterministic for a given column. Fails with a computation error when the
/// column holds no valid value at all.
pub(crate) fn mode_value(series: &Series) -> Result<FillValue> {
    let mode = match series.dtype() {
        DataType::Float64 => mode_numeric(series.f64()?).map(FillValue::Numeric),
        DataType::String => mode_string(series.str()?).map(FillValue::Text),
        DataType::Boolean => mode_bool(series.bool()?).map(FillValue::Bool),
        other => {
            return Err(PrepError::DataError(format!(
                "cannot compute mode for column '{}' with dtype {other}",
                series.name()
            )))
        }
    };

    mode.ok_or_else(|| {
        PrepError::ComputationError(format!(
            "column '{}' has no valid values to compute a mode from",
            series.name()
        ))
    })
}

fn mode_numeric(ca: &Float64Chunked) -> Option<f64> {
    // Keyed by bit pattern so f64 values can be counted exactly
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new();
    for (row, val) in ca.into_iter().enumerate() {
        if let Some(v) = val {
            counts.entry(v.to_bits()).or_insert((0, row)).0 += 1;
        }
    }

    pick_mode(counts.into_iter()).map(f64::from_bits)
}

fn mode_string(ca: &StringChunked) -> Option<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (row, val) in ca.into_iter().enumerate() {
        if let Some(v) = val {
            counts.entry(v).or_insert((0, row)).0 += 1;
        }
    }

    pick_mode(counts.into_iter()).map(|s| s.to_string())
}

fn mode_bool(ca: &BooleanChunked) -> Option<bool> {
    let mut counts: HashMap<bool, (usize, usize)> = HashMap::new();
    for (row, val) in ca.into_iter().enumerate() {
        if let Some(v) = val {
            counts.entry(v).or_insert((0, row)).0 += 1;
        }
    }

    pick_mode(counts.into_iter())
}

/// Highest count wins; on equal counts, the smaller first-seen row wins.
fn pick_mode<K>(counts: impl Iterator<Item = (K, (usize, usize))>) -> Option<K> {
    counts
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value)
}

/// Replace every missing cell of the column with the fill value.
pub(crate) fn fill_series(series: &Series, fill: &FillValue) -> Result<Series> {
    let filled = match (series.dtype(), fill) {
        (DataType::Float64, FillValue::Numeric(v)) => {
            let ca = series.f64()?;
            let out: Float64Chunked = ca
                .into_iter()
                .map(|opt| Some(opt.unwrap_or(*v)))
                .collect();
            out.with_name(series.name().clone()).into_series()
        }
        (DataType::String, FillValue::Text(v)) => {
            let ca = series.str()?;
            let out: StringChunked = ca
                .into_iter()
                .map(|opt| Some(opt.unwrap_or(v.as_str()).to_string()))
                .collect();
            out.with_name(series.name().clone()).into_series()
        }
        (DataType::Boolean, FillValue::Bool(v)) => {
            let ca = series.bool()?;
            let out: BooleanChunked = ca
                .into_iter()
                .map(|opt| Some(opt.unwrap_or(*v)))
                .collect();
            out.with_name(series.name().clone()).into_series()
        }
        (dtype, _) => {
            return Err(PrepError::DataError(format!(
                "fill value does not match dtype {dtype} of column '{}'",
                series.name()
            )))
        }
    };

    Ok(filled)
}
