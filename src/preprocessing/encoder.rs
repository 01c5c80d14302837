//! One-hot expansion of categorical columns

use crate::error::Result;
use polars::prelude::*;
use std::collections::HashSet;
use tracing::warn;

/// Cardinality above which an expansion is worth a warning. Nothing is ever
/// capped or dropped; the caller just gets told about the column explosion.
const HIGH_CARDINALITY: usize = 100;

/// Distinct values of a string column, in first-seen row order.
/// Missing cells do not contribute a value.
pub(crate) fn categories(ca: &StringChunked) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for val in ca.into_iter().flatten() {
        if seen.insert(val.to_string()) {
            order.push(val.to_string());
        }
    }
    order
}

/// Expand one categorical column into one 0/1 column per distinct value.
///
/// Generated columns are named `{column}_{value}` and carry `Float64` values
/// so a later scaling pass treats them as numeric. A row whose cell is
/// missing gets 0 in every generated column.
pub(crate) fn expand_onehot(series: &Series) -> Result<Vec<Series>> {
    let ca = series.str()?;
    let cats = categories(ca);

    if cats.len() > HIGH_CARDINALITY {
        warn!(
            column = %series.name(),
            cardinality = cats.len(),
            "one-hot expansion of a high-cardinality column"
        );
    }

    let mut out = Vec::with_capacity(cats.len());
    for cat in &cats {
        let name = format!("{}_{}", series.name(), cat);
        let values: Float64Chunked = ca
            .into_iter()
            .map(|v| Some(if v == Some(cat.as_str()) { 1.0 } else { 0.0 }))
            .collect();
        out.push(values.with_name(name.into()).into_series());
    }

    Ok(out)
}
