//! The preprocessing pipeline and its transformation log

use super::{
    config::PreprocessingConfig,
    encoder,
    missing::{self, FillValue},
    scaler::{self, ScaleMethod},
    ColumnType,
};
use crate::error::{PrepError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Record of what each preprocessing step did.
///
/// Each step replaces its own entries on a repeated call; entries written by
/// other steps are left alone. `filled_cols` accumulates per column, so a
/// second imputation pass overwrites only the columns it actually touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformLog {
    /// Columns dropped for excess missingness, in original left-to-right order
    pub removed_cols: Vec<String>,

    /// Fill value used for each imputed column
    pub filled_cols: HashMap<String, FillValue>,

    /// Names of generated one-hot columns, in generation order
    pub onehot_cols: Vec<String>,
}

impl TransformLog {
    /// Render the log as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Sequential preprocessor for a single table.
///
/// Owns a private copy of the caller's frame together with a [`TransformLog`].
/// The three step methods mutate the table in place and return `&mut Self`
/// for chaining; [`fit_transform`](Preprocessor::fit_transform) runs all
/// three in a fixed order and hands back the resulting frame.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    data: DataFrame,
    log: TransformLog,
}

impl Preprocessor {
    /// Validate the caller's frame and store an independent copy of it.
    ///
    /// Numeric dtypes are carried as `Float64` and categorical dtypes as
    /// `String`; a column with any other dtype fails construction with an
    /// unsupported-column error and no instance is created.
    pub fn new(data: &DataFrame) -> Result<Self> {
        let data = Self::ingest(data)?;
        Ok(Self {
            data,
            log: TransformLog::default(),
        })
    }

    fn ingest(df: &DataFrame) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(df.width());
        for col in df.get_columns() {
            let column = match ColumnType::of(col.dtype()) {
                Some(ColumnType::Numeric) if col.dtype() != &DataType::Float64 => {
                    col.cast(&DataType::Float64)?
                }
                Some(ColumnType::Categorical) if col.dtype() != &DataType::String => {
                    col.cast(&DataType::String)?
                }
                Some(_) => col.clone(),
                None => {
                    return Err(PrepError::UnsupportedColumnType {
                        name: col.name().to_string(),
                        dtype: col.dtype().to_string(),
                    })
                }
            };
            columns.push(column);
        }
        Ok(DataFrame::new(columns)?)
    }

    /// Drop columns whose missing fraction strictly exceeds `threshold`, then
    /// fill the remaining missing cells with the per-column mode.
    ///
    /// The mode tie-break is deterministic: the first value encountered in
    /// row order among the maximum-frequency set wins. Dropped column names
    /// replace `removed_cols`; every column filled this call is recorded in
    /// `filled_cols`. On any error the table and log are left unchanged.
    pub fn remove_missing(&mut self, threshold: f64) -> Result<&mut Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PrepError::InvalidParameter {
                name: "threshold".to_string(),
                value: threshold.to_string(),
                reason: "must lie in [0, 1]".to_string(),
            });
        }

        let height = self.data.height();
        let mut removed = Vec::new();
        let mut kept = Vec::new();
        for col in self.data.get_columns() {
            if missing::missing_fraction(col, height) > threshold {
                removed.push(col.name().to_string());
            } else {
                kept.push(col.clone());
            }
        }
        let mut table = DataFrame::new(kept)?;

        // Compute every fill value before committing anything, so a column
        // with no valid values fails the call without partial state.
        let mut fills: Vec<(String, FillValue, Series)> = Vec::new();
        for col in table.get_columns() {
            let series = col.as_materialized_series();
            if series.null_count() == 0 {
                continue;
            }
            let fill = missing::mode_value(series)?;
            let filled = missing::fill_series(series, &fill)?;
            fills.push((col.name().to_string(), fill, filled));
        }

        debug!(
            dropped = removed.len(),
            filled = fills.len(),
            threshold,
            "removed sparse columns and imputed the rest"
        );

        self.log.removed_cols = removed;
        for (name, fill, series) in fills {
            table.with_column(series)?;
            self.log.filled_cols.insert(name, fill);
        }
        self.data = table;
        Ok(self)
    }

    /// Replace every categorical column with one 0/1 column per distinct
    /// observed value, named `{column}_{value}`.
    ///
    /// Generated columns take the position of the column they replace, and
    /// their names replace `onehot_cols` in generation order. A table without
    /// categorical columns is returned unchanged.
    pub fn encode_categorical(&mut self) -> Result<&mut Self> {
        let has_categorical = self
            .data
            .get_columns()
            .iter()
            .any(|c| c.dtype() == &DataType::String);
        if !has_categorical {
            return Ok(self);
        }

        let mut columns: Vec<Column> = Vec::with_capacity(self.data.width());
        let mut generated = Vec::new();
        for col in self.data.get_columns() {
            if col.dtype() == &DataType::String {
                let dummies = encoder::expand_onehot(col.as_materialized_series())?;
                for series in dummies {
                    generated.push(series.name().to_string());
                    columns.push(series.into());
                }
            } else {
                columns.push(col.clone());
            }
        }

        debug!(generated = generated.len(), "one-hot encoded categorical columns");

        self.data = DataFrame::new(columns)?;
        self.log.onehot_cols = generated;
        Ok(self)
    }

    /// Scale every numeric column with the given method.
    ///
    /// Missing cells are ignored by the statistics and propagate as missing;
    /// constant columns scale to all zeros.
    pub fn normalize_numeric(&mut self, method: ScaleMethod) -> Result<&mut Self> {
        let mut scaled = Vec::new();
        for col in self.data.get_columns() {
            if col.dtype() != &DataType::Float64 {
                continue;
            }
            scaled.push(scaler::scale_series(col.as_materialized_series(), method)?);
        }

        debug!(columns = scaled.len(), %method, "scaled numeric columns");

        for series in scaled {
            self.data.with_column(series)?;
        }
        Ok(self)
    }

    /// Run the full pipeline in fixed order: missing-value handling, then
    /// one-hot encoding, then numeric scaling. Returns the resulting frame.
    ///
    /// The order matters: categorical fill values must exist before they are
    /// expanded, and the generated 0/1 columns are numeric, so they are
    /// themselves subject to scaling.
    pub fn fit_transform(&mut self, config: &PreprocessingConfig) -> Result<DataFrame> {
        self.remove_missing(config.missing_threshold)?;
        self.encode_categorical()?;
        self.normalize_numeric(config.scale_method)?;
        Ok(self.data.clone())
    }

    /// Borrow the current table
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Consume the preprocessor and take the table
    pub fn into_data(self) -> DataFrame {
        self.data
    }

    /// Borrow the transformation log
    pub fn log(&self) -> &TransformLog {
        &self.log
    }

    /// Names of the current numeric columns
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns_of(ColumnType::Numeric)
    }

    /// Names of the current categorical columns
    pub fn categorical_columns(&self) -> Vec<String> {
        self.columns_of(ColumnType::Categorical)
    }

    fn columns_of(&self, tag: ColumnType) -> Vec<String> {
        self.data
            .get_columns()
            .iter()
            .filter(|c| ColumnType::of(c.dtype()) == Some(tag))
            .map(|c| c.name().to_string())
            .collect()
    }
}
