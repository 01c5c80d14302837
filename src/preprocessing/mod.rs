//! Tabular preprocessing
//!
//! Provides a sequential preprocessing pipeline for in-memory tables:
//! - Sparse-column removal and mode imputation
//! - One-hot encoding of categorical columns
//! - Numeric scaling (min-max, standardization)
//!
//! Every step records what it did in a [`TransformLog`].

mod config;
mod encoder;
mod missing;
mod pipeline;
mod scaler;

pub use config::PreprocessingConfig;
pub use missing::FillValue;
pub use pipeline::{Preprocessor, TransformLog};
pub use scaler::ScaleMethod;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Column type tag used for per-step dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Integer, unsigned and float dtypes; carried as `Float64` internally
    Numeric,
    /// String and categorical dtypes; carried as `String` internally
    Categorical,
    /// Boolean columns: imputed by mode, never encoded or scaled
    Other,
}

impl ColumnType {
    /// Classify a polars dtype, or `None` for dtypes the pipeline does not
    /// recognize as a tabular cell type (temporal, nested, object).
    pub fn of(dtype: &DataType) -> Option<Self> {
        match dtype {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64 => Some(ColumnType::Numeric),
            DataType::String | DataType::Categorical(_, _) => Some(ColumnType::Categorical),
            DataType::Boolean => Some(ColumnType::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dtypes() {
        assert_eq!(ColumnType::of(&DataType::Int32), Some(ColumnType::Numeric));
        assert_eq!(ColumnType::of(&DataType::Float64), Some(ColumnType::Numeric));
        assert_eq!(
            ColumnType::of(&DataType::String),
            Some(ColumnType::Categorical)
        );
        assert_eq!(ColumnType::of(&DataType::Boolean), Some(ColumnType::Other));
        assert_eq!(
            ColumnType::of(&DataType::List(Box::new(DataType::Int64))),
            None
        );
    }

    #[test]
    fn test_column_type_serialize() {
        let tag = ColumnType::Numeric;
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"Numeric\"");
    }
}
