//! tabprep - Tabular preprocessing pipeline
//!
//! This crate prepares an in-memory table for downstream analysis or
//! modeling:
//! - Sparse-column removal and mode imputation
//! - One-hot encoding of categorical columns
//! - Numeric scaling (min-max, standardization)
//!
//! The table is a [`polars`] `DataFrame`; the [`preprocessing::Preprocessor`]
//! owns a private copy of it and records what each step did in a
//! [`preprocessing::TransformLog`].
//!
//! # Example
//!
//! ```
//! use polars::prelude::*;
//! use tabprep::prelude::*;
//!
//! let df = df!(
//!     "age" => &[Some(25.0), Some(30.0), None, Some(40.0)],
//!     "city" => &[Some("NYC"), Some("LA"), Some("NYC"), None],
//! )
//! .unwrap();
//!
//! let mut prep = Preprocessor::new(&df).unwrap();
//! let processed = prep.fit_transform(&PreprocessingConfig::default()).unwrap();
//!
//! assert!(processed.column("city_NYC").is_ok());
//! assert_eq!(prep.log().filled_cols.len(), 2);
//! ```

pub mod error;
pub mod preprocessing;

pub use error::{PrepError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{PrepError, Result};
    pub use crate::preprocessing::{
        ColumnType, FillValue, PreprocessingConfig, Preprocessor, ScaleMethod, TransformLog,
    };
}
