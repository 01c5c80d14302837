//! Numeric scaling: min-max rescaling and standardization

use crate::error::{PrepError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scaling applied to numeric columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleMethod {
    /// Linear rescaling to [0, 1]: (x - min) / (max - min)
    MinMax,
    /// Standardization to zero mean, unit population std: (x - mean) / std
    Std,
}

impl FromStr for ScaleMethod {
    type Err = PrepError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "minmax" => Ok(ScaleMethod::MinMax),
            "std" => Ok(ScaleMethod::Std),
            other => Err(PrepError::InvalidParameter {
                name: "method".to_string(),
                value: other.to_string(),
                reason: "expected 'minmax' or 'std'".to_string(),
            }),
        }
    }
}

impl fmt::Display for ScaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleMethod::MinMax => write!(f, "minmax"),
            ScaleMethod::Std => write!(f, "std"),
        }
    }
}

/// Scale one `Float64` column.
///
/// Statistics ignore missing cells, and missing cells stay missing in the
/// output. A constant column scales to all zeros; a column with no valid
/// values is returned untouched.
pub(crate) fn scale_series(series: &Series, method: ScaleMethod) -> Result<Series> {
    let ca = series.f64()?;

    let scaled: Float64Chunked = match method {
        ScaleMethod::MinMax => {
            let (Some(min), Some(max)) = (ca.min(), ca.max()) else {
                return Ok(series.clone());
            };
            let range = max - min;
            if range == 0.0 {
                ca.into_iter().map(|opt| opt.map(|_| 0.0)).collect()
            } else {
                ca.into_iter()
                    .map(|opt| opt.map(|v| (v - min) / range))
                    .collect()
            }
        }
        ScaleMethod::Std => {
            let (Some(mean), Some(std)) = (ca.mean(), ca.std(0)) else {
                return Ok(series.clone());
            };
            if std == 0.0 {
                ca.into_iter().map(|opt| opt.map(|_| 0.0)).collect()
            } else {
                ca.into_iter()
                    .map(|opt| opt.map(|v| (v - mean) / std))
                    .collect()
            }
        }
    };

    Ok(scaled.with_name(series.name().clone()).into_series())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minmax_maps_endpoints() {
        let s = Series::new("a".into(), &[2.0, 6.0, 4.0]);
        let scaled = scale_series(&s, ScaleMethod::MinMax).unwrap();
        let values: Vec<Option<f64>> = scaled.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(0.0), Some(1.0), Some(0.5)]);
    }

    #[test]
    fn test_std_uses_population_std() {
        let s = Series::new("a".into(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let scaled = scale_series(&s, ScaleMethod::Std).unwrap();
        let ca = scaled.f64().unwrap();

        let mean = ca.mean().unwrap();
        assert!(mean.abs() < 1e-10);

        // Population std of the input is sqrt(2); after scaling it is 1
        let pop_std = ca.std(0).unwrap();
        assert!((pop_std - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_constant_column_scales_to_zero() {
        let s = Series::new("a".into(), &[3.0, 3.0, 3.0]);
        for method in [ScaleMethod::MinMax, ScaleMethod::Std] {
            let scaled = scale_series(&s, method).unwrap();
            let values: Vec<Option<f64>> = scaled.f64().unwrap().into_iter().collect();
            assert_eq!(values, vec![Some(0.0), Some(0.0), Some(0.0)]);
        }
    }

    #[test]
    fn test_missing_cells_stay_missing() {
        let s = Series::new("a".into(), &[Some(0.0), None, Some(10.0)]);
        let scaled = scale_series(&s, ScaleMethod::MinMax).unwrap();
        let values: Vec<Option<f64>> = scaled.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(0.0), None, Some(1.0)]);
    }

    #[test]
    fn test_all_missing_column_is_untouched() {
        let s = Series::new("a".into(), &[None::<f64>, None]);
        let scaled = scale_series(&s, ScaleMethod::Std).unwrap();
        assert_eq!(scaled.null_count(), 2);
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("minmax".parse::<ScaleMethod>().unwrap(), ScaleMethod::MinMax);
        assert_eq!("std".parse::<ScaleMethod>().unwrap(), ScaleMethod::Std);

        let err = "zscore".parse::<ScaleMethod>().unwrap_err();
        assert!(matches!(err, PrepError::InvalidParameter { .. }));
    }

    #[test]
    fn test_method_display_round_trips() {
        for method in [ScaleMethod::MinMax, ScaleMethod::Std] {
            assert_eq!(method.to_string().parse::<ScaleMethod>().unwrap(), method);
        }
    }
}
