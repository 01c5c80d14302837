//! Preprocessing configuration

use super::ScaleMethod;
use serde::{Deserialize, Serialize};

/// Configuration for a full preprocessing pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessingConfig {
    /// Columns whose missing fraction strictly exceeds this are dropped
    pub missing_threshold: f64,

    /// Scaling applied to numeric columns
    pub scale_method: ScaleMethod,
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            missing_threshold: 0.5,
            scale_method: ScaleMethod::MinMax,
        }
    }
}

impl PreprocessingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the missing-fraction threshold
    pub fn with_missing_threshold(mut self, threshold: f64) -> Self {
        self.missing_threshold = threshold;
        self
    }

    /// Builder method to set the scaling method
    pub fn with_scale_method(mut self, method: ScaleMethod) -> Self {
        self.scale_method = method;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PreprocessingConfig::default();
        assert_eq!(config.missing_threshold, 0.5);
        assert_eq!(config.scale_method, ScaleMethod::MinMax);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PreprocessingConfig::new()
            .with_missing_threshold(0.2)
            .with_scale_method(ScaleMethod::Std);

        assert_eq!(config.missing_threshold, 0.2);
        assert_eq!(config.scale_method, ScaleMethod::Std);
    }
}
