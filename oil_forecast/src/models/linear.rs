//! Linear model over the eight lag and calendar features

use crate::error::{ForecastError, PredictionError, Result};
use crate::models::Predictor;
use price_features::{FeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

/// `intercept + sum(weights[i] * features[i])`.
///
/// Coefficients are fitted elsewhere and handed over as JSON, e.g.
/// `{"intercept": 0.4, "weights": [0, 0, 0, 0, 0.9, 0.05, 0.03, 0.01]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearLagModel {
    intercept: f64,
    weights: Vec<f64>,
}

impl LinearLagModel {
    /// Create a new linear model
    pub fn new(intercept: f64, weights: Vec<f64>) -> Result<Self> {
        if weights.len() != FEATURE_COUNT {
            return Err(ForecastError::InvalidParameter(format!(
                "Expected {} weights, got {}",
                FEATURE_COUNT,
                weights.len()
            )));
        }

        if !intercept.is_finite() || weights.iter().any(|w| !w.is_finite()) {
            return Err(ForecastError::InvalidParameter(
                "Coefficients must be finite".to_string(),
            ));
        }

        Ok(Self { intercept, weights })
    }

    /// Parse coefficients from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Self = serde_json::from_str(json)?;
        Self::new(raw.intercept, raw.weights)
    }

    /// An autoregressive model on the lags only, ignoring the calendar
    pub fn autoregressive(intercept: f64, lag_weights: [f64; 4]) -> Self {
        let mut weights = vec![0.0; FEATURE_COUNT];
        weights[4..].copy_from_slice(&lag_weights);
        Self { intercept, weights }
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl Predictor for LinearLagModel {
    fn predict(&self, features: &FeatureVector) -> std::result::Result<f64, PredictionError> {
        // Deserialized models skip `new`, so the shape is checked here too
        if self.weights.len() != features.len() {
            return Err(PredictionError::Shape {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }

        Ok(self.intercept
            + self
                .weights
                .iter()
                .zip(features.iter())
                .map(|(w, x)| w * x)
                .sum::<f64>())
    }

    fn name(&self) -> &str {
        "linear"
    }
}
