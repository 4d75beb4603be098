//! Naive persistence baseline

use crate::error::PredictionError;
use crate::models::Predictor;
use price_features::FeatureVector;

/// Predicts that tomorrow's close equals the most recent one (`lag1`).
///
/// Under recursive forecasting this yields a flat line at the anchor's
/// `lag1`, which makes it a useful floor to compare trained models against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistenceModel;

impl Predictor for PersistenceModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        Ok(features[4])
    }

    fn name(&self) -> &str {
        "persistence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_lag1() {
        let features = [2024.0, 1.0, 2.0, 1.0, 81.5, 80.0, 79.0, 75.0];
        assert_eq!(PersistenceModel.predict(&features).unwrap(), 81.5);
    }
}
