//! Error types for the oil_forecast crate

use price_features::FeatureError;
use thiserror::Error;

/// Failure reported by a predictor for a single feature vector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// The model backend could not produce a value
    #[error("Model backend error: {0}")]
    Backend(String),

    /// The model expects a different number of inputs
    #[error("Model expects {expected} features, got {actual}")]
    Shape { expected: usize, actual: usize },

    /// The model produced NaN or an infinity
    #[error("Model returned a non-finite value: {0}")]
    NonFinite(f64),
}

/// Custom error types for the oil_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Not enough feature-complete history to anchor a forecast
    #[error("Insufficient history: {0}")]
    InsufficientHistory(String),

    /// The predictor failed; the whole forecast is abandoned
    #[error("Prediction failed at step {step}: {source}")]
    Prediction {
        step: usize,
        #[source]
        source: PredictionError,
    },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from building the price series or its features
    #[error("Feature error: {0}")]
    Features(#[from] FeatureError),

    /// Error from JSON (de)serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
