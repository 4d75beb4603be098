//! # Price Features
//!
//! Feature engineering for daily price series.
//! This crate turns an ordered `(date, close)` series into model-ready rows
//! carrying calendar attributes and fixed positional lags.
//!
//! ```
//! use chrono::NaiveDate;
//! use price_features::{create_features, PriceSeries};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let series = PriceSeries::from_pairs(
//!     (0..8).map(|i| (start + chrono::Duration::days(i), 10.0 + i as f64)),
//! )
//! .unwrap();
//!
//! let rows = create_features(&series);
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].lags.lag1, 16.0);
//! assert_eq!(rows[0].lags.lag7, 10.0);
//! ```

use thiserror::Error;

pub mod calendar;
pub mod features;
pub mod lags;
pub mod series;

pub use crate::calendar::CalendarFeatures;
pub use crate::features::{create_features, training_set, FeatureRow, FeatureVector, FEATURE_COUNT};
pub use crate::lags::{LagFeatures, LAG_OFFSETS, MAX_LAG};
pub use crate::series::{PricePoint, PriceSeries};

/// Errors that can occur while building or deriving features from a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dates must be strictly increasing: {previous} is followed by {next}")]
    UnorderedDates {
        previous: chrono::NaiveDate,
        next: chrono::NaiveDate,
    },
}

/// Result type for feature engineering operations
pub type Result<T> = std::result::Result<T, FeatureError>;
