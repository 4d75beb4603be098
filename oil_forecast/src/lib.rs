//! # Oil Forecast
//!
//! Recursive multi-day forecasting of Brent crude closing prices.
//!
//! ## Features
//!
//! - A [`Predictor`] seam for any trained one-step model
//! - Recursive forecasting that feeds each prediction back in as `lag1`
//! - A rolling [`LagState`] that can be tested apart from any model
//! - Accuracy metrics against realised prices
//! - JSON configuration and `tracing` instrumentation
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use oil_forecast::models::from_fn;
//! use oil_forecast::{forecast_next_days, ForecastHorizon};
//! use price_features::{create_features, PriceSeries};
//!
//! let day0 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let series = PriceSeries::from_pairs(
//!     (0..8).map(|i| (day0 + Duration::days(i), 10.0 + i as f64)),
//! )?;
//! let rows = create_features(&series);
//!
//! // Stub model: yesterday's close plus one
//! let model = from_fn("lag1 + 1", |v| Ok(v[4] + 1.0));
//! let forecast = forecast_next_days(&model, &rows, ForecastHorizon::new(2)?)?;
//!
//! assert_eq!(forecast.values(), vec![17.0, 18.0]);
//! assert_eq!(forecast.dates()[0], day0 + Duration::days(8));
//! # Ok::<(), oil_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod error;
pub mod forecaster;
pub mod horizon;
pub mod lag_state;
pub mod metrics;
pub mod models;

// Re-export commonly used types
pub use crate::config::{ForecastConfig, LogFormat};
pub use crate::error::{ForecastError, PredictionError, Result};
pub use crate::forecaster::{forecast_next_days, Forecast, ForecastStep, RecursiveForecaster};
pub use crate::horizon::ForecastHorizon;
pub use crate::lag_state::LagState;
pub use crate::metrics::{evaluate_forecast, forecast_accuracy, ForecastAccuracy};
pub use crate::models::{LinearLagModel, PersistenceModel, Predictor};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
