//! # Brent Forecast
//!
//! Feature engineering and recursive multi-day forecasting for the Brent
//! crude closing price series.
//!
//! The pipeline is: price series → [`create_features`] → last feature row →
//! [`forecast_next_days`] with any [`Predictor`] → dated forecast.
//!
//! ## Example
//!
//! ```
//! use brent_forecast_workspace::{forecast_series, PersistenceModel, PriceSeries};
//! use chrono::{Duration, NaiveDate};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let series = PriceSeries::from_pairs(
//!     (0..10).map(|i| (start + Duration::days(i), 75.0 + i as f64)),
//! )
//! .unwrap();
//!
//! let forecast = forecast_series(&PersistenceModel, &series).unwrap();
//! assert_eq!(forecast.len(), 7);
//! assert_eq!(forecast.values()[0], 83.0);
//! ```

pub use oil_forecast::{
    evaluate_forecast, forecast_accuracy, forecast_next_days, Forecast, ForecastAccuracy,
    ForecastConfig, ForecastError, ForecastHorizon, ForecastStep, LagState, LinearLagModel,
    PersistenceModel, PredictionError, Predictor, RecursiveForecaster,
};
pub use price_features::{
    create_features, training_set, CalendarFeatures, FeatureError, FeatureRow, LagFeatures,
    PricePoint, PriceSeries,
};

/// Forecast the default seven days past the end of `series`
pub fn forecast_series<P>(model: &P, series: &PriceSeries) -> oil_forecast::Result<Forecast>
where
    P: Predictor + ?Sized,
{
    RecursiveForecaster::default().forecast_series(model, series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn series(len: usize) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        PriceSeries::from_pairs((0..len).map(|i| (start + Duration::days(i as i64), i as f64)))
            .unwrap()
    }

    #[test]
    fn test_forecast_series_default_horizon() {
        let forecast = forecast_series(&PersistenceModel, &series(20)).unwrap();
        assert_eq!(forecast.len(), 7);
        assert_eq!(forecast.anchor_close(), 19.0);
    }

    #[test]
    fn test_short_series_is_rejected() {
        let result = forecast_series(&PersistenceModel, &series(7));
        assert!(matches!(result, Err(ForecastError::InsufficientHistory(_))));
    }
}
