//! Metrics for evaluating forecast accuracy

use crate::error::{ForecastError, Result};
use crate::forecaster::Forecast;
use price_features::PriceSeries;

/// Forecast accuracy metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, in percent
    pub mape: f64,
    /// Number of forecast/actual pairs compared
    pub observations: usize,
}

/// Calculate accuracy metrics for a forecast vs actual values
pub fn forecast_accuracy(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::ValidationError(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = forecast.len() as f64;

    let errors: Vec<f64> = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;
    let rmse = mse.sqrt();

    // Zero actuals contribute nothing to the sum but still count in n
    let mape = actual
        .iter()
        .zip(errors.iter())
        .filter(|(&a, _)| a != 0.0)
        .map(|(&a, &e)| (e.abs() / a.abs()) * 100.0)
        .sum::<f64>()
        / n;

    Ok(ForecastAccuracy {
        mae,
        mse,
        rmse,
        mape,
        observations: forecast.len(),
    })
}

/// Score a forecast against the realised series.
///
/// Steps are matched to realised closes by date. Forecast days the series has
/// no close for (weekends, holidays, the future) are left out.
pub fn evaluate_forecast(forecast: &Forecast, realised: &PriceSeries) -> Result<ForecastAccuracy> {
    let (predicted, actual): (Vec<f64>, Vec<f64>) = forecast
        .steps()
        .iter()
        .filter_map(|step| {
            realised
                .close_on(step.date)
                .map(|close| (step.predicted_close, close))
        })
        .unzip();

    if predicted.is_empty() {
        return Err(ForecastError::ValidationError(format!(
            "None of the {} forecast dates have a realised close",
            forecast.len()
        )));
    }

    forecast_accuracy(&predicted, &actual)
}

impl std::fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics ({} days):", self.observations)?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  MSE:   {:.4}", self.mse)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape)?;
        Ok(())
    }
}
