//! Recursive multi-step forecasting
//!
//! A one-step predictor is turned into a multi-day forecast by feeding each
//! prediction back in as `lag1` for the next step. Forecast dates advance one
//! calendar day at a time, weekends and holidays included, while the lags
//! the model was trained on are positional over trading days. Callers that
//! need trading-day output must filter the steps themselves.

use crate::config::ForecastConfig;
use crate::error::{ForecastError, PredictionError, Result};
use crate::horizon::ForecastHorizon;
use crate::lag_state::LagState;
use crate::models::Predictor;
use chrono::NaiveDate;
use price_features::{create_features, FeatureRow, PriceSeries, MAX_LAG};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One forecast day and the lag window that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastStep {
    pub date: NaiveDate,
    pub predicted_close: f64,
    pub lags: LagState,
}

/// Result of a recursive forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    anchor_date: NaiveDate,
    anchor_close: f64,
    steps: Vec<ForecastStep>,
    final_state: LagState,
}

impl Forecast {
    /// Date of the last known row the forecast was seeded from
    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    /// Realised close on the anchor date
    pub fn anchor_close(&self) -> f64 {
        self.anchor_close
    }

    pub fn steps(&self) -> &[ForecastStep] {
        &self.steps
    }

    /// Lag window after the last step
    pub fn final_state(&self) -> LagState {
        self.final_state
    }

    /// Number of forecast steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Forecast dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.steps.iter().map(|s| s.date).collect()
    }

    /// Predicted closes in order
    pub fn values(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.predicted_close).collect()
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Forecast `horizon` days past the last row of `rows`.
///
/// The last row is the anchor: its lags seed the window and the first
/// forecast date is the day after it. Any predictor failure, or a non-finite
/// prediction, aborts the whole forecast and no partial steps are returned.
pub fn forecast_next_days<P>(
    model: &P,
    rows: &[FeatureRow],
    horizon: ForecastHorizon,
) -> Result<Forecast>
where
    P: Predictor + ?Sized,
{
    let anchor = rows.last().ok_or_else(|| {
        ForecastError::InsufficientHistory(format!(
            "No feature rows to anchor the forecast; at least {} price rows are required",
            MAX_LAG + 1
        ))
    })?;

    let dates = forecast_dates(anchor.date, horizon)?;

    info!(
        model = model.name(),
        anchor_date = %anchor.date,
        horizon = horizon.get(),
        "starting recursive forecast"
    );

    let mut state = LagState::from_row(anchor);
    let mut steps = Vec::with_capacity(horizon.get());

    for (step, date) in dates.into_iter().enumerate() {
        let features = state.feature_vector(date);
        let predicted_close = model
            .predict(&features)
            .and_then(|yhat| {
                if yhat.is_finite() {
                    Ok(yhat)
                } else {
                    Err(PredictionError::NonFinite(yhat))
                }
            })
            .map_err(|source| ForecastError::Prediction { step, source })?;

        debug!(step, %date, predicted_close, lags = ?state.values(), "forecast step");

        steps.push(ForecastStep {
            date,
            predicted_close,
            lags: state,
        });
        state = state.advance(predicted_close);
    }

    Ok(Forecast {
        anchor_date: anchor.date,
        anchor_close: anchor.close,
        steps,
        final_state: state,
    })
}

/// Consecutive calendar days after `anchor`
fn forecast_dates(anchor: NaiveDate, horizon: ForecastHorizon) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::with_capacity(horizon.get());
    let mut current = anchor;

    for _ in 0..horizon.get() {
        current = current.succ_opt().ok_or_else(|| {
            ForecastError::ValidationError(format!(
                "Forecast of {} days from {} runs past the last representable date",
                horizon, anchor
            ))
        })?;
        dates.push(current);
    }

    Ok(dates)
}

/// Forecaster with a fixed horizon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecursiveForecaster {
    horizon: ForecastHorizon,
}

impl RecursiveForecaster {
    pub fn new(horizon: ForecastHorizon) -> Self {
        Self { horizon }
    }

    /// Create a forecaster from a validated configuration
    pub fn from_config(config: &ForecastConfig) -> Result<Self> {
        Ok(Self::new(config.horizon()?))
    }

    pub fn horizon(&self) -> ForecastHorizon {
        self.horizon
    }

    /// Forecast past the last of `rows`
    pub fn forecast<P>(&self, model: &P, rows: &[FeatureRow]) -> Result<Forecast>
    where
        P: Predictor + ?Sized,
    {
        forecast_next_days(model, rows, self.horizon)
    }

    /// Derive feature rows from `series`, then forecast past its last row
    pub fn forecast_series<P>(&self, model: &P, series: &PriceSeries) -> Result<Forecast>
    where
        P: Predictor + ?Sized,
    {
        let rows = create_features(series);
        if rows.is_empty() {
            return Err(ForecastError::InsufficientHistory(format!(
                "Series has {} rows; at least {} are required",
                series.len(),
                MAX_LAG + 1
            )));
        }

        self.forecast(model, &rows)
    }
}
