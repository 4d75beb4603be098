//! Feature rows for training and inference

use crate::calendar::CalendarFeatures;
use crate::lags::{LagFeatures, MAX_LAG};
use crate::series::PriceSeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of model inputs per row: four calendar attributes and four lags
pub const FEATURE_COUNT: usize = 8;

/// Model input: `[year, month, day, dayofweek, lag1, lag2, lag3, lag7]`
pub type FeatureVector = [f64; FEATURE_COUNT];

/// A series row annotated with calendar and lag features.
///
/// Only rows with a complete lag window are ever built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub date: NaiveDate,
    pub close: f64,
    pub calendar: CalendarFeatures,
    pub lags: LagFeatures,
}

impl FeatureRow {
    /// Assemble the model input for this row
    pub fn feature_vector(&self) -> FeatureVector {
        let calendar = self.calendar.as_array();
        let lags = self.lags.as_array();

        [
            calendar[0], calendar[1], calendar[2], calendar[3], lags[0], lags[1], lags[2], lags[3],
        ]
    }
}

/// Derive feature rows from `series`.
///
/// The first [`MAX_LAG`] rows lack a full lag window and are dropped, so the
/// output has `len - 7` rows (or none) in the same order as the input.
pub fn create_features(series: &PriceSeries) -> Vec<FeatureRow> {
    let closes = series.closes();

    let rows: Vec<FeatureRow> = series
        .points()
        .iter()
        .enumerate()
        .skip(MAX_LAG)
        .filter_map(|(index, point)| {
            LagFeatures::at(&closes, index).ok().map(|lags| FeatureRow {
                date: point.date,
                close: point.close,
                calendar: CalendarFeatures::from_date(point.date),
                lags,
            })
        })
        .collect();

    debug!(
        input_rows = series.len(),
        feature_rows = rows.len(),
        "created feature rows"
    );

    rows
}

/// Split feature rows into an input matrix and close targets
pub fn training_set(rows: &[FeatureRow]) -> (Vec<FeatureVector>, Vec<f64>) {
    rows.iter().map(|row| (row.feature_vector(), row.close)).unzip()
}
