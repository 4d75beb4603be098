//! Rolling lag window carried between forecast steps

use chrono::NaiveDate;
use price_features::{CalendarFeatures, FeatureRow, FeatureVector, LagFeatures};
use serde::{Deserialize, Serialize};

/// The `(lag1, lag2, lag3, lag7)` window fed to the predictor.
///
/// Seeded from the anchor row's real lags. Each forecast step shifts the
/// window right by one slot, dropping the oldest value, and puts the new
/// prediction in front. After a few steps the window holds only synthetic
/// values; it is never corrected against realised prices mid-horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagState([f64; 4]);

impl LagState {
    pub fn new(values: [f64; 4]) -> Self {
        Self(values)
    }

    /// Seed the window from the anchor row's lags (not its close)
    pub fn from_row(row: &FeatureRow) -> Self {
        Self(row.lags.as_array())
    }

    /// The state after a step that predicted `yhat`
    #[must_use]
    pub fn advance(self, yhat: f64) -> Self {
        let mut next = self.0;
        next.rotate_right(1);
        next[0] = yhat;
        Self(next)
    }

    /// Window values in slot order
    pub fn values(&self) -> [f64; 4] {
        self.0
    }

    pub fn lag1(&self) -> f64 {
        self.0[0]
    }

    /// Model input for a forecast dated `date`: its calendar attributes
    /// followed by the current window
    pub fn feature_vector(&self, date: NaiveDate) -> FeatureVector {
        let calendar = CalendarFeatures::from_date(date).as_array();
        [
            calendar[0], calendar[1], calendar[2], calendar[3], self.0[0], self.0[1], self.0[2],
            self.0[3],
        ]
    }
}

impl From<LagFeatures> for LagState {
    fn from(lags: LagFeatures) -> Self {
        Self(lags.as_array())
    }
}

impl From<LagState> for LagFeatures {
    fn from(state: LagState) -> Self {
        LagFeatures::from(state.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_shifts_and_overwrites_front() {
        let state = LagState::new([16.0, 15.0, 14.0, 10.0]);
        let next = state.advance(17.0);

        // Old lag7 is dropped, old lag3 moves into the lag7 slot
        assert_eq!(next.values(), [17.0, 16.0, 15.0, 14.0]);
        assert_eq!(state.values(), [16.0, 15.0, 14.0, 10.0]);
    }

    #[test]
    fn test_constant_predictions_fill_every_slot() {
        let mut state = LagState::new([1.0, 2.0, 3.0, 4.0]);
        for _ in 0..4 {
            state = state.advance(42.0);
        }
        assert_eq!(state.values(), [42.0; 4]);
    }

    #[test]
    fn test_partial_fill() {
        let state = LagState::new([1.0, 2.0, 3.0, 4.0]).advance(9.0).advance(8.0);
        assert_eq!(state.values(), [8.0, 9.0, 1.0, 2.0]);
        assert_eq!(state.lag1(), 8.0);
    }

    #[test]
    fn test_feature_vector_uses_forecast_date() {
        let state = LagState::new([4.0, 3.0, 2.0, 1.0]);
        // 2024-06-01 is a Saturday
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        assert_eq!(
            state.feature_vector(date),
            [2024.0, 6.0, 1.0, 5.0, 4.0, 3.0, 2.0, 1.0]
        );
    }
}
