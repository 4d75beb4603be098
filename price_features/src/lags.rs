//! Positional lag features
//!
//! Lags are taken by position in the series, not by calendar offset: on a
//! trading-day series `lag7` is the close seven rows back, whatever the dates.

use crate::{FeatureError, Result};
use serde::{Deserialize, Serialize};

/// Row offsets used for the lag features, in model input order
pub const LAG_OFFSETS: [usize; 4] = [1, 2, 3, 7];

/// Number of prior rows needed before a row has a complete lag window
pub const MAX_LAG: usize = 7;

/// Closing prices 1, 2, 3 and 7 rows before a given row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagFeatures {
    pub lag1: f64,
    pub lag2: f64,
    pub lag3: f64,
    pub lag7: f64,
}

impl LagFeatures {
    /// Read the lags of the row at `index` out of `closes`.
    ///
    /// Fails when fewer than [`MAX_LAG`] rows precede `index`.
    pub fn at(closes: &[f64], index: usize) -> Result<Self> {
        if index < MAX_LAG || index >= closes.len() {
            return Err(FeatureError::InsufficientData(format!(
                "Row {} needs {} prior rows in a series of {}",
                index,
                MAX_LAG,
                closes.len()
            )));
        }

        Ok(Self {
            lag1: closes[index - LAG_OFFSETS[0]],
            lag2: closes[index - LAG_OFFSETS[1]],
            lag3: closes[index - LAG_OFFSETS[2]],
            lag7: closes[index - LAG_OFFSETS[3]],
        })
    }

    /// The lags in model input order
    pub fn as_array(&self) -> [f64; 4] {
        [self.lag1, self.lag2, self.lag3, self.lag7]
    }
}

impl From<[f64; 4]> for LagFeatures {
    fn from(values: [f64; 4]) -> Self {
        Self {
            lag1: values[0],
            lag2: values[1],
            lag3: values[2],
            lag7: values[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lags_are_positional() {
        let closes: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let lags = LagFeatures::at(&closes, 9).unwrap();

        assert_eq!(lags.as_array(), [8.0, 7.0, 6.0, 2.0]);
    }

    #[test]
    fn test_incomplete_window_is_rejected() {
        let closes = vec![1.0; 10];

        assert!(LagFeatures::at(&closes, 6).is_err());
        assert!(LagFeatures::at(&closes, 7).is_ok());
        assert!(LagFeatures::at(&closes, 10).is_err());
    }

    #[test]
    fn test_array_round_trip() {
        let lags = LagFeatures::from([4.0, 3.0, 2.0, 1.0]);
        assert_eq!(lags.lag7, 1.0);
        assert_eq!(lags.as_array(), [4.0, 3.0, 2.0, 1.0]);
    }
}
