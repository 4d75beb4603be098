//! Forecast horizon

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Number of steps to forecast. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ForecastHorizon(NonZeroUsize);

impl ForecastHorizon {
    /// Seven days ahead, as shown on the dashboard
    pub const DEFAULT_STEPS: usize = 7;

    pub fn new(steps: usize) -> Result<Self> {
        NonZeroUsize::new(steps).map(Self).ok_or_else(|| {
            ForecastError::InvalidParameter("Forecast horizon must be at least 1".to_string())
        })
    }

    /// Number of steps
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for ForecastHorizon {
    fn default() -> Self {
        Self(NonZeroUsize::new(Self::DEFAULT_STEPS).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for ForecastHorizon {
    type Error = ForecastError;

    fn try_from(steps: usize) -> Result<Self> {
        Self::new(steps)
    }
}

impl From<ForecastHorizon> for usize {
    fn from(horizon: ForecastHorizon) -> Self {
        horizon.get()
    }
}

impl fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
