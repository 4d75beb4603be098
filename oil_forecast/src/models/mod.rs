//! Predictor seam between the forecaster and a trained model
//!
//! A trained model is anything that maps one feature vector to one closing
//! price. Training and artifact loading live outside this crate; the
//! forecaster only borrows a predictor for the duration of a forecast.

use crate::error::PredictionError;
use price_features::FeatureVector;

pub mod linear;
pub mod persistence;

pub use linear::LinearLagModel;
pub use persistence::PersistenceModel;

/// One-step point predictor over `[year, month, day, dayofweek, lag1, lag2, lag3, lag7]`
pub trait Predictor {
    /// Predict the close for a single feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// Name of the model
    fn name(&self) -> &str {
        "predictor"
    }
}

impl<P: Predictor + ?Sized> Predictor for &P {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        (**self).predict(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        (**self).predict(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Predictor backed by a closure, mostly for stubbing a model in tests
pub struct FnPredictor<F> {
    name: String,
    f: F,
}

impl<F> Predictor for FnPredictor<F>
where
    F: Fn(&FeatureVector) -> Result<f64, PredictionError>,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        (self.f)(features)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnPredictor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPredictor").field("name", &self.name).finish()
    }
}

/// Wrap a closure as a [`Predictor`]
pub fn from_fn<F>(name: &str, f: F) -> FnPredictor<F>
where
    F: Fn(&FeatureVector) -> Result<f64, PredictionError>,
{
    FnPredictor {
        name: name.to_string(),
        f,
    }
}
