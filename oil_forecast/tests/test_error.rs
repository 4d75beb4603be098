use oil_forecast::{ForecastError, PredictionError};
use price_features::{FeatureError, PriceSeries};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = ForecastError::InsufficientHistory("need 8 rows".to_string());
    assert_eq!(error.to_string(), "Insufficient history: need 8 rows");

    let error = ForecastError::Prediction {
        step: 3,
        source: PredictionError::NonFinite(f64::INFINITY),
    };
    let message = error.to_string();
    assert!(message.contains("step 3"));
    assert!(message.contains("non-finite"));
}

#[test]
fn test_prediction_error_is_the_source() {
    let error = ForecastError::Prediction {
        step: 0,
        source: PredictionError::Shape {
            expected: 8,
            actual: 5,
        },
    };

    let source = error.source().unwrap();
    assert_eq!(source.to_string(), "Model expects 8 features, got 5");
}

#[test]
fn test_feature_error_conversion() {
    fn build() -> oil_forecast::Result<PriceSeries> {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Ok(PriceSeries::from_pairs(vec![(date, 1.0), (date, 2.0)])?)
    }

    match build() {
        Err(ForecastError::Features(FeatureError::UnorderedDates { .. })) => {}
        other => panic!("Expected Features error, got {:?}", other),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = ForecastError::from(json_error);

    assert!(error.to_string().starts_with("Serialization error"));
}
