use oil_forecast::{ForecastConfig, ForecastError, LogFormat, RecursiveForecaster};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"horizon": 14, "log_level": "oil_forecast=debug", "log_format": "json"}}"#
    )
    .unwrap();

    let config = ForecastConfig::from_file(file.path()).unwrap();

    assert_eq!(config.horizon, 14);
    assert_eq!(config.log_level, "oil_forecast=debug");
    assert_eq!(config.log_format, LogFormat::Json);

    let forecaster = RecursiveForecaster::from_config(&config).unwrap();
    assert_eq!(forecaster.horizon().get(), 14);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = ForecastConfig::from_file("/nonexistent/brent/config.json");
    assert!(matches!(result, Err(ForecastError::IoError(_))));
}

#[test]
fn test_default_config() {
    let config = ForecastConfig::default();
    assert_eq!(config.horizon, 7);
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.validate().is_ok());
}
