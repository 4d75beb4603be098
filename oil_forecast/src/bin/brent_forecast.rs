use chrono::{Datelike, NaiveDate, Weekday};
use clap::{Parser, ValueEnum};
use oil_forecast::{
    evaluate_forecast, ForecastConfig, LinearLagModel, LogFormat, PersistenceModel, Predictor,
    RecursiveForecaster,
};
use price_features::{PricePoint, PriceSeries};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelKind {
    Persistence,
    Linear,
}

/// Forecast synthetic Brent closes a few days ahead
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Days to forecast, overriding the configuration
    #[arg(long)]
    horizon: Option<usize>,

    #[arg(short, long, value_enum, default_value = "linear")]
    model: ModelKind,

    /// Trading days of synthetic history to generate
    #[arg(long, default_value_t = 120)]
    days: usize,

    /// Seed for the synthetic random walk
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Hold back the last N trading days and score the forecast against them
    #[arg(long, default_value_t = 0)]
    holdout: usize,

    /// Print the forecast as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ForecastConfig::from_file(path)?,
        None => ForecastConfig::default(),
    };
    if let Some(horizon) = cli.horizon {
        config.horizon = horizon;
    }
    config.validate()?;

    init_tracing(&config);

    let history = generate_trading_days(cli.days + cli.holdout, cli.seed)?;
    let split = history.len() - cli.holdout;
    let series = PriceSeries::new(history[..split].to_vec())?;
    let realised = PriceSeries::new(history)?;
    info!(rows = series.len(), "generated synthetic history");

    let model: Box<dyn Predictor> = match cli.model {
        ModelKind::Persistence => Box::new(PersistenceModel),
        ModelKind::Linear => Box::new(LinearLagModel::autoregressive(
            0.4,
            [0.82, 0.09, 0.05, 0.035],
        )),
    };

    let forecaster = RecursiveForecaster::from_config(&config)?;
    let forecast = forecaster.forecast_series(&model, &series)?;

    if cli.json {
        println!("{}", forecast.to_json()?);
    } else {
        println!("Brent Forecast ({} model)", model.name());
        println!("==============================");
        println!(
            "Last close {:.2} on {}",
            forecast.anchor_close(),
            forecast.anchor_date()
        );
        for step in forecast.steps() {
            println!(
                "  {} ({:?}): {:.2}",
                step.date,
                step.date.weekday(),
                step.predicted_close
            );
        }
    }

    if cli.holdout > 0 {
        match evaluate_forecast(&forecast, &realised) {
            Ok(accuracy) => print!("\n{accuracy}"),
            Err(e) => tracing::warn!(error = %e, "could not score forecast"),
        }
    }

    Ok(())
}

fn init_tracing(config: &ForecastConfig) {
    let filter = EnvFilter::new(&config.log_level);
    match config.log_format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// Weekday-only random walk around 80 USD, like a real trading calendar
fn generate_trading_days(
    count: usize,
    seed: u64,
) -> Result<Vec<PricePoint>, Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.2)?;

    let mut date = NaiveDate::from_ymd_opt(2024, 1, 2).ok_or("invalid start date")?;
    let mut close = 80.0_f64;
    let mut points = Vec::with_capacity(count);

    while points.len() < count {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            close = (close + noise.sample(&mut rng)).max(1.0);
            points.push(PricePoint::new(date, close));
        }
        date = date.succ_opt().ok_or("ran out of dates")?;
    }

    Ok(points)
}
