//! Ordered daily closing price series

use crate::{FeatureError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A single dated closing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Closing prices ordered by strictly increasing date.
///
/// The ordering is checked on construction, so every consumer can rely on
/// ascending dates with no duplicates. The only mutation is appending rows
/// newer than the current last date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create a series from points already sorted ascending by date
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        validate_points(&points)?;
        Ok(Self { points })
    }

    /// Create a series from `(date, close)` pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(date, close)| PricePoint::new(date, close))
                .collect(),
        )
    }

    /// Append the rows dated after the current last date.
    ///
    /// Rows on or before the last known date are skipped. The remaining rows
    /// must be strictly increasing. Returns how many rows were appended; on
    /// error the series is left unchanged.
    pub fn append_newer<I>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = PricePoint>,
    {
        let last_date = self.last().map(|p| p.date);
        let (newer, stale): (Vec<PricePoint>, Vec<PricePoint>) = rows
            .into_iter()
            .partition(|p| last_date.map_or(true, |last| p.date > last));

        if !stale.is_empty() {
            warn!(
                skipped = stale.len(),
                last_date = ?last_date,
                "skipping rows that are not newer than the series"
            );
        }

        validate_points(&newer)?;

        let appended = newer.len();
        self.points.extend(newer);
        debug!(appended, total = self.points.len(), "appended newer rows");

        Ok(appended)
    }

    /// Number of rows in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no rows
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All rows, oldest first
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices, oldest first
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Dates, oldest first
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Closing price on `date`, if the series has a row for it
    pub fn close_on(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| self.points[i].close)
    }
}

impl<'de> Deserialize<'de> for PriceSeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            points: Vec<PricePoint>,
        }

        let raw = Raw::deserialize(deserializer)?;
        PriceSeries::new(raw.points).map_err(serde::de::Error::custom)
    }
}

fn validate_points(points: &[PricePoint]) -> Result<()> {
    if let Some(bad) = points.iter().find(|p| !p.close.is_finite()) {
        return Err(FeatureError::InvalidInput(format!(
            "Close on {} is not a finite number: {}",
            bad.date, bad.close
        )));
    }

    if let Some(pair) = points.windows(2).find(|w| w[1].date <= w[0].date) {
        return Err(FeatureError::UnorderedDates {
            previous: pair[0].date,
            next: pair[1].date,
        });
    }

    Ok(())
}
