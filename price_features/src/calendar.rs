//! Calendar attributes derived from a date

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Integer calendar attributes of a single date.
///
/// `day_of_week` counts from Monday = 0 to Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarFeatures {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub day_of_week: u32,
}

impl CalendarFeatures {
    /// Extract the calendar attributes of `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            day_of_week: date.weekday().num_days_from_monday(),
        }
    }

    /// The attributes in model input order: year, month, day, day of week
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.year as f64,
            self.month as f64,
            self.day as f64,
            self.day_of_week as f64,
        ]
    }
}

impl From<NaiveDate> for CalendarFeatures {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
