//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Formats the local calendar date in long US form, e.g. "October 26, 2023".
    ///
    /// This is the date string stored on saved decisions.
    pub fn display_date(&self) -> String {
        long_date(self.0.with_timezone(&Local).date_naive())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
