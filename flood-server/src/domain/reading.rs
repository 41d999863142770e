//! Readings and the time window they are requested over.

use chrono::{DateTime, Duration, Utc};

/// A single reading from a station measure.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// When the reading was taken.
    pub date_time: DateTime<Utc>,

    /// URI of the measure this reading belongs to.
    pub measure: String,

    /// The recorded value, in the measure's unit.
    pub value: f64,
}

/// How far back to fetch readings.
///
/// Mirrors the `period` query parameter of `/api/readings/:id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReadingPeriod {
    /// The last 24 hours (the default).
    #[default]
    Last24Hours,

    /// The last 7 days.
    Last7Days,
}

impl ReadingPeriod {
    /// Parse a period string from the query parameter.
    ///
    /// Accepts `24h` for the last day and `7d`, `week` or `7days` for the
    /// last week. Anything else falls back to 24 hours rather than
    /// erroring; existing frontend callers rely on this leniency.
    pub fn parse(s: &str) -> Self {
        match s {
            "7d" | "week" | "7days" => ReadingPeriod::Last7Days,
            _ => ReadingPeriod::Last24Hours,
        }
    }

    /// The cutoff instant for this period, relative to `now`.
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            ReadingPeriod::Last24Hours => now - Duration::hours(24),
            ReadingPeriod::Last7Days => now - Duration::days(7),
        }
    }

    /// Canonical query-parameter form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingPeriod::Last24Hours => "24h",
            ReadingPeriod::Last7Days => "7d",
        }
    }
}
