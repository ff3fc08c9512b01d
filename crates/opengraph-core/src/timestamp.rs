use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// A point-in-time value emitted in its canonical ISO-8601 form.
///
/// Accepts a full RFC 3339 date-time, a date-time without offset, or a bare
/// calendar date; whichever precision came in is what goes out. Never
/// locale-formatted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    DateTime(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
    Date(NaiveDate),
}

impl Timestamp {
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self::DateTime(dt));
        }
        if let Ok(dt) = value.parse::<NaiveDateTime>() {
            return Ok(Self::Naive(dt));
        }
        value.parse::<NaiveDate>().map(Self::Date)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Timestamp::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Timestamp::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
