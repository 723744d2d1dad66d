//! # Temporal Values
//!
//! Schedule fields carry ISO 8601 calendar dates. The year an existing
//! building was completed is often known only to the year, so
//! [`ConstructionDate`] admits either form.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Wire format of calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    // chrono accepts single-digit months and days; the wire format does not.
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// A full calendar date or a bare year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstructionDate {
    /// Exact date.
    Date(NaiveDate),
    /// Year only.
    Year(i32),
}

impl ConstructionDate {
    /// The calendar year, whichever form was supplied.
    pub fn year(&self) -> i32 {
        match self {
            ConstructionDate::Date(d) => d.year(),
            ConstructionDate::Year(y) => *y,
        }
    }
}

impl fmt::Display for ConstructionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionDate::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            ConstructionDate::Year(y) => write!(f, "{y}"),
        }
    }
}
