use chrono::NaiveDate;
use itertools::Itertools;

use crate::error::{PrescriptorError, PrescriptorResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> PrescriptorResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|err| {
        PrescriptorError::InvalidDate {
            value: value.to_string(),
            reason: err.to_string(),
        }
    })
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Every day from `start` to `end`, both included. Empty when `start` is after `end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|date| *date <= end).collect_vec()
}
