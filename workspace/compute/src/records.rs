//! Typed projections of the unified dataset rows.
//!
//! The dataset stores observations and cataloged events in one table; the
//! `record_type` column tells them apart. Parsing here is lenient: a value
//! that does not parse becomes absent instead of failing the load.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::str::FromStr;

/// Discriminator between the two row streams of the unified dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Observation,
    Event,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::Observation => "observation",
            RecordType::Event => "event",
        }
    }
}

impl FromStr for RecordType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "observation" => Ok(RecordType::Observation),
            "event" => Ok(RecordType::Event),
            _ => Err(()),
        }
    }
}

/// Rows that carry an (optional) calendar date.
pub trait Dated {
    fn date(&self) -> Option<NaiveDate>;
}

/// A time-series measurement of one indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub record_id: Option<String>,
    pub observation_date: Option<NaiveDate>,
    pub indicator_code: Option<String>,
    pub value_numeric: Option<f64>,
}

impl Dated for Observation {
    fn date(&self) -> Option<NaiveDate> {
        self.observation_date
    }
}

/// A cataloged event. The dataset keeps the event date in
/// `observation_date` and the event title in `indicator`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub record_id: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub source_name: Option<String>,
    pub confidence: Option<String>,
}

impl Dated for Event {
    fn date(&self) -> Option<NaiveDate> {
        self.event_date
    }
}

// Slash dates without a leading year are read month first.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses a date cell, returning `None` for anything unrecognized.
///
/// Accepts plain dates, ISO date-times (the time part is dropped), `YYYY-MM`
/// (first of the month) and a bare `YYYY` (first of January).
pub fn parse_lenient_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
    {
        return Some(date);
    }

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(datetime.date());
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }

    // YYYY-MM and YYYY
    let parts: Vec<&str> = raw.split('-').collect();
    match parts.as_slice() {
        [year, month] if year.len() == 4 => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        [year] if year.len() == 4 => NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1),
        _ => None,
    }
}

/// Parses a numeric cell; empty, non-numeric and non-finite values are absent.
pub fn parse_lenient_f64(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses a year cell, tolerating float formatting such as `2025.0`.
pub fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    raw.parse::<i32>().ok().or_else(|| {
        parse_lenient_f64(raw)
            .filter(|value| value.fract() == 0.0)
            .map(|value| value as i32)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_dates() {
        assert_eq!(parse_lenient_date("2022-01-01"), Some(date(2022, 1, 1)));
        assert_eq!(parse_lenient_date(" 2021/12/31 "), Some(date(2021, 12, 31)));
    }

    #[test]
    fn test_slash_dates_are_month_first() {
        assert_eq!(parse_lenient_date("12/31/2021"), Some(date(2021, 12, 31)));
        assert_eq!(parse_lenient_date("01/02/2022"), Some(date(2022, 1, 2)));
        assert_eq!(parse_lenient_date("31/12/2021"), None);
    }

    #[test]
    fn test_parse_datetimes_keep_the_date() {
        assert_eq!(parse_lenient_date("2024-06-30 13:45:00"), Some(date(2024, 6, 30)));
        assert_eq!(parse_lenient_date("2024-06-30T13:45:00"), Some(date(2024, 6, 30)));
        assert_eq!(parse_lenient_date("2024-06-30T13:45:00.250"), Some(date(2024, 6, 30)));
        assert_eq!(parse_lenient_date("2024-06-30T23:00:00+03:00"), Some(date(2024, 6, 30)));
    }

    #[test]
    fn test_parse_partial_dates() {
        assert_eq!(parse_lenient_date("2021-05"), Some(date(2021, 5, 1)));
        assert_eq!(parse_lenient_date("2017"), Some(date(2017, 1, 1)));
    }

    #[test]
    fn test_malformed_dates_are_absent() {
        assert_eq!(parse_lenient_date(""), None);
        assert_eq!(parse_lenient_date("not-a-date"), None);
        assert_eq!(parse_lenient_date("2021-13-01"), None);
        assert_eq!(parse_lenient_date("2021-02-30"), None);
        assert_eq!(parse_lenient_date("21"), None);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_lenient_f64("46.0"), Some(46.0));
        assert_eq!(parse_lenient_f64(" 4.7 "), Some(4.7));
        assert_eq!(parse_lenient_f64(""), None);
        assert_eq!(parse_lenient_f64("n/a"), None);
        assert_eq!(parse_lenient_f64("NaN"), None);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2027"), Some(2027));
        assert_eq!(parse_year("2027.0"), Some(2027));
        assert_eq!(parse_year("2027.5"), None);
        assert_eq!(parse_year("soon"), None);
    }

    #[test]
    fn test_record_type_parsing() {
        assert_eq!("observation".parse::<RecordType>(), Ok(RecordType::Observation));
        assert_eq!(" event".parse::<RecordType>(), Ok(RecordType::Event));
        assert!("target".parse::<RecordType>().is_err());
    }
}
