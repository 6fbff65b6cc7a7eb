use std::collections::BTreeSet;

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

/// A (year, month) pair, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

/// The sorted unique (year, month) pairs appearing in a set of dates.
///
/// Used to group a user's log dates into per-month calendars.
pub fn sorted_unique_year_months<I>(dates: I) -> Vec<YearMonth>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let unique: BTreeSet<YearMonth> = dates
        .into_iter()
        .map(|date| YearMonth {
            year: date.year(),
            month: date.month(),
        })
        .collect();
    unique.into_iter().collect()
}

/// General-purpose date parser.
///
/// Accepts the undashed `YYYYMMDD` format log filenames use, the dashed
/// `YYYY-MM-DD` format dates render as, or the literal string `today`.
pub fn parse_date(raw: &str) -> chrono::format::ParseResult<NaiveDate> {
    if raw == "today" {
        return Ok(Local::now().date_naive());
    }
    if raw.contains('-') {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    } else {
        NaiveDate::parse_from_str(raw, "%Y%m%d")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_undashed_date() {
        assert_eq!(parse_date("20230115").unwrap(), date(2023, 1, 15));
    }

    #[test]
    fn test_parse_dashed_date() {
        assert_eq!(parse_date("2023-01-15").unwrap(), date(2023, 1, 15));
    }

    #[test]
    fn test_parse_today() {
        assert_eq!(parse_date("today").unwrap(), Local::now().date_naive());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("2023_01_15").is_err());
        assert!(parse_date("20231345").is_err());
    }

    #[test]
    fn test_year_months_are_unique_and_sorted() {
        let dates = [
            date(2023, 3, 10),
            date(2022, 12, 31),
            date(2023, 3, 11),
            date(2023, 1, 1),
        ];

        assert_eq!(
            sorted_unique_year_months(dates),
            vec![
                YearMonth { year: 2022, month: 12 },
                YearMonth { year: 2023, month: 1 },
                YearMonth { year: 2023, month: 3 },
            ]
        );
    }
}
