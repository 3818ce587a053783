use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYY-MM-DD`; a trailing time part (`YYYY-MM-DD 00:00:00` or
/// `YYYY-MM-DDT00:00:00`) is ignored, any other trailing text is rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let (head, tail) = match s.get(..10) {
        Some(head) => (head, &s[10..]),
        None => (s, ""),
    };
    if !(tail.is_empty() || tail.starts_with(' ') || tail.starts_with('T')) {
        return None;
    }
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// A calendar month, as used by the monthly summary and the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: &NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(&today())
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let err = || AppError::InvalidMonth(s.to_string());
        let (y, m) = s.trim().split_once('-').ok_or_else(err)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(err());
        }
        let year: i32 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;
        if !(1..=12).contains(&month) {
            return Err(err());
        }
        Ok(Self { year, month })
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_tolerates_time_suffix() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(parse_date("2025-03-04"), Some(d));
        assert_eq!(parse_date("2025-03-04 00:00:00"), Some(d));
        assert_eq!(parse_date("2025-03-04T08:00:00"), Some(d));
        assert_eq!(parse_date("04/03/2025"), None);
    }

    #[test]
    fn parse_date_rejects_trailing_garbage() {
        assert_eq!(parse_date("2025-03-041"), None);
        assert_eq!(parse_date("2025-03-04x"), None);
        assert_eq!(parse_date("2025-03-04:00"), None);
    }

    #[test]
    fn year_month_parse_and_display() {
        let ym = YearMonth::parse("2025-02").unwrap();
        assert_eq!(ym, YearMonth { year: 2025, month: 2 });
        assert_eq!(ym.to_string(), "2025-02");
        assert!(ym.contains(&NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
        assert!(!ym.contains(&NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()));
    }

    #[test]
    fn year_month_rejects_garbage() {
        for bad in ["2025", "2025-13", "2025-1", "25-01", "2025/01"] {
            assert!(YearMonth::parse(bad).is_err(), "{bad} should be rejected");
        }
    }
}
