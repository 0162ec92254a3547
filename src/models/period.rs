//! Month keys and period filters
//!
//! Every transaction is bucketed by the calendar month of its date. A
//! `PeriodFilter` selects either one month or the whole ledger.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Label shown for the unfiltered view
pub const ALL_MONTHS_LABEL: &str = "Todos os meses";

/// A calendar month, e.g. "2025-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, returning `None` if `month` is not in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || PeriodParseError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        MonthKey::new(year, month).ok_or_else(invalid)
    }
}

/// Which records a dashboard view covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PeriodFilter {
    /// Every record in the ledger
    #[default]
    All,
    /// Only records dated within one month
    Month(MonthKey),
}

impl PeriodFilter {
    /// Check if a record bucketed in `month` belongs to this period
    pub fn matches(&self, month: MonthKey) -> bool {
        match self {
            Self::All => true,
            Self::Month(key) => *key == month,
        }
    }

    /// Human-readable label used in titles and file names
    pub fn label(&self) -> String {
        match self {
            Self::All => ALL_MONTHS_LABEL.to_string(),
            Self::Month(key) => key.to_string(),
        }
    }

    /// Short token safe for file names: the month key or "todos"
    pub fn slug(&self) -> String {
        match self {
            Self::All => "todos".to_string(),
            Self::Month(key) => key.to_string(),
        }
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for PeriodFilter {
    type Err = PeriodParseError;

    /// Accepts "all" / "todos" (any case) or a month key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("todos") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Month)
    }
}

/// Error type for month / period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid month '{}': expected YYYY-MM or 'all'", s)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let key = MonthKey::from_date(date);
        assert_eq!(key.to_string(), "2024-01");
        assert_eq!((key.year(), key.month()), (2024, 1));
    }

    #[test]
    fn test_month_key_parse() {
        assert_eq!("2024-03".parse::<MonthKey>().unwrap(), MonthKey::new(2024, 3).unwrap());
        assert_eq!("2024-3".parse::<MonthKey>().unwrap(), MonthKey::new(2024, 3).unwrap());
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("2024".parse::<MonthKey>().is_err());
        assert!("24-01".parse::<MonthKey>().is_err());
        assert!("janeiro".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_month_key_ordering() {
        let dec = MonthKey::new(2023, 12).unwrap();
        let jan = MonthKey::new(2024, 1).unwrap();
        let feb = MonthKey::new(2024, 2).unwrap();
        let mut keys = vec![feb, dec, jan];
        keys.sort();
        assert_eq!(keys, vec![dec, jan, feb]);
    }

    #[test]
    fn test_period_filter_parse() {
        assert_eq!("all".parse::<PeriodFilter>().unwrap(), PeriodFilter::All);
        assert_eq!("Todos".parse::<PeriodFilter>().unwrap(), PeriodFilter::All);
        assert_eq!(
            "2024-01".parse::<PeriodFilter>().unwrap(),
            PeriodFilter::Month(MonthKey::new(2024, 1).unwrap())
        );
        assert!("last month".parse::<PeriodFilter>().is_err());
    }

    #[test]
    fn test_period_filter_labels() {
        assert_eq!(PeriodFilter::All.label(), "Todos os meses");
        assert_eq!(PeriodFilter::All.slug(), "todos");

        let jan = PeriodFilter::Month(MonthKey::new(2024, 1).unwrap());
        assert_eq!(jan.label(), "2024-01");
        assert_eq!(jan.slug(), "2024-01");
    }

    #[test]
    fn test_period_filter_matches() {
        let jan = MonthKey::new(2024, 1).unwrap();
        let feb = MonthKey::new(2024, 2).unwrap();
        assert!(PeriodFilter::All.matches(jan));
        assert!(PeriodFilter::Month(jan).matches(jan));
        assert!(!PeriodFilter::Month(jan).matches(feb));
    }
}
