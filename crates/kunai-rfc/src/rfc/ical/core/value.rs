//! DATE and PERIOD values (RFC 5545 §3.3.4, §3.3.9).

use std::fmt;

use chrono::NaiveDate;

use super::{DateTime, Duration};

/// A calendar date, `YYYYMMDD` on the wire.
///
/// Construction does not check the calendar; `to_naive` does, and the value
/// parser rejects dates it returns `None` for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), self.day.into())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { year, month, day } = self;
        write!(f, "{year:04}{month:02}{day:02}")
    }
}

/// How a PERIOD ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodEnd {
    /// `start/end`
    At(DateTime),
    /// `start/duration`
    After(Duration),
}

/// A PERIOD entry of an RDATE line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub start: DateTime,
    pub end: PeriodEnd,
}

impl Period {
    #[must_use]
    pub fn explicit(start: DateTime, end: DateTime) -> Self {
        Self {
            start,
            end: PeriodEnd::At(end),
        }
    }

    #[must_use]
    pub fn from_duration(start: DateTime, duration: Duration) -> Self {
        Self {
            start,
            end: PeriodEnd::After(duration),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.end {
            PeriodEnd::At(end) => write!(f, "{}/{end}", self.start),
            PeriodEnd::After(duration) => write!(f, "{}/{duration}", self.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_text_and_calendar_check() {
        assert_eq!(Date::new(987, 3, 9).to_string(), "09870309");
        assert!(Date::new(2028, 2, 29).to_naive().is_some());
        assert!(Date::new(2025, 2, 30).to_naive().is_none());
    }

    #[test]
    fn period_text() {
        let start = DateTime::utc(2025, 6, 2, 13, 0, 0);
        let until = Period::explicit(start.clone(), DateTime::utc(2025, 6, 2, 14, 30, 0));
        assert_eq!(until.to_string(), "20250602T130000Z/20250602T143000Z");

        let lasting = Period::from_duration(start, Duration::minutes(45));
        assert_eq!(lasting.to_string(), "20250602T130000Z/PT45M");
    }
}
