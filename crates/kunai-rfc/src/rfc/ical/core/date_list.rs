//! EXDATE / RDATE value lists (RFC 5545 §3.8.5.1, §3.8.5.2).

use std::fmt;

use super::{Date, DateTime, Period};

/// One entry of an EXDATE or RDATE line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceDate {
    /// `VALUE=DATE` entry.
    Date(Date),
    /// `VALUE=DATE-TIME` entry (the default).
    DateTime(DateTime),
    /// `VALUE=PERIOD` entry (RDATE only).
    Period(Period),
}

impl RecurrenceDate {
    /// Returns the VALUE type name of this entry.
    #[must_use]
    pub const fn value_type(&self) -> &'static str {
        match self {
            Self::Date(_) => "DATE",
            Self::DateTime(_) => "DATE-TIME",
            Self::Period(_) => "PERIOD",
        }
    }

    /// Returns the TZID qualifier of this entry, if any.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match self {
            Self::Date(_) => None,
            Self::DateTime(dt) => dt.tzid(),
            Self::Period(p) => p.start.tzid(),
        }
    }
}

impl fmt::Display for RecurrenceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Period(p) => write!(f, "{p}"),
        }
    }
}

/// The comma-separated entries of a single EXDATE or RDATE line.
///
/// All entries of one line share a value type and a TZID, since both are
/// carried once as parameters. Mixed lists can be built in memory but are
/// rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateTimeList {
    /// Entries in order of appearance.
    pub entries: Vec<RecurrenceDate>,
}

impl DateTimeList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends one entry.
    pub fn push(&mut self, entry: impl Into<RecurrenceDate>) {
        self.entries.push(entry.into());
    }

    /// Returns whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value type shared by the entries (`DATE-TIME` when empty).
    #[must_use]
    pub fn value_type(&self) -> &'static str {
        self.entries
            .first()
            .map_or("DATE-TIME", RecurrenceDate::value_type)
    }

    /// Returns the TZID carried by the first entry.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.entries.first().and_then(RecurrenceDate::tzid)
    }

    /// Returns whether every entry has the same value type and TZID.
    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        let value_type = self.value_type();
        let tzid = self.tzid();
        self.entries
            .iter()
            .all(|e| e.value_type() == value_type && e.tzid() == tzid)
    }
}

impl From<Date> for RecurrenceDate {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime> for RecurrenceDate {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<Period> for RecurrenceDate {
    fn from(value: Period) -> Self {
        Self::Period(value)
    }
}

impl<T: Into<RecurrenceDate>> FromIterator<T> for DateTimeList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
