//! DATE-TIME and TIME values (RFC 5545 §3.3.5, §3.3.12), and the
//! DATE-or-DATE-TIME union used by DTSTART and friends.

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime};

use super::Date;

/// A TIME value: `HHMMSS[Z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    /// Up to 60 for a leap second.
    pub second: u8,
    pub is_utc: bool,
}

impl Time {
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8, is_utc: bool) -> Self {
        Self {
            hour,
            minute,
            second,
            is_utc,
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)?;
        if self.is_utc { f.write_str("Z") } else { Ok(()) }
    }
}

/// The three mutually exclusive DATE-TIME forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateTimeForm {
    /// Wall-clock time, no zone.
    Floating,
    /// Trailing `Z`.
    Utc,
    /// Local time qualified by a TZID parameter. The identifier is kept
    /// verbatim and not resolved.
    Zoned { tzid: String },
}

/// A DATE-TIME value.
///
/// The TZID of a zoned value is not part of its text; codecs write it as a
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    pub date: Date,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub form: DateTimeForm,
}

impl DateTime {
    #[must_use]
    pub const fn at(date: Date, time: Time, form: DateTimeForm) -> Self {
        Self {
            date,
            hour: time.hour,
            minute: time.minute,
            second: time.second,
            form,
        }
    }

    #[must_use]
    pub const fn floating(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self::at(
            Date::new(year, month, day),
            Time::new(hour, minute, second, false),
            DateTimeForm::Floating,
        )
    }

    #[must_use]
    pub const fn utc(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self::at(
            Date::new(year, month, day),
            Time::new(hour, minute, second, true),
            DateTimeForm::Utc,
        )
    }

    #[must_use]
    pub fn zoned(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        tzid: impl Into<String>,
    ) -> Self {
        Self::at(
            Date::new(year, month, day),
            Time::new(hour, minute, second, false),
            DateTimeForm::Zoned { tzid: tzid.into() },
        )
    }

    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.form == DateTimeForm::Utc
    }

    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.form == DateTimeForm::Floating
    }

    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            DateTimeForm::Zoned { tzid } => Some(tzid),
            DateTimeForm::Floating | DateTimeForm::Utc => None,
        }
    }

    /// Wall-clock value regardless of form; `None` for impossible dates.
    /// A leap second reads as :59.
    #[must_use]
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let time = NaiveTime::from_hms_opt(
            self.hour.into(),
            self.minute.into(),
            self.second.min(59).into(),
        )?;
        Some(self.date.to_naive()?.and_time(time))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = Time::new(self.hour, self.minute, self.second, self.is_utc());
        write!(f, "{}T{time}", self.date)
    }
}

/// A DATE or DATE-TIME value, as accepted by DTSTART, DTEND, DUE and
/// RECURRENCE-ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Temporal {
    Date(Date),
    DateTime(DateTime),
}

impl Temporal {
    #[must_use]
    pub const fn is_date_only(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match self {
            Self::Date(_) => None,
            Self::DateTime(dt) => dt.tzid(),
        }
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        match self {
            Self::Date(d) => *d,
            Self::DateTime(dt) => dt.date,
        }
    }

    /// Wall-clock value; a date reads as its midnight.
    #[must_use]
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(d) => d.to_naive()?.and_hms_opt(0, 0, 0),
            Self::DateTime(dt) => dt.to_naive(),
        }
    }
}

impl From<Date> for Temporal {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime> for Temporal {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_forms() {
        assert_eq!(Time::new(7, 5, 0, true).to_string(), "070500Z");
        assert_eq!(DateTime::utc(2025, 11, 3, 7, 5, 0).to_string(), "20251103T070500Z");
        assert_eq!(DateTime::floating(2025, 11, 3, 7, 5, 0).to_string(), "20251103T070500");

        let zoned = DateTime::zoned(2025, 11, 3, 7, 5, 0, "Asia/Tokyo");
        assert_eq!(zoned.to_string(), "20251103T070500");
        assert_eq!(zoned.tzid(), Some("Asia/Tokyo"));
        assert!(!zoned.is_utc() && !zoned.is_floating());
    }

    #[test]
    fn naive_conversion() {
        assert!(DateTime::floating(2025, 4, 31, 0, 0, 0).to_naive().is_none());
        assert!(DateTime::utc(2025, 6, 30, 23, 59, 60).to_naive().is_some());
        assert_eq!(
            Temporal::from(Date::new(2025, 4, 30)).to_naive(),
            DateTime::floating(2025, 4, 30, 0, 0, 0).to_naive()
        );
    }

    #[test]
    fn temporal_accessors() {
        let all_day = Temporal::from(Date::new(2025, 12, 24));
        assert!(all_day.is_date_only());
        assert_eq!(all_day.tzid(), None);

        let zoned = Temporal::from(DateTime::zoned(2025, 12, 24, 18, 0, 0, "Europe/Vienna"));
        assert!(!zoned.is_date_only());
        assert_eq!(zoned.tzid(), Some("Europe/Vienna"));
        assert_eq!(zoned.date(), Date::new(2025, 12, 24));
    }
}
