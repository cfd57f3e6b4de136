//! DURATION values (RFC 5545 §3.3.6).

use std::fmt;

/// A nominal duration: `P2W`, `P1DT2H30M`, `-PT15M`.
///
/// Components are kept as written rather than normalised to seconds, so a
/// decoded `PT90M` re-encodes as `PT90M`. There are no year or month
/// designators in RFC 5545.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    pub negative: bool,
    /// Only written as `nW` when every other component is zero.
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

const ZERO: Duration = Duration {
    negative: false,
    weeks: 0,
    days: 0,
    hours: 0,
    minutes: 0,
    seconds: 0,
};

impl Duration {
    #[must_use]
    pub const fn zero() -> Self {
        ZERO
    }

    #[must_use]
    pub const fn weeks(weeks: u32) -> Self {
        Self { weeks, ..ZERO }
    }

    #[must_use]
    pub const fn days(days: u32) -> Self {
        Self { days, ..ZERO }
    }

    #[must_use]
    pub const fn hours(hours: u32) -> Self {
        Self { hours, ..ZERO }
    }

    #[must_use]
    pub const fn minutes(minutes: u32) -> Self {
        Self { minutes, ..ZERO }
    }

    #[must_use]
    pub const fn seconds(seconds: u32) -> Self {
        Self { seconds, ..ZERO }
    }

    /// Adds a time-of-day part to a day-based duration.
    #[must_use]
    pub const fn and_time(mut self, hours: u32, minutes: u32, seconds: u32) -> Self {
        self.hours = hours;
        self.minutes = minutes;
        self.seconds = seconds;
        self
    }

    /// Zero in every component, regardless of sign. This is the empty value
    /// for omit-if-empty fields.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.weeks == 0 && self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Written as `PnW`: weeks set and every other component zero.
    #[must_use]
    pub const fn is_weeks_only(&self) -> bool {
        self.weeks > 0 && self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Weeks folded into days, as written when weeks are mixed with other
    /// parts. `None` when the sum does not fit a `u32`.
    #[must_use]
    pub const fn day_count(&self) -> Option<u32> {
        match self.weeks.checked_mul(7) {
            Some(week_days) => week_days.checked_add(self.days),
            None => None,
        }
    }

    #[must_use]
    pub const fn negate(mut self) -> Self {
        self.negative = !self.negative;
        self
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.negative { "-P" } else { "P" })?;

        if self.is_weeks_only() {
            return write!(f, "{}W", self.weeks);
        }

        let has_time = self.hours > 0 || self.minutes > 0 || self.seconds > 0;

        // Weeks mixed with other parts fold into days
        let days = u64::from(self.weeks) * 7 + u64::from(self.days);
        if days > 0 || !has_time {
            write!(f, "{days}D")?;
        }
        if has_time {
            f.write_str("T")?;
            for (amount, unit) in [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')] {
                if amount > 0 {
                    write!(f, "{amount}{unit}")?;
                }
            }
        }
        Ok(())
    }
}
