//! RECUR values (RRULE, RFC 5545 §3.3.10).
//!
//! Only the textual shape of a rule is modelled here. Whether a rule makes
//! sense for a given DTSTART is checked by validation, which hands the rule
//! to the `rrule` crate.

use std::fmt;

use super::{Date, DateTime};

/// Declares a closed keyword enum with its wire tokens.
macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }

            /// Looks up a token, ignoring ASCII case.
            #[must_use]
            pub fn parse(token: &str) -> Option<Self> {
                [$(Self::$variant),+]
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(token))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum!(
    /// FREQ rule part.
    Frequency {
        Secondly => "SECONDLY",
        Minutely => "MINUTELY",
        Hourly => "HOURLY",
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
        Yearly => "YEARLY",
    }
);

keyword_enum!(
    /// Two-letter weekday codes used by BYDAY and WKST.
    Weekday {
        Monday => "MO",
        Tuesday => "TU",
        Wednesday => "WE",
        Thursday => "TH",
        Friday => "FR",
        Saturday => "SA",
        Sunday => "SU",
    }
);

/// A BYDAY entry: `MO`, `1MO`, `-1FR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayNum {
    /// Occurrence within the period. Range checks are left to validation.
    pub ordinal: Option<i8>,
    pub weekday: Weekday,
}

impl WeekdayNum {
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    #[must_use]
    pub const fn nth(ordinal: i8, weekday: Weekday) -> Self {
        Self {
            ordinal: Some(ordinal),
            weekday,
        }
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ordinal {
            Some(n) => write!(f, "{n}{}", self.weekday),
            None => write!(f, "{}", self.weekday),
        }
    }
}

/// UNTIL bound, in the value type of the rule's DTSTART.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RRuleUntil {
    Date(Date),
    DateTime(DateTime),
}

impl fmt::Display for RRuleUntil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

/// A recurrence rule as written in an RRULE property.
///
/// Parts left unset are not written; `interval` in particular is emitted
/// whenever it is `Some`, even when it holds the default of 1, so decoded
/// rules re-encode unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RRule {
    pub freq: Option<Frequency>,
    pub interval: Option<u32>,
    /// Excludes `count`; the builders clear one when setting the other.
    pub until: Option<RRuleUntil>,
    pub count: Option<u32>,
    pub wkst: Option<Weekday>,
    pub by_second: Vec<u8>,
    pub by_minute: Vec<u8>,
    pub by_hour: Vec<u8>,
    pub by_day: Vec<WeekdayNum>,
    pub by_monthday: Vec<i8>,
    pub by_yearday: Vec<i16>,
    pub by_weekno: Vec<i8>,
    pub by_month: Vec<u8>,
    pub by_setpos: Vec<i16>,
    /// Rule parts this model has no field for (RSCALE, SKIP, `X-` names),
    /// kept in order and written after BYSETPOS.
    pub other: Vec<(String, String)>,
}

impl RRule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_freq(freq: Frequency) -> Self {
        Self {
            freq: Some(freq),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn daily() -> Self {
        Self::with_freq(Frequency::Daily)
    }

    #[must_use]
    pub fn weekly() -> Self {
        Self::with_freq(Frequency::Weekly)
    }

    #[must_use]
    pub fn monthly() -> Self {
        Self::with_freq(Frequency::Monthly)
    }

    #[must_use]
    pub fn yearly() -> Self {
        Self::with_freq(Frequency::Yearly)
    }

    /// Returns whether no rule part is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self.until = None;
        self
    }

    #[must_use]
    pub fn with_until(mut self, until: RRuleUntil) -> Self {
        self.until = Some(until);
        self.count = None;
        self
    }

    #[must_use]
    pub fn with_by_day(mut self, days: Vec<WeekdayNum>) -> Self {
        self.by_day = days;
        self
    }

    #[must_use]
    pub fn with_by_month(mut self, months: Vec<u8>) -> Self {
        self.by_month = months;
        self
    }

    #[must_use]
    pub fn with_wkst(mut self, wkst: Weekday) -> Self {
        self.wkst = Some(wkst);
        self
    }
}

struct Parts<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl Parts<'_, '_> {
    fn one<T: fmt::Display>(&mut self, key: &str, value: Option<&T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !std::mem::take(&mut self.first) {
            self.f.write_str(";")?;
        }
        write!(self.f, "{key}={value}")
    }

    fn list<T: fmt::Display>(&mut self, key: &str, values: &[T]) -> fmt::Result {
        if values.is_empty() {
            return Ok(());
        }
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.one(key, Some(&joined))
    }
}

impl fmt::Display for RRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Parts { f, first: true };
        out.one("FREQ", self.freq.as_ref())?;
        out.one("INTERVAL", self.interval.as_ref())?;
        out.one("UNTIL", self.until.as_ref())?;
        out.one("COUNT", self.count.as_ref())?;
        out.one("WKST", self.wkst.as_ref())?;
        out.list("BYSECOND", &self.by_second)?;
        out.list("BYMINUTE", &self.by_minute)?;
        out.list("BYHOUR", &self.by_hour)?;
        out.list("BYDAY", &self.by_day)?;
        out.list("BYMONTHDAY", &self.by_monthday)?;
        out.list("BYYEARDAY", &self.by_yearday)?;
        out.list("BYWEEKNO", &self.by_weekno)?;
        out.list("BYMONTH", &self.by_month)?;
        out.list("BYSETPOS", &self.by_setpos)?;
        for (key, value) in &self.other {
            out.one(key, Some(value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_parts_in_canonical_order() {
        let rule = RRule::yearly()
            .with_by_month(vec![3, 10])
            .with_by_day(vec![WeekdayNum::nth(-1, Weekday::Sunday)])
            .with_wkst(Weekday::Sunday)
            .with_interval(1);
        assert_eq!(
            rule.to_string(),
            "FREQ=YEARLY;INTERVAL=1;WKST=SU;BYDAY=-1SU;BYMONTH=3,10"
        );
    }

    #[test]
    fn count_and_until_replace_each_other() {
        let rule = RRule::weekly()
            .with_count(3)
            .with_until(RRuleUntil::Date(Date::new(2026, 12, 31)));
        assert_eq!(rule.count, None);
        assert_eq!(rule.to_string(), "FREQ=WEEKLY;UNTIL=20261231");

        let rule = rule.with_count(5);
        assert_eq!(rule.until, None);
        assert_eq!(rule.to_string(), "FREQ=WEEKLY;COUNT=5");
    }

    #[test]
    fn empty_rule() {
        assert!(RRule::new().is_empty());
        assert_eq!(RRule::new().to_string(), "");
        assert!(!RRule::daily().is_empty());
    }

    #[test]
    fn extension_parts_follow_known_parts() {
        let mut rule = RRule::monthly().with_count(2);
        rule.other.push(("RSCALE".to_string(), "GREGORIAN".to_string()));
        rule.other.push(("SKIP".to_string(), "FORWARD".to_string()));
        assert!(!rule.is_empty());
        assert_eq!(
            rule.to_string(),
            "FREQ=MONTHLY;COUNT=2;RSCALE=GREGORIAN;SKIP=FORWARD"
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(Weekday::parse("fr"), Some(Weekday::Friday));
        assert_eq!(Weekday::parse("XX"), None);
        assert_eq!(Frequency::parse("Hourly"), Some(Frequency::Hourly));
        assert_eq!(Frequency::Monthly.to_string(), "MONTHLY");
        assert_eq!(WeekdayNum::every(Weekday::Tuesday).to_string(), "TU");
    }
}
