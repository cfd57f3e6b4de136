//! Value type parsers for iCalendar (RFC 5545 §3.3).
//!
//! Every parser takes the raw (already unfolded) value text and reports a
//! [`FormatError`] carrying the offending token on failure. Property names are
//! attached by the caller.

use std::str::FromStr;

use super::error::{FormatError, FormatErrorKind, FormatResult};
use crate::rfc::ical::core::{
    Date, DateTime, DateTimeForm, Duration, Frequency, Geo, Period, RRule, RRuleUntil, Time,
    Weekday, WeekdayNum,
};

/// Parses an unsigned run of ASCII digits.
fn digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses a number with `FromStr`, reporting `kind` on failure.
fn number<T: FromStr>(s: &str, kind: FormatErrorKind) -> FormatResult<T> {
    match s.trim().parse() {
        Ok(v) => Ok(v),
        Err(_) => Err(FormatError::new(kind, s)),
    }
}

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714"). Impossible calendar dates such as
/// 20260230 are rejected.
///
/// ## Errors
/// Returns an error if the string is not a valid 8-digit date.
pub fn parse_date(s: &str) -> FormatResult<Date> {
    let err = || FormatError::new(FormatErrorKind::InvalidDate, s);
    if s.len() != 8 || !s.is_ascii() {
        return Err(err());
    }

    let year = digits::<u16>(&s[0..4]).ok_or_else(err)?;
    let month = digits::<u8>(&s[4..6]).ok_or_else(err)?;
    let day = digits::<u8>(&s[6..8]).ok_or_else(err)?;

    let date = Date::new(year, month, day);
    if date.to_naive().is_none() {
        return Err(err());
    }
    Ok(date)
}

/// Parses a TIME value (RFC 5545 §3.3.12).
///
/// Format: HHMMSS[Z] (e.g., "133000", "133000Z")
///
/// ## Errors
/// Returns an error if the string is not a valid 6-digit time.
pub fn parse_time(s: &str) -> FormatResult<Time> {
    let err = || FormatError::new(FormatErrorKind::InvalidTime, s);
    let (time_str, is_utc) = match s.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };

    if time_str.len() != 6 || !time_str.is_ascii() {
        return Err(err());
    }

    let hour = digits::<u8>(&time_str[0..2]).ok_or_else(err)?;
    let minute = digits::<u8>(&time_str[2..4]).ok_or_else(err)?;
    let second = digits::<u8>(&time_str[4..6]).ok_or_else(err)?;

    // Allow 60 for leap seconds
    if hour > 23 || minute > 59 || second > 60 {
        return Err(err());
    }

    Ok(Time::new(hour, minute, second, is_utc))
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDD"T"HHMMSS[Z] (e.g., "19970714T133000Z")
///
/// TZID is a property parameter, passed in separately. A trailing `Z` wins
/// over a TZID.
///
/// ## Errors
/// Returns an error if the string is not a valid datetime format.
pub fn parse_datetime(s: &str, tzid: Option<&str>) -> FormatResult<DateTime> {
    let (date_str, time_str) = s
        .split_once('T')
        .ok_or_else(|| FormatError::new(FormatErrorKind::InvalidDateTime, s))?;

    let date = parse_date(date_str)?;
    let time = parse_time(time_str)?;

    let form = match tzid {
        _ if time.is_utc => DateTimeForm::Utc,
        Some(tzid) => DateTimeForm::Zoned {
            tzid: tzid.to_string(),
        },
        None => DateTimeForm::Floating,
    };

    Ok(DateTime::at(date, time, form))
}

/// Parses a DURATION value (RFC 5545 §3.3.6).
///
/// Format: [+|-]P[nW] or [+|-]P[nD][T[nH][nM][nS]]
///
/// ## Errors
/// Returns an error if the string is not a valid duration format.
pub fn parse_duration(s: &str) -> FormatResult<Duration> {
    let err = || FormatError::new(FormatErrorKind::InvalidDuration, s);

    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let rest = rest.strip_prefix('P').ok_or_else(err)?;
    if rest.is_empty() {
        return Err(err());
    }

    let mut dur = Duration {
        negative,
        ..Duration::zero()
    };

    // dur-week stands alone
    if let Some(weeks) = rest.strip_suffix('W') {
        dur.weeks = digits(weeks).ok_or_else(err)?;
        return Ok(dur);
    }

    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    if !date_part.is_empty() {
        let days = date_part.strip_suffix('D').ok_or_else(err)?;
        dur.days = digits(days).ok_or_else(err)?;
    }

    if let Some(time) = time_part {
        parse_duration_time(time, &mut dur).ok_or_else(err)?;
    }

    Ok(dur)
}

/// Parses the `nH nM nS` part after `T`; designators must appear in order.
fn parse_duration_time(time: &str, dur: &mut Duration) -> Option<()> {
    if time.is_empty() {
        return None;
    }

    let mut num_start = 0;
    let mut last_rank = 0;
    for (i, c) in time.char_indices() {
        if c.is_ascii_digit() {
            continue;
        }
        let num = digits::<u32>(&time[num_start..i])?;
        let rank = match c {
            'H' => 1,
            'M' => 2,
            'S' => 3,
            _ => return None,
        };
        if rank <= last_rank {
            return None;
        }
        last_rank = rank;
        match c {
            'H' => dur.hours = num,
            'M' => dur.minutes = num,
            _ => dur.seconds = num,
        }
        num_start = i + 1;
    }

    // Trailing digits without a designator
    (num_start == time.len()).then_some(())
}

/// Parses a PERIOD value (RFC 5545 §3.3.9).
///
/// Format: start"/"end or start"/"duration
///
/// ## Errors
/// Returns an error if the string is not a valid period format.
pub fn parse_period(s: &str, tzid: Option<&str>) -> FormatResult<Period> {
    let (start_str, end_str) = s
        .split_once('/')
        .ok_or_else(|| FormatError::new(FormatErrorKind::InvalidPeriod, s))?;

    let start = parse_datetime(start_str, tzid)?;

    if end_str.starts_with(['P', '+', '-']) {
        let duration = parse_duration(end_str)?;
        Ok(Period::from_duration(start, duration))
    } else {
        let end = parse_datetime(end_str, tzid)?;
        Ok(Period::explicit(start, end))
    }
}

/// Parses a RECUR (RRULE) value (RFC 5545 §3.3.10).
///
/// FREQ is required. Rule parts without a dedicated field are kept in
/// [`RRule::other`]. Empty parts, such as the one after a trailing `;`, are
/// ignored.
///
/// ## Errors
/// Returns an error if the string is not a valid recurrence rule.
pub fn parse_rrule(s: &str) -> FormatResult<RRule> {
    let mut rrule = RRule::new();

    for part in s.split(';').filter(|part| !part.is_empty()) {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| FormatError::new(FormatErrorKind::InvalidRRule, part))?;
        parse_rrule_part(&mut rrule, key, value)?;
    }

    if rrule.freq.is_none() {
        return Err(FormatError::new(FormatErrorKind::InvalidRRule, s));
    }

    Ok(rrule)
}

/// Parses a single RRULE key-value pair.
fn parse_rrule_part(rrule: &mut RRule, key: &str, value: &str) -> FormatResult<()> {
    let invalid = || FormatError::new(FormatErrorKind::InvalidRRule, value);

    match key.to_ascii_uppercase().as_str() {
        "FREQ" => {
            rrule.freq = Some(
                Frequency::parse(value)
                    .ok_or_else(|| FormatError::new(FormatErrorKind::InvalidFrequency, value))?,
            );
        }
        "INTERVAL" => rrule.interval = Some(digits(value).ok_or_else(invalid)?),
        "COUNT" => {
            if rrule.until.is_some() {
                return Err(FormatError::new(FormatErrorKind::UntilCountConflict, value));
            }
            rrule.count = Some(digits(value).ok_or_else(invalid)?);
        }
        "UNTIL" => {
            if rrule.count.is_some() {
                return Err(FormatError::new(FormatErrorKind::UntilCountConflict, value));
            }
            // UNTIL can be DATE or DATE-TIME
            rrule.until = Some(if value.contains('T') {
                RRuleUntil::DateTime(parse_datetime(value, None)?)
            } else {
                RRuleUntil::Date(parse_date(value)?)
            });
        }
        "WKST" => {
            rrule.wkst = Some(
                Weekday::parse(value)
                    .ok_or_else(|| FormatError::new(FormatErrorKind::InvalidWeekday, value))?,
            );
        }
        "BYSECOND" => rrule.by_second = parse_list(value)?,
        "BYMINUTE" => rrule.by_minute = parse_list(value)?,
        "BYHOUR" => rrule.by_hour = parse_list(value)?,
        "BYDAY" => {
            rrule.by_day = value
                .split(',')
                .map(parse_weekday_num)
                .collect::<FormatResult<_>>()?;
        }
        "BYMONTHDAY" => rrule.by_monthday = parse_list(value)?,
        "BYYEARDAY" => rrule.by_yearday = parse_list(value)?,
        "BYWEEKNO" => rrule.by_weekno = parse_list(value)?,
        "BYMONTH" => rrule.by_month = parse_list(value)?,
        "BYSETPOS" => rrule.by_setpos = parse_list(value)?,
        other => rrule.other.push((other.to_string(), value.to_string())),
    }
    Ok(())
}

/// Parses a comma-separated list of numbers in a rule part.
fn parse_list<T: FromStr>(s: &str) -> FormatResult<Vec<T>> {
    s.split(',')
        .map(|v| number(v, FormatErrorKind::InvalidRRule))
        .collect()
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "1MO", "-1FR").
fn parse_weekday_num(s: &str) -> FormatResult<WeekdayNum> {
    let s = s.trim();
    let err = || FormatError::new(FormatErrorKind::InvalidWeekday, s);

    // The weekday is always the last two characters
    if s.len() < 2 || !s.is_char_boundary(s.len() - 2) {
        return Err(err());
    }
    let (ordinal_str, weekday_str) = s.split_at(s.len() - 2);

    let weekday = Weekday::parse(weekday_str).ok_or_else(err)?;
    let ordinal = if ordinal_str.is_empty() {
        None
    } else {
        Some(number::<i8>(ordinal_str, FormatErrorKind::InvalidWeekday)?)
    };

    Ok(WeekdayNum { ordinal, weekday })
}

/// Parses a GEO value (RFC 5545 §3.8.1.6).
///
/// Format: latitude ";" longitude. Range is not checked here.
///
/// ## Errors
/// Returns an error unless the value is two FLOATs separated by `;`.
pub fn parse_geo(s: &str) -> FormatResult<Geo> {
    let err = || FormatError::new(FormatErrorKind::InvalidGeo, s);
    let (lat, lon) = s.split_once(';').ok_or_else(err)?;
    let latitude = parse_float(lat).ok().ok_or_else(err)?;
    let longitude = parse_float(lon).ok().ok_or_else(err)?;
    Ok(Geo::new(latitude, longitude))
}

/// Unescapes text values (RFC 5545 §3.3.11).
///
/// Escape sequences: \\ \, \; \n \N. Unknown escapes are kept as written.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') => result.push('\n'),
                Some(',') => result.push(','),
                Some(';') => result.push(';'),
                Some('\\') | None => result.push('\\'),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a multi-valued TEXT property on unescaped commas and unescapes
/// each element.
///
/// An empty value is one empty element, so a present but blank property
/// stays distinguishable from an absent one.
#[must_use]
pub fn split_text_list(s: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ',' => items.push(unescape_text(&std::mem::take(&mut current))),
            _ => current.push(c),
        }
    }
    items.push(unescape_text(&current));

    items
}

/// Parses a BOOLEAN value (RFC 5545 §3.3.2).
///
/// ## Errors
/// Returns an error if the string is not "TRUE" or "FALSE".
pub fn parse_boolean(s: &str) -> FormatResult<bool> {
    match s.to_ascii_uppercase().as_str() {
        "TRUE" => Ok(true),
        "FALSE" => Ok(false),
        _ => Err(FormatError::new(FormatErrorKind::InvalidBoolean, s)),
    }
}

/// Parses an INTEGER value (RFC 5545 §3.3.8) into any integer type.
///
/// ## Errors
/// Returns an error if the string is not a valid integer for `T`.
pub fn parse_integer<T: FromStr>(s: &str) -> FormatResult<T> {
    number(s, FormatErrorKind::InvalidInteger)
}

/// Parses a FLOAT value (RFC 5545 §3.3.7).
///
/// Only the RFC grammar is accepted: no exponents, no `inf` or `NaN`.
///
/// ## Errors
/// Returns an error if the string is not a valid floating-point number.
pub fn parse_float(s: &str) -> FormatResult<f64> {
    let err = || FormatError::new(FormatErrorKind::InvalidFloat, s);
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    if !all_digits(int_part) || frac_part.is_some_and(|f| !all_digits(f)) {
        return Err(err());
    }
    number(s, FormatErrorKind::InvalidFloat)
}
