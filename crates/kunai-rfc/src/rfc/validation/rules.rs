//! Reusable cross-field rules.
//!
//! Each rule takes the component name for error reporting and the property
//! names it talks about, so component validators read as a list of rules.

use std::ops::RangeInclusive;

use chrono::TimeZone;
use rrule::{Tz, Unvalidated};

use super::InvariantError;
use crate::rfc::ical::core::{
    DateTimeList, Duration, Geo, RRule, RRuleUntil, Temporal, prop_names,
};

/// At most one of two properties may be set.
///
/// ## Errors
/// Returns an error naming both properties when both are set.
pub fn mutually_exclusive(
    component: &str,
    (first, first_set): (&str, bool),
    (second, second_set): (&str, bool),
) -> Result<(), InvariantError> {
    if first_set && second_set {
        return Err(InvariantError::new(
            component,
            &[first, second],
            format!("{first} and {second} are mutually exclusive"),
        ));
    }
    Ok(())
}

/// A property may only be set when another one is.
///
/// ## Errors
/// Returns an error naming both properties when `dependent` is set without
/// `required`.
pub fn requires(
    component: &str,
    (dependent, dependent_set): (&str, bool),
    (required, required_set): (&str, bool),
) -> Result<(), InvariantError> {
    if dependent_set && !required_set {
        return Err(InvariantError::new(
            component,
            &[dependent, required],
            format!("{dependent} requires {required}"),
        ));
    }
    Ok(())
}

/// Two DATE-or-DATE-TIME properties must use the same value type.
///
/// ## Errors
/// Returns an error naming both properties when one is date-only and the
/// other is not.
pub fn same_value_type(
    component: &str,
    (start, start_value): (&str, Option<&Temporal>),
    (end, end_value): (&str, Option<&Temporal>),
) -> Result<(), InvariantError> {
    if let (Some(start_value), Some(end_value)) = (start_value, end_value)
        && start_value.is_date_only() != end_value.is_date_only()
    {
        let expected = if start_value.is_date_only() { "DATE" } else { "DATE-TIME" };
        return Err(InvariantError::new(
            component,
            &[start, end],
            format!("{end} must be a {expected} value like {start}"),
        ));
    }
    Ok(())
}

/// Every EXDATE/RDATE line must hold one value type and one TZID.
///
/// ## Errors
/// Returns an error naming the property on the first mixed line.
pub fn homogeneous_dates(
    component: &str,
    property: &str,
    lists: &[DateTimeList],
) -> Result<(), InvariantError> {
    if lists.iter().all(DateTimeList::is_homogeneous) {
        return Ok(());
    }
    Err(InvariantError::new(
        component,
        &[property],
        format!("each {property} line must share one value type and TZID"),
    ))
}

/// An integer property must lie in the given range.
///
/// ## Errors
/// Returns an error naming the property when the value is out of range.
pub fn in_range(
    component: &str,
    property: &str,
    value: Option<u32>,
    range: RangeInclusive<u32>,
) -> Result<(), InvariantError> {
    match value {
        Some(value) if !range.contains(&value) => Err(InvariantError::new(
            component,
            &[property],
            format!(
                "{property} must be between {} and {}, got {value}",
                range.start(),
                range.end()
            ),
        )),
        _ => Ok(()),
    }
}

/// A DURATION mixing weeks with other parts is written as days, and that day
/// count must fit the value it is read back into.
///
/// ## Errors
/// Returns an error naming DURATION when the day count overflows.
pub fn duration_representable(
    component: &str,
    duration: Option<&Duration>,
) -> Result<(), InvariantError> {
    match duration {
        Some(duration) if !duration.is_weeks_only() && duration.day_count().is_none() => Err(InvariantError::new(
            component,
            &[prop_names::DURATION],
            format!(
                "DURATION of {} weeks and {} days is too long",
                duration.weeks, duration.days
            ),
        )),
        _ => Ok(()),
    }
}

/// GEO coordinates must be finite and within range.
///
/// ## Errors
/// Returns an error naming GEO when either coordinate is out of range.
pub fn geo_in_range(component: &str, geo: Option<&Geo>) -> Result<(), InvariantError> {
    match geo {
        Some(geo) if !geo.is_in_range() => Err(InvariantError::new(
            component,
            &[prop_names::GEO],
            format!(
                "GEO must be within -90..=90 / -180..=180, got {};{}",
                geo.latitude, geo.longitude
            ),
        )),
        _ => Ok(()),
    }
}

/// An RRULE must be accepted by the recurrence engine for the given DTSTART.
///
/// No occurrences are generated. Floating start times are taken as UTC, as
/// are zones the time zone database does not know. UNTIL is read in the
/// start's zone (a DATE as that day's midnight) unless it is written in UTC,
/// then handed over as UTC.
///
/// ## Errors
/// Returns an error naming RRULE (and DTSTART when it is missing) if the
/// rule cannot be built.
pub fn rrule_buildable(
    component: &str,
    rule: Option<&RRule>,
    start: Option<&Temporal>,
) -> Result<(), InvariantError> {
    let Some(rule) = rule else {
        return Ok(());
    };

    let Some(start) = start else {
        return Err(InvariantError::new(
            component,
            &[prop_names::RRULE, prop_names::DTSTART],
            "RRULE requires DTSTART",
        ));
    };

    let rejected = |reason: String| {
        InvariantError::new(
            component,
            &[prop_names::RRULE],
            format!("recurrence rule cannot be built: {reason}"),
        )
    };

    let zone = start_zone(start);
    let dt_start = start
        .to_naive()
        .and_then(|naive| zone.from_local_datetime(&naive).earliest())
        .ok_or_else(|| rejected(format!("DTSTART {start} is not a valid local time")))?;

    let mut engine_rule = rule.clone();
    let until = engine_rule.until.take();
    // Extension parts have no meaning to the recurrence engine.
    engine_rule.other.clear();

    let mut unvalidated = engine_rule
        .to_string()
        .parse::<rrule::RRule<Unvalidated>>()
        .map_err(|err| rejected(err.to_string()))?;

    if let Some(until) = &until {
        let until = until_in_utc(until, zone)
            .ok_or_else(|| rejected(format!("UNTIL {until} is not a valid local time")))?;
        unvalidated = unvalidated.until(until);
    }

    unvalidated.build(dt_start).map_err(|err| rejected(err.to_string()))?;
    tracing::trace!(%rule, "Recurrence rule accepted");
    Ok(())
}

fn start_zone(start: &Temporal) -> Tz {
    start
        .tzid()
        .and_then(|tzid| tzid.parse::<chrono_tz::Tz>().ok())
        .map_or(Tz::UTC, Tz::Tz)
}

fn until_in_utc(until: &RRuleUntil, start_zone: Tz) -> Option<chrono::DateTime<Tz>> {
    let (naive, zone) = match until {
        RRuleUntil::Date(date) => (date.to_naive()?.and_hms_opt(0, 0, 0)?, start_zone),
        RRuleUntil::DateTime(dt) if dt.is_utc() => (dt.to_naive()?, Tz::UTC),
        RRuleUntil::DateTime(dt) => (dt.to_naive()?, start_zone),
    };
    let local = zone.from_local_datetime(&naive).earliest()?;
    Some(local.with_timezone(&Tz::UTC))
}
