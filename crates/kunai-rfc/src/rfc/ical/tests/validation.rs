//! Structural checks on decoded and hand-built records.

use super::fixtures::*;
use crate::rfc::ical::components::{Event, Todo};
use crate::rfc::ical::core::{
    Date, DateTime, DateTimeList, Duration, Geo, RRule, RRuleUntil, Temporal,
};
use crate::rfc::ical::mapping::{decode, decode_str, encode};
use crate::rfc::validation::validate;

#[test]
fn minimal_event_is_valid() {
    let event: Event = decode_str(VEVENT_MINIMAL).unwrap();
    assert!(validate(&event).is_ok());
}

#[test]
fn fixtures_are_valid() {
    assert_eq!(validate(&full_event()), Ok(()));
    assert_eq!(validate(&full_todo()), Ok(()));
}

#[test_log::test]
fn end_and_duration_are_exclusive() {
    let mut event = minimal_event();
    event.date_end = Some(Temporal::DateTime(DateTime::utc(2025, 1, 2, 10, 0, 0)));
    assert!(validate(&event).is_ok());

    event.duration = Some(Duration::hours(1));
    let err = validate(&event).unwrap_err();
    assert_eq!(err.component, "VEVENT");
    assert!(err.involves("DTEND"));
    assert!(err.involves("DURATION"));

    event.date_end = None;
    assert!(validate(&event).is_ok());
}

#[test]
fn decoded_event_with_end_and_duration_fails() {
    let event: Event = decode_str(
        "UID:abc-123\r\nDTSTAMP:20250101T120000Z\r\nDTSTART:20250102T090000Z\r\n\
         DTEND:20250102T100000Z\r\nDURATION:PT1H\r\n",
    )
    .unwrap();
    let err = validate(&event).unwrap_err();
    assert_eq!(err.fields, ["DTEND", "DURATION"]);
}

#[test]
fn end_must_match_start_value_type() {
    let mut event = minimal_event();
    event.date_end = Some(Temporal::Date(Date::new(2025, 1, 3)));
    let err = validate(&event).unwrap_err();
    assert!(err.involves("DTSTART") && err.involves("DTEND"));

    event.date_start = Some(Temporal::Date(Date::new(2025, 1, 2)));
    assert!(validate(&event).is_ok());
}

#[test]
fn integer_and_geo_ranges() {
    let mut event = minimal_event();
    event.priority = 10;
    assert!(validate(&event).unwrap_err().involves("PRIORITY"));
    event.priority = 9;
    assert!(validate(&event).is_ok());

    event.geo = Some(Geo::new(10.0, 181.0));
    assert!(validate(&event).unwrap_err().involves("GEO"));

    let mut todo = full_todo();
    todo.percent_complete = Some(101);
    assert!(validate(&todo).unwrap_err().involves("PERCENT-COMPLETE"));
}

#[test]
fn mixed_exception_dates_fail() {
    let mut event = minimal_event();
    let mut mixed: DateTimeList = [Date::new(2025, 1, 9)].into_iter().collect();
    mixed.push(DateTime::utc(2025, 1, 16, 9, 0, 0));
    event.exception_dates.dates.push(mixed);

    let err = validate(&event).unwrap_err();
    assert_eq!(err.fields, ["EXDATE"]);
}

#[test]
fn recurrence_rule_checks() {
    let mut event = minimal_event();
    event.recurrence_rule.rule = Some(RRule::weekly().with_count(10));
    assert!(validate(&event).is_ok());

    let mut todo = Todo::new("t", stamp());
    todo.recurrence_rule.rule = Some(RRule::daily());
    let err = validate(&todo).unwrap_err();
    assert!(err.involves("RRULE") && err.involves("DTSTART"));
}

#[test]
fn todo_rules() {
    let mut todo = Todo::new("t", stamp());
    assert!(validate(&todo).is_ok());

    todo.duration = Some(Duration::days(1));
    let err = validate(&todo).unwrap_err();
    assert_eq!(err.fields, ["DURATION", "DTSTART"]);

    todo.date_start = Some(Temporal::DateTime(DateTime::utc(2025, 1, 6, 9, 0, 0)));
    assert!(validate(&todo).is_ok());

    todo.due = Some(Temporal::DateTime(DateTime::utc(2025, 1, 7, 9, 0, 0)));
    let err = validate(&todo).unwrap_err();
    assert!(err.involves("DUE") && err.involves("DURATION"));

    todo.duration = None;
    todo.due = Some(Temporal::Date(Date::new(2025, 1, 7)));
    assert!(validate(&todo).unwrap_err().involves("DUE"));
}

#[test]
fn overlong_duration_is_rejected_before_encoding() {
    let mut event = minimal_event();
    event.duration = Some(Duration {
        weeks: 700_000_000,
        days: 1,
        ..Duration::zero()
    });
    let err = validate(&event).unwrap_err();
    assert_eq!(err.fields, ["DURATION"]);
    assert!(encode(&event).is_ok());

    event.duration = Some(Duration::weeks(700_000_000));
    assert!(validate(&event).is_ok());
    let decoded: Event = decode(&encode(&event).unwrap()).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn all_day_and_floating_recurrences_with_until() {
    let mut event = minimal_event();
    event.date_start = Some(Temporal::Date(Date::new(2025, 1, 6)));
    event.recurrence_rule.rule =
        Some(RRule::yearly().with_until(RRuleUntil::Date(Date::new(2030, 12, 31))));
    assert_eq!(validate(&event), Ok(()));

    event.date_start = Some(Temporal::DateTime(DateTime::floating(2025, 1, 6, 9, 0, 0)));
    event.recurrence_rule.rule = Some(
        RRule::weekly().with_until(RRuleUntil::DateTime(DateTime::floating(2025, 6, 30, 9, 0, 0))),
    );
    assert_eq!(validate(&event), Ok(()));

    let parsed: Event = decode_str(
        "UID:bday\r\nDTSTAMP:20250101T120000Z\r\nDTSTART;VALUE=DATE:20250106\r\n\
         RRULE:FREQ=YEARLY;UNTIL=20301231\r\n",
    )
    .unwrap();
    assert_eq!(validate(&parsed), Ok(()));
}
