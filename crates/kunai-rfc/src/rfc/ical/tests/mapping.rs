//! Encoder/decoder behaviour driven by the field tables.

use super::fixtures::*;
use crate::error::RfcError;
use crate::rfc::ical::components::{Event, Todo};
use crate::rfc::ical::core::{
    ContentLine, Date, DateTime, Duration, RRule, Temporal, TodoStatus, prop_names,
};
use crate::rfc::ical::mapping::{IcalComponent, ValueKind, decode, decode_str, encode};
use crate::rfc::ical::parse::{FormatErrorKind, tokenize};

fn lines(text: &str) -> Vec<ContentLine> {
    tokenize(text).unwrap().into_iter().map(|(_, line)| line).collect()
}

fn names(lines: &[ContentLine]) -> Vec<&str> {
    lines.iter().map(|l| l.name.as_str()).collect()
}

#[test_log::test]
fn minimal_event_encodes_required_properties_only() {
    let encoded = encode(&minimal_event()).unwrap();
    assert_eq!(names(&encoded), ["UID", "DTSTAMP", "DTSTART"]);
    assert_eq!(encoded[0].raw_value, "abc-123");
    assert_eq!(encoded[1].raw_value, "20250101T120000Z");
}

#[test]
fn required_zero_value_is_still_emitted() {
    let mut event = minimal_event();
    event.uid = String::new();

    let encoded = encode(&event).unwrap();
    assert_eq!(encoded[0], ContentLine::new("UID", ""));
}

#[test]
fn required_option_without_value_fails_encode() {
    let mut event = minimal_event();
    event.date_start = None;

    let err = encode(&event).unwrap_err();
    let RfcError::MissingProperty(missing) = err else {
        panic!("expected MissingProperty, got {err:?}");
    };
    assert_eq!(missing.property, "DTSTART");
    assert_eq!(missing.field, "date_start");
    assert_eq!(missing.component, "VEVENT");
}

#[test]
fn missing_required_property_fails_decode() {
    let err = decode::<Event>(&lines("UID:x\r\nDTSTART:20250102T090000Z\r\n")).unwrap_err();
    let RfcError::MissingProperty(missing) = err else {
        panic!("expected MissingProperty, got {err:?}");
    };
    assert_eq!(missing.property, "DTSTAMP");

    // First missing in declaration order wins
    let err = decode::<Event>(&lines("SUMMARY:nothing else\r\n")).unwrap_err();
    assert!(matches!(err, RfcError::MissingProperty(m) if m.property == "UID"));
}

#[test]
fn omit_empty_skips_zero_values() {
    let mut event = minimal_event();
    let encoded = encode(&event).unwrap();
    for skipped in [
        prop_names::SUMMARY,
        prop_names::PRIORITY,
        prop_names::SEQUENCE,
        prop_names::CATEGORIES,
        prop_names::CONTACT,
    ] {
        assert!(!names(&encoded).contains(&skipped), "{skipped} emitted");
    }

    event.summary = "Planning".into();
    event.priority = 1;
    let encoded = encode(&event).unwrap();
    let summary: Vec<_> = encoded.iter().filter(|l| l.is("SUMMARY")).collect();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].raw_value, "Planning");
    assert!(encoded.iter().any(|l| l.is("PRIORITY") && l.raw_value == "1"));
}

#[test]
fn embedded_records_are_flattened() {
    let mut event = minimal_event();
    event.recurrence_rule.rule = Some(RRule::daily().with_count(3));

    let encoded = encode(&event).unwrap();
    let rrule = encoded.iter().find(|l| l.is("RRULE")).unwrap();
    assert_eq!(rrule.raw_value, "FREQ=DAILY;COUNT=3");
    assert!(!names(&encoded).iter().any(|n| n.contains("RECURRENCE-RULE")));

    let table = Event::field_table().unwrap();
    let descriptor = table.descriptor("RRULE").unwrap();
    assert_eq!(descriptor.via, Some("recurrence_rule"));
    assert_eq!(descriptor.kind, ValueKind::Recur);
    assert!(table.descriptor("RECURRENCE-RULE").is_none());
}

#[test]
fn wire_names_follow_overrides() {
    let table = Event::field_table().unwrap();
    let names: Vec<&str> = table.descriptors().map(|d| d.name.as_str()).collect();

    assert!(names.contains(&"CLASS"));
    assert!(names.contains(&"RECURRENCE-ID"));
    assert!(names.contains(&"LAST-MODIFIED"));
    assert!(names.contains(&"ATTENDEE"));
    assert!(names.contains(&"EXDATE"));
    assert!(names.contains(&"RDATE"));
    assert!(!names.contains(&"DUE"));

    let todo_table = Todo::field_table().unwrap();
    assert!(todo_table.descriptor("DUE").is_some());
    assert!(todo_table.descriptor("DTEND").is_none());
    assert!(!todo_table.descriptor("DTSTART").unwrap().required);
}

#[test]
fn field_tables_are_memoised() {
    let first = Event::field_table().unwrap();
    let second = Event::field_table().unwrap();
    assert!(std::ptr::eq(first, second));

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| std::ptr::from_ref(Todo::field_table().unwrap()) as usize))
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn unknown_properties_are_preserved() {
    let event: Event = decode(&lines(
        "UID:u\r\nX-ONE:1\r\nDTSTAMP:20250101T120000Z\r\nIANA-NEW;P=1:v\r\nDTSTART:20250102T090000Z\r\n",
    ))
    .unwrap();

    assert_eq!(names(&event.extras.properties), ["X-ONE", "IANA-NEW"]);
    assert_eq!(event.extras.properties[1].get_param_value("P"), Some("1"));

    let encoded = encode(&event).unwrap();
    assert_eq!(
        names(&encoded),
        ["UID", "DTSTAMP", "DTSTART", "X-ONE", "IANA-NEW"]
    );
}

#[test_log::test]
fn duplicate_single_valued_properties_go_to_extras() {
    let event: Event = decode(&lines(
        "UID:u\r\nDTSTAMP:20250101T120000Z\r\nDTSTART:20250102T090000Z\r\n\
         SUMMARY:first\r\nSUMMARY:second\r\n",
    ))
    .unwrap();

    assert_eq!(event.summary, "first");
    assert_eq!(event.extras.properties, vec![ContentLine::new("SUMMARY", "second")]);
}

#[test]
fn repeated_and_merged_properties() {
    let event: Event = decode(&lines(
        "UID:u\r\nDTSTAMP:20250101T120000Z\r\nDTSTART:20250102T090000Z\r\n\
         CATEGORIES:a,b\r\nCOMMENT:one\r\nCATEGORIES:c\r\nCOMMENT:two\r\n\
         EXDATE;VALUE=DATE:20250110\r\nEXDATE;VALUE=DATE:20250117,20250124\r\n",
    ))
    .unwrap();

    assert_eq!(event.categories.0, ["a", "b", "c"]);
    assert_eq!(event.comments, ["one", "two"]);
    assert_eq!(event.exception_dates.dates.len(), 2);
    assert_eq!(event.exception_dates.dates[1].entries.len(), 2);
    assert!(event.extras.properties.is_empty());

    let encoded = encode(&event).unwrap();
    assert_eq!(encoded.iter().filter(|l| l.is("CATEGORIES")).count(), 1);
    assert_eq!(encoded.iter().filter(|l| l.is("COMMENT")).count(), 2);
    assert_eq!(encoded.iter().filter(|l| l.is("EXDATE")).count(), 2);
}

#[test]
fn names_match_case_insensitively() {
    let lines = vec![
        ContentLine {
            name: "uid".into(),
            params: Vec::new(),
            raw_value: "lower".into(),
        },
        ContentLine::new("dtstamp", "20250101T120000Z"),
        ContentLine::new("DtStart", "20250102"),
    ];
    let event: Event = decode(&lines).unwrap();
    assert_eq!(event.uid, "lower");
    assert_eq!(event.date_start, Some(Temporal::Date(Date::new(2025, 1, 2))));
}

#[test]
fn format_errors_name_the_property() {
    let err = decode::<Event>(&lines(
        "UID:u\r\nDTSTAMP:20250101T120000Z\r\nDTSTART:20250102T090000Z\r\nDURATION:soon\r\n",
    ))
    .unwrap_err();
    let RfcError::Format(format) = err else {
        panic!("expected Format, got {err:?}");
    };
    assert_eq!(format.kind, FormatErrorKind::InvalidDuration);
    assert_eq!(format.property.as_deref(), Some("DURATION"));
    assert_eq!(format.token, "soon");
}

#[test]
fn decode_str_accepts_framed_and_bare_text() {
    let framed: Event = decode_str(VEVENT_MINIMAL).unwrap();
    let bare: Event = decode_str(
        "UID:abc-123\r\nDTSTAMP:20250101T120000Z\r\nDTSTART:20250102T090000Z\r\n",
    )
    .unwrap();
    assert_eq!(framed, bare);
    assert_eq!(framed, minimal_event());

    let err = decode_str::<Todo>(VEVENT_MINIMAL).unwrap_err();
    assert!(matches!(err, RfcError::Parse(_)));
}

#[test]
fn nested_components_are_kept() {
    let event: Event = decode_str(VEVENT_WITH_ALARM).unwrap();
    assert_eq!(event.extras.components.len(), 1);
    assert_eq!(event.extras.components[0].name, "VALARM");
    assert_eq!(event.extras.properties, vec![ContentLine::new("X-VENDOR-FLAG", "yes")]);
    assert_eq!(
        event.date_start,
        Some(Temporal::DateTime(DateTime::zoned(
            2025, 1, 2, 9, 0, 0, "Europe/Berlin"
        )))
    );
}

#[test]
fn todo_specific_fields() {
    let todo: Todo = decode(&lines(
        "UID:t\r\nDTSTAMP:20250101T120000Z\r\nDTSTART:20250106T090000Z\r\n\
         DURATION:PT2H\r\nPERCENT-COMPLETE:0\r\nSTATUS:NEEDS-ACTION\r\n",
    ))
    .unwrap();

    assert_eq!(todo.duration, Some(Duration::hours(2)));
    assert_eq!(todo.percent_complete, Some(0));
    assert_eq!(todo.status, Some(TodoStatus::NeedsAction));

    // Optional (not omit-empty) integers are written even when zero
    let encoded = encode(&todo).unwrap();
    assert!(encoded.iter().any(|l| l.is("PERCENT-COMPLETE") && l.raw_value == "0"));
}
