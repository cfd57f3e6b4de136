use url::Url;

use super::*;
use crate::rfc::ical::core::{
    AttendeeAddress, Classification, CsvList, Date, DateTime, DateTimeList, Duration, Geo,
    OrganizerAddress, ParticipationStatus, Period, RRule, RecurrenceDate, RelationAddress,
    RelationType, Role, Temporal, Weekday, WeekdayNum,
};

fn line(text: &str) -> ContentLine {
    crate::rfc::ical::parse::parse_content_line(text, 1).unwrap()
}

#[test]
fn value_kinds_without_codec() {
    assert!(!ValueKind::Binary.has_codec());
    assert!(!ValueKind::Time.has_codec());
    assert!(!ValueKind::UtcOffset.has_codec());
    assert!(ValueKind::DateOrDateTime.has_codec());
    assert_eq!(ValueKind::UtcOffset.to_string(), "UTC-OFFSET");
}

#[test]
fn text_escapes_and_unescapes() {
    let value = "Lunch; then, coffee\nmaybe".to_string();
    let encoded = value.to_property();
    assert_eq!(encoded.value, "Lunch\\; then\\, coffee\\nmaybe");

    let decoded = String::from_property(&encoded.into_line("SUMMARY")).unwrap();
    assert_eq!(decoded, value);
    assert!(PropertyValue::is_empty(&String::new()));
}

#[test]
fn integer_rejects_garbage() {
    assert_eq!(u32::from_property(&line("PRIORITY:5")).unwrap(), 5);
    let err = u32::from_property(&line("PRIORITY:high")).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InvalidInteger);
    assert!(u32::from_property(&line("SEQUENCE:-1")).is_err());
    assert_eq!(i32::from_property(&line("X-OFFSET:-1")).unwrap(), -1);
    assert!(PropertyValue::is_empty(&0_u32));
}

#[test]
fn value_parameter_is_checked() {
    let err = u32::from_property(&line("PRIORITY;VALUE=TEXT:1")).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::UnsupportedValueType);
    assert_eq!(err.token, "TEXT");
}

#[test]
fn temporal_forms() {
    let date = Temporal::Date(Date::new(2025, 3, 14));
    let encoded = date.to_property();
    assert_eq!(encoded.value, "20250314");
    assert_eq!(encoded.params, vec![Parameter::value_type("DATE")]);

    let zoned = Temporal::DateTime(DateTime::zoned(2025, 3, 14, 9, 30, 0, "Europe/Berlin"));
    let encoded = zoned.to_property();
    assert_eq!(encoded.value, "20250314T093000");
    assert_eq!(encoded.params, vec![Parameter::tzid("Europe/Berlin")]);
    assert_eq!(Temporal::from_property(&encoded.into_line("DTSTART")).unwrap(), zoned);

    let utc = Temporal::from_property(&line("DTSTART:20250314T093000Z")).unwrap();
    assert_eq!(utc, Temporal::DateTime(DateTime::utc(2025, 3, 14, 9, 30, 0)));

    // Bare date without VALUE=DATE
    let bare = Temporal::from_property(&line("DTSTART:20250314")).unwrap();
    assert!(bare.is_date_only());
}

#[test]
fn temporal_rejects_bad_dates() {
    let err = Temporal::from_property(&line("DTSTART;VALUE=DATE:20250230")).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InvalidDate);

    let err = DateTime::from_property(&line("DTSTAMP;VALUE=DATE:20250301")).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::UnsupportedValueType);
}

#[test]
fn duration_codec() {
    let encoded = Duration::hours(1).to_property();
    assert_eq!(encoded.value, "PT1H");
    assert_eq!(
        Duration::from_property(&line("DURATION:P1W")).unwrap(),
        Duration::weeks(1)
    );
    let err = Duration::from_property(&line("DURATION:1H")).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InvalidDuration);
    assert!(err.expected().contains('P'));
}

#[test]
fn geo_codec() {
    let geo = Geo::new(37.386_013, -122.082_932);
    let encoded = geo.to_property();
    assert_eq!(encoded.value, "37.386013;-122.082932");
    assert_eq!(Geo::from_property(&encoded.into_line("GEO")).unwrap(), geo);

    let err = Geo::from_property(&line("GEO:north")).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InvalidGeo);
}

#[test]
fn csv_list_escapes_elements_and_merges() {
    let list: CsvList = ["work", "a,b"].into_iter().collect();
    let encoded = list.to_property();
    assert_eq!(encoded.value, "work,a\\,b");

    let mut decoded = CsvList::from_property(&encoded.into_line("CATEGORIES")).unwrap();
    assert_eq!(decoded, list);

    decoded.merge(CsvList::from_property(&line("CATEGORIES:extra")).unwrap());
    assert_eq!(decoded.len(), 3);
    assert!(CsvList::MERGES);
    assert!(!String::MERGES);
}

#[test]
fn uri_codec() {
    let url = Url::parse("https://example.com/meeting").unwrap();
    assert_eq!(url.to_property().value, "https://example.com/meeting");
    assert_eq!(Url::from_property(&line("URL:https://example.com/meeting")).unwrap(), url);

    let err = Url::from_property(&line("URL:not a uri")).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InvalidUri);
}

#[test]
fn rrule_codec() {
    let rule = RRule::weekly()
        .with_count(4)
        .with_by_day(vec![WeekdayNum::every(Weekday::Monday)]);
    let encoded = rule.to_property();
    assert_eq!(encoded.value, "FREQ=WEEKLY;COUNT=4;BYDAY=MO");
    assert_eq!(RRule::from_property(&encoded.into_line("RRULE")).unwrap(), rule);

    let err = RRule::from_property(&line("RRULE:FREQ=DAILY;COUNT=2;UNTIL=20250101")).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::UntilCountConflict);
}

#[test]
fn date_list_carries_type_and_tzid() {
    let list: DateTimeList = [
        DateTime::zoned(2025, 1, 6, 9, 0, 0, "Europe/Paris"),
        DateTime::zoned(2025, 1, 13, 9, 0, 0, "Europe/Paris"),
    ]
    .into_iter()
    .collect();
    let encoded = list.to_property();
    assert_eq!(encoded.value, "20250106T090000,20250113T090000");
    assert_eq!(encoded.params, vec![Parameter::tzid("Europe/Paris")]);
    assert_eq!(DateTimeList::from_property(&encoded.into_line("EXDATE")).unwrap(), list);

    let dates = DateTimeList::from_property(&line("EXDATE;VALUE=DATE:20250106,20250113")).unwrap();
    assert_eq!(dates.value_type(), "DATE");
    assert_eq!(dates.entries.len(), 2);

    let periods =
        DateTimeList::from_property(&line("RDATE;VALUE=PERIOD:20250106T090000Z/PT1H")).unwrap();
    assert_eq!(
        periods.entries,
        vec![RecurrenceDate::Period(Period::from_duration(
            DateTime::utc(2025, 1, 6, 9, 0, 0),
            Duration::hours(1)
        ))]
    );

    let err = DateTimeList::from_property(&line("RDATE;VALUE=TIME:090000")).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::UnsupportedValueType);
}

#[test]
fn organizer_keeps_unknown_parameters() {
    let parsed = OrganizerAddress::from_property(&line(
        "ORGANIZER;CN=\"Doe, Jane\";X-TEAM=ops;SENT-BY=\"mailto:assistant@example.com\":mailto:jane@example.com",
    ))
    .unwrap();
    assert_eq!(parsed.cn.as_deref(), Some("Doe, Jane"));
    assert_eq!(parsed.sent_by.as_deref(), Some("mailto:assistant@example.com"));
    assert_eq!(parsed.other_params, vec![Parameter::new("X-TEAM", "ops")]);

    let encoded = parsed.to_property();
    assert_eq!(encoded.value, "mailto:jane@example.com");
    assert_eq!(OrganizerAddress::from_property(&encoded.into_line("ORGANIZER")).unwrap(), parsed);
}

#[test]
fn attendee_parameters() {
    let attendee = AttendeeAddress::new(Url::parse("mailto:bob@example.com").unwrap())
        .with_cn("Bob")
        .with_role(Role::OptionalParticipant)
        .with_partstat(ParticipationStatus::Tentative)
        .with_rsvp(true);
    let encoded = attendee.to_property();
    assert!(encoded.params.contains(&Parameter::rsvp(true)));
    assert_eq!(
        AttendeeAddress::from_property(&encoded.into_line("ATTENDEE")).unwrap(),
        attendee
    );

    let err =
        AttendeeAddress::from_property(&line("ATTENDEE;RSVP=maybe:mailto:bob@example.com"))
            .unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InvalidBoolean);

    let err = AttendeeAddress::from_property(&line("ATTENDEE:bob at example")).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InvalidUri);
}

#[test]
fn relation_codec() {
    let relation = RelationAddress::new("parent;uid").with_reltype(RelationType::Child);
    let encoded = relation.to_property();
    assert_eq!(encoded.value, "parent\\;uid");
    assert_eq!(RelationAddress::from_property(&encoded.into_line("RELATED-TO")).unwrap(), relation);
}

#[test]
fn enumerations_keep_extensions() {
    assert_eq!(
        Classification::from_property(&line("CLASS:private")).unwrap(),
        Classification::Private
    );
    let custom = Classification::from_property(&line("CLASS:X-INTERNAL")).unwrap();
    assert_eq!(custom.to_property().value, "X-INTERNAL");
}
