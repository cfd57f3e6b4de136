//! VEVENT (RFC 5545 §3.6.1).

use url::Url;

use super::recurrence::{ExceptionDateTimes, RecurrenceDateTimes, RecurrenceRule};
use crate::error::RfcResult;
use crate::rfc::ical::core::{
    AttendeeAddress, Classification, ComponentKind, CsvList, DateTime, Duration, EventStatus,
    Geo, OrganizerAddress, RelationAddress, Temporal, Transparency, prop_names,
};
use crate::rfc::ical::mapping::{
    Extras, FieldTable, Fields, IcalComponent, PropertySet, TableCell, cached_table,
};
use crate::rfc::validation::{InvariantError, Validate, rules};

/// A scheduled amount of time on a calendar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Event {
    /// Persistent, globally unique identifier.
    pub uid: String,
    /// When this instance of the object was created.
    pub date_stamp: Option<DateTime>,
    pub date_start: Option<Temporal>,
    /// Exclusive end; mutually exclusive with `duration`.
    pub date_end: Option<Temporal>,
    pub duration: Option<Duration>,
    pub classification: Option<Classification>,
    /// When the calendar user agent first stored the event.
    pub created: Option<DateTime>,
    pub description: String,
    pub geo: Option<Geo>,
    pub last_modified: Option<DateTime>,
    pub location: String,
    pub organizer: Option<OrganizerAddress>,
    /// 0 is undefined, 1 highest, 9 lowest.
    pub priority: u32,
    /// Revision sequence number.
    pub sequence: u32,
    pub status: Option<EventStatus>,
    pub summary: String,
    /// Whether the event blocks time in free/busy searches.
    pub transparency: Option<Transparency>,
    pub url: Option<Url>,
    /// Original DTSTART of the recurrence instance this event overrides.
    pub recurrence_id: Option<Temporal>,
    pub recurrence_rule: RecurrenceRule,
    pub attachment: Option<Url>,
    pub attendees: Vec<AttendeeAddress>,
    pub categories: CsvList,
    pub comments: Vec<String>,
    pub contact_info: CsvList,
    pub exception_dates: ExceptionDateTimes,
    pub recurrence_dates: RecurrenceDateTimes,
    pub related_to: Option<RelationAddress>,
    pub resources: CsvList,
    /// Unmapped properties and nested components (VALARM).
    pub extras: Extras,
}

impl Event {
    /// Creates an event with the required properties set.
    #[must_use]
    pub fn new(uid: impl Into<String>, date_stamp: DateTime, date_start: Temporal) -> Self {
        Self {
            uid: uid.into(),
            date_stamp: Some(date_stamp),
            date_start: Some(date_start),
            ..Self::default()
        }
    }
}

impl PropertySet for Event {
    fn declare(fields: &mut Fields<Self>) {
        fields.one("uid", |e| &e.uid, |e| &mut e.uid).required();
        fields
            .optional("date_stamp", |e| &e.date_stamp, |e| &mut e.date_stamp)
            .rename("dtstamp")
            .required();
        fields
            .optional("date_start", |e| &e.date_start, |e| &mut e.date_start)
            .rename("dtstart")
            .required();
        fields
            .optional("date_end", |e| &e.date_end, |e| &mut e.date_end)
            .rename("dtend");
        fields.optional("duration", |e| &e.duration, |e| &mut e.duration);
        fields
            .optional("classification", |e| &e.classification, |e| &mut e.classification)
            .rename("class");
        fields.optional("created", |e| &e.created, |e| &mut e.created);
        fields
            .one("description", |e| &e.description, |e| &mut e.description)
            .omit_empty();
        fields.optional("geo", |e| &e.geo, |e| &mut e.geo);
        fields.optional("last_modified", |e| &e.last_modified, |e| &mut e.last_modified);
        fields
            .one("location", |e| &e.location, |e| &mut e.location)
            .omit_empty();
        fields.optional("organizer", |e| &e.organizer, |e| &mut e.organizer);
        fields
            .one("priority", |e| &e.priority, |e| &mut e.priority)
            .omit_empty();
        fields
            .one("sequence", |e| &e.sequence, |e| &mut e.sequence)
            .omit_empty();
        fields.optional("status", |e| &e.status, |e| &mut e.status);
        fields
            .one("summary", |e| &e.summary, |e| &mut e.summary)
            .omit_empty();
        fields
            .optional("transparency", |e| &e.transparency, |e| &mut e.transparency)
            .rename("transp");
        fields.optional("url", |e| &e.url, |e| &mut e.url);
        fields
            .optional("recurrence_id", |e| &e.recurrence_id, |e| &mut e.recurrence_id)
            .rename("recurrence_id");
        fields.embed(
            "recurrence_rule",
            |e| &e.recurrence_rule,
            |e| &mut e.recurrence_rule,
        );
        fields
            .optional("attachment", |e| &e.attachment, |e| &mut e.attachment)
            .rename("attach");
        fields
            .list("attendees", |e| &e.attendees, |e| &mut e.attendees)
            .rename("attendee");
        fields
            .one("categories", |e| &e.categories, |e| &mut e.categories)
            .omit_empty();
        fields
            .list("comments", |e| &e.comments, |e| &mut e.comments)
            .rename("comment");
        fields
            .one("contact_info", |e| &e.contact_info, |e| &mut e.contact_info)
            .rename("contact")
            .omit_empty();
        fields.embed(
            "exception_dates",
            |e| &e.exception_dates,
            |e| &mut e.exception_dates,
        );
        fields.embed(
            "recurrence_dates",
            |e| &e.recurrence_dates,
            |e| &mut e.recurrence_dates,
        );
        fields.optional("related_to", |e| &e.related_to, |e| &mut e.related_to);
        fields
            .one("resources", |e| &e.resources, |e| &mut e.resources)
            .omit_empty();
    }
}

impl IcalComponent for Event {
    const KIND: ComponentKind = ComponentKind::Event;

    fn field_table() -> RfcResult<&'static FieldTable<Self>> {
        static TABLE: TableCell<Event> = TableCell::new();
        cached_table(&TABLE)
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}

impl Validate for Event {
    fn validate(&self) -> Result<(), InvariantError> {
        let component = Self::KIND.as_str();

        rules::mutually_exclusive(
            component,
            (prop_names::DTEND, self.date_end.is_some()),
            (prop_names::DURATION, self.duration.is_some()),
        )?;
        rules::same_value_type(
            component,
            (prop_names::DTSTART, self.date_start.as_ref()),
            (prop_names::DTEND, self.date_end.as_ref()),
        )?;
        rules::in_range(component, prop_names::PRIORITY, Some(self.priority), 0..=9)?;
        rules::duration_representable(component, self.duration.as_ref())?;
        rules::geo_in_range(component, self.geo.as_ref())?;
        rules::homogeneous_dates(component, prop_names::EXDATE, &self.exception_dates.dates)?;
        rules::homogeneous_dates(component, prop_names::RDATE, &self.recurrence_dates.dates)?;
        rules::rrule_buildable(
            component,
            self.recurrence_rule.rule.as_ref(),
            self.date_start.as_ref(),
        )
    }
}
