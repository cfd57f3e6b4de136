//! VTODO (RFC 5545 §3.6.2).

use url::Url;

use super::recurrence::{ExceptionDateTimes, RecurrenceDateTimes, RecurrenceRule};
use crate::error::RfcResult;
use crate::rfc::ical::core::{
    AttendeeAddress, Classification, ComponentKind, CsvList, DateTime, Duration, Geo,
    OrganizerAddress, RelationAddress, Temporal, TodoStatus, prop_names,
};
use crate::rfc::ical::mapping::{
    Extras, FieldTable, Fields, IcalComponent, PropertySet, TableCell, cached_table,
};
use crate::rfc::validation::{InvariantError, Validate, rules};

/// An action item or assignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Todo {
    pub uid: String,
    pub date_stamp: Option<DateTime>,
    pub date_start: Option<Temporal>,
    /// Mutually exclusive with `duration`.
    pub due: Option<Temporal>,
    /// Counted from `date_start`, which must then be set.
    pub duration: Option<Duration>,
    /// When the to-do was actually completed.
    pub completed: Option<DateTime>,
    pub classification: Option<Classification>,
    pub created: Option<DateTime>,
    pub description: String,
    pub geo: Option<Geo>,
    pub last_modified: Option<DateTime>,
    pub location: String,
    pub organizer: Option<OrganizerAddress>,
    /// 0 to 100.
    pub percent_complete: Option<u32>,
    pub priority: u32,
    pub sequence: u32,
    pub status: Option<TodoStatus>,
    pub summary: String,
    pub url: Option<Url>,
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
    pub extras: Extras,
}

impl Todo {
    /// Creates a to-do with the required properties set.
    #[must_use]
    pub fn new(uid: impl Into<String>, date_stamp: DateTime) -> Self {
        Self {
            uid: uid.into(),
            date_stamp: Some(date_stamp),
            ..Self::default()
        }
    }
}

impl PropertySet for Todo {
    fn declare(fields: &mut Fields<Self>) {
        fields.one("uid", |t| &t.uid, |t| &mut t.uid).required();
        fields
            .optional("date_stamp", |t| &t.date_stamp, |t| &mut t.date_stamp)
            .rename("dtstamp")
            .required();
        fields
            .optional("date_start", |t| &t.date_start, |t| &mut t.date_start)
            .rename("dtstart");
        fields.optional("due", |t| &t.due, |t| &mut t.due);
        fields.optional("duration", |t| &t.duration, |t| &mut t.duration);
        fields.optional("completed", |t| &t.completed, |t| &mut t.completed);
        fields
            .optional("classification", |t| &t.classification, |t| &mut t.classification)
            .rename("class");
        fields.optional("created", |t| &t.created, |t| &mut t.created);
        fields
            .one("description", |t| &t.description, |t| &mut t.description)
            .omit_empty();
        fields.optional("geo", |t| &t.geo, |t| &mut t.geo);
        fields.optional("last_modified", |t| &t.last_modified, |t| &mut t.last_modified);
        fields
            .one("location", |t| &t.location, |t| &mut t.location)
            .omit_empty();
        fields.optional("organizer", |t| &t.organizer, |t| &mut t.organizer);
        fields.optional(
            "percent_complete",
            |t| &t.percent_complete,
            |t| &mut t.percent_complete,
        );
        fields
            .one("priority", |t| &t.priority, |t| &mut t.priority)
            .omit_empty();
        fields
            .one("sequence", |t| &t.sequence, |t| &mut t.sequence)
            .omit_empty();
        fields.optional("status", |t| &t.status, |t| &mut t.status);
        fields
            .one("summary", |t| &t.summary, |t| &mut t.summary)
            .omit_empty();
        fields.optional("url", |t| &t.url, |t| &mut t.url);
        fields.optional("recurrence_id", |t| &t.recurrence_id, |t| &mut t.recurrence_id);
        fields.embed(
            "recurrence_rule",
            |t| &t.recurrence_rule,
            |t| &mut t.recurrence_rule,
        );
        fields
            .optional("attachment", |t| &t.attachment, |t| &mut t.attachment)
            .rename("attach");
        fields
            .list("attendees", |t| &t.attendees, |t| &mut t.attendees)
            .rename("attendee");
        fields
            .one("categories", |t| &t.categories, |t| &mut t.categories)
            .omit_empty();
        fields
            .list("comments", |t| &t.comments, |t| &mut t.comments)
            .rename("comment");
        fields
            .one("contact_info", |t| &t.contact_info, |t| &mut t.contact_info)
            .rename("contact")
            .omit_empty();
        fields.embed(
            "exception_dates",
            |t| &t.exception_dates,
            |t| &mut t.exception_dates,
        );
        fields.embed(
            "recurrence_dates",
            |t| &t.recurrence_dates,
            |t| &mut t.recurrence_dates,
        );
        fields.optional("related_to", |t| &t.related_to, |t| &mut t.related_to);
        fields
            .one("resources", |t| &t.resources, |t| &mut t.resources)
            .omit_empty();
    }
}

impl IcalComponent for Todo {
    const KIND: ComponentKind = ComponentKind::Todo;

    fn field_table() -> RfcResult<&'static FieldTable<Self>> {
        static TABLE: TableCell<Todo> = TableCell::new();
        cached_table(&TABLE)
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }
}

impl Validate for Todo {
    fn validate(&self) -> Result<(), InvariantError> {
        let component = Self::KIND.as_str();

        rules::mutually_exclusive(
            component,
            (prop_names::DUE, self.due.is_some()),
            (prop_names::DURATION, self.duration.is_some()),
        )?;
        rules::requires(
            component,
            (prop_names::DURATION, self.duration.is_some()),
            (prop_names::DTSTART, self.date_start.is_some()),
        )?;
        rules::same_value_type(
            component,
            (prop_names::DTSTART, self.date_start.as_ref()),
            (prop_names::DUE, self.due.as_ref()),
        )?;
        rules::in_range(
            component,
            prop_names::PERCENT_COMPLETE,
            self.percent_complete,
            0..=100,
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
