//! Recurrence sub-records shared by events and to-dos.
//!
//! Each is embedded into its parent component, so its properties appear at
//! the component's top level.

use crate::rfc::ical::core::{DateTimeList, RRule};
use crate::rfc::ical::mapping::{Fields, PropertySet};

/// The RRULE of a recurring component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecurrenceRule {
    pub rule: Option<RRule>,
}

impl PropertySet for RecurrenceRule {
    fn declare(fields: &mut Fields<Self>) {
        fields
            .optional("rule", |r| &r.rule, |r| &mut r.rule)
            .rename("rrule");
    }
}

/// EXDATE lines: instances removed from the recurrence set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExceptionDateTimes {
    /// One entry per EXDATE line.
    pub dates: Vec<DateTimeList>,
}

impl PropertySet for ExceptionDateTimes {
    fn declare(fields: &mut Fields<Self>) {
        fields
            .list("dates", |r| &r.dates, |r| &mut r.dates)
            .rename("exdate");
    }
}

/// RDATE lines: instances added to the recurrence set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecurrenceDateTimes {
    /// One entry per RDATE line.
    pub dates: Vec<DateTimeList>,
}

impl PropertySet for RecurrenceDateTimes {
    fn declare(fields: &mut Fields<Self>) {
        fields
            .list("dates", |r| &r.dates, |r| &mut r.dates)
            .rename("rdate");
    }
}
