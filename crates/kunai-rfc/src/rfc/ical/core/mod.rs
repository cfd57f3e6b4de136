//! iCalendar core models (RFC 5545).
//!
//! Plain value types shared by the text framing layer and the mapping
//! engine. None of them know how they are mapped onto a component; that is
//! the job of `mapping`.

mod address;
mod component;
mod date_list;
mod datetime;
mod duration;
mod geo;
mod parameter;
mod property;
mod rrule;
mod status;
mod text;
mod value;

pub use address::{
    AttendeeAddress, CalendarUserType, OrganizerAddress, ParticipationStatus, RelationAddress,
    RelationType, Role,
};
pub use component::{ComponentKind, RawComponent};
pub use date_list::{DateTimeList, RecurrenceDate};
pub use datetime::{DateTime, DateTimeForm, Temporal, Time};
pub use duration::Duration;
pub use geo::Geo;
pub use parameter::{Parameter, names as param_names};
pub use property::{ContentLine, names as prop_names};
pub use rrule::{Frequency, RRule, RRuleUntil, Weekday, WeekdayNum};
pub use status::{Classification, EventStatus, TodoStatus, Transparency};
pub use text::CsvList;
pub use value::{Date, Period, PeriodEnd};
