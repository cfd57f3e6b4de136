//! GEO, comma-separated TEXT, RECUR and calendar user addresses.
//!
//! Addresses carry their structured parts as property parameters. Any
//! parameter the address type does not model is kept in `other_params` and
//! written back after the modelled ones.

use url::Url;

use super::{EncodedValue, PropertyValue, ValueKind, expect_value_type};
use crate::rfc::ical::build::{escape_text, join_text_list};
use crate::rfc::ical::core::{
    AttendeeAddress, CalendarUserType, ContentLine, CsvList, Geo, OrganizerAddress, Parameter,
    ParticipationStatus, RRule, RelationAddress, RelationType, Role, param_names,
};
use crate::rfc::ical::parse::{
    FormatError, FormatErrorKind, FormatResult, parse_boolean, parse_geo, parse_rrule,
    split_text_list, unescape_text,
};

impl PropertyValue for Geo {
    const KIND: ValueKind = ValueKind::Geo;

    fn to_property(&self) -> EncodedValue {
        EncodedValue::new(self.to_string())
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        parse_geo(&line.raw_value)
    }
}

impl PropertyValue for CsvList {
    const KIND: ValueKind = ValueKind::TextList;
    const MERGES: bool = true;

    fn to_property(&self) -> EncodedValue {
        EncodedValue::new(join_text_list(self))
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        Ok(Self(split_text_list(&line.raw_value)))
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }
}

impl PropertyValue for RRule {
    const KIND: ValueKind = ValueKind::Recur;

    fn to_property(&self) -> EncodedValue {
        EncodedValue::new(self.to_string())
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        expect_value_type(line, &["RECUR"])?;
        parse_rrule(&line.raw_value)
    }

    fn is_empty(&self) -> bool {
        RRule::is_empty(self)
    }
}

fn parse_address(line: &ContentLine) -> FormatResult<Url> {
    expect_value_type(line, &["CAL-ADDRESS"])?;
    Url::parse(line.raw_value.trim())
        .map_err(|_| FormatError::new(FormatErrorKind::InvalidUri, &line.raw_value))
}

fn first_value(param: &Parameter) -> String {
    param.value().unwrap_or_default().to_string()
}

impl PropertyValue for OrganizerAddress {
    const KIND: ValueKind = ValueKind::CalAddress;

    fn to_property(&self) -> EncodedValue {
        let mut encoded = EncodedValue::new(self.uri.as_str())
            .with_opt_param(self.cn.as_deref().map(Parameter::cn))
            .with_opt_param(self.sent_by.as_deref().map(Parameter::sent_by))
            .with_opt_param(self.dir.as_deref().map(Parameter::dir));
        encoded.params.extend(self.other_params.iter().cloned());
        encoded
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        let mut organizer = Self::new(parse_address(line)?);

        for param in &line.params {
            match param.name.as_str() {
                param_names::CN => organizer.cn = Some(first_value(param)),
                param_names::SENT_BY => organizer.sent_by = Some(first_value(param)),
                param_names::DIR => organizer.dir = Some(first_value(param)),
                _ => organizer.other_params.push(param.clone()),
            }
        }

        Ok(organizer)
    }
}

impl PropertyValue for AttendeeAddress {
    const KIND: ValueKind = ValueKind::CalAddress;

    fn to_property(&self) -> EncodedValue {
        let mut encoded = EncodedValue::new(self.uri.as_str())
            .with_opt_param(self.cn.as_deref().map(Parameter::cn))
            .with_opt_param(self.cutype.as_ref().map(|c| Parameter::cutype(c.as_str())))
            .with_opt_param(self.role.as_ref().map(|r| Parameter::role(r.as_str())))
            .with_opt_param(self.partstat.as_ref().map(|p| Parameter::partstat(p.as_str())))
            .with_opt_param(self.rsvp.map(Parameter::rsvp));
        encoded.params.extend(self.other_params.iter().cloned());
        encoded
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        let mut attendee = Self::new(parse_address(line)?);

        for param in &line.params {
            let value = first_value(param);
            match param.name.as_str() {
                param_names::CN => attendee.cn = Some(value),
                param_names::CUTYPE => attendee.cutype = Some(CalendarUserType::parse(&value)),
                param_names::ROLE => attendee.role = Some(Role::parse(&value)),
                param_names::PARTSTAT => {
                    attendee.partstat = Some(ParticipationStatus::parse(&value));
                }
                param_names::RSVP => attendee.rsvp = Some(parse_boolean(&value)?),
                _ => attendee.other_params.push(param.clone()),
            }
        }

        Ok(attendee)
    }
}

impl PropertyValue for RelationAddress {
    const KIND: ValueKind = ValueKind::Relation;

    fn to_property(&self) -> EncodedValue {
        let mut encoded = EncodedValue::new(escape_text(&self.uid))
            .with_opt_param(self.reltype.as_ref().map(|r| Parameter::reltype(r.as_str())));
        encoded.params.extend(self.other_params.iter().cloned());
        encoded
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        let mut relation = Self::new(unescape_text(&line.raw_value));

        for param in &line.params {
            if param.is(param_names::RELTYPE) {
                relation.reltype = Some(RelationType::parse(&first_value(param)));
            } else {
                relation.other_params.push(param.clone());
            }
        }

        Ok(relation)
    }

    fn is_empty(&self) -> bool {
        self.uid.is_empty()
    }
}
