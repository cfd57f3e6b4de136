//! Calendar user and relationship addresses (RFC 5545 §3.8.4).
//!
//! The property value is a URI (or, for RELATED-TO, a UID); everything else
//! about the address travels as property parameters.

use url::Url;

use super::Parameter;
use super::status::open_enum;

open_enum!(
    /// ROLE (RFC 5545 §3.2.16).
    Role {
        Chair => "CHAIR",
        RequiredParticipant => "REQ-PARTICIPANT",
        OptionalParticipant => "OPT-PARTICIPANT",
        /// Copied for information only.
        NonParticipant => "NON-PARTICIPANT",
    }
);

open_enum!(
    /// PARTSTAT (RFC 5545 §3.2.12). The last two only apply to to-dos.
    ParticipationStatus {
        NeedsAction => "NEEDS-ACTION",
        Accepted => "ACCEPTED",
        Declined => "DECLINED",
        Tentative => "TENTATIVE",
        Delegated => "DELEGATED",
        Completed => "COMPLETED",
        InProcess => "IN-PROCESS",
    }
);

open_enum!(
    /// CUTYPE (RFC 5545 §3.2.3).
    CalendarUserType {
        Individual => "INDIVIDUAL",
        Group => "GROUP",
        Resource => "RESOURCE",
        Room => "ROOM",
        Unknown => "UNKNOWN",
    }
);

open_enum!(
    /// RELTYPE (RFC 5545 §3.2.15). Absent means `Parent`.
    RelationType {
        Parent => "PARENT",
        Child => "CHILD",
        Sibling => "SIBLING",
    }
);

/// ORGANIZER value (RFC 5545 §3.8.4.3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerAddress {
    /// Calendar user address, usually a `mailto:` URI.
    pub uri: Url,
    /// Common name (CN).
    pub cn: Option<String>,
    /// Acting on behalf of (SENT-BY).
    pub sent_by: Option<String>,
    /// Directory entry reference (DIR).
    pub dir: Option<String>,
    /// Parameters not covered above, in order of appearance.
    pub other_params: Vec<Parameter>,
}

impl OrganizerAddress {
    /// Creates an organizer with no parameters.
    #[must_use]
    pub fn new(uri: Url) -> Self {
        Self {
            uri,
            cn: None,
            sent_by: None,
            dir: None,
            other_params: Vec::new(),
        }
    }

    /// Sets the common name.
    #[must_use]
    pub fn with_cn(mut self, cn: impl Into<String>) -> Self {
        self.cn = Some(cn.into());
        self
    }
}

/// ATTENDEE value (RFC 5545 §3.8.4.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeAddress {
    /// Calendar user address, usually a `mailto:` URI.
    pub uri: Url,
    /// Common name (CN).
    pub cn: Option<String>,
    /// Participation role (ROLE).
    pub role: Option<Role>,
    /// Participation status (PARTSTAT).
    pub partstat: Option<ParticipationStatus>,
    /// Reply expectation (RSVP).
    pub rsvp: Option<bool>,
    /// Calendar user type (CUTYPE).
    pub cutype: Option<CalendarUserType>,
    /// Parameters not covered above, in order of appearance.
    pub other_params: Vec<Parameter>,
}

impl AttendeeAddress {
    /// Creates an attendee with no parameters.
    #[must_use]
    pub fn new(uri: Url) -> Self {
        Self {
            uri,
            cn: None,
            role: None,
            partstat: None,
            rsvp: None,
            cutype: None,
            other_params: Vec::new(),
        }
    }

    /// Sets the common name.
    #[must_use]
    pub fn with_cn(mut self, cn: impl Into<String>) -> Self {
        self.cn = Some(cn.into());
        self
    }

    /// Sets the participation role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets the participation status.
    #[must_use]
    pub fn with_partstat(mut self, partstat: ParticipationStatus) -> Self {
        self.partstat = Some(partstat);
        self
    }

    /// Sets the RSVP expectation.
    #[must_use]
    pub fn with_rsvp(mut self, rsvp: bool) -> Self {
        self.rsvp = Some(rsvp);
        self
    }
}

/// RELATED-TO value (RFC 5545 §3.8.4.5): the UID of another component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationAddress {
    /// UID of the related component.
    pub uid: String,
    /// Relationship type (RELTYPE); absent means PARENT.
    pub reltype: Option<RelationType>,
    /// Parameters not covered above, in order of appearance.
    pub other_params: Vec<Parameter>,
}

impl RelationAddress {
    /// Creates a relation to the given UID.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            reltype: None,
            other_params: Vec::new(),
        }
    }

    /// Sets the relationship type.
    #[must_use]
    pub fn with_reltype(mut self, reltype: RelationType) -> Self {
        self.reltype = Some(reltype);
        self
    }
}
