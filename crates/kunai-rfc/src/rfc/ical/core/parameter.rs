//! Property parameters (RFC 5545 §3.2).

/// One `;NAME=value[,value...]` parameter of a content line.
///
/// Names are upper-cased on construction. Values are stored unquoted and
/// un-caret-escaped; the serializer restores quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// Usually one entry; MEMBER, DELEGATED-TO and similar carry several.
    pub values: Vec<String>,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_values(name, vec![value.into()])
    }

    #[must_use]
    pub fn with_values(name: impl Into<String>, values: Vec<String>) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self { name, values }
    }

    /// The first value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// `RSVP=TRUE` / `RSVP=FALSE`.
    #[must_use]
    pub fn rsvp(rsvp: bool) -> Self {
        Self::new(names::RSVP, if rsvp { "TRUE" } else { "FALSE" })
    }
}

macro_rules! single_value_params {
    ($($ctor:ident => $name:ident),+ $(,)?) => {
        impl Parameter {
            $(
                #[must_use]
                pub fn $ctor(value: impl Into<String>) -> Self {
                    Self::new(names::$name, value)
                }
            )+
        }
    };
}

single_value_params! {
    tzid => TZID,
    value_type => VALUE,
    cn => CN,
    cutype => CUTYPE,
    partstat => PARTSTAT,
    role => ROLE,
    sent_by => SENT_BY,
    dir => DIR,
    reltype => RELTYPE,
}

/// Parameter names the codecs read or write.
pub mod names {
    pub const CN: &str = "CN";
    pub const CUTYPE: &str = "CUTYPE";
    pub const DIR: &str = "DIR";
    pub const PARTSTAT: &str = "PARTSTAT";
    pub const RELTYPE: &str = "RELTYPE";
    pub const ROLE: &str = "ROLE";
    pub const RSVP: &str = "RSVP";
    pub const SENT_BY: &str = "SENT-BY";
    pub const TZID: &str = "TZID";
    pub const VALUE: &str = "VALUE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_upper_cased() {
        let param = Parameter::new("x-color", "blue");
        assert_eq!(param.name, "X-COLOR");
        assert!(param.is("X-Color"));
        assert_eq!(Parameter::sent_by("mailto:x@example.com").name, "SENT-BY");
    }

    #[test]
    fn first_value() {
        let members = Parameter::with_values(
            "member",
            vec!["mailto:team@example.com".into(), "mailto:ops@example.com".into()],
        );
        assert_eq!(members.value(), Some("mailto:team@example.com"));
        assert_eq!(Parameter::with_values("X-NONE", Vec::new()).value(), None);
        assert_eq!(Parameter::rsvp(false).value(), Some("FALSE"));
    }
}
