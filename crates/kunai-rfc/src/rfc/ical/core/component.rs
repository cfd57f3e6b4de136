//! Component blocks (RFC 5545 §3.4 and §3.6).

use std::fmt;

use super::ContentLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Calendar,
    Event,
    Todo,
    Journal,
    Timezone,
    /// Only ever nested inside VEVENT or VTODO.
    Alarm,
    /// Anything else, including X- components.
    Unknown,
}

const NAMES: [(ComponentKind, &str); 6] = [
    (ComponentKind::Calendar, "VCALENDAR"),
    (ComponentKind::Event, "VEVENT"),
    (ComponentKind::Todo, "VTODO"),
    (ComponentKind::Journal, "VJOURNAL"),
    (ComponentKind::Timezone, "VTIMEZONE"),
    (ComponentKind::Alarm, "VALARM"),
];

impl ComponentKind {
    /// The BEGIN/END name. `Unknown` has no real name and renders as
    /// `X-UNKNOWN`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        NAMES
            .iter()
            .find_map(|&(kind, name)| (kind == self).then_some(name))
            .unwrap_or("X-UNKNOWN")
    }

    /// Case-insensitive; unrecognised names give `Unknown`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        NAMES
            .iter()
            .find_map(|&(kind, known)| known.eq_ignore_ascii_case(name).then_some(kind))
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A component block kept as read: name, content lines and nested blocks.
///
/// Whole calendars pass through this shape before their children are
/// mapped, and records keep sub-components they do not model (VALARM) in it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawComponent {
    /// Upper case, as it appears after BEGIN.
    pub name: String,
    /// Excludes the BEGIN and END lines.
    pub properties: Vec<ContentLine>,
    pub children: Vec<RawComponent>,
}

impl RawComponent {
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self::named(kind.as_str())
    }

    /// For names without a [`ComponentKind`], such as `X-WIDGET`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self {
            name,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        ComponentKind::parse(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_by_name() {
        for (kind, name) in NAMES {
            assert_eq!(kind.as_str(), name);
            assert_eq!(ComponentKind::parse(&name.to_ascii_lowercase()), kind);
        }
        assert_eq!(ComponentKind::parse("X-WIDGET"), ComponentKind::Unknown);
        assert_eq!(ComponentKind::Unknown.to_string(), "X-UNKNOWN");
    }

    #[test]
    fn named_blocks() {
        let block = RawComponent::named("vtodo");
        assert_eq!(block.name, "VTODO");
        assert_eq!(block.kind(), ComponentKind::Todo);
        assert_eq!(RawComponent::named("x-widget").kind(), ComponentKind::Unknown);
        assert!(block.properties.is_empty() && block.children.is_empty());
    }
}
