use std::fmt;

use anyhow::{Context, Result};
use kunai_rfc::RfcResult;
use kunai_rfc::rfc::ical::core::{ComponentKind, RawComponent, prop_names};
use kunai_rfc::rfc::ical::mapping::{IcalComponent, decode_component};
use kunai_rfc::rfc::ical::parse::parse_calendars;
use kunai_rfc::rfc::ical::{Event, Todo};
use kunai_rfc::rfc::validation::{Validate, validate};

/// One component that failed to decode or validate.
#[derive(Debug)]
pub struct Problem {
    /// Zero-based index of the VCALENDAR in the stream.
    pub calendar: usize,
    pub component: ComponentKind,
    pub uid: Option<String>,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Report {
    pub checked: usize,
    pub problems: Vec<Problem>,
}

impl Report {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for problem in &self.problems {
            writeln!(
                f,
                "calendar {} {} {}: {}",
                problem.calendar,
                problem.component,
                problem.uid.as_deref().unwrap_or("<no UID>"),
                problem.message
            )?;
        }
        writeln!(
            f,
            "{} component(s) checked, {} problem(s)",
            self.checked,
            self.problems.len()
        )
    }
}

fn check_record<R: IcalComponent + Validate>(component: &RawComponent) -> RfcResult<()> {
    let record: R = decode_component(component)?;
    validate(&record)?;
    Ok(())
}

/// Decodes and validates every event and to-do in a calendar stream.
///
/// Other components are not inspected.
///
/// ## Errors
/// Returns an error only if the stream itself cannot be parsed; problems
/// with individual components are collected in the report.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn run(input: &str) -> Result<Report> {
    let calendars = parse_calendars(input).context("Failed to parse calendar stream")?;
    let mut report = Report::default();

    for (index, calendar) in calendars.iter().enumerate() {
        for child in &calendar.children {
            let outcome = match child.kind() {
                ComponentKind::Event => check_record::<Event>(child),
                ComponentKind::Todo => check_record::<Todo>(child),
                _ => continue,
            };
            report.checked += 1;

            if let Err(err) = outcome {
                let uid = child
                    .properties
                    .iter()
                    .find(|p| p.is(prop_names::UID))
                    .map(|p| p.raw_value.clone());
                tracing::debug!(calendar = index, uid = ?uid, error = %err, "Component rejected");
                report.problems.push(Problem {
                    calendar: index,
                    component: child.kind(),
                    uid,
                    message: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAM: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:good\r\n\
DTSTAMP:20250101T120000Z\r\n\
DTSTART:20250102T090000Z\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:both\r\n\
DTSTAMP:20250101T120000Z\r\n\
DTSTART:20250102T090000Z\r\n\
DTEND:20250102T100000Z\r\n\
DURATION:PT1H\r\n\
END:VEVENT\r\n\
BEGIN:VTODO\r\n\
UID:no-stamp\r\n\
END:VTODO\r\n\
BEGIN:VJOURNAL\r\n\
UID:ignored\r\n\
END:VJOURNAL\r\n\
END:VCALENDAR\r\n";

    #[test_log::test]
    fn reports_each_bad_component() {
        let report = run(STREAM).unwrap();
        assert_eq!(report.checked, 3);
        assert!(!report.is_clean());

        let uids: Vec<_> = report.problems.iter().map(|p| p.uid.as_deref()).collect();
        assert_eq!(uids, [Some("both"), Some("no-stamp")]);
        assert!(report.problems[0].message.contains("DURATION"));
        assert!(report.problems[1].message.contains("DTSTAMP"));

        let text = report.to_string();
        assert!(text.ends_with("3 component(s) checked, 2 problem(s)\n"));
    }

    #[test]
    fn malformed_stream_is_an_error() {
        assert!(run("BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\n").is_err());
    }
}
