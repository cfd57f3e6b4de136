//! iCalendar serializer (RFC 5545).
//!
//! Writes content lines and component trees as folded CRLF text. Lines and
//! parameters are written in the order given; callers decide the order.

use kunai_core::config::{CodecConfig, MAX_LINE_OCTETS, MIN_LINE_OCTETS};
use kunai_core::error::CoreError;

use super::escape::escape_param_value;
use super::fold::{DEFAULT_LINE_OCTETS, fold_line, unfolded_line};
use crate::rfc::ical::core::{ContentLine, Parameter, RawComponent, prop_names};

/// Output options for text serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Whether long lines are folded.
    pub fold_lines: bool,
    /// Octet limit per physical line when folding.
    pub max_line_octets: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            fold_lines: true,
            max_line_octets: DEFAULT_LINE_OCTETS,
        }
    }
}

impl TryFrom<&CodecConfig> for SerializeOptions {
    type Error = CoreError;

    fn try_from(config: &CodecConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self {
            fold_lines: config.fold_lines,
            max_line_octets: config.max_line_octets.clamp(MIN_LINE_OCTETS, MAX_LINE_OCTETS),
        })
    }
}

impl SerializeOptions {
    /// Terminates (and folds, if enabled) one logical line.
    #[must_use]
    pub fn finish_line(&self, line: &str) -> String {
        if self.fold_lines {
            fold_line(line, self.max_line_octets)
        } else {
            unfolded_line(line)
        }
    }
}

/// Serializes a component, its properties and its children.
#[must_use]
pub fn serialize_component(component: &RawComponent, options: &SerializeOptions) -> String {
    let mut result = String::new();
    write_component(&mut result, component, options);
    result
}

fn write_component(out: &mut String, component: &RawComponent, options: &SerializeOptions) {
    out.push_str(&options.finish_line(&format!("{}:{}", prop_names::BEGIN, component.name)));
    for line in &component.properties {
        out.push_str(&options.finish_line(&serialize_line(line)));
    }
    for child in &component.children {
        write_component(out, child, options);
    }
    out.push_str(&options.finish_line(&format!("{}:{}", prop_names::END, component.name)));
}

/// Serializes one content line without its line terminator.
///
/// The value is written as-is; escaping is the value codec's concern.
#[must_use]
pub fn serialize_line(line: &ContentLine) -> String {
    let mut result = line.name.to_ascii_uppercase();

    for param in &line.params {
        result.push(';');
        result.push_str(&serialize_parameter(param));
    }

    result.push(':');
    result.push_str(&line.raw_value);
    result
}

/// Serializes a parameter to a string.
#[must_use]
pub fn serialize_parameter(param: &Parameter) -> String {
    let mut result = param.name.clone();
    result.push('=');

    let values: Vec<String> = param.values.iter().map(|v| escape_param_value(v)).collect();
    result.push_str(&values.join(","));

    result
}
