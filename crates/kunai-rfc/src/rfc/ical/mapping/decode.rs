//! Content lines to record.

use std::collections::HashMap;

use super::descriptor::{FieldTable, IcalComponent, PropertySet};
use super::error::MissingPropertyError;
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{ContentLine, RawComponent};
use crate::rfc::ical::parse::{ParseError, ParseErrorKind};

/// Decodes a component record from its property lines.
///
/// Property names match case-insensitively. Unknown properties and surplus
/// occurrences of single-valued properties are kept in the record's extras,
/// in input order.
///
/// ## Errors
/// Returns `MissingProperty` for the first required property (in
/// declaration order) with no line, `Format` if a value does not match its
/// kind's grammar, or `UnsupportedField` if the record's declaration is
/// defective.
#[tracing::instrument(skip_all, fields(component = %R::KIND, lines = lines.len()))]
pub fn decode<R: IcalComponent>(lines: &[ContentLine]) -> RfcResult<R> {
    let table = R::field_table()?;

    let mut record = R::default();
    let unmapped = decode_fields(table, &mut record, lines)?;

    tracing::debug!(unmapped = unmapped.len(), "Decoded component");
    record.extras_mut().properties = unmapped;
    Ok(record)
}

/// Decodes a component record from a component tree. Nested components are
/// kept in the record's extras.
///
/// ## Errors
/// Returns a `Parse` error if the component is of another kind, otherwise
/// the same errors as [`decode`].
pub fn decode_component<R: IcalComponent>(component: &RawComponent) -> RfcResult<R> {
    if component.kind() != R::KIND {
        return Err(ParseError::new(ParseErrorKind::UnexpectedComponent, 1, 1)
            .with_context(format!("expected {}, got {}", R::KIND, component.name))
            .into());
    }

    let mut record = decode::<R>(&component.properties)?;
    record.extras_mut().components = component.children.clone();
    Ok(record)
}

/// Assigns every declared field and returns the lines no field consumed.
pub(crate) fn decode_fields<R: PropertySet>(
    table: &FieldTable<R>,
    record: &mut R,
    lines: &[ContentLine],
) -> RfcResult<Vec<ContentLine>> {
    // Upper-cased name -> indices of its lines, in input order
    let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
    for (index, line) in lines.iter().enumerate() {
        by_name
            .entry(line.name.to_ascii_uppercase())
            .or_default()
            .push(index);
    }

    let mut unmapped = Vec::new();

    for field in table.fields() {
        let descriptor = &field.descriptor;
        let indices = by_name.remove(&descriptor.name).unwrap_or_default();

        if indices.is_empty() {
            if descriptor.required {
                return Err(MissingPropertyError {
                    component: table.component().to_string(),
                    property: descriptor.name.clone(),
                    field: descriptor.ident,
                }
                .into());
            }
            continue;
        }

        let group: Vec<ContentLine> = indices.iter().map(|&i| lines[i].clone()).collect();
        let consumed = field
            .codec
            .decode(record, &group)
            .map_err(|err| RfcError::Format(err.in_property(&descriptor.name)))?;

        if consumed < indices.len() {
            tracing::warn!(
                property = %descriptor.name,
                occurrences = indices.len(),
                "Single-valued property repeated, keeping extra occurrences unmapped"
            );
            unmapped.extend_from_slice(&indices[consumed..]);
        }
    }

    for (name, indices) in by_name {
        tracing::trace!(property = %name, "Keeping unknown property");
        unmapped.extend(indices);
    }

    unmapped.sort_unstable();
    Ok(unmapped.into_iter().map(|i| lines[i].clone()).collect())
}
