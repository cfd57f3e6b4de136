//! Record to content lines.

use super::descriptor::{FieldTable, IcalComponent, PropertySet};
use super::error::MissingPropertyError;
use crate::error::RfcResult;
use crate::rfc::ical::core::{ContentLine, RawComponent};

/// Encodes a component record into its property lines.
///
/// Lines follow the declaration order of the record's fields, with extras
/// appended last. Nested components kept in extras are not included; see
/// [`encode_component`].
///
/// ## Errors
/// Returns `MissingProperty` if a required field holds no value, or
/// `UnsupportedField` if the record's declaration is defective.
#[tracing::instrument(skip_all, fields(component = %R::KIND))]
pub fn encode<R: IcalComponent>(record: &R) -> RfcResult<Vec<ContentLine>> {
    let table = R::field_table()?;

    let mut lines = encode_fields(table, record)?;
    lines.extend(record.extras().properties.iter().cloned());

    tracing::debug!(count = lines.len(), "Encoded component");
    Ok(lines)
}

/// Encodes a component record into a component tree, nested components
/// included.
///
/// ## Errors
/// Same as [`encode`].
pub fn encode_component<R: IcalComponent>(record: &R) -> RfcResult<RawComponent> {
    let mut component = RawComponent::new(R::KIND);
    component.properties = encode(record)?;
    component.children = record.extras().components.clone();
    Ok(component)
}

pub(crate) fn encode_fields<R: PropertySet>(
    table: &FieldTable<R>,
    record: &R,
) -> Result<Vec<ContentLine>, MissingPropertyError> {
    let mut lines = Vec::with_capacity(table.len());

    for field in table.fields() {
        let descriptor = &field.descriptor;

        if field.codec.is_absent(record) {
            if descriptor.required {
                return Err(MissingPropertyError {
                    component: table.component().to_string(),
                    property: descriptor.name.clone(),
                    field: descriptor.ident,
                });
            }
            continue;
        }

        if descriptor.omit_empty && !descriptor.required && field.codec.is_empty(record) {
            tracing::trace!(property = %descriptor.name, "Skipping empty value");
            continue;
        }

        field.codec.encode(record, &descriptor.name, &mut lines);
    }

    Ok(lines)
}
