//! Field descriptors and per-type field tables.
//!
//! A record type lists its fields once, in [`PropertySet::declare`]. The
//! declaration is turned into a [`FieldTable`]: the ordered descriptors plus
//! the accessors used by the encoder and decoder. Component types keep their
//! table in a `OnceLock`, so resolution runs once per type.

use std::collections::HashSet;
use std::sync::OnceLock;

use super::codec::{PropertyValue, ValueKind};
use super::error::UnsupportedFieldError;
use super::field::{FieldCodec, Lifted, Many, Maybe, One};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{ComponentKind, ContentLine, RawComponent, prop_names};

/// How one record field maps onto a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier as declared.
    pub ident: &'static str,
    /// Property name on the wire (upper case).
    pub name: String,
    pub kind: ValueKind,
    /// Must be present on decode and is always emitted on encode.
    pub required: bool,
    /// Skipped on encode when the value is its type's empty value.
    pub omit_empty: bool,
    /// One line per element.
    pub repeated: bool,
    /// Identifier of the embedded sub-record this field was hoisted from.
    pub via: Option<&'static str>,
}

/// Normalises a field identifier or override into a property name.
#[must_use]
pub fn normalize_name(ident: &str) -> String {
    ident.trim().to_ascii_uppercase().replace('_', "-")
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && name != prop_names::BEGIN
        && name != prop_names::END
}

pub(crate) struct Field<R> {
    pub descriptor: FieldDescriptor,
    pub codec: Box<dyn FieldCodec<R>>,
}

/// A record whose fields map onto properties.
///
/// Implemented by component records and by the sub-records they embed.
pub trait PropertySet: Default + Send + Sync + 'static {
    /// Declares every mapped field, in output order.
    fn declare(fields: &mut Fields<Self>);
}

/// Builder passed to [`PropertySet::declare`].
pub struct Fields<R> {
    fields: Vec<Field<R>>,
}

impl<R> Default for Fields<R> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<R: PropertySet> Fields<R> {
    fn push<T: PropertyValue>(
        &mut self,
        ident: &'static str,
        repeated: bool,
        codec: Box<dyn FieldCodec<R>>,
    ) -> FieldOptions<'_> {
        self.fields.push(Field {
            descriptor: FieldDescriptor {
                ident,
                name: normalize_name(ident),
                kind: T::KIND,
                required: false,
                omit_empty: false,
                repeated,
                via: None,
            },
            codec,
        });

        let last = self.fields.len() - 1;
        FieldOptions {
            descriptor: &mut self.fields[last].descriptor,
        }
    }

    /// Declares a plain field, emitted on every encode unless
    /// `omit_empty` applies.
    pub fn one<T: PropertyValue>(
        &mut self,
        ident: &'static str,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> FieldOptions<'_> {
        self.push::<T>(ident, false, Box::new(One { get, get_mut }))
    }

    /// Declares an `Option` field, emitted only when set.
    pub fn optional<T: PropertyValue>(
        &mut self,
        ident: &'static str,
        get: fn(&R) -> &Option<T>,
        get_mut: fn(&mut R) -> &mut Option<T>,
    ) -> FieldOptions<'_> {
        self.push::<T>(ident, false, Box::new(Maybe { get, get_mut }))
    }

    /// Declares a repeated field: one property line per element.
    pub fn list<T: PropertyValue>(
        &mut self,
        ident: &'static str,
        get: fn(&R) -> &Vec<T>,
        get_mut: fn(&mut R) -> &mut Vec<T>,
    ) -> FieldOptions<'_> {
        self.push::<T>(ident, true, Box::new(Many { get, get_mut }))
    }

    /// Hoists the fields of a sub-record into this record, at this
    /// position. The sub-record has no property of its own.
    pub fn embed<S: PropertySet>(
        &mut self,
        ident: &'static str,
        get: fn(&R) -> &S,
        get_mut: fn(&mut R) -> &mut S,
    ) {
        let mut nested = Fields::<S>::default();
        S::declare(&mut nested);

        for field in nested.fields {
            let mut descriptor = field.descriptor;
            descriptor.via = Some(ident);
            self.fields.push(Field {
                descriptor,
                codec: Box::new(Lifted {
                    get,
                    get_mut,
                    inner: field.codec,
                }),
            });
        }
    }
}

/// Options for the field just declared.
pub struct FieldOptions<'a> {
    descriptor: &'a mut FieldDescriptor,
}

impl FieldOptions<'_> {
    /// Overrides the property name. The override is normalised like an
    /// identifier.
    pub fn rename(&mut self, name: &str) -> &mut Self {
        self.descriptor.name = normalize_name(name);
        self
    }

    pub fn required(&mut self) -> &mut Self {
        self.descriptor.required = true;
        self
    }

    pub fn omit_empty(&mut self) -> &mut Self {
        self.descriptor.omit_empty = true;
        self
    }
}

/// Resolved, ordered field descriptors of a record type.
pub struct FieldTable<R> {
    component: String,
    fields: Vec<Field<R>>,
}

impl<R: PropertySet> FieldTable<R> {
    /// Resolves the declared fields of `R`.
    ///
    /// ## Errors
    /// Returns `UnsupportedFieldError` for a field whose value kind has no
    /// codec, an invalid property name, or a property name used twice
    /// (embedded records included).
    pub fn build(component: &str) -> Result<Self, UnsupportedFieldError> {
        let mut declared = Fields::<R>::default();
        R::declare(&mut declared);

        let unsupported = |field: &FieldDescriptor, reason: String| UnsupportedFieldError {
            component: component.to_string(),
            field: field.ident,
            reason,
        };

        let mut seen = HashSet::new();
        for Field { descriptor, .. } in &declared.fields {
            if !descriptor.kind.has_codec() {
                return Err(unsupported(
                    descriptor,
                    format!("value type {} has no codec", descriptor.kind),
                ));
            }
            if !is_valid_name(&descriptor.name) {
                return Err(unsupported(
                    descriptor,
                    format!("invalid property name {:?}", descriptor.name),
                ));
            }
            if !seen.insert(descriptor.name.as_str()) {
                return Err(unsupported(
                    descriptor,
                    format!("property name {} is already mapped", descriptor.name),
                ));
            }
        }

        tracing::debug!(
            component,
            fields = declared.fields.len(),
            "Resolved field table"
        );

        Ok(Self {
            component: component.to_string(),
            fields: declared.fields,
        })
    }

    /// Returns the component name the table was built for.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Iterates over descriptors in declaration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().map(|f| &f.descriptor)
    }

    /// Looks up a descriptor by property name (case-insensitive).
    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<&FieldDescriptor> {
        self.descriptors().find(|d| d.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn fields(&self) -> &[Field<R>] {
        &self.fields
    }
}

/// Unmapped content kept for round-trip fidelity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extras {
    /// Property lines with no field, and surplus occurrences of
    /// single-valued properties, in input order.
    pub properties: Vec<ContentLine>,
    /// Nested components such as VALARM.
    pub components: Vec<RawComponent>,
}

impl Extras {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.components.is_empty()
    }
}

/// A record that maps onto a whole iCalendar component.
pub trait IcalComponent: PropertySet {
    const KIND: ComponentKind;

    /// Returns the memoised field table.
    ///
    /// ## Errors
    /// Returns `RfcError::UnsupportedField` if the declaration is defective.
    fn field_table() -> RfcResult<&'static FieldTable<Self>>;

    fn extras(&self) -> &Extras;

    fn extras_mut(&mut self) -> &mut Extras;
}

/// Storage for a memoised field table.
pub type TableCell<R> = OnceLock<Result<FieldTable<R>, UnsupportedFieldError>>;

/// Resolves the table of `R` on first use and returns the cached result
/// afterwards.
///
/// ## Errors
/// Returns `RfcError::UnsupportedField` if the declaration is defective; the
/// same error is returned on every later call.
pub fn cached_table<R: IcalComponent>(
    cell: &'static TableCell<R>,
) -> RfcResult<&'static FieldTable<R>> {
    cell.get_or_init(|| FieldTable::build(R::KIND.as_str()))
        .as_ref()
        .map_err(|err| RfcError::UnsupportedField(err.clone()))
}
