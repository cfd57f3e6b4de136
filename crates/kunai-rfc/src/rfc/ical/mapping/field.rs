//! Type-erased field accessors.
//!
//! A field table stores one [`FieldCodec`] per declared field. Each codec
//! knows how to read the field out of the record, render it through the
//! value's [`PropertyValue`] impl and write decoded values back.

use super::codec::PropertyValue;
use crate::rfc::ical::core::ContentLine;
use crate::rfc::ical::parse::FormatResult;

pub(crate) trait FieldCodec<R>: Send + Sync {
    /// Whether the field holds nothing to emit (`None`, or an empty list).
    fn is_absent(&self, record: &R) -> bool;

    /// Whether the field holds its type's empty value.
    fn is_empty(&self, record: &R) -> bool;

    /// Appends this field's lines.
    fn encode(&self, record: &R, name: &str, out: &mut Vec<ContentLine>);

    /// Assigns the field from the lines carrying its property.
    ///
    /// Returns how many of the leading lines were consumed; the rest are
    /// surplus occurrences.
    fn decode(&self, record: &mut R, lines: &[ContentLine]) -> FormatResult<usize>;
}

/// Parses the first line, merging later ones for list kinds.
fn read_value<T: PropertyValue>(lines: &[ContentLine]) -> FormatResult<Option<(T, usize)>> {
    let Some((first, rest)) = lines.split_first() else {
        return Ok(None);
    };

    let mut value = T::from_property(first)?;
    if !T::MERGES {
        return Ok(Some((value, 1)));
    }

    for line in rest {
        value.merge(T::from_property(line)?);
    }
    Ok(Some((value, lines.len())))
}

/// A plain `T` field.
pub(crate) struct One<R, T> {
    pub get: fn(&R) -> &T,
    pub get_mut: fn(&mut R) -> &mut T,
}

impl<R, T: PropertyValue> FieldCodec<R> for One<R, T> {
    fn is_absent(&self, _record: &R) -> bool {
        false
    }

    fn is_empty(&self, record: &R) -> bool {
        (self.get)(record).is_empty()
    }

    fn encode(&self, record: &R, name: &str, out: &mut Vec<ContentLine>) {
        out.push((self.get)(record).to_property().into_line(name));
    }

    fn decode(&self, record: &mut R, lines: &[ContentLine]) -> FormatResult<usize> {
        let Some((value, consumed)) = read_value::<T>(lines)? else {
            return Ok(0);
        };
        *(self.get_mut)(record) = value;
        Ok(consumed)
    }
}

/// An `Option<T>` field.
pub(crate) struct Maybe<R, T> {
    pub get: fn(&R) -> &Option<T>,
    pub get_mut: fn(&mut R) -> &mut Option<T>,
}

impl<R, T: PropertyValue> FieldCodec<R> for Maybe<R, T> {
    fn is_absent(&self, record: &R) -> bool {
        (self.get)(record).is_none()
    }

    fn is_empty(&self, record: &R) -> bool {
        (self.get)(record).as_ref().is_none_or(PropertyValue::is_empty)
    }

    fn encode(&self, record: &R, name: &str, out: &mut Vec<ContentLine>) {
        if let Some(value) = (self.get)(record) {
            out.push(value.to_property().into_line(name));
        }
    }

    fn decode(&self, record: &mut R, lines: &[ContentLine]) -> FormatResult<usize> {
        let Some((value, consumed)) = read_value::<T>(lines)? else {
            return Ok(0);
        };
        *(self.get_mut)(record) = Some(value);
        Ok(consumed)
    }
}

/// A `Vec<T>` field: one line per element.
pub(crate) struct Many<R, T> {
    pub get: fn(&R) -> &Vec<T>,
    pub get_mut: fn(&mut R) -> &mut Vec<T>,
}

impl<R, T: PropertyValue> FieldCodec<R> for Many<R, T> {
    fn is_absent(&self, record: &R) -> bool {
        (self.get)(record).is_empty()
    }

    fn is_empty(&self, record: &R) -> bool {
        (self.get)(record).is_empty()
    }

    fn encode(&self, record: &R, name: &str, out: &mut Vec<ContentLine>) {
        out.extend(
            (self.get)(record)
                .iter()
                .map(|value| value.to_property().into_line(name)),
        );
    }

    fn decode(&self, record: &mut R, lines: &[ContentLine]) -> FormatResult<usize> {
        let values = lines
            .iter()
            .map(T::from_property)
            .collect::<FormatResult<Vec<_>>>()?;
        (self.get_mut)(record).extend(values);
        Ok(lines.len())
    }
}

/// A field of an embedded sub-record, reached through the parent.
pub(crate) struct Lifted<R, S> {
    pub get: fn(&R) -> &S,
    pub get_mut: fn(&mut R) -> &mut S,
    pub inner: Box<dyn FieldCodec<S>>,
}

impl<R, S> FieldCodec<R> for Lifted<R, S> {
    fn is_absent(&self, record: &R) -> bool {
        self.inner.is_absent((self.get)(record))
    }

    fn is_empty(&self, record: &R) -> bool {
        self.inner.is_empty((self.get)(record))
    }

    fn encode(&self, record: &R, name: &str, out: &mut Vec<ContentLine>) {
        self.inner.encode((self.get)(record), name, out);
    }

    fn decode(&self, record: &mut R, lines: &[ContentLine]) -> FormatResult<usize> {
        self.inner.decode((self.get_mut)(record), lines)
    }
}
