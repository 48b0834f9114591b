//! Unbounded array (`T[]`) encoding.
//!
//! Static elements are laid out as one word each after the length word.
//! Dynamic elements (`bytes[]`, `string[]`) need a second level of
//! indirection: an inner offset table, relative to the start of the array
//! body (just after the length word), followed by each element's
//! length + data chunk.

use crate::dynamic::{encode_bytes, encode_string, TailFragment};
use crate::error::AbiError;
use crate::scalar::{encode_address, encode_bool, encode_uint, encode_usize, Word, WORD_SIZE};
use crate::types::{ArgumentValue, ElementKind};

/// Encodes a static value into its single word, checking the value's tag
/// against the declared kind.
pub(crate) fn encode_static(kind: ElementKind, value: &ArgumentValue) -> Result<Word, AbiError> {
    match (kind, value) {
        (ElementKind::UInt256, ArgumentValue::Uint(v)) => encode_uint(v),
        (ElementKind::Address, ArgumentValue::Address(v)) => encode_address(v),
        (ElementKind::Bool, ArgumentValue::Bool(v)) => encode_bool(v),
        (kind, value) => Err(mismatch(kind, value)),
    }
}

/// Encodes a `bytes` or `string` value into its tail fragment.
pub(crate) fn encode_dynamic(
    kind: ElementKind,
    value: &ArgumentValue,
) -> Result<TailFragment, AbiError> {
    match (kind, value) {
        (ElementKind::Bytes, ArgumentValue::Bytes(v)) => encode_bytes(v),
        (ElementKind::String, ArgumentValue::String(v)) => Ok(encode_string(v)),
        (kind, value) => Err(mismatch(kind, value)),
    }
}

pub(crate) fn mismatch(expected: impl std::fmt::Display, value: &ArgumentValue) -> AbiError {
    AbiError::TypeMismatch(format!(
        "expected {expected}, got {} value",
        value.variant_name()
    ))
}

/// Encodes an array's tail: length word, then the element region.
///
/// The first element that fails aborts the whole array with that element's
/// error.
pub fn encode_array(kind: ElementKind, values: &[ArgumentValue]) -> Result<Vec<u8>, AbiError> {
    let mut out = Vec::with_capacity(WORD_SIZE * (values.len() + 1));
    out.extend_from_slice(&encode_usize(values.len()));

    if kind.is_dynamic() {
        encode_dynamic_elements(kind, values, &mut out)?;
    } else {
        for value in values {
            out.extend_from_slice(&encode_static(kind, value)?);
        }
    }

    Ok(out)
}

fn encode_dynamic_elements(
    kind: ElementKind,
    values: &[ArgumentValue],
    out: &mut Vec<u8>,
) -> Result<(), AbiError> {
    let fragments = values
        .iter()
        .map(|value| encode_dynamic(kind, value))
        .collect::<Result<Vec<_>, _>>()?;

    // Inner offsets start past the offset table itself.
    let mut inner_offset = WORD_SIZE * fragments.len();
    for fragment in &fragments {
        out.extend_from_slice(&encode_usize(inner_offset));
        inner_offset = (inner_offset + fragment.byte_len()).next_multiple_of(WORD_SIZE);
    }

    for fragment in &fragments {
        fragment.write_to(out);
    }

    Ok(())
}
