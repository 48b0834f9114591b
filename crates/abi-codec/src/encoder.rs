//! Head/tail assembly of a full parameter block.
//!
//! The head holds one word per argument: the value itself for static
//! types, or the byte offset (from the start of the parameter block) of
//! the argument's payload in the tail for dynamic ones.

use std::borrow::Borrow;

use tracing::{debug, trace};

use crate::array::{encode_array, encode_dynamic, encode_static, mismatch};
use crate::catalog::FunctionSignature;
use crate::error::AbiError;
use crate::scalar::{encode_usize, Word, WORD_SIZE};
use crate::types::{ArgumentValue, ElementKind, TypeDescriptor};

/// Per-call scratch state. Never shared between calls.
#[derive(Debug)]
pub(crate) struct EncodingContext {
    head: Vec<u8>,
    tail: Vec<u8>,
    next_offset: usize,
}

impl EncodingContext {
    pub(crate) fn new(argument_count: usize) -> Self {
        let head_size = WORD_SIZE * argument_count;
        Self {
            head: Vec::with_capacity(head_size),
            tail: Vec::new(),
            next_offset: head_size,
        }
    }

    /// Offset the next dynamic payload will be written at.
    pub(crate) fn next_offset(&self) -> usize {
        self.next_offset
    }

    fn push_static(&mut self, word: &Word) {
        self.head.extend_from_slice(word);
    }

    fn push_dynamic(&mut self, payload: &[u8]) {
        self.head.extend_from_slice(&encode_usize(self.next_offset));
        self.tail.extend_from_slice(payload);
        self.next_offset += payload.len();
    }

    pub(crate) fn push(
        &mut self,
        ty: TypeDescriptor,
        value: &ArgumentValue,
    ) -> Result<(), AbiError> {
        match ty {
            TypeDescriptor::UInt256 => {
                self.push_static(&encode_static(ElementKind::UInt256, value)?);
            }
            TypeDescriptor::Address => {
                self.push_static(&encode_static(ElementKind::Address, value)?);
            }
            TypeDescriptor::Bool => {
                self.push_static(&encode_static(ElementKind::Bool, value)?);
            }
            TypeDescriptor::Bytes => {
                let fragment = encode_dynamic(ElementKind::Bytes, value)?;
                self.push_dynamic(&fragment.into_bytes());
            }
            TypeDescriptor::String => {
                let fragment = encode_dynamic(ElementKind::String, value)?;
                self.push_dynamic(&fragment.into_bytes());
            }
            TypeDescriptor::ArrayOf(kind) => {
                let ArgumentValue::Array(items) = value else {
                    return Err(mismatch(ty, value));
                };
                self.push_dynamic(&encode_array(kind, items)?);
            }
        }
        Ok(())
    }

    /// Concatenates head and tail into the parameter block.
    pub(crate) fn finish(mut self) -> Vec<u8> {
        self.head.append(&mut self.tail);
        self.head
    }
}

pub(crate) fn check_count(expected: usize, actual: usize) -> Result<(), AbiError> {
    if expected != actual {
        return Err(AbiError::ArgumentCountMismatch { expected, actual });
    }
    Ok(())
}

/// Runs the head/tail pass over values produced one at a time.
///
/// Each value is pulled from `values` only after the previous one has been
/// encoded, so a failure that happens while producing a value (such as a
/// JSON conversion) still surfaces in declared order. Callers check the
/// argument count first.
pub(crate) fn assemble<I, V>(types: &[TypeDescriptor], values: I) -> Result<Vec<u8>, AbiError>
where
    I: IntoIterator<Item = Result<V, AbiError>>,
    V: Borrow<ArgumentValue>,
{
    let mut ctx = EncodingContext::new(types.len());
    for (index, (ty, value)) in types.iter().zip(values).enumerate() {
        trace!(index, ty = %ty, next_offset = ctx.next_offset(), "encoding argument");
        if let Err(e) = value.and_then(|value| ctx.push(*ty, value.borrow())) {
            debug!(index, code = e.code(), "argument encoding failed: {e}");
            return Err(e);
        }
    }

    Ok(ctx.finish())
}

/// Prefixes a parameter block with a selector, when there is one.
pub(crate) fn with_selector(selector: Option<[u8; 4]>, params: Vec<u8>) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + params.len());
    if let Some(selector) = selector {
        data.extend_from_slice(&selector);
    }
    data.extend(params);
    data
}

/// Encodes a parameter block (no selector) for the given types and values.
///
/// Arguments are validated in declared order and the first failure is
/// returned; no partial output escapes.
pub fn encode_arguments(
    types: &[TypeDescriptor],
    values: &[ArgumentValue],
) -> Result<Vec<u8>, AbiError> {
    check_count(types.len(), values.len())?;
    assemble(types, values.iter().map(Ok))
}

/// Encodes `selector || parameter block` as raw bytes.
pub fn encode_call_data(
    selector: Option<[u8; 4]>,
    types: &[TypeDescriptor],
    values: &[ArgumentValue],
) -> Result<Vec<u8>, AbiError> {
    Ok(with_selector(selector, encode_arguments(types, values)?))
}

/// Encodes a call to `function` as a `0x`-prefixed lowercase hex string.
pub fn encode_function_call(
    function: &FunctionSignature,
    values: &[ArgumentValue],
) -> Result<String, AbiError> {
    let data = encode_call_data(Some(function.selector()), function.inputs(), values)?;
    Ok(to_hex(&data))
}

/// Renders bytes as `0x`-prefixed lowercase hex.
pub fn to_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}
