//! Variable-length encoding for `bytes` and `string`.

use crate::error::AbiError;
use crate::scalar::{encode_usize, strip_hex_prefix, Word, WORD_SIZE};

/// A self-contained tail chunk: a length word followed by the payload,
/// right-padded with zeros to a word boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailFragment {
    /// Unpadded payload length in bytes, as a word.
    pub length: Word,
    /// Payload padded to `ceil(len / 32) * 32` bytes.
    pub data: Vec<u8>,
}

impl TailFragment {
    fn from_payload(payload: &[u8]) -> Self {
        let padded_len = payload.len().div_ceil(WORD_SIZE) * WORD_SIZE;
        let mut data = vec![0u8; padded_len];
        data[..payload.len()].copy_from_slice(payload);

        Self {
            length: encode_usize(payload.len()),
            data,
        }
    }

    /// Total encoded size: the length word plus the padded data.
    pub fn byte_len(&self) -> usize {
        WORD_SIZE + self.data.len()
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.length);
        out.extend_from_slice(&self.data);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());
        self.write_to(&mut out);
        out
    }
}

/// Encodes a hex byte string. An odd number of nibbles gets a leading `0`,
/// so `aaa` is the two bytes `0a aa`.
pub fn encode_bytes(value: &str) -> Result<TailFragment, AbiError> {
    let hex_str = strip_hex_prefix(value).unwrap_or(value);

    let payload = if hex_str.len() % 2 == 1 {
        hex::decode(format!("0{hex_str}"))
    } else {
        hex::decode(hex_str)
    }
    .map_err(|e| AbiError::InvalidHex(format!("{value}: {e}")))?;

    Ok(TailFragment::from_payload(&payload))
}

/// Encodes UTF-8 text as its raw bytes; the length counts bytes, not chars.
pub fn encode_string(value: &str) -> TailFragment {
    TailFragment::from_payload(value.as_bytes())
}
