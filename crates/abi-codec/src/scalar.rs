//! Static-type encoding: one value, one 32-byte word, left-padded.

use alloy_primitives::U256;

use crate::error::AbiError;

/// A 32-byte ABI word.
pub type Word = [u8; 32];

/// Size of one ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// Returns the input without a leading `0x`/`0X`, if it had one.
pub(crate) fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

/// Encodes a length or offset as a left-padded word.
pub fn encode_usize(value: usize) -> Word {
    U256::from(value).to_be_bytes::<32>()
}

/// Encodes an unsigned integer given as decimal digits (or `0x` hex).
///
/// The big-endian value is left-padded to 32 bytes. Values wider than 256
/// bits cannot be represented in a word and are rejected.
pub fn encode_uint(value: &str) -> Result<Word, AbiError> {
    let parsed = match strip_hex_prefix(value) {
        Some(digits) => {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(AbiError::InvalidNumber(value.to_string()));
            }
            U256::from_str_radix(digits, 16)
        }
        None => {
            if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AbiError::InvalidNumber(value.to_string()));
            }
            U256::from_str_radix(value, 10)
        }
    };

    let parsed = parsed
        .map_err(|_| AbiError::InvalidNumber(format!("{value} exceeds 256 bits")))?;
    Ok(parsed.to_be_bytes::<32>())
}

/// Encodes a 20-byte address: 12 zero bytes followed by the address.
///
/// Only the shape is checked here. EIP-55 checksum validation belongs to
/// the caller.
pub fn encode_address(value: &str) -> Result<Word, AbiError> {
    let hex_str = strip_hex_prefix(value).unwrap_or(value);

    if hex_str.len() != 40 {
        return Err(AbiError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_str.len()
        )));
    }

    let bytes = hex::decode(hex_str.to_ascii_lowercase())
        .map_err(|e| AbiError::InvalidAddress(format!("{value}: {e}")))?;

    let mut word = [0u8; 32];
    word[12..].copy_from_slice(&bytes);
    Ok(word)
}

/// Encodes a boolean given as `0`, `1`, `true` or `false`.
pub fn encode_bool(value: &str) -> Result<Word, AbiError> {
    let bit = match value {
        "1" | "true" => 1,
        "0" | "false" => 0,
        other => return Err(AbiError::InvalidBoolean(other.to_string())),
    };

    let mut word = [0u8; 32];
    word[31] = bit;
    Ok(word)
}
