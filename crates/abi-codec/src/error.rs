use serde::Serialize;
use thiserror::Error;

/// ABI encoding errors.
///
/// Every variant maps to a stable numeric code (see [`AbiError::code`]) so
/// callers on the far side of a JSON or FFI boundary can branch on it
/// without parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("function not found: {0}")]
    FunctionNotFound(String),

    #[error("argument count mismatch: expected {expected}, got {actual}")]
    ArgumentCountMismatch { expected: usize, actual: usize },

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid boolean: {0}")]
    InvalidBoolean(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("invalid abi: {0}")]
    InvalidAbi(String),
}

/// A `{code, message}` pair for reporting an [`AbiError`] across a
/// serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub code: u32,
    pub message: String,
}

impl AbiError {
    /// Stable numeric code for this error kind.
    pub fn code(&self) -> u32 {
        match self {
            AbiError::FunctionNotFound(_) => 1,
            AbiError::ArgumentCountMismatch { .. } => 2,
            AbiError::InvalidNumber(_) => 3,
            AbiError::InvalidAddress(_) => 4,
            AbiError::InvalidBoolean(_) => 5,
            AbiError::InvalidHex(_) => 6,
            AbiError::UnsupportedType(_) => 7,
            AbiError::TypeMismatch(_) => 8,
            AbiError::InvalidAbi(_) => 9,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl From<serde_json::Error> for AbiError {
    fn from(e: serde_json::Error) -> Self {
        AbiError::InvalidAbi(e.to_string())
    }
}
