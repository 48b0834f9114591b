use abi_codec::AbiError;
use thiserror::Error;

/// Contract proxy errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("ABI: {0}")]
    Abi(#[from] AbiError),

    #[error("invalid contract address: {0}")]
    InvalidAddress(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ContractError {
    /// Numeric code; codec errors keep their own codes.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::Abi(e) => e.code(),
            ContractError::InvalidAddress(_) => 100,
            ContractError::InvalidConfig(_) => 101,
        }
    }
}

impl From<serde_json::Error> for ContractError {
    fn from(e: serde_json::Error) -> Self {
        ContractError::InvalidConfig(e.to_string())
    }
}
