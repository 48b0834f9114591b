use abi_codec::FunctionCatalog;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ContractError;

/// Serde-loadable proxy configuration.
///
/// ```json
/// {
///   "address": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
///   "abi": [{"type": "function", "name": "ping", "inputs": []}],
///   "from": "0x0000000000000000000000000000000000000001",
///   "gas": "0x186a0"
/// }
/// ```
///
/// `abi` may also be given as a JSON string holding the array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractConfig {
    pub address: String,
    pub abi: Value,
    /// Default sender placed into call requests.
    #[serde(default)]
    pub from: Option<String>,
    /// Default gas limit (hex quantity) placed into call requests.
    #[serde(default)]
    pub gas: Option<String>,
}

impl ContractConfig {
    pub fn from_json(config_json: &str) -> Result<Self, ContractError> {
        Ok(serde_json::from_str(config_json)?)
    }

    /// Builds the function catalog from `abi`.
    ///
    /// An inline array is read as it was deserialized; a string is parsed as
    /// JSON text first.
    pub fn catalog(&self) -> Result<FunctionCatalog, ContractError> {
        match &self.abi {
            Value::String(s) => Ok(FunctionCatalog::from_json(s)?),
            Value::Array(_) => Ok(FunctionCatalog::from_value(self.abi.clone())?),
            other => Err(ContractError::InvalidConfig(format!(
                "abi must be an array or a string, got {other}"
            ))),
        }
    }
}
