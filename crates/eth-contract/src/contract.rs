use abi_codec::{ArgumentValue, CallArguments, FunctionCatalog, FunctionSignature};
use tracing::debug;

use crate::address::validate_address;
use crate::call::CallRequest;
use crate::config::ContractConfig;
use crate::error::ContractError;

/// A deployed contract: its address plus the function catalog parsed from
/// its JSON interface.
///
/// The catalog is built once in the constructor and never mutated, so a
/// `Contract` can sit behind an `Arc` and encode calls from many threads.
#[derive(Debug, Clone)]
pub struct Contract {
    address: String,
    catalog: FunctionCatalog,
    from: Option<String>,
    gas: Option<String>,
}

impl Contract {
    /// Parses `abi_json` and binds it to `address`.
    ///
    /// The address must be `0x` + 40 hex characters; mixed-case addresses
    /// must carry a valid EIP-55 checksum.
    pub fn new(abi_json: &str, address: &str) -> Result<Self, ContractError> {
        check_address(address)?;
        Ok(Self::bind(FunctionCatalog::from_json(abi_json)?, address))
    }

    /// Binds an already-built catalog to `address`.
    pub fn with_catalog(catalog: FunctionCatalog, address: &str) -> Result<Self, ContractError> {
        check_address(address)?;
        Ok(Self::bind(catalog, address))
    }

    fn bind(catalog: FunctionCatalog, address: &str) -> Self {
        debug!(address, functions = catalog.len(), "contract proxy created");
        Self {
            address: address.to_string(),
            catalog,
            from: None,
            gas: None,
        }
    }

    pub fn from_config(config: &ContractConfig) -> Result<Self, ContractError> {
        check_address(&config.address)?;
        let contract = Self::bind(config.catalog()?, &config.address);
        let contract = match &config.from {
            Some(from) => contract.with_from(from)?,
            None => contract,
        };
        Ok(match &config.gas {
            Some(gas) => contract.with_gas(gas),
            None => contract,
        })
    }

    /// Sets the default sender for [`Contract::call_request`].
    pub fn with_from(mut self, from: &str) -> Result<Self, ContractError> {
        check_address(from)?;
        self.from = Some(from.to_string());
        Ok(self)
    }

    /// Sets the default gas limit (hex quantity) for [`Contract::call_request`].
    pub fn with_gas(mut self, gas: &str) -> Self {
        self.gas = Some(gas.to_string());
        self
    }

    /// Builds a proxy for the same interface at another address.
    pub fn clone_at(&self, address: &str) -> Result<Self, ContractError> {
        let mut contract = Self::with_catalog(self.catalog.clone(), address)?;
        contract.from = self.from.clone();
        contract.gas = self.gas.clone();
        debug!(from = %self.address, to = address, "contract proxy cloned");
        Ok(contract)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn catalog(&self) -> &FunctionCatalog {
        &self.catalog
    }

    pub fn function(&self, name: &str) -> Result<&FunctionSignature, ContractError> {
        Ok(self.catalog.function(name)?)
    }

    /// Selector of `name` as 8 lowercase hex characters.
    pub fn selector(&self, name: &str) -> Result<String, ContractError> {
        Ok(self.function(name)?.selector_hex())
    }

    /// Encodes a call to `name` with typed arguments.
    pub fn encode_call(&self, name: &str, args: &[ArgumentValue]) -> Result<String, ContractError> {
        Ok(self.catalog.encode_call(name, args)?)
    }

    /// Encodes a call from a JSON argument list, positional or tagged.
    pub fn encode_call_json(&self, name: &str, args_json: &str) -> Result<String, ContractError> {
        let args = CallArguments::from_json(args_json)?;
        Ok(args.encode(&self.catalog, name)?)
    }

    /// Builds a call object whose `data` is the encoded call, ready for an
    /// external sender.
    pub fn call_request(&self, name: &str, args_json: &str) -> Result<CallRequest, ContractError> {
        let data = self.encode_call_json(name, args_json)?;
        Ok(CallRequest {
            from: self.from.clone(),
            to: self.address.clone(),
            data,
            gas: self.gas.clone(),
        })
    }
}

fn check_address(address: &str) -> Result<(), ContractError> {
    if validate_address(address)? {
        Ok(())
    } else {
        Err(ContractError::InvalidAddress(format!(
            "{address} fails its EIP-55 checksum"
        )))
    }
}
