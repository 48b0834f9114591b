//! Function catalog: the parsed, read-only view of a contract's JSON
//! interface.

use std::collections::BTreeMap;

use serde::Deserialize;
use sha3::{Digest, Keccak256};
use tracing::debug;

use crate::encoder::encode_function_call;
use crate::error::AbiError;
use crate::types::{parse_type, ArgumentValue, TypeDescriptor};

/// One entry of a JSON ABI. Only `"type": "function"` entries are indexed;
/// events, constructors and the rest are skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiItem {
    #[serde(rename = "type", default = "default_item_type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbiInput {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

// Solidity ABI: an item without "type" is a function.
fn default_item_type() -> String {
    "function".to_string()
}

/// Computes a function selector: the first 4 bytes of
/// `keccak256(signature)`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// A function's name, ordered parameter types, canonical signature and
/// selector. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    name: String,
    inputs: Vec<TypeDescriptor>,
    signature: String,
    selector: [u8; 4],
}

impl FunctionSignature {
    /// Builds a signature from declared ABI type strings.
    pub fn parse<S: AsRef<str>>(name: &str, types: &[S]) -> Result<Self, AbiError> {
        let mut inputs = Vec::with_capacity(types.len());
        let mut canonical = Vec::with_capacity(types.len());

        for ty in types {
            let parsed = parse_type(ty.as_ref())?;
            inputs.push(parsed.descriptor);
            canonical.push(parsed.canonical);
        }

        let signature = format!("{name}({})", canonical.join(","));
        Ok(Self {
            name: name.to_string(),
            inputs,
            selector: selector(&signature),
            signature,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[TypeDescriptor] {
        &self.inputs
    }

    /// Canonical `name(type1,type2,...)` form.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn selector(&self) -> [u8; 4] {
        self.selector
    }

    /// Selector as 8 lowercase hex characters.
    pub fn selector_hex(&self) -> String {
        hex::encode(self.selector)
    }

    pub fn encode_call(&self, values: &[ArgumentValue]) -> Result<String, AbiError> {
        encode_function_call(self, values)
    }
}

/// Function signatures keyed by name.
///
/// Built once from a JSON interface and read-only afterwards, so it can be
/// shared across threads freely. When a name is overloaded the last
/// declaration wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionCatalog {
    functions: BTreeMap<String, FunctionSignature>,
}

impl FunctionCatalog {
    /// Parses a JSON ABI array.
    pub fn from_json(abi_json: &str) -> Result<Self, AbiError> {
        let items: Vec<AbiItem> = serde_json::from_str(abi_json)?;
        Self::from_items(&items)
    }

    /// Parses an already-deserialized JSON ABI value.
    pub fn from_value(abi: serde_json::Value) -> Result<Self, AbiError> {
        let items: Vec<AbiItem> = serde_json::from_value(abi)?;
        Self::from_items(&items)
    }

    pub fn from_items(items: &[AbiItem]) -> Result<Self, AbiError> {
        let mut functions = BTreeMap::new();

        for item in items.iter().filter(|item| item.kind == "function") {
            let name = item
                .name
                .as_deref()
                .ok_or_else(|| AbiError::InvalidAbi("function item without a name".into()))?;

            let types: Vec<&str> = item.inputs.iter().map(|input| input.ty.as_str()).collect();
            let function = FunctionSignature::parse(name, &types)?;
            functions.insert(name.to_string(), function);
        }

        debug!(functions = functions.len(), "built function catalog");
        Ok(Self { functions })
    }

    pub fn function(&self, name: &str) -> Result<&FunctionSignature, AbiError> {
        self.functions
            .get(name)
            .ok_or_else(|| AbiError::FunctionNotFound(name.to_string()))
    }

    pub fn selector(&self, name: &str) -> Result<[u8; 4], AbiError> {
        self.function(name).map(FunctionSignature::selector)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Function names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Encodes a call to a catalogued function.
    pub fn encode_call(&self, name: &str, values: &[ArgumentValue]) -> Result<String, AbiError> {
        self.function(name)?.encode_call(values)
    }
}
