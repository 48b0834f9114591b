//! Call arguments as they arrive over JSON.
//!
//! Two shapes are accepted:
//!
//! - positional: `["234", "0x12..", false, ["1", "2"]]`, matched against a
//!   catalogued function's parameter list;
//! - tagged: `[{"t": "uint256", "v": "234"}, {"type": "bool", "value": true}]`,
//!   which carries its own types and so derives its own signature.

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::{FunctionCatalog, FunctionSignature};
use crate::encoder::{assemble, check_count, to_hex, with_selector};
use crate::error::AbiError;
use crate::types::{parse_type, ArgumentValue, ElementKind, TypeDescriptor};

/// One `{t|type, v|value}` argument.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggedArgument {
    #[serde(rename = "type", alias = "t")]
    pub ty: String,
    #[serde(alias = "v")]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallArguments {
    Positional(Vec<Value>),
    Tagged(Vec<TaggedArgument>),
}

impl CallArguments {
    pub fn from_json(args_json: &str) -> Result<Self, AbiError> {
        let value: Value = serde_json::from_str(args_json)?;
        Self::from_value(value)
    }

    /// Classifies a JSON array. It is tagged only when it is non-empty and
    /// every element is an object naming its type.
    pub fn from_value(value: Value) -> Result<Self, AbiError> {
        let Value::Array(items) = value else {
            return Err(AbiError::InvalidAbi("call arguments must be a JSON array".into()));
        };

        let is_tagged = !items.is_empty()
            && items.iter().all(|item| {
                item.as_object()
                    .is_some_and(|obj| obj.contains_key("t") || obj.contains_key("type"))
            });

        if is_tagged {
            let tagged = items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<TaggedArgument>, _>>()?;
            Ok(CallArguments::Tagged(tagged))
        } else {
            Ok(CallArguments::Positional(items))
        }
    }

    /// Encodes these arguments as a call to `name`.
    ///
    /// Positional arguments are matched against the catalogued function;
    /// tagged arguments ignore the catalog and derive `name(types...)`.
    pub fn encode(&self, catalog: &FunctionCatalog, name: &str) -> Result<String, AbiError> {
        match self {
            CallArguments::Positional(values) => encode_positional(catalog.function(name)?, values),
            CallArguments::Tagged(args) => encode_tagged(Some(name), args),
        }
    }
}

/// Encodes positional JSON values against a known function.
///
/// Each value is converted right before it is encoded, so the first
/// argument to fail (in conversion or in encoding) decides the error.
pub fn encode_positional(function: &FunctionSignature, args: &[Value]) -> Result<String, AbiError> {
    check_count(function.inputs().len(), args.len())?;
    encode_json(Some(function.selector()), function.inputs(), args.iter())
}

/// Encodes self-describing arguments. With a name the output carries the
/// selector of the derived signature; without one it is the bare parameter
/// block.
pub fn encode_tagged(name: Option<&str>, args: &[TaggedArgument]) -> Result<String, AbiError> {
    let values = args.iter().map(|arg| &arg.value);

    match name {
        Some(name) => {
            let type_strings: Vec<&str> = args.iter().map(|arg| arg.ty.as_str()).collect();
            let function = FunctionSignature::parse(name, &type_strings)?;
            encode_json(Some(function.selector()), function.inputs(), values)
        }
        None => {
            let types = args
                .iter()
                .map(|arg| parse_type(&arg.ty).map(|ty| ty.descriptor))
                .collect::<Result<Vec<_>, _>>()?;
            encode_json(None, &types, values)
        }
    }
}

fn encode_json<'a>(
    selector: Option<[u8; 4]>,
    types: &[TypeDescriptor],
    args: impl Iterator<Item = &'a Value>,
) -> Result<String, AbiError> {
    let values = types.iter().zip(args).map(|(ty, arg)| value_from_json(*ty, arg));
    let params = assemble(types, values)?;
    Ok(to_hex(&with_selector(selector, params)))
}

/// Converts one JSON value to an [`ArgumentValue`] of the declared type.
pub fn value_from_json(ty: TypeDescriptor, value: &Value) -> Result<ArgumentValue, AbiError> {
    match ty {
        TypeDescriptor::UInt256 => element_from_json(ElementKind::UInt256, value),
        TypeDescriptor::Address => element_from_json(ElementKind::Address, value),
        TypeDescriptor::Bool => element_from_json(ElementKind::Bool, value),
        TypeDescriptor::Bytes => element_from_json(ElementKind::Bytes, value),
        TypeDescriptor::String => element_from_json(ElementKind::String, value),
        TypeDescriptor::ArrayOf(kind) => {
            let Value::Array(items) = value else {
                return Err(json_mismatch(ty, value));
            };
            items
                .iter()
                .map(|item| element_from_json(kind, item))
                .collect::<Result<Vec<_>, _>>()
                .map(ArgumentValue::Array)
        }
    }
}

fn element_from_json(kind: ElementKind, value: &Value) -> Result<ArgumentValue, AbiError> {
    match (kind, value) {
        (ElementKind::UInt256, Value::String(s)) => Ok(ArgumentValue::Uint(s.clone())),
        (ElementKind::UInt256, Value::Number(n)) => n
            .as_u64()
            .map(|n| ArgumentValue::Uint(n.to_string()))
            .ok_or_else(|| {
                AbiError::InvalidNumber(format!(
                    "JSON number {n} is not a u64; pass larger values as a string"
                ))
            }),
        (ElementKind::Address, Value::String(s)) => Ok(ArgumentValue::Address(s.clone())),
        (ElementKind::Bool, Value::Bool(b)) => Ok(ArgumentValue::boolean(*b)),
        (ElementKind::Bool, Value::String(s)) => Ok(ArgumentValue::Bool(s.clone())),
        (ElementKind::Bool, Value::Number(n)) => Ok(ArgumentValue::Bool(n.to_string())),
        (ElementKind::Bytes, Value::String(s)) => Ok(ArgumentValue::Bytes(s.clone())),
        (ElementKind::String, Value::String(s)) => Ok(ArgumentValue::String(s.clone())),
        (kind, value) => Err(json_mismatch(kind, value)),
    }
}

fn json_mismatch(expected: impl std::fmt::Display, value: &Value) -> AbiError {
    let found = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    AbiError::TypeMismatch(format!("expected {expected}, got JSON {found}"))
}
