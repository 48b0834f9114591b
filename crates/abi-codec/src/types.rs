use std::fmt;

use crate::error::AbiError;

/// Kinds an array may hold. Arrays are one level deep, so this is the
/// non-array subset of [`TypeDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    UInt256,
    Address,
    Bool,
    Bytes,
    String,
}

/// A parameter type the encoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    UInt256,
    Address,
    Bool,
    Bytes,
    String,
    ArrayOf(ElementKind),
}

impl ElementKind {
    /// `bytes` and `string` are variable-length; the rest fit in one word.
    pub fn is_dynamic(self) -> bool {
        matches!(self, ElementKind::Bytes | ElementKind::String)
    }

    fn as_str(self) -> &'static str {
        match self {
            ElementKind::UInt256 => "uint256",
            ElementKind::Address => "address",
            ElementKind::Bool => "bool",
            ElementKind::Bytes => "bytes",
            ElementKind::String => "string",
        }
    }
}

impl TypeDescriptor {
    pub fn is_dynamic(self) -> bool {
        match self {
            TypeDescriptor::UInt256 | TypeDescriptor::Address | TypeDescriptor::Bool => false,
            TypeDescriptor::Bytes | TypeDescriptor::String | TypeDescriptor::ArrayOf(_) => true,
        }
    }
}

impl From<ElementKind> for TypeDescriptor {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::UInt256 => TypeDescriptor::UInt256,
            ElementKind::Address => TypeDescriptor::Address,
            ElementKind::Bool => TypeDescriptor::Bool,
            ElementKind::Bytes => TypeDescriptor::Bytes,
            ElementKind::String => TypeDescriptor::String,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::ArrayOf(kind) => write!(f, "{kind}[]"),
            TypeDescriptor::UInt256 => f.write_str("uint256"),
            TypeDescriptor::Address => f.write_str("address"),
            TypeDescriptor::Bool => f.write_str("bool"),
            TypeDescriptor::Bytes => f.write_str("bytes"),
            TypeDescriptor::String => f.write_str("string"),
        }
    }
}

/// A declared ABI type: the resolved descriptor plus the type string as it
/// must appear in the canonical signature.
///
/// The two differ for narrow integers: `uint8` encodes exactly like
/// `uint256` but must still hash as `uint8` for the selector to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiType {
    pub descriptor: TypeDescriptor,
    pub canonical: String,
}

/// Parses an ABI type string such as `uint256`, `address[]` or `string`.
pub fn parse_type(s: &str) -> Result<AbiType, AbiError> {
    let s = s.trim();

    let (base, is_array) = match s.strip_suffix("[]") {
        Some(base) => (base, true),
        None => (s, false),
    };

    let (kind, canonical_base) = parse_element(base)
        .ok_or_else(|| AbiError::UnsupportedType(s.to_string()))?;

    let (descriptor, canonical) = if is_array {
        (TypeDescriptor::ArrayOf(kind), format!("{canonical_base}[]"))
    } else {
        (TypeDescriptor::from(kind), canonical_base)
    };

    Ok(AbiType {
        descriptor,
        canonical,
    })
}

fn parse_element(base: &str) -> Option<(ElementKind, String)> {
    match base {
        "address" => return Some((ElementKind::Address, base.to_string())),
        "bool" => return Some((ElementKind::Bool, base.to_string())),
        "bytes" => return Some((ElementKind::Bytes, base.to_string())),
        "string" => return Some((ElementKind::String, base.to_string())),
        _ => {}
    }

    // Every unsigned width shares the 32-byte word encoding.
    let width = base.strip_prefix("uint")?;
    if width.is_empty() {
        return Some((ElementKind::UInt256, "uint256".to_string()));
    }
    if width.bytes().all(|b| b.is_ascii_digit()) {
        return Some((ElementKind::UInt256, base.to_string()));
    }
    None
}

/// A value supplied for one parameter of one call.
///
/// Scalars stay textual until encoding so that validation errors carry the
/// caller's original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
    /// Decimal digits, or `0x`-prefixed hex.
    Uint(String),
    /// 40 hex characters with optional `0x` prefix.
    Address(String),
    /// One of `0`, `1`, `true`, `false`.
    Bool(String),
    /// Hex byte string with optional `0x` prefix.
    Bytes(String),
    /// UTF-8 text.
    String(String),
    Array(Vec<ArgumentValue>),
}

impl ArgumentValue {
    pub fn uint(value: impl Into<String>) -> Self {
        ArgumentValue::Uint(value.into())
    }

    pub fn address(value: impl Into<String>) -> Self {
        ArgumentValue::Address(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        ArgumentValue::Bool(value.to_string())
    }

    pub fn bytes(value: impl Into<String>) -> Self {
        ArgumentValue::Bytes(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        ArgumentValue::String(value.into())
    }

    /// Builds an array value by wrapping each item with `f`.
    pub fn array<I, T>(items: I, f: impl Fn(T) -> ArgumentValue) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        ArgumentValue::Array(items.into_iter().map(f).collect())
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            ArgumentValue::Uint(_) => "uint",
            ArgumentValue::Address(_) => "address",
            ArgumentValue::Bool(_) => "bool",
            ArgumentValue::Bytes(_) => "bytes",
            ArgumentValue::String(_) => "string",
            ArgumentValue::Array(_) => "array",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scalar_types() {
        assert_eq!(parse_type("address").unwrap().descriptor, TypeDescriptor::Address);
        assert_eq!(parse_type("bool").unwrap().descriptor, TypeDescriptor::Bool);
        assert_eq!(parse_type("bytes").unwrap().descriptor, TypeDescriptor::Bytes);
        assert_eq!(parse_type("string").unwrap().descriptor, TypeDescriptor::String);
        assert_eq!(parse_type("uint256").unwrap().descriptor, TypeDescriptor::UInt256);
    }

    #[test]
    fn every_uint_width_maps_to_uint256() {
        for ty in ["uint8", "uint16", "uint64", "uint128", "uint256"] {
            let parsed = parse_type(ty).unwrap();
            assert_eq!(parsed.descriptor, TypeDescriptor::UInt256);
            assert_eq!(parsed.canonical, ty);
        }
    }

    #[test]
    fn bare_uint_canonicalizes_to_uint256() {
        assert_eq!(parse_type("uint").unwrap().canonical, "uint256");
        assert_eq!(parse_type("uint[]").unwrap().canonical, "uint256[]");
    }

    #[test]
    fn parse_array_types() {
        let parsed = parse_type("bytes[]").unwrap();
        assert_eq!(parsed.descriptor, TypeDescriptor::ArrayOf(ElementKind::Bytes));
        assert_eq!(parsed.canonical, "bytes[]");

        let parsed = parse_type("uint32[]").unwrap();
        assert_eq!(parsed.descriptor, TypeDescriptor::ArrayOf(ElementKind::UInt256));
        assert_eq!(parsed.canonical, "uint32[]");
    }

    #[test]
    fn unsupported_types_error() {
        for ty in ["int256", "bytes32", "uint256[3]", "string[][]", "tuple", "uintx", ""] {
            assert!(
                matches!(parse_type(ty), Err(AbiError::UnsupportedType(_))),
                "{ty} should be unsupported"
            );
        }
    }

    #[test]
    fn dynamic_classification() {
        assert!(!TypeDescriptor::UInt256.is_dynamic());
        assert!(!TypeDescriptor::Address.is_dynamic());
        assert!(!TypeDescriptor::Bool.is_dynamic());
        assert!(TypeDescriptor::Bytes.is_dynamic());
        assert!(TypeDescriptor::String.is_dynamic());
        assert!(TypeDescriptor::ArrayOf(ElementKind::Bool).is_dynamic());

        assert!(ElementKind::String.is_dynamic());
        assert!(!ElementKind::Address.is_dynamic());
    }

    #[test]
    fn display_matches_canonical_names() {
        assert_eq!(TypeDescriptor::UInt256.to_string(), "uint256");
        assert_eq!(TypeDescriptor::ArrayOf(ElementKind::String).to_string(), "string[]");
    }

    #[test]
    fn array_constructor_wraps_items() {
        let value = ArgumentValue::array(["1", "2"], ArgumentValue::uint);
        assert_eq!(
            value,
            ArgumentValue::Array(vec![ArgumentValue::uint("1"), ArgumentValue::uint("2")])
        );
    }
}
