//! Contract-call ABI encoding for EVM chains.
//!
//! This crate provides:
//! - A function catalog parsed from a JSON ABI, with 4-byte selectors
//! - Scalar encoding for `uint*`, `address` and `bool`
//! - Dynamic encoding for `bytes` and `string`
//! - Unbounded array encoding, including the two-level offset table for
//!   `bytes[]` and `string[]`
//! - Head/tail assembly of full call data
//! - Positional and tagged JSON argument shapes
//!
//! Decoding is out of scope.

pub mod args;
pub mod array;
pub mod catalog;
pub mod dynamic;
pub mod encoder;
pub mod error;
pub mod scalar;
pub mod types;

pub use args::{CallArguments, TaggedArgument};
pub use catalog::{FunctionCatalog, FunctionSignature};
pub use encoder::{encode_arguments, encode_function_call};
pub use error::AbiError;
pub use types::{ArgumentValue, ElementKind, TypeDescriptor};
