//! Contract proxy over the ABI codec.
//!
//! This crate provides:
//! - A `Contract` built from a JSON interface and an address
//! - EIP-55 address checksums
//! - Serde-loadable proxy configuration
//! - `CallRequest` objects carrying encoded call data for an external sender

pub mod address;
pub mod call;
pub mod config;
pub mod contract;
pub mod error;

pub use call::CallRequest;
pub use config::ContractConfig;
pub use contract::Contract;
pub use error::ContractError;
