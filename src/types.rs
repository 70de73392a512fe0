//! Re-exported types from external crates for convenience.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Ethereum address and hash types, with the [`address!`] and [`b256!`] macros
/// for compile-time literals. [`ChainId`] is a type alias for `u64`
/// representing EVM chain IDs. [`U256`] holds token identifiers, amounts and
/// wei values.
pub use alloy::primitives::{Address, B256, ChainId, U256, address, b256};
/// Date and time types for timestamps in API responses. Order book
/// timestamps arrive without a UTC offset and deserialize as
/// [`NaiveDateTime`]; they are UTC by convention.
pub use chrono::{DateTime, NaiveDateTime, Utc};
/// Arbitrary precision decimal type for marketplace statistics (volumes,
/// floor prices, average sale prices).
pub use rust_decimal::Decimal;
