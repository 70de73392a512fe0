//! Seaport order model and fulfillment-data decoding.
//!
//! This is the typed core of the SDK: everything needed to take the
//! marketplace's fulfillment-data response apart and hand a transaction
//! builder the exact call parameters one of the Seaport fulfillment entry
//! points expects.
//!
//! The upstream API is inconsistent about integer encoding: the same field
//! may arrive as a JSON string (`"123"`), an integer (`123`), or even a
//! hex-encoded string (`"0x7b"`). [`UintString`] absorbs all of those at the
//! serde boundary and keeps the lexical form; [`parse_uint`] turns it into a
//! [`U256`] and rejects anything that is not a non-negative integer, naming
//! the offending field.
//!
//! All types here are transient, request-scoped values. Decoding and
//! validation are pure and synchronous; concurrent callers need no
//! coordination.

pub mod fulfillment;
pub mod order;

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use fulfillment::{
    AdditionalRecipient, AdvancedOrderInputData, AvailableAdvancedOrdersInputData,
    AvailableOrdersInputData, BasicOrderInputData, BasicOrderParameters, FulfillmentCall,
    FulfillmentData, FulfillmentDataResponse, FulfillmentTransaction, MatchAdvancedOrdersInputData,
    MatchOrdersInputData, OrderInputData,
};
pub use order::{
    AdvancedOrder, ConsiderationItem, CriteriaResolver, Fulfillment, FulfillmentComponent,
    OfferItem, Order, OrderParameters,
};

use crate::Result;
use crate::error::Error;
use crate::types::{Address, U256};

/// An integer-valued field in its wire form.
///
/// Deserializes from a JSON string, integer, or float, retaining the lexical
/// form verbatim; serializes back as a string (the encoding Seaport payloads
/// use for anything wider than 53 bits). Whether the retained text actually
/// is a non-negative integer is checked by [`parse_uint`] at validation time,
/// not at decode time.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct UintString(String);

impl UintString {
    #[must_use]
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the retained text as a non-negative arbitrary-precision
    /// integer. Accepts decimal and `0x`-prefixed hexadecimal forms.
    pub fn to_u256(&self) -> Option<U256> {
        U256::from_str(self.0.trim()).ok()
    }
}

impl fmt::Debug for UintString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UintString({:?})", self.0)
    }
}

impl fmt::Display for UintString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UintString {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for UintString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for UintString {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<U256> for UintString {
    fn from(value: U256) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<&str> for UintString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for UintString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UintString {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct UintStringVisitor;

        impl Visitor<'_> for UintStringVisitor {
            type Value = UintString;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                Ok(UintString(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
                Ok(UintString(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
                Ok(UintString(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
                Ok(UintString(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
                Ok(UintString(v.to_string()))
            }
        }

        deserializer.deserialize_any(UintStringVisitor)
    }
}

/// Parses `value` as a non-negative arbitrary-precision integer.
///
/// Empty, non-numeric, negative, and fractional forms all fail with
/// [`MalformedNumber`](crate::error::MalformedNumber) naming `field` in its
/// wire spelling. Zero is valid.
pub fn parse_uint(field: &str, value: &UintString) -> Result<U256> {
    if value.is_empty() {
        return Err(Error::malformed_number(field));
    }
    value
        .to_u256()
        .ok_or_else(|| Error::malformed_number(field))
}

/// Parses `value` as a 20-byte hex-encoded address (checksummed or
/// lowercase), failing with [`InvalidAddress`](crate::error::InvalidAddress)
/// naming `field`.
pub fn parse_address(field: &str, value: &str) -> Result<Address> {
    value
        .parse::<Address>()
        .ok()
        .ok_or_else(|| Error::invalid_address(field))
}

macro_rules! numeric_enum {
    (
        $(#[$outer:meta])*
        $name:ident { $($(#[$variant_meta:meta])* $variant:ident = $value:literal,)+ }
    ) => {
        $(#[$outer])*
        #[non_exhaustive]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
            /// A numeric value outside the protocol's enumeration. Retained
            /// so decoding tolerates forward-incompatible payloads; rejected
            /// at validation time.
            Unknown(u8),
        }

        impl $name {
            /// The wire value.
            #[must_use]
            pub const fn value(self) -> u8 {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(v) => v,
                }
            }

            #[must_use]
            pub const fn from_value(value: u8) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Unknown(other),
                }
            }

            /// Whether the value is a member of the protocol enumeration.
            #[must_use]
            pub const fn is_known(self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from_value(0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.value())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let raw = u64::deserialize(deserializer)?;
                let value = u8::try_from(raw).unwrap_or(u8::MAX);
                Ok(Self::from_value(value))
            }
        }
    };
}

numeric_enum! {
    /// The kind of item an offer or consideration entry describes.
    ItemType {
        /// Native currency (Ether on mainnet).
        Native = 0,
        /// ERC-20 fungible token.
        Erc20 = 1,
        /// ERC-721 non-fungible token.
        Erc721 = 2,
        /// ERC-1155 semi-fungible token.
        Erc1155 = 3,
        /// ERC-721 matched by criteria merkle root rather than a fixed id.
        Erc721WithCriteria = 4,
        /// ERC-1155 matched by criteria merkle root.
        Erc1155WithCriteria = 5,
    }
}

numeric_enum! {
    /// How an order may be executed.
    OrderType {
        /// No partial fills, anyone can execute.
        FullOpen = 0,
        /// Partial fills supported, anyone can execute.
        PartialOpen = 1,
        /// No partial fills, only the offerer or zone can execute.
        FullRestricted = 2,
        /// Partial fills supported, only the offerer or zone can execute.
        PartialRestricted = 3,
        /// Contract order, generated dynamically by a contract offerer.
        Contract = 4,
    }
}

numeric_enum! {
    /// Which side of an order a criteria resolver targets.
    Side {
        /// The offer items.
        Offer = 0,
        /// The consideration items.
        Consideration = 1,
    }
}

impl ItemType {
    /// Whether the item is matched through a criteria merkle root.
    #[must_use]
    pub const fn is_criteria(self) -> bool {
        matches!(self, Self::Erc721WithCriteria | Self::Erc1155WithCriteria)
    }
}
