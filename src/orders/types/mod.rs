use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub mod request;
pub mod response;

use crate::chain::Chain;
use crate::types::Address;

/// Sort key for the order book list endpoints.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum OrderBy {
    /// Order by creation date (default).
    #[default]
    CreatedDate,
    /// Order by listing price in ETH. Requires a contract-address and
    /// token-ids filter.
    EthPrice,
}

/// Sort direction for the order book list endpoints.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum OrderDirection {
    Asc,
    /// Descending (default).
    #[default]
    Desc,
}

/// Identifies one order on one chain, as the fulfillment-data endpoints
/// expect it.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct OrderIdentity {
    /// The order hash.
    pub hash: String,
    pub chain: Chain,
    /// The Seaport contract the order was created against.
    pub protocol_address: Address,
}

impl OrderIdentity {
    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.hash.is_empty() {
            return Err(crate::error::Error::validation("hash must not be empty"));
        }
        Ok(())
    }
}

/// A signed Seaport order as the order book carries it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct ProtocolData {
    pub parameters: crate::seaport::OrderParameters,
    #[serde(default)]
    pub signature: String,
}

/// What a criteria offer is for: a whole collection, optionally narrowed to
/// one trait, with the fulfillable token ids in encoded form.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Criteria {
    pub collection: Option<CollectionSlug>,
    /// The NFT contract the offer targets.
    pub contract: Option<ContractAddress>,
    #[serde(rename = "trait")]
    pub trait_criteria: Option<CriteriaTrait>,
    pub encoded_token_ids: Option<String>,
}

impl Criteria {
    /// A criteria covering every token in `slug`.
    #[must_use]
    pub fn collection<S: Into<String>>(slug: S) -> Self {
        Self {
            collection: Some(CollectionSlug { slug: slug.into() }),
            contract: None,
            trait_criteria: None,
            encoded_token_ids: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct CollectionSlug {
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ContractAddress {
    pub address: Address,
}

/// One trait a criteria offer is narrowed to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct CriteriaTrait {
    /// Trait category, e.g. `Background`.
    #[serde(rename = "type")]
    pub trait_type: String,
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_by_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderBy::EthPrice).expect("serialize"),
            "\"eth_price\""
        );
        assert_eq!(OrderDirection::Desc.to_string(), "desc");
    }
}
