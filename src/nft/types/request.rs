#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use super::EventType;
use crate::Result;
use crate::chain::Chain;
use crate::error::Error;
use crate::types::Address;

const MAX_NFT_PAGE: u32 = 200;
const MAX_COLLECTION_PAGE: u32 = 100;

fn check_limit(limit: Option<u32>, max: u32) -> Result<()> {
    match limit {
        Some(limit) if limit < 1 || limit > max => Err(Error::validation(format!(
            "limit must be between 1 and {max}"
        ))),
        _ => Ok(()),
    }
}

/// Lists NFTs owned by `address` on `chain`, optionally scoped to one
/// collection.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct NftsByAccountRequest {
    #[serde(skip_serializing)]
    pub chain: Chain,
    #[serde(skip_serializing)]
    pub address: Address,
    pub collection: Option<String>,
    /// Page size, between 1 and 200. The API default is 50.
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response.
    pub next: Option<String>,
}

impl NftsByAccountRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        check_limit(self.limit, MAX_NFT_PAGE)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct NftsByContractRequest {
    #[serde(skip_serializing)]
    pub chain: Chain,
    #[serde(skip_serializing)]
    pub address: Address,
    /// Page size, between 1 and 200. The API default is 50.
    pub limit: Option<u32>,
    pub next: Option<String>,
}

impl NftsByContractRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        check_limit(self.limit, MAX_NFT_PAGE)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct NftsByCollectionRequest {
    #[serde(skip_serializing)]
    pub collection_slug: String,
    /// Page size, between 1 and 200. The API default is 50.
    pub limit: Option<u32>,
    pub next: Option<String>,
}

impl NftsByCollectionRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.collection_slug.is_empty() {
            return Err(Error::validation("collection_slug must not be empty"));
        }
        check_limit(self.limit, MAX_NFT_PAGE)
    }
}

/// Lists collections, optionally filtered to one chain.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct CollectionsRequest {
    pub chain_identifier: Option<Chain>,
    pub include_hidden: Option<bool>,
    /// Page size, between 1 and 100. The API default is 50.
    pub limit: Option<u32>,
    pub next: Option<String>,
}

impl CollectionsRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        check_limit(self.limit, MAX_COLLECTION_PAGE)
    }
}

/// Shared filter set of the asset-event endpoints.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct EventFilter {
    /// Unix timestamp; only events after this moment.
    pub after: Option<i64>,
    /// Unix timestamp; only events before this moment.
    pub before: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub event_type: Vec<EventType>,
    pub next: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[non_exhaustive]
pub struct EventsByAccountRequest {
    #[serde(skip_serializing)]
    pub address: Address,
    #[serde(flatten)]
    #[builder(default)]
    pub filter: EventFilter,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct EventsByNftRequest {
    #[serde(skip_serializing)]
    pub chain: Chain,
    #[serde(skip_serializing)]
    pub address: Address,
    #[serde(skip_serializing)]
    pub identifier: String,
    #[serde(flatten)]
    #[builder(default)]
    pub filter: EventFilter,
}

impl EventsByNftRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.identifier.is_empty() {
            return Err(Error::validation("identifier must not be empty"));
        }
        Ok(())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct EventsByCollectionRequest {
    #[serde(skip_serializing)]
    pub collection_slug: String,
    #[serde(flatten)]
    #[builder(default)]
    pub filter: EventFilter,
}

impl EventsByCollectionRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.collection_slug.is_empty() {
            return Err(Error::validation("collection_slug must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToQueryParams as _;
    use crate::error::Kind;
    use crate::types::address;

    #[test]
    fn limit_bounds_enforced() {
        let request = NftsByCollectionRequest::builder()
            .collection_slug("pudgy-penguins")
            .limit(201)
            .build();

        let err = request.validate().expect_err("over the cap");

        assert_eq!(err.kind(), Kind::Validation);
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn collections_limit_is_tighter() {
        let request = CollectionsRequest::builder().limit(150).build();

        assert!(request.validate().is_err());
        assert!(CollectionsRequest::builder().limit(100).build().validate().is_ok());
    }

    #[test]
    fn path_fields_stay_out_of_the_query() {
        let request = NftsByAccountRequest::builder()
            .chain(Chain::Ethereum)
            .address(address!("0x69493301a10A06679a6771D33E8CDd3a5fdA4dB4"))
            .collection("azuki")
            .limit(10)
            .build();

        assert_eq!(request.query_params(None), "?collection=azuki&limit=10");
    }

    #[test]
    fn event_filter_repeats_event_type() {
        let request = EventsByCollectionRequest::builder()
            .collection_slug("azuki")
            .filter(
                EventFilter::builder()
                    .event_type(vec![EventType::Sale, EventType::Transfer])
                    .after(1_700_000_000)
                    .build(),
            )
            .build();

        assert_eq!(
            request.query_params(None),
            "?after=1700000000&event_type=sale&event_type=transfer"
        );
    }
}
