#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use super::{Criteria, OrderBy, OrderDirection, OrderIdentity, ProtocolData};
use crate::Result;
use crate::error::Error;
use crate::seaport::OrderParameters;
use crate::types::Address;

const MAX_ORDER_PAGE: u32 = 50;
const MAX_COLLECTION_ORDER_PAGE: u32 = 100;

fn check_limit(limit: Option<u32>, max: u32) -> Result<()> {
    match limit {
        Some(limit) if limit < 1 || limit > max => Err(Error::validation(format!(
            "limit must be between 1 and {max}"
        ))),
        _ => Ok(()),
    }
}

/// Filter set of the listings and offers order book endpoints.
///
/// The contract-address and token-ids filters are mutually required: the API
/// rejects one without the other, so validation does too.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct OrdersRequest {
    pub asset_contract_address: Option<Address>,
    /// Only orders that are bundles of NFTs.
    pub bundled: Option<bool>,
    /// Pagination cursor from a previous response.
    pub cursor: Option<String>,
    /// Page size, between 1 and 50. The API default is 20.
    pub limit: Option<u32>,
    /// Unix timestamp; only orders listed after this moment.
    pub listed_after: Option<i64>,
    /// Unix timestamp; only orders listed before this moment.
    pub listed_before: Option<i64>,
    pub maker: Option<Address>,
    pub order_by: Option<OrderBy>,
    pub order_direction: Option<OrderDirection>,
    /// Restrict results to orders priced in one currency.
    pub payment_token_address: Option<Address>,
    pub taker: Option<Address>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default, into)]
    pub token_ids: Vec<String>,
}

impl OrdersRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.asset_contract_address.is_some() && self.token_ids.is_empty() {
            return Err(Error::validation(
                "token_ids is required when asset_contract_address is set",
            ));
        }
        if !self.token_ids.is_empty() && self.asset_contract_address.is_none() {
            return Err(Error::validation(
                "asset_contract_address is required when token_ids is set",
            ));
        }
        check_limit(self.limit, MAX_ORDER_PAGE)?;
        if self.order_by == Some(OrderBy::EthPrice)
            && (self.asset_contract_address.is_none() || self.token_ids.is_empty())
        {
            return Err(Error::validation(
                "asset_contract_address and token_ids are required when ordering by eth_price",
            ));
        }
        Ok(())
    }
}

/// A signed order ready to post, for both listings and item offers.
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct CreateOrderRequest {
    pub parameters: OrderParameters,
    pub signature: String,
    /// The Seaport contract the order was signed against.
    pub protocol_address: Address,
}

impl CreateOrderRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.parameters.offer.is_empty() {
            return Err(Error::validation("offer must not be empty"));
        }
        self.parameters.validate()?;
        if self.signature.is_empty() {
            return Err(Error::validation("signature must not be empty"));
        }
        Ok(())
    }
}

/// Asks the API to assemble the partial Seaport parameters for a criteria
/// offer, including the encoded token ids.
#[derive(Debug, Clone, Serialize, Builder)]
#[non_exhaustive]
pub struct BuildOfferRequest {
    pub offerer: Address,
    /// Number of tokens the offer covers. Must be at least 1.
    pub quantity: u64,
    pub criteria: Criteria,
    pub protocol_address: Address,
    /// Opt in to OpenSea's offer protection checks.
    #[builder(default = true)]
    pub offer_protection_enabled: bool,
}

impl BuildOfferRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.quantity < 1 {
            return Err(Error::validation("quantity must be at least 1"));
        }
        if self.criteria.collection.is_none() {
            return Err(Error::validation("criteria collection must be set"));
        }
        Ok(())
    }
}

/// Posts the signed criteria offer built via
/// [`build_offer`](crate::orders::Client::build_offer).
#[derive(Debug, Clone, Serialize, Builder)]
#[non_exhaustive]
pub struct CreateCriteriaOfferRequest {
    pub protocol_data: ProtocolData,
    pub criteria: Criteria,
    pub protocol_address: Address,
}

impl CreateCriteriaOfferRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.criteria.collection.is_none() {
            return Err(Error::validation("criteria collection must be set"));
        }
        if self.protocol_data.signature.is_empty() {
            return Err(Error::validation("signature must not be empty"));
        }
        Ok(())
    }
}

/// Lists every offer on a collection, paged.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct AllCollectionOffersRequest {
    #[serde(skip_serializing)]
    pub collection_slug: String,
    /// Page size, between 1 and 100.
    pub limit: Option<u32>,
    pub next: Option<String>,
}

impl AllCollectionOffersRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.collection_slug.is_empty() {
            return Err(Error::validation("collection_slug must not be empty"));
        }
        check_limit(self.limit, MAX_COLLECTION_ORDER_PAGE)
    }
}

/// Queries the best offers for one trait of a collection.
///
/// Exactly one of `value`, `float_value`, or `int_value` identifies the
/// trait value.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct TraitOffersRequest {
    #[serde(skip_serializing)]
    pub collection_slug: String,
    /// Trait category, e.g. `Background`.
    #[serde(rename = "type")]
    pub trait_type: String,
    pub value: Option<String>,
    pub float_value: Option<f64>,
    pub int_value: Option<i64>,
}

impl TraitOffersRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.collection_slug.is_empty() {
            return Err(Error::validation("collection_slug must not be empty"));
        }
        if self.trait_type.is_empty() {
            return Err(Error::validation("type must not be empty"));
        }
        let values =
            usize::from(self.value.is_some()) + usize::from(self.float_value.is_some())
                + usize::from(self.int_value.is_some());
        if values != 1 {
            return Err(Error::validation(
                "exactly one of value, float_value, int_value must be set",
            ));
        }
        Ok(())
    }
}

/// Lists every active listing on a collection, paged.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct AllListingsByCollectionRequest {
    #[serde(skip_serializing)]
    pub collection_slug: String,
    /// Page size, between 1 and 100.
    pub limit: Option<u32>,
    pub next: Option<String>,
}

impl AllListingsByCollectionRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.collection_slug.is_empty() {
            return Err(Error::validation("collection_slug must not be empty"));
        }
        check_limit(self.limit, MAX_COLLECTION_ORDER_PAGE)
    }
}

/// The account fulfilling an order.
#[derive(Debug, Clone, Serialize, Builder)]
#[non_exhaustive]
pub struct Fulfiller {
    pub address: Address,
}

/// Asks for the transaction that buys a listing.
#[derive(Debug, Clone, Serialize, Builder)]
#[non_exhaustive]
pub struct FulfillListingRequest {
    pub listing: OrderIdentity,
    pub fulfiller: Fulfiller,
}

impl FulfillListingRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        self.listing.validate()
    }
}

/// The asset supplied when accepting a criteria offer.
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct FulfillConsideration {
    pub asset_contract_address: Address,
    pub token_id: String,
}

/// Asks for the transaction that accepts an offer.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[non_exhaustive]
pub struct FulfillOfferRequest {
    pub offer: OrderIdentity,
    pub fulfiller: Fulfiller,
    /// Required for criteria offers: which token is being supplied.
    pub consideration: Option<FulfillConsideration>,
}

impl FulfillOfferRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        self.offer.validate()?;
        if let Some(consideration) = &self.consideration {
            if consideration.token_id.is_empty() {
                return Err(Error::validation("token_id must not be empty"));
            }
        }
        Ok(())
    }
}
