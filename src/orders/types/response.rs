//! Response types for the OpenSea order book endpoints.

use bon::Builder;
use serde::Deserialize;

use super::{Criteria, ProtocolData};
use crate::seaport::UintString;
use crate::types::{Address, NaiveDateTime};

/// A page of orders from the listings or offers order book endpoints.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<OrderSummary>,
    /// Cursor for the next page, absent on the last one.
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// One order as the order book lists it.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct OrderSummary {
    /// No UTC offset on the wire; UTC by convention.
    pub created_date: Option<NaiveDateTime>,
    pub closing_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub listing_time: i64,
    #[serde(default)]
    pub expiration_time: i64,
    pub order_hash: Option<String>,
    /// The full signed Seaport order. Absent for private listings.
    pub protocol_data: Option<ProtocolData>,
    pub protocol_address: Option<Address>,
    /// Price in base units of the payment token.
    #[serde(default)]
    pub current_price: UintString,
    pub maker: Option<AccountStub>,
    pub taker: Option<AccountStub>,
    #[serde(default)]
    pub maker_fees: Vec<Fee>,
    #[serde(default)]
    pub taker_fees: Vec<Fee>,
    /// `ask` or `bid`.
    #[serde(default)]
    pub side: String,
    #[serde(default, rename = "order_type")]
    pub order_type: String,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub finalized: bool,
    #[serde(default)]
    pub marked_invalid: bool,
    #[serde(default)]
    pub remaining_quantity: i64,
    pub relay_id: Option<String>,
    #[serde(default)]
    pub criteria_proof: Option<Vec<String>>,
}

/// Embedded account info on an order's maker or taker.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct AccountStub {
    pub user: Option<i64>,
    #[serde(default)]
    pub profile_img_url: String,
    pub address: Address,
    pub config: Option<String>,
}

/// A marketplace or creator fee attached to an order.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct Fee {
    pub account: AccountStub,
    /// Fee in basis points, as the API sends it.
    pub basis_points: UintString,
}

/// The price block on a listing.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct Price {
    // The live API misspells this field on some routes.
    #[serde(alias = "currenty")]
    pub current: CurrentPrice,
}

#[derive(Debug, Clone, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct CurrentPrice {
    /// Payment token symbol, e.g. `ETH`.
    pub currency: String,
    pub decimals: u8,
    /// Amount in base units of the payment token.
    pub value: UintString,
}

/// A single order fetched by hash.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct OrderDetails {
    pub order_hash: String,
    pub chain: String,
    /// `basic` or `criteria`.
    #[serde(rename = "type")]
    pub order_type: String,
    pub price: Option<Price>,
    pub protocol_data: ProtocolData,
    pub protocol_address: Address,
    pub criteria: Option<Criteria>,
}

/// Returned when posting a signed listing or item offer.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct CreateOrderResponse {
    pub order: OrderSummary,
}

/// One offer as the offers endpoints list it.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct OfferSummary {
    pub order_hash: String,
    pub chain: String,
    /// Set for criteria offers.
    pub criteria: Option<Criteria>,
    pub protocol_data: ProtocolData,
    pub protocol_address: Address,
    pub price: Option<Price>,
}

/// A page of offers on a collection or trait.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct OffersResponse {
    #[serde(default)]
    pub offers: Vec<OfferSummary>,
    pub next: Option<String>,
}

/// Returned when posting a criteria offer.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct CreateCriteriaOfferResponse {
    pub order_hash: String,
    pub chain: String,
    pub criteria: Option<Criteria>,
    pub protocol_data: ProtocolData,
    pub protocol_address: Address,
}

/// The server-built half of a criteria offer.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct BuildOfferResponse {
    #[serde(rename = "partialParameters")]
    pub partial_parameters: PartialParameters,
    /// Token ids the offer can be fulfilled with, in encoded form.
    #[serde(default)]
    pub encoded_token_ids: String,
}

/// The consideration and zone fields the caller must merge into the order
/// before signing.
#[derive(Debug, Clone, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct PartialParameters {
    pub consideration: Vec<crate::seaport::ConsiderationItem>,
    pub zone: String,
    pub zone_hash: String,
}

/// A page of listings on a collection.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct ListingsResponse {
    #[serde(default)]
    pub listings: Vec<CollectionListing>,
    pub next: Option<String>,
}

/// One listing as the collection listings endpoint carries it.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct CollectionListing {
    pub order_hash: String,
    pub chain: String,
    /// `basic` or `criteria`.
    #[serde(rename = "type")]
    pub order_type: String,
    pub price: Option<Price>,
    pub protocol_data: ProtocolData,
    pub protocol_address: Address,
}
