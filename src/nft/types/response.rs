//! Response types for the OpenSea NFT API endpoints.

use std::collections::HashMap;

use bon::Builder;
use serde::Deserialize;
use serde_json::Value;

use super::{EventType, SafelistStatus};
use crate::types::{Address, DateTime, Decimal, Utc};

/// An OpenSea account profile.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct Account {
    /// The wallet behind the account.
    pub address: Address,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub banner_image_url: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub social_media_accounts: Vec<SocialMediaAccount>,
    #[serde(default)]
    pub bio: String,
    /// When the account was first seen by the marketplace.
    pub joined_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct SocialMediaAccount {
    /// Platform name, e.g. `twitter`.
    pub platform: String,
    pub username: String,
}

/// A token contract known to the marketplace.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct Contract {
    pub address: Address,
    /// Chain slug the contract lives on.
    pub chain: String,
    /// Collection slug, if the contract belongs to one.
    #[serde(default)]
    pub collection: String,
    /// Token standard, e.g. `erc721`.
    #[serde(default)]
    pub contract_standard: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub supply: i64,
}

/// A single NFT.
#[derive(Debug, Clone, Default, Deserialize, Builder)]
#[non_exhaustive]
pub struct Nft {
    /// Token id within the contract.
    pub identifier: String,
    /// Collection slug.
    #[serde(default)]
    pub collection: String,
    /// Contract address, as a string so unindexed chains still parse.
    #[serde(default)]
    pub contract: String,
    /// Token standard, e.g. `erc721` or `erc1155`.
    #[serde(default)]
    pub token_standard: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub metadata_url: Option<String>,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_disabled: bool,
    #[serde(default)]
    pub is_nsfw: bool,
    pub animation_url: Option<String>,
    #[serde(default)]
    pub is_suspicious: bool,
    /// Creator wallet, only on the single-NFT endpoint.
    pub creator: Option<String>,
    /// Null when the NFT has more than 50 traits.
    pub traits: Option<Vec<NftTrait>>,
    /// Null when the NFT has more than 50 owners.
    pub owners: Option<Vec<Owner>>,
    pub rarity: Option<Rarity>,
}

/// A metadata attribute of an NFT.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct NftTrait {
    pub trait_type: String,
    pub display_type: Option<String>,
    pub max_value: Option<String>,
    #[serde(default)]
    pub trait_count: i64,
    pub order: Option<i64>,
    /// String, number, or date depending on `display_type`.
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct Owner {
    pub address: Address,
    pub quantity: i64,
}

/// OpenRarity data for an NFT.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct Rarity {
    pub strategy_id: Option<String>,
    pub rank: i64,
    pub score: Option<Decimal>,
    pub max_rank: Option<i64>,
    #[serde(default)]
    pub tokens_scored: i64,
}

/// One page of NFTs.
#[derive(Debug, Clone, Default, Deserialize, Builder)]
#[non_exhaustive]
pub struct NftsResponse {
    pub nfts: Vec<Nft>,
    /// Cursor for the next page; absent or empty on the last page.
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct NftResponse {
    pub nft: Nft,
}

/// A collection as returned by the list endpoint.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct Collection {
    /// Collection slug.
    pub collection: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub banner_image_url: Option<String>,
    /// Owner account address or username.
    #[serde(default)]
    pub owner: String,
    pub safelist_status: Option<SafelistStatus>,
    pub category: Option<String>,
    #[serde(default)]
    pub is_disabled: bool,
    #[serde(default)]
    pub is_nsfw: bool,
    #[serde(default)]
    pub trait_offers_enabled: bool,
    pub opensea_url: Option<String>,
    pub project_url: Option<String>,
    pub wiki_url: Option<String>,
    pub discord_url: Option<String>,
    pub telegram_url: Option<String>,
    pub twitter_username: Option<String>,
    pub instagram_username: Option<String>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
}

/// The single-collection endpoint adds editors and fee schedule.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct SingleCollection {
    #[serde(flatten)]
    pub collection: Collection,
    #[serde(default)]
    pub editors: Vec<Address>,
    #[serde(default)]
    pub fees: Vec<CollectionFee>,
}

/// A marketplace or creator fee on a collection.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct CollectionFee {
    /// Fee as a percentage, e.g. `2.5`.
    pub fee: Decimal,
    pub recipient: Address,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Builder)]
#[non_exhaustive]
pub struct CollectionsResponse {
    pub collections: Vec<Collection>,
    pub next: Option<String>,
}

/// Lifetime and per-interval trading stats for a collection.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct CollectionStats {
    pub total: CollectionStatsTotal,
    #[serde(default)]
    pub intervals: Vec<CollectionStatsInterval>,
}

#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct CollectionStatsTotal {
    pub volume: Decimal,
    pub sales: i64,
    pub average_price: Decimal,
    pub num_owners: i64,
    pub market_cap: Decimal,
    pub floor_price: Decimal,
    #[serde(default)]
    pub floor_price_symbol: String,
}

#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct CollectionStatsInterval {
    /// `one_day`, `seven_day`, or `thirty_day`.
    pub interval: String,
    pub volume: Decimal,
    pub volume_diff: Decimal,
    pub volume_change: Decimal,
    pub sales: i64,
    pub sales_diff: i64,
    pub average_price: Decimal,
}

/// Trait categories and per-value counts for a collection.
#[derive(Debug, Clone, Default, Deserialize, Builder)]
#[non_exhaustive]
pub struct CollectionTraits {
    /// Trait category to value kind, e.g. `"Background": "string"`.
    #[serde(default)]
    pub categories: HashMap<String, String>,
    /// Trait category to value-count map.
    #[serde(default)]
    pub counts: HashMap<String, Value>,
}

/// One page of the activity feed.
#[derive(Debug, Clone, Default, Deserialize, Builder)]
#[non_exhaustive]
pub struct AssetEventsResponse {
    #[serde(default, alias = "asset_event")]
    pub asset_events: Vec<AssetEvent>,
    pub next: Option<String>,
}

/// A single marketplace event. Which fields are populated depends on
/// `event_type`.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct AssetEvent {
    pub event_type: EventType,
    pub order_hash: Option<String>,
    pub order_type: Option<Value>,
    pub chain: Option<String>,
    #[serde(default)]
    pub transaction: Option<String>,
    pub protocol_address: Option<String>,
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    pub start_date: Option<i64>,
    pub closing_date: Option<i64>,
    pub expiration_date: Option<i64>,
    pub asset: Option<Nft>,
    pub nft: Option<Nft>,
    pub quantity: Option<i64>,
    pub maker: Option<String>,
    pub taker: Option<String>,
    pub payment: Option<Payment>,
    /// Criteria object for criteria offers, kept untyped here.
    pub criteria: Option<Value>,
}

/// Payment details on a sale or offer event.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct Payment {
    /// Raw token amount, before decimal scaling. String- or number-encoded
    /// upstream.
    #[serde(default)]
    pub quantity: crate::seaport::UintString,
    #[serde(default)]
    pub token_address: String,
    pub decimals: Option<i64>,
    #[serde(default)]
    pub symbol: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nft_tolerates_sparse_payloads() {
        let nft: Nft = serde_json::from_value(json!({
            "identifier": "42",
            "collection": "azuki",
            "contract": "0xed5af388653567af2f388e6224dc7c4b3241c544",
            "token_standard": "erc721",
            "name": null,
            "is_disabled": false,
            "is_nsfw": false
        }))
        .expect("sparse NFT deserializes");

        assert_eq!(nft.identifier, "42");
        assert!(nft.name.is_none());
        assert!(nft.traits.is_none());
    }

    #[test]
    fn single_collection_flattens_base_fields() {
        let collection: SingleCollection = serde_json::from_value(json!({
            "collection": "pudgy-penguins",
            "name": "Pudgy Penguins",
            "safelist_status": "verified",
            "fees": [
                {
                    "fee": 2.5,
                    "recipient": "0x0000a26b00c1F0DF003000390027140000fAa719",
                    "required": true
                }
            ],
            "editors": []
        }))
        .expect("deserializes");

        assert_eq!(collection.collection.collection, "pudgy-penguins");
        assert_eq!(
            collection.collection.safelist_status,
            Some(SafelistStatus::Verified)
        );
        assert_eq!(collection.fees.len(), 1);
    }

    #[test]
    fn asset_events_accept_both_wire_spellings() {
        let singular: AssetEventsResponse = serde_json::from_value(json!({
            "asset_event": [{"event_type": "sale"}],
            "next": ""
        }))
        .expect("legacy key");
        let plural: AssetEventsResponse = serde_json::from_value(json!({
            "asset_events": [{"event_type": "listing"}],
            "next": null
        }))
        .expect("current key");

        assert_eq!(singular.asset_events.len(), 1);
        assert_eq!(plural.asset_events[0].event_type, EventType::Listing);
    }
}
