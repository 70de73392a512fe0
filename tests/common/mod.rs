#![cfg(any(feature = "nft", feature = "orders"))]
#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use std::time::Duration;

use opensea_client_sdk::Config;
use serde_json::{Value, json};

pub const API_KEY: &str = "test-api-key";

pub const OFFERER: &str = "0x69493301a10A06679a6771D33E8CDd3a5fdA4dB4";
pub const NFT_CONTRACT: &str = "0xED5AF388653567Af2F388E6224dC7C4b3241C544";
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
pub const ZERO_HASH: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";
pub const CONDUIT_KEY: &str =
    "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000";
pub const ORDER_HASH: &str =
    "0x997efc854cea48b4c998b2dbd54ecbac27fa0cb7d0a34c47f5b8d56a2b8a0649";

/// Config with an API key and a short retry pause so rate-limit tests stay
/// fast.
#[must_use]
pub fn config() -> Config {
    Config::builder()
        .api_key(API_KEY)
        .retry_interval(Duration::from_millis(10))
        .build()
}

/// A valid Seaport order parameter block in wire form, one ERC-721 offer
/// against two ETH considerations.
#[must_use]
pub fn order_parameters_json() -> Value {
    json!({
        "offerer": OFFERER,
        "offer": [{
            "itemType": 2,
            "token": NFT_CONTRACT,
            "identifierOrCriteria": "40",
            "startAmount": "1",
            "endAmount": "1"
        }],
        "consideration": [
            {
                "itemType": 0,
                "token": ZERO_ADDRESS,
                "identifierOrCriteria": "0",
                "startAmount": "975000000000000000",
                "endAmount": "975000000000000000",
                "recipient": OFFERER
            },
            {
                "itemType": 0,
                "token": ZERO_ADDRESS,
                "identifierOrCriteria": "0",
                "startAmount": "25000000000000000",
                "endAmount": "25000000000000000",
                "recipient": "0x0000a26b00c1F0DF003000390027140000fAa719"
            }
        ],
        "startTime": "1715087302",
        "endTime": "1717679302",
        "orderType": 0,
        "zone": ZERO_ADDRESS,
        "zoneHash": ZERO_HASH,
        "salt": "0x360c6ebe000000000000000000000000000000000000000005701a6f0f296f2d",
        "conduitKey": CONDUIT_KEY,
        "totalOriginalConsiderationItems": 2,
        "counter": 0
    })
}
