//! OpenSea NFT API client and types.
//!
//! **Feature flag:** `nft` (required to use this module)
//!
//! This module provides a client for the marketplace's read-side NFT
//! endpoints: accounts, contracts, individual NFTs, collections, collection
//! stats and traits, and the asset-event feed. Order books and fulfillment
//! live in the [`orders`](crate::orders) module.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `accounts/{address}` | Get an OpenSea account profile |
//! | `chain/{chain}/account/{address}/nfts` | List NFTs owned by an account |
//! | `chain/{chain}/contract/{address}` | Get a smart contract |
//! | `chain/{chain}/contract/{address}/nfts` | List NFTs under a contract |
//! | `chain/{chain}/contract/{address}/nfts/{identifier}` | Get a single NFT |
//! | `chain/{chain}/contract/{address}/nfts/{identifier}/refresh` | Queue a metadata refresh |
//! | `collection/{slug}/nfts` | List NFTs in a collection |
//! | `collections` | List collections |
//! | `collections/{slug}` | Get a single collection |
//! | `collections/{slug}/stats` | Get collection stats |
//! | `traits/{slug}` | Get collection trait counts |
//! | `events/accounts/{address}` | Asset events by account |
//! | `events/chain/{chain}/contract/{address}/nfts/{identifier}` | Asset events by NFT |
//! | `events/collection/{slug}` | Asset events by collection |
//!
//! # Example
//!
//! ```no_run
//! use opensea_client_sdk::Config;
//! use opensea_client_sdk::chain::Chain;
//! use opensea_client_sdk::nft::{Client, types::request::NftsByCollectionRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(
//!     opensea_client_sdk::MAINNET_API_HOST,
//!     Config::builder().api_key("my-api-key").build(),
//! )?;
//!
//! let request = NftsByCollectionRequest::builder()
//!     .collection_slug("pudgy-penguins")
//!     .limit(50)
//!     .build();
//!
//! let page = client.nfts_by_collection(&request).await?;
//! for nft in page.nfts {
//!     println!("{}: {:?}", nft.identifier, nft.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! Mainnet chains are served from `https://api.opensea.io` (API key
//! required); testnet chains from `https://testnets-api.opensea.io` (no key).

pub mod client;
pub mod types;

pub use client::Client;
