//! OpenSea Orders API client and types.
//!
//! **Feature flag:** `orders` (required to use this module)
//!
//! This module provides a client for the marketplace's Seaport order book:
//! retrieving listings and offers, posting signed orders, building criteria
//! offers, and fetching the fulfillment data whose decoding lives in
//! [`seaport`](crate::seaport).
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `orders/{chain}/seaport/listings` | List or create listings |
//! | `orders/{chain}/seaport/offers` | List or create item offers |
//! | `orders/chain/{chain}/protocol/{protocol_address}/{order_hash}` | Get a single order |
//! | `offers/build` | Build the partial parameters for a criteria offer |
//! | `offers` | Post a signed criteria offer |
//! | `offers/collection/{slug}` | Best collection offers |
//! | `offers/collection/{slug}/all` | All collection offers, paged |
//! | `offers/collection/{slug}/traits` | Best trait offers |
//! | `listings/collection/{slug}/all` | All listings, paged |
//! | `listings/fulfillment_data` | Fulfillment data to buy a listing |
//! | `offers/fulfillment_data` | Fulfillment data to accept an offer |
//!
//! # Example
//!
//! ```no_run
//! use opensea_client_sdk::Config;
//! use opensea_client_sdk::chain::Chain;
//! use opensea_client_sdk::orders::{Client, types::request::OrdersRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::testnets(Config::default())?;
//!
//! let request = OrdersRequest::builder().limit(10).build();
//! let page = client.listings(Chain::Sepolia, &request).await?;
//! for order in page.orders {
//!     println!(
//!         "{}: {}",
//!         order.order_hash.unwrap_or_default(),
//!         order.current_price,
//!     );
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
