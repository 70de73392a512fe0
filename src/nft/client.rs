//! Client for the OpenSea NFT API.
//!
//! # Example
//!
//! ```no_run
//! use opensea_client_sdk::Config;
//! use opensea_client_sdk::nft::{Client, types::request::CollectionsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::testnets(Config::default())?;
//!
//! let request = CollectionsRequest::builder().limit(20).build();
//! let page = client.collections(&request).await?;
//! for collection in page.collections {
//!     println!("{}: {}", collection.collection, collection.name);
//! }
//! # Ok(())
//! # }
//! ```

use async_stream::try_stream;
use futures::Stream;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret as _;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::types::request::{
    CollectionsRequest, EventsByAccountRequest, EventsByCollectionRequest, EventsByNftRequest,
    NftsByAccountRequest, NftsByCollectionRequest, NftsByContractRequest,
};
use super::types::response::{
    Account, AssetEventsResponse, Collection, CollectionStats, CollectionTraits,
    CollectionsResponse, Contract, NftResponse, NftsResponse, SingleCollection,
};
use crate::chain::Chain;
use crate::types::Address;
use crate::{Config, MAINNET_API_HOST, Result, TESTNETS_API_HOST, ToQueryParams as _};

/// HTTP client for the OpenSea NFT API.
///
/// Cheaply cloneable; no shared mutable state.
///
/// # Example
///
/// ```no_run
/// use opensea_client_sdk::{Config, nft::Client};
///
/// // Mainnet, with an API key
/// let client = Client::new(
///     opensea_client_sdk::MAINNET_API_HOST,
///     Config::builder().api_key("my-api-key").build(),
/// ).unwrap();
///
/// // Testnets need no key
/// let client = Client::testnets(Config::default()).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
    config: Config,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(MAINNET_API_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a client against a custom host URL.
    ///
    /// The API key from `config`, if any, is installed as a sensitive
    /// `x-api-key` default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or API key is invalid, or the HTTP
    /// client cannot be created.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(api_key.expose_secret())?;
            value.set_sensitive(true);
            headers.insert("x-api-key", value);
        }
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host: Url::parse(host)?,
            client,
            config,
        })
    }

    /// Creates a client against the public testnets host, which requires no
    /// API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn testnets(config: Config) -> Result<Client> {
        Client::new(TESTNETS_API_HOST, config)
    }

    /// Creates a client against the public host serving `chain`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn for_chain(chain: Chain, config: Config) -> Result<Client> {
        let host = if chain.is_testnet() {
            TESTNETS_API_HOST
        } else {
            MAINNET_API_HOST
        };
        Client::new(host, config)
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        path: &str,
        req: &Req,
    ) -> Result<Res> {
        let query = req.query_params(None);
        let request = self
            .client
            .request(Method::GET, format!("{}api/v2/{path}{query}", self.host))
            .build()?;
        crate::request(&self.client, request, &self.config).await
    }

    /// Retrieves an OpenSea account profile by wallet address or username.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is unknown or the request fails.
    pub async fn account(&self, address_or_username: &str) -> Result<Account> {
        self.get(&format!("accounts/{address_or_username}"), &())
            .await
    }

    /// Lists NFTs owned by an account on one chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn nfts_by_account(&self, request: &NftsByAccountRequest) -> Result<NftsResponse> {
        request.validate()?;
        self.get(
            &format!(
                "chain/{}/account/{}/nfts",
                request.chain, request.address
            ),
            request,
        )
        .await
    }

    /// Retrieves a smart contract known to the marketplace.
    ///
    /// # Errors
    ///
    /// Returns an error if the contract is unknown or the request fails.
    pub async fn contract(&self, chain: Chain, address: Address) -> Result<Contract> {
        self.get(&format!("chain/{chain}/contract/{address}"), &())
            .await
    }

    /// Lists NFTs under a contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn nfts_by_contract(&self, request: &NftsByContractRequest) -> Result<NftsResponse> {
        request.validate()?;
        self.get(
            &format!(
                "chain/{}/contract/{}/nfts",
                request.chain, request.address
            ),
            request,
        )
        .await
    }

    /// Retrieves a single NFT by chain, contract, and token id.
    ///
    /// # Errors
    ///
    /// Returns an error if the NFT is unknown or the request fails.
    pub async fn nft(
        &self,
        chain: Chain,
        address: Address,
        identifier: &str,
    ) -> Result<NftResponse> {
        self.get(
            &format!("chain/{chain}/contract/{address}/nfts/{identifier}"),
            &(),
        )
        .await
    }

    /// Queues a metadata refresh for an NFT. The refresh itself happens
    /// asynchronously upstream; a success response only acknowledges the
    /// request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn refresh_nft(
        &self,
        chain: Chain,
        address: Address,
        identifier: &str,
    ) -> Result<()> {
        let request = self
            .client
            .request(
                Method::POST,
                format!(
                    "{}api/v2/chain/{chain}/contract/{address}/nfts/{identifier}/refresh",
                    self.host
                ),
            )
            .build()?;

        crate::execute_checked(&self.client, request, &self.config).await?;
        Ok(())
    }

    /// Lists NFTs in a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn nfts_by_collection(
        &self,
        request: &NftsByCollectionRequest,
    ) -> Result<NftsResponse> {
        request.validate()?;
        self.get(
            &format!("collection/{}/nfts", request.collection_slug),
            request,
        )
        .await
    }

    /// Lists collections, one page at a time. See
    /// [`collections_stream`](Self::collections_stream) to walk every page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn collections(&self, request: &CollectionsRequest) -> Result<CollectionsResponse> {
        request.validate()?;
        self.get("collections", request).await
    }

    /// Retrieves a single collection by slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is unknown or the request fails.
    pub async fn collection(&self, collection_slug: &str) -> Result<SingleCollection> {
        self.get(&format!("collections/{collection_slug}"), &())
            .await
    }

    /// Retrieves lifetime and per-interval trading stats for a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is unknown or the request fails.
    pub async fn collection_stats(&self, collection_slug: &str) -> Result<CollectionStats> {
        self.get(&format!("collections/{collection_slug}/stats"), &())
            .await
    }

    /// Retrieves trait categories and value counts for a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is unknown or the request fails.
    pub async fn traits(&self, collection_slug: &str) -> Result<CollectionTraits> {
        self.get(&format!("traits/{collection_slug}"), &()).await
    }

    /// Retrieves marketplace events involving an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn events_by_account(
        &self,
        request: &EventsByAccountRequest,
    ) -> Result<AssetEventsResponse> {
        self.get(&format!("events/accounts/{}", request.address), request)
            .await
    }

    /// Retrieves marketplace events involving a single NFT.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn events_by_nft(
        &self,
        request: &EventsByNftRequest,
    ) -> Result<AssetEventsResponse> {
        request.validate()?;
        self.get(
            &format!(
                "events/chain/{}/contract/{}/nfts/{}",
                request.chain, request.address, request.identifier
            ),
            request,
        )
        .await
    }

    /// Retrieves marketplace events involving a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn events_by_collection(
        &self,
        request: &EventsByCollectionRequest,
    ) -> Result<AssetEventsResponse> {
        request.validate()?;
        self.get(
            &format!("events/collection/{}", request.collection_slug),
            request,
        )
        .await
    }

    /// Walks every page of [`collections`](Self::collections), yielding
    /// individual collections.
    ///
    /// The stream follows the `next` cursor until the API returns an empty
    /// or absent one. Each item is a `Result`, so a failed page surfaces
    /// in-stream and ends it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures::StreamExt as _;
    /// use opensea_client_sdk::Config;
    /// use opensea_client_sdk::nft::{Client, types::request::CollectionsRequest};
    /// use tokio::pin;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::testnets(Config::default())?;
    /// let request = CollectionsRequest::builder().limit(100).build();
    ///
    /// let stream = client.collections_stream(&request);
    /// pin!(stream);
    ///
    /// while let Some(collection) = stream.next().await {
    ///     println!("{}", collection?.collection);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn collections_stream<'client>(
        &'client self,
        request: &CollectionsRequest,
    ) -> impl Stream<Item = Result<Collection>> + 'client {
        let mut request = request.clone();

        try_stream! {
            loop {
                let page = self.collections(&request).await?;
                let next = page.next;

                for collection in page.collections {
                    yield collection;
                }

                match next {
                    Some(cursor) if !cursor.is_empty() => request.next = Some(cursor),
                    _ => break,
                }
            }
        }
    }
}
