//! Client for the OpenSea Orders API.
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
//! let page = client.offers(Chain::Sepolia, &request).await?;
//! println!("{} offers", page.orders.len());
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
    AllCollectionOffersRequest, AllListingsByCollectionRequest, BuildOfferRequest,
    CreateCriteriaOfferRequest, CreateOrderRequest, FulfillListingRequest, FulfillOfferRequest,
    OrdersRequest, TraitOffersRequest,
};
use super::types::response::{
    BuildOfferResponse, CollectionListing, CreateCriteriaOfferResponse, CreateOrderResponse,
    ListingsResponse, OffersResponse, OrderDetails, OrdersResponse,
};
use crate::chain::Chain;
use crate::seaport::FulfillmentDataResponse;
use crate::types::Address;
use crate::{Config, MAINNET_API_HOST, Result, TESTNETS_API_HOST, ToQueryParams as _};

/// HTTP client for the OpenSea Orders API.
///
/// Cheaply cloneable; no shared mutable state.
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

    async fn post<Req: Serialize, Res: DeserializeOwned>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Res> {
        let request = self
            .client
            .request(Method::POST, format!("{}api/v2/{path}", self.host))
            .json(body)
            .build()?;
        crate::request(&self.client, request, &self.config).await
    }

    /// Lists active listings on `chain`, filtered by `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn listings(&self, chain: Chain, request: &OrdersRequest) -> Result<OrdersResponse> {
        request.validate()?;
        self.get(&format!("orders/{chain}/seaport/listings"), request)
            .await
    }

    /// Lists active item offers on `chain`, filtered by `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn offers(&self, chain: Chain, request: &OrdersRequest) -> Result<OrdersResponse> {
        request.validate()?;
        self.get(&format!("orders/{chain}/seaport/offers"), request)
            .await
    }

    /// Retrieves a single order by its hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is unknown or the request fails.
    pub async fn order(
        &self,
        chain: Chain,
        protocol_address: Address,
        order_hash: &str,
    ) -> Result<OrderDetails> {
        self.get(
            &format!("orders/chain/{chain}/protocol/{protocol_address}/{order_hash}"),
            &(),
        )
        .await
    }

    /// Posts a signed listing to the order book.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is invalid or the request fails.
    pub async fn create_listing(
        &self,
        chain: Chain,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse> {
        request.validate()?;
        self.post(&format!("orders/{chain}/seaport/listings"), request)
            .await
    }

    /// Posts a signed offer on a single item to the order book.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is invalid or the request fails.
    pub async fn create_item_offer(
        &self,
        chain: Chain,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse> {
        request.validate()?;
        self.post(&format!("orders/{chain}/seaport/offers"), request)
            .await
    }

    /// Asks the API to build the partial Seaport parameters for a criteria
    /// offer. The caller merges them into a full order, signs it, and posts
    /// it via [`create_criteria_offer`](Self::create_criteria_offer).
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn build_offer(&self, request: &BuildOfferRequest) -> Result<BuildOfferResponse> {
        request.validate()?;
        self.post("offers/build", request).await
    }

    /// Posts a signed criteria offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the offer is invalid or the request fails.
    pub async fn create_criteria_offer(
        &self,
        request: &CreateCriteriaOfferRequest,
    ) -> Result<CreateCriteriaOfferResponse> {
        request.validate()?;
        self.post("offers", request).await
    }

    /// Retrieves the best offers on a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is unknown or the request fails.
    pub async fn collection_offers(&self, collection_slug: &str) -> Result<OffersResponse> {
        self.get(&format!("offers/collection/{collection_slug}"), &())
            .await
    }

    /// Lists every offer on a collection, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn all_collection_offers(
        &self,
        request: &AllCollectionOffersRequest,
    ) -> Result<OffersResponse> {
        request.validate()?;
        self.get(
            &format!("offers/collection/{}/all", request.collection_slug),
            request,
        )
        .await
    }

    /// Retrieves the best offers for one trait of a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn trait_offers(&self, request: &TraitOffersRequest) -> Result<OffersResponse> {
        request.validate()?;
        self.get(
            &format!("offers/collection/{}/traits", request.collection_slug),
            request,
        )
        .await
    }

    /// Lists every active listing on a collection, one page at a time. See
    /// [`all_listings_stream`](Self::all_listings_stream) to walk every
    /// page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn all_listings_by_collection(
        &self,
        request: &AllListingsByCollectionRequest,
    ) -> Result<ListingsResponse> {
        request.validate()?;
        self.get(
            &format!("listings/collection/{}/all", request.collection_slug),
            request,
        )
        .await
    }

    /// Retrieves the fulfillment data to buy a listing. Decode the returned
    /// transaction input with
    /// [`FulfillmentTransaction::decode`](crate::seaport::FulfillmentTransaction::decode).
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn fulfillment_data(
        &self,
        request: &FulfillListingRequest,
    ) -> Result<FulfillmentDataResponse> {
        request.validate()?;
        self.post("listings/fulfillment_data", request).await
    }

    /// Retrieves the fulfillment data to accept an offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or fails.
    pub async fn offer_fulfillment_data(
        &self,
        request: &FulfillOfferRequest,
    ) -> Result<FulfillmentDataResponse> {
        request.validate()?;
        self.post("offers/fulfillment_data", request).await
    }

    /// Walks every page of
    /// [`all_listings_by_collection`](Self::all_listings_by_collection),
    /// yielding individual listings.
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
    /// use opensea_client_sdk::orders::{
    ///     Client, types::request::AllListingsByCollectionRequest,
    /// };
    /// use tokio::pin;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::testnets(Config::default())?;
    /// let request = AllListingsByCollectionRequest::builder()
    ///     .collection_slug("my-collection")
    ///     .limit(100)
    ///     .build();
    ///
    /// let stream = client.all_listings_stream(&request);
    /// pin!(stream);
    ///
    /// while let Some(listing) = stream.next().await {
    ///     println!("{}", listing?.order_hash);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn all_listings_stream<'client>(
        &'client self,
        request: &AllListingsByCollectionRequest,
    ) -> impl Stream<Item = Result<CollectionListing>> + 'client {
        let mut request = request.clone();

        try_stream! {
            loop {
                let page = self.all_listings_by_collection(&request).await?;
                let next = page.next;

                for listing in page.listings {
                    yield listing;
                }

                match next {
                    Some(cursor) if !cursor.is_empty() => request.next = Some(cursor),
                    _ => break,
                }
            }
        }
    }
}
