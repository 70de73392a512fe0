#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod chain;
pub mod error;
#[cfg(feature = "nft")]
pub mod nft;
#[cfg(feature = "orders")]
pub mod orders;
pub mod seaport;
pub(crate) mod serde_helpers;
pub mod types;

use std::fmt::Write as _;
use std::time::Duration;

use bon::Builder;
#[cfg(any(feature = "nft", feature = "orders"))]
use reqwest::{Request, StatusCode};
use secrecy::SecretString;
use serde::Serialize;
#[cfg(any(feature = "nft", feature = "orders"))]
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::types::{Address, address};

pub type Result<T> = std::result::Result<T, Error>;

/// Public host serving all mainnet chains.
pub const MAINNET_API_HOST: &str = "https://api.opensea.io";

/// Public host serving all testnet chains. No API key required.
pub const TESTNETS_API_HOST: &str = "https://testnets-api.opensea.io";

/// Seaport v1.5 protocol contract (deployed at the same address on every
/// supported EVM chain). Deprecated upstream; new orders use
/// [`SEAPORT_V1_6_ADDRESS`].
pub const SEAPORT_V1_5_ADDRESS: Address = address!("0x00000000000000ADc04C56Bf30aC9d3c0aAF14dC");

/// Seaport v1.6 protocol contract, the current default for new orders.
pub const SEAPORT_V1_6_ADDRESS: Address = address!("0x0000000000000068F116a894984e2DB1123eB395");

const DEFAULT_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Shared configuration for the API clients.
///
/// The API key is injected as a sensitive `x-api-key` default header at client
/// construction. Mainnet requests require a key; the testnets host does not.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct Config {
    /// API key sent as the `x-api-key` header with every request.
    #[builder(into)]
    pub api_key: Option<SecretString>,
    /// Total request attempts when the API keeps responding with HTTP 429.
    /// The default is five (5) attempts.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
    /// Pause between rate-limited attempts. The default is one (1) second.
    #[builder(default = DEFAULT_RETRY_INTERVAL)]
    pub retry_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
/// Arrays are serialized as repeated keys (`key=val1&key=val2`).
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    /// Also uses an optional pagination cursor as a parameter, if provided.
    fn query_params(&self, next: Option<&str>) -> String {
        let mut params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if let Some(cursor) = next {
            if !params.is_empty() {
                params.push('&');
            }
            let _ = write!(params, "next={cursor}");
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Executes `request`, retrying a bounded number of times while the API
/// responds with HTTP 429, and maps any other non-success status to
/// [`Error::status`].
#[cfg(any(feature = "nft", feature = "orders"))]
async fn execute_checked(
    client: &reqwest::Client,
    request: Request,
    config: &Config,
) -> Result<reqwest::Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let mut attempts = 0;
    let response = loop {
        attempts += 1;
        let attempt = request
            .try_clone()
            .ok_or_else(|| Error::validation("request body must be cloneable for retries"))?;
        let response = client.execute(attempt).await?;

        if response.status() != StatusCode::TOO_MANY_REQUESTS || attempts >= config.max_attempts {
            break response;
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            attempts,
            method = %method,
            path = %path,
            "API rate limited, attempting retry"
        );

        tokio::time::sleep(config.retry_interval).await;
    };

    let status_code = response.status();
    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    Ok(response)
}

#[cfg(any(feature = "nft", feature = "orders"))]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, config),
        fields(
            method = %request.method(),
            path = request.url().path(),
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
    config: &Config,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = execute_checked(client, request, config).await?;

    let json_value = response.json::<serde_json::Value>().await?;
    let response_data: Option<Response> = serde_helpers::deserialize_with_warnings(json_value)?;

    if let Some(response) = response_data {
        Ok(response)
    } else {
        #[cfg(feature = "tracing")]
        tracing::warn!(method = %method, path = %path, "API resource not found");
        Err(Error::status(
            StatusCode::NOT_FOUND,
            method,
            path,
            "Unable to find requested resource",
        ))
    }
}
