use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

/// Verification status of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum SafelistStatus {
    /// Collection has not requested verification.
    NotRequested,
    /// Verification has been requested.
    Requested,
    /// Collection is approved (safelisted).
    Approved,
    /// Collection is verified (blue check).
    Verified,
    /// Removed from the top-trending surfaces.
    DisabledTopTrending,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    #[strum(to_string = "{0}")]
    Unknown(String),
}

/// Kind of asset event in the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum EventType {
    /// All event kinds (filter value only).
    All,
    /// Order cancellation.
    Cancel,
    /// New listing.
    Listing,
    /// New offer.
    Offer,
    /// Order creation.
    Order,
    /// Token redemption.
    Redemption,
    /// Completed sale.
    Sale,
    /// Token transfer.
    Transfer,
    /// Unknown event kind from the API (captures the raw value for debugging).
    #[serde(untagged)]
    #[strum(to_string = "{0}")]
    Unknown(String),
}
