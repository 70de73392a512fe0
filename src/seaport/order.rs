//! The Seaport order shape and its field-level validation.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{ItemType, OrderType, Side, UintString, parse_address, parse_uint};
use crate::Result;
use crate::error::Error;
use crate::types::Address;

/// An item the offerer is giving up.
///
/// `token` and the recipient on the consideration side are typed addresses,
/// so their syntactic validity is enforced when the payload is decoded; the
/// amount fields stay lexical until [`validate`](OrderParameters::validate).
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(UintString, into))]
#[serde(rename_all = "camelCase")]
pub struct OfferItem {
    pub item_type: ItemType,
    /// Token contract address, or the zero address for native currency.
    pub token: Address,
    /// Token id, or the criteria merkle root for criteria-based items.
    pub identifier_or_criteria: UintString,
    pub start_amount: UintString,
    pub end_amount: UintString,
}

impl OfferItem {
    fn validate(&self, path: &str) -> Result<()> {
        validate_item(
            path,
            self.item_type,
            &self.identifier_or_criteria,
            &self.start_amount,
            &self.end_amount,
        )
    }
}

/// An item the offerer expects in return, routed to `recipient`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(UintString, into))]
#[serde(rename_all = "camelCase")]
pub struct ConsiderationItem {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier_or_criteria: UintString,
    pub start_amount: UintString,
    pub end_amount: UintString,
    pub recipient: Address,
}

impl ConsiderationItem {
    fn validate(&self, path: &str) -> Result<()> {
        validate_item(
            path,
            self.item_type,
            &self.identifier_or_criteria,
            &self.start_amount,
            &self.end_amount,
        )
    }
}

fn validate_item(
    path: &str,
    item_type: ItemType,
    identifier_or_criteria: &UintString,
    start_amount: &UintString,
    end_amount: &UintString,
) -> Result<()> {
    if !item_type.is_known() {
        return Err(Error::validation(format!(
            "{path}.itemType: unknown value {}",
            item_type.value()
        )));
    }
    parse_uint(&format!("{path}.identifierOrCriteria"), identifier_or_criteria)?;
    parse_uint(&format!("{path}.startAmount"), start_amount)?;
    parse_uint(&format!("{path}.endAmount"), end_amount)?;
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// The full parameter set of a Seaport order, in wire (camelCase) form.
///
/// Integer-valued fields arrive as strings or numbers of indeterminate
/// width; [`validate`](OrderParameters::validate) checks each one and
/// reports the first failure with the field's wire name.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(UintString, into))]
#[serde(rename_all = "camelCase")]
pub struct OrderParameters {
    pub offerer: String,
    pub offer: Vec<OfferItem>,
    pub consideration: Vec<ConsiderationItem>,
    pub start_time: UintString,
    pub end_time: UintString,
    pub order_type: OrderType,
    /// Restricted-order gatekeeper contract, or the zero address.
    pub zone: String,
    pub zone_hash: String,
    pub salt: UintString,
    pub conduit_key: String,
    /// May trail the real consideration length when the API appends fee
    /// items; informational only.
    #[serde(default)]
    pub total_original_consideration_items: u64,
    pub counter: UintString,
}

impl OrderParameters {
    /// Validates every field, stopping at the first failure.
    ///
    /// Expiry is not checked against the clock and `endTime < startTime` is
    /// not rejected: temporal ordering is the contract's concern, not the
    /// decoder's.
    pub fn validate(&self) -> Result<()> {
        if self.offerer.is_empty() {
            return Err(Error::validation("offerer must not be empty"));
        }
        parse_address("offerer", &self.offerer)?;
        for (i, item) in self.offer.iter().enumerate() {
            item.validate(&format!("offer[{i}]"))?;
        }
        for (i, item) in self.consideration.iter().enumerate() {
            item.validate(&format!("consideration[{i}]"))?;
        }
        parse_uint("startTime", &self.start_time)?;
        parse_uint("endTime", &self.end_time)?;
        if !self.order_type.is_known() {
            return Err(Error::validation(format!(
                "orderType: unknown value {}",
                self.order_type.value()
            )));
        }
        require_non_empty("zone", &self.zone)?;
        require_non_empty("zoneHash", &self.zone_hash)?;
        require_non_empty("salt", self.salt.as_str())?;
        require_non_empty("conduitKey", &self.conduit_key)?;
        parse_uint("counter", &self.counter)?;
        Ok(())
    }
}

/// A signed order as the fulfillment endpoints return it.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct Order {
    pub parameters: OrderParameters,
    pub signature: String,
}

impl Order {
    /// Validates the embedded parameters. The signature is opaque bytes and
    /// is not checked here.
    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()
    }
}

/// An order plus the partial-fill fraction and zone extra data the advanced
/// fulfillment entry points take.
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(UintString, into))]
pub struct AdvancedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub numerator: Option<UintString>,
    pub denominator: Option<UintString>,
    #[serde(rename = "extraData")]
    pub extra_data: Option<String>,
}

impl AdvancedOrder {
    pub fn validate(&self) -> Result<()> {
        self.order.validate()?;
        if let Some(numerator) = &self.numerator {
            parse_uint("numerator", numerator)?;
        }
        if let Some(denominator) = &self.denominator {
            parse_uint("denominator", denominator)?;
        }
        Ok(())
    }
}

/// Directs a criteria-based item to the concrete token id being supplied,
/// with the merkle proof demonstrating membership.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(UintString, into))]
#[serde(rename_all = "camelCase")]
pub struct CriteriaResolver {
    pub order_index: u64,
    pub side: Side,
    pub index: u64,
    pub identifier: UintString,
    #[serde(default)]
    pub criteria_proof: Vec<String>,
}

/// A (order, item) coordinate into a batch of orders.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentComponent {
    pub order_index: u64,
    pub item_index: u64,
}

/// Pairs offer components with the consideration components they satisfy
/// when matching orders against each other.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Fulfillment {
    pub offer_components: Vec<FulfillmentComponent>,
    pub consideration_components: Vec<FulfillmentComponent>,
}
