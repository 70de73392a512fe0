//! Decoding the polymorphic `fulfillment_data` payload.
//!
//! The fulfillment-data endpoints return one envelope shape whose
//! `transaction.input_data` member is untyped JSON: its real shape depends on
//! which Seaport entry point `transaction.function` names. The raw JSON is
//! retained as-is at deserialization time; [`FulfillmentTransaction`] then
//! offers one decode method per known shape, plus a selector-keyed
//! [`decode`](FulfillmentTransaction::decode) that picks the shape for you.

use bon::Builder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::UintString;
use super::order::{AdvancedOrder, CriteriaResolver, Fulfillment, FulfillmentComponent, Order};
use crate::Result;
use crate::error::{DecodeStage, Error, UnknownFunction};
use crate::types::Address;

/// The response body of the `fulfillment_data` endpoints.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct FulfillmentDataResponse {
    /// Protocol tag, e.g. `seaport1.5` or `seaport1.6`.
    pub protocol: String,
    pub fulfillment_data: FulfillmentData,
}

/// The transaction to submit plus the orders it fulfills.
///
/// Orders are carried as [`AdvancedOrder`] so the partial-fill fraction
/// survives when an advanced entry point is in play; for the plain entry
/// points those fields simply stay `None`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
pub struct FulfillmentData {
    pub transaction: FulfillmentTransaction,
    #[serde(default)]
    pub orders: Vec<AdvancedOrder>,
}

/// The call the marketplace wants submitted, with its calldata still in raw
/// JSON form.
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(UintString, into))]
pub struct FulfillmentTransaction {
    /// Human-readable signature of the Seaport method to call, e.g.
    /// `fulfillBasicOrder_efficient_6GL6yc((address,uint256,...))`.
    pub function: String,
    /// Numeric chain id.
    pub chain: i64,
    /// Protocol contract to send the transaction to.
    pub to: Address,
    /// Native-currency amount to attach, in wei.
    pub value: UintString,
    /// Decoded call data; shape depends on `function`.
    pub input_data: Option<Value>,
}

impl FulfillmentTransaction {
    /// The selector name: the portion of `function` before the parameter
    /// list.
    #[must_use]
    pub fn function_name(&self) -> &str {
        self.function
            .find('(')
            .map_or(self.function.as_str(), |open| &self.function[..open])
    }

    /// Decodes `input_data` into `T`.
    ///
    /// Absent or `null` input data yields the zero value of `T`: nothing was
    /// requested, which is not a failure. Otherwise the retained JSON is
    /// re-serialized to canonical text and the target shape is populated
    /// from that text; either step failing is a decode error naming the
    /// stage.
    fn decode_input<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let raw = match &self.input_data {
            None | Some(Value::Null) => return Ok(T::default()),
            Some(raw) => raw,
        };
        let text = serde_json::to_string(raw)
            .map_err(|err| Error::decode(DecodeStage::Serialize, err))?;
        serde_json::from_str(&text).map_err(|err| Error::decode(DecodeStage::Deserialize, err))
    }

    /// Decodes the calldata of `fulfillBasicOrder` and its gas-optimized
    /// `fulfillBasicOrder_efficient_6GL6yc` twin.
    pub fn decode_basic_order(&self) -> Result<BasicOrderInputData> {
        self.decode_input()
    }

    /// Decodes the calldata of `fulfillOrder`.
    pub fn decode_order(&self) -> Result<OrderInputData> {
        self.decode_input()
    }

    /// Decodes the calldata of `fulfillAdvancedOrder`.
    pub fn decode_advanced_order(&self) -> Result<AdvancedOrderInputData> {
        self.decode_input()
    }

    /// Decodes the calldata of `fulfillAvailableOrders`.
    pub fn decode_available_orders(&self) -> Result<AvailableOrdersInputData> {
        self.decode_input()
    }

    /// Decodes the calldata of `fulfillAvailableAdvancedOrders`.
    pub fn decode_available_advanced_orders(&self) -> Result<AvailableAdvancedOrdersInputData> {
        self.decode_input()
    }

    /// Decodes the calldata of `matchOrders`.
    pub fn decode_match_orders(&self) -> Result<MatchOrdersInputData> {
        self.decode_input()
    }

    /// Decodes the calldata of `matchAdvancedOrders`.
    pub fn decode_match_advanced_orders(&self) -> Result<MatchAdvancedOrdersInputData> {
        self.decode_input()
    }

    /// Decodes `input_data` into the shape `function` names.
    ///
    /// Callers that already know which entry point they asked for can use
    /// the per-shape methods directly and skip the selector match. A
    /// selector outside the known set is a decode error.
    pub fn decode(&self) -> Result<FulfillmentCall> {
        match self.function_name() {
            "fulfillBasicOrder" | "fulfillBasicOrder_efficient_6GL6yc" => {
                Ok(FulfillmentCall::BasicOrder(self.decode_basic_order()?))
            }
            "fulfillOrder" => Ok(FulfillmentCall::Order(self.decode_order()?)),
            "fulfillAdvancedOrder" => {
                Ok(FulfillmentCall::AdvancedOrder(self.decode_advanced_order()?))
            }
            "fulfillAvailableOrders" => Ok(FulfillmentCall::AvailableOrders(
                self.decode_available_orders()?,
            )),
            "fulfillAvailableAdvancedOrders" => Ok(FulfillmentCall::AvailableAdvancedOrders(
                self.decode_available_advanced_orders()?,
            )),
            "matchOrders" => Ok(FulfillmentCall::MatchOrders(self.decode_match_orders()?)),
            "matchAdvancedOrders" => Ok(FulfillmentCall::MatchAdvancedOrders(
                self.decode_match_advanced_orders()?,
            )),
            other => Err(UnknownFunction {
                function: other.to_owned(),
            }
            .into()),
        }
    }
}

/// `input_data` decoded by selector, one case per calldata shape.
///
/// Both basic-order selectors share the [`BasicOrder`](Self::BasicOrder)
/// case; the originating selector stays available on the transaction.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum FulfillmentCall {
    BasicOrder(BasicOrderInputData),
    Order(OrderInputData),
    AdvancedOrder(AdvancedOrderInputData),
    AvailableOrders(AvailableOrdersInputData),
    AvailableAdvancedOrders(AvailableAdvancedOrdersInputData),
    MatchOrders(MatchOrdersInputData),
    MatchAdvancedOrders(MatchAdvancedOrdersInputData),
}

/// Calldata of the basic-order entry points.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct BasicOrderInputData {
    pub parameters: BasicOrderParameters,
}

/// The flattened single-order parameter struct the basic entry points take.
///
/// Mirrors the Seaport contract binding field for field, in wire
/// (camelCase) form.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(UintString, into))]
#[serde(default, rename_all = "camelCase")]
pub struct BasicOrderParameters {
    pub consideration_token: Address,
    pub consideration_identifier: UintString,
    pub consideration_amount: UintString,
    pub offerer: Address,
    pub zone: Address,
    pub offer_token: Address,
    pub offer_identifier: UintString,
    pub offer_amount: UintString,
    pub basic_order_type: u8,
    pub start_time: UintString,
    pub end_time: UintString,
    pub zone_hash: String,
    pub salt: UintString,
    pub offerer_conduit_key: String,
    pub fulfiller_conduit_key: String,
    pub total_original_additional_recipients: UintString,
    pub additional_recipients: Vec<AdditionalRecipient>,
    pub signature: String,
}

/// A fee or royalty recipient appended to a basic order.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(UintString, into))]
#[serde(default)]
pub struct AdditionalRecipient {
    pub amount: UintString,
    pub recipient: Address,
}

/// Calldata of `fulfillOrder`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(default, rename_all = "camelCase")]
pub struct OrderInputData {
    pub order: Order,
    pub fulfiller_conduit_key: String,
}

/// Calldata of `fulfillAdvancedOrder`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(default, rename_all = "camelCase")]
pub struct AdvancedOrderInputData {
    pub advanced_order: AdvancedOrder,
    pub criteria_resolvers: Vec<CriteriaResolver>,
    pub fulfiller_conduit_key: String,
    pub recipient: Address,
}

/// Calldata of `fulfillAvailableOrders`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(UintString, into))]
#[serde(default, rename_all = "camelCase")]
pub struct AvailableOrdersInputData {
    pub orders: Vec<Order>,
    pub offer_fulfillments: Vec<Vec<FulfillmentComponent>>,
    pub consideration_fulfillments: Vec<Vec<FulfillmentComponent>>,
    pub fulfiller_conduit_key: String,
    pub maximum_fulfilled: UintString,
}

/// Calldata of `fulfillAvailableAdvancedOrders`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into), on(UintString, into))]
#[serde(default, rename_all = "camelCase")]
pub struct AvailableAdvancedOrdersInputData {
    pub advanced_orders: Vec<AdvancedOrder>,
    pub criteria_resolvers: Vec<CriteriaResolver>,
    pub offer_fulfillments: Vec<Vec<FulfillmentComponent>>,
    pub consideration_fulfillments: Vec<Vec<FulfillmentComponent>>,
    pub fulfiller_conduit_key: String,
    pub recipient: Address,
    pub maximum_fulfilled: UintString,
}

/// Calldata of `matchOrders`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchOrdersInputData {
    pub orders: Vec<Order>,
    pub fulfillments: Vec<Fulfillment>,
}

/// Calldata of `matchAdvancedOrders`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchAdvancedOrdersInputData {
    pub orders: Vec<AdvancedOrder>,
    pub criteria_resolvers: Vec<CriteriaResolver>,
    pub fulfillments: Vec<Fulfillment>,
    pub recipient: Address,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::{Decode, Kind};
    use crate::seaport::{ItemType, OrderType, Side};
    use crate::types::{U256, address};

    // A recorded Goerli listing fulfillment, lightly redacted.
    const BASIC_ORDER_RESPONSE: &str = r#"{
        "protocol": "seaport1.5",
        "fulfillment_data": {
            "transaction": {
                "function": "fulfillBasicOrder_efficient_6GL6yc((address,uint256,uint256,address,address,address,uint256,uint256,uint8,uint256,uint256,bytes32,uint256,bytes32,bytes32,uint256,(uint256,address)[],bytes))",
                "chain": 5,
                "to": "0x00000000000000adc04c56bf30ac9d3c0aaf14dc",
                "value": 1000000000000000,
                "input_data": {
                    "parameters": {
                        "additionalRecipients": [
                            {
                                "amount": "25000000000000",
                                "recipient": "0x0000a26b00c1f0df003000390027140000faa719"
                            }
                        ],
                        "basicOrderType": 0,
                        "considerationAmount": "975000000000000",
                        "considerationIdentifier": "0",
                        "considerationToken": "0x0000000000000000000000000000000000000000",
                        "endTime": "1699581869",
                        "fulfillerConduitKey": "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000",
                        "offerAmount": "1",
                        "offerIdentifier": "6",
                        "offerToken": "0xb31d6b5516eed64a874e9f7ab605e359e20b645f",
                        "offerer": "0xefe15c06bae6ba30b444e6fcd6b94354057fc998",
                        "offererConduitKey": "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000",
                        "salt": "24446860302761739304752683030156737591518664810215442929800774530667140607197",
                        "signature": "0x59b6d8aa7c897361745cc43f25611fa65af0237bb09c5fc6d03f9a4e1248afd4",
                        "startTime": "1696903469",
                        "totalOriginalAdditionalRecipients": "1",
                        "zone": "0x004c00500000ad104d7dbd00e3ae0a5c00560c00",
                        "zoneHash": "0x0000000000000000000000000000000000000000000000000000000000000000"
                    }
                }
            },
            "orders": [
                {
                    "parameters": {
                        "offerer": "0xefe15c06bae6ba30b444e6fcd6b94354057fc998",
                        "offer": [
                            {
                                "itemType": 2,
                                "token": "0xB31D6B5516Eed64a874E9F7aB605e359e20B645F",
                                "identifierOrCriteria": "6",
                                "startAmount": "1",
                                "endAmount": "1"
                            }
                        ],
                        "consideration": [
                            {
                                "itemType": 0,
                                "token": "0x0000000000000000000000000000000000000000",
                                "identifierOrCriteria": "0",
                                "startAmount": "975000000000000",
                                "endAmount": "975000000000000",
                                "recipient": "0xeFe15c06BAE6bA30b444e6fCD6B94354057fC998"
                            },
                            {
                                "itemType": 0,
                                "token": "0x0000000000000000000000000000000000000000",
                                "identifierOrCriteria": "0",
                                "startAmount": "25000000000000",
                                "endAmount": "25000000000000",
                                "recipient": "0x0000a26b00c1F0DF003000390027140000fAa719"
                            }
                        ],
                        "startTime": "1696903469",
                        "endTime": "1699581869",
                        "orderType": 0,
                        "zone": "0x004C00500000aD104D7DBd00e3ae0A5C00560C00",
                        "zoneHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
                        "salt": "0x360c6ebe000000000000000000000000000000000000000005701a6f0f296f2d",
                        "conduitKey": "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000",
                        "totalOriginalConsiderationItems": 2,
                        "counter": 0
                    },
                    "signature": "0x59b6d8aa7c897361745cc43f25611fa65af0237bb09c5fc6d03f9a4e1248afd4"
                }
            ]
        }
    }"#;

    fn basic_order_response() -> FulfillmentDataResponse {
        serde_json::from_str(BASIC_ORDER_RESPONSE).expect("fixture deserializes")
    }

    #[test]
    fn basic_order_fixture_decodes() {
        let response = basic_order_response();
        let tx = &response.fulfillment_data.transaction;

        assert_eq!(response.protocol, "seaport1.5");
        assert_eq!(tx.function_name(), "fulfillBasicOrder_efficient_6GL6yc");
        assert_eq!(tx.chain, 5);
        assert_eq!(
            tx.to,
            address!("0x00000000000000adc04c56bf30ac9d3c0aaf14dc")
        );
        // value arrives as a JSON number in this capture
        assert_eq!(tx.value.to_u256(), Some(U256::from(1_000_000_000_000_000_u64)));

        let decoded = tx.decode_basic_order().expect("decodes");
        let params = &decoded.parameters;

        assert_eq!(params.offer_identifier, "6");
        assert_eq!(params.offer_amount, "1");
        assert_eq!(params.consideration_amount, "975000000000000");
        assert_eq!(params.basic_order_type, 0);
        assert_eq!(params.additional_recipients.len(), 1);
        assert_eq!(params.additional_recipients[0].amount, "25000000000000");
        assert_eq!(
            params.additional_recipients[0].recipient,
            address!("0x0000a26b00c1f0df003000390027140000faa719")
        );
        assert_eq!(params.total_original_additional_recipients, "1");
    }

    #[test]
    fn fixture_orders_validate() {
        let response = basic_order_response();
        let order = &response.fulfillment_data.orders[0];

        order.validate().expect("recorded order validates");
        assert_eq!(order.order.parameters.offer[0].item_type, ItemType::Erc721);
        assert_eq!(order.order.parameters.order_type, OrderType::FullOpen);
        assert_eq!(order.order.parameters.consideration.len(), 2);
        assert!(order.numerator.is_none());
    }

    #[test]
    fn selector_dispatch_picks_basic_order() {
        let response = basic_order_response();

        let call = response
            .fulfillment_data
            .transaction
            .decode()
            .expect("dispatches");

        match call {
            FulfillmentCall::BasicOrder(data) => {
                assert_eq!(data.parameters.offer_identifier, "6");
            }
            other => panic!("expected basic order, got {other:?}"),
        }
    }

    #[test]
    fn null_input_data_decodes_to_zero_value() {
        let tx = FulfillmentTransaction::builder()
            .function("fulfillOrder((...))")
            .chain(1)
            .to(Address::ZERO)
            .value("0")
            .input_data(Value::Null)
            .build();

        let basic = tx.decode_basic_order().expect("null is the zero value");
        assert!(basic.parameters.additional_recipients.is_empty());
        assert!(basic.parameters.offer_identifier.is_empty());

        assert!(tx.decode_order().expect("order").order.signature.is_empty());
        assert!(tx.decode_advanced_order().expect("advanced").criteria_resolvers.is_empty());
        assert!(tx.decode_available_orders().expect("available").orders.is_empty());
        assert!(
            tx.decode_available_advanced_orders()
                .expect("available advanced")
                .advanced_orders
                .is_empty()
        );
        assert!(tx.decode_match_orders().expect("match").fulfillments.is_empty());
        assert!(tx.decode_match_advanced_orders().expect("match advanced").orders.is_empty());
    }

    #[test]
    fn missing_input_data_decodes_to_zero_value() {
        let tx = FulfillmentTransaction::builder()
            .function("matchOrders(((address,...)))")
            .chain(1)
            .to(Address::ZERO)
            .value("0")
            .build();

        let decoded = tx.decode_match_orders().expect("absent is the zero value");

        assert!(decoded.orders.is_empty());
        assert!(decoded.fulfillments.is_empty());
    }

    #[test]
    fn mismatched_shape_is_a_decode_error() {
        let tx = FulfillmentTransaction::builder()
            .function("fulfillAvailableOrders(...)")
            .chain(1)
            .to(Address::ZERO)
            .value("0")
            .input_data(json!({"orders": "not-an-array"}))
            .build();

        let err = tx.decode_available_orders().expect_err("wrong shape");

        assert_eq!(err.kind(), Kind::Decode);
        let decode = err.downcast_ref::<Decode>().expect("decode payload");
        assert_eq!(decode.stage, DecodeStage::Deserialize);
    }

    #[test]
    fn unknown_selector_is_rejected() {
        let tx = FulfillmentTransaction::builder()
            .function("transferFrom(address,address,uint256)")
            .chain(1)
            .to(Address::ZERO)
            .value("0")
            .build();

        let err = tx.decode().expect_err("unknown selector");

        assert_eq!(err.kind(), Kind::Decode);
        assert!(err.to_string().contains("transferFrom"));
    }

    #[test]
    fn function_name_without_parameter_list() {
        let tx = FulfillmentTransaction::builder()
            .function("matchOrders")
            .chain(1)
            .to(Address::ZERO)
            .value("0")
            .build();

        assert_eq!(tx.function_name(), "matchOrders");
    }

    #[test]
    fn advanced_order_input_round_trips() {
        let input = json!({
            "advancedOrder": {
                "parameters": serde_json::to_value(
                    crate::seaport::order::OrderParameters::default()
                ).expect("parameters"),
                "signature": "0xabcd",
                "numerator": 1,
                "denominator": "2",
                "extraData": "0x"
            },
            "criteriaResolvers": [],
            "fulfillerConduitKey": "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000",
            "recipient": "0x69493301a10A06679a6771D33E8CDd3a5fdA4dB4"
        });
        let tx = FulfillmentTransaction::builder()
            .function("fulfillAdvancedOrder(...)")
            .chain(1)
            .to(Address::ZERO)
            .value("0")
            .input_data(input)
            .build();

        let decoded = tx.decode_advanced_order().expect("decodes");

        assert_eq!(
            decoded.advanced_order.numerator,
            Some(UintString::from("1"))
        );
        assert_eq!(
            decoded.advanced_order.denominator,
            Some(UintString::from("2"))
        );
        assert_eq!(
            decoded.recipient,
            address!("0x69493301a10A06679a6771D33E8CDd3a5fdA4dB4")
        );
    }

    const CONDUIT_KEY: &str = "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000";

    fn sample_order() -> Order {
        basic_order_response().fulfillment_data.orders[0]
            .order
            .clone()
    }

    fn component(order_index: u64, item_index: u64) -> FulfillmentComponent {
        FulfillmentComponent::builder()
            .order_index(order_index)
            .item_index(item_index)
            .build()
    }

    fn transaction(function: &str, input: Value) -> FulfillmentTransaction {
        FulfillmentTransaction::builder()
            .function(function)
            .chain(1)
            .to(Address::ZERO)
            .value("0")
            .input_data(input)
            .build()
    }

    #[test]
    fn order_input_round_trips() {
        let data = OrderInputData::builder()
            .order(sample_order())
            .fulfiller_conduit_key(CONDUIT_KEY)
            .build();

        let input = serde_json::to_value(&data).expect("encodes");
        assert!(input.get("fulfillerConduitKey").is_some());

        let tx = transaction("fulfillOrder((tuple,bytes32))", input);
        let FulfillmentCall::Order(decoded) = tx.decode().expect("decodes") else {
            panic!("expected an order call");
        };

        assert_eq!(decoded.fulfiller_conduit_key, CONDUIT_KEY);
        assert_eq!(decoded.order.signature, data.order.signature);
        assert_eq!(
            decoded.order.parameters.offerer,
            data.order.parameters.offerer
        );
        assert_eq!(decoded.order.parameters.offer[0].item_type, ItemType::Erc721);
    }

    #[test]
    fn available_orders_input_round_trips() {
        let data = AvailableOrdersInputData::builder()
            .orders(vec![sample_order(), sample_order()])
            .offer_fulfillments(vec![vec![component(0, 0)], vec![component(1, 0)]])
            .consideration_fulfillments(vec![vec![component(0, 0), component(1, 0)]])
            .fulfiller_conduit_key(CONDUIT_KEY)
            .maximum_fulfilled("2")
            .build();

        let input = serde_json::to_value(&data).expect("encodes");
        assert_eq!(input["maximumFulfilled"], json!("2"));
        assert_eq!(input["offerFulfillments"][1][0]["orderIndex"], json!(1));
        assert_eq!(
            input["considerationFulfillments"][0][1]["itemIndex"],
            json!(0)
        );

        let tx = transaction("fulfillAvailableOrders(...)", input);
        let decoded = tx.decode_available_orders().expect("decodes");

        assert_eq!(decoded.orders.len(), 2);
        assert_eq!(decoded.maximum_fulfilled, "2");
        assert_eq!(decoded.offer_fulfillments.len(), 2);
        assert_eq!(decoded.offer_fulfillments[1][0].order_index, 1);
        assert_eq!(decoded.consideration_fulfillments[0].len(), 2);
        assert_eq!(decoded.consideration_fulfillments[0][1].order_index, 1);
        assert_eq!(decoded.fulfiller_conduit_key, CONDUIT_KEY);
    }

    #[test]
    fn available_advanced_orders_input_round_trips() {
        let advanced = AdvancedOrder::builder()
            .order(sample_order())
            .numerator("1")
            .denominator("4")
            .build();
        let resolver = CriteriaResolver::builder()
            .order_index(0)
            .side(Side::Offer)
            .index(0)
            .identifier("6")
            .criteria_proof(vec![])
            .build();
        let data = AvailableAdvancedOrdersInputData::builder()
            .advanced_orders(vec![advanced])
            .criteria_resolvers(vec![resolver])
            .offer_fulfillments(vec![vec![component(0, 0)]])
            .consideration_fulfillments(vec![vec![component(0, 0)], vec![component(0, 1)]])
            .fulfiller_conduit_key(CONDUIT_KEY)
            .recipient(address!("0x69493301a10A06679a6771D33E8CDd3a5fdA4dB4"))
            .maximum_fulfilled("1")
            .build();

        let input = serde_json::to_value(&data).expect("encodes");
        assert_eq!(input["advancedOrders"][0]["numerator"], json!("1"));
        assert_eq!(input["criteriaResolvers"][0]["identifier"], json!("6"));
        assert_eq!(input["maximumFulfilled"], json!("1"));
        assert_eq!(
            input["considerationFulfillments"][1][0]["itemIndex"],
            json!(1)
        );

        let tx = transaction("fulfillAvailableAdvancedOrders(...)", input);
        let decoded = tx.decode_available_advanced_orders().expect("decodes");

        assert_eq!(decoded.advanced_orders[0].numerator, Some("1".into()));
        assert_eq!(decoded.advanced_orders[0].denominator, Some("4".into()));
        assert_eq!(decoded.criteria_resolvers[0].identifier, "6");
        assert_eq!(decoded.criteria_resolvers[0].side, Side::Offer);
        assert_eq!(decoded.consideration_fulfillments[1][0].item_index, 1);
        assert_eq!(decoded.maximum_fulfilled, "1");
        assert_eq!(
            decoded.recipient,
            address!("0x69493301a10A06679a6771D33E8CDd3a5fdA4dB4")
        );
    }

    #[test]
    fn match_orders_input_round_trips() {
        let pairing = Fulfillment::builder()
            .offer_components(vec![component(0, 0)])
            .consideration_components(vec![component(1, 0)])
            .build();
        let data = MatchOrdersInputData::builder()
            .orders(vec![sample_order(), sample_order()])
            .fulfillments(vec![pairing])
            .build();

        let input = serde_json::to_value(&data).expect("encodes");
        assert_eq!(
            input["fulfillments"][0]["offerComponents"][0]["orderIndex"],
            json!(0)
        );
        assert_eq!(
            input["fulfillments"][0]["considerationComponents"][0]["orderIndex"],
            json!(1)
        );

        let tx = transaction("matchOrders((tuple[],tuple[]))", input);
        let FulfillmentCall::MatchOrders(decoded) = tx.decode().expect("decodes") else {
            panic!("expected a match call");
        };

        assert_eq!(decoded.orders.len(), 2);
        assert_eq!(decoded.fulfillments[0].offer_components[0].order_index, 0);
        assert_eq!(
            decoded.fulfillments[0].consideration_components[0].order_index,
            1
        );
    }

    #[test]
    fn match_advanced_orders_input_round_trips() {
        let advanced = AdvancedOrder::builder()
            .order(sample_order())
            .numerator("1")
            .denominator("2")
            .build();
        let resolver = CriteriaResolver::builder()
            .order_index(1)
            .side(Side::Consideration)
            .index(0)
            .identifier("40")
            .criteria_proof(vec!["0xabcd".to_owned()])
            .build();
        let pairing = Fulfillment::builder()
            .offer_components(vec![component(0, 0)])
            .consideration_components(vec![component(1, 0)])
            .build();
        let data = MatchAdvancedOrdersInputData::builder()
            .orders(vec![advanced.clone(), advanced])
            .criteria_resolvers(vec![resolver])
            .fulfillments(vec![pairing])
            .recipient(address!("0x69493301a10A06679a6771D33E8CDd3a5fdA4dB4"))
            .build();

        let input = serde_json::to_value(&data).expect("encodes");
        assert_eq!(input["orders"][0]["denominator"], json!("2"));
        assert_eq!(input["criteriaResolvers"][0]["criteriaProof"][0], json!("0xabcd"));
        assert_eq!(
            input["fulfillments"][0]["considerationComponents"][0]["itemIndex"],
            json!(0)
        );

        let tx = transaction("matchAdvancedOrders(...)", input);
        let decoded = tx.decode_match_advanced_orders().expect("decodes");

        assert_eq!(decoded.orders.len(), 2);
        assert_eq!(decoded.orders[1].denominator, Some("2".into()));
        assert_eq!(decoded.criteria_resolvers[0].identifier, "40");
        assert_eq!(decoded.criteria_resolvers[0].side, Side::Consideration);
        assert_eq!(decoded.criteria_resolvers[0].criteria_proof, ["0xabcd"]);
        assert_eq!(decoded.fulfillments[0].offer_components[0].item_index, 0);
        assert_eq!(
            decoded.recipient,
            address!("0x69493301a10A06679a6771D33E8CDd3a5fdA4dB4")
        );
    }
}
