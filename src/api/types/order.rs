//! Pro order types for the Buycoins GraphQL API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::null_default;

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

/// Pro order status, used to filter [`get_orders`](crate::api::BuycoinsClient::get_orders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
    PartiallyFilled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::PartiallyFilled => "partially_filled",
        }
    }
}

/// How long a limit order stays on the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeInForce {
    GoodTilCancelled,
    ImmediateOrCancel,
    FillOrKill,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::GoodTilCancelled => "good_til_cancelled",
            TimeInForce::ImmediateOrCancel => "immediate_or_cancel",
            TimeInForce::FillOrKill => "fill_or_kill",
        }
    }
}

/// Matching engine order type, used for fee quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    MarketOrder,
    LimitOrder,
}

impl OrderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::MarketOrder => "market_order",
            OrderKind::LimitOrder => "limit_order",
        }
    }
}

macro_rules! impl_wire_str {
    ($($ty:ty),*) => {
        $(
            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    self.as_str()
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_wire_str!(OrderSide, OrderStatus, TimeInForce, OrderKind);

/// A pro order as reported by the matching engine.
///
/// Returned by order placement, cancellation and listing. Decimal and enum
/// fields are kept as the text the remote sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub pair: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub price: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub side: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub status: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub time_in_force: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub order_type: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub fees: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub filled: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub total: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub initial_base_quantity: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub initial_quote_quantity: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub remaining_base_quantity: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub remaining_quote_quantity: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub mean_execution_price: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub engine_message: String,
}

/// Connection edge wrapping one [`Order`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEdge {
    pub node: Order,
}

/// One page of orders from `getProOrders`. No cursor is exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPage {
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub edges: Vec<OrderEdge>,
}

impl OrderPage {
    /// Iterate the orders on this page in server order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.edges.iter().map(|edge| &edge.node)
    }

    pub fn into_orders(self) -> Vec<Order> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Fee quote for a prospective order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFeeQuote {
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub fee: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub base_currency_total: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub quote_currency_total: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub price: String,
}

// ─── Request variables ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct GetOrdersVariables<'a> {
    #[serde(rename = "pair_")]
    pub pair: &'a str,
    #[serde(rename = "status_")]
    pub status: &'a str,
    #[serde(rename = "side_")]
    pub side: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CancelOrderVariables<'a> {
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderFeesVariables<'a> {
    #[serde(rename = "orderType_")]
    pub order_type: &'a str,
    #[serde(rename = "pair_")]
    pub pair: &'a str,
    #[serde(rename = "side_")]
    pub side: &'a str,
    #[serde(rename = "amount_")]
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub(crate) struct MarketOrderVariables<'a> {
    #[serde(rename = "pair_")]
    pub pair: &'a str,
    #[serde(rename = "quantity_")]
    pub quantity: Decimal,
    #[serde(rename = "side_")]
    pub side: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LimitOrderVariables<'a> {
    #[serde(rename = "pair_")]
    pub pair: &'a str,
    #[serde(rename = "quantity_")]
    pub quantity: Decimal,
    #[serde(rename = "price_")]
    pub price: Decimal,
    #[serde(rename = "side_")]
    pub side: &'a str,
    #[serde(rename = "timeInForce_")]
    pub time_in_force: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_order_deserialize_with_nulls() {
        let json = r#"{
            "id": "UHJvT3JkZXItZDRmYjMy",
            "pair": "btc_ngnt",
            "price": "2000000.0",
            "side": "buy",
            "status": "pending",
            "timeInForce": "good_til_cancelled",
            "orderType": "limit_order",
            "fees": "0.0",
            "filled": "0.0",
            "total": "10000.0",
            "initialBaseQuantity": "0.005",
            "initialQuoteQuantity": "10000.0",
            "remainingBaseQuantity": "0.005",
            "remainingQuoteQuantity": "10000.0",
            "meanExecutionPrice": null,
            "engineMessage": null
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "UHJvT3JkZXItZDRmYjMy");
        assert_eq!(order.time_in_force, "good_til_cancelled");
        assert_eq!(order.initial_base_quantity, "0.005");
        assert_eq!(order.mean_execution_price, "");
        assert_eq!(order.engine_message, "");
    }

    #[test]
    fn test_order_page_helpers() {
        let json = r#"{"edges": [
            {"node": {"id": "a", "pair": "btc_ngnt"}},
            {"node": {"id": "b", "pair": "btc_ngnt"}}
        ]}"#;
        let page: OrderPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.len(), 2);
        let ids: Vec<&str> = page.orders().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(page.into_orders()[1].id, "b");

        let empty: OrderPage = serde_json::from_str(r#"{"edges": null}"#).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_fee_quote_deserialize() {
        let json = r#"{
            "fee": "0.0000005",
            "baseCurrencyTotal": "0.0010005",
            "quoteCurrencyTotal": "35.12",
            "price": "35100.0"
        }"#;
        let quote: OrderFeeQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.fee, "0.0000005");
        assert_eq!(quote.quote_currency_total, "35.12");
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(OrderSide::Sell.as_ref(), "sell");
        assert_eq!(OrderStatus::PartiallyFilled.to_string(), "partially_filled");
        assert_eq!(TimeInForce::GoodTilCancelled.as_ref(), "good_til_cancelled");
        assert_eq!(OrderKind::MarketOrder.as_ref(), "market_order");
        assert_eq!(
            serde_json::to_string(&TimeInForce::FillOrKill).unwrap(),
            r#""fill_or_kill""#
        );
    }

    #[test]
    fn test_limit_variables_serialize_exact_keys() {
        let vars = LimitOrderVariables {
            pair: "btc_ngnt",
            quantity: Decimal::from_str("0.005").unwrap(),
            price: Decimal::from_str("2000000").unwrap(),
            side: "buy",
            time_in_force: "good_til_cancelled",
        };
        let value = serde_json::to_value(&vars).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "pair_": "btc_ngnt",
                "quantity_": "0.005",
                "price_": "2000000",
                "side_": "buy",
                "timeInForce_": "good_til_cancelled"
            })
        );
    }
}
