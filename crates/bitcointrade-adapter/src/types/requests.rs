/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderSide, OrderStatus, OrderSubtype};

/// Body for POST /market/create_order.
///
/// Amounts and prices travel as JSON numbers, matching the upstream schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub subtype: OrderSubtype,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

impl Default for CreateOrderRequest {
    fn default() -> Self {
        Self {
            currency: "BTC".to_string(),
            amount: Decimal::ZERO,
            side: OrderSide::Buy,
            subtype: OrderSubtype::Limited,
            unit_price: Decimal::ZERO,
        }
    }
}

/// Body for DELETE /market/user_orders/.
///
/// The upstream API expects the order id in a JSON body rather than in the
/// path or query string, despite the DELETE verb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub id: String,
}

/// Query parameters for GET /public/{currency}/trades.
///
/// `hours` selects the window ending at "now" in exchange-local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradesQuery {
    pub hours: i64,
    pub page_size: u32,
    pub current_page: u32,
}

impl Default for TradesQuery {
    fn default() -> Self {
        Self {
            hours: 1,
            page_size: 100,
            current_page: 1,
        }
    }
}

/// Query parameters for GET /market/user_orders/list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserOrdersQuery {
    pub status: OrderStatus,
    pub hours: i64,
    pub side: OrderSide,
    pub page_size: u32,
    pub current_page: u32,
}

impl Default for UserOrdersQuery {
    fn default() -> Self {
        Self {
            status: OrderStatus::ExecutedCompletely,
            hours: 24,
            side: OrderSide::Buy,
            page_size: 100,
            current_page: 1,
        }
    }
}
