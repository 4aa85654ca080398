/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Order direction, `type` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

/// Execution style of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSubtype {
    Limited,
    Market,
}

impl fmt::Display for OrderSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSubtype::Limited => write!(f, "limited"),
            OrderSubtype::Market => write!(f, "market"),
        }
    }
}

/// Lifecycle state filter accepted by the user-orders listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    ExecutedCompletely,
    ExecutedPartially,
    Waiting,
    Canceled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::ExecutedCompletely => write!(f, "executed_completely"),
            OrderStatus::ExecutedPartially => write!(f, "executed_partially"),
            OrderStatus::Waiting => write!(f, "waiting"),
            OrderStatus::Canceled => write!(f, "canceled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_value() {
        for (side, expected) in [(OrderSide::Buy, "buy"), (OrderSide::Sell, "sell")] {
            let wire = serde_json::to_string(&side).unwrap();
            assert_eq!(wire.trim_matches('"'), expected);
            assert_eq!(side.to_string(), expected);
        }

        let wire = serde_json::to_string(&OrderStatus::ExecutedCompletely).unwrap();
        assert_eq!(wire.trim_matches('"'), "executed_completely");
        assert_eq!(
            OrderStatus::ExecutedCompletely.to_string(),
            "executed_completely"
        );

        let wire = serde_json::to_string(&OrderSubtype::Limited).unwrap();
        assert_eq!(wire.trim_matches('"'), "limited");
        assert_eq!(OrderSubtype::Limited.to_string(), "limited");
    }
}
