//! Pricing Domain Models
//!
//! Plain data records the pricing pipeline works on. All monetary values are
//! integers in the smallest currency unit.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog
// =============================================================================

/// A catalog entry as submitted with the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Identifier referenced by cart items and discounts
    pub id: String,

    /// Display name of the article
    pub name: String,

    /// Base unit price
    pub price: i64,
}

// =============================================================================
// Carts
// =============================================================================

/// One line of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Article this line refers to
    pub article_id: String,

    /// Number of units
    pub quantity: u32,
}

/// A cart submitted for pricing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    pub id: String,
    pub items: Vec<CartItem>,
}

/// Priced cart returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotal {
    pub id: String,
    pub total: i64,
}

// =============================================================================
// Discounts
// =============================================================================

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Flat reduction of the unit price
    Amount,
    /// Reduction by a percentage of the unit price
    Percentage,
}

/// A per-article price reduction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    pub article_id: String,

    #[serde(rename = "type")]
    pub kind: DiscountKind,

    pub value: f64,
}

// =============================================================================
// Delivery Fees
// =============================================================================

/// Half-open price range `[min_price, max_price)`; no upper bound when
/// `max_price` is `None`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionVolume {
    pub min_price: i64,

    #[serde(default)]
    pub max_price: Option<i64>,
}

impl TransactionVolume {
    /// Returns true when `total` falls inside the range.
    pub fn contains(&self, total: i64) -> bool {
        total >= self.min_price && self.max_price.map_or(true, |max| total < max)
    }
}

/// A flat fee charged on carts whose total falls in `eligible_transaction_volume`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryFeeTier {
    pub eligible_transaction_volume: TransactionVolume,

    /// Fee added to the cart total
    pub price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn volume_is_half_open() {
        let volume = TransactionVolume {
            min_price: 0,
            max_price: Some(100),
        };
        assert!(volume.contains(0));
        assert!(volume.contains(99));
        assert!(!volume.contains(100));
        assert!(!volume.contains(-1));
    }

    #[test]
    fn unbounded_volume_matches_everything_above_min() {
        let volume = TransactionVolume {
            min_price: 100,
            max_price: None,
        };
        assert!(volume.contains(100));
        assert!(volume.contains(i64::MAX));
        assert!(!volume.contains(99));
    }

    #[test]
    fn discount_reads_wire_type_field() {
        let discount: Discount = serde_json::from_value(json!({
            "article_id": "a1",
            "type": "percentage",
            "value": 30
        }))
        .unwrap();
        assert_eq!(discount.kind, DiscountKind::Percentage);
        assert_eq!(discount.value, 30.0);
    }

    #[test]
    fn unknown_discount_type_is_rejected() {
        let parsed = serde_json::from_value::<Discount>(json!({
            "article_id": "a1",
            "type": "bogo",
            "value": 1
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn null_max_price_means_unbounded() {
        let tier: DeliveryFeeTier = serde_json::from_value(json!({
            "eligible_transaction_volume": { "min_price": 2000, "max_price": null },
            "price": 0
        }))
        .unwrap();
        assert_eq!(tier.eligible_transaction_volume.max_price, None);
    }
}
