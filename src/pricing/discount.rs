//! Discount application
//!
//! Discounts are indexed per article (last one submitted wins) and applied to
//! the unit price before it is multiplied by the quantity.
//!
//! Rounding: both kinds are computed in floating point and truncated toward
//! zero. `percentage` 20 on a price of 7 gives `7 * 0.8 = 5.6`, so the
//! effective price is 5. `amount` discounts are not clamped and can produce a
//! negative unit price.

use super::models::{Discount, DiscountKind};
use crate::error::PricingError;
use std::collections::HashMap;

/// 2^63, the first `f64` that no longer fits in an `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Discounts keyed by article id.
#[derive(Debug, Clone, Default)]
pub struct DiscountBook {
    by_article: HashMap<String, Discount>,
}

impl DiscountBook {
    pub fn index(discounts: impl IntoIterator<Item = Discount>) -> Self {
        let by_article = discounts
            .into_iter()
            .map(|d| (d.article_id.clone(), d))
            .collect();

        Self { by_article }
    }

    pub fn get(&self, article_id: &str) -> Option<&Discount> {
        self.by_article.get(article_id)
    }

    /// Effective unit price of `article_id` at base price `price`.
    pub fn effective_price(&self, article_id: &str, price: i64) -> Result<i64, PricingError> {
        match self.get(article_id) {
            Some(discount) => apply_discount(price, discount),
            None => Ok(price),
        }
    }

    pub fn len(&self) -> usize {
        self.by_article.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_article.is_empty()
    }
}

/// Applies `discount` to a base unit price.
pub fn apply_discount(price: i64, discount: &Discount) -> Result<i64, PricingError> {
    let base = price as f64;
    let discounted = match discount.kind {
        DiscountKind::Amount => base - discount.value,
        DiscountKind::Percentage => base * (1.0 - discount.value / 100.0),
    };

    if !discounted.is_finite() || discounted < -I64_BOUND || discounted >= I64_BOUND {
        return Err(PricingError::TotalOverflow);
    }

    // `as` truncates toward zero.
    Ok(discounted as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discount(article_id: &str, kind: DiscountKind, value: f64) -> Discount {
        Discount {
            article_id: article_id.into(),
            kind,
            value,
        }
    }

    #[test]
    fn amount_subtracts_from_price() {
        let d = discount("1", DiscountKind::Amount, 100.0);
        assert_eq!(apply_discount(500, &d), Ok(400));
    }

    #[test]
    fn amount_is_not_clamped_at_zero() {
        let d = discount("1", DiscountKind::Amount, 80.0);
        assert_eq!(apply_discount(50, &d), Ok(-30));
    }

    #[test]
    fn percentage_truncates() {
        let d = discount("1", DiscountKind::Percentage, 20.0);
        assert_eq!(apply_discount(5, &d), Ok(4));
        assert_eq!(apply_discount(7, &d), Ok(5));

        let d = discount("1", DiscountKind::Percentage, 30.0);
        assert_eq!(apply_discount(1099, &d), Ok(769));
    }

    #[test]
    fn zero_discounts_are_identity() {
        let amount = discount("1", DiscountKind::Amount, 0.0);
        let percentage = discount("1", DiscountKind::Percentage, 0.0);
        for price in [0, 1, 7, 999, 123_456] {
            assert_eq!(apply_discount(price, &amount), Ok(price));
            assert_eq!(apply_discount(price, &percentage), Ok(price));
        }
    }

    #[test]
    fn fractional_amount_truncates_toward_zero() {
        let d = discount("1", DiscountKind::Amount, 0.5);
        assert_eq!(apply_discount(10, &d), Ok(9));

        let d = discount("1", DiscountKind::Amount, 10.5);
        assert_eq!(apply_discount(10, &d), Ok(0));
    }

    #[test]
    fn absurd_values_overflow() {
        let d = discount("1", DiscountKind::Amount, -1e300);
        assert_eq!(apply_discount(10, &d), Err(PricingError::TotalOverflow));
    }

    #[test]
    fn book_keeps_last_discount_per_article() {
        let book = DiscountBook::index(vec![
            discount("1", DiscountKind::Amount, 10.0),
            discount("2", DiscountKind::Percentage, 50.0),
            discount("1", DiscountKind::Percentage, 10.0),
        ]);

        assert_eq!(book.len(), 2);
        assert_eq!(book.get("1").unwrap().kind, DiscountKind::Percentage);
        assert_eq!(book.effective_price("1", 200), Ok(180));
        assert_eq!(book.effective_price("2", 200), Ok(100));
    }

    #[test]
    fn article_without_discount_keeps_base_price() {
        let book = DiscountBook::index(vec![discount("1", DiscountKind::Amount, 10.0)]);
        assert_eq!(book.effective_price("3", 321), Ok(321));
    }
}
