//! Cart total calculation

use super::{catalog::Catalog, discount::DiscountBook, models::Cart};
use crate::error::PricingError;

/// Sums `effective_price × quantity` over the items of `cart`.
///
/// Without a discount book every item is charged at its catalog price. An
/// item pointing at an article missing from `catalog` fails the whole cart.
pub fn cart_total(
    cart: &Cart,
    catalog: &Catalog,
    discounts: Option<&DiscountBook>,
) -> Result<i64, PricingError> {
    cart.items.iter().try_fold(0i64, |total, item| {
        let entry = catalog.lookup(&item.article_id)?;
        let unit_price = match discounts {
            Some(book) => book.effective_price(&item.article_id, entry.price)?,
            None => entry.price,
        };

        let line = unit_price
            .checked_mul(i64::from(item.quantity))
            .ok_or(PricingError::TotalOverflow)?;

        tracing::trace!(
            cart_id = %cart.id,
            article_id = %item.article_id,
            unit_price,
            quantity = item.quantity,
            "line priced"
        );

        total.checked_add(line).ok_or(PricingError::TotalOverflow)
    })
}
