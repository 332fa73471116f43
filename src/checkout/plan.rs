//! Checkout Plan
//!
//! A `CheckoutRequest` is decoded once into a `CheckoutPlan`, which states
//! up front which optional stages run. Pricing then never has to look at the
//! raw payload again.
//!
//! ```text
//! Catalog::index ──► cart_total (+ DiscountBook) ──► FeeSchedule::apply ──► CartTotal
//! ```

use super::models::{CheckoutRequest, CheckoutResponse};
use crate::error::CheckoutError;
use crate::pricing::{cart_total, Cart, CartTotal, Catalog, DiscountBook, FeeSchedule};

/// Everything needed to price one request.
#[derive(Debug, Clone)]
pub struct CheckoutPlan {
    pub catalog: Catalog,
    pub carts: Vec<Cart>,

    /// `None` when the request carried no `discounts` key
    pub discounts: Option<DiscountBook>,

    /// `None` when the request carried no `delivery_fees` key
    pub delivery_fees: Option<FeeSchedule>,
}

impl TryFrom<CheckoutRequest> for CheckoutPlan {
    type Error = CheckoutError;

    fn try_from(request: CheckoutRequest) -> Result<Self, Self::Error> {
        let (Some(articles), Some(carts)) = (request.articles, request.carts) else {
            return Err(CheckoutError::MissingData);
        };

        Ok(Self {
            catalog: Catalog::index(articles),
            carts,
            discounts: request.discounts.map(DiscountBook::index),
            delivery_fees: request.delivery_fees.map(FeeSchedule::new),
        })
    }
}

impl CheckoutPlan {
    /// Prices every cart in order. The first failing cart fails the request.
    pub fn price(&self) -> Result<CheckoutResponse, CheckoutError> {
        let carts = self
            .carts
            .iter()
            .map(|cart| self.price_cart(cart))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CheckoutResponse { carts })
    }

    fn price_cart(&self, cart: &Cart) -> Result<CartTotal, CheckoutError> {
        let priced = cart_total(cart, &self.catalog, self.discounts.as_ref()).and_then(|total| {
            match &self.delivery_fees {
                Some(schedule) => schedule.apply(total),
                None => Ok(total),
            }
        });

        match priced {
            Ok(total) => {
                tracing::debug!(cart_id = %cart.id, total, "cart priced");
                Ok(CartTotal {
                    id: cart.id.clone(),
                    total,
                })
            }
            Err(source) => Err(CheckoutError::Pricing {
                cart_id: cart.id.clone(),
                source,
            }),
        }
    }
}
