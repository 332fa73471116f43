//! Checkout Wire Models
//!
//! Request and response bodies of `POST /checkout`.

use crate::pricing::models::{Article, Cart, CartTotal, DeliveryFeeTier, Discount};
use serde::{Deserialize, Serialize};

/// Request body as received.
///
/// Every key is optional at this level so that a missing `articles` or
/// `carts` can be reported with the service's own message instead of a
/// decoder error. `discounts` and `delivery_fees` enable their pricing stage
/// only when present.
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutRequest {
    pub articles: Option<Vec<Article>>,
    pub carts: Option<Vec<Cart>>,
    pub discounts: Option<Vec<Discount>>,
    pub delivery_fees: Option<Vec<DeliveryFeeTier>>,
}

/// Successful response body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutResponse {
    pub carts: Vec<CartTotal>,
}
