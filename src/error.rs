//! Error Types
//!
//! `PricingError` is raised by the pure pricing core. `CheckoutError` is what
//! a request can fail with, and knows how to render itself as an HTTP
//! response.
//!
//! ```text
//! PricingError ──(cart id attached)──► CheckoutError ──► {"msg": ...} + status
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned when `articles` or `carts` is absent.
pub const MISSING_DATA_MSG: &str = "The articles and carts data must be provided";

// =============================================================================
// Pricing Error
// =============================================================================

/// Failures of the pricing computation itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A cart item references an article that is not in the catalog.
    #[error("Unknown article: {article_id}")]
    UnknownArticle { article_id: String },

    /// No delivery fee tier covers the cart total.
    #[error("No delivery fee tier matches total {total}")]
    NoMatchingFeeTier { total: i64 },

    /// Line or cart total does not fit in an `i64`.
    #[error("Cart total overflows")]
    TotalOverflow,
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Request-level failures of `POST /checkout`.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("{}", MISSING_DATA_MSG)]
    MissingData,

    /// Body is not valid JSON or a field has the wrong shape.
    #[error("{0}")]
    MalformedBody(String),

    #[error("Cart {cart_id}: {source}")]
    Pricing {
        cart_id: String,
        #[source]
        source: PricingError,
    },
}

impl CheckoutError {
    pub fn status(&self) -> StatusCode {
        match self {
            CheckoutError::MissingData | CheckoutError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            CheckoutError::Pricing { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            msg: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
