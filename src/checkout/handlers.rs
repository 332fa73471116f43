//! REST API handler for checkout pricing

use super::{models::*, plan::CheckoutPlan};
use crate::error::CheckoutError;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};

/// Creates routes for checkout operations
pub fn routes() -> Router {
    Router::new().route("/checkout", post(checkout))
}

/// Endpoint: POST /checkout
/// Prices every submitted cart and returns their totals.
async fn checkout(
    body: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, CheckoutError> {
    let request = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "rejected checkout body");
            return Err(CheckoutError::MalformedBody(e.body_text()));
        }
    };

    let plan = CheckoutPlan::try_from(request).inspect_err(|e| {
        tracing::warn!(error = %e, "incomplete checkout request");
    })?;

    tracing::info!(
        carts = plan.carts.len(),
        articles = plan.catalog.len(),
        discounts = plan.discounts.is_some(),
        delivery_fees = plan.delivery_fees.is_some(),
        "pricing checkout"
    );

    let response = plan.price().inspect_err(|e| {
        tracing::warn!(error = %e, "checkout pricing failed");
    })?;

    Ok(Json(response))
}
