//! Checkout Module
//!
//! The `POST /checkout` surface:
//! - Wire models (request / response bodies)
//! - `CheckoutPlan`, the decoded request that drives the pricing core
//! - The axum handler

pub mod handlers;
pub mod models;
pub mod plan;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CheckoutRequest, CheckoutResponse};
pub use plan::CheckoutPlan;
