//! Checkout Pricing Library
//!
//! Prices shopping carts against a submitted catalog, with optional
//! per-article discounts and tiered delivery fees, behind a single
//! `POST /checkout` endpoint.

// Domain modules
pub mod checkout;
pub mod error;
pub mod pricing;

// Infrastructure
pub mod config;
pub mod logging;
pub mod router;
