//! Pricing Core
//!
//! Pure, synchronous price computation. Nothing in here performs I/O:
//! - Catalog indexing (article id -> name, price)
//! - Discount application (amount / percentage)
//! - Cart totals
//! - Delivery fee tiers

pub mod cart_total;
pub mod catalog;
pub mod delivery;
pub mod discount;
pub mod models;

pub use cart_total::cart_total;
pub use catalog::{Catalog, CatalogEntry};
pub use delivery::FeeSchedule;
pub use discount::{apply_discount, DiscountBook};
pub use models::{
    Article, Cart, CartItem, CartTotal, DeliveryFeeTier, Discount, DiscountKind,
    TransactionVolume,
};
