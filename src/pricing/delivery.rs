//! Delivery fee resolution

use super::models::DeliveryFeeTier;
use crate::error::PricingError;

/// Ordered delivery fee tiers as submitted.
///
/// Tiers are searched in the order given and are not sorted; callers are
/// expected to supply ranges that do not overlap and together cover every
/// total they will price.
#[derive(Debug, Clone, Default)]
pub struct FeeSchedule {
    tiers: Vec<DeliveryFeeTier>,
}

impl FeeSchedule {
    pub fn new(tiers: Vec<DeliveryFeeTier>) -> Self {
        Self { tiers }
    }

    /// First tier whose range contains `total`.
    pub fn tier_for(&self, total: i64) -> Option<&DeliveryFeeTier> {
        self.tiers
            .iter()
            .find(|tier| tier.eligible_transaction_volume.contains(total))
    }

    /// Fee owed on a cart whose pre-fee total is `total`.
    pub fn fee_for(&self, total: i64) -> Result<i64, PricingError> {
        self.tier_for(total)
            .map(|tier| tier.price)
            .ok_or(PricingError::NoMatchingFeeTier { total })
    }

    /// `total` plus its delivery fee.
    pub fn apply(&self, total: i64) -> Result<i64, PricingError> {
        let fee = self.fee_for(total)?;
        tracing::trace!(total, fee, "delivery fee resolved");
        total.checked_add(fee).ok_or(PricingError::TotalOverflow)
    }

    pub fn tiers(&self) -> &[DeliveryFeeTier] {
        &self.tiers
    }
}
