//! Pricing Sources
//!
//! Abstractions and implementations for looking up a plan's price.

mod http;
mod mock;

pub use http::HttpPricingSource;
pub use mock::{MockPricingSource, MockResponse};

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{PlanId, PlanPricing, PricingLookup};

/// Pricing source trait (Strategy pattern)
///
/// `Ok(None)` means the plan exists but has no price configured for the
/// current user.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PricingSource {
    /// Get the price of a plan
    async fn plan_pricing(&self, plan: &PlanId) -> Result<Option<PlanPricing>>;

    /// Source name
    fn name(&self) -> &str;
}

/// Look up a plan's price, folding every failure into
/// [`PricingLookup::Failed`].
pub async fn lookup<S>(source: &S, plan: &PlanId) -> PricingLookup
where
    S: PricingSource + ?Sized,
{
    match source.plan_pricing(plan).await {
        Ok(Some(pricing)) => {
            tracing::debug!(plan = %plan, price = %pricing.price, source = source.name(), "plan priced");
            PricingLookup::Priced(pricing)
        }
        Ok(None) => {
            tracing::debug!(plan = %plan, source = source.name(), "plan has no price for this user");
            PricingLookup::NotConfigured
        }
        Err(err) => {
            tracing::warn!(plan = %plan, source = source.name(), error = %err, "error fetching plan details");
            PricingLookup::Failed(err)
        }
    }
}
