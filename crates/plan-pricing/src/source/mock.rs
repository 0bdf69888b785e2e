//! Mock Pricing Source
//!
//! For testing and demo purposes. Answers from a fixed table of plans.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::PricingSource;
use crate::error::{PricingError, Result};
use crate::model::{PlanId, PlanPricing};

/// Canned answer for one plan
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockResponse {
    Price(Decimal),
    /// Plan known but not priced for this user
    NoPrice,
    /// Endpoint answered with a non-success status
    Status(u16),
    /// Endpoint answered with a body that is not JSON
    Malformed,
}

/// Mock pricing source with a static plan table.
/// Plans missing from the table answer like a 404.
#[derive(Debug, Default)]
pub struct MockPricingSource {
    responses: Mutex<HashMap<String, MockResponse>>,
    requests: AtomicUsize,
}

impl MockPricingSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_price(self, plan: &str, price: Decimal) -> Self {
        self.with_response(plan, MockResponse::Price(price))
    }

    #[must_use]
    pub fn with_response(self, plan: &str, response: MockResponse) -> Self {
        self.set_response(plan, response);
        self
    }

    /// Change the answer for a plan (e.g. after the user completes their profile)
    pub fn set_response(&self, plan: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(plan.to_string(), response);
    }

    /// Number of lookups served so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PricingSource for MockPricingSource {
    async fn plan_pricing(&self, plan: &PlanId) -> Result<Option<PlanPricing>> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        let response = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(plan.as_str())
            .cloned();

        match response {
            Some(MockResponse::Price(price)) => PlanPricing::new(price).map(Some),
            Some(MockResponse::NoPrice) => Ok(None),
            Some(MockResponse::Status(status)) => Err(PricingError::Status(status)),
            Some(MockResponse::Malformed) => PlanPricing::from_json(b"<!doctype html>"),
            None => Err(PricingError::Status(404)),
        }
    }

    fn name(&self) -> &str {
        "MockPricingSource"
    }
}
