//! HTTP Pricing Source
//!
//! Reads plan prices from the dashboard's plan data endpoint.

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use super::PricingSource;
use crate::config::PricingConfig;
use crate::error::{PricingError, Result};
use crate::model::{PlanId, PlanPricing};

/// Pricing source backed by `GET {base_url}{endpoint_path}/{plan_id}`
#[derive(Clone, Debug)]
pub struct HttpPricingSource {
    client: reqwest::Client,
    config: PricingConfig,
}

impl HttpPricingSource {
    /// Create a source with its own HTTP client
    pub fn new(config: PricingConfig) -> Result<Self> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Create a source sharing an existing HTTP client
    pub const fn with_client(client: reqwest::Client, config: PricingConfig) -> Self {
        Self { client, config }
    }

    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PricingSource for HttpPricingSource {
    async fn plan_pricing(&self, plan: &PlanId) -> Result<Option<PlanPricing>> {
        let url = self.config.endpoint_for(plan)?;
        tracing::debug!(%url, "requesting plan data");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PricingError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        PlanPricing::from_json(&body)
    }

    fn name(&self) -> &str {
        "HttpPricingSource"
    }
}
