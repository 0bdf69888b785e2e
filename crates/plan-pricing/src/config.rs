//! Pricing Configuration

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};
use crate::model::PlanId;

/// Plan pricing form configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Origin the pricing endpoint is served from
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Endpoint path; the plan id is appended as the final segment
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,

    /// Prefix put in front of formatted totals
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,

    /// Total text shown while no valid price is known
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Message of the notice raised when a plan has no price for the user
    #[serde(default = "default_profile_notice")]
    pub profile_notice: String,

    /// Request timeout in seconds (ignored on wasm32, the browser owns timeouts)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8084".into()
}

fn default_endpoint_path() -> String {
    "/dashboard/plan-data/json".into()
}

fn default_currency_prefix() -> String {
    "R ".into()
}

fn default_placeholder() -> String {
    "-".into()
}

fn default_profile_notice() -> String {
    "Update your profile before you can subscribe".into()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint_path: default_endpoint_path(),
            currency_prefix: default_currency_prefix(),
            placeholder: default_placeholder(),
            profile_notice: default_profile_notice(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PricingConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_endpoint_path(mut self, endpoint_path: impl Into<String>) -> Self {
        self.endpoint_path = endpoint_path.into();
        self
    }

    #[must_use]
    pub fn with_currency_prefix(mut self, currency_prefix: impl Into<String>) -> Self {
        self.currency_prefix = currency_prefix.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_profile_notice(mut self, profile_notice: impl Into<String>) -> Self {
        self.profile_notice = profile_notice.into();
        self
    }

    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Pricing endpoint URL for a plan. The plan id is percent-encoded as a
    /// single path segment.
    pub fn endpoint_for(&self, plan: &PlanId) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PricingError::Config(format!("invalid base url {:?}: {e}", self.base_url)))?;

        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                PricingError::Config(format!("base url {:?} cannot carry a path", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .extend(self.endpoint_path.split('/').filter(|s| !s.is_empty()))
                .push(plan.as_str());
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.currency_prefix, "R ");
        assert_eq!(config.placeholder, "-");
        assert_eq!(config.endpoint_path, "/dashboard/plan-data/json");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: PricingConfig =
            serde_json::from_str(r#"{"base_url": "https://example.com", "currency_prefix": "$"}"#)
                .unwrap();
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.currency_prefix, "$");
        assert_eq!(config.placeholder, "-");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_endpoint_for() {
        let config = PricingConfig::default().with_base_url("https://shop.example.com");
        let plan = PlanId::new("gold-12").unwrap();
        assert_eq!(
            config.endpoint_for(&plan).unwrap().as_str(),
            "https://shop.example.com/dashboard/plan-data/json/gold-12"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = PricingConfig::default().with_base_url("https://example.com/app/");
        let plan = PlanId::new("7").unwrap();
        assert_eq!(
            config.endpoint_for(&plan).unwrap().as_str(),
            "https://example.com/app/dashboard/plan-data/json/7"
        );
    }

    #[test]
    fn test_endpoint_encodes_plan_id() {
        let config = PricingConfig::default();
        let plan = PlanId::new("a/b c").unwrap();
        assert_eq!(
            config.endpoint_for(&plan).unwrap().as_str(),
            "http://localhost:8084/dashboard/plan-data/json/a%2Fb%20c"
        );
    }

    #[test]
    fn test_endpoint_invalid_base() {
        let config = PricingConfig::default().with_base_url("not a url");
        let plan = PlanId::new("gold").unwrap();
        assert!(matches!(
            config.endpoint_for(&plan),
            Err(PricingError::Config(_))
        ));

        let config = PricingConfig::default().with_base_url("mailto:billing@example.com");
        assert!(matches!(
            config.endpoint_for(&plan),
            Err(PricingError::Config(_))
        ));
    }
}
