//! Domain Models
//!
//! Plan selection, pricing lookup results and the derived display state.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::error::{FailureKind, PricingError, Result};

/// Opaque subscription plan identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PricingError::InvalidSelection("no plan selected".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The plan and number of billing periods currently selected on the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanSelection {
    pub plan_id: PlanId,

    /// Number of billing periods (always positive)
    pub period_count: u32,
}

impl PlanSelection {
    pub fn new(plan_id: PlanId, period_count: u32) -> Result<Self> {
        if period_count == 0 {
            return Err(PricingError::InvalidSelection(
                "period count must be positive".into(),
            ));
        }
        Ok(Self {
            plan_id,
            period_count,
        })
    }

    /// Build a selection from the raw select values
    pub fn parse(plan_raw: &str, period_raw: &str) -> Result<Self> {
        let plan_id = PlanId::new(plan_raw)?;
        let period_count = period_raw.trim().parse::<u32>().map_err(|e| {
            PricingError::InvalidSelection(format!("period {period_raw:?} is not a count: {e}"))
        })?;
        Self::new(plan_id, period_count)
    }
}

/// Price of a plan for the current user, as returned by the pricing endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPricing {
    /// Price per billing period
    pub price: Decimal,
}

/// Wire shape of the endpoint body; a missing or null price means the plan
/// has no price configured for this user.
#[derive(Deserialize)]
struct PricingBody {
    #[serde(default)]
    price: Option<Decimal>,
}

impl PlanPricing {
    pub fn new(price: Decimal) -> Result<Self> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(PricingError::InvalidPrice(price));
        }
        Ok(Self { price })
    }

    /// Decode an endpoint body.
    ///
    /// Returns `Ok(None)` for an empty body, `null`, `{}` or
    /// `{"price": null}`.
    pub fn from_json(body: &[u8]) -> Result<Option<Self>> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let parsed: Option<PricingBody> = serde_json::from_slice(body)?;
        parsed
            .and_then(|body| body.price)
            .map(Self::new)
            .transpose()
    }

    /// Total for the given number of billing periods
    pub fn total_for(&self, period_count: u32) -> Result<Decimal> {
        self.price
            .checked_mul(Decimal::from(period_count))
            .ok_or(PricingError::InvalidPrice(self.price))
    }
}

/// Outcome of a single pricing lookup. Never an unhandled fault.
#[derive(Debug)]
pub enum PricingLookup {
    /// The plan has a price for this user
    Priced(PlanPricing),

    /// The plan exists but has no price configured for this user
    NotConfigured,

    /// Transport, status, or parse failure
    Failed(PricingError),
}

impl PricingLookup {
    pub const fn pricing(&self) -> Option<&PlanPricing> {
        match self {
            Self::Priced(pricing) => Some(pricing),
            _ => None,
        }
    }
}

/// Format an amount with the currency prefix and exactly two decimals
pub fn format_amount(amount: Decimal, currency_prefix: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{currency_prefix}{rounded:.2}")
}

/// What the form currently shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    pub total_text: String,
    pub submit_enabled: bool,
}

impl DisplayState {
    /// Placeholder total with submission disabled
    pub fn unavailable(config: &PricingConfig) -> Self {
        Self {
            total_text: config.placeholder.clone(),
            submit_enabled: false,
        }
    }

    pub fn priced(total: Decimal, config: &PricingConfig) -> Self {
        Self {
            total_text: format_amount(total, &config.currency_prefix),
            submit_enabled: true,
        }
    }
}

/// User-facing event for the host application to present
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The plan has no price for this user until their profile is complete
    CompleteProfile { message: String },
}

impl Notice {
    pub fn complete_profile(config: &PricingConfig) -> Self {
        Self::CompleteProfile {
            message: config.profile_notice.clone(),
        }
    }

    pub fn user_message(&self) -> &str {
        match self {
            Self::CompleteProfile { message } => message,
        }
    }
}

/// Result of handling one selection change
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Total displayed, submission enabled
    Priced { total: Decimal },

    /// No price for this user; placeholder shown and the notice should be presented
    NoPrice(Notice),

    /// Lookup failed; placeholder shown
    Unavailable { kind: FailureKind },

    /// Form values were unusable; placeholder shown, no lookup made
    InvalidSelection,

    /// A newer selection change started while this lookup was in flight;
    /// display left to the newer one
    Superseded,
}

impl SelectionOutcome {
    pub const fn notice(&self) -> Option<&Notice> {
        match self {
            Self::NoPrice(notice) => Some(notice),
            _ => None,
        }
    }

    pub const fn submit_enabled(&self) -> bool {
        matches!(self, Self::Priced { .. })
    }
}
