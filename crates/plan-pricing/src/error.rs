//! Error Types for Plan Pricing

use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PricingError>;

/// Coarse classification of a failed lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Network error or non-success HTTP status
    Transport,
    /// Body is not valid JSON or does not carry a usable price
    Parse,
    /// Form values could not be turned into a selection
    Selection,
    /// Client misconfiguration (e.g. unusable base URL)
    Config,
}

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status: {0}")]
    Status(u16),

    #[error("Malformed pricing response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid price in pricing response: {0}")]
    InvalidPrice(Decimal),

    #[error("Invalid plan selection: {0}")]
    InvalidSelection(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PricingError {
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) | Self::Status(_) => FailureKind::Transport,
            Self::Parse(_) | Self::InvalidPrice(_) => FailureKind::Parse,
            Self::InvalidSelection(_) => FailureKind::Selection,
            Self::Config(_) => FailureKind::Config,
        }
    }

    /// Check if this error is retryable
    ///
    /// Nothing in this crate retries; hosts may use this to decide whether to
    /// offer the user another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_timeout() || err.is_request(),
            Self::Status(status) => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Get user-friendly message
    pub const fn user_message(&self) -> &str {
        match self {
            Self::Transport(_) | Self::Status(_) => "Plan pricing is currently unavailable. Please try again.",
            Self::Parse(_) | Self::InvalidPrice(_) => "The plan price could not be read.",
            Self::InvalidSelection(_) => "Select a plan and a billing period.",
            Self::Config(_) => "Service configuration error.",
        }
    }
}
