//! # plan-pricing
//!
//! Price lookup and total display for the subscription form.
//!
//! The form has a plan selector, a billing period selector, a total display
//! and a subscribe button. Whenever either selector changes, the controller
//! asks the pricing endpoint for the plan's price and either shows
//! `price × periods` and enables the button, or shows a placeholder and
//! disables it.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  select change ──► GET /dashboard/plan-data/json/{plan_id}   │
//! ├──────────────────────────────────────────────────────────────┤
//! │  {"price": 100.00}, period 3  →  "R 300.00"   [Subscribe]    │
//! │  {} / {"price": null}         →  "-"          [disabled]     │
//! │                                  + "Update your profile..."  │
//! │  HTTP 500 / bad JSON          →  "-"          [disabled]     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plan_pricing::{HttpPricingSource, InMemoryFormView, PlanPriceFormController, PricingConfig};
//!
//! let config = PricingConfig::default().with_base_url("https://shop.example.com");
//! let source = HttpPricingSource::new(config.clone())?;
//! let controller = PlanPriceFormController::new(source, InMemoryFormView::new("gold", "3"), config);
//!
//! if let Some(notice) = controller.on_selection_changed().await.notice() {
//!     show_dialog(notice.user_message());
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod source;

pub use config::PricingConfig;
pub use error::{FailureKind, PricingError, Result};
pub use form::{FormView, InMemoryFormView, PlanPriceFormController};
pub use model::{
    DisplayState, Notice, PlanId, PlanPricing, PlanSelection, PricingLookup, SelectionOutcome,
    format_amount,
};
pub use source::{HttpPricingSource, MockPricingSource, MockResponse, PricingSource};
