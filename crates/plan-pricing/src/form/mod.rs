//! Plan Pricing Form
//!
//! Keeps the displayed total and the subscribe button in step with the
//! selected plan and billing period.

mod controller;
mod view;

pub use controller::PlanPriceFormController;
pub use view::{FormView, InMemoryFormView};
