//! Form View
//!
//! The four form elements the controller reads from and writes to.

use std::sync::{Mutex, PoisonError};

/// Access to the plan selector, period selector, total display and
/// subscribe button.
///
/// Setters take `&self`: UI handles are mutated through shared references.
pub trait FormView {
    /// Current value of the plan selector
    fn plan_id(&self) -> String;

    /// Current raw value of the period selector
    fn period(&self) -> String;

    fn set_total_text(&self, text: &str);

    fn set_submit_enabled(&self, enabled: bool);
}

#[derive(Debug, Default)]
struct FormFields {
    plan_id: String,
    period: String,
    total_text: String,
    submit_enabled: bool,
}

/// Headless form, for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct InMemoryFormView {
    fields: Mutex<FormFields>,
}

impl InMemoryFormView {
    pub fn new(plan_id: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            fields: Mutex::new(FormFields {
                plan_id: plan_id.into(),
                period: period.into(),
                ..FormFields::default()
            }),
        }
    }

    pub fn select_plan(&self, plan_id: impl Into<String>) {
        self.with_fields(|f| f.plan_id = plan_id.into());
    }

    pub fn select_period(&self, period: impl Into<String>) {
        self.with_fields(|f| f.period = period.into());
    }

    pub fn total_text(&self) -> String {
        self.with_fields(|f| f.total_text.clone())
    }

    pub fn submit_enabled(&self) -> bool {
        self.with_fields(|f| f.submit_enabled)
    }

    fn with_fields<T>(&self, f: impl FnOnce(&mut FormFields) -> T) -> T {
        let mut fields = self.fields.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut fields)
    }
}

impl FormView for InMemoryFormView {
    fn plan_id(&self) -> String {
        self.with_fields(|f| f.plan_id.clone())
    }

    fn period(&self) -> String {
        self.with_fields(|f| f.period.clone())
    }

    fn set_total_text(&self, text: &str) {
        self.with_fields(|f| f.total_text = text.to_string());
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.with_fields(|f| f.submit_enabled = enabled);
    }
}
