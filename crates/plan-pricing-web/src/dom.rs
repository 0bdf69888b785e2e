//! DOM Form View
//!
//! [`FormView`] over the subscribe page's select, output and button elements.

use plan_pricing::FormView;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlSelectElement};

/// Element ids of the subscribe form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomIds {
    pub plan: String,
    pub period: String,
    pub total: String,
    pub subscribe: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            plan: "subscription_plan".into(),
            period: "period".into(),
            total: "total_amount_display".into(),
            subscribe: "subscribe_button".into(),
        }
    }
}

pub struct DomFormView {
    plan: HtmlSelectElement,
    period: HtmlSelectElement,
    total: Element,
    subscribe: HtmlButtonElement,
}

impl DomFormView {
    /// Resolve the form elements once, up front
    pub fn from_document(document: &Document, ids: &DomIds) -> Result<Self, JsValue> {
        Ok(Self {
            plan: element(document, &ids.plan)?,
            period: element(document, &ids.period)?,
            total: element(document, &ids.total)?,
            subscribe: element(document, &ids.subscribe)?,
        })
    }

    pub const fn plan_select(&self) -> &HtmlSelectElement {
        &self.plan
    }

    pub const fn period_select(&self) -> &HtmlSelectElement {
        &self.period
    }
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has an unexpected type")))
}

impl FormView for DomFormView {
    fn plan_id(&self) -> String {
        self.plan.value()
    }

    fn period(&self) -> String {
        self.period.value()
    }

    fn set_total_text(&self, text: &str) {
        self.total.set_text_content(Some(text));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.subscribe.set_disabled(!enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids() {
        let ids = DomIds::default();
        assert_eq!(ids.plan, "subscription_plan");
        assert_eq!(ids.period, "period");
        assert_eq!(ids.total, "total_amount_display");
        assert_eq!(ids.subscribe, "subscribe_button");
    }
}
