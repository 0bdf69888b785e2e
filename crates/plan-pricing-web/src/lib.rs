//! plan-pricing Web Binding
//!
//! Binds the plan pricing form controller to the subscribe page DOM.

mod dom;

pub use dom::{DomFormView, DomIds};

use std::rc::Rc;

use plan_pricing::{HttpPricingSource, Notice, PlanPriceFormController, PricingConfig};
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlSelectElement};

type Controller = PlanPriceFormController<HttpPricingSource, DomFormView>;

/// WASM entry point; mounts the form once, using the default element ids
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount(&DomIds::default())
}

/// Attach the controller to the form identified by `ids`.
///
/// Each call adds its own `change` listeners; mount a form only once.
pub fn mount(ids: &DomIds) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = PricingConfig::default().with_base_url(window.location().origin()?);
    let source =
        HttpPricingSource::new(config.clone()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let view = DomFormView::from_document(&document, ids)?;

    let controller = Rc::new(PlanPriceFormController::new(source, view, config));
    listen(controller.view().plan_select(), &controller)?;
    listen(controller.view().period_select(), &controller)?;

    tracing::debug!(?ids, "plan pricing form mounted");
    Ok(())
}

fn listen(select: &HtmlSelectElement, controller: &Rc<Controller>) -> Result<(), JsValue> {
    let controller = Rc::clone(controller);
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = controller.on_selection_changed().await;
            if let Some(notice) = outcome.notice() {
                present(notice);
            }
        });
    });

    select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    on_change.forget();
    Ok(())
}

fn present(notice: &Notice) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(message = notice.user_message(), "no window to present notice");
        return;
    };
    if let Err(err) = window.alert_with_message(notice.user_message()) {
        tracing::warn!(error = ?err, message = notice.user_message(), "failed to present notice");
    }
}
