//! DOM binding tests; run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use plan_pricing::FormView;
use plan_pricing_web::{DomFormView, DomIds};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlButtonElement;

wasm_bindgen_test_configure!(run_in_browser);

const FORM: &str = r#"
    <select id="subscription_plan"><option value="gold" selected>Gold</option></select>
    <select id="period">
        <option value="3" selected>3 months</option>
        <option value="6">6 months</option>
    </select>
    <span id="total_amount_display"></span>
    <button id="subscribe_button">Subscribe</button>
"#;

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn test_reads_and_writes_form() {
    let document = document();
    document.body().unwrap().set_inner_html(FORM);

    let view = DomFormView::from_document(&document, &DomIds::default()).unwrap();
    assert_eq!(view.plan_id(), "gold");
    assert_eq!(view.period(), "3");

    view.set_total_text("R 300.00");
    view.set_submit_enabled(false);

    let total = document.get_element_by_id("total_amount_display").unwrap();
    assert_eq!(total.text_content().as_deref(), Some("R 300.00"));

    let button: HtmlButtonElement = document
        .get_element_by_id("subscribe_button")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(button.disabled());
}

#[wasm_bindgen_test]
fn test_missing_element() {
    let document = document();
    document.body().unwrap().set_inner_html("<p>no form here</p>");

    assert!(DomFormView::from_document(&document, &DomIds::default()).is_err());
}

#[wasm_bindgen_test]
fn test_mount_requires_form() {
    document()
        .body()
        .unwrap()
        .set_inner_html("<p>no form here</p>");

    assert!(plan_pricing_web::mount(&DomIds::default()).is_err());
}
