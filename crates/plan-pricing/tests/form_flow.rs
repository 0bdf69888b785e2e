//! End-to-end form behaviour over HTTP.

use plan_pricing::{
    FailureKind, HttpPricingSource, InMemoryFormView, PlanPriceFormController, PricingConfig,
    SelectionOutcome,
};
use rust_decimal_macros::dec;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn pricing_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboard/plan-data/json/basic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "price": 100.00 })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dashboard/plan-data/json/premium"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dashboard/plan-data/json/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    server
}

fn form(
    server: &MockServer,
    plan: &str,
    period: &str,
) -> PlanPriceFormController<HttpPricingSource, InMemoryFormView> {
    let config = PricingConfig::default().with_base_url(server.uri());
    let source = HttpPricingSource::new(config.clone()).unwrap();
    PlanPriceFormController::new(source, InMemoryFormView::new(plan, period), config)
}

#[tokio::test]
async fn test_subscribe_flow() {
    let server = pricing_server().await;
    let form = form(&server, "basic", "3");
    assert!(!form.view().submit_enabled());

    let outcome = form.on_selection_changed().await;
    assert_eq!(outcome, SelectionOutcome::Priced { total: dec!(300) });
    assert_eq!(form.view().total_text(), "R 300.00");
    assert!(form.view().submit_enabled());

    form.view().select_period("6");
    form.on_selection_changed().await;
    assert_eq!(form.view().total_text(), "R 600.00");
    assert!(form.view().submit_enabled());
}

#[tokio::test]
async fn test_unpriced_plan_asks_for_profile() {
    let server = pricing_server().await;
    let form = form(&server, "basic", "1");
    form.on_selection_changed().await;

    form.view().select_plan("premium");
    let outcome = form.on_selection_changed().await;

    assert!(outcome.notice().is_some());
    assert_eq!(form.view().total_text(), "-");
    assert!(!form.view().submit_enabled());
}

#[tokio::test]
async fn test_server_error_shows_placeholder() {
    let server = pricing_server().await;
    let form = form(&server, "broken", "3");

    let outcome = form.on_selection_changed().await;

    assert_eq!(
        outcome,
        SelectionOutcome::Unavailable {
            kind: FailureKind::Transport
        }
    );
    assert!(outcome.notice().is_none());
    assert_eq!(form.display_state().total_text, "-");
    assert!(!form.display_state().submit_enabled);
}

#[tokio::test]
async fn test_custom_currency() {
    let server = pricing_server().await;
    let config = PricingConfig::default()
        .with_base_url(server.uri())
        .with_currency_prefix("$")
        .with_placeholder("n/a");
    let source = HttpPricingSource::new(config.clone()).unwrap();
    let form = PlanPriceFormController::new(source, InMemoryFormView::new("basic", "2"), config);

    assert_eq!(form.view().total_text(), "n/a");
    form.on_selection_changed().await;
    assert_eq!(form.view().total_text(), "$200.00");
}
