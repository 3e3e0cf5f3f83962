//! HTTP contract of the /api/convert endpoint.
//!
//! Gated on the `web-api` feature in the manifest; run with
//! `cargo test --features web-api`.

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use deeplinker::models::AppState;
use deeplinker::web_handlers::interfaces;

async fn post_convert(body: Value) -> (u16, Value) {
    let app_state = Arc::new(AppState::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::clone(&app_state)))
            .configure(interfaces::config),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/api/convert")
        .set_json(&body)
        .to_request();
    let response = test::call_service(&app, request).await;
    let status = response.status().as_u16();
    let body: Value = test::read_body_json(response).await;
    (status, body)
}

#[actix_web::test]
async fn convert_returns_results_in_input_order() {
    let (status, body) = post_convert(json!({
        "links": ["https://example.com/item", "https://example.com/other"],
        "platform": "tmall"
    }))
    .await;

    assert_eq!(status, 200);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0]["converted"],
        "tmall://page.tm/appLink?h5Url=https%3A%2F%2Fexample.com%2Fitem"
    );
    assert_eq!(results[0]["success"], true);
    assert_eq!(results[0]["platform"], "tmall");
    assert!(results[0].get("error").is_none());
}

#[actix_web::test]
async fn empty_links_are_rejected_with_bad_request() {
    let (status, body) = post_convert(json!({
        "links": [],
        "platform": "tmall"
    }))
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "no links provided");
}

#[actix_web::test]
async fn unknown_platform_is_rejected_with_bad_request() {
    let (status, body) = post_convert(json!({
        "links": ["https://example.com"],
        "platform": "unknown"
    }))
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "invalid platform: unknown");
}
