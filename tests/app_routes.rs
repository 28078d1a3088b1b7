mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use flipr::routes::app_router;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_index_page_shows_base_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("https://flipr.sh"));
}

#[tokio::test]
async fn test_shorten_then_redirect_through_full_router() {
    let server = common::create_test_server(common::create_test_state());

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://www.rust-lang.org/learn" }))
        .await
        .json::<serde_json::Value>();

    let code = created["short_code"].as_str().unwrap();
    let response = server.get(&format!("/{}", code)).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.rust-lang.org/learn");
}

#[tokio::test]
async fn test_api_routes_take_precedence_over_codes() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_responses_carry_service_headers() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/api/health").await;

    assert_eq!(response.header("x-flipr-version"), env!("CARGO_PKG_VERSION"));
    assert_eq!(
        response.header("x-flipr-vcs-ref"),
        flipr::api::middleware::headers::VCS_REF
    );
    assert_eq!(
        response.header("access-control-allow-origin"),
        common::BASE_URL
    );
    assert_eq!(
        response.header("access-control-allow-methods"),
        "GET, POST, OPTIONS"
    );
    assert_eq!(
        response.header("access-control-allow-headers"),
        "Content-Type"
    );
}

#[tokio::test]
async fn test_not_found_page_carries_service_headers() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    assert_eq!(response.header("x-flipr-version"), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_shorten_preflight() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .method(axum::http::Method::OPTIONS, "/api/shorten")
        .await;

    assert_eq!(response.status_code(), 204);
    assert_eq!(
        response.header("access-control-allow-origin"),
        common::BASE_URL
    );
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/static/style.css").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_url_with_control_characters_still_redirects() {
    let server = common::create_test_server(common::create_test_state());

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    created.assert_status_ok();

    let created = created.json::<serde_json::Value>();
    assert_eq!(created["original_url"], "https://example.com/ab");

    let code = created["short_code"].as_str().unwrap();
    let response = server.get(&format!("/{}", code)).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/ab");
}

#[tokio::test]
async fn test_trailing_slash_resolves_short_code() {
    let state = common::create_test_state();
    state
        .shortener
        .shorten("https://example.com/target", Some("trail"))
        .unwrap();
    let app = app_router(state, "public");

    let response = app
        .oneshot(Request::get("/trail/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/target"
    );
}

#[tokio::test]
async fn test_trailing_slash_on_api_route() {
    let app = app_router(common::create_test_state(), "public");

    let response = app
        .oneshot(Request::get("/api/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["x-flipr-version"],
        env!("CARGO_PKG_VERSION")
    );
}
