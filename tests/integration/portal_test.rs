//! Integration tests for portal creation and health endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn create_body(client_name: &str) -> serde_json::Value {
    json!({
        "clientName": client_name,
        "clientEmail": "contact@example.com",
        "password": "s3cret-pass",
        "fileUrl": "https://x.supabase.co/storage/v1/object/public/client-files/acme/q3.pdf",
    })
}

#[tokio::test]
async fn create_portal_returns_derived_slug() {
    let app = TestApp::new();

    let res = app
        .request("POST", "/api/admin/portals", Some(create_body("Acme Corp")))
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["slug"], "acme-corp");
}

#[tokio::test]
async fn create_portal_with_missing_field_returns_400() {
    let app = TestApp::new();

    let res = app
        .request(
            "POST",
            "/api/admin/portals",
            Some(json!({
                "clientName": "Acme Corp",
                "clientEmail": "contact@example.com",
                "password": "s3cret-pass",
            })),
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["error"].is_string());
}

#[tokio::test]
async fn create_portal_with_empty_password_returns_400() {
    let app = TestApp::new();

    let res = app
        .request(
            "POST",
            "/api/admin/portals",
            Some(json!({
                "clientName": "Acme Corp",
                "clientEmail": "contact@example.com",
                "password": "",
                "fileUrl": "https://x.supabase.co/storage/v1/object/public/client-files/acme/q3.pdf",
            })),
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_client_name_gets_suffixed_slug() {
    let app = TestApp::new();

    let first = app
        .request("POST", "/api/admin/portals", Some(create_body("Acme Corp")))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["slug"], "acme-corp");

    let second = app
        .request("POST", "/api/admin/portals", Some(create_body("Acme Corp")))
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["slug"], "acme-corp-1");
}

#[tokio::test]
async fn client_name_with_punctuation_is_slugified() {
    let app = TestApp::new();

    let res = app
        .request(
            "POST",
            "/api/admin/portals",
            Some(create_body("Jane O'Brien & Sons!")),
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["slug"], "jane-o-brien-sons");
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = TestApp::new();

    let res = app.request("GET", "/api/health", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert!(res.body["version"].is_string());
}
