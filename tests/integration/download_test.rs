//! Integration tests for the download redemption endpoint.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use crate::helpers::{FakeObjectStore, TestApp};

const FILE_URL: &str =
    "https://x.supabase.co/storage/v1/object/public/client-files/acme/q3.pdf";

#[tokio::test]
async fn redeem_with_correct_password_returns_signed_grant() {
    let app = TestApp::with_objects(FakeObjectStore::with_q3_listing());
    app.seed_portal("acme-corp", "s3cret-pass", FILE_URL, None);

    let res = app
        .request(
            "POST",
            "/api/download/acme-corp",
            Some(json!({ "password": "s3cret-pass" })),
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["clientName"], "Acme Corp");
    assert_eq!(res.body["fileName"], "q3.pdf");
    assert_eq!(res.body["fileSize"], 2048);

    let url = res.body["fileUrl"].as_str().unwrap();
    assert!(url.contains("/object/sign/client-files/acme/q3.pdf"));
    assert_ne!(url, FILE_URL);
}

#[tokio::test]
async fn redeem_with_wrong_password_returns_401() {
    let app = TestApp::new();
    app.seed_portal("acme-corp", "s3cret-pass", FILE_URL, None);

    let res = app
        .request(
            "POST",
            "/api/download/acme-corp",
            Some(json!({ "password": "wrong" })),
        )
        .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["error"], "Invalid password");
}

#[tokio::test]
async fn redeem_with_missing_password_returns_400() {
    let app = TestApp::new();
    app.seed_portal("acme-corp", "s3cret-pass", FILE_URL, None);

    let res = app
        .request("POST", "/api/download/acme-corp", Some(json!({})))
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn redeem_unknown_slug_returns_404() {
    let app = TestApp::new();

    let res = app
        .request(
            "POST",
            "/api/download/no-such-portal",
            Some(json!({ "password": "anything" })),
        )
        .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "Invalid download link");
}

#[tokio::test]
async fn redeem_expired_portal_returns_410_even_with_correct_password() {
    let app = TestApp::new();
    app.seed_portal(
        "acme-corp",
        "s3cret-pass",
        FILE_URL,
        Some(Utc::now() - Duration::hours(1)),
    );

    let res = app
        .request(
            "POST",
            "/api/download/acme-corp",
            Some(json!({ "password": "s3cret-pass" })),
        )
        .await;

    assert_eq!(res.status, StatusCode::GONE);
    assert_eq!(res.body["error"], "This download link has expired");
}

#[tokio::test]
async fn redeem_with_future_expiry_still_succeeds() {
    let app = TestApp::with_objects(FakeObjectStore::with_q3_listing());
    app.seed_portal(
        "acme-corp",
        "s3cret-pass",
        FILE_URL,
        Some(Utc::now() + Duration::days(7)),
    );

    let res = app
        .request(
            "POST",
            "/api/download/acme-corp",
            Some(json!({ "password": "s3cret-pass" })),
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn metadata_failure_degrades_to_zero_size() {
    let app = TestApp::with_objects(FakeObjectStore {
        fail_list: true,
        ..FakeObjectStore::default()
    });
    app.seed_portal("acme-corp", "s3cret-pass", FILE_URL, None);

    let res = app
        .request(
            "POST",
            "/api/download/acme-corp",
            Some(json!({ "password": "s3cret-pass" })),
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["fileSize"], 0);
    assert!(
        res.body["fileUrl"]
            .as_str()
            .unwrap()
            .contains("/object/sign/")
    );
}

#[tokio::test]
async fn signing_failure_returns_sanitized_500() {
    let app = TestApp::with_objects(FakeObjectStore {
        fail_sign: true,
        ..FakeObjectStore::default()
    });
    app.seed_portal("acme-corp", "s3cret-pass", FILE_URL, None);

    let res = app
        .request(
            "POST",
            "/api/download/acme-corp",
            Some(json!({ "password": "s3cret-pass" })),
        )
        .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["error"], "Internal server error");
}
