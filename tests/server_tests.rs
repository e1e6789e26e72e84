//! End-to-end tests of the HTTP service over a real socket.
//!
//! Run with: `cargo test --features server --test server_tests`

#![cfg(feature = "server")]

use cardnum::server::{
    GENERATE_MISSING_IIN, INVALID_IIN, ServerConfig, VALIDATE_MISSING_NUMBER, serve,
};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

/// Start the service on an ephemeral port and return its base URL.
async fn spawn_server(card_length: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let config = ServerConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        card_length,
    };
    tokio::spawn(async move { serve(listener, &config).await });
    format!("http://{addr}/api")
}

async fn get(url: &str) -> (StatusCode, Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status();
    let body = resp.json::<Value>().await.unwrap();
    (status, body)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok() {
    let base = spawn_server(16).await;
    let (status, body) = get(&format!("{base}/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

// ---------------------------------------------------------------------------
// Validate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validate_valid_number() {
    let base = spawn_server(16).await;
    let (status, body) = get(&format!("{base}/validate?number=4503495455532271")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], true);
    assert_eq!(body["major_industry_identifier"], "4");
    assert_eq!(body["issuer_identification_number"], "450349");
    assert_eq!(body["personal_account_number"], "545553227");
    assert_eq!(body["check_digit"], "1");
    assert!(body.get("number").is_none());
}

#[tokio::test]
async fn validate_invalid_number_returns_placeholder() {
    let base = spawn_server(16).await;
    let (status, body) = get(&format!("{base}/validate?number=1234567890123456")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["is_valid"], false);
    assert!(body["major_industry_identifier"].is_null());
    assert!(body["issuer_identification_number"].is_null());
    assert!(body["personal_account_number"].is_null());
    assert!(body["check_digit"].is_null());
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn validate_non_numeric_returns_placeholder() {
    let base = spawn_server(16).await;
    let (status, body) = get(&format!("{base}/validate?number=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["is_valid"], false);
}

#[tokio::test]
async fn validate_repeated_number_uses_last_value() {
    let base = spawn_server(16).await;
    let resp = reqwest::get(format!("{base}/validate?number=1&number=4503495455532271"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));
    let body = resp.json::<Value>().await.unwrap();
    assert_eq!(body["issuer_identification_number"], "450349");

    let (status, body) = get(&format!("{base}/validate?number=4503495455532271&number=1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["is_valid"], false);
}

#[tokio::test]
async fn validate_without_number() {
    let base = spawn_server(16).await;
    let (status, body) = get(&format!("{base}/validate")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], VALIDATE_MISSING_NUMBER);
}

// ---------------------------------------------------------------------------
// Generate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_from_iin() {
    let base = spawn_server(16).await;
    let (status, body) = get(&format!("{base}/generate?iin=45")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], true);
    let number = body["number"].as_str().unwrap();
    assert_eq!(number.len(), 16);
    assert!(number.starts_with("45"));
    assert!(cardnum::verify(number));
    assert_eq!(body["check_digit"], &number[15..]);
}

#[tokio::test]
async fn generate_uses_configured_length() {
    let base = spawn_server(19).await;
    let (status, body) = get(&format!("{base}/generate?iin=6")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"].as_str().unwrap().len(), 19);
}

#[tokio::test]
async fn generated_number_validates() {
    let base = spawn_server(16).await;
    let (_, generated) = get(&format!("{base}/generate?iin=37")).await;
    let number = generated["number"].as_str().unwrap();
    let (status, body) = get(&format!("{base}/validate?number={number}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["check_digit"], generated["check_digit"]);
}

#[tokio::test]
async fn generate_rejects_long_iin() {
    let base = spawn_server(16).await;
    let (status, body) = get(&format!("{base}/generate?iin=123")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], INVALID_IIN);
}

#[tokio::test]
async fn generate_rejects_empty_iin() {
    let base = spawn_server(16).await;
    let (status, body) = get(&format!("{base}/generate?iin=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], INVALID_IIN);
}

#[tokio::test]
async fn generate_repeated_iin_uses_last_value() {
    let base = spawn_server(16).await;
    let (status, body) = get(&format!("{base}/generate?iin=4&iin=45")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["number"].as_str().unwrap().starts_with("45"));

    let (status, body) = get(&format!("{base}/generate?iin=45&iin=456")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], INVALID_IIN);
}

#[tokio::test]
async fn generate_without_iin() {
    let base = spawn_server(16).await;
    let (status, body) = get(&format!("{base}/generate")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], GENERATE_MISSING_IIN);
}
