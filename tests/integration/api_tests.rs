//! API integration tests against a running server
//!
//! Start the server with a seeded database, then run:
//! `cargo test --test live_api -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8000/api";

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_status_with_database() {
    let client = Client::new();

    let response = client
        .get(format!("{}/status", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
#[ignore]
async fn test_create_user_then_list_loans() {
    let client = Client::new();
    let email = format!("live-{}@example.com", chrono::Utc::now().timestamp_millis());

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "name": "Live Test",
            "email": email,
            "password_hash": "hash"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let user: Value = response.json().await.expect("Failed to parse response");
    let user_id = user["user_id"].as_i64().expect("No user_id in response");

    let response = client
        .get(format!("{}/users/{}/loans", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let loans: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(loans, json!([]));
}

#[tokio::test]
#[ignore]
async fn test_loans_invalid_user_id() {
    let client = Client::new();

    let response = client
        .get(format!("{}/users/not-a-number/loans", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
