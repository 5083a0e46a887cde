use crate::common::*;
use serde_json::{json, Value};
use walletd_lib::config::Config;

fn auth_config() -> Config {
    let mut config = test_config();
    config.server.auth.api_key = Some(TEST_API_KEY.to_string());
    config
}

fn wallets_create_request() -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "wallets.create",
        "params": { "passphrase": PASSPHRASE }
    })
}

/// Test API key authentication with valid key
#[tokio::test]
async fn test_api_key_authentication_valid() {
    let server = TestServer::start(auth_config()).await.unwrap();
    let client = server.client.clone().with_api_key(TEST_API_KEY);

    let response = client.post(wallets_create_request()).await.unwrap();
    assert!(
        response.status().is_success(),
        "Valid API key should return 200, got {}",
        response.status()
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"]["address"], SENDER_ADDRESS);
}

/// Test API key authentication with invalid key (should fail)
#[tokio::test]
async fn test_api_key_authentication_invalid() {
    let server = TestServer::start(auth_config()).await.unwrap();
    let client = server.client.clone().with_api_key("wrong-key");

    let response = client.post(wallets_create_request()).await.unwrap();
    assert_eq!(response.status(), 401, "Invalid API key should return 401");
}

/// Test API key authentication with missing key (should fail)
#[tokio::test]
async fn test_api_key_authentication_missing() {
    let server = TestServer::start(auth_config()).await.unwrap();

    let response = server.client.post(wallets_create_request()).await.unwrap();
    assert_eq!(response.status(), 401, "Missing API key should return 401");
}

/// Test that liveness bypasses API key authentication
#[tokio::test]
async fn test_liveness_bypasses_api_key_auth() {
    let server = TestServer::start(auth_config()).await.unwrap();

    let liveness_response = reqwest::get(format!("{}/liveness", server.client.server_url))
        .await
        .expect("Liveness request should succeed");
    assert!(
        liveness_response.status().is_success(),
        "Liveness should bypass auth, got {}",
        liveness_response.status()
    );

    let response = server
        .client
        .post(json!({ "jsonrpc": "2.0", "id": 1, "method": "liveness", "params": [] }))
        .await
        .unwrap();
    assert!(response.status().is_success());
}

/// A batch only skips the key check when every call in it is liveness
#[tokio::test]
async fn test_batch_with_liveness_still_requires_api_key() {
    let server = TestServer::start(auth_config()).await.unwrap();
    let batch = json!([
        { "jsonrpc": "2.0", "id": 1, "method": "liveness", "params": [] },
        wallets_create_request()
    ]);

    let response = server.client.post(batch.clone()).await.unwrap();
    assert_eq!(response.status(), 401, "Mixed batch without key should return 401");

    let client = server.client.clone().with_api_key(TEST_API_KEY);
    let response = client.post(batch).await.unwrap();
    assert!(response.status().is_success(), "got {}", response.status());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}
