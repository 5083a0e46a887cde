use crate::common::*;
use serde_json::{json, Value};

#[tokio::test]
async fn test_liveness() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response = server.client.raw_call("liveness", json!([])).await.unwrap();
    response.assert_success();
    assert_eq!(response["result"], Value::Null);
}

#[tokio::test]
async fn test_liveness_get_probe() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response =
        reqwest::get(format!("{}/liveness", server.client.server_url)).await.unwrap();
    assert!(response.status().is_success(), "Liveness probe returned {}", response.status());
}

#[tokio::test]
async fn test_unknown_method_is_rejected() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response = server
        .client
        .post(json!({ "jsonrpc": "2.0", "id": 1, "method": "wallets.delete", "params": {} }))
        .await
        .unwrap();
    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn test_batch_with_unknown_method_is_rejected() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response = server
        .client
        .post(json!([
            { "jsonrpc": "2.0", "id": 1, "method": "liveness", "params": [] },
            { "jsonrpc": "2.0", "id": 2, "method": "wallets.delete", "params": {} }
        ]))
        .await
        .unwrap();
    assert_eq!(response.status(), 405);

    let response = server.client.post(json!("not a call")).await.unwrap();
    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn test_missing_params_are_invalid() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response = server
        .client
        .raw_call("transactions.create", json!({ "recipientId": RECIPIENT_ADDRESS }))
        .await
        .unwrap();
    response.assert_error(-32602);
}
