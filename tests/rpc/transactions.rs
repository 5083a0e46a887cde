use crate::common::*;
use serde_json::json;
use walletd_lib::transaction::Transaction;

fn create_params(vendor_field: Option<&str>) -> serde_json::Value {
    let mut params = json!({
        "amount": TRANSFER_AMOUNT,
        "recipientId": RECIPIENT_ADDRESS,
        "passphrase": PASSPHRASE,
    });
    if let Some(vendor_field) = vendor_field {
        params["vendorField"] = json!(vendor_field);
    }
    params
}

async fn create_transfer(server: &TestServer) -> Transaction {
    server.client.rpc_call("transactions.create", create_params(None)).await.unwrap()
}

#[tokio::test]
async fn test_transactions_info_found() {
    let server = TestServer::start(test_config()).await.unwrap();
    let transaction = create_transfer(&server).await;
    server.network.broadcast(&transaction).await.unwrap();

    let response = server
        .client
        .raw_call("transactions.info", json!({ "id": transaction.id }))
        .await
        .unwrap();

    assert_eq!(response.result_transaction(), transaction);
}

#[tokio::test]
async fn test_transactions_info_not_found() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response = server
        .client
        .raw_call("transactions.info", json!({ "id": UNKNOWN_TRANSACTION_ID }))
        .await
        .unwrap();

    response.assert_error(404);
    response.assert_error_message(&format!(
        "Transaction {UNKNOWN_TRANSACTION_ID} could not be found."
    ));
}

#[tokio::test]
async fn test_transactions_create() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response =
        server.client.raw_call("transactions.create", create_params(None)).await.unwrap();
    let transaction = response.result_transaction();

    assert_signed_transfer(&transaction, RECIPIENT_ADDRESS, TRANSFER_AMOUNT, None);
    assert_eq!(transaction.sender_public_key, SENDER_PUBLIC_KEY);
    assert_eq!(transaction.nonce, 1);
}

#[tokio::test]
async fn test_transactions_create_with_vendor_field() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response = server
        .client
        .raw_call("transactions.create", create_params(Some(VENDOR_FIELD)))
        .await
        .unwrap();
    let transaction = response.result_transaction();

    assert_signed_transfer(&transaction, RECIPIENT_ADDRESS, TRANSFER_AMOUNT, Some(VENDOR_FIELD));
}

#[tokio::test]
async fn test_transactions_create_unverified() {
    let server = TestServer::start(test_config()).await.unwrap();
    let rejecting = server.rejecting_twin().await.unwrap();

    let response =
        rejecting.client.raw_call("transactions.create", create_params(None)).await.unwrap();
    response.assert_error(422);
}

#[tokio::test]
async fn test_transactions_create_invalid_recipient() {
    let server = TestServer::start(test_config()).await.unwrap();
    let mut params = create_params(None);
    params["recipientId"] = json!("not-an-address");

    let response = server.client.raw_call("transactions.create", params).await.unwrap();
    response.assert_error(-32602);
}

#[tokio::test]
async fn test_transactions_broadcast() {
    let server = TestServer::start(test_config()).await.unwrap();
    let transaction = create_transfer(&server).await;

    let response = server
        .client
        .raw_call("transactions.broadcast", json!({ "id": transaction.id }))
        .await
        .unwrap();
    assert_eq!(response.result_transaction(), transaction);

    // The ledger now knows it, and the sender's next transfer moves the nonce on
    let info = server
        .client
        .raw_call("transactions.info", json!({ "id": transaction.id }))
        .await
        .unwrap();
    assert_eq!(info.result_transaction(), transaction);
    assert_eq!(create_transfer(&server).await.nonce, 2);
}

#[tokio::test]
async fn test_transactions_broadcast_not_found() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response = server
        .client
        .raw_call("transactions.broadcast", json!({ "id": UNKNOWN_TRANSACTION_ID }))
        .await
        .unwrap();

    response.assert_error(404);
    response.assert_error_message(&format!(
        "Transaction {UNKNOWN_TRANSACTION_ID} could not be found."
    ));
}

#[tokio::test]
async fn test_transactions_broadcast_unverified() {
    let server = TestServer::start(test_config()).await.unwrap();
    let transaction = create_transfer(&server).await;
    let rejecting = server.rejecting_twin().await.unwrap();

    let response = rejecting
        .client
        .raw_call("transactions.broadcast", json!({ "id": transaction.id }))
        .await
        .unwrap();
    response.assert_error(422);

    assert_eq!(server.network.get_transaction(&transaction.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_transactions_bip38_create() {
    let server = TestServer::start(test_config()).await.unwrap();
    let wallet: walletd_lib::wallet::WalletInfo = server
        .client
        .rpc_call("wallets.bip38.create", json!({ "bip38": BIP38_PASSPHRASE, "userId": "user-tx-1" }))
        .await
        .unwrap();

    let response = server
        .client
        .raw_call(
            "transactions.bip38.create",
            json!({
                "bip38": BIP38_PASSPHRASE,
                "userId": "user-tx-1",
                "amount": TRANSFER_AMOUNT,
                "recipientId": RECIPIENT_ADDRESS,
            }),
        )
        .await
        .unwrap();
    let transaction = response.result_transaction();

    assert_signed_transfer(&transaction, RECIPIENT_ADDRESS, TRANSFER_AMOUNT, None);
    assert_eq!(transaction.sender_public_key, wallet.public_key);
}

#[tokio::test]
async fn test_transactions_bip38_create_with_vendor_field() {
    let server = TestServer::start(test_config()).await.unwrap();
    let _: walletd_lib::wallet::WalletInfo = server
        .client
        .rpc_call("wallets.bip38.create", json!({ "bip38": BIP38_PASSPHRASE, "userId": "user-tx-2" }))
        .await
        .unwrap();

    let response = server
        .client
        .raw_call(
            "transactions.bip38.create",
            json!({
                "bip38": BIP38_PASSPHRASE,
                "userId": "user-tx-2",
                "amount": TRANSFER_AMOUNT.to_string(),
                "recipientId": RECIPIENT_ADDRESS,
                "vendorField": VENDOR_FIELD,
            }),
        )
        .await
        .unwrap();

    assert_signed_transfer(
        &response.result_transaction(),
        RECIPIENT_ADDRESS,
        TRANSFER_AMOUNT,
        Some(VENDOR_FIELD),
    );
}

#[tokio::test]
async fn test_transactions_bip38_create_unknown_user() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response = server
        .client
        .raw_call(
            "transactions.bip38.create",
            json!({
                "bip38": BIP38_PASSPHRASE,
                "userId": UNKNOWN_USER_ID,
                "amount": TRANSFER_AMOUNT,
                "recipientId": RECIPIENT_ADDRESS,
            }),
        )
        .await
        .unwrap();

    response.assert_error(404);
    response.assert_error_message("User 123456789 could not be found.");
}

#[tokio::test]
async fn test_transactions_bip38_create_unverified() {
    let server = TestServer::start(test_config()).await.unwrap();
    let _: walletd_lib::wallet::WalletInfo = server
        .client
        .rpc_call("wallets.bip38.create", json!({ "bip38": BIP38_PASSPHRASE, "userId": "user-tx-3" }))
        .await
        .unwrap();
    let rejecting = server.rejecting_twin().await.unwrap();

    let response = rejecting
        .client
        .raw_call(
            "transactions.bip38.create",
            json!({
                "bip38": BIP38_PASSPHRASE,
                "userId": "user-tx-3",
                "amount": TRANSFER_AMOUNT,
                "recipientId": RECIPIENT_ADDRESS,
            }),
        )
        .await
        .unwrap();
    response.assert_error(422);
}
