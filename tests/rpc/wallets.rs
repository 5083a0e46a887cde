use crate::common::*;
use serde_json::{json, Value};
use walletd_lib::wallet::WalletInfo;

#[tokio::test]
async fn test_wallets_create() {
    let server = TestServer::start(test_config()).await.unwrap();

    let wallet: WalletInfo = server
        .client
        .rpc_call("wallets.create", json!({ "passphrase": PASSPHRASE }))
        .await
        .unwrap();

    assert_eq!(wallet.address, SENDER_ADDRESS);
    assert_eq!(wallet.public_key, SENDER_PUBLIC_KEY);
    assert_eq!(wallet.wif, None);
}

#[tokio::test]
async fn test_wallets_create_requires_passphrase() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response =
        server.client.raw_call("wallets.create", json!({ "passphrase": "" })).await.unwrap();
    response.assert_error(-32602);
}

#[tokio::test]
async fn test_wallets_bip38_create_and_info() {
    let server = TestServer::start(test_config()).await.unwrap();
    let params = json!({ "bip38": BIP38_PASSPHRASE, "userId": "user-wallets-1" });

    let created: WalletInfo =
        server.client.rpc_call("wallets.bip38.create", params.clone()).await.unwrap();
    assert!(created.address.starts_with('D'));
    assert!(created.wif.is_some());

    // A second create hands back the stored wallet
    let again: WalletInfo =
        server.client.rpc_call("wallets.bip38.create", params.clone()).await.unwrap();
    assert_eq!(again, created);

    let info: WalletInfo = server.client.rpc_call("wallets.bip38.info", params).await.unwrap();
    assert_eq!(info, created);
}

#[tokio::test]
async fn test_wallets_bip38_info_unknown_user() {
    let server = TestServer::start(test_config()).await.unwrap();

    let response = server
        .client
        .raw_call("wallets.bip38.info", json!({ "bip38": BIP38_PASSPHRASE, "userId": UNKNOWN_USER_ID }))
        .await
        .unwrap();

    response.assert_error(404);
    response.assert_error_message("User 123456789 could not be found.");
}

#[tokio::test]
async fn test_wallets_bip38_wrong_passphrase() {
    let server = TestServer::start(test_config()).await.unwrap();
    let _: Value = server
        .client
        .rpc_call("wallets.bip38.create", json!({ "bip38": BIP38_PASSPHRASE, "userId": "user-wallets-2" }))
        .await
        .unwrap();

    let response = server
        .client
        .raw_call("wallets.bip38.info", json!({ "bip38": "not the passphrase", "userId": "user-wallets-2" }))
        .await
        .unwrap();
    response.assert_error(401);
}
