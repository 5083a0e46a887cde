//! Common test utilities shared by the method and server tests

use std::sync::Arc;

use crate::{
    bip38::Bip38Params,
    crypto::{Keys, NetworkVersion},
    network::InMemoryNetwork,
    rpc_server::method::TransferContext,
    store::{InMemoryStore, Store},
    transaction::{
        MockTransactionVerifier, SignatureVerifier, Transaction, TransactionVerifier,
        TransferBuilder,
    },
    validator::request_validator::RequestValidator,
    wallet::WalletManager,
};

pub const DEVNET: NetworkVersion = NetworkVersion { pub_key_hash: 30, wif: 170 };
pub const PASSPHRASE: &str = "this is a top secret passphrase";
pub const RECIPIENT: &str = "D61mfSggzbvQgTUe6JhYKH2doHaqJ3Dyib";
pub const FAST_BIP38: Bip38Params = Bip38Params { log_n: 10, r: 8, p: 1 };

/// Verifier that refuses every transaction and must be asked exactly `times` times
pub fn create_rejecting_verifier(times: usize) -> Arc<dyn TransactionVerifier> {
    let mut verifier = MockTransactionVerifier::new();
    verifier.expect_verify_hash().times(times).returning(|_| false);
    Arc::new(verifier)
}

pub fn create_test_context_with_verifier(
    verifier: Arc<dyn TransactionVerifier>,
) -> TransferContext {
    TransferContext {
        store: Arc::new(InMemoryStore::new()),
        network: Arc::new(InMemoryNetwork::new()),
        verifier,
        network_version: DEVNET,
        transfer_fee: 10_000_000,
        validator: RequestValidator::new(DEVNET, 255),
    }
}

/// Standalone context: in-memory store and ledger, signature verification
pub fn create_test_context() -> TransferContext {
    create_test_context_with_verifier(Arc::new(SignatureVerifier))
}

pub fn create_test_wallets(store: Arc<dyn Store>) -> WalletManager {
    WalletManager::new(store, DEVNET, FAST_BIP38)
}

pub fn create_test_transfer(passphrase: &str, vendor_field: Option<&str>) -> Transaction {
    let keys = Keys::from_passphrase(passphrase).unwrap();
    let mut builder = TransferBuilder::new(DEVNET).recipient_id(RECIPIENT).amount(100_000_000);
    if let Some(vendor_field) = vendor_field {
        builder = builder.vendor_field(vendor_field);
    }
    builder.sign(&keys).unwrap()
}
