pub mod transactions_bip38_create;
pub mod transactions_broadcast;
pub mod transactions_create;
pub mod transactions_info;
pub mod wallets_bip38_create;
pub mod wallets_bip38_info;
pub mod wallets_create;

use std::sync::Arc;

use crate::{
    crypto::{Keys, NetworkVersion},
    error::WalletError,
    network::Network,
    store::{Store, StoreKey},
    transaction::{Transaction, TransactionVerifier, TransferBuilder},
    validator::request_validator::RequestValidator,
};

/// Collaborators shared by the transaction methods
#[derive(Clone)]
pub struct TransferContext {
    pub store: Arc<dyn Store>,
    pub network: Arc<dyn Network>,
    pub verifier: Arc<dyn TransactionVerifier>,
    pub network_version: NetworkVersion,
    pub transfer_fee: u64,
    pub validator: RequestValidator,
}

impl TransferContext {
    /// Builds a transfer from `keys` with the sender's next nonce, verifies it
    /// and keeps it for a later broadcast
    pub async fn sign_and_store(
        &self,
        keys: &Keys,
        amount: u64,
        recipient_id: &str,
        vendor_field: Option<&str>,
    ) -> Result<Transaction, WalletError> {
        let sender = keys.address(self.network_version).to_string();
        let nonce = self.network.next_nonce(&sender).await?;

        let mut builder = TransferBuilder::new(self.network_version)
            .recipient_id(recipient_id)
            .amount(amount)
            .fee(self.transfer_fee)
            .nonce(nonce);
        if let Some(vendor_field) = vendor_field {
            builder = builder.vendor_field(vendor_field);
        }
        let transaction = builder.sign(keys)?;

        self.verify(&transaction)?;

        self.store
            .set(&StoreKey::transaction(&transaction.id), &serde_json::to_string(&transaction)?)
            .await?;

        Ok(transaction)
    }

    pub fn verify(&self, transaction: &Transaction) -> Result<(), WalletError> {
        if !self.verifier.verify_hash(transaction) {
            log::warn!("Transaction {} failed verification", transaction.id);
            return Err(WalletError::VerificationFailed(transaction.id.clone()));
        }
        Ok(())
    }
}
