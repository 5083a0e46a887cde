use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::Network;
use crate::{
    crypto::{Address, NetworkVersion},
    error::WalletError,
    transaction::{Transaction, TransactionUtil},
};

/// Standalone ledger: broadcasts are kept in process and counted per sender
#[derive(Default)]
pub struct InMemoryNetwork {
    transactions: RwLock<HashMap<String, Transaction>>,
}

impl InMemoryNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the ledger with transactions that are already known
    pub fn with_transactions(transactions: impl IntoIterator<Item = Transaction>) -> Self {
        let network = Self::new();
        {
            let mut ledger = network.transactions.write();
            for transaction in transactions {
                ledger.insert(transaction.id.clone(), transaction);
            }
        }
        network
    }

    fn sender_address(transaction: &Transaction) -> Option<String> {
        let public_key = TransactionUtil::decode_public_key(&transaction.sender_public_key).ok()?;
        let network = NetworkVersion { pub_key_hash: transaction.network, wif: 0 };
        Some(Address::from_public_key(&public_key, network).to_string())
    }
}

#[async_trait]
impl Network for InMemoryNetwork {
    async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>, WalletError> {
        Ok(self.transactions.read().get(id).cloned())
    }

    async fn broadcast(&self, transaction: &Transaction) -> Result<(), WalletError> {
        self.transactions.write().insert(transaction.id.clone(), transaction.clone());
        log::debug!("Transaction {} added to the in-memory ledger", transaction.id);
        Ok(())
    }

    async fn next_nonce(&self, address: &str) -> Result<u64, WalletError> {
        let sent = self
            .transactions
            .read()
            .values()
            .filter(|tx| Self::sender_address(tx).as_deref() == Some(address))
            .count() as u64;
        Ok(sent + 1)
    }
}
