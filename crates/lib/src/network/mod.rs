mod http;
mod memory;

pub use http::HttpNetwork;
pub use memory::InMemoryNetwork;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{config::NetworkConfig, error::WalletError, transaction::Transaction};

/// The node network transactions are read from and relayed to
#[async_trait]
pub trait Network: Send + Sync {
    /// Looks up a transaction by id. `Ok(None)` when the network does not know it.
    async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>, WalletError>;

    /// Relays a signed transaction
    async fn broadcast(&self, transaction: &Transaction) -> Result<(), WalletError>;

    /// Nonce the next transaction from `address` must carry
    async fn next_nonce(&self, address: &str) -> Result<u64, WalletError>;
}

/// Relays to the configured peers, or to an in-process ledger when there are none
pub fn build_network(config: &NetworkConfig) -> Result<Arc<dyn Network>, WalletError> {
    if config.is_standalone() {
        log::warn!("No peers configured, running standalone with an in-memory ledger");
        return Ok(Arc::new(InMemoryNetwork::new()));
    }

    log::info!("Relaying to {} peer(s) on {}", config.peers.len(), config.name);
    Ok(Arc::new(HttpNetwork::new(config.peers.clone(), config.timeout_secs)?))
}
