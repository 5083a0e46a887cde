use log::info;
use std::sync::Arc;

use crate::{
    config::Config,
    crypto::NetworkVersion,
    error::WalletError,
    network::{build_network, Network},
    rpc_server::method::{
        transactions_bip38_create::{transactions_bip38_create, TransactionsBip38CreateRequest},
        transactions_broadcast::{transactions_broadcast, TransactionsBroadcastRequest},
        transactions_create::{transactions_create, TransactionsCreateRequest},
        transactions_info::{transactions_info, TransactionsInfoRequest},
        wallets_bip38_create::{wallets_bip38_create, WalletsBip38Request},
        wallets_bip38_info::wallets_bip38_info,
        wallets_create::{wallets_create, WalletsCreateRequest},
        TransferContext,
    },
    store::{build_store, Store},
    transaction::{SignatureVerifier, Transaction, TransactionVerifier},
    validator::request_validator::RequestValidator,
    wallet::{WalletInfo, WalletManager},
};

#[derive(Clone)]
pub struct WalletRpc {
    transfers: TransferContext,
    wallets: WalletManager,
}

impl WalletRpc {
    pub fn new(
        config: &Config,
        store: Arc<dyn Store>,
        network: Arc<dyn Network>,
        verifier: Arc<dyn TransactionVerifier>,
    ) -> Self {
        let network_version = config.network.version();

        let transfers = TransferContext {
            store: store.clone(),
            network,
            verifier,
            network_version,
            transfer_fee: config.transaction.transfer_fee,
            validator: RequestValidator::new(
                network_version,
                config.transaction.max_vendor_field_length,
            ),
        };
        let wallets = WalletManager::new(store, network_version, config.bip38.params());

        Self { transfers, wallets }
    }

    /// Wires the store and network selected by `config` with signature verification
    pub async fn from_config(config: &Config) -> Result<Self, WalletError> {
        let store = build_store(&config.store).await?;
        let network = build_network(&config.network)?;
        Ok(Self::new(config, store, network, Arc::new(SignatureVerifier)))
    }

    pub fn network_version(&self) -> NetworkVersion {
        self.transfers.network_version
    }

    pub async fn liveness(&self) -> Result<(), WalletError> {
        info!("Liveness request received");
        let result = Ok(());
        info!("Liveness response: {result:?}");
        result
    }

    pub async fn transactions_info(
        &self,
        request: TransactionsInfoRequest,
    ) -> Result<Transaction, WalletError> {
        info!("Transactions info request: {request:?}");
        let result = transactions_info(self.transfers.network.as_ref(), request).await;
        info!("Transactions info response: {result:?}");
        result
    }

    pub async fn transactions_create(
        &self,
        request: TransactionsCreateRequest,
    ) -> Result<Transaction, WalletError> {
        info!("Transactions create request: {request:?}");
        let result = transactions_create(&self.transfers, request).await;
        info!("Transactions create response: {result:?}");
        result
    }

    pub async fn transactions_broadcast(
        &self,
        request: TransactionsBroadcastRequest,
    ) -> Result<Transaction, WalletError> {
        info!("Transactions broadcast request: {request:?}");
        let result = transactions_broadcast(&self.transfers, request).await;
        info!("Transactions broadcast response: {result:?}");
        result
    }

    pub async fn transactions_bip38_create(
        &self,
        request: TransactionsBip38CreateRequest,
    ) -> Result<Transaction, WalletError> {
        info!("Transactions bip38 create request: {request:?}");
        let result = transactions_bip38_create(&self.transfers, &self.wallets, request).await;
        info!("Transactions bip38 create response: {result:?}");
        result
    }

    pub async fn wallets_create(
        &self,
        request: WalletsCreateRequest,
    ) -> Result<WalletInfo, WalletError> {
        info!("Wallets create request: {request:?}");
        let result = wallets_create(self.transfers.network_version, request).await;
        info!("Wallets create response: {result:?}");
        result
    }

    // Responses carry the WIF, only the outcome is logged
    pub async fn wallets_bip38_create(
        &self,
        request: WalletsBip38Request,
    ) -> Result<WalletInfo, WalletError> {
        info!("Wallets bip38 create request: {request:?}");
        let result = wallets_bip38_create(&self.wallets, request).await;
        info!("Wallets bip38 create response: {:?}", result.as_ref().map(|w| &w.address));
        result
    }

    pub async fn wallets_bip38_info(
        &self,
        request: WalletsBip38Request,
    ) -> Result<WalletInfo, WalletError> {
        info!("Wallets bip38 info request: {request:?}");
        let result = wallets_bip38_info(&self.wallets, request).await;
        info!("Wallets bip38 info response: {:?}", result.as_ref().map(|w| &w.address));
        result
    }
}
