use std::sync::Arc;

use bip39::Mnemonic;
use serde::{Deserialize, Serialize};

use crate::{
    bip38::{self, Bip38Params},
    crypto::{Keys, NetworkVersion},
    error::WalletError,
    sanitize_error,
    store::{Store, StoreKey},
};

/// Public view of a wallet returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInfo {
    pub public_key: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wif: Option<String>,
}

impl WalletInfo {
    pub fn from_keys(keys: &Keys, network: NetworkVersion, include_wif: bool) -> Self {
        Self {
            public_key: keys.public_key_hex(),
            address: keys.address(network).to_string(),
            wif: include_wif.then(|| keys.to_wif(network)),
        }
    }
}

/// BIP38 wallets keyed by user id. The stored value is the BIP38 encryption
/// of the wallet secret under `bip38 + userId`.
#[derive(Clone)]
pub struct WalletManager {
    store: Arc<dyn Store>,
    network: NetworkVersion,
    params: Bip38Params,
}

impl WalletManager {
    pub fn new(store: Arc<dyn Store>, network: NetworkVersion, params: Bip38Params) -> Self {
        Self { store, network, params }
    }

    pub fn network(&self) -> NetworkVersion {
        self.network
    }

    /// Returns the user's wallet, generating and storing a fresh one on first use
    pub async fn create_bip38_wallet(
        &self,
        user_id: &str,
        bip38: &str,
    ) -> Result<WalletInfo, WalletError> {
        if let Some(keys) = self.find_bip38_wallet(user_id, bip38).await? {
            log::debug!("Wallet already exists for user, returning it");
            return Ok(WalletInfo::from_keys(&keys, self.network, true));
        }

        let keys = generate_keys()?;
        let encrypted = self.encrypt(keys.clone(), password(bip38, user_id)).await?;

        // A concurrent create for the same user may have stored first, that wallet wins
        if !self.store.set_if_absent(&StoreKey::wallet(user_id), &encrypted).await? {
            log::debug!("Wallet was created concurrently, returning the stored one");
            let stored = self.get_bip38_wallet(user_id, bip38).await?;
            return Ok(WalletInfo::from_keys(&stored, self.network, true));
        }

        log::info!("Created BIP38 wallet {}", keys.address(self.network));
        Ok(WalletInfo::from_keys(&keys, self.network, true))
    }

    /// Decrypts the user's wallet. 404 when the user has none.
    pub async fn get_bip38_wallet(&self, user_id: &str, bip38: &str) -> Result<Keys, WalletError> {
        self.find_bip38_wallet(user_id, bip38)
            .await?
            .ok_or_else(|| WalletError::UserNotFound(user_id.to_string()))
    }

    async fn find_bip38_wallet(
        &self,
        user_id: &str,
        bip38: &str,
    ) -> Result<Option<Keys>, WalletError> {
        let Some(encrypted) = self.store.get(&StoreKey::wallet(user_id)).await? else {
            return Ok(None);
        };

        match self.decrypt(encrypted, password(bip38, user_id)).await {
            Ok(keys) => Ok(Some(keys)),
            Err(WalletError::InvalidPassphrase(_)) => {
                Err(WalletError::InvalidPassphrase(user_id.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    // scrypt is CPU bound, keep it off the async workers
    async fn encrypt(&self, keys: Keys, password: String) -> Result<String, WalletError> {
        let (network, params) = (self.network, self.params);
        tokio::task::spawn_blocking(move || bip38::encrypt(&keys, &password, network, params))
            .await
            .map_err(|e| {
                WalletError::InternalServerError(format!(
                    "BIP38 encryption task failed: {}",
                    sanitize_error!(e)
                ))
            })?
    }

    async fn decrypt(&self, encrypted: String, password: String) -> Result<Keys, WalletError> {
        let (network, params) = (self.network, self.params);
        tokio::task::spawn_blocking(move || bip38::decrypt(&encrypted, &password, network, params))
            .await
            .map_err(|e| {
                WalletError::InternalServerError(format!(
                    "BIP38 decryption task failed: {}",
                    sanitize_error!(e)
                ))
            })?
    }
}

fn password(bip38: &str, user_id: &str) -> String {
    format!("{bip38}{user_id}")
}

/// Fresh keys derived from a random 12-word mnemonic
fn generate_keys() -> Result<Keys, WalletError> {
    let entropy: [u8; 16] = rand::random();
    let mnemonic = Mnemonic::from_entropy(&entropy).map_err(|e| {
        WalletError::CryptoError(format!("Failed to generate mnemonic: {}", sanitize_error!(e)))
    })?;
    Keys::from_passphrase(&mnemonic.to_string())
}
