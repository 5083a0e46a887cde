use std::{
    collections::{hash_map::Entry, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use deadpool_redis::{Connection, Pool, Runtime};
use parking_lot::RwLock;
use redis::AsyncCommands;

use crate::{
    config::StoreConfig,
    constant::{TRANSACTION_KEY_PREFIX, WALLET_KEY_PREFIX},
    crypto::sha256,
    error::WalletError,
    sanitize_error,
};

/// Key/value storage for signed transactions and encrypted wallets
#[async_trait]
pub trait Store: Send + Sync {
    /// Value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, WalletError>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), WalletError>;

    /// Stores `value` only when `key` is free. `false` means another value was already there.
    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, WalletError>;
}

pub struct StoreKey;

impl StoreKey {
    pub fn transaction(id: &str) -> String {
        format!("{TRANSACTION_KEY_PREFIX}:{id}")
    }

    /// User ids are hashed so they never appear verbatim in the store
    pub fn wallet(user_id: &str) -> String {
        format!("{WALLET_KEY_PREFIX}:{}", hex::encode(sha256(user_id.as_bytes())))
    }
}

/// Builds the store selected by `[store] url`, in-memory when unset
pub async fn build_store(config: &StoreConfig) -> Result<Arc<dyn Store>, WalletError> {
    match &config.url {
        Some(url) => {
            let store = RedisStore::connect(url).await?;
            log::info!("Using Redis store");
            Ok(Arc::new(store))
        }
        None => {
            log::info!("No store url configured, keeping wallets and transactions in memory");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}

/// Redis-based implementation for production
pub struct RedisStore {
    pool: Pool,
}

impl RedisStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Creates a pool for `url` and checks that the server answers
    pub async fn connect(url: &str) -> Result<Self, WalletError> {
        let cfg = deadpool_redis::Config::from_url(url);
        let pool = cfg.create_pool(Some(Runtime::Tokio1)).map_err(|e| {
            WalletError::StoreError(format!("Failed to create store pool: {}", sanitize_error!(e)))
        })?;

        let store = Self::new(pool);
        let mut conn = store.get_connection().await?;
        let _: Option<String> = conn.get("__connection_test__").await.map_err(|e| {
            WalletError::StoreError(format!(
                "Store connection test failed: {}",
                sanitize_error!(e)
            ))
        })?;

        Ok(store)
    }

    async fn get_connection(&self) -> Result<Connection, WalletError> {
        self.pool.get().await.map_err(|e| {
            WalletError::StoreError(format!(
                "Failed to get store connection: {}",
                sanitize_error!(e)
            ))
        })
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, WalletError> {
        let mut conn = self.get_connection().await?;
        conn.get(key).await.map_err(|e| {
            WalletError::StoreError(format!("Failed to read {key}: {}", sanitize_error!(e)))
        })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), WalletError> {
        let mut conn = self.get_connection().await?;
        let _: () = conn.set(key, value).await.map_err(|e| {
            WalletError::StoreError(format!("Failed to write {key}: {}", sanitize_error!(e)))
        })?;
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, WalletError> {
        let mut conn = self.get_connection().await?;
        conn.set_nx(key, value).await.map_err(|e| {
            WalletError::StoreError(format!("Failed to write {key}: {}", sanitize_error!(e)))
        })
    }
}

/// In-memory implementation for standalone mode and tests
#[derive(Default)]
pub struct InMemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, WalletError> {
        Ok(self.data.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), WalletError> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, WalletError> {
        match self.data.write().entry(key.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                Ok(true)
            }
        }
    }
}

/// Store that fails every call, for error path tests
#[cfg(test)]
pub struct ErrorStore;

#[cfg(test)]
#[async_trait]
impl Store for ErrorStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, WalletError> {
        Err(WalletError::StoreError("Redis connection failed".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), WalletError> {
        Err(WalletError::StoreError("Redis connection failed".to_string()))
    }

    async fn set_if_absent(&self, _key: &str, _value: &str) -> Result<bool, WalletError> {
        Err(WalletError::StoreError("Redis connection failed".to_string()))
    }
}
