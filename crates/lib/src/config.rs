use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use toml;

use crate::{
    bip38::Bip38Params,
    constant::{
        method_names, DEFAULT_MAX_REQUEST_BODY_SIZE, DEFAULT_MAX_VENDOR_FIELD_LENGTH,
        DEFAULT_NETWORK_NAME, DEFAULT_PEER_TIMEOUT_SECS, DEFAULT_PUB_KEY_HASH, DEFAULT_RATE_LIMIT,
        DEFAULT_SCRYPT_LOG_N, DEFAULT_SCRYPT_P, DEFAULT_SCRYPT_R, DEFAULT_TRANSFER_FEE,
        DEFAULT_WIF,
    },
    crypto::NetworkVersion,
    error::WalletError,
    sanitize_error,
};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub transaction: TransactionConfig,
    #[serde(default)]
    pub bip38: Bip38Config,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    /// Address version byte
    pub pub_key_hash: u8,
    /// WIF version byte
    pub wif: u8,
    /// Base urls of node APIs to relay to. Empty means standalone mode.
    #[serde(default)]
    pub peers: Vec<String>,
    #[serde(default = "default_peer_timeout")]
    pub timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NETWORK_NAME.to_string(),
            pub_key_hash: DEFAULT_PUB_KEY_HASH,
            wif: DEFAULT_WIF,
            peers: vec![],
            timeout_secs: DEFAULT_PEER_TIMEOUT_SECS,
        }
    }
}

impl NetworkConfig {
    pub fn version(&self) -> NetworkVersion {
        NetworkVersion { pub_key_hash: self.pub_key_hash, wif: self.wif }
    }

    pub fn is_standalone(&self) -> bool {
        self.peers.is_empty()
    }
}

fn default_peer_timeout() -> u64 {
    DEFAULT_PEER_TIMEOUT_SECS
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionConfig {
    /// Fee charged on every transfer, in the smallest denomination
    pub transfer_fee: u64,
    /// Maximum vendor field size in bytes
    pub max_vendor_field_length: usize,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            transfer_fee: DEFAULT_TRANSFER_FEE,
            max_vendor_field_length: DEFAULT_MAX_VENDOR_FIELD_LENGTH,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bip38Config {
    pub scrypt_log_n: u8,
    pub scrypt_r: u32,
    pub scrypt_p: u32,
}

impl Default for Bip38Config {
    fn default() -> Self {
        Self { scrypt_log_n: DEFAULT_SCRYPT_LOG_N, scrypt_r: DEFAULT_SCRYPT_R, scrypt_p: DEFAULT_SCRYPT_P }
    }
}

impl Bip38Config {
    pub fn params(&self) -> Bip38Params {
        Bip38Params { log_n: self.scrypt_log_n, r: self.scrypt_r, p: self.scrypt_p }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Redis URL (e.g. "redis://localhost:6379"). Without it, state is kept in memory.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnabledMethods {
    pub liveness: bool,
    pub transactions_info: bool,
    pub transactions_create: bool,
    pub transactions_broadcast: bool,
    pub transactions_bip38_create: bool,
    pub wallets_create: bool,
    pub wallets_bip38_create: bool,
    pub wallets_bip38_info: bool,
}

impl EnabledMethods {
    fn entries(&self) -> [(bool, &'static str); 8] {
        [
            (self.liveness, method_names::LIVENESS),
            (self.transactions_info, method_names::TRANSACTIONS_INFO),
            (self.transactions_create, method_names::TRANSACTIONS_CREATE),
            (self.transactions_broadcast, method_names::TRANSACTIONS_BROADCAST),
            (self.transactions_bip38_create, method_names::TRANSACTIONS_BIP38_CREATE),
            (self.wallets_create, method_names::WALLETS_CREATE),
            (self.wallets_bip38_create, method_names::WALLETS_BIP38_CREATE),
            (self.wallets_bip38_info, method_names::WALLETS_BIP38_INFO),
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> {
        self.entries().into_iter().map(|(enabled, _)| enabled)
    }

    /// Returns a Vec of enabled JSON-RPC method names
    pub fn get_enabled_method_names(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

impl Default for EnabledMethods {
    fn default() -> Self {
        Self {
            liveness: true,
            transactions_info: true,
            transactions_create: true,
            transactions_broadcast: true,
            transactions_bip38_create: true,
            wallets_create: true,
            wallets_bip38_create: true,
            wallets_bip38_info: true,
        }
    }
}

fn default_max_request_body_size() -> usize {
    DEFAULT_MAX_REQUEST_BODY_SIZE
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub rate_limit: u64,
    #[serde(default = "default_max_request_body_size")]
    pub max_request_body_size: usize,
    #[serde(default)]
    pub enabled_methods: EnabledMethods,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rate_limit: DEFAULT_RATE_LIMIT,
            max_request_body_size: DEFAULT_MAX_REQUEST_BODY_SIZE,
            enabled_methods: EnabledMethods::default(),
            auth: AuthConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub api_key: Option<String>,
}

impl Config {
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, WalletError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            WalletError::InternalServerError(format!(
                "Failed to read config file: {}",
                sanitize_error!(e)
            ))
        })?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Config, WalletError> {
        toml::from_str(contents).map_err(|e| {
            WalletError::InternalServerError(format!(
                "Failed to parse config file: {}",
                sanitize_error!(e)
            ))
        })
    }
}
