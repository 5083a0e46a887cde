#[cfg(not(feature = "unsafe-debug"))]
use crate::sanitize::sanitize_message;
use jsonrpsee::{
    core::Error as RpcError,
    types::error::{CallError, ErrorObject},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON-RPC error codes returned to callers
pub mod code {
    pub const UNAUTHORIZED: i32 = 401;
    pub const NOT_FOUND: i32 = 404;
    pub const UNPROCESSABLE_ENTITY: i32 = 422;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

#[derive(Error, Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub enum WalletError {
    #[error("Transaction {0} could not be found.")]
    TransactionNotFound(String),

    #[error("User {0} could not be found.")]
    UserNotFound(String),

    #[error("Transaction {0} could not be verified.")]
    VerificationFailed(String),

    #[error("Invalid passphrase for user {0}.")]
    InvalidPassphrase(String),

    #[error("Invalid params: {0}")]
    ValidationError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Crypto error: {0}")]
    CryptoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalServerError(String),

    #[error("Invalid configuration for walletd")]
    ConfigError,
}

impl WalletError {
    /// Code placed in the `error.code` field of the JSON-RPC envelope
    pub fn code(&self) -> i32 {
        match self {
            WalletError::TransactionNotFound(_) | WalletError::UserNotFound(_) => code::NOT_FOUND,
            WalletError::VerificationFailed(_) => code::UNPROCESSABLE_ENTITY,
            WalletError::InvalidPassphrase(_) => code::UNAUTHORIZED,
            WalletError::ValidationError(_) => code::INVALID_PARAMS,
            WalletError::InvalidRequest(_) => code::INVALID_REQUEST,
            WalletError::NetworkError(_)
            | WalletError::StoreError(_)
            | WalletError::CryptoError(_)
            | WalletError::SerializationError(_)
            | WalletError::InternalServerError(_)
            | WalletError::ConfigError => code::INTERNAL_ERROR,
        }
    }
}

macro_rules! sanitized {
    ($variant:path, $e:expr) => {{
        #[cfg(feature = "unsafe-debug")]
        {
            $variant($e.to_string())
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            $variant(sanitize_message(&$e.to_string()))
        }
    }};
}

impl From<std::io::Error> for WalletError {
    fn from(e: std::io::Error) -> Self {
        sanitized!(WalletError::InternalServerError, e)
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(e: serde_json::Error) -> Self {
        sanitized!(WalletError::SerializationError, e)
    }
}

impl From<bs58::decode::Error> for WalletError {
    fn from(e: bs58::decode::Error) -> Self {
        sanitized!(WalletError::SerializationError, e)
    }
}

impl From<hex::FromHexError> for WalletError {
    fn from(e: hex::FromHexError) -> Self {
        sanitized!(WalletError::SerializationError, e)
    }
}

impl From<secp256k1::Error> for WalletError {
    fn from(e: secp256k1::Error) -> Self {
        sanitized!(WalletError::CryptoError, e)
    }
}

impl From<reqwest::Error> for WalletError {
    fn from(e: reqwest::Error) -> Self {
        sanitized!(WalletError::NetworkError, e)
    }
}

impl From<redis::RedisError> for WalletError {
    fn from(e: redis::RedisError) -> Self {
        sanitized!(WalletError::StoreError, e)
    }
}

impl From<anyhow::Error> for WalletError {
    fn from(e: anyhow::Error) -> Self {
        sanitized!(WalletError::InternalServerError, e)
    }
}

impl From<WalletError> for RpcError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::InternalServerError(_)
            | WalletError::SerializationError(_)
            | WalletError::StoreError(_)
            | WalletError::CryptoError(_)
            | WalletError::NetworkError(_)
            | WalletError::ConfigError => internal_server_error(err),

            _ => invalid_request(err),
        }
    }
}

pub fn invalid_request(e: WalletError) -> RpcError {
    RpcError::Call(CallError::Custom(ErrorObject::owned(e.code(), e.to_string(), None::<()>)))
}

pub fn internal_server_error(e: WalletError) -> RpcError {
    log::error!("Internal error while handling request: {e}");
    RpcError::Call(CallError::Custom(ErrorObject::owned(e.code(), e.to_string(), None::<()>)))
}
