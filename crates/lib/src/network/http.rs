use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use super::Network;
use crate::{
    error::WalletError,
    sanitize_error,
    transaction::{deserialize_u64_lenient, Transaction},
};

#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct WalletData {
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    nonce: u64,
}

#[derive(Debug, Default, Deserialize)]
struct BroadcastData {
    #[serde(default)]
    accept: Vec<String>,
    #[serde(default)]
    invalid: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct BroadcastResponse {
    #[serde(default)]
    data: BroadcastData,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

/// Talks to node public APIs. Each call starts at a random peer and falls
/// back to the others on transport errors and 5xx answers.
pub struct HttpNetwork {
    client: Client,
    peers: Vec<String>,
}

impl HttpNetwork {
    pub fn new(peers: Vec<String>, timeout_secs: u64) -> Result<Self, WalletError> {
        let client = Client::builder().timeout(Duration::from_secs(timeout_secs)).build()?;
        let peers = peers.into_iter().map(|p| p.trim_end_matches('/').to_string()).collect();
        Ok(Self { client, peers })
    }

    fn shuffled_peers(&self) -> Vec<&str> {
        let mut peers: Vec<&str> = self.peers.iter().map(String::as_str).collect();
        peers.shuffle(&mut rand::rng());
        peers
    }

    async fn send<F>(&self, path: &str, request: F) -> Result<Response, WalletError>
    where
        F: Fn(&Client, String) -> RequestBuilder,
    {
        let mut last_error = None;

        for peer in self.shuffled_peers() {
            match request(&self.client, format!("{peer}{path}")).send().await {
                Ok(response) if response.status().is_server_error() => {
                    log::warn!("Peer answered {} for {path}, trying next peer", response.status());
                    last_error = Some(WalletError::NetworkError(format!(
                        "Peer answered {} for {path}",
                        response.status()
                    )));
                }
                Ok(response) => return Ok(response),
                Err(e) => {
                    log::warn!("Peer request for {path} failed: {}", sanitize_error!(e));
                    last_error = Some(e.into());
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| WalletError::NetworkError("No peers configured".to_string())))
    }

    async fn read_data<T: serde::de::DeserializeOwned>(
        response: Response,
        path: &str,
    ) -> Result<T, WalletError> {
        let status = response.status();
        if !status.is_success() {
            return Err(WalletError::NetworkError(format!("Peer answered {status} for {path}")));
        }

        let body: DataResponse<T> = response.json().await.map_err(|e| {
            WalletError::SerializationError(format!(
                "Unexpected peer response for {path}: {}",
                sanitize_error!(e)
            ))
        })?;
        Ok(body.data)
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>, WalletError> {
        let path = format!("/api/transactions/{id}");
        let response = self.send(&path, |client, url| client.get(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Self::read_data(response, &path).await.map(Some)
    }

    async fn broadcast(&self, transaction: &Transaction) -> Result<(), WalletError> {
        let path = "/api/transactions";
        let body = json!({ "transactions": [transaction] });
        let response = self.send(path, |client, url| client.post(url).json(&body)).await?;

        let status = response.status();
        let parsed: BroadcastResponse = response.json().await.map_err(|e| {
            WalletError::SerializationError(format!(
                "Unexpected broadcast response ({status}): {}",
                sanitize_error!(e)
            ))
        })?;

        if parsed.data.invalid.contains(&transaction.id) || !status.is_success() {
            let reason = parsed.errors.map(|e| e.to_string()).unwrap_or_default();
            return Err(WalletError::NetworkError(format!(
                "Transaction {} was rejected by the network {reason}",
                transaction.id
            )));
        }

        if !parsed.data.accept.contains(&transaction.id) {
            log::warn!("Transaction {} was not accepted into the pool", transaction.id);
        }

        Ok(())
    }

    async fn next_nonce(&self, address: &str) -> Result<u64, WalletError> {
        let path = format!("/api/wallets/{address}");
        let response = self.send(&path, |client, url| client.get(url)).await?;

        // Unknown wallets have never sent anything
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(1);
        }

        let wallet: WalletData = Self::read_data(response, &path).await?;
        wallet
            .nonce
            .checked_add(1)
            .ok_or_else(|| WalletError::NetworkError(format!("Nonce overflow for {address}")))
    }
}
