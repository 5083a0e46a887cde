use anyhow::Result;
use jsonrpsee::{
    core::{client::ClientT, params::ObjectParams},
    http_client::{HttpClient, HttpClientBuilder},
};
use serde_json::{json, Value};

/// Talks JSON-RPC to a running walletd server
#[derive(Clone)]
pub struct TestClient {
    pub http_client: HttpClient,
    pub server_url: String,
    api_key: Option<String>,
}

impl TestClient {
    pub fn new(server_url: String) -> Result<Self> {
        let http_client = HttpClientBuilder::default()
            .build(&server_url)
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { http_client, server_url, api_key: None })
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Typed call through the jsonrpsee client, `params` must be a JSON object
    pub async fn rpc_call<T>(&self, method: &str, params: Value) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut object = ObjectParams::new();
        if let Value::Object(map) = params {
            for (name, value) in map {
                object.insert(&name, value)?;
            }
        }

        self.http_client
            .request(method, object)
            .await
            .map_err(|e| anyhow::anyhow!("RPC call '{}' failed: {}", method, e))
    }

    /// Posts a raw request and returns the whole JSON-RPC envelope, errors included
    pub async fn raw_call(&self, method: &str, params: Value) -> Result<Value> {
        let response = self.post(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        }))
        .await?;

        Ok(response.json().await?)
    }

    pub async fn post(&self, body: Value) -> Result<reqwest::Response> {
        let mut request = reqwest::Client::new().post(&self.server_url).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.header(walletd_lib::constant::X_API_KEY, api_key);
        }
        Ok(request.send().await?)
    }
}
