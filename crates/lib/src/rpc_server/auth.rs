use std::sync::Arc;

use http::StatusCode;
use subtle::ConstantTimeEq;

use crate::{
    constant::{method_names, X_API_KEY},
    rpc_server::middleware_utils::{BufferedRequest, GateLayer, RequestGate},
};

/// Requires the configured key in `x-api-key`. Liveness probes go through without one.
#[derive(Clone)]
pub struct ApiKeyGate {
    api_key: Arc<str>,
}

impl ApiKeyGate {
    pub fn new(api_key: String) -> Self {
        Self { api_key: api_key.into() }
    }

    pub fn layer(api_key: String) -> GateLayer<Self> {
        GateLayer::new(Self::new(api_key))
    }
}

impl RequestGate for ApiKeyGate {
    fn check(&self, request: &BufferedRequest) -> Result<(), StatusCode> {
        if is_liveness_only(request) {
            return Ok(());
        }

        match request.header(X_API_KEY) {
            Some(provided) if bool::from(provided.ct_eq(self.api_key.as_bytes())) => Ok(()),
            _ => {
                log::warn!("Rejected request without a valid {X_API_KEY} header");
                Err(StatusCode::UNAUTHORIZED)
            }
        }
    }
}

// A batch sneaking other calls in next to liveness still needs the key
fn is_liveness_only(request: &BufferedRequest) -> bool {
    request
        .methods()
        .is_some_and(|methods| methods.iter().all(|method| method == method_names::LIVENESS))
}
