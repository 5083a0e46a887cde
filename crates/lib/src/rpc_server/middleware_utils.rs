use std::{
    collections::HashSet,
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use futures_util::TryStreamExt;
use http::{request::Parts, Request, Response, StatusCode};
use jsonrpsee::server::logger::Body;
use serde_json::Value;

/// A request whose body has been read so gates can look at the JSON-RPC calls it carries
pub struct BufferedRequest {
    parts: Parts,
    body: Vec<u8>,
    methods: Option<Vec<String>>,
}

impl BufferedRequest {
    pub async fn read(request: Request<Body>) -> Self {
        let (parts, body) = request.into_parts();
        let body = body.map_ok(|chunk| chunk.to_vec()).try_concat().await.unwrap_or_else(|e| {
            log::warn!("Failed to read request body: {e}");
            Vec::new()
        });
        let methods = jsonrpc_methods(&body);

        Self { parts, body, methods }
    }

    /// Every method named in the body, `None` when the body is not a JSON-RPC call or batch
    pub fn methods(&self) -> Option<&[String]> {
        self.methods.as_deref()
    }

    pub fn header(&self, name: &str) -> Option<&[u8]> {
        self.parts.headers.get(name).map(|value| value.as_bytes())
    }

    pub fn into_request(self) -> Request<Body> {
        Request::from_parts(self.parts, Body::from(self.body))
    }
}

/// Method names of a single call or a batch. A batch only counts when every entry names one.
pub fn jsonrpc_methods(body: &[u8]) -> Option<Vec<String>> {
    let calls = match serde_json::from_slice::<Value>(body).ok()? {
        Value::Array(calls) if !calls.is_empty() => calls,
        call @ Value::Object(_) => vec![call],
        _ => return None,
    };

    calls.iter().map(|call| call.get("method")?.as_str().map(str::to_string)).collect()
}

fn empty_response(status: StatusCode) -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

/// Admission check run on the buffered request before it reaches the RPC module
pub trait RequestGate: Clone + Send + Sync + 'static {
    fn check(&self, request: &BufferedRequest) -> Result<(), StatusCode>;
}

/// Tower layer answering with the gate's status code when a request is refused
#[derive(Clone)]
pub struct GateLayer<G> {
    gate: G,
}

impl<G> GateLayer<G> {
    pub fn new(gate: G) -> Self {
        Self { gate }
    }
}

impl<S, G: Clone> tower::Layer<S> for GateLayer<G> {
    type Service = GateService<S, G>;

    fn layer(&self, inner: S) -> Self::Service {
        GateService { inner, gate: self.gate.clone() }
    }
}

#[derive(Clone)]
pub struct GateService<S, G> {
    inner: S,
    gate: G,
}

impl<S, G> tower::Service<Request<Body>> for GateService<S, G>
where
    S: tower::Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    G: RequestGate,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let gate = self.gate.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let request = BufferedRequest::read(request).await;
            match gate.check(&request) {
                Ok(()) => inner.call(request.into_request()).await,
                Err(status) => Ok(empty_response(status)),
            }
        })
    }
}

/// Lets through only calls to enabled methods, batches included
#[derive(Clone)]
pub struct MethodAllowlist {
    allowed: Arc<HashSet<String>>,
}

impl MethodAllowlist {
    pub fn new(methods: impl IntoIterator<Item = String>) -> Self {
        Self { allowed: Arc::new(methods.into_iter().collect()) }
    }
}

impl RequestGate for MethodAllowlist {
    fn check(&self, request: &BufferedRequest) -> Result<(), StatusCode> {
        match request.methods() {
            Some(methods) if methods.iter().all(|method| self.allowed.contains(method)) => Ok(()),
            methods => {
                log::debug!("Rejected call to disabled or unknown method(s): {methods:?}");
                Err(StatusCode::METHOD_NOT_ALLOWED)
            }
        }
    }
}
