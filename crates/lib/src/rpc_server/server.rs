use crate::{
    constant::{method_names, API_KEY_ENV, X_API_KEY},
    rpc_server::{
        auth::ApiKeyGate,
        middleware_utils::{GateLayer, MethodAllowlist},
        rpc::WalletRpc,
    },
};

#[cfg(not(test))]
use crate::state::get_config;

#[cfg(test)]
use crate::tests::config_mock::mock_state::get_config;
use http::{header, Method};
use jsonrpsee::{
    server::{middleware::proxy_get_request::ProxyGetRequestLayer, ServerBuilder, ServerHandle},
    RpcModule,
};
use std::{net::SocketAddr, time::Duration};
use tower::limit::RateLimitLayer;
use tower_http::cors::CorsLayer;

pub struct ServerHandles {
    pub rpc_handle: ServerHandle,
    pub local_addr: SocketAddr,
}

// We'll always prioritize the environment variable over the config value
fn get_value_by_priority(env_var: &str, config_value: Option<String>) -> Option<String> {
    std::env::var(env_var).ok().or(config_value)
}

pub async fn run_rpc_server(rpc: WalletRpc, port: u16) -> Result<ServerHandles, anyhow::Error> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::POST, Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::HeaderName::from_static(X_API_KEY)])
        .max_age(Duration::from_secs(3600));

    let config = get_config()?;

    // Build whitelist of allowed methods from enabled_methods config
    let allowed_methods = config.server.enabled_methods.get_enabled_method_names();

    let middleware = tower::ServiceBuilder::new()
        .layer(ProxyGetRequestLayer::new("/liveness", method_names::LIVENESS)?)
        .layer(RateLimitLayer::new(config.server.rate_limit, Duration::from_secs(1)))
        .layer(cors)
        // Disabled methods fail fast, before the key check
        .layer(GateLayer::new(MethodAllowlist::new(allowed_methods)))
        .option_layer(
            get_value_by_priority(API_KEY_ENV, config.server.auth.api_key.clone())
                .map(ApiKeyGate::layer),
        );

    let server = ServerBuilder::default()
        .max_request_body_size(config.server.max_request_body_size as u32)
        .set_middleware(middleware)
        .http_only()
        .build(addr)
        .await?;

    let local_addr = server.local_addr()?;
    let rpc_module = build_rpc_module(rpc)?;

    let rpc_handle = server
        .start(rpc_module)
        .map_err(|e| anyhow::anyhow!("Failed to start RPC server: {}", e))?;

    log::info!("RPC server started on {local_addr}");

    Ok(ServerHandles { rpc_handle, local_addr })
}

macro_rules! register_method_if_enabled {
    // For methods without parameters
    ($module:expr, $enabled_methods:expr, $field:ident, $method_name:expr, $rpc_method:ident) => {
        if $enabled_methods.$field {
            let _ = $module.register_async_method(
                $method_name,
                |_rpc_params, rpc_context| async move {
                    let rpc = rpc_context.as_ref();
                    rpc.$rpc_method().await.map_err(Into::into)
                },
            );
        }
    };

    // For methods with parameters
    ($module:expr, $enabled_methods:expr, $field:ident, $method_name:expr, $rpc_method:ident, with_params) => {
        if $enabled_methods.$field {
            let _ =
                $module.register_async_method($method_name, |rpc_params, rpc_context| async move {
                    let rpc = rpc_context.as_ref();
                    let params = rpc_params.parse()?;
                    rpc.$rpc_method(params).await.map_err(Into::into)
                });
        }
    };
}

fn build_rpc_module(rpc: WalletRpc) -> Result<RpcModule<WalletRpc>, anyhow::Error> {
    let mut module = RpcModule::new(rpc);
    let enabled_methods = &get_config()?.server.enabled_methods;

    register_method_if_enabled!(
        module,
        enabled_methods,
        liveness,
        method_names::LIVENESS,
        liveness
    );

    register_method_if_enabled!(
        module,
        enabled_methods,
        transactions_info,
        method_names::TRANSACTIONS_INFO,
        transactions_info,
        with_params
    );
    register_method_if_enabled!(
        module,
        enabled_methods,
        transactions_create,
        method_names::TRANSACTIONS_CREATE,
        transactions_create,
        with_params
    );
    register_method_if_enabled!(
        module,
        enabled_methods,
        transactions_broadcast,
        method_names::TRANSACTIONS_BROADCAST,
        transactions_broadcast,
        with_params
    );
    register_method_if_enabled!(
        module,
        enabled_methods,
        transactions_bip38_create,
        method_names::TRANSACTIONS_BIP38_CREATE,
        transactions_bip38_create,
        with_params
    );
    register_method_if_enabled!(
        module,
        enabled_methods,
        wallets_create,
        method_names::WALLETS_CREATE,
        wallets_create,
        with_params
    );
    register_method_if_enabled!(
        module,
        enabled_methods,
        wallets_bip38_create,
        method_names::WALLETS_BIP38_CREATE,
        wallets_bip38_create,
        with_params
    );
    register_method_if_enabled!(
        module,
        enabled_methods,
        wallets_bip38_info,
        method_names::WALLETS_BIP38_INFO,
        wallets_bip38_info,
        with_params
    );

    Ok(module)
}
