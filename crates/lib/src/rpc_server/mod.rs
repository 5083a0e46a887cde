pub mod args;
pub mod auth;
pub mod method;
pub mod middleware_utils;
pub mod rpc;
pub mod server;

// Re-export main types for CLI usage
pub use args::RpcArgs;
pub use rpc::WalletRpc;
pub use server::{run_rpc_server, ServerHandles};
