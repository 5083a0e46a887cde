// Using mutex for global state like config, when we test we don't want to release the lock
// until the test is finished.
#![cfg_attr(test, allow(clippy::await_holding_lock))]

pub mod bip38;
pub mod config;
pub mod constant;
pub mod crypto;
pub mod error;
pub mod log;
pub mod network;
pub mod rpc_server;
pub mod sanitize;
pub mod state;
pub mod store;
pub mod transaction;
pub mod validator;
pub mod wallet;
pub use config::Config;
pub use error::WalletError;

#[cfg(test)]
pub mod tests;
