use serde::Deserialize;
use std::fmt;

use crate::{
    crypto::{Keys, NetworkVersion},
    error::WalletError,
    sanitize::REDACTED,
    validator::request_validator::RequestValidator,
    wallet::WalletInfo,
};

#[derive(Deserialize)]
pub struct WalletsCreateRequest {
    pub passphrase: String,
}

impl fmt::Debug for WalletsCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletsCreateRequest").field("passphrase", &REDACTED).finish()
    }
}

/// Derives the public wallet of a passphrase. Nothing is stored.
pub async fn wallets_create(
    network: NetworkVersion,
    request: WalletsCreateRequest,
) -> Result<WalletInfo, WalletError> {
    RequestValidator::require_non_empty("passphrase", &request.passphrase)?;

    let keys = Keys::from_passphrase(&request.passphrase)?;
    Ok(WalletInfo::from_keys(&keys, network, false))
}
