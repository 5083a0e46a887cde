use serde::Deserialize;
use std::fmt;

use crate::{
    error::WalletError,
    sanitize::REDACTED,
    validator::request_validator::RequestValidator,
    wallet::{WalletInfo, WalletManager},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletsBip38Request {
    pub bip38: String,
    pub user_id: String,
}

impl fmt::Debug for WalletsBip38Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletsBip38Request")
            .field("bip38", &REDACTED)
            .field("user_id", &self.user_id)
            .finish()
    }
}

impl WalletsBip38Request {
    pub fn validate(&self) -> Result<(), WalletError> {
        RequestValidator::require_non_empty("bip38", &self.bip38)?;
        RequestValidator::require_non_empty("userId", &self.user_id)
    }
}

pub async fn wallets_bip38_create(
    wallets: &WalletManager,
    request: WalletsBip38Request,
) -> Result<WalletInfo, WalletError> {
    request.validate()?;
    wallets.create_bip38_wallet(&request.user_id, &request.bip38).await
}
