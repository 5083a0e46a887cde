use serde::Deserialize;
use std::fmt;

use crate::{
    error::WalletError,
    rpc_server::method::TransferContext,
    sanitize::REDACTED,
    transaction::{deserialize_u64_lenient, Transaction},
    validator::request_validator::RequestValidator,
    wallet::WalletManager,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsBip38CreateRequest {
    pub bip38: String,
    pub user_id: String,
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub amount: u64,
    pub recipient_id: String,
    #[serde(default)]
    pub vendor_field: Option<String>,
}

impl fmt::Debug for TransactionsBip38CreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionsBip38CreateRequest")
            .field("bip38", &REDACTED)
            .field("user_id", &self.user_id)
            .field("amount", &self.amount)
            .field("recipient_id", &self.recipient_id)
            .field("vendor_field", &self.vendor_field)
            .finish()
    }
}

/// Signs a transfer with the user's stored BIP38 wallet
pub async fn transactions_bip38_create(
    context: &TransferContext,
    wallets: &WalletManager,
    request: TransactionsBip38CreateRequest,
) -> Result<Transaction, WalletError> {
    RequestValidator::require_non_empty("bip38", &request.bip38)?;
    RequestValidator::require_non_empty("userId", &request.user_id)?;
    context.validator.validate_transfer(
        request.amount,
        &request.recipient_id,
        request.vendor_field.as_deref(),
    )?;

    let keys = wallets.get_bip38_wallet(&request.user_id, &request.bip38).await?;

    context
        .sign_and_store(
            &keys,
            request.amount,
            &request.recipient_id,
            request.vendor_field.as_deref(),
        )
        .await
}
