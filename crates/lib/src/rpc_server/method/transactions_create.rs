use serde::Deserialize;
use std::fmt;

use crate::{
    crypto::Keys,
    error::WalletError,
    rpc_server::method::TransferContext,
    sanitize::REDACTED,
    transaction::{deserialize_u64_lenient, Transaction},
    validator::request_validator::RequestValidator,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsCreateRequest {
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub amount: u64,
    pub recipient_id: String,
    pub passphrase: String,
    #[serde(default)]
    pub vendor_field: Option<String>,
}

impl fmt::Debug for TransactionsCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionsCreateRequest")
            .field("amount", &self.amount)
            .field("recipient_id", &self.recipient_id)
            .field("passphrase", &REDACTED)
            .field("vendor_field", &self.vendor_field)
            .finish()
    }
}

pub async fn transactions_create(
    context: &TransferContext,
    request: TransactionsCreateRequest,
) -> Result<Transaction, WalletError> {
    RequestValidator::require_non_empty("passphrase", &request.passphrase)?;
    context.validator.validate_transfer(
        request.amount,
        &request.recipient_id,
        request.vendor_field.as_deref(),
    )?;

    let keys = Keys::from_passphrase(&request.passphrase)?;

    context
        .sign_and_store(
            &keys,
            request.amount,
            &request.recipient_id,
            request.vendor_field.as_deref(),
        )
        .await
}
