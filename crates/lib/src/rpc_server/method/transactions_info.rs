use serde::Deserialize;

use crate::{
    error::WalletError, network::Network, transaction::Transaction,
    validator::request_validator::RequestValidator,
};

#[derive(Debug, Deserialize)]
pub struct TransactionsInfoRequest {
    pub id: String,
}

pub async fn transactions_info(
    network: &dyn Network,
    request: TransactionsInfoRequest,
) -> Result<Transaction, WalletError> {
    RequestValidator::validate_transaction_id(&request.id)?;

    network
        .get_transaction(&request.id)
        .await?
        .ok_or(WalletError::TransactionNotFound(request.id))
}
