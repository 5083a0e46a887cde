use serde::Deserialize;

use crate::{
    error::WalletError, rpc_server::method::TransferContext, store::StoreKey,
    transaction::Transaction, validator::request_validator::RequestValidator,
};

#[derive(Debug, Deserialize)]
pub struct TransactionsBroadcastRequest {
    pub id: String,
}

/// Relays a transaction previously created through this server
pub async fn transactions_broadcast(
    context: &TransferContext,
    request: TransactionsBroadcastRequest,
) -> Result<Transaction, WalletError> {
    RequestValidator::validate_transaction_id(&request.id)?;

    let stored = context
        .store
        .get(&StoreKey::transaction(&request.id))
        .await?
        .ok_or_else(|| WalletError::TransactionNotFound(request.id.clone()))?;
    let transaction: Transaction = serde_json::from_str(&stored)?;

    context.verify(&transaction)?;
    context.network.broadcast(&transaction).await?;

    log::info!("Broadcast transaction {}", transaction.id);
    Ok(transaction)
}
