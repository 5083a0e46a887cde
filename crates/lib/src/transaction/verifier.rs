use mockall::automock;

use crate::transaction::Transaction;

/// Decides whether a transaction may be stored and relayed
#[automock]
pub trait TransactionVerifier: Send + Sync {
    fn verify_hash(&self, transaction: &Transaction) -> bool;
}

/// Checks the sender signature and that the id matches the signed content
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureVerifier;

impl TransactionVerifier for SignatureVerifier {
    fn verify_hash(&self, transaction: &Transaction) -> bool {
        transaction.verify()
    }
}
