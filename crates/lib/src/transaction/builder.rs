use crate::{
    constant::{CORE_TYPE_GROUP, DEFAULT_TRANSFER_FEE, TRANSACTION_VERSION, TRANSFER_TYPE},
    crypto::{Keys, NetworkVersion},
    error::WalletError,
    transaction::Transaction,
};

/// Assembles and signs a core transfer
#[derive(Debug, Clone)]
pub struct TransferBuilder {
    network: NetworkVersion,
    recipient_id: String,
    amount: u64,
    fee: u64,
    nonce: u64,
    vendor_field: Option<String>,
}

impl TransferBuilder {
    pub fn new(network: NetworkVersion) -> Self {
        Self {
            network,
            recipient_id: String::new(),
            amount: 0,
            fee: DEFAULT_TRANSFER_FEE,
            nonce: 1,
            vendor_field: None,
        }
    }

    pub fn recipient_id(mut self, recipient_id: impl Into<String>) -> Self {
        self.recipient_id = recipient_id.into();
        self
    }

    pub fn amount(mut self, amount: u64) -> Self {
        self.amount = amount;
        self
    }

    pub fn fee(mut self, fee: u64) -> Self {
        self.fee = fee;
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// An empty memo leaves the field unset
    pub fn vendor_field(mut self, vendor_field: impl Into<String>) -> Self {
        let vendor_field = vendor_field.into();
        self.vendor_field = (!vendor_field.is_empty()).then_some(vendor_field);
        self
    }

    /// Signs with `keys`, filling in the sender, signature and id
    pub fn sign(self, keys: &Keys) -> Result<Transaction, WalletError> {
        let mut transaction = Transaction {
            id: String::new(),
            version: TRANSACTION_VERSION,
            network: self.network.pub_key_hash,
            type_group: CORE_TYPE_GROUP,
            transaction_type: TRANSFER_TYPE,
            nonce: self.nonce,
            sender_public_key: keys.public_key_hex(),
            fee: self.fee,
            amount: self.amount,
            recipient_id: self.recipient_id,
            vendor_field: self.vendor_field,
            expiration: 0,
            signature: String::new(),
        };

        let hash = transaction.signing_hash()?;
        transaction.signature = hex::encode(keys.sign(hash));
        transaction.id = transaction.compute_id()?;

        Ok(transaction)
    }
}
