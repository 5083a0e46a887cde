use secp256k1::PublicKey;
use serde::{Deserialize, Serialize};

use crate::{
    constant::{COMPRESSED_PUBLIC_KEY_LEN, TRANSACTION_HEADER},
    crypto::{keys::verify_signature, sha256, Address},
    error::WalletError,
    transaction::deserialize_u64_lenient,
};

/// A signed transfer as exchanged with callers and peers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub version: u8,
    pub network: u8,
    pub type_group: u32,
    #[serde(rename = "type")]
    pub transaction_type: u16,
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub nonce: u64,
    pub sender_public_key: String,
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub fee: u64,
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub amount: u64,
    pub recipient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_field: Option<String>,
    #[serde(default)]
    pub expiration: u32,
    pub signature: String,
}

pub struct TransactionUtil {}

impl TransactionUtil {
    pub fn decode_public_key(hex_key: &str) -> Result<PublicKey, WalletError> {
        let bytes = hex::decode(hex_key).map_err(|e| {
            WalletError::SerializationError(format!("Invalid sender public key hex: {e}"))
        })?;
        if bytes.len() != COMPRESSED_PUBLIC_KEY_LEN {
            return Err(WalletError::SerializationError(format!(
                "Sender public key must be {COMPRESSED_PUBLIC_KEY_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(PublicKey::from_slice(&bytes)?)
    }

    pub fn is_transaction_id(id: &str) -> bool {
        id.len() == crate::constant::TRANSACTION_ID_HEX_LEN
            && id.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl Transaction {
    /// Wire encoding of the transaction, optionally followed by its signature
    pub fn to_bytes(&self, include_signature: bool) -> Result<Vec<u8>, WalletError> {
        let sender = TransactionUtil::decode_public_key(&self.sender_public_key)?;
        let recipient = Address::decode(&self.recipient_id)?;
        let vendor_field = self.vendor_field.as_deref().unwrap_or_default().as_bytes();

        let vendor_field_len = u8::try_from(vendor_field.len()).map_err(|_| {
            WalletError::SerializationError(format!(
                "Vendor field is {} bytes, the encoding allows at most 255",
                vendor_field.len()
            ))
        })?;

        let mut bytes = Vec::with_capacity(128);
        bytes.push(TRANSACTION_HEADER);
        bytes.push(self.version);
        bytes.push(self.network);
        bytes.extend_from_slice(&self.type_group.to_le_bytes());
        bytes.extend_from_slice(&self.transaction_type.to_le_bytes());
        bytes.extend_from_slice(&self.nonce.to_le_bytes());
        bytes.extend_from_slice(&sender.serialize());
        bytes.extend_from_slice(&self.fee.to_le_bytes());
        bytes.push(vendor_field_len);
        bytes.extend_from_slice(vendor_field);
        bytes.extend_from_slice(&self.amount.to_le_bytes());
        bytes.extend_from_slice(&self.expiration.to_le_bytes());
        bytes.extend_from_slice(recipient.payload());

        if include_signature {
            let signature = hex::decode(&self.signature).map_err(|e| {
                WalletError::SerializationError(format!("Invalid signature hex: {e}"))
            })?;
            bytes.extend_from_slice(&signature);
        }

        Ok(bytes)
    }

    /// Digest that the sender signs
    pub fn signing_hash(&self) -> Result<[u8; 32], WalletError> {
        Ok(sha256(&self.to_bytes(false)?))
    }

    /// Hex SHA-256 of the signed encoding
    pub fn compute_id(&self) -> Result<String, WalletError> {
        Ok(hex::encode(sha256(&self.to_bytes(true)?)))
    }

    /// Checks the signature against the sender public key
    pub fn verify_signature(&self) -> bool {
        let (Ok(public_key), Ok(hash), Ok(signature)) = (
            TransactionUtil::decode_public_key(&self.sender_public_key),
            self.signing_hash(),
            hex::decode(&self.signature),
        ) else {
            return false;
        };
        verify_signature(&public_key, hash, &signature)
    }

    /// Full self-check: valid signature and an id matching the content
    pub fn verify(&self) -> bool {
        self.verify_signature()
            && self.compute_id().map(|id| id == self.id).unwrap_or(false)
    }
}
