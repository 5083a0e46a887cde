use secp256k1::PublicKey;
use std::fmt;

use crate::{
    constant::ADDRESS_PAYLOAD_LEN,
    crypto::{hash160, NetworkVersion},
    error::WalletError,
};

/// A base58check address: `pub_key_hash | RIPEMD160(SHA256(public key))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    payload: [u8; ADDRESS_PAYLOAD_LEN],
}

impl Address {
    pub fn from_public_key(public_key: &PublicKey, network: NetworkVersion) -> Self {
        let mut payload = [0u8; ADDRESS_PAYLOAD_LEN];
        payload[0] = network.pub_key_hash;
        payload[1..].copy_from_slice(&hash160(&public_key.serialize()));
        Self { payload }
    }

    /// Decodes any well-formed address regardless of its network
    pub fn decode(address: &str) -> Result<Self, WalletError> {
        let decoded = bs58::decode(address)
            .with_check(None)
            .into_vec()
            .map_err(|_| WalletError::ValidationError(format!("Invalid address {address}")))?;

        let payload: [u8; ADDRESS_PAYLOAD_LEN] = decoded.try_into().map_err(|_| {
            WalletError::ValidationError(format!("Invalid address length for {address}"))
        })?;

        Ok(Self { payload })
    }

    /// Parses an address and checks that it belongs to `network`
    pub fn parse(address: &str, network: NetworkVersion) -> Result<Self, WalletError> {
        let parsed = Self::decode(address)?;

        if parsed.version() != network.pub_key_hash {
            return Err(WalletError::ValidationError(format!(
                "Address {address} does not belong to network version {}",
                network.pub_key_hash
            )));
        }

        Ok(parsed)
    }

    pub fn payload(&self) -> &[u8; ADDRESS_PAYLOAD_LEN] {
        &self.payload
    }

    pub fn version(&self) -> u8 {
        self.payload[0]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.payload).with_check().into_string())
    }
}
