use secp256k1::{ecdsa::Signature, Message, PublicKey, SecretKey, SECP256K1};
use std::fmt;

use crate::{
    constant::SECRET_KEY_LEN,
    crypto::{sha256, Address, NetworkVersion},
    error::WalletError,
    sanitize_error,
};

const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// A secp256k1 key pair used to sign transfers
#[derive(Clone, PartialEq, Eq)]
pub struct Keys {
    secret: SecretKey,
    public: PublicKey,
}

impl fmt::Debug for Keys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("public", &self.public_key_hex()).finish_non_exhaustive()
    }
}

impl Keys {
    /// Derives keys from a passphrase: the secret is SHA-256 of its UTF-8 bytes
    pub fn from_passphrase(passphrase: &str) -> Result<Self, WalletError> {
        Self::from_secret_bytes(&sha256(passphrase.as_bytes()))
    }

    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        let secret = SecretKey::from_slice(bytes).map_err(|e| {
            WalletError::CryptoError(format!("Invalid secret key: {}", sanitize_error!(e)))
        })?;
        let public = PublicKey::from_secret_key(SECP256K1, &secret);
        Ok(Self { secret, public })
    }

    /// Parses a compressed WIF for the given network
    pub fn from_wif(wif: &str, network: NetworkVersion) -> Result<Self, WalletError> {
        let decoded = bs58::decode(wif).with_check(None).into_vec().map_err(|e| {
            WalletError::CryptoError(format!("Invalid WIF encoding: {}", sanitize_error!(e)))
        })?;

        if decoded.len() != SECRET_KEY_LEN + 2 || decoded[SECRET_KEY_LEN + 1] != WIF_COMPRESSED_FLAG {
            return Err(WalletError::CryptoError(
                "WIF must encode a compressed secret key".to_string(),
            ));
        }

        if decoded[0] != network.wif {
            return Err(WalletError::CryptoError(format!(
                "WIF version {} does not match network version {}",
                decoded[0], network.wif
            )));
        }

        Self::from_secret_bytes(&decoded[1..=SECRET_KEY_LEN])
    }

    pub fn to_wif(&self, network: NetworkVersion) -> String {
        let mut payload = Vec::with_capacity(SECRET_KEY_LEN + 2);
        payload.push(network.wif);
        payload.extend_from_slice(&self.secret.secret_bytes());
        payload.push(WIF_COMPRESSED_FLAG);
        bs58::encode(payload).with_check().into_string()
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Compressed public key, hex encoded
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public.serialize())
    }

    pub fn secret_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.secret.secret_bytes()
    }

    pub fn address(&self, network: NetworkVersion) -> Address {
        Address::from_public_key(&self.public, network)
    }

    /// Deterministic (RFC 6979) ECDSA signature over a 32-byte digest, DER encoded
    pub fn sign(&self, digest: [u8; 32]) -> Vec<u8> {
        let message = Message::from_digest(digest);
        SECP256K1.sign_ecdsa(&message, &self.secret).serialize_der().to_vec()
    }
}

/// Checks a DER signature over `digest` against a compressed public key
pub fn verify_signature(public_key: &PublicKey, digest: [u8; 32], der_signature: &[u8]) -> bool {
    let Ok(mut signature) = Signature::from_der(der_signature) else {
        return false;
    };
    signature.normalize_s();
    SECP256K1.verify_ecdsa(&Message::from_digest(digest), &signature, public_key).is_ok()
}
