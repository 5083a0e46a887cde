//! BIP38 passphrase encryption of secret keys (non EC-multiplied mode).
//!
//! Layout of the 39-byte payload before base58check:
//! `0x01 0x42 | flag | address hash[4] | encrypted half 1[16] | encrypted half 2[16]`
//!
//! The address hash is the first four bytes of SHA256d of the key's address
//! string and doubles as the salt for scrypt and as the passphrase check on
//! decryption.

use aes::{
    cipher::{BlockDecrypt, BlockEncrypt, KeyInit},
    Aes256, Block,
};
use scrypt::{scrypt, Params};

use crate::{
    constant::{DEFAULT_SCRYPT_LOG_N, DEFAULT_SCRYPT_P, DEFAULT_SCRYPT_R, SECRET_KEY_LEN},
    crypto::{sha256d, Keys, NetworkVersion},
    error::WalletError,
    sanitize_error,
};

const PREFIX: [u8; 2] = [0x01, 0x42];
const FLAG_COMPRESSED: u8 = 0xe0;
const FLAG_UNCOMPRESSED: u8 = 0xc0;
const PAYLOAD_LEN: usize = 39;

/// scrypt cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bip38Params {
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
}

impl Default for Bip38Params {
    fn default() -> Self {
        Self { log_n: DEFAULT_SCRYPT_LOG_N, r: DEFAULT_SCRYPT_R, p: DEFAULT_SCRYPT_P }
    }
}

impl Bip38Params {
    fn scrypt_params(&self) -> Result<Params, WalletError> {
        Params::new(self.log_n, self.r, self.p, 64).map_err(|e| {
            WalletError::CryptoError(format!("Invalid scrypt parameters: {}", sanitize_error!(e)))
        })
    }

    pub fn validate(&self) -> Result<(), WalletError> {
        self.scrypt_params().map(|_| ())
    }
}

fn address_hash(keys: &Keys, network: NetworkVersion) -> [u8; 4] {
    let address = keys.address(network).to_string();
    let digest = sha256d(address.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

fn derive_key(
    passphrase: &str,
    salt: &[u8; 4],
    params: Bip38Params,
) -> Result<[u8; 64], WalletError> {
    let mut derived = [0u8; 64];
    scrypt(passphrase.as_bytes(), salt, &params.scrypt_params()?, &mut derived).map_err(|e| {
        WalletError::CryptoError(format!("scrypt derivation failed: {}", sanitize_error!(e)))
    })?;
    Ok(derived)
}

/// Encrypts a compressed secret key into a `6P...` string
pub fn encrypt(
    keys: &Keys,
    passphrase: &str,
    network: NetworkVersion,
    params: Bip38Params,
) -> Result<String, WalletError> {
    let salt = address_hash(keys, network);
    let derived = derive_key(passphrase, &salt, params)?;
    let (half1, half2) = derived.split_at(32);

    let cipher = Aes256::new_from_slice(half2)
        .map_err(|_| WalletError::CryptoError("Invalid AES key length".to_string()))?;

    let secret = keys.secret_bytes();
    let mut xored = [0u8; SECRET_KEY_LEN];
    for ((out, s), h) in xored.iter_mut().zip(secret.iter()).zip(half1) {
        *out = s ^ h;
    }

    let mut block1 = Block::clone_from_slice(&xored[..16]);
    let mut block2 = Block::clone_from_slice(&xored[16..]);
    cipher.encrypt_block(&mut block1);
    cipher.encrypt_block(&mut block2);

    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.extend_from_slice(&PREFIX);
    payload.push(FLAG_COMPRESSED);
    payload.extend_from_slice(&salt);
    payload.extend_from_slice(&block1);
    payload.extend_from_slice(&block2);

    Ok(bs58::encode(payload).with_check().into_string())
}

/// Decrypts a `6P...` string. A wrong passphrase surfaces as `InvalidPassphrase`
/// with an empty subject; callers fill in who it belongs to.
pub fn decrypt(
    encrypted: &str,
    passphrase: &str,
    network: NetworkVersion,
    params: Bip38Params,
) -> Result<Keys, WalletError> {
    let payload = bs58::decode(encrypted).with_check(None).into_vec().map_err(|e| {
        WalletError::CryptoError(format!("Invalid BIP38 encoding: {}", sanitize_error!(e)))
    })?;

    if payload.len() != PAYLOAD_LEN || payload[..2] != PREFIX {
        return Err(WalletError::CryptoError("Invalid BIP38 payload".to_string()));
    }
    match payload[2] {
        FLAG_COMPRESSED => {}
        FLAG_UNCOMPRESSED => {
            return Err(WalletError::CryptoError(
                "Uncompressed BIP38 keys are not supported".to_string(),
            ))
        }
        _ => return Err(WalletError::CryptoError("Unsupported BIP38 flag byte".to_string())),
    }

    let salt: [u8; 4] = [payload[3], payload[4], payload[5], payload[6]];
    let derived = derive_key(passphrase, &salt, params)?;
    let (half1, half2) = derived.split_at(32);

    let cipher = Aes256::new_from_slice(half2)
        .map_err(|_| WalletError::CryptoError("Invalid AES key length".to_string()))?;

    let mut block1 = Block::clone_from_slice(&payload[7..23]);
    let mut block2 = Block::clone_from_slice(&payload[23..39]);
    cipher.decrypt_block(&mut block1);
    cipher.decrypt_block(&mut block2);

    let mut secret = [0u8; SECRET_KEY_LEN];
    for ((out, b), h) in secret.iter_mut().zip(block1.iter().chain(block2.iter())).zip(half1) {
        *out = b ^ h;
    }

    // An out-of-range secret can only come from a wrong passphrase
    let keys = Keys::from_secret_bytes(&secret)
        .map_err(|_| WalletError::InvalidPassphrase(String::new()))?;

    if address_hash(&keys, network) != salt {
        return Err(WalletError::InvalidPassphrase(String::new()));
    }

    Ok(keys)
}
