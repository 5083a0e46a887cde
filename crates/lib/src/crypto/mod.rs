pub mod address;
pub mod keys;

pub use address::Address;
pub use keys::Keys;

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Version bytes that tie keys and addresses to one network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkVersion {
    pub pub_key_hash: u8,
    pub wif: u8,
}

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}
