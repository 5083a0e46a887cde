// Network defaults (devnet)
pub const DEFAULT_NETWORK_NAME: &str = "devnet";
pub const DEFAULT_PUB_KEY_HASH: u8 = 30;
pub const DEFAULT_WIF: u8 = 170;
pub const DEFAULT_PEER_TIMEOUT_SECS: u64 = 10;

// Transactions
pub const TRANSACTION_VERSION: u8 = 2;
pub const TRANSACTION_HEADER: u8 = 0xff;
pub const CORE_TYPE_GROUP: u32 = 1;
pub const TRANSFER_TYPE: u16 = 0;
pub const DEFAULT_TRANSFER_FEE: u64 = 10_000_000;
pub const DEFAULT_MAX_VENDOR_FIELD_LENGTH: usize = 255;
pub const TRANSACTION_ID_HEX_LEN: usize = 64;

// Keys and addresses
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;
pub const SECRET_KEY_LEN: usize = 32;
pub const ADDRESS_PAYLOAD_LEN: usize = 21;

// BIP38 scrypt cost (N = 2^14, r = 8, p = 8)
pub const DEFAULT_SCRYPT_LOG_N: u8 = 14;
pub const DEFAULT_SCRYPT_R: u32 = 8;
pub const DEFAULT_SCRYPT_P: u32 = 8;

// Store key prefixes
pub const TRANSACTION_KEY_PREFIX: &str = "transaction";
pub const WALLET_KEY_PREFIX: &str = "wallet";

// HTTP Headers
pub const X_API_KEY: &str = "x-api-key";

// Request body size limit
pub const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 2 * 1024 * 1024; // 2 MB
pub const DEFAULT_RATE_LIMIT: u64 = 100;

// Env overrides
pub const API_KEY_ENV: &str = "WALLETD_API_KEY";

// JSON-RPC method names
pub mod method_names {
    pub const LIVENESS: &str = "liveness";
    pub const TRANSACTIONS_INFO: &str = "transactions.info";
    pub const TRANSACTIONS_CREATE: &str = "transactions.create";
    pub const TRANSACTIONS_BROADCAST: &str = "transactions.broadcast";
    pub const TRANSACTIONS_BIP38_CREATE: &str = "transactions.bip38.create";
    pub const WALLETS_CREATE: &str = "wallets.create";
    pub const WALLETS_BIP38_CREATE: &str = "wallets.bip38.create";
    pub const WALLETS_BIP38_INFO: &str = "wallets.bip38.info";
}
