/// Passphrase whose devnet wallet is `SENDER_ADDRESS`
pub const PASSPHRASE: &str = "this is a top secret passphrase";
pub const SENDER_ADDRESS: &str = "DUUaQiknyKHDgA8NHFGgwxH8Tr1yzsrry3";
pub const SENDER_PUBLIC_KEY: &str =
    "034151a3ec46b5670a682b0a63394f863587d1bc97483b1b6c70eb58e7f0aed192";

pub const RECIPIENT_ADDRESS: &str = "D61mfSggzbvQgTUe6JhYKH2doHaqJ3Dyib";
pub const TRANSFER_AMOUNT: u64 = 100_000_000;
pub const VENDOR_FIELD: &str = "Hello World";

pub const BIP38_PASSPHRASE: &str = "this is a top secret passphrase";
pub const UNKNOWN_USER_ID: &str = "123456789";
pub const UNKNOWN_TRANSACTION_ID: &str =
    "e4311204acf8a86ba833e494f5292475c6e9e0913fc455a12601b4b6b55818d8";

pub const TEST_API_KEY: &str = "test-api-key-123";
