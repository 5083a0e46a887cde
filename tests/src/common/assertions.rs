use serde_json::Value;
use walletd_lib::transaction::Transaction;

/// Trait for common RPC response assertions
pub trait RpcAssertions {
    /// Assert the response indicates success
    fn assert_success(&self);

    /// Assert the response contains an error with the given code
    fn assert_error(&self, expected_code: i32);

    /// Assert the error carries exactly this message
    fn assert_error_message(&self, expected_message: &str);

    /// Parse the result as a signed transaction
    fn result_transaction(&self) -> Transaction;
}

impl RpcAssertions for Value {
    fn assert_success(&self) {
        if let Some(error) = self.get("error") {
            panic!(
                "Expected successful response, but got error: {}",
                serde_json::to_string_pretty(error).unwrap()
            );
        }
        assert!(self.get("result").is_some(), "Response has no result: {self}");
    }

    fn assert_error(&self, expected_code: i32) {
        let error =
            self.get("error").expect("Expected error in response, but got successful result");

        let code =
            error.get("code").and_then(|c| c.as_i64()).expect("Error response missing code field");

        assert_eq!(
            code,
            expected_code as i64,
            "Expected error code {}, got {}. Full error: {}",
            expected_code,
            code,
            serde_json::to_string_pretty(error).unwrap()
        );
    }

    fn assert_error_message(&self, expected_message: &str) {
        let message = self
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .expect("Error response missing message field");
        assert_eq!(message, expected_message);
    }

    fn result_transaction(&self) -> Transaction {
        self.assert_success();
        serde_json::from_value(self["result"].clone()).expect("Result is not a transaction")
    }
}

/// Checks every field a freshly signed transfer must carry
pub fn assert_signed_transfer(
    transaction: &Transaction,
    recipient: &str,
    amount: u64,
    vendor_field: Option<&str>,
) {
    assert_eq!(transaction.recipient_id, recipient);
    assert_eq!(transaction.amount, amount);
    assert_eq!(transaction.vendor_field.as_deref(), vendor_field);
    assert_eq!(transaction.id.len(), 64, "Transaction id must be 64 hex chars");
    assert!(!transaction.signature.is_empty(), "Transaction must be signed");
    assert!(transaction.verify(), "Transaction signature does not verify");
}
