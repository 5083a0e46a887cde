use crate::{
    crypto::{Address, NetworkVersion},
    error::WalletError,
    transaction::TransactionUtil,
};

/// Checks caller supplied parameters before any key material is touched
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator {
    network: NetworkVersion,
    max_vendor_field_length: usize,
}

impl RequestValidator {
    pub fn new(network: NetworkVersion, max_vendor_field_length: usize) -> Self {
        Self { network, max_vendor_field_length }
    }

    pub fn validate_transfer(
        &self,
        amount: u64,
        recipient_id: &str,
        vendor_field: Option<&str>,
    ) -> Result<(), WalletError> {
        if amount == 0 {
            return Err(WalletError::ValidationError(
                "amount must be greater than zero".to_string(),
            ));
        }

        Self::require_non_empty("recipientId", recipient_id)?;
        Address::parse(recipient_id, self.network)?;

        if let Some(vendor_field) = vendor_field {
            if vendor_field.is_empty() {
                return Err(WalletError::ValidationError(
                    "vendorField must not be empty when given".to_string(),
                ));
            }
            if vendor_field.len() > self.max_vendor_field_length {
                return Err(WalletError::ValidationError(format!(
                    "vendorField is {} bytes, at most {} are allowed",
                    vendor_field.len(),
                    self.max_vendor_field_length
                )));
            }
        }

        Ok(())
    }

    pub fn require_non_empty(field: &str, value: &str) -> Result<(), WalletError> {
        if value.trim().is_empty() {
            return Err(WalletError::ValidationError(format!("{field} must not be empty")));
        }
        Ok(())
    }

    pub fn validate_transaction_id(id: &str) -> Result<(), WalletError> {
        if !TransactionUtil::is_transaction_id(id) {
            return Err(WalletError::ValidationError(format!(
                "id must be a 64 character hex string, got '{id}'"
            )));
        }
        Ok(())
    }
}
