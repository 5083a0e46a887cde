use reqwest::Url;

use crate::{config::Config, state::get_config, validator::store_validator::StoreValidator};

pub struct ConfigValidator {}

impl ConfigValidator {
    /// Validates the global config, printing a report. `Ok` carries the warnings.
    pub async fn validate_with_result(
        skip_connection_checks: bool,
    ) -> Result<Vec<String>, Vec<String>> {
        let config = match get_config() {
            Ok(c) => c,
            Err(e) => return Err(vec![format!("Failed to get config: {e}")]),
        };

        let (errors, warnings) = Self::collect(config, !skip_connection_checks).await;

        println!("=== Configuration Validation ===");
        if errors.is_empty() {
            println!("✓ Configuration validation successful!");
        } else {
            println!("✗ Configuration validation failed!");
            println!("\n❌ Errors:");
            for error in &errors {
                println!("   - {error}");
            }
            println!("\nPlease fix the configuration errors above before deploying.");
        }

        if !warnings.is_empty() {
            println!("\n⚠️  Warnings:");
            for warning in &warnings {
                println!("   - {warning}");
            }
        }

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(errors)
        }
    }

    async fn collect(config: &Config, check_connections: bool) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        Self::validate_network(config, &mut errors, &mut warnings);
        Self::validate_transaction(config, &mut errors);
        Self::validate_bip38(config, &mut errors, &mut warnings);
        Self::validate_server(config, &mut errors, &mut warnings);

        let (store_errors, store_warnings) =
            StoreValidator::validate(&config.store, check_connections).await;
        errors.extend(store_errors);
        warnings.extend(store_warnings);

        (errors, warnings)
    }

    fn validate_network(config: &Config, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
        let network = &config.network;

        if network.is_standalone() {
            warnings.push(
                "No peers configured - running standalone, broadcasts stay in an in-memory ledger"
                    .to_string(),
            );
        }

        for peer in &network.peers {
            match Url::parse(peer) {
                Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {}
                Ok(_) => errors.push(format!("Peer url must be http(s) with a host: {peer}")),
                Err(e) => errors.push(format!("Invalid peer url '{peer}': {e}")),
            }
        }

        if network.timeout_secs == 0 {
            errors.push("Peer timeout_secs must be greater than 0".to_string());
        }

        if network.pub_key_hash == network.wif {
            warnings.push(format!(
                "Address and WIF version bytes are both {} - check the network parameters",
                network.wif
            ));
        }
    }

    fn validate_transaction(config: &Config, errors: &mut Vec<String>) {
        let transaction = &config.transaction;

        if transaction.transfer_fee == 0 {
            errors.push("transfer_fee must be greater than 0".to_string());
        }

        if !(1..=255).contains(&transaction.max_vendor_field_length) {
            errors.push(format!(
                "max_vendor_field_length must be between 1 and 255, got {}",
                transaction.max_vendor_field_length
            ));
        }
    }

    fn validate_bip38(config: &Config, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
        let params = config.bip38.params();

        if let Err(e) = params.validate() {
            errors.push(format!("Invalid [bip38] scrypt parameters: {e}"));
            return;
        }

        if params.log_n < crate::constant::DEFAULT_SCRYPT_LOG_N {
            warnings.push(format!(
                "⚠️  SECURITY: scrypt_log_n = {} is weaker than the BIP38 default of {}. \
                Stored wallets are cheaper to brute force.",
                params.log_n,
                crate::constant::DEFAULT_SCRYPT_LOG_N
            ));
        }
    }

    fn validate_server(config: &Config, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
        let server = &config.server;

        if server.rate_limit == 0 {
            warnings.push("Rate limit is set to 0 - this will block all requests".to_string());
        }

        if server.max_request_body_size == 0 {
            errors.push("max_request_body_size must be greater than 0".to_string());
        }

        if !server.enabled_methods.iter().any(|enabled| enabled) {
            errors.push("All rpc methods are disabled - enable at least one".to_string());
        }

        if server.auth.api_key.is_none() {
            warnings.push(
                "⚠️  SECURITY: No authentication configured. \
                Anyone who can reach the server can create wallets and sign transfers. \
                Consider setting api_key in [server.auth] or WALLETD_API_KEY."
                    .to_string(),
            );
        }
    }
}
