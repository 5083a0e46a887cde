use crate::{config::StoreConfig, store::RedisStore};

pub struct StoreValidator {}

impl StoreValidator {
    /// Returns `(errors, warnings)` for the `[store]` section
    pub async fn validate(
        store_config: &StoreConfig,
        check_connection: bool,
    ) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let Some(url) = &store_config.url else {
            warnings.push(
                "No store url configured - wallets and transactions are kept in memory and lost on restart"
                    .to_string(),
            );
            return (errors, warnings);
        };

        if !url.starts_with("redis://") && !url.starts_with("rediss://") {
            errors.push("Invalid store url format - must start with redis:// or rediss://".to_string());
            return (errors, warnings);
        }

        if check_connection {
            if let Err(e) = RedisStore::connect(url).await {
                errors.push(format!("Store connection failed: {e}"));
            }
        }

        (errors, warnings)
    }
}
