use std::sync::atomic::{AtomicPtr, Ordering};

use crate::{config::Config, error::WalletError};

// Global config, written once at startup and read without locking afterwards
static GLOBAL_CONFIG: AtomicPtr<Config> = AtomicPtr::new(std::ptr::null_mut());

/// Initialize the global config with a Config instance
pub fn init_config(config: Config) -> Result<(), WalletError> {
    let config_ptr = Box::into_raw(Box::new(config));

    if GLOBAL_CONFIG
        .compare_exchange(std::ptr::null_mut(), config_ptr, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        // SAFETY: the pointer was created above and never published
        drop(unsafe { Box::from_raw(config_ptr) });
        return Err(WalletError::InternalServerError("Config already initialized".to_string()));
    }

    Ok(())
}

/// Get a reference to the global config
pub fn get_config() -> Result<&'static Config, WalletError> {
    let config_ptr = GLOBAL_CONFIG.load(Ordering::Acquire);
    if config_ptr.is_null() {
        return Err(WalletError::InternalServerError("Config not initialized".to_string()));
    }

    // SAFETY: the config is leaked on init and lives for the rest of the program
    Ok(unsafe { &*config_ptr })
}

/// Update the global config with a new full config (test only)
#[cfg(test)]
pub fn update_config(new_config: Config) -> Result<(), WalletError> {
    let new_ptr = Box::into_raw(Box::new(new_config));
    // The previous config is leaked, earlier callers may still hold it
    GLOBAL_CONFIG.swap(new_ptr, Ordering::AcqRel);

    Ok(())
}
