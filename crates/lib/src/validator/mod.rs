pub mod config_validator;
pub mod request_validator;
pub mod store_validator;
