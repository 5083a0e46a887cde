use clap::ValueEnum;

/// Output format of the server logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoggingFormat {
    Standard,
    Json,
}

/// Default filter applied when `RUST_LOG` is not set
pub fn default_log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| "info,jsonrpsee_server=warn,hyper=warn".into())
}
