use crate::log::LoggingFormat;
use clap::Parser;

/// RPC server arguments
#[derive(Parser)]
pub struct RpcArgs {
    /// HTTP port to listen on for RPC requests
    #[arg(short = 'p', long, default_value = "8080")]
    pub port: u16,

    /// Output format for logs (standard or json)
    #[arg(long, default_value = "standard")]
    pub logging_format: LoggingFormat,

    #[command(flatten)]
    pub auth_args: AuthArgs,
}

#[derive(Parser)]
pub struct AuthArgs {
    /// API key for authenticating requests to the walletd server (optional) - can be set in `walletd.toml`
    #[arg(long, env = "WALLETD_API_KEY", help_heading = "Authentication")]
    pub api_key: Option<String>,
}
