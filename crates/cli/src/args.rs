use clap::Parser;

/// Global arguments used by all subcommands
#[derive(Debug, Parser)]
#[command(name = "walletd")]
pub struct GlobalArgs {
    /// Path to walletd configuration file (TOML format)
    #[arg(long, env = "WALLETD_CONFIG", default_value = "walletd.toml")]
    pub config: String,
}
