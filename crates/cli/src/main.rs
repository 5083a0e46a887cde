mod args;

use args::GlobalArgs;
use clap::{Parser, Subcommand};
use walletd_lib::{
    error::WalletError,
    log::{default_log_filter, LoggingFormat},
    rpc_server::{run_rpc_server, RpcArgs, ServerHandles, WalletRpc},
    state::{get_config, init_config},
    validator::config_validator::ConfigValidator,
    Config,
};

#[derive(Subcommand)]
enum Commands {
    /// Configuration management commands
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
    /// RPC server operations
    Rpc {
        #[command(subcommand)]
        rpc_command: RpcCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Validate configuration file (fast, no store connection)
    Validate,
    /// Validate configuration file and test the store connection
    ValidateWithStore,
}

#[derive(Subcommand)]
enum RpcCommands {
    /// Start the RPC server
    #[command(
        about = "Start the RPC server",
        long_about = "Start the walletd RPC server to create wallets and sign transfers.\n\nThe server validates the configuration and connects to the store before starting."
    )]
    Start {
        #[command(flatten)]
        rpc_args: Box<RpcArgs>,
    },
}

#[derive(Parser)]
#[command(author, version, about = "walletd - wallet and transfer signing RPC server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[tokio::main]
async fn main() -> Result<(), WalletError> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load_config(&cli.global_args.config).unwrap_or_else(|e| {
        print_error(&format!("Failed to load config: {e}"));
        std::process::exit(1);
    });

    // A key given on the command line wins over the file
    if let Some(Commands::Rpc { rpc_command: RpcCommands::Start { rpc_args } }) = &cli.command {
        if let Some(api_key) = &rpc_args.auth_args.api_key {
            config.server.auth.api_key = Some(api_key.clone());
        }
    }

    init_config(config).unwrap_or_else(|e| {
        print_error(&format!("Failed to initialize config: {e}"));
        std::process::exit(1);
    });

    match cli.command {
        Some(Commands::Config { config_command }) => {
            let skip_connection_checks = matches!(config_command, ConfigCommands::Validate);
            let result = ConfigValidator::validate_with_result(skip_connection_checks).await;
            std::process::exit(if result.is_ok() { 0 } else { 1 });
        }
        Some(Commands::Rpc { rpc_command }) => match rpc_command {
            RpcCommands::Start { rpc_args } => {
                match ConfigValidator::validate_with_result(false).await {
                    Err(errors) => {
                        for e in errors {
                            print_error(&format!("Validation error: {e}"));
                        }
                        std::process::exit(1);
                    }
                    Ok(warnings) => {
                        for w in warnings {
                            println!("Warning: {w}");
                        }
                    }
                }

                setup_logging(&rpc_args.logging_format);

                let config = get_config()?;
                let wallet_rpc = WalletRpc::from_config(config).await.unwrap_or_else(|e| {
                    print_error(&format!("Failed to initialize store or network: {e}"));
                    std::process::exit(1);
                });
                log::info!(
                    "Serving {} network (address version {})",
                    config.network.name,
                    wallet_rpc.network_version().pub_key_hash
                );

                let ServerHandles { rpc_handle, .. } =
                    run_rpc_server(wallet_rpc, rpc_args.port).await?;

                if let Err(e) = tokio::signal::ctrl_c().await {
                    panic!("Error waiting for Ctrl+C signal: {e:?}");
                }
                println!("Shutting down server...");

                if let Err(e) = rpc_handle.stop() {
                    panic!("Error stopping RPC server: {e:?}");
                }
            }
        },
        None => {
            println!("No command specified. Use --help for usage information.");
            println!("Available commands:");
            println!("  config validate            - Validate configuration");
            println!("  config validate-with-store - Validate configuration and store connection");
            println!("  rpc start                  - Start RPC server");
        }
    }

    Ok(())
}

fn print_error(message: &str) {
    eprintln!("Error: {message}");
}

fn setup_logging(format: &LoggingFormat) {
    let subscriber = tracing_subscriber::fmt().with_env_filter(default_log_filter());
    match format {
        LoggingFormat::Standard => subscriber.init(),
        LoggingFormat::Json => subscriber.json().init(),
    }
}
