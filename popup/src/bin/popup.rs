use anyhow::Result;
use clap::{Parser, Subcommand};
use dev_popup::prelude::*;
use human_panic::setup_panic;
use tracing::{Level, enabled, error, info};

/// popup
///
/// Ask the user something from a script. Alerts, confirmations and free-form
/// dialogs are routed through the same gateway an application would use,
/// falling back to terminal prompts (or a fixed answer) when no modal
/// back-end is available.
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(flatten)]
    logging: LoggingOpts,

    #[clap(flatten)]
    config: ConfigOptions,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a message and wait until it is dismissed.
    #[clap(alias("a"))]
    Alert(AlertArgs),
    /// Ask a yes/no question. Exits 0 when confirmed, 1 otherwise.
    #[clap(alias("c"))]
    Confirm(ConfirmArgs),
    /// Request a caller-defined dialog. Prints the result as JSON.
    #[clap(alias("s"))]
    Show(ShowArgs),
}

#[tokio::main]
async fn main() {
    setup_panic!();
    dotenvy::dotenv().ok();
    let opts = Cli::parse();

    let run_id = opts.config.get_run_id();
    let (_guard, file_location) = match opts.logging.configure_logging(&run_id).await {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("Unable to configure logging. {}", e);
            std::process::exit(2);
        }
    };
    let error_code = run_subcommand(opts, &run_id).await;

    if error_code > 1 || enabled!(Level::DEBUG) {
        info!(target: "user", "More detailed logs at {}", file_location);
    }

    std::process::exit(error_code);
}

async fn run_subcommand(opts: Cli, run_id: &str) -> i32 {
    let loaded_config = match opts.config.load_config(run_id).await {
        Err(e) => {
            error!(target: "user", "Failed to load configuration: {}", e);
            return 2;
        }
        Ok(c) => c,
    };

    let gateway = loaded_config.build_gateway();
    let error_code = handle_commands(&gateway, &opts.command)
        .await
        .unwrap_or_else(|e| {
            if e.downcast_ref::<DialogConfigError>().is_some() {
                error!(target: "user", "Invalid dialog config. {}", e);
                2
            } else {
                error!(target: "user", "Critical Error. {}", e);
                3
            }
        });
    gateway.clear_backends().await;

    error_code
}

async fn handle_commands(gateway: &DialogGateway, command: &Command) -> Result<i32> {
    match command {
        Command::Alert(args) => alert_root(gateway, args).await,
        Command::Confirm(args) => confirm_root(gateway, args).await,
        Command::Show(args) => show_root(gateway, args).await,
    }
}
