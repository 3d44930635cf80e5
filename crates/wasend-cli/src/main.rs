//! Wasend CLI — entry point.
//!
//! # Commands
//!
//! - `wasend send --to NUMBER --message TEXT [--via CHANNEL] [--delay MIN]` — dispatch one message
//! - `wasend onboard` — initialize configuration
//! - `wasend status [--probe]` — show configuration and channel status

mod helpers;
mod onboard;
mod send_cmd;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// 💬 wasend — WhatsApp message dispatcher
#[derive(Parser)]
#[command(name = "wasend", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a WhatsApp message
    Send(send_cmd::SendArgs),

    /// Initialize configuration
    Onboard,

    /// Show configuration and channel status
    Status {
        /// Probe the automation driver's health endpoint
        #[arg(long, default_value_t = false)]
        probe: bool,
    },
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Send(args) => {
            init_logging(args.logs);
            send_cmd::run(args).await
        }
        Commands::Onboard => onboard::run(),
        Commands::Status { probe } => {
            init_logging(false);
            status::run(probe).await
        }
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("wasend_core=debug,wasend_channels=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
