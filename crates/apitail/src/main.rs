//! Apitail - live tail of API request logs
//!
//! # Usage
//!
//! ```bash
//! # Stream request logs as they happen
//! apitail tail --api-key sk_test_...
//!
//! # Only failed requests, as machine-readable JSON
//! apitail tail --filter-status-code-type 4XX --filter-status-code-type 5XX --format json
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Apitail - live tail of API request logs
#[derive(Parser, Debug)]
#[command(name = "apitail")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stream API request logs in real time
    Tail(cmd::tail::TailArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Tail initializes its own logging
        Command::Tail(args) => cmd::tail::run(args).await,
    }
}
