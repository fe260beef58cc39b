//! Arbitrage Calculator - Entry Point
//!
//! Wiring sequence:
//! 1. Parse CLI arguments
//! 2. Load config.toml + validate (defaults when no file is given)
//! 3. Init tracing (JSON or text, always on stderr)
//! 4. Run the subcommand: one-shot calculation, legacy distribution,
//!    or the HTTP service until SIGINT

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::{info, warn};

use arbitrage_calculator::adapters::{http, input};
use arbitrage_calculator::config::{self, AppConfig, ServiceConfig};
use arbitrage_calculator::{ArbitrageCalculator, distribute_stakes};

#[derive(Parser)]
#[command(name = "arbitrage-calculator", version, about = "Back/lay/freebet arbitrage calculator")]
struct Cli {
    /// Path to config.toml (built-in defaults when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate stakes and profit for a JSON array of outcomes
    Calculate {
        /// Outcome file, stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },
    /// Distribute stakes over plain back odds from one pinned stake
    Distribute {
        /// Comma-separated decimal odds
        #[arg(long, value_delimiter = ',', required = true)]
        odds: Vec<f64>,

        #[arg(long, default_value_t = 0)]
        fixed_index: usize,

        #[arg(long)]
        stake: f64,
    },
    /// Serve the HTTP API until Ctrl-C
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── 1. Load configuration ───────────────────────────────
    let config = match &cli.config {
        Some(path) => config::loader::load_config(path).context("Failed to load configuration")?,
        None => AppConfig::default(),
    };

    // ── 2. Initialize logging ───────────────────────────────
    init_tracing(&config.service);

    let calculator = ArbitrageCalculator::new(&config.calculator);

    // ── 3. Dispatch ─────────────────────────────────────────
    match cli.command {
        Command::Calculate {
            input: path,
            pretty,
        } => {
            let outcomes = input::read_outcomes(path.as_deref(), config.server.max_outcomes)
                .context("Failed to read outcomes")?;
            let result = calculator.calculate(&outcomes);
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        }
        Command::Distribute {
            odds,
            fixed_index,
            stake,
        } => {
            let stakes = distribute_stakes(&odds, fixed_index, stake);
            println!("{}", serde_json::to_string(&stakes)?);
        }
        Command::Serve => {
            info!(
                name = %config.service.name,
                version = env!("CARGO_PKG_VERSION"),
                "Starting arbitrage calculator service"
            );
            http::serve(&config.server, calculator, shutdown_signal()).await?;
        }
    }

    Ok(())
}

/// Structured logging to stderr so stdout stays clean for results.
fn init_tracing(service: &ServiceConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&service.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if service.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Resolves on SIGINT. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for SIGINT");
        std::future::pending::<()>().await;
    }
    info!("SIGINT received, initiating graceful shutdown");
}
