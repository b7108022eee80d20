//! # ledger CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledger_cli::config::DemoConfig;
use ledger_cli::demo::{run_demo, run_scenario, ScenarioArgs};
use ledger_cli::queue::{run_queue, QueueArgs};

/// Typestate ledger CLI.
///
/// Walks accounts through the Pending → Active → Closed lifecycle, where
/// every operation is checked against the account state at compile time.
#[derive(Parser, Debug)]
#[command(name = "ledger", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML demo configuration file.
    #[arg(long, global = true, env = "LEDGER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one account in each state through its allowed operations.
    Demo,

    /// Take a single account through deposit, withdraw, close and reactivation.
    Scenario(ScenarioArgs),

    /// Parse and process a queue type.
    Queue(QueueArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, "ledger CLI starting");

    let mut stdout = std::io::stdout().lock();
    let result = match &cli.command {
        Commands::Demo => {
            DemoConfig::resolve(cli.config.as_deref()).and_then(|config| run_demo(&config, &mut stdout))
        }
        Commands::Scenario(args) => run_scenario(args, &mut stdout),
        Commands::Queue(args) => run_queue(args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
