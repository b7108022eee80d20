//! # Queue Subcommand
//!
//! Parses a queue type name and either processes it or prints its JSON
//! encoding. Unknown names are an error.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use ledger_enums::{process_queue, QueueType};

/// Arguments for the `ledger queue` subcommand.
#[derive(Args, Debug)]
pub struct QueueArgs {
    /// Queue type: FIFO, LIFO, PRIORITY or ROUND_ROBIN.
    pub name: String,

    /// Print the JSON encoding instead of processing the queue.
    #[arg(long)]
    pub json: bool,
}

/// Execute the queue subcommand.
pub fn run_queue(args: &QueueArgs, out: &mut dyn Write) -> Result<u8> {
    let queue = QueueType::parse(&args.name).context("unrecognized queue type")?;
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&queue)?)?;
    } else {
        writeln!(out, "{}", process_queue(queue))?;
    }
    Ok(0)
}
