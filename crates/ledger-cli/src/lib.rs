//! # ledger-cli — Typestate Ledger Command-Line Interface
//!
//! Thin clap front end over the domain crates.
//!
//! ## Subcommands
//!
//! - `demo` — Walk an active, a closed and a pending account through the
//!   operations each state allows.
//! - `scenario` — Full lifecycle of a single account: deposit, withdraw,
//!   close, reactivate.
//! - `queue` — Parse and process a queue type, or print its JSON encoding.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers write to a caller-supplied `Write`, so tests capture output.
//! - Handlers delegate to domain crates. No state logic lives here.

pub mod config;
pub mod demo;
pub mod queue;
