//! # ledger-core — Foundational Types for the Typestate Ledger
//!
//! Leaf crate of the workspace. Defines the value types every account carries
//! regardless of its lifecycle state. The state machine itself lives in
//! `ledger-state`; this crate knows nothing about states.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountId` and `Amount` are
//!    newtypes with validated constructors. No bare strings for identifiers,
//!    no floats for money.
//!
//! 2. **Negative balances are unrepresentable.** `Amount` is an unsigned count
//!    of minor units. Arithmetic is checked; there are no panicking operators.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ledger-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod amount;
pub mod error;
pub mod identity;

pub use amount::{Amount, MINOR_UNITS_PER_MAJOR};
pub use error::ValidationError;
pub use identity::AccountId;
