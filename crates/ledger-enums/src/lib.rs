//! # ledger-enums — Closed Enumerations
//!
//! Enumerations whose set of values is fixed by this crate. Callers can only
//! obtain a value by naming a variant or by parsing one of the canonical
//! names; there is no integer or free-form string backdoor.

pub mod queue;

pub use queue::{process_queue, ParseQueueTypeError, QueueType};
