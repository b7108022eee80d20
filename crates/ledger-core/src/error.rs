//! # Error Types
//!
//! Validation failures raised by the constructors of the core newtypes.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations and carry the offending input.

use thiserror::Error;

/// Input rejected by a validated constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Account identifier is empty or whitespace only.
    #[error("invalid account ID: must be non-empty")]
    EmptyAccountId,

    /// Amount string could not be parsed into minor units.
    #[error("invalid amount: \"{input}\" ({reason})")]
    InvalidAmount {
        /// The string that failed to parse.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Amount does not fit in the minor-unit representation.
    #[error("amount overflow: {major} major units exceeds the representable range")]
    AmountOverflow {
        /// The major-unit value that overflowed.
        major: u64,
    },
}
