//! # ledger-state — Typestate Account Lifecycle
//!
//! Models an account lifecycle with the typestate pattern. Each state is a
//! distinct Rust type, operations are only callable on accounts in the right
//! state, and invalid operations are compile errors rather than runtime
//! checks.
//!
//! ```text
//! Pending ──activate()──▶ Active ──close()──▶ Closed
//!                           ▲                    │
//!                           └────activate()──────┘
//! ```
//!
//! ## Layers
//!
//! - **State lattice** (`state.rs`): marker types `Pending`, `Active`,
//!   `Closed`, the sealed `AccountState` trait and the `Reactivatable` union.
//! - **Account** (`account.rs`): `Account<S>` plus the crate-private sealed
//!   operations. Universal accessors (`id()`, `balance()`) work in every state.
//! - **Capabilities** (`capability.rs`): `CanDeposit`, `CanWithdraw`,
//!   `CanClose`, `CanActivate`, `CanWithdrawAndClose`. Each one requires both
//!   "is an `Account<S>`" and "implements a sealed operation", so no type from
//!   another crate can impersonate an account.
//! - **Operations** (`operation.rs`): `deposit`, `withdraw`, `close`,
//!   `activate`, `withdraw_and_close`. The only way in.
//! - **Runtime view** (`dynamic.rs`): `AnyAccount` for collections of
//!   accounts in mixed states.
//!
//! ## Example
//!
//! ```
//! use ledger_state::{activate, close, deposit, withdraw, Account, AccountId, Amount};
//!
//! let mut account = Account::active(AccountId::new("ACT-1")?, Amount::parse("100")?);
//! deposit(&mut account, Amount::parse("50")?)?;
//! assert_eq!(account.balance(), Amount::parse("150")?);
//!
//! withdraw(&mut account, Amount::parse("25")?)?;
//! assert_eq!(account.balance(), Amount::parse("125")?);
//!
//! let closed = close(&account);
//! assert_eq!(closed.state_name(), "CLOSED");
//!
//! let reopened = activate(&closed);
//! assert_eq!(reopened.id().as_str(), "ACT-1");
//! assert_eq!(reopened.balance(), Amount::parse("125")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Calling an operation in the wrong state does not compile:
//!
//! ```compile_fail
//! use ledger_state::{deposit, Account, AccountId, Amount};
//!
//! let mut pending = Account::pending(AccountId::new("PND-1").unwrap(), Amount::from_minor(5_000));
//! // ERROR: the trait bound `Account<Pending>: CanDeposit` is not satisfied
//! let _ = deposit(&mut pending, Amount::from_minor(1_000));
//! ```
//!
//! ## Concurrency
//!
//! Deposit and withdraw take `&mut`, so the borrow checker already enforces
//! single-owner access. Share an account across threads behind a mutex.

pub mod account;
pub mod capability;
pub mod dynamic;
pub mod operation;
pub mod state;

pub use ledger_core::{AccountId, Amount};

// ─── State re-exports ───────────────────────────────────────────────

pub use state::{AccountState, AccountStatus, Active, Closed, Pending, Reactivatable};

// ─── Account re-exports ─────────────────────────────────────────────

pub use account::{Account, AccountError, ActiveAccount, ClosedAccount, PendingAccount};

// ─── Capability re-exports ──────────────────────────────────────────

pub use capability::{
    AccountHandle, CanActivate, CanClose, CanDeposit, CanWithdraw, CanWithdrawAndClose,
};

// ─── Operation re-exports ───────────────────────────────────────────

pub use operation::{
    activate, activate_closed, activate_pending, close, deposit, withdraw, withdraw_and_close,
    ClosingWithdrawal,
};

// ─── Runtime view re-exports ────────────────────────────────────────

pub use dynamic::AnyAccount;
