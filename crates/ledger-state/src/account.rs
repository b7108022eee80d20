//! # Account Entity
//!
//! `Account<S>` carries an identifier and a balance; `S` is the lifecycle
//! state and exists only at compile time.
//!
//! This module is also the only place where the sealed operations
//! (deposit, withdraw, close, activate) are implemented. They live in the
//! crate-private `sealed` module, so no code outside `ledger-state` can
//! name them, implement them, or call them. External callers reach them
//! exclusively through the functions in [`crate::operation`].
//!
//! ## Invariants
//!
//! - `id` never changes, in any state or across any transition.
//! - `balance` only changes through `sealed::Deposit` / `sealed::Withdraw`,
//!   which exist only for `Account<Active>`.
//! - A transition reads its source and builds a new value. The source is
//!   left untouched and stays usable.

use std::marker::PhantomData;

use ledger_core::{AccountId, Amount};
use thiserror::Error;

use crate::state::{AccountState, AccountStatus, Active, Closed, Pending};

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors that can occur during account operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Withdrawal larger than the available balance. The balance is unchanged.
    #[error("insufficient funds in account {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        /// The account the withdrawal was attempted on.
        account: AccountId,
        /// Amount requested.
        requested: Amount,
        /// Balance at the time of the request.
        available: Amount,
    },

    /// Deposit would overflow the minor-unit range. The balance is unchanged.
    #[error("balance overflow in account {account}: {balance} + {amount}")]
    BalanceOverflow {
        /// The account the deposit was attempted on.
        account: AccountId,
        /// Balance at the time of the request.
        balance: Amount,
        /// Amount that could not be added.
        amount: Amount,
    },

    /// Runtime-checked transition not allowed by the state lattice.
    #[error("invalid account transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: AccountStatus,
        /// Attempted target state.
        to: AccountStatus,
    },
}

// ─── The Account ─────────────────────────────────────────────────────

/// A ledger account, parameterized by its lifecycle state.
///
/// Only state-appropriate operations accept it at compile time.
/// `Account<Active>` can be deposited to, withdrawn from and closed.
/// `Account<Pending>` and `Account<Closed>` can only be activated.
/// Every state supports [`id()`](Account::id) and [`balance()`](Account::balance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account<S: AccountState> {
    id: AccountId,
    balance: Amount,
    _state: PhantomData<S>,
}

/// An account awaiting activation.
pub type PendingAccount = Account<Pending>;

/// An operational account.
pub type ActiveAccount = Account<Active>;

/// A closed account.
pub type ClosedAccount = Account<Closed>;

impl<S: AccountState> Account<S> {
    /// Create an account directly in state `S`.
    ///
    /// Any state may be chosen; `Pending` is the conventional entry point.
    pub fn new(id: AccountId, balance: Amount) -> Self {
        Self {
            id,
            balance,
            _state: PhantomData,
        }
    }

    /// The account identifier.
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// The current balance.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Returns the canonical state name (e.g., "PENDING", "ACTIVE").
    pub fn state_name(&self) -> &'static str {
        S::name()
    }

    /// The runtime mirror of the state tag.
    pub fn status(&self) -> AccountStatus {
        S::status()
    }

    /// Build a copy of this account tagged with state `T`.
    fn transition_to<T: AccountState>(&self) -> Account<T> {
        tracing::debug!(
            account = %self.id,
            from = S::name(),
            to = T::name(),
            balance = %self.balance,
            "account transition"
        );
        Account {
            id: self.id.clone(),
            balance: self.balance,
            _state: PhantomData,
        }
    }
}

impl Account<Pending> {
    /// Create an account in PENDING state.
    pub fn pending(id: AccountId, balance: Amount) -> Self {
        Self::new(id, balance)
    }
}

impl Account<Active> {
    /// Create an account in ACTIVE state.
    pub fn active(id: AccountId, balance: Amount) -> Self {
        Self::new(id, balance)
    }
}

impl Account<Closed> {
    /// Create an account in CLOSED state.
    pub fn closed(id: AccountId, balance: Amount) -> Self {
        Self::new(id, balance)
    }
}

// ─── Sealed Operations ───────────────────────────────────────────────

/// Per-state operation implementations.
///
/// The module is crate-private: the traits are `pub` only so that the
/// capability traits in [`crate::capability`] can use them as supertraits.
pub(crate) mod sealed {
    use super::*;
    use crate::state::Reactivatable;

    /// Implemented for `Account<S>` and nothing else.
    pub trait Anchor {}

    impl<S: AccountState> Anchor for Account<S> {}

    pub trait Deposit {
        /// Add `amount` to the balance and return the new balance.
        fn deposit(&mut self, amount: Amount) -> Result<Amount, AccountError>;
    }

    pub trait Withdraw {
        /// Subtract `amount` if covered, returning the new balance.
        fn withdraw(&mut self, amount: Amount) -> Result<Amount, AccountError>;
    }

    pub trait Close {
        fn close(&self) -> Account<Closed>;
    }

    pub trait Activate {
        fn activate(&self) -> Account<Active>;
    }

    impl Deposit for Account<Active> {
        fn deposit(&mut self, amount: Amount) -> Result<Amount, AccountError> {
            let Some(balance) = self.balance.checked_add(amount) else {
                tracing::warn!(account = %self.id, balance = %self.balance, amount = %amount, "deposit overflow");
                return Err(AccountError::BalanceOverflow {
                    account: self.id.clone(),
                    balance: self.balance,
                    amount,
                });
            };
            self.balance = balance;
            tracing::debug!(account = %self.id, amount = %amount, balance = %balance, "deposit");
            Ok(balance)
        }
    }

    impl Withdraw for Account<Active> {
        fn withdraw(&mut self, amount: Amount) -> Result<Amount, AccountError> {
            let Some(balance) = self.balance.checked_sub(amount) else {
                tracing::warn!(account = %self.id, balance = %self.balance, amount = %amount, "insufficient funds");
                return Err(AccountError::InsufficientFunds {
                    account: self.id.clone(),
                    requested: amount,
                    available: self.balance,
                });
            };
            self.balance = balance;
            tracing::debug!(account = %self.id, amount = %amount, balance = %balance, "withdraw");
            Ok(balance)
        }
    }

    impl Close for Account<Active> {
        fn close(&self) -> Account<Closed> {
            self.transition_to()
        }
    }

    impl<S: Reactivatable> Activate for Account<S> {
        fn activate(&self) -> Account<Active> {
            self.transition_to()
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
