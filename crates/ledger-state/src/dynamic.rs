//! # AnyAccount — Runtime State Dispatch
//!
//! When the state of an account is only known at runtime (a mixed list of
//! accounts, a status report), `AnyAccount` holds one typed account and
//! dispatches by matching on it. Every arm forwards to the typestate API, so
//! the runtime path can never reach an operation the static path forbids;
//! illegal requests surface as [`AccountError::InvalidTransition`].

use ledger_core::{AccountId, Amount};

use crate::account::{Account, AccountError, ActiveAccount, ClosedAccount, PendingAccount};
use crate::operation::{activate, close};
use crate::state::{AccountStatus, Active, Closed, Pending};

/// An account of any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyAccount {
    /// Awaiting activation.
    Pending(PendingAccount),
    /// Operational.
    Active(ActiveAccount),
    /// Closed.
    Closed(ClosedAccount),
}

impl AnyAccount {
    /// Current runtime state.
    pub fn status(&self) -> AccountStatus {
        match self {
            Self::Pending(a) => a.status(),
            Self::Active(a) => a.status(),
            Self::Closed(a) => a.status(),
        }
    }

    /// The account identifier.
    pub fn id(&self) -> &AccountId {
        match self {
            Self::Pending(a) => a.id(),
            Self::Active(a) => a.id(),
            Self::Closed(a) => a.id(),
        }
    }

    /// The current balance.
    pub fn balance(&self) -> Amount {
        match self {
            Self::Pending(a) => a.balance(),
            Self::Active(a) => a.balance(),
            Self::Closed(a) => a.balance(),
        }
    }

    /// Activate if the account is pending or closed.
    ///
    /// # Errors
    ///
    /// [`AccountError::InvalidTransition`] if the account is already active.
    pub fn try_activate(&self) -> Result<ActiveAccount, AccountError> {
        match self {
            Self::Pending(a) => Ok(activate(a)),
            Self::Closed(a) => Ok(activate(a)),
            Self::Active(_) => Err(self.invalid(AccountStatus::Active)),
        }
    }

    /// Close if the account is active.
    ///
    /// # Errors
    ///
    /// [`AccountError::InvalidTransition`] if the account is pending or closed.
    pub fn try_close(&self) -> Result<ClosedAccount, AccountError> {
        match self {
            Self::Active(a) => Ok(close(a)),
            Self::Pending(_) | Self::Closed(_) => Err(self.invalid(AccountStatus::Closed)),
        }
    }

    /// Borrow the typed account if it is active, to deposit or withdraw.
    pub fn as_active_mut(&mut self) -> Option<&mut ActiveAccount> {
        match self {
            Self::Active(a) => Some(a),
            _ => None,
        }
    }

    fn invalid(&self, to: AccountStatus) -> AccountError {
        AccountError::InvalidTransition {
            from: self.status(),
            to,
        }
    }
}

macro_rules! impl_into_any_account {
    ($state_type:ty, $variant:ident) => {
        impl From<Account<$state_type>> for AnyAccount {
            fn from(account: Account<$state_type>) -> Self {
                AnyAccount::$variant(account)
            }
        }
    };
}

impl_into_any_account!(Pending, Pending);
impl_into_any_account!(Active, Active);
impl_into_any_account!(Closed, Closed);
