//! # Public Operations
//!
//! The only entry points into the sealed account operations. Each function
//! is generic over the account type `A` and bounded by a capability trait,
//! which in turn fixes the allowed state tag. Passing an account in the wrong
//! state is a compile error; there is no runtime state check here.
//!
//! | Function | From | To | Failure |
//! |---|---|---|---|
//! | [`activate`] | Pending, Closed | Active | none |
//! | [`deposit`] | Active | Active | balance overflow |
//! | [`withdraw`] | Active | Active | insufficient funds |
//! | [`close`] | Active | Closed | none |
//! | [`withdraw_and_close`] | Active | Closed | withdrawal outcome reported, account closed anyway |
//!
//! Transitions borrow their source. The old value is not consumed and keeps
//! its state tag; it simply no longer reflects the latest lifecycle step.
//!
//! ```compile_fail
//! use ledger_state::{deposit, Account, AccountId, Amount};
//!
//! let mut pending = Account::pending(AccountId::new("PND-1").unwrap(), Amount::from_minor(5_000));
//! // ERROR: `Account<Pending>` does not implement `CanDeposit`
//! let _ = deposit(&mut pending, Amount::from_minor(1_000));
//! ```
//!
//! ```compile_fail
//! use ledger_state::{withdraw, Account, AccountId, Amount};
//!
//! let mut pending = Account::pending(AccountId::new("PND-1").unwrap(), Amount::from_minor(5_000));
//! // ERROR: `Account<Pending>` does not implement `CanWithdraw`
//! let _ = withdraw(&mut pending, Amount::from_minor(1_000));
//! ```
//!
//! ```compile_fail
//! use ledger_state::{close, Account, AccountId, Amount};
//!
//! let pending = Account::pending(AccountId::new("PND-1").unwrap(), Amount::from_minor(5_000));
//! // ERROR: `Account<Pending>` does not implement `CanClose`
//! let _closed = close(&pending);
//! ```
//!
//! ```compile_fail
//! use ledger_state::{deposit, Account, AccountId, Amount};
//!
//! let mut closed = Account::closed(AccountId::new("CLS-1").unwrap(), Amount::from_minor(5_000));
//! // ERROR: `Account<Closed>` does not implement `CanDeposit`
//! let _ = deposit(&mut closed, Amount::from_minor(1_000));
//! ```
//!
//! ```compile_fail
//! use ledger_state::{withdraw, Account, AccountId, Amount};
//!
//! let mut closed = Account::closed(AccountId::new("CLS-1").unwrap(), Amount::from_minor(5_000));
//! // ERROR: `Account<Closed>` does not implement `CanWithdraw`
//! let _ = withdraw(&mut closed, Amount::from_minor(1_000));
//! ```
//!
//! ```compile_fail
//! use ledger_state::{close, Account, AccountId, Amount};
//!
//! let closed = Account::closed(AccountId::new("CLS-1").unwrap(), Amount::from_minor(5_000));
//! // ERROR: `Account<Closed>` does not implement `CanClose`
//! let _again = close(&closed);
//! ```
//!
//! ```compile_fail
//! use ledger_state::{activate, Account, AccountId, Amount};
//!
//! let active = Account::active(AccountId::new("ACT-1").unwrap(), Amount::from_minor(5_000));
//! // ERROR: `Account<Active>` does not implement `CanActivate`
//! let _again = activate(&active);
//! ```
//!
//! ```compile_fail
//! use ledger_state::{Account, AccountId, Amount};
//!
//! let mut active = Account::active(AccountId::new("ACT-1").unwrap(), Amount::from_minor(5_000));
//! // ERROR: the sealed `deposit` method is not reachable outside the crate
//! let _ = active.deposit(Amount::from_minor(1_000));
//! ```

use ledger_core::Amount;

use crate::account::{
    sealed, Account, AccountError, ActiveAccount, ClosedAccount, PendingAccount,
};
use crate::capability::{CanActivate, CanClose, CanDeposit, CanWithdraw, CanWithdrawAndClose};
use crate::state::{Active, Closed, Reactivatable};

/// Deposit `amount` into an active account. Returns the new balance.
///
/// # Errors
///
/// [`AccountError::BalanceOverflow`] if the sum exceeds the representable
/// range; the balance is left unchanged.
pub fn deposit<A: CanDeposit>(account: &mut A, amount: Amount) -> Result<Amount, AccountError> {
    sealed::Deposit::deposit(account, amount)
}

/// Withdraw `amount` from an active account. Returns the new balance.
///
/// # Errors
///
/// [`AccountError::InsufficientFunds`] if `amount` exceeds the balance; the
/// balance is left unchanged. There are no partial withdrawals.
pub fn withdraw<A: CanWithdraw>(account: &mut A, amount: Amount) -> Result<Amount, AccountError> {
    sealed::Withdraw::withdraw(account, amount)
}

/// Close an active account (ACTIVE → CLOSED).
pub fn close<A: CanClose>(account: &A) -> Account<Closed> {
    sealed::Close::close(account)
}

/// Activate a pending or closed account (PENDING | CLOSED → ACTIVE).
///
/// `CanActivate` is only implemented when `A::State: Reactivatable`, but a
/// supertrait cannot bound an associated type on this toolchain, so the
/// bound is restated here to make the allowed states visible in the signature.
pub fn activate<A>(account: &A) -> Account<Active>
where
    A: CanActivate,
    A::State: Reactivatable,
{
    sealed::Activate::activate(account)
}

/// Activate a pending account.
pub fn activate_pending(account: &PendingAccount) -> ActiveAccount {
    activate(account)
}

/// Activate a closed account.
pub fn activate_closed(account: &ClosedAccount) -> ActiveAccount {
    activate(account)
}

/// Withdraw `amount`, then close the account whether or not the withdrawal
/// went through.
///
/// The withdrawal outcome is returned next to the closed account instead of
/// being dropped.
pub fn withdraw_and_close<A: CanWithdrawAndClose>(
    account: &mut A,
    amount: Amount,
) -> ClosingWithdrawal {
    let withdrawal = sealed::Withdraw::withdraw(account, amount);
    let closed = sealed::Close::close(&*account);
    ClosingWithdrawal { closed, withdrawal }
}

/// Result of [`withdraw_and_close`].
#[must_use = "the withdrawal may have failed even though the account was closed"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosingWithdrawal {
    /// The closed account. Always produced.
    pub closed: ClosedAccount,
    /// New balance on success, or why nothing was withdrawn.
    pub withdrawal: Result<Amount, AccountError>,
}

impl ClosingWithdrawal {
    /// Whether the withdrawal went through before closing.
    pub fn is_withdrawn(&self) -> bool {
        self.withdrawal.is_ok()
    }

    /// Split into the closed account and the withdrawal outcome.
    pub fn into_parts(self) -> (ClosedAccount, Result<Amount, AccountError>) {
        (self.closed, self.withdrawal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::AccountId;

    fn id(s: &str) -> AccountId {
        AccountId::new(s).unwrap()
    }

    fn cents(n: u64) -> Amount {
        Amount::from_minor(n)
    }

    #[test]
    fn deposit_then_withdraw() {
        let mut account = Account::active(id("ACT-1"), cents(10_000));
        assert_eq!(deposit(&mut account, cents(5_000)), Ok(cents(15_000)));
        assert_eq!(withdraw(&mut account, cents(2_500)), Ok(cents(12_500)));
        assert_eq!(account.balance(), cents(12_500));
    }

    #[test]
    fn withdraw_insufficient_reports_and_keeps_balance() {
        let mut account = Account::active(id("ACT-2"), cents(2_000));
        let err = withdraw(&mut account, cents(5_000)).unwrap_err();
        assert!(matches!(err, AccountError::InsufficientFunds { .. }));
        assert_eq!(account.balance(), cents(2_000));
    }

    #[test]
    fn close_preserves_identity_and_source() {
        let active = Account::active(id("ACT-1"), cents(12_500));
        let closed = close(&active);
        assert_eq!(closed.id(), active.id());
        assert_eq!(closed.balance(), cents(12_500));
        assert_eq!(closed.state_name(), "CLOSED");
        assert_eq!(active.state_name(), "ACTIVE");
    }

    #[test]
    fn stale_source_stays_usable_after_close() {
        let mut active = Account::active(id("ACT-1"), cents(10_000));
        let closed = close(&active);
        deposit(&mut active, cents(100)).unwrap();
        assert_eq!(active.balance(), cents(10_100));
        assert_eq!(closed.balance(), cents(10_000));
    }

    #[test]
    fn activate_pending_and_closed() {
        let pending = Account::pending(id("PND-1"), cents(5_000));
        let closed = Account::closed(id("CLS-1"), cents(20_000));

        let a = activate(&pending);
        assert_eq!(a.id(), pending.id());
        assert_eq!(a.balance(), cents(5_000));

        let b = activate(&closed);
        assert_eq!(b.id(), closed.id());
        assert_eq!(b.balance(), cents(20_000));
    }

    #[test]
    fn specialized_activation_helpers() {
        let pending = Account::pending(id("PND-1"), cents(5_000));
        let closed = Account::closed(id("CLS-1"), cents(20_000));
        assert_eq!(activate_pending(&pending), activate(&pending));
        assert_eq!(activate_closed(&closed), activate(&closed));
    }

    #[test]
    fn withdraw_and_close_success() {
        let mut account = Account::active(id("ACT-3"), cents(10_000));
        let result = withdraw_and_close(&mut account, cents(4_000));
        assert!(result.is_withdrawn());
        assert_eq!(result.withdrawal, Ok(cents(6_000)));
        assert_eq!(result.closed.balance(), cents(6_000));
        assert_eq!(result.closed.id().as_str(), "ACT-3");
    }

    #[test]
    fn withdraw_and_close_still_closes_on_insufficient_funds() {
        let mut account = Account::active(id("ACT-4"), cents(2_000));
        let (closed, withdrawal) = withdraw_and_close(&mut account, cents(5_000)).into_parts();
        assert!(matches!(
            withdrawal,
            Err(AccountError::InsufficientFunds { .. })
        ));
        assert_eq!(closed, close(&Account::active(id("ACT-4"), cents(2_000))));
        assert_eq!(account.balance(), cents(2_000));
    }

    #[test]
    fn reactivation_round_trip() {
        let pending = Account::pending(id("PND-9"), cents(5_000));
        let active = activate(&close(&activate(&pending)));
        assert_eq!(active.id(), pending.id());
        assert_eq!(active.balance(), pending.balance());
    }

    #[test]
    fn closed_accounts_reactivate_repeatedly() {
        let mut active = Account::active(id("ACT-5"), cents(1_000));
        for round in 1..=5u64 {
            deposit(&mut active, cents(100)).unwrap();
            let closed = close(&active);
            active = activate(&closed);
            assert_eq!(active.balance(), cents(1_000 + 100 * round));
        }
        assert_eq!(active.id().as_str(), "ACT-5");
    }
}
