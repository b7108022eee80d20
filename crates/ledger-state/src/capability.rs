//! # Capability Traits
//!
//! Each public operation is gated by a capability trait that requires two
//! things at once:
//!
//! 1. **Anchor** — the type is literally `Account<S>` for an allowed `S`
//!    ([`AccountHandle`] is sealed and implemented only for `Account<S>`).
//! 2. **Sealed operation** — the type implements the matching operation
//!    trait from the crate-private `account::sealed` module.
//!
//! Neither half can be satisfied from another crate, so holding an
//! `Account<Active>` is the only way to hold [`CanDeposit`], [`CanWithdraw`]
//! or [`CanClose`], and holding an `Account<Pending>` or `Account<Closed>` is
//! the only way to hold [`CanActivate`].
//!
//! A look-alike type from another crate cannot opt in:
//!
//! ```compile_fail
//! use ledger_state::CanDeposit;
//!
//! struct Counterfeit;
//!
//! // ERROR: `Counterfeit` does not implement the sealed supertraits
//! impl CanDeposit for Counterfeit {}
//! ```
//!
//! nor can it claim to be an account through the anchor:
//!
//! ```compile_fail
//! use ledger_state::{AccountHandle, Active};
//!
//! struct Counterfeit;
//!
//! // ERROR: `Counterfeit` does not implement the sealed `Anchor` supertrait
//! impl AccountHandle for Counterfeit {
//!     type State = Active;
//! }
//! ```
//!
//! and the sealed traits themselves cannot be named:
//!
//! ```compile_fail
//! // ERROR: module `sealed` is private
//! use ledger_state::account::sealed::Deposit;
//! ```

use crate::account::{sealed, Account};
use crate::state::{AccountState, Active, Reactivatable};

/// Anchor: "is exactly an `Account` tagged with `Self::State`".
///
/// Sealed: implemented for `Account<S>` and nothing else.
pub trait AccountHandle: sealed::Anchor {
    /// The state tag carried by this account.
    type State: AccountState;
}

impl<S: AccountState> AccountHandle for Account<S> {
    type State = S;
}

/// May receive deposits. Held only by `Account<Active>`.
pub trait CanDeposit: AccountHandle<State = Active> + sealed::Deposit {}

impl<A> CanDeposit for A where A: AccountHandle<State = Active> + sealed::Deposit {}

/// May be withdrawn from. Held only by `Account<Active>`.
pub trait CanWithdraw: AccountHandle<State = Active> + sealed::Withdraw {}

impl<A> CanWithdraw for A where A: AccountHandle<State = Active> + sealed::Withdraw {}

/// May be closed. Held only by `Account<Active>`.
pub trait CanClose: AccountHandle<State = Active> + sealed::Close {}

impl<A> CanClose for A where A: AccountHandle<State = Active> + sealed::Close {}

/// May be withdrawn from and then closed in one call.
pub trait CanWithdrawAndClose: CanWithdraw + CanClose {}

impl<A> CanWithdrawAndClose for A where A: CanWithdraw + CanClose {}

/// May be activated. Held by `Account<Pending>` and `Account<Closed>`.
pub trait CanActivate: AccountHandle + sealed::Activate {}

impl<A> CanActivate for A
where
    A: AccountHandle + sealed::Activate,
    A::State: Reactivatable,
{
}
