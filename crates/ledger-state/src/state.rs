//! # State Lattice
//!
//! The closed set of account states and the legal transition graph.
//!
//! ```text
//! Pending ──activate()──▶ Active ──close()──▶ Closed
//!                           ▲                    │
//!                           └────activate()──────┘
//! ```
//!
//! Each state is a zero-sized marker type used as the `S` parameter of
//! [`Account<S>`](crate::account::Account). [`AccountStatus`] is the runtime
//! mirror of the same lattice for code that only learns the state at runtime.
//!
//! No state is terminal. A closed account can be reactivated indefinitely.

use serde::{Deserialize, Serialize};

// ─── State Types (each is a distinct type at compile time) ───────────

/// Account state: opened but not yet usable for transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pending;

/// Account state: operational, accepts deposits and withdrawals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Active;

/// Account state: closed, may be reactivated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Closed;

// ─── Sealed Traits ───────────────────────────────────────────────────

mod private {
    pub trait Sealed {}
    impl Sealed for super::Pending {}
    impl Sealed for super::Active {}
    impl Sealed for super::Closed {}

    pub trait SealedReactivatable {}
    impl SealedReactivatable for super::Pending {}
    impl SealedReactivatable for super::Closed {}
}

/// Marker trait for all valid account states.
///
/// Sealed: only the three states defined in this module implement it.
/// External crates cannot add new states.
pub trait AccountState:
    private::Sealed + std::fmt::Debug + Copy + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// The canonical string name of this state (e.g., "ACTIVE").
    fn name() -> &'static str;

    /// The runtime mirror of this state.
    fn status() -> AccountStatus;
}

impl AccountState for Pending {
    fn name() -> &'static str {
        "PENDING"
    }
    fn status() -> AccountStatus {
        AccountStatus::Pending
    }
}

impl AccountState for Active {
    fn name() -> &'static str {
        "ACTIVE"
    }
    fn status() -> AccountStatus {
        AccountStatus::Active
    }
}

impl AccountState for Closed {
    fn name() -> &'static str {
        "CLOSED"
    }
    fn status() -> AccountStatus {
        AccountStatus::Closed
    }
}

/// States from which an account may be activated: `Pending` or `Closed`.
///
/// Sealed separately from [`AccountState`], so the union cannot be widened
/// from outside this crate.
pub trait Reactivatable: AccountState + private::SealedReactivatable {}

impl Reactivatable for Pending {}
impl Reactivatable for Closed {}

// ─── Runtime State ───────────────────────────────────────────────────

/// Runtime representation of an account state.
///
/// Used where the state is not known at compile time, e.g. when accounts of
/// different states sit in one collection (see
/// [`AnyAccount`](crate::dynamic::AnyAccount)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    /// Opened, awaiting activation.
    Pending,
    /// Operational.
    Active,
    /// Closed, reactivatable.
    Closed,
}

impl AccountStatus {
    /// All states, in lifecycle order.
    pub const ALL: [AccountStatus; 3] = [Self::Pending, Self::Active, Self::Closed];

    /// Returns the canonical state name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => Pending::name(),
            Self::Active => Active::name(),
            Self::Closed => Closed::name(),
        }
    }

    /// Look up a state by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Return the set of valid target states from this state.
    pub fn valid_transitions(&self) -> &'static [AccountStatus] {
        match self {
            Self::Pending => &[Self::Active],
            Self::Active => &[Self::Closed],
            Self::Closed => &[Self::Active],
        }
    }

    /// Whether `self → to` is an edge of the lattice.
    pub fn can_transition_to(&self, to: AccountStatus) -> bool {
        self.valid_transitions().contains(&to)
    }

    /// Whether this state may be activated.
    pub fn is_reactivatable(&self) -> bool {
        self.can_transition_to(Self::Active)
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_names_match_runtime_names() {
        assert_eq!(Pending::status().name(), Pending::name());
        assert_eq!(Active::status().name(), Active::name());
        assert_eq!(Closed::status().name(), Closed::name());
    }

    #[test]
    fn from_name_round_trips() {
        for status in AccountStatus::ALL {
            assert_eq!(AccountStatus::from_name(status.name()), Some(status));
        }
        assert_eq!(AccountStatus::from_name("active"), None);
        assert_eq!(AccountStatus::from_name("SUSPENDED"), None);
    }

    #[test]
    fn transition_matrix_exhaustive() {
        let expected_valid = [
            (AccountStatus::Pending, AccountStatus::Active),
            (AccountStatus::Active, AccountStatus::Closed),
            (AccountStatus::Closed, AccountStatus::Active),
        ];
        for from in AccountStatus::ALL {
            for to in AccountStatus::ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    expected_valid.contains(&(from, to)),
                    "transition {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn no_terminal_state() {
        for status in AccountStatus::ALL {
            assert!(!status.valid_transitions().is_empty(), "{status} is terminal");
        }
    }

    #[test]
    fn reactivatable_states() {
        assert!(AccountStatus::Pending.is_reactivatable());
        assert!(AccountStatus::Closed.is_reactivatable());
        assert!(!AccountStatus::Active.is_reactivatable());
    }

    #[test]
    fn status_serde() {
        let json = serde_json::to_string(&AccountStatus::Closed).unwrap();
        assert_eq!(json, "\"CLOSED\"");
        let parsed: AccountStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(parsed, AccountStatus::Pending);
    }
}
