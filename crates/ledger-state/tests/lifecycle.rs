//! # Account Lifecycle Scenarios
//!
//! End-to-end walkthroughs through the public API only, plus shared access
//! from several threads behind a mutex.

use parking_lot::Mutex;

use ledger_state::{
    activate, activate_closed, activate_pending, close, deposit, withdraw, withdraw_and_close,
    Account, AccountError, AccountId, AccountStatus, ActiveAccount, Amount, AnyAccount,
};

fn id(s: &str) -> AccountId {
    AccountId::new(s).unwrap()
}

fn major(n: u64) -> Amount {
    Amount::from_major(n).unwrap()
}

// ---------------------------------------------------------------------------
// 1. Active account through deposit, withdraw, close, reactivate
// ---------------------------------------------------------------------------

#[test]
fn active_account_full_cycle() {
    let mut account = Account::active(id("ACT-1"), major(100));

    deposit(&mut account, major(50)).unwrap();
    assert_eq!(account.balance(), major(150));

    assert_eq!(withdraw(&mut account, major(25)), Ok(major(125)));
    assert_eq!(account.balance(), major(125));

    let closed = close(&account);
    assert_eq!(closed.id().as_str(), "ACT-1");
    assert_eq!(closed.balance(), major(125));
    assert_eq!(closed.status(), AccountStatus::Closed);

    let reopened = activate(&closed);
    assert_eq!(reopened.id().as_str(), "ACT-1");
    assert_eq!(reopened.balance(), major(125));
    assert_eq!(reopened.status(), AccountStatus::Active);
}

// ---------------------------------------------------------------------------
// 2. Overdraw attempt leaves the balance alone
// ---------------------------------------------------------------------------

#[test]
fn overdraw_is_refused() {
    let mut account = Account::active(id("ACT-2"), major(20));
    let err = withdraw(&mut account, major(50)).unwrap_err();
    assert_eq!(
        err,
        AccountError::InsufficientFunds {
            account: id("ACT-2"),
            requested: major(50),
            available: major(20),
        }
    );
    assert_eq!(account.balance(), major(20));
}

// ---------------------------------------------------------------------------
// 3. Pending account onboarding
// ---------------------------------------------------------------------------

#[test]
fn pending_account_is_readable_then_activated() {
    let pending = Account::pending(id("PND-1"), major(50));
    assert_eq!(pending.balance(), major(50));
    assert_eq!(pending.id().as_str(), "PND-1");

    let mut active = activate_pending(&pending);
    deposit(&mut active, major(10)).unwrap();
    assert_eq!(active.balance(), major(60));
    assert_eq!(pending.balance(), major(50));
}

#[test]
fn closed_account_reactivation_helper() {
    let closed = Account::closed(id("CLS-456"), major(200));
    let active = activate_closed(&closed);
    assert_eq!(active.balance(), major(200));
}

// ---------------------------------------------------------------------------
// 4. Withdraw-and-close reports the withdrawal outcome
// ---------------------------------------------------------------------------

#[test]
fn withdraw_and_close_reports_failure_but_closes() {
    let mut account = Account::active(id("ACT-3"), major(20));
    let result = withdraw_and_close(&mut account, major(50));
    assert!(!result.is_withdrawn());
    assert_eq!(result.closed.balance(), major(20));
    assert_eq!(result.closed.status(), AccountStatus::Closed);
}

#[test]
fn withdraw_and_close_covered() {
    let mut account = Account::active(id("ACT-4"), major(100));
    let (closed, withdrawal) = withdraw_and_close(&mut account, major(40)).into_parts();
    assert_eq!(withdrawal, Ok(major(60)));
    assert_eq!(closed.balance(), major(60));
}

// ---------------------------------------------------------------------------
// 5. Mixed-state collections
// ---------------------------------------------------------------------------

#[test]
fn activate_everything_that_can_be_activated() {
    let accounts: Vec<AnyAccount> = vec![
        Account::active(id("ACT-123"), major(100)).into(),
        Account::closed(id("CLS-456"), major(200)).into(),
        Account::pending(id("PND-789"), major(50)).into(),
    ];

    let activated: Vec<ActiveAccount> = accounts
        .iter()
        .filter_map(|a| a.try_activate().ok())
        .collect();

    let ids: Vec<&str> = activated.iter().map(|a| a.id().as_str()).collect();
    assert_eq!(ids, ["CLS-456", "PND-789"]);
}

// ---------------------------------------------------------------------------
// 6. Shared account behind a lock
// ---------------------------------------------------------------------------

#[test]
fn concurrent_deposits_behind_mutex() {
    let shared = Mutex::new(Account::active(id("ACT-MT"), Amount::ZERO));

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let shared = &shared;
            scope.spawn(move || {
                for _ in 0..100 {
                    let mut account = shared.lock();
                    deposit(&mut *account, Amount::from_minor(1)).unwrap();
                }
            });
        }
    });

    assert_eq!(shared.lock().balance(), Amount::from_minor(800));
}

#[test]
fn concurrent_withdrawals_never_overdraw() {
    let shared = Mutex::new(Account::active(id("ACT-MT2"), Amount::from_minor(500)));

    let successes: usize = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = &shared;
                scope.spawn(move || {
                    (0..100)
                        .filter(|_| withdraw(&mut *shared.lock(), Amount::from_minor(1)).is_ok())
                        .count()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(successes, 500);
    assert_eq!(shared.lock().balance(), Amount::ZERO);
}
