//! # Demo and Scenario Subcommands
//!
//! `demo` builds one account in each state from [`DemoConfig`] and runs
//! every operation the state allows. `scenario` takes a single active
//! account through deposit, withdraw, close and reactivation.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use ledger_core::{AccountId, Amount};
use ledger_state::{
    activate, close, deposit, withdraw, Account, AccountState, ActiveAccount, ClosedAccount,
    PendingAccount,
};

use crate::config::DemoConfig;

/// Arguments for the `ledger scenario` subcommand.
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Account identifier.
    #[arg(long, default_value = "ACT-1")]
    pub id: AccountId,

    /// Opening balance of the active account.
    #[arg(long, default_value = "100")]
    pub balance: Amount,

    /// Amount to deposit.
    #[arg(long, default_value = "50")]
    pub deposit: Amount,

    /// Amount to withdraw.
    #[arg(long, default_value = "25")]
    pub withdraw: Amount,
}

/// Execute the demo subcommand.
pub fn run_demo(config: &DemoConfig, out: &mut dyn Write) -> Result<u8> {
    let mut active = ActiveAccount::active(config.active.account_id()?, config.active.balance);
    let closed = ClosedAccount::closed(config.closed.account_id()?, config.closed.balance);
    let pending = PendingAccount::pending(config.pending.account_id()?, config.pending.balance);

    writeln!(out, "=== Typestate Accounts ===")?;
    writeln!(out, "Initial balances:")?;
    writeln!(out, "  {}", describe(&active))?;
    writeln!(out, "  {}", describe(&closed))?;
    writeln!(out, "  {}", describe(&pending))?;

    writeln!(out)?;
    writeln!(out, "Valid operations:")?;
    let balance = deposit(&mut active, config.deposit)?;
    writeln!(out, "  Deposited ${} to {}: ${balance}", config.deposit, active.id())?;
    match withdraw(&mut active, config.withdraw) {
        Ok(balance) => writeln!(out, "  Withdrew ${} from {}: ${balance}", config.withdraw, active.id())?,
        Err(err) => writeln!(out, "  Withdrawal refused: {err}")?,
    }

    writeln!(out)?;
    writeln!(out, "State transitions:")?;
    let activated = activate(&pending);
    writeln!(out, "  Activated pending account: {}", describe(&activated))?;
    let newly_closed = close(&active);
    writeln!(out, "  Closed active account: {}", describe(&newly_closed))?;
    let reopened = activate(&closed);
    writeln!(out, "  Reactivated closed account: {}", describe(&reopened))?;

    Ok(0)
}

/// Execute the scenario subcommand.
pub fn run_scenario(args: &ScenarioArgs, out: &mut dyn Write) -> Result<u8> {
    let mut account = ActiveAccount::active(args.id.clone(), args.balance);
    writeln!(out, "open      {}", describe(&account))?;

    deposit(&mut account, args.deposit)?;
    writeln!(out, "deposit   {} -> {}", args.deposit, describe(&account))?;

    match withdraw(&mut account, args.withdraw) {
        Ok(_) => writeln!(out, "withdraw  {} -> {}", args.withdraw, describe(&account))?,
        Err(err) => writeln!(out, "withdraw  {} refused: {err}", args.withdraw)?,
    }

    let closed = close(&account);
    writeln!(out, "close     {}", describe(&closed))?;

    let reopened = activate(&closed);
    writeln!(out, "activate  {}", describe(&reopened))?;

    Ok(0)
}

fn describe<S: AccountState>(account: &Account<S>) -> String {
    format!(
        "{} [{}] ${}",
        account.id(),
        account.state_name(),
        account.balance()
    )
}
