//! # Demo Configuration
//!
//! The accounts and amounts used by `ledger demo`. Defaults reproduce the
//! stock walkthrough; a YAML file passed with `--config` (or the
//! `LEDGER_CONFIG` environment variable) overrides any subset of fields.
//!
//! ```yaml
//! active:
//!   id: ACT-123
//!   balance: "100.00"
//! deposit: "50"
//! withdraw: "25"
//! ```
//!
//! Amounts are quoted decimal strings. Unquoted scalars such as `50.5` or
//! `50` are rejected, even though YAML would read them as numbers.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use ledger_core::{AccountId, Amount, ValidationError};

/// Initial identifier and balance of one demo account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountSeed {
    /// Account identifier.
    pub id: String,
    /// Opening balance.
    #[serde(deserialize_with = "quoted_amount")]
    pub balance: Amount,
}

impl AccountSeed {
    fn new(id: &str, balance_minor: u64) -> Self {
        Self {
            id: id.to_string(),
            balance: Amount::from_minor(balance_minor),
        }
    }

    /// Validate the identifier.
    pub fn account_id(&self) -> Result<AccountId, ValidationError> {
        AccountId::new(self.id.as_str())
    }
}

/// Settings for `ledger demo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Account created in ACTIVE state.
    pub active: AccountSeed,
    /// Account created in CLOSED state.
    pub closed: AccountSeed,
    /// Account created in PENDING state.
    pub pending: AccountSeed,
    /// Amount deposited into the active account.
    #[serde(deserialize_with = "quoted_amount")]
    pub deposit: Amount,
    /// Amount withdrawn from the active account.
    #[serde(deserialize_with = "quoted_amount")]
    pub withdraw: Amount,
}

/// Accept only a YAML string scalar and run it through [`Amount::parse`].
fn quoted_amount<'de, D>(deserializer: D) -> Result<Amount, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(text) => Amount::parse(&text).map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "amount must be a quoted decimal string, got {other:?}"
        ))),
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            active: AccountSeed::new("ACT-123", 10_000),
            closed: AccountSeed::new("CLS-456", 20_000),
            pending: AccountSeed::new("PND-789", 5_000),
            deposit: Amount::from_minor(5_000),
            withdraw: Amount::from_minor(2_500),
        }
    }
}

impl DemoConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded demo config");
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
