//! Ledger configuration.
//!
//! Defaults match a standard checking account. The binary may override the
//! checking limits through environment variables:
//!
//! - `LEDGER_OVERDRAFT_LIMIT`: per-withdrawal cap, e.g. `750.00`
//! - `LEDGER_WITHDRAWAL_LIMIT`: maximum number of withdrawals per account

use crate::money::Money;
use crate::policy::CheckingPolicy;
use log::warn;
use std::env;
use std::str::FromStr;

/// Environment variable overriding the per-withdrawal cap.
pub const OVERDRAFT_LIMIT_VAR: &str = "LEDGER_OVERDRAFT_LIMIT";

/// Environment variable overriding the withdrawal count cap.
pub const WITHDRAWAL_LIMIT_VAR: &str = "LEDGER_WITHDRAWAL_LIMIT";

/// Settings applied to newly opened accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Cap on a single checking withdrawal.
    pub overdraft_limit: Money,

    /// Maximum number of withdrawals a checking account accepts.
    pub withdrawal_limit_count: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        let policy = CheckingPolicy::default();
        LedgerConfig {
            overdraft_limit: policy.overdraft_limit(),
            withdrawal_limit_count: policy.withdrawal_limit_count(),
        }
    }
}

impl LedgerConfig {
    /// Builds a configuration from defaults plus any environment overrides.
    ///
    /// Unparseable or non-positive overrides are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LedgerConfig::default();

        if let Some(raw) = lookup(OVERDRAFT_LIMIT_VAR) {
            match Money::from_str(&raw) {
                Ok(limit) if limit.is_positive() => config.overdraft_limit = limit,
                _ => warn!("Ignoring invalid {}={:?}", OVERDRAFT_LIMIT_VAR, raw),
            }
        }

        if let Some(raw) = lookup(WITHDRAWAL_LIMIT_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(count) => config.withdrawal_limit_count = count,
                Err(_) => warn!("Ignoring invalid {}={:?}", WITHDRAWAL_LIMIT_VAR, raw),
            }
        }

        config
    }

    /// The checking policy described by this configuration.
    pub fn checking_policy(&self) -> CheckingPolicy {
        CheckingPolicy::new(self.overdraft_limit, self.withdrawal_limit_count)
    }
}
