//! Withdrawal policies.
//!
//! A policy runs before the account's own balance rules and may reject a
//! withdrawal on grounds the base account knows nothing about. Accounts hold
//! their policy as a trait object, so new account types only need a new
//! `WithdrawalPolicy` implementation.

use crate::error::TransactionError;
use crate::history::{TransactionLog, TxKind};
use crate::money::Money;
use std::fmt;

/// Extra validation applied to every withdrawal request.
pub trait WithdrawalPolicy: fmt::Debug {
    /// Returns `Ok(())` when the withdrawal may proceed to the balance check.
    fn check(
        &self,
        amount: Money,
        balance: Money,
        log: &TransactionLog,
    ) -> Result<(), TransactionError>;

    /// Short account type label, e.g. `"Checking"`.
    fn label(&self) -> &'static str;
}

/// No rules beyond the base balance check.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl WithdrawalPolicy for Unrestricted {
    fn check(&self, _: Money, _: Money, _: &TransactionLog) -> Result<(), TransactionError> {
        Ok(())
    }

    fn label(&self) -> &'static str {
        "Standard"
    }
}

/// Checking account rules: a per-transaction cap and a cap on the number of
/// withdrawals.
///
/// The withdrawal count is taken over the whole log. It never resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    overdraft_limit: Money,
    withdrawal_limit_count: usize,
}

impl CheckingPolicy {
    /// Default per-withdrawal cap: 500.00.
    pub const DEFAULT_OVERDRAFT_LIMIT_CENTS: i64 = 50_000;

    /// Default withdrawal count cap.
    pub const DEFAULT_WITHDRAWAL_LIMIT_COUNT: usize = 3;

    pub fn new(overdraft_limit: Money, withdrawal_limit_count: usize) -> Self {
        CheckingPolicy {
            overdraft_limit,
            withdrawal_limit_count,
        }
    }

    pub fn overdraft_limit(&self) -> Money {
        self.overdraft_limit
    }

    pub fn withdrawal_limit_count(&self) -> usize {
        self.withdrawal_limit_count
    }
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        CheckingPolicy::new(
            Money::from_cents(Self::DEFAULT_OVERDRAFT_LIMIT_CENTS),
            Self::DEFAULT_WITHDRAWAL_LIMIT_COUNT,
        )
    }
}

impl WithdrawalPolicy for CheckingPolicy {
    /// Count cap first, then the amount cap. Balance is left to the account.
    fn check(
        &self,
        amount: Money,
        _balance: Money,
        log: &TransactionLog,
    ) -> Result<(), TransactionError> {
        if log.count_of_kind(TxKind::Withdrawal) >= self.withdrawal_limit_count {
            return Err(TransactionError::WithdrawalCountExceeded);
        }

        if amount > self.overdraft_limit {
            return Err(TransactionError::WithdrawalLimitExceeded);
        }

        Ok(())
    }

    fn label(&self) -> &'static str {
        "Checking"
    }
}
