//! Account model and balance primitives.
//!
//! Maintains the invariant: `balance >= 0` at all times.

use crate::config::LedgerConfig;
use crate::error::TransactionError;
use crate::history::{LogEntry, TransactionLog};
use crate::money::Money;
use crate::policy::{Unrestricted, WithdrawalPolicy};

/// Branch code shared by every account.
pub const BRANCH: &str = "0001";

/// A bank account owned by a single client.
///
/// # Invariants
///
/// - `balance` is never negative
/// - `balance` only changes through a successful [`deposit`](Self::deposit)
///   or [`withdraw`](Self::withdraw)
/// - The log is only appended to, and only after a successful primitive
///
/// # Withdrawal Policy
///
/// Every withdrawal first goes through the account's [`WithdrawalPolicy`].
/// A checking account carries a [`CheckingPolicy`](crate::CheckingPolicy);
/// plain accounts use [`Unrestricted`].
#[derive(Debug)]
pub struct Account {
    number: u32,
    balance: Money,
    /// Tax id of the owning client. A back-reference, not ownership.
    owner: String,
    log: TransactionLog,
    policy: Box<dyn WithdrawalPolicy>,
}

impl Account {
    /// Creates an account with zero balance and no extra withdrawal rules.
    pub fn new(number: u32, owner: impl Into<String>) -> Self {
        Self::with_policy(number, owner, Box::new(Unrestricted))
    }

    /// Creates an account with zero balance and the given withdrawal policy.
    pub fn with_policy(
        number: u32,
        owner: impl Into<String>,
        policy: Box<dyn WithdrawalPolicy>,
    ) -> Self {
        Account {
            number,
            balance: Money::ZERO,
            owner: owner.into(),
            log: TransactionLog::new(),
            policy,
        }
    }

    /// Creates a checking account with the limits from `config`.
    pub fn checking(number: u32, owner: impl Into<String>, config: &LedgerConfig) -> Self {
        Self::with_policy(number, owner, Box::new(config.checking_policy()))
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Tax id of the client owning this account.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    /// Account type label from the withdrawal policy.
    pub fn kind(&self) -> &'static str {
        self.policy.label()
    }

    /// Credits `amount` to the balance.
    ///
    /// Fails with `InvalidAmount` if `amount <= 0`, or `BalanceOverflow`
    /// if the new balance is not representable. Does not touch the log.
    pub fn deposit(&mut self, amount: Money) -> Result<(), TransactionError> {
        if !amount.is_positive() {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TransactionError::BalanceOverflow)?;
        Ok(())
    }

    /// Debits `amount` from the balance.
    ///
    /// The withdrawal policy runs first; then fails with:
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientFunds` if `amount > balance`
    ///
    /// Does not touch the log.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), TransactionError> {
        self.policy.check(amount, self.balance, &self.log)?;

        if !amount.is_positive() {
            return Err(TransactionError::InvalidAmount);
        }

        if amount > self.balance {
            return Err(TransactionError::InsufficientFunds);
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(TransactionError::InsufficientFunds)?;
        Ok(())
    }

    pub(crate) fn record(&mut self, entry: LogEntry) {
        self.log.record(entry);
    }

    /// Verifies the invariant: `balance >= 0`.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        self.balance >= Money::ZERO
    }
}
