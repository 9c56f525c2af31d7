//! Requested monetary movements and how they apply to an account.

use crate::account::Account;
use crate::error::TransactionError;
use crate::history::{LogEntry, TxKind};
use crate::money::Money;
use log::debug;

/// A deposit or withdrawal request carrying only its amount.
///
/// Applying a transaction either changes the balance *and* appends a log
/// entry, or does neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Credit funds to the account.
    Deposit(Money),

    /// Debit funds from the account, subject to its withdrawal policy.
    Withdrawal(Money),
}

impl Transaction {
    pub fn amount(&self) -> Money {
        match *self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => amount,
        }
    }

    pub fn kind(&self) -> TxKind {
        match self {
            Transaction::Deposit(_) => TxKind::Deposit,
            Transaction::Withdrawal(_) => TxKind::Withdrawal,
        }
    }

    /// Runs the matching account primitive and logs the transaction on success.
    pub fn apply(&self, account: &mut Account) -> Result<(), TransactionError> {
        let amount = self.amount();
        let outcome = match self {
            Transaction::Deposit(_) => account.deposit(amount),
            Transaction::Withdrawal(_) => account.withdraw(amount),
        };

        match outcome {
            Ok(()) => {
                account.record(LogEntry::new(self.kind(), amount));
                debug!(
                    "{} of {} applied to account {}, balance {}",
                    self.kind(),
                    amount,
                    account.number(),
                    account.balance()
                );
                Ok(())
            }
            Err(e) => {
                debug!(
                    "{} of {} rejected on account {}: {}",
                    self.kind(),
                    amount,
                    account.number(),
                    e
                );
                Err(e)
            }
        }
    }
}
