//! Per-account transaction log.
//!
//! The log is append-only: entries are recorded in the order transactions
//! complete and are never edited, removed or reordered.

use crate::money::Money;
use chrono::{DateTime, Local};
use std::fmt;

/// Kind of a completed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxKind {
    /// Funds credited to the account.
    Deposit,

    /// Funds debited from the account.
    Withdrawal,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Deposit => f.write_str("Deposit"),
            TxKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A single completed transaction, stamped when it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    kind: TxKind,
    amount: Money,
    timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Creates an entry stamped with the current local time.
    pub fn new(kind: TxKind, amount: Money) -> Self {
        Self::at(kind, amount, Local::now())
    }

    /// Creates an entry with an explicit timestamp.
    pub fn at(kind: TxKind, amount: Money, timestamp: DateTime<Local>) -> Self {
        LogEntry {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Ordered record of an account's completed transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    entries: Vec<LogEntry>,
}

impl TransactionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        TransactionLog {
            entries: Vec::new(),
        }
    }

    /// Appends an entry after every existing one.
    pub fn record(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries of the given kind.
    pub fn count_of_kind(&self, kind: TxKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = TransactionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.count_of_kind(TxKind::Withdrawal), 0);
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut log = TransactionLog::new();
        log.record(LogEntry::new(TxKind::Deposit, Money::from_cents(1000)));
        log.record(LogEntry::new(TxKind::Withdrawal, Money::from_cents(300)));
        log.record(LogEntry::new(TxKind::Deposit, Money::from_cents(50)));

        let kinds: Vec<TxKind> = log.entries().iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![TxKind::Deposit, TxKind::Withdrawal, TxKind::Deposit]
        );
        assert_eq!(log.entries()[1].amount(), Money::from_cents(300));
        assert!(log.entries()[0].timestamp() <= log.entries()[2].timestamp());
    }

    #[test]
    fn test_count_of_kind() {
        let mut log = TransactionLog::new();
        log.record(LogEntry::new(TxKind::Deposit, Money::from_cents(1000)));
        log.record(LogEntry::new(TxKind::Withdrawal, Money::from_cents(100)));
        log.record(LogEntry::new(TxKind::Withdrawal, Money::from_cents(200)));

        assert_eq!(log.count_of_kind(TxKind::Deposit), 1);
        assert_eq!(log.count_of_kind(TxKind::Withdrawal), 2);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TxKind::Deposit.to_string(), "Deposit");
        assert_eq!(TxKind::Withdrawal.to_string(), "Withdrawal");
    }
}
