//! # Banking Ledger
//!
//! A personal-banking ledger: clients, checking accounts, and the deposits
//! and withdrawals that move their balances, with a full audit trail per
//! account.
//!
//! ## Design Principles
//!
//! - **Exact cents**: amounts via `rust_decimal`, never rounded, checked arithmetic
//! - **All-or-nothing transactions**: a balance change and its log entry
//!   happen together or not at all
//! - **Pluggable withdrawal rules**: accounts hold a [`WithdrawalPolicy`]
//! - **Strict invariants**: balances never go negative
//!
//! ## Example
//!
//! ```
//! use banking_ledger::{Bank, LedgerConfig, Money};
//! use chrono::NaiveDate;
//!
//! let mut bank = Bank::new(LedgerConfig::default());
//! let born = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
//! bank.register_client("Maria Silva", "12345678900", born, "Rua A, 10").unwrap();
//! bank.open_checking_account("12345678900").unwrap();
//! bank.deposit("12345678900", Money::from_cents(10_000)).unwrap();
//!
//! let statement = bank.statement("12345678900").unwrap();
//! assert!(statement.contains("Current balance: R$ 100.00"));
//! ```

pub mod account;
pub mod bank;
pub mod client;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod money;
pub mod policy;
pub mod statement;
pub mod transaction;

pub use account::Account;
pub use bank::Bank;
pub use client::{Client, Individual};
pub use command::{Command, CommandRecord};
pub use config::LedgerConfig;
pub use engine::LedgerEngine;
pub use error::{AmountError, LedgerError, Result, TransactionError};
pub use history::{LogEntry, TransactionLog, TxKind};
pub use money::Money;
pub use policy::{CheckingPolicy, Unrestricted, WithdrawalPolicy};
pub use statement::{AccountSummary, Statement};
pub use transaction::Transaction;
