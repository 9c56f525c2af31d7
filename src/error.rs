//! Error types for the banking ledger.

use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Reasons a deposit or withdrawal is rejected by an account.
///
/// These are ordinary outcomes, not faults: the account and its log are left
/// exactly as they were before the request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionError {
    /// Amount is zero or negative
    #[error("the amount must be greater than zero")]
    InvalidAmount,

    /// Withdrawal amount exceeds the current balance
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Crediting the amount would push the balance past the largest
    /// representable value
    #[error("resulting balance is out of range")]
    BalanceOverflow,

    /// Checking account already has its maximum number of withdrawals
    #[error("withdrawal count limit reached")]
    WithdrawalCountExceeded,

    /// Withdrawal amount is above the per-transaction cap
    #[error("withdrawal amount exceeds the per-transaction limit")]
    WithdrawalLimitExceeded,
}

/// Reasons text cannot be turned into an amount.
#[derive(Error, Debug, Clone)]
pub enum AmountError {
    /// Not a decimal number
    #[error("not a number: {0}")]
    Invalid(#[from] rust_decimal::Error),

    /// More than two decimal places
    #[error("{0} has more than two decimal places")]
    TooPrecise(String),
}

/// Errors that can occur while operating the ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid command record
    #[error("Invalid command at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// A client with this tax id is already registered
    #[error("A client with tax id {0} already exists")]
    DuplicateTaxId(String),

    /// No client registered under this tax id
    #[error("Client with tax id {0} not found")]
    ClientNotFound(String),

    /// Client exists but has not opened any account
    #[error("Client with tax id {0} has no account")]
    NoAccount(String),

    /// Account number is not among the client's accounts
    #[error("Account {0} does not belong to this client")]
    AccountNotFound(u32),

    /// The account rejected the transaction
    #[error("Transaction rejected: {0}")]
    Rejected(#[from] TransactionError),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: banking-ledger [--statements] <commands.csv>")]
    MissingArgument,
}
