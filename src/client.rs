//! Clients and the accounts they own.

use crate::account::Account;
use crate::error::{LedgerError, Result};
use crate::transaction::Transaction;
use chrono::NaiveDate;

/// Identity data of a client who is a natural person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub full_name: String,
    /// Unique across the bank; uniqueness is enforced by [`Bank`](crate::Bank).
    pub tax_id: String,
    pub birth_date: NaiveDate,
}

/// The actor owning accounts and requesting transactions against them.
#[derive(Debug)]
pub struct Client {
    address: String,
    identity: Individual,
    accounts: Vec<Account>,
}

impl Client {
    /// Creates an individual client with no accounts.
    pub fn individual(
        full_name: impl Into<String>,
        tax_id: impl Into<String>,
        birth_date: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Client {
            address: address.into(),
            identity: Individual {
                full_name: full_name.into(),
                tax_id: tax_id.into(),
                birth_date,
            },
            accounts: Vec::new(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn identity(&self) -> &Individual {
        &self.identity
    }

    pub fn full_name(&self) -> &str {
        &self.identity.full_name
    }

    pub fn tax_id(&self) -> &str {
        &self.identity.tax_id
    }

    /// Accounts in the order they were opened.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    /// The account used when none is chosen explicitly.
    pub fn first_account(&self) -> Option<&Account> {
        self.accounts.first()
    }

    /// Takes ownership of `account`. Any number of accounts is allowed.
    pub fn open_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Applies `transaction` to the client's account with the given number.
    ///
    /// Only the client's own accounts can be addressed; any other number
    /// yields `AccountNotFound` and nothing is applied.
    pub fn request_transaction(&mut self, number: u32, transaction: &Transaction) -> Result<()> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or(LedgerError::AccountNotFound(number))?;

        transaction.apply(account)?;
        Ok(())
    }
}
