//! Session-scoped registry of clients and their accounts.

use crate::account::Account;
use crate::client::Client;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::money::Money;
use crate::statement::Statement;
use crate::transaction::Transaction;
use chrono::NaiveDate;
use log::info;

/// All clients of one ledger session.
///
/// Clients are looked up by tax id, which must be unique. Account numbers are
/// assigned sequentially across the whole bank, starting at 1.
#[derive(Debug, Default)]
pub struct Bank {
    config: LedgerConfig,
    clients: Vec<Client>,
    accounts_opened: u32,
}

impl Bank {
    /// Creates an empty bank opening accounts with the limits in `config`.
    pub fn new(config: LedgerConfig) -> Self {
        Bank {
            config,
            clients: Vec::new(),
            accounts_opened: 0,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Clients in registration order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.tax_id() == tax_id)
    }

    pub fn find_client_mut(&mut self, tax_id: &str) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.tax_id() == tax_id)
    }

    /// Registers an individual client. Fails if the tax id is already taken.
    pub fn register_client(
        &mut self,
        full_name: &str,
        tax_id: &str,
        birth_date: NaiveDate,
        address: &str,
    ) -> Result<()> {
        if self.find_client(tax_id).is_some() {
            return Err(LedgerError::DuplicateTaxId(tax_id.to_string()));
        }

        self.clients
            .push(Client::individual(full_name, tax_id, birth_date, address));
        info!("Registered client {}", tax_id);
        Ok(())
    }

    /// Opens a checking account for the client and returns its number.
    pub fn open_checking_account(&mut self, tax_id: &str) -> Result<u32> {
        let number = self.accounts_opened + 1;
        let account = Account::checking(number, tax_id, &self.config);

        let client = self
            .find_client_mut(tax_id)
            .ok_or_else(|| LedgerError::ClientNotFound(tax_id.to_string()))?;
        client.open_account(account);

        self.accounts_opened = number;
        info!("Opened checking account {} for client {}", number, tax_id);
        Ok(number)
    }

    /// Deposits into the client's first account.
    pub fn deposit(&mut self, tax_id: &str, amount: Money) -> Result<()> {
        self.request(tax_id, Transaction::Deposit(amount))
    }

    /// Withdraws from the client's first account.
    pub fn withdraw(&mut self, tax_id: &str, amount: Money) -> Result<()> {
        self.request(tax_id, Transaction::Withdrawal(amount))
    }

    fn request(&mut self, tax_id: &str, transaction: Transaction) -> Result<()> {
        let client = self
            .find_client_mut(tax_id)
            .ok_or_else(|| LedgerError::ClientNotFound(tax_id.to_string()))?;
        let number = client
            .first_account()
            .map(Account::number)
            .ok_or_else(|| LedgerError::NoAccount(tax_id.to_string()))?;

        client.request_transaction(number, &transaction)
    }

    /// Statement text for the client's first account.
    pub fn statement(&self, tax_id: &str) -> Result<String> {
        let client = self
            .find_client(tax_id)
            .ok_or_else(|| LedgerError::ClientNotFound(tax_id.to_string()))?;
        let account = client
            .first_account()
            .ok_or_else(|| LedgerError::NoAccount(tax_id.to_string()))?;

        Ok(Statement {
            account,
            holder: client.full_name(),
        }
        .to_string())
    }

    /// Every account with its owner, ordered by account number.
    pub fn accounts(&self) -> Vec<(&Client, &Account)> {
        let mut accounts: Vec<_> = self
            .clients
            .iter()
            .flat_map(|c| c.accounts().iter().map(move |a| (c, a)))
            .collect();
        accounts.sort_by_key(|(_, a)| a.number());
        accounts
    }
}
