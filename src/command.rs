//! Command records for CSV parsing and their typed form.

use crate::money::Money;
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;

/// Birth date layout accepted in command files.
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Raw command record as read from CSV.
///
/// Only `command` and `tax_id` are always required; the remaining columns
/// depend on the command and may be empty or absent.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    /// Command name: register, open, deposit, withdraw
    pub command: String,

    /// Tax id of the client the command is about
    pub tax_id: String,

    /// Amount (deposit/withdraw)
    #[serde(default)]
    pub amount: Option<String>,

    /// Full name (register)
    #[serde(default)]
    pub name: Option<String>,

    /// Birth date as `dd/mm/yyyy` (register)
    #[serde(default)]
    pub birth_date: Option<String>,

    /// Free-text address (register)
    #[serde(default)]
    pub address: Option<String>,
}

impl CommandRecord {
    /// Parses the raw CSV record into a typed command.
    ///
    /// Returns a description of the problem if the record is unusable.
    pub fn parse(&self) -> Result<Command, String> {
        let tax_id = self.tax_id.trim();
        if tax_id.is_empty() {
            return Err("missing tax id".to_string());
        }
        let tax_id = tax_id.to_string();

        match self.command.trim().to_lowercase().as_str() {
            "register" => {
                let full_name = required(&self.name, "name")?.to_string();
                let raw_date = required(&self.birth_date, "birth date")?;
                let birth_date = NaiveDate::parse_from_str(raw_date, BIRTH_DATE_FORMAT)
                    .map_err(|e| format!("invalid birth date {:?}: {}", raw_date, e))?;
                let address = self
                    .address
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string();

                Ok(Command::Register {
                    tax_id,
                    full_name,
                    birth_date,
                    address,
                })
            }
            "open" => Ok(Command::Open { tax_id }),
            "deposit" => Ok(Command::Deposit {
                tax_id,
                amount: self.parse_amount()?,
            }),
            "withdraw" | "withdrawal" => Ok(Command::Withdraw {
                tax_id,
                amount: self.parse_amount()?,
            }),
            other => Err(format!("unknown command {:?}", other)),
        }
    }

    /// Parses the amount field into `Money`. Sign is left to the account.
    fn parse_amount(&self) -> Result<Money, String> {
        let raw = required(&self.amount, "amount")?;
        Money::from_str(raw).map_err(|e| format!("invalid amount {:?}: {}", raw, e))
    }
}

fn required<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str, String> {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("missing {}", name)),
    }
}

/// A parsed command ready to run against the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register an individual client.
    Register {
        tax_id: String,
        full_name: String,
        birth_date: NaiveDate,
        address: String,
    },

    /// Open a checking account for an existing client.
    Open { tax_id: String },

    /// Deposit into the client's first account.
    Deposit { tax_id: String, amount: Money },

    /// Withdraw from the client's first account.
    Withdraw { tax_id: String, amount: Money },
}
