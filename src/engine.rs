//! Batch command processor.
//!
//! Streams commands from CSV into a [`Bank`] one record at a time. Malformed
//! records and rejected operations are logged and skipped, so one bad row
//! never stops the run.

use crate::bank::Bank;
use crate::command::{Command, CommandRecord};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::statement::Statement;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// Drives a [`Bank`] from a command file and renders its final state.
///
/// # Output Ordering
///
/// Accounts are written sorted by account number, which is also the order
/// in which they were opened.
pub struct LedgerEngine {
    bank: Bank,
}

impl LedgerEngine {
    /// Creates an engine over an empty bank with default limits.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Creates an engine over an empty bank with the given limits.
    pub fn with_config(config: LedgerConfig) -> Self {
        LedgerEngine {
            bank: Bank::new(config),
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Processes commands from a CSV reader in streaming fashion.
    ///
    /// Invalid records are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<CommandRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse() {
                    Ok(command) => {
                        if let Err(e) = self.process_command(command) {
                            warn!("Row {}: {}", row_num, e);
                        }
                    }
                    Err(message) => {
                        let e = LedgerError::InvalidRecord {
                            row: row_num,
                            message,
                        };
                        warn!("{}", e);
                    }
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Runs a single parsed command against the bank.
    pub fn process_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Register {
                tax_id,
                full_name,
                birth_date,
                address,
            } => self
                .bank
                .register_client(&full_name, &tax_id, birth_date, &address),
            Command::Open { tax_id } => {
                let number = self.bank.open_checking_account(&tax_id)?;
                debug!("Client {} opened account {}", tax_id, number);
                Ok(())
            }
            Command::Deposit { tax_id, amount } => self.bank.deposit(&tax_id, amount),
            Command::Withdraw { tax_id, amount } => self.bank.withdraw(&tax_id, amount),
        }
    }

    /// Writes every account to CSV.
    ///
    /// Balances are formatted with exactly 2 decimal places.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "branch",
            "number",
            "holder",
            "tax_id",
            "balance",
            "transactions",
        ])?;

        for (client, account) in self.bank.accounts() {
            csv_writer.write_record([
                account.branch().to_string(),
                account.number().to_string(),
                client.full_name().to_string(),
                client.tax_id().to_string(),
                account.balance().to_string(),
                account.log().len().to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Writes the statement of every account, ordered by account number.
    pub fn write_statements<W: Write>(&self, mut writer: W) -> Result<()> {
        for (client, account) in self.bank.accounts() {
            let statement = Statement {
                account,
                holder: client.full_name(),
            };
            writeln!(writer, "{}", statement)?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for LedgerEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransactionError;
    use crate::money::Money;
    use std::io::Cursor;
    use std::str::FromStr;

    const HEADER: &str = "command,tax_id,amount,name,birth_date,address\n";

    fn process_csv_str(body: &str) -> LedgerEngine {
        let mut engine = LedgerEngine::new();
        engine
            .process_csv(Cursor::new(format!("{}{}", HEADER, body)))
            .unwrap();
        engine
    }

    fn balance_of(engine: &LedgerEngine, tax_id: &str) -> String {
        engine
            .bank()
            .find_client(tax_id)
            .unwrap()
            .first_account()
            .unwrap()
            .balance()
            .to_string()
    }

    #[test]
    fn test_register_open_deposit() {
        let engine = process_csv_str(
            r#"register,111,,Maria Silva,17/05/1990,"Rua A, 10"
open,111
deposit,111,100.00"#,
        );

        assert_eq!(balance_of(&engine, "111"), "100.00");
        let client = engine.bank().find_client("111").unwrap();
        assert_eq!(client.address(), "Rua A, 10");
    }

    #[test]
    fn test_reference_scenario() {
        let engine = process_csv_str(
            r#"register,111,,Maria,17/05/1990,Rua A
open,111
deposit,111,100.00
withdraw,111,50.00
withdraw,111,60.00"#,
        );

        let account = engine
            .bank()
            .find_client("111")
            .unwrap()
            .first_account()
            .unwrap();
        assert_eq!(account.balance().to_string(), "50.00");
        assert_eq!(account.log().len(), 2);
    }

    #[test]
    fn test_rejected_rows_do_not_stop_processing() {
        let engine = process_csv_str(
            r#"register,111,,Maria,17/05/1990,Rua A
deposit,111,10.00
open,111
bogus,111
deposit,111,abc
deposit,111,-5
deposit,111,20.00"#,
        );

        assert_eq!(balance_of(&engine, "111"), "20.00");
    }

    #[test]
    fn test_balance_overflow_row_skipped() {
        let engine = process_csv_str(
            r#"register,111,,Maria,17/05/1990,Rua A
open,111
deposit,111,50000000000000000000000000000
deposit,111,50000000000000000000000000000
deposit,111,1"#,
        );

        let account = engine
            .bank()
            .find_client("111")
            .unwrap()
            .first_account()
            .unwrap();
        assert_eq!(
            account.balance(),
            Money::from_str("50000000000000000000000000001").unwrap()
        );
        assert_eq!(account.log().len(), 2);
    }

    #[test]
    fn test_sub_cent_amount_row_skipped() {
        let engine = process_csv_str(
            r#"register,111,,Maria,17/05/1990,Rua A
open,111
deposit,111,1000
withdraw,111,500.004
withdraw,111,0.001"#,
        );

        let account = engine
            .bank()
            .find_client("111")
            .unwrap()
            .first_account()
            .unwrap();
        assert_eq!(account.balance().to_string(), "1000.00");
        assert_eq!(account.log().len(), 1);
    }

    #[test]
    fn test_duplicate_registration_ignored() {
        let engine = process_csv_str(
            r#"register,111,,Maria,17/05/1990,Rua A
register,111,,Impostor,01/01/2000,Rua Z"#,
        );

        assert_eq!(engine.bank().clients().len(), 1);
        assert_eq!(engine.bank().find_client("111").unwrap().full_name(), "Maria");
    }

    #[test]
    fn test_process_command_surfaces_rejection() {
        let mut engine = process_csv_str(
            r#"register,111,,Maria,17/05/1990,Rua A
open,111"#,
        );

        let err = engine
            .process_command(Command::Withdraw {
                tax_id: "111".to_string(),
                amount: Money::from_cents(100),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Rejected(TransactionError::InsufficientFunds)
        ));
    }

    #[test]
    fn test_output_format() {
        let engine = process_csv_str(
            r#"register,111,,Maria Silva,17/05/1990,Rua A
register,222,,Joao,01/02/1980,Rua B
open,222
open,111
deposit,111,15
deposit,222,2.5
withdraw,222,1"#,
        );

        let mut output = Vec::new();
        engine.write_output(&mut output).unwrap();
        let output_str = String::from_utf8(output).unwrap();

        let lines: Vec<&str> = output_str.lines().collect();
        assert_eq!(lines[0], "branch,number,holder,tax_id,balance,transactions");
        assert_eq!(lines[1], "0001,1,Joao,222,1.50,2");
        assert_eq!(lines[2], "0001,2,Maria Silva,111,15.00,1");
    }

    #[test]
    fn test_write_statements() {
        let engine = process_csv_str(
            r#"register,111,,Maria,17/05/1990,Rua A
open,111
deposit,111,15"#,
        );

        let mut output = Vec::new();
        engine.write_statements(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Branch: 0001 | Number: 1 | Holder: Maria"));
        assert!(text.contains("Deposit: R$ 15.00"));
        assert!(text.contains("Current balance: R$ 15.00"));
    }
}
