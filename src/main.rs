//! Banking Ledger CLI
//!
//! Runs a CSV file of ledger commands and prints the resulting accounts,
//! or every account statement with `--statements`.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv > accounts.csv
//! cargo run -- --statements commands.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity
//! - `LEDGER_OVERDRAFT_LIMIT`: per-withdrawal cap for checking accounts
//! - `LEDGER_WITHDRAWAL_LIMIT`: withdrawal count cap for checking accounts

use banking_ledger::{LedgerConfig, LedgerEngine, LedgerError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut statements = false;
    let mut input_path = None;
    for arg in env::args().skip(1) {
        if arg == "--statements" {
            statements = true;
        } else if input_path.is_none() {
            input_path = Some(arg);
        }
    }
    let input_path = input_path.ok_or(LedgerError::MissingArgument)?;

    let file = File::open(&input_path)?;
    let reader = BufReader::new(file);

    let mut engine = LedgerEngine::with_config(LedgerConfig::from_env());
    engine.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    if statements {
        engine.write_statements(handle)?;
    } else {
        engine.write_output(handle)?;
    }

    Ok(())
}
