//! Text rendering of account summaries and statements.

use crate::account::Account;
use std::fmt;

/// Timestamp layout used on statement lines.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One-line description of an account: `Branch: 0001 | Number: 1 | Holder: ...`.
pub struct AccountSummary<'a> {
    pub account: &'a Account,
    pub holder: &'a str,
}

impl fmt::Display for AccountSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Branch: {} | Number: {} | Holder: {}",
            self.account.branch(),
            self.account.number(),
            self.holder
        )
    }
}

/// Full statement: every logged transaction in order, then the balance.
pub struct Statement<'a> {
    pub account: &'a Account,
    pub holder: &'a str,
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=========== STATEMENT ===========")?;
        writeln!(
            f,
            "{}",
            AccountSummary {
                account: self.account,
                holder: self.holder,
            }
        )?;

        let log = self.account.log();
        if log.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        } else {
            for entry in log.entries() {
                writeln!(
                    f,
                    "{} - {}: R$ {}",
                    entry.timestamp().format(TIMESTAMP_FORMAT),
                    entry.kind(),
                    entry.amount()
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Current balance: R$ {}", self.account.balance())?;
        writeln!(f, "=================================")
    }
}
