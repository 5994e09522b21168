//! The reply texts the bot sends back to the channel.
//!
//! Every string here is part of the bot's user-facing contract and is kept
//! byte-for-byte stable, including the Indonesian wording and the label
//! padding inside the fenced report blocks.

use crate::model::{Action, Amount, Command};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Sent when a line has the command shape but a bad amount.
pub(crate) const INVALID_AMOUNT: &str =
    "Format jumlah tidak valid. Contoh: `deposit by Daniel. 50.000$ to Wana Wani`";

/// Sent when handling a message failed for any unexpected reason.
pub(crate) const PROCESSING_ERROR: &str = "Terjadi error saat memproses perintah.";

/// Sent when a withdrawal asks for more than the kas holds.
pub(crate) fn insufficient_funds(total: Amount) -> String {
    format!("Saldo kas tidak cukup. Total Kas saat ini: {total}")
}

/// The confirmation block for one accepted command: the action, who issued
/// it, the amount moved, the other party, and the resulting total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    action: Action,
    actor: String,
    amount: Amount,
    recipient: String,
    total: Amount,
}

impl Report {
    /// Builds the report for `command` after the ledger moved to `total`.
    pub fn new(command: &Command, total: Amount) -> Self {
        Self {
            action: command.action(),
            actor: command.actor().to_string(),
            amount: command.amount(),
            recipient: command.recipient().to_string(),
            total,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::Deposit => write!(
                f,
                "\n**📥 DEPOSIT REPORT**\n```\nDeposit by   : {}\nDeposit      : {}\nDeposit to   : {}\nTotal Kas    : {}\n```\n",
                self.actor, self.amount, self.recipient, self.total
            ),
            Action::Withdraw => write!(
                f,
                "\n**📤 WITHDRAW REPORT**\n```\nWithdraw by   : {}\nWithdraw      : {}\nWithdraw to   : {}\nTotal Kas     : {}\n```\n",
                self.actor, self.amount, self.recipient, self.total
            ),
        }
    }
}
