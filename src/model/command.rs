//! Parsing of the kas command grammar.
//!
//! A message is a command only when the whole trimmed line has the shape
//!
//! ```text
//! (deposit|withdraw) by <actor>. <amount>$ to <recipient>
//! ```
//!
//! Anything else is ordinary conversation and must be ignored without a
//! reply, so the parser distinguishes "not a command at all" from "a
//! command with a bad amount" instead of collapsing both into one error.

use crate::model::Amount;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// The two ways the kas total can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Deposit,
    Withdraw,
}

serde_plain::derive_display_from_serialize!(Action);
serde_plain::derive_fromstr_from_deserialize!(Action);

/// One validated instruction: who moves how much, and to whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    action: Action,
    actor: String,
    amount: Amount,
    recipient: String,
}

impl Command {
    pub(crate) fn new(
        action: Action,
        actor: impl Into<String>,
        amount: Amount,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            action,
            actor: actor.into(),
            amount,
            recipient: recipient.into(),
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// The person initiating the movement, as written in the message.
    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The person or party receiving or being charged.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

/// What the parser made of one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The line is not a kas command; the caller must stay silent.
    NoMatch,
    /// The line has the command shape but its amount is not a positive
    /// whole number.
    InvalidAmount,
    /// A validated command.
    Command(Command),
}

/// Group 1 is the action keyword, group 2 the actor (anything up to the
/// first dot), group 3 the amount run, group 4 the recipient (the rest of
/// the line). The match is anchored: the whole trimmed line must be the
/// command, case-insensitively.
const COMMAND_PATTERN: &str = r"(?i)^(deposit|withdraw) by ([^.]+)\.\s*([0-9.,]+)\$\s*to\s*(.+)$";

fn command_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(COMMAND_PATTERN).expect("hard-coded command pattern must compile"))
}

/// Parses one raw message line into a three-way outcome.
pub fn parse(text: &str) -> ParseOutcome {
    let Some(caps) = command_regex().captures(text.trim()) else {
        return ParseOutcome::NoMatch;
    };
    let Ok(action) = caps[1].to_lowercase().parse::<Action>() else {
        return ParseOutcome::NoMatch;
    };
    let amount = match caps[3].trim().parse::<Amount>() {
        Ok(amount) if amount.is_positive() => amount,
        _ => return ParseOutcome::InvalidAmount,
    };
    ParseOutcome::Command(Command::new(
        action,
        caps[2].trim(),
        amount,
        caps[4].trim(),
    ))
}
