//! Types that represent the core of the bot: amounts, parsed commands, and
//! the reports sent back to the channel.
mod amount;
mod command;
pub(crate) mod report;

pub use amount::{Amount, AmountError};
pub use command::{Action, Command, ParseOutcome};
pub use report::Report;

pub(crate) use command::parse;
