pub mod args;
pub mod bot;
mod config;
mod error;
mod gateway;
mod handler;
mod ledger;
mod model;
#[cfg(test)]
mod test;

pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use gateway::{Gateway, IncomingMessage, StdioGateway};
pub use ledger::{Ledger, LedgerError};
pub use model::{Action, Amount, AmountError, Command, ParseOutcome, Report};
