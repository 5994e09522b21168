//! The kas store: one persisted total.
//!
//! The whole document is rewritten on every accepted command, so the file
//! on disk is always the last successfully persisted state. The in-memory
//! total is committed only after the write succeeds; a failed write leaves
//! both sides at the previous value.

use crate::model::Amount;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// On-disk layout of the kas store. Exactly one field; the document is
/// rewritten in full on every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct KasData {
    total: Amount,
}

/// The shared treasury. All mutation goes through [`Ledger::deposit`] and
/// [`Ledger::withdraw`], so nothing can push the total below zero.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    data: KasData,
}

/// Errors from a deposit or withdrawal.
#[derive(Debug)]
pub enum LedgerError {
    /// The withdrawal asked for more than the kas holds; carries the
    /// unchanged total for the reply.
    InsufficientFunds { total: Amount },
    /// The store could not be updated. The in-memory total was not changed.
    Store(crate::Error),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientFunds { total } => write!(f, "the kas holds only {total}"),
            Self::Store(e) => write!(f, "the kas store could not be updated: {e:#}"),
        }
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InsufficientFunds { .. } => None,
            Self::Store(e) => {
                let source: &(dyn Error + 'static) = e.as_ref();
                Some(source)
            }
        }
    }
}

impl Ledger {
    /// Loads the store at `path`, creating it with `starting_total` when
    /// the file does not exist yet.
    ///
    /// Unparseable content is not fatal: the store resets to zero, the
    /// reset is persisted, and the bot keeps running.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or the initial
    /// document cannot be written.
    pub async fn load(path: impl Into<PathBuf>, starting_total: Amount) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            let ledger = Self {
                path,
                data: KasData {
                    total: starting_total,
                },
            };
            write_data(&ledger.path, &ledger.data).await?;
            info!("created a new kas store with total {}", ledger.data.total);
            return Ok(ledger);
        }
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read the kas store at {}", path.display()))?;
        let data = match serde_json::from_str::<KasData>(&content) {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    "the kas store at {} is unreadable, resetting the total to 0: {e}",
                    path.display()
                );
                let data = KasData {
                    total: Amount::new(0),
                };
                write_data(&path, &data).await?;
                data
            }
        };
        Ok(Self { path, data })
    }

    /// The current total.
    pub fn total(&self) -> Amount {
        self.data.total
    }

    /// Adds `amount` to the kas and persists the new total.
    pub async fn deposit(&mut self, amount: Amount) -> std::result::Result<Amount, LedgerError> {
        let total = self
            .data
            .total
            .value()
            .checked_add(amount.value())
            .ok_or_else(|| LedgerError::Store(anyhow::anyhow!("the kas total would overflow")))?;
        self.commit(Amount::new(total)).await
    }

    /// Subtracts `amount` from the kas and persists the new total. Refuses
    /// to take the total below zero.
    pub async fn withdraw(&mut self, amount: Amount) -> std::result::Result<Amount, LedgerError> {
        if amount.value() > self.data.total.value() {
            return Err(LedgerError::InsufficientFunds {
                total: self.data.total,
            });
        }
        let total = self.data.total.value() - amount.value();
        self.commit(Amount::new(total)).await
    }

    /// Persists `total` and only then makes it the in-memory value: memory
    /// may never run ahead of the file.
    async fn commit(&mut self, total: Amount) -> std::result::Result<Amount, LedgerError> {
        let data = KasData { total };
        write_data(&self.path, &data).await.map_err(LedgerError::Store)?;
        self.data = data;
        Ok(total)
    }
}

/// Serializes and rewrites the whole store document.
async fn write_data(path: &Path, data: &KasData) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Unable to serialize the kas store")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Unable to write the kas store at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    fn total_on_disk(env: &TestEnv) -> serde_json::Value {
        let raw = env.raw();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        value["total"].clone()
    }

    #[tokio::test]
    async fn test_load_creates_missing_store() {
        let env = TestEnv::new();

        let ledger = Ledger::load(env.data_path(), Amount::new(7000)).await.unwrap();

        assert_eq!(ledger.total(), Amount::new(7000));
        // The store must exist on disk from the very first run.
        assert_eq!(total_on_disk(&env), serde_json::json!(7000));
    }

    #[tokio::test]
    async fn test_load_reads_existing_store() {
        let env = TestEnv::new();
        env.seed(r#"{ "total": 100000 }"#);

        let ledger = Ledger::load(env.data_path(), Amount::new(5)).await.unwrap();

        // The starting value only applies to a brand-new store.
        assert_eq!(ledger.total(), Amount::new(100000));
    }

    #[tokio::test]
    async fn test_load_resets_corrupt_store() {
        let env = TestEnv::new();
        env.seed("definitely not json");

        let ledger = Ledger::load(env.data_path(), Amount::new(5)).await.unwrap();

        assert_eq!(ledger.total(), Amount::new(0));
        assert_eq!(total_on_disk(&env), serde_json::json!(0));
    }

    #[tokio::test]
    async fn test_load_resets_negative_total() {
        let env = TestEnv::new();
        env.seed(r#"{ "total": -50 }"#);

        let ledger = Ledger::load(env.data_path(), Amount::new(5)).await.unwrap();

        assert_eq!(ledger.total(), Amount::new(0));
    }

    #[tokio::test]
    async fn test_deposit_persists() {
        let env = TestEnv::new();
        env.seed(r#"{ "total": 100000 }"#);
        let mut ledger = Ledger::load(env.data_path(), Amount::new(0)).await.unwrap();

        let total = ledger.deposit(Amount::new(50000)).await.unwrap();

        assert_eq!(total, Amount::new(150000));
        assert_eq!(ledger.total(), Amount::new(150000));
        assert_eq!(total_on_disk(&env), serde_json::json!(150000));
    }

    #[tokio::test]
    async fn test_withdraw_persists() {
        let env = TestEnv::new();
        env.seed(r#"{ "total": 100000 }"#);
        let mut ledger = Ledger::load(env.data_path(), Amount::new(0)).await.unwrap();

        let total = ledger.withdraw(Amount::new(40000)).await.unwrap();

        assert_eq!(total, Amount::new(60000));
        assert_eq!(total_on_disk(&env), serde_json::json!(60000));
    }

    #[tokio::test]
    async fn test_withdraw_to_exactly_zero() {
        let env = TestEnv::new();
        env.seed(r#"{ "total": 100000 }"#);
        let mut ledger = Ledger::load(env.data_path(), Amount::new(0)).await.unwrap();

        let total = ledger.withdraw(Amount::new(100000)).await.unwrap();

        assert_eq!(total, Amount::new(0));
    }

    #[tokio::test]
    async fn test_withdraw_insufficient_funds() {
        let env = TestEnv::new();
        env.seed(r#"{ "total": 100000 }"#);
        let mut ledger = Ledger::load(env.data_path(), Amount::new(0)).await.unwrap();

        let result = ledger.withdraw(Amount::new(150000)).await;

        match result {
            Err(LedgerError::InsufficientFunds { total }) => {
                assert_eq!(total, Amount::new(100000));
            }
            other => panic!("expected InsufficientFunds, got {other:?}"),
        }
        // Nothing moved, in memory or on disk.
        assert_eq!(ledger.total(), Amount::new(100000));
        assert_eq!(total_on_disk(&env), serde_json::json!(100000));
    }
}
