//! Runtime configuration for the bot process.
//!
//! Everything the bot needs before it can serve messages comes from the
//! environment: the messaging-platform session token (`BOT_TOKEN`), the
//! optional balance a brand-new store starts with (`STARTING_KAS`), and the
//! data directory (`KAS_HOME`, handled by the CLI layer).

use crate::model::Amount;
use crate::Result;
use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use tracing::warn;

const KAS_JSON: &str = "kas.json";
const BOT_TOKEN: &str = "BOT_TOKEN";
const STARTING_KAS: &str = "STARTING_KAS";

/// The `Config` object represents everything the process needs at startup:
/// the canonicalized data directory, the location of the kas store inside
/// it, the platform session token, and the balance used when no store file
/// exists yet.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    data_path: PathBuf,
    token: String,
    starting_total: Amount,
}

impl Config {
    /// Creates the kas home directory if it does not exist and loads the
    /// environment settings.
    ///
    /// # Errors
    /// - Returns an error if the directory cannot be created or
    ///   canonicalized.
    /// - Returns an error if `BOT_TOKEN` is absent or empty. The bot must
    ///   not start without a platform session token.
    pub async fn load(kas_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = kas_home.into();
        tokio::fs::create_dir_all(&maybe_relative)
            .await
            .with_context(|| {
                format!(
                    "Unable to create the kas home directory at {}",
                    maybe_relative.display()
                )
            })?;
        let root = tokio::fs::canonicalize(&maybe_relative)
            .await
            .with_context(|| {
                format!("Unable to canonicalize the path {}", maybe_relative.display())
            })?;
        let token = token(std::env::var(BOT_TOKEN).ok())?;
        let starting_total = starting_total(std::env::var(STARTING_KAS).ok());
        let data_path = root.join(KAS_JSON);
        Ok(Self {
            root,
            data_path,
            token,
            starting_total,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The location of the kas store file.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// The messaging-platform session token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The total a brand-new store starts with.
    pub fn starting_total(&self) -> Amount {
        self.starting_total
    }
}

/// Validates the platform session token from the environment value.
fn token(value: Option<String>) -> Result<String> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => bail!("{BOT_TOKEN} is missing from the environment"),
    }
}

/// Interprets the `STARTING_KAS` environment value. Anything other than a
/// plain run of digits falls back to zero.
fn starting_total(value: Option<String>) -> Amount {
    let Some(raw) = value else {
        return Amount::new(0);
    };
    match raw.trim().parse::<u64>() {
        Ok(value) => Amount::new(value),
        Err(_) => {
            warn!("{STARTING_KAS} is not a whole number, starting from 0: '{raw}'");
            Amount::new(0)
        }
    }
}
