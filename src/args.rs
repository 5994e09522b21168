//! These structs provide the CLI interface for the kasbot binary.

use clap::Parser;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing::level_filters::LevelFilter;

/// kasbot: a chat bot that keeps a shared treasury balance (the "kas").
///
/// The bot watches a message stream for strictly formatted commands of the
/// shape `deposit by <name>. <amount>$ to <name>` (or `withdraw`), updates a
/// single persisted total, and replies with a report after every accepted
/// command. Messages that do not match the command shape are ignored.
///
/// The messaging-platform session token must be provided through the
/// BOT_TOKEN environment variable. A fresh store can be given an initial
/// balance through STARTING_KAS.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the kas store is held. Defaults to ~/kasbot
    #[arg(long, env = "KAS_HOME", default_value_t = default_kas_home())]
    kas_home: DisplayPath,
}

impl Args {
    pub fn new(log_level: LevelFilter, kas_home: PathBuf) -> Self {
        Self {
            log_level,
            kas_home: kas_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn kas_home(&self) -> &DisplayPath {
        &self.kas_home
    }
}

fn default_kas_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("kasbot"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --kas-home or KAS_HOME instead of relying on the default \
                kas home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("kasbot")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
