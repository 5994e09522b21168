//! Shared test utilities.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::gateway::{Gateway, IncomingMessage};
use crate::Result;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment that provides a kas store path inside a temporary
/// directory. Holds the TempDir to keep the directory alive for the
/// duration of the test.
pub struct TestEnv {
    _temp_dir: TempDir,
    data_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let data_path = temp_dir.path().join("kas.json");
        Self {
            _temp_dir: temp_dir,
            data_path,
        }
    }

    /// The path of the (possibly not yet created) kas store.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Writes raw content to the store path, bypassing the ledger.
    pub fn seed(&self, content: &str) {
        std::fs::write(&self.data_path, content).unwrap();
    }

    /// Reads the raw store content back.
    pub fn raw(&self) -> String {
        std::fs::read_to_string(&self.data_path).unwrap()
    }
}

/// A [`Gateway`] fed from a fixed script of messages; replies are captured
/// instead of sent anywhere.
pub struct ScriptedGateway {
    incoming: VecDeque<IncomingMessage>,
    pub replies: Vec<String>,
}

impl ScriptedGateway {
    pub fn new(messages: Vec<IncomingMessage>) -> Self {
        Self {
            incoming: messages.into(),
            replies: Vec::new(),
        }
    }
}

#[async_trait::async_trait]
impl Gateway for ScriptedGateway {
    async fn next_message(&mut self) -> Result<Option<IncomingMessage>> {
        Ok(self.incoming.pop_front())
    }

    async fn reply(&mut self, _message: &IncomingMessage, text: &str) -> Result<()> {
        self.replies.push(text.to_string());
        Ok(())
    }
}
