//! A line-oriented [`Gateway`] over stdin and stdout.
//!
//! Every line read from stdin is one inbound message from a human author,
//! and replies are printed to stdout. This is the process's local stand-in
//! for a real chat-platform connection; it is compiled into the production
//! binary so the whole bot can be driven end-to-end from a terminal. Logs
//! go to stderr, so stdout carries nothing but replies.

use crate::gateway::{Gateway, IncomingMessage};
use crate::{Config, Result};
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};
use tracing::debug;

const CONSOLE_AUTHOR: &str = "console";

pub struct StdioGateway {
    input: Lines<BufReader<Stdin>>,
    output: Stdout,
}

impl StdioGateway {
    /// Opens the console session. A real platform connection would log in
    /// with the configured token here; the console session only records
    /// that one was loaded.
    pub fn connect(config: &Config) -> Self {
        debug!("session token loaded ({} bytes)", config.token().len());
        Self {
            input: BufReader::new(tokio::io::stdin()).lines(),
            output: tokio::io::stdout(),
        }
    }
}

#[async_trait::async_trait]
impl Gateway for StdioGateway {
    async fn next_message(&mut self) -> Result<Option<IncomingMessage>> {
        let line = self
            .input
            .next_line()
            .await
            .context("Failed to read from stdin")?;
        Ok(line.map(|content| IncomingMessage::new(CONSOLE_AUTHOR, content, false)))
    }

    async fn reply(&mut self, _message: &IncomingMessage, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .await
            .context("Failed to write the reply")?;
        self.output
            .write_all(b"\n")
            .await
            .context("Failed to write the reply")?;
        self.output.flush().await.context("Failed to flush stdout")
    }
}
