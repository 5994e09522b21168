//! The seam between the bot and the messaging platform.
//!
//! The platform connection is reduced to the one interface the bot needs:
//! deliver incoming text messages (with the author name and a bot flag) and
//! accept a text reply to a given message. Everything else about the
//! platform (login, event subscription, delivery) stays behind the
//! [`Gateway`] trait.

mod stdio;

pub use stdio::StdioGateway;

use crate::Result;

/// One inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    author: String,
    content: String,
    from_bot: bool,
}

impl IncomingMessage {
    pub fn new(author: impl Into<String>, content: impl Into<String>, from_bot: bool) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            from_bot,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// The raw message text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// True when the message was written by a bot (including this one).
    /// Such messages are never treated as commands.
    pub fn from_bot(&self) -> bool {
        self.from_bot
    }
}

/// A connection to the messaging platform.
#[async_trait::async_trait]
pub trait Gateway {
    /// Waits for the next inbound message. `None` means the stream is
    /// closed and the bot should shut down.
    async fn next_message(&mut self) -> Result<Option<IncomingMessage>>;

    /// Sends `text` as a reply to `message`.
    async fn reply(&mut self, message: &IncomingMessage, text: &str) -> Result<()>;
}
