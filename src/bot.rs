//! The serving loop.

use crate::gateway::Gateway;
use crate::handler;
use crate::ledger::Ledger;
use crate::model::report;
use crate::Result;
use tracing::{error, info};

/// Serves messages until the gateway closes.
///
/// One message is handled in full, reply included, before the next one is
/// read. A failure while handling a single message is
/// logged and answered with the generic error reply; it never stops the
/// loop. Only a gateway failure to produce the next message ends the run.
pub async fn run<G: Gateway>(gateway: &mut G, ledger: &mut Ledger) -> Result<()> {
    info!("kas bot is ready, the total is {}", ledger.total());
    while let Some(message) = gateway.next_message().await? {
        if message.from_bot() {
            continue;
        }
        let reply = match handler::handle_message(ledger, message.content()).await {
            Ok(None) => continue,
            Ok(Some(reply)) => reply,
            Err(e) => {
                error!("failed to handle a message from {}: {e:#}", message.author());
                report::PROCESSING_ERROR.to_string()
            }
        };
        if let Err(e) = gateway.reply(&message, &reply).await {
            error!("failed to send a reply to {}: {e:#}", message.author());
        }
    }
    info!("message stream closed, shutting down");
    Ok(())
}
