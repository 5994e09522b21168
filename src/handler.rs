//! Turns the text of one inbound message into at most one reply.

use crate::ledger::{Ledger, LedgerError};
use crate::model::{parse, report, Action, ParseOutcome, Report};
use crate::Result;
use tracing::debug;

/// Handles one inbound message.
///
/// Returns `Ok(None)` when the message is not a command; ordinary
/// conversation gets no reply at all. Amount problems and insufficient
/// funds come back as replies. Store-level failures are returned to the
/// caller, which answers with the generic error reply.
pub(crate) async fn handle_message(ledger: &mut Ledger, text: &str) -> Result<Option<String>> {
    let command = match parse(text) {
        ParseOutcome::NoMatch => return Ok(None),
        ParseOutcome::InvalidAmount => {
            debug!("command with an invalid amount: '{}'", text.trim());
            return Ok(Some(report::INVALID_AMOUNT.to_string()));
        }
        ParseOutcome::Command(command) => command,
    };
    let total = match command.action() {
        Action::Deposit => ledger.deposit(command.amount()).await?,
        Action::Withdraw => match ledger.withdraw(command.amount()).await {
            Ok(total) => total,
            Err(LedgerError::InsufficientFunds { total }) => {
                debug!("withdrawal of {} refused, the kas holds {total}", command.amount());
                return Ok(Some(report::insufficient_funds(total)));
            }
            Err(e) => return Err(e.into()),
        },
    };
    debug!("{} of {} accepted, the total is now {total}", command.action(), command.amount());
    Ok(Some(Report::new(&command, total).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use crate::test::TestEnv;

    async fn ledger_with(env: &TestEnv, total: u64) -> Ledger {
        env.seed(&format!(r#"{{ "total": {total} }}"#));
        Ledger::load(env.data_path(), Amount::new(0)).await.unwrap()
    }

    #[tokio::test]
    async fn test_chatter_gets_no_reply() {
        let env = TestEnv::new();
        let mut ledger = ledger_with(&env, 0).await;

        let reply = handle_message(&mut ledger, "hello everyone").await.unwrap();

        assert_eq!(reply, None);
        assert_eq!(ledger.total(), Amount::new(0));
    }

    #[tokio::test]
    async fn test_invalid_amount_gets_the_guidance_reply() {
        let env = TestEnv::new();
        let mut ledger = ledger_with(&env, 0).await;

        let reply = handle_message(&mut ledger, "deposit by X. 0$ to Y").await.unwrap();

        assert_eq!(
            reply.as_deref(),
            Some("Format jumlah tidak valid. Contoh: `deposit by Daniel. 50.000$ to Wana Wani`")
        );
    }

    #[tokio::test]
    async fn test_deposit_replies_with_the_report() {
        let env = TestEnv::new();
        let mut ledger = ledger_with(&env, 100000).await;

        let reply = handle_message(&mut ledger, "deposit by Daniel. 50.000$ to Wana Wani")
            .await
            .unwrap();

        assert_eq!(
            reply.as_deref(),
            Some("\n**📥 DEPOSIT REPORT**\n```\nDeposit by   : Daniel\nDeposit      : 50.000$\nDeposit to   : Wana Wani\nTotal Kas    : 150.000$\n```\n")
        );
        assert_eq!(ledger.total(), Amount::new(150000));
    }

    #[tokio::test]
    async fn test_withdraw_replies_with_the_report() {
        let env = TestEnv::new();
        let mut ledger = ledger_with(&env, 100000).await;

        let reply = handle_message(&mut ledger, "withdraw by Daniel. 40.000$ to Wana Wani")
            .await
            .unwrap();

        assert_eq!(
            reply.as_deref(),
            Some("\n**📤 WITHDRAW REPORT**\n```\nWithdraw by   : Daniel\nWithdraw      : 40.000$\nWithdraw to   : Wana Wani\nTotal Kas     : 60.000$\n```\n")
        );
        assert_eq!(ledger.total(), Amount::new(60000));
    }

    #[tokio::test]
    async fn test_overdraw_replies_with_the_current_total() {
        let env = TestEnv::new();
        let mut ledger = ledger_with(&env, 100000).await;

        let reply = handle_message(&mut ledger, "withdraw by Daniel. 150.000$ to Wana")
            .await
            .unwrap();

        assert_eq!(
            reply.as_deref(),
            Some("Saldo kas tidak cukup. Total Kas saat ini: 100.000$")
        );
        assert_eq!(ledger.total(), Amount::new(100000));
    }

    #[tokio::test]
    async fn test_commands_compound() {
        let env = TestEnv::new();
        let mut ledger = ledger_with(&env, 0).await;

        handle_message(&mut ledger, "deposit by A. 10.000$ to kas").await.unwrap();
        handle_message(&mut ledger, "deposit by B. 5.000$ to kas").await.unwrap();
        handle_message(&mut ledger, "withdraw by A. 3.000$ to warung").await.unwrap();

        assert_eq!(ledger.total(), Amount::new(12000));
    }
}
