//! Spawns answer requests in a background thread with a result channel.

use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::assistant::{Assistant, Exchange};
use crate::core::lookup::SummarySource;

use super::PendingAnswer;

/// How an answer request ended.
#[derive(Debug)]
pub enum AnswerOutcome {
    Answered(Exchange),
    Cancelled,
}

/// Spawn an answer request. Returns PendingAnswer with the result channel and cancel token.
pub fn spawn_answer<S>(
    rt: &Arc<Runtime>,
    assistant: Arc<Assistant<S>>,
    input: String,
) -> PendingAnswer
where
    S: SummarySource + Send + Sync + 'static,
{
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let outcome = rt_clone.block_on(async {
            tokio::select! {
                _ = cancel_token_clone.cancelled() => AnswerOutcome::Cancelled,
                exchange = assistant.answer(&input) => AnswerOutcome::Answered(exchange),
            }
        });
        let _ = result_tx.send(outcome);
    });

    PendingAnswer {
        result_rx,
        cancel_token,
    }
}
