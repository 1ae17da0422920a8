//! Applying finished answers to the TUI state.

use super::app::App;
use super::constants;
use super::handlers::AnswerOutcome;

/// Drop the thinking placeholder, then render the reply and its history entry,
/// or the cancellation notice (no history entry).
pub(super) fn handle_answer_outcome(app: &mut App, outcome: AnswerOutcome) {
    app.set_thinking(false);
    match outcome {
        AnswerOutcome::Answered(exchange) => {
            log::debug!("Answered {:?} as {:?}", exchange.query, exchange.reply.kind);
            exchange.render_reply(app);
        }
        AnswerOutcome::Cancelled => {
            log::info!("Request cancelled by user");
            app.push_notice(constants::CANCELLED_NOTICE);
        }
    }
}
