use crate::api::model::ResponseCode;
use crate::app::store::Page;
use thiserror::Error;

/// Errors raised by the quiz state machine and its handlers.
///
/// `Api` and `EmptyBatch` are fatal: they end the event loop. The rest are
/// programmer errors that the handlers never trigger on valid input.
#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    #[error("Trivia API refused the request: {0}")]
    Api(ResponseCode),

    #[error("Trivia API returned an empty question batch")]
    EmptyBatch,

    #[error("No current question (page: {0})")]
    NoCurrentQuestion(Page),

    #[error("Cannot {action} while on the {page} page")]
    InvalidTransition { page: Page, action: &'static str },
}
