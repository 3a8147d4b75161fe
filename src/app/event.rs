use crate::api::model::QuestionBatch;
use crossterm::event::Event as CrosstermEvent;

/// Which API request a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Token,
    Questions,
}

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A session token is held by the API client
    TokenReady,

    /// Reply from the questions endpoint, response code not yet judged
    QuestionsReceived(QuestionBatch),

    /// Transport failure; the matching success event will never arrive
    RequestFailed { request: RequestKind, error: String },

    /// Tick for UI refresh
    Tick,
}
