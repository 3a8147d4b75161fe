use crate::api::model::Filters;

/// Side effects requested by the handlers, carried out by the main loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    FetchToken,
    FetchQuestions { amount: usize, filters: Filters },
    Quit,
}
