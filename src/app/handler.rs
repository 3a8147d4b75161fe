use crate::api::model::{QuestionBatch, ResponseCode};
use crate::app::action::Action;
use crate::app::error::QuizError;
use crate::app::event::{AppEvent, RequestKind};
use crate::app::state::*;
use crate::app::store::Page;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Apply one event to the state and return the side effects it asks for.
///
/// An `Err` is fatal: the main loop stops and reports it.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Result<Vec<Action>, QuizError> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::TokenReady => {
            tracing::info!("trivia API ready");
            state.quiz.set_api_ready(true);
            state.connection_failed = false;
            state.clear_status();
            state.dirty = true;
            Ok(vec![])
        }
        AppEvent::QuestionsReceived(batch) => handle_questions(state, batch),
        AppEvent::RequestFailed { request, error } => {
            let what = match request {
                RequestKind::Token => {
                    state.connection_failed = true;
                    "Could not reach the trivia service"
                }
                RequestKind::Questions => {
                    state.fetch_pending = false;
                    "Could not load questions"
                }
            };
            state.set_status(format!("{}: {}", what, error));
            Ok(vec![])
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the loading spinner animates.
            let connecting = !state.quiz.api_ready() && !state.connection_failed;
            if state.fetch_pending || connecting {
                state.dirty = true;
            }
            Ok(vec![])
        }
    }
}

fn handle_questions(state: &mut AppState, batch: QuestionBatch) -> Result<Vec<Action>, QuizError> {
    if !state.fetch_pending {
        tracing::warn!("discarding question batch with no request outstanding");
        return Ok(vec![]);
    }
    state.fetch_pending = false;

    let code = batch.code();
    if code != ResponseCode::Success {
        tracing::error!(%code, "question request rejected");
        return Err(QuizError::Api(code));
    }

    state.quiz.begin_run(&batch.results)?;
    state.answer_cursor = 0;
    state.clear_status();
    state.dirty = true;
    tracing::info!(count = batch.results.len(), "quiz started");
    Ok(vec![])
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Result<Vec<Action>, QuizError> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            Ok(vec![])
        }
        _ => Ok(vec![]),
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Result<Vec<Action>, QuizError> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(vec![Action::Quit]);
    }

    let page = state.quiz.page();
    if page != Page::Question && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        return Ok(vec![Action::Quit]);
    }

    match page {
        Page::Intro => handle_intro_key(state, key),
        Page::Question => handle_question_key(state, key),
        Page::Answer => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => handle_next_question(state),
            _ => Ok(vec![]),
        },
        Page::Outro => match key.code {
            KeyCode::Enter => Ok(handle_start_quiz(state)),
            _ => Ok(vec![]),
        },
    }
}

fn handle_intro_key(state: &mut AppState, key: KeyEvent) -> Result<Vec<Action>, QuizError> {
    match key.code {
        KeyCode::Left | KeyCode::Up => {
            state.count_picker.select_prev();
            state.dirty = true;
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
            state.count_picker.select_next();
            state.dirty = true;
        }
        KeyCode::Enter => return Ok(handle_start_quiz(state)),
        _ => {}
    }
    Ok(vec![])
}

fn handle_question_key(state: &mut AppState, key: KeyEvent) -> Result<Vec<Action>, QuizError> {
    match key.code {
        KeyCode::Up | KeyCode::BackTab => state.move_answer_cursor(false),
        KeyCode::Down | KeyCode::Tab => state.move_answer_cursor(true),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < state.answer_count() {
                state.answer_cursor = index;
                state.dirty = true;
            }
        }
        KeyCode::Enter => return handle_submit_answer(state),
        _ => {}
    }
    Ok(vec![])
}

/// Reset the store and ask for a fresh batch. Refused while the API has no
/// token (the start control is disabled) or a batch is already on its way.
pub fn handle_start_quiz(state: &mut AppState) -> Vec<Action> {
    if !state.quiz.api_ready() {
        // A failed token request already left its reason in the status bar.
        if !state.connection_failed {
            state.set_status("Still connecting to the trivia service...");
        }
        return vec![];
    }
    if state.fetch_pending {
        tracing::debug!("start ignored, question request already outstanding");
        return vec![];
    }
    let Some(amount) = state.count_picker.value() else {
        return vec![];
    };

    state.quiz.reset();
    state.answer_cursor = 0;
    state.fetch_pending = true;
    state.clear_status();
    state.dirty = true;
    tracing::info!(amount, "starting quiz");

    vec![Action::FetchQuestions {
        amount,
        filters: state.config.api.filters(),
    }]
}

pub fn handle_submit_answer(state: &mut AppState) -> Result<Vec<Action>, QuizError> {
    let selected = state
        .quiz
        .current_question()?
        .answers
        .get(state.answer_cursor)
        .cloned();
    let Some(answer) = selected else {
        return Ok(vec![]);
    };

    state.quiz.submit_answer(answer)?;
    state.dirty = true;
    Ok(vec![])
}

pub fn handle_next_question(state: &mut AppState) -> Result<Vec<Action>, QuizError> {
    state.quiz.next_question()?;
    state.answer_cursor = 0;
    state.dirty = true;
    if state.quiz.page() == Page::Outro {
        tracing::info!(
            score = state.quiz.score(),
            total = state.quiz.progress().total,
            "quiz finished"
        );
    }
    Ok(vec![])
}
