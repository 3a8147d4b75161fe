//! Pure projection from application state to what the screen shows.
//!
//! The `ui` module only draws a [`View`]; it never looks at the store
//! directly, and nothing here mutates state.

use crate::app::error::QuizError;
use crate::app::state::AppState;
use crate::app::store::{Page, Progress, Question};

#[derive(Debug, PartialEq)]
pub enum Screen<'a> {
    Intro {
        /// The start control is disabled until this is true.
        api_ready: bool,
        /// The token request failed; the start control stays disabled.
        connection_failed: bool,
        loading: bool,
        counts: &'a [usize],
        selected: usize,
    },
    Question {
        question: &'a Question,
        cursor: usize,
    },
    Answer {
        question: &'a Question,
        feedback: &'a str,
        correct: bool,
    },
    Outro {
        score: usize,
        total: usize,
    },
}

#[derive(Debug, PartialEq)]
pub struct View<'a> {
    pub screen: Screen<'a>,
    /// Score and progress, hidden on the intro screen.
    pub quiz_status: Option<(usize, Progress)>,
    pub status_message: Option<&'a str>,
    pub tick: u64,
}

pub fn project(state: &AppState) -> Result<View<'_>, QuizError> {
    let quiz = &state.quiz;
    let page = quiz.page();

    let screen = match page {
        Page::Intro => Screen::Intro {
            api_ready: quiz.api_ready(),
            connection_failed: state.connection_failed,
            loading: state.fetch_pending,
            counts: &state.count_picker.options,
            selected: state.count_picker.selected,
        },
        Page::Question => Screen::Question {
            question: quiz.current_question()?,
            cursor: state.answer_cursor,
        },
        Page::Answer => {
            let question = quiz.current_question()?;
            let correct = quiz
                .user_answers()
                .last()
                .is_some_and(|a| *a == question.correct_answer);
            Screen::Answer {
                question,
                feedback: quiz.feedback().unwrap_or_default(),
                correct,
            }
        }
        Page::Outro => Screen::Outro {
            score: quiz.score(),
            total: quiz.progress().total,
        },
    };

    let quiz_status = match page {
        Page::Intro => None,
        _ => Some((quiz.score(), quiz.progress())),
    };

    Ok(View {
        screen,
        quiz_status,
        status_message: state.status_message.as_deref(),
        tick: state.tick_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::RawQuestion;
    use crate::config::AppConfig;

    fn batch() -> Vec<RawQuestion> {
        vec![
            RawQuestion {
                question: "Q1".into(),
                incorrect_answers: vec!["x".into(), "y".into()],
                correct_answer: "z".into(),
                category: None,
                difficulty: None,
                kind: None,
            },
            RawQuestion {
                question: "Q2".into(),
                incorrect_answers: vec!["a".into()],
                correct_answer: "b".into(),
                category: None,
                difficulty: None,
                kind: None,
            },
        ]
    }

    #[test]
    fn test_intro_hides_quiz_status() {
        let state = AppState::new(AppConfig::default());
        let view = project(&state).unwrap();
        assert_eq!(view.quiz_status, None);
        match view.screen {
            Screen::Intro {
                api_ready,
                connection_failed,
                counts,
                selected,
                loading,
            } => {
                assert!(!api_ready);
                assert!(!connection_failed);
                assert!(!loading);
                assert_eq!(counts, &[3, 10, 25]);
                assert_eq!(selected, 0);
            }
            other => panic!("unexpected screen: {:?}", other),
        }
    }

    #[test]
    fn test_intro_reports_connection_failure() {
        let mut state = AppState::new(AppConfig::default());
        state.connection_failed = true;
        let view = project(&state).unwrap();
        assert!(matches!(
            view.screen,
            Screen::Intro {
                api_ready: false,
                connection_failed: true,
                ..
            }
        ));
    }

    #[test]
    fn test_answer_screen_carries_feedback() {
        let mut state = AppState::new(AppConfig::default());
        state.quiz.begin_run(&batch()).unwrap();
        state.quiz.submit_answer("z".into()).unwrap();

        let view = project(&state).unwrap();
        assert_eq!(
            view.quiz_status,
            Some((1, Progress { current: 1, total: 2 }))
        );
        match view.screen {
            Screen::Answer { feedback, correct, question } => {
                assert_eq!(feedback, "You got it!");
                assert!(correct);
                assert_eq!(question.text, "Q1");
            }
            other => panic!("unexpected screen: {:?}", other),
        }
    }

    #[test]
    fn test_projection_does_not_mutate() {
        let mut state = AppState::new(AppConfig::default());
        state.quiz.begin_run(&batch()).unwrap();
        let before = state.quiz.clone();
        let _ = project(&state).unwrap();
        assert_eq!(state.quiz, before);
    }
}
