//! Quiz progress: the page state machine plus score and progress
//! bookkeeping for one run.

use crate::api::model::RawQuestion;
use crate::app::error::QuizError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Intro,
    Question,
    Answer,
    Outro,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Intro => "intro",
            Page::Question => "question",
            Page::Answer => "answer",
            Page::Outro => "outro",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    /// Incorrect answers in source order, then the correct one.
    pub answers: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn from_raw(raw: &RawQuestion) -> Self {
        let mut answers = raw.incorrect_answers.clone();
        answers.push(raw.correct_answer.clone());
        Self {
            text: raw.question.clone(),
            answers,
            correct_answer: raw.correct_answer.clone(),
        }
    }
}

/// 1-based position for display. `current` is 0 before a run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

pub const CORRECT_FEEDBACK: &str = "You got it!";

#[derive(Debug, Clone, PartialEq)]
pub struct QuizStore {
    page: Page,
    questions: Vec<Question>,
    current_question_index: Option<usize>,
    user_answers: Vec<String>,
    feedback: Option<String>,
    api_ready: bool,
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizStore {
    pub fn new() -> Self {
        Self {
            page: Page::Intro,
            questions: Vec::new(),
            current_question_index: None,
            user_answers: Vec::new(),
            feedback: None,
            api_ready: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question_index(&self) -> Option<usize> {
        self.current_question_index
    }

    pub fn user_answers(&self) -> &[String] {
        &self.user_answers
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn api_ready(&self) -> bool {
        self.api_ready
    }

    pub fn set_api_ready(&mut self, ready: bool) {
        self.api_ready = ready;
    }

    /// Back to the initial intro state. Readiness belongs to the API session,
    /// not the run, so it is carried over.
    pub fn reset(&mut self) {
        *self = Self {
            api_ready: self.api_ready,
            ..Self::new()
        };
    }

    /// Replace the question list and clear per-run progress.
    pub fn seed_questions(&mut self, raw: &[RawQuestion]) {
        self.questions = raw.iter().map(Question::from_raw).collect();
        self.current_question_index = None;
        self.user_answers.clear();
        self.feedback = None;
    }

    /// Seed a fresh run and show its first question.
    pub fn begin_run(&mut self, raw: &[RawQuestion]) -> Result<(), QuizError> {
        if !matches!(self.page, Page::Intro | Page::Outro) {
            return Err(QuizError::InvalidTransition {
                page: self.page,
                action: "start a quiz",
            });
        }
        if raw.is_empty() {
            return Err(QuizError::EmptyBatch);
        }
        self.seed_questions(raw);
        self.current_question_index = Some(0);
        self.page = Page::Question;
        Ok(())
    }

    pub fn submit_answer(&mut self, answer: String) -> Result<(), QuizError> {
        if self.page != Page::Question {
            return Err(QuizError::InvalidTransition {
                page: self.page,
                action: "submit an answer",
            });
        }
        let correct = self.current_question()?.correct_answer.clone();

        self.feedback = Some(if answer == correct {
            CORRECT_FEEDBACK.to_string()
        } else {
            format!("Too bad! The correct answer was: {}", correct)
        });
        self.user_answers.push(answer);
        self.page = Page::Answer;
        Ok(())
    }

    pub fn next_question(&mut self) -> Result<(), QuizError> {
        if self.page != Page::Answer {
            return Err(QuizError::InvalidTransition {
                page: self.page,
                action: "continue",
            });
        }
        if self.is_last_question() {
            self.page = Page::Outro;
            return Ok(());
        }
        self.current_question_index = self.current_question_index.map(|i| i + 1);
        self.page = Page::Question;
        Ok(())
    }

    /// False while no questions are seeded or the index is unset.
    pub fn is_last_question(&self) -> bool {
        match self.current_question_index {
            Some(index) => !self.questions.is_empty() && index == self.questions.len() - 1,
            None => false,
        }
    }

    pub fn score(&self) -> usize {
        self.user_answers
            .iter()
            .zip(&self.questions)
            .filter(|(answer, question)| **answer == question.correct_answer)
            .count()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current: self.current_question_index.map_or(0, |i| i + 1),
            total: self.questions.len(),
        }
    }

    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.current_question_index
            .and_then(|i| self.questions.get(i))
            .ok_or(QuizError::NoCurrentQuestion(self.page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(question: &str, correct: &str, wrong: &[&str]) -> RawQuestion {
        RawQuestion {
            question: question.to_string(),
            incorrect_answers: wrong.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.to_string(),
            category: None,
            difficulty: None,
            kind: Some("multiple".to_string()),
        }
    }

    fn three_questions() -> Vec<RawQuestion> {
        vec![
            raw("Capital of France?", "Paris", &["Lyon", "Nice", "Lille"]),
            raw("2 + 2?", "4", &["3", "5", "22"]),
            raw("Largest planet?", "Jupiter", &["Mars", "Venus", "Earth"]),
        ]
    }

    fn answer_current(store: &mut QuizStore, correct: bool) {
        let question = store.current_question().unwrap().clone();
        let answer = if correct {
            question.correct_answer
        } else {
            question.answers[0].clone()
        };
        store.submit_answer(answer).unwrap();
    }

    #[test]
    fn test_new_store_is_intro() {
        let store = QuizStore::new();
        assert_eq!(store.page(), Page::Intro);
        assert!(store.questions().is_empty());
        assert_eq!(store.current_question_index(), None);
        assert!(store.user_answers().is_empty());
        assert_eq!(store.feedback(), None);
        assert!(!store.api_ready());
    }

    #[test]
    fn test_full_run_scores_and_reaches_outro() {
        let mut store = QuizStore::new();
        store.begin_run(&three_questions()).unwrap();

        answer_current(&mut store, true);
        assert_eq!(store.feedback(), Some(CORRECT_FEEDBACK));
        store.next_question().unwrap();

        answer_current(&mut store, false);
        assert_eq!(store.feedback(), Some("Too bad! The correct answer was: 4"));
        store.next_question().unwrap();

        answer_current(&mut store, true);
        assert!(store.is_last_question());
        store.next_question().unwrap();

        assert_eq!(store.page(), Page::Outro);
        assert_eq!(store.score(), 2);
        assert_eq!(store.progress(), Progress { current: 3, total: 3 });
    }

    #[test]
    fn test_score_only_counts_recorded_answers() {
        let mut store = QuizStore::new();
        store.begin_run(&three_questions()).unwrap();
        assert_eq!(store.score(), 0);
        answer_current(&mut store, true);
        assert_eq!(store.score(), 1);
        assert!(store.user_answers().len() <= store.current_question_index().unwrap() + 1);
    }

    #[test]
    fn test_progress_tracks_index() {
        let mut store = QuizStore::new();
        assert_eq!(store.progress(), Progress { current: 0, total: 0 });

        store.begin_run(&three_questions()).unwrap();
        assert_eq!(store.progress(), Progress { current: 1, total: 3 });

        answer_current(&mut store, false);
        store.next_question().unwrap();
        assert_eq!(store.progress(), Progress { current: 2, total: 3 });
    }

    #[test]
    fn test_is_last_question_boundaries() {
        let mut store = QuizStore::new();
        assert!(!store.is_last_question());

        store.seed_questions(&three_questions());
        assert!(!store.is_last_question());

        let mut single = QuizStore::new();
        single.begin_run(&three_questions()[..1]).unwrap();
        assert!(single.is_last_question());
    }

    #[test]
    fn test_reset_clears_run_but_keeps_readiness() {
        let mut store = QuizStore::new();
        store.set_api_ready(true);
        store.begin_run(&three_questions()).unwrap();
        answer_current(&mut store, true);

        store.reset();
        assert_eq!(store.page(), Page::Intro);
        assert!(store.user_answers().is_empty());
        assert!(store.questions().is_empty());
        assert_eq!(store.current_question_index(), None);
        assert_eq!(store.feedback(), None);
        assert!(store.api_ready());
    }

    #[test]
    fn test_seeded_questions_round_trip() {
        let batch = three_questions();
        let mut store = QuizStore::new();
        store.begin_run(&batch).unwrap();

        for (i, raw) in batch.iter().enumerate() {
            let q = store.current_question().unwrap();
            assert_eq!(q.text, raw.question);
            assert_eq!(q.correct_answer, raw.correct_answer);
            assert_eq!(q.answers.last(), Some(&raw.correct_answer));
            assert_eq!(&q.answers[..3], &raw.incorrect_answers[..]);
            if i + 1 < batch.len() {
                answer_current(&mut store, false);
                store.next_question().unwrap();
            }
        }
    }

    #[test]
    fn test_current_question_fails_fast_when_unset() {
        let store = QuizStore::new();
        assert_eq!(
            store.current_question(),
            Err(QuizError::NoCurrentQuestion(Page::Intro))
        );
    }

    #[test]
    fn test_illegal_transitions_leave_store_untouched() {
        let mut store = QuizStore::new();
        let before = store.clone();
        assert!(matches!(
            store.submit_answer("x".into()),
            Err(QuizError::InvalidTransition { page: Page::Intro, .. })
        ));
        assert!(store.next_question().is_err());
        assert_eq!(store, before);

        store.begin_run(&three_questions()).unwrap();
        assert!(store.begin_run(&three_questions()).is_err());
        assert!(store.next_question().is_err());
        assert_eq!(store.page(), Page::Question);
    }

    #[test]
    fn test_empty_batch_rejected() {
        let mut store = QuizStore::new();
        assert_eq!(store.begin_run(&[]), Err(QuizError::EmptyBatch));
        assert_eq!(store.page(), Page::Intro);
    }

    #[test]
    fn test_restart_from_outro() {
        let mut store = QuizStore::new();
        store.begin_run(&three_questions()[..1]).unwrap();
        answer_current(&mut store, true);
        store.next_question().unwrap();
        assert_eq!(store.page(), Page::Outro);

        store.begin_run(&three_questions()).unwrap();
        assert_eq!(store.page(), Page::Question);
        assert_eq!(store.score(), 0);
        assert_eq!(store.progress(), Progress { current: 1, total: 3 });
    }
}
