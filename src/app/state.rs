use crate::app::store::QuizStore;
use crate::config::AppConfig;

/// Question-count picker shown on the intro screen.
#[derive(Debug, Clone)]
pub struct CountPicker {
    pub options: Vec<usize>,
    pub selected: usize,
}

impl CountPicker {
    pub fn new(options: Vec<usize>, default: usize) -> Self {
        let selected = options.iter().position(|&n| n == default).unwrap_or(0);
        Self { options, selected }
    }

    pub fn value(&self) -> Option<usize> {
        self.options.get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = if self.selected == 0 {
                self.options.len() - 1
            } else {
                self.selected - 1
            };
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub quiz: QuizStore,
    pub count_picker: CountPicker,
    /// Highlighted answer on the question screen.
    pub answer_cursor: usize,
    pub fetch_pending: bool,
    /// The session token request failed; the quiz cannot start this run.
    pub connection_failed: bool,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let count_picker = CountPicker::new(
            config.quiz.question_counts.clone(),
            config.quiz.default_count,
        );
        Self {
            config,
            quiz: QuizStore::new(),
            count_picker,
            answer_cursor: 0,
            fetch_pending: false,
            connection_failed: false,
            should_quit: false,
            dirty: true,
            status_message: None,
            tick_count: 0,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(text.into());
        self.dirty = true;
    }

    pub fn clear_status(&mut self) {
        if self.status_message.take().is_some() {
            self.dirty = true;
        }
    }

    /// Number of answers offered for the current question, 0 if none.
    pub fn answer_count(&self) -> usize {
        self.quiz
            .current_question()
            .map(|q| q.answers.len())
            .unwrap_or(0)
    }

    pub fn move_answer_cursor(&mut self, forward: bool) {
        let count = self.answer_count();
        if count == 0 {
            return;
        }
        self.answer_cursor = if forward {
            (self.answer_cursor + 1) % count
        } else if self.answer_cursor == 0 {
            count - 1
        } else {
            self.answer_cursor - 1
        };
        self.dirty = true;
    }
}
