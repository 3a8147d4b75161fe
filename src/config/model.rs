//! Configuration data model.
//!
//! Every field has a sensible default so the quiz works out of the box.

use crate::api::client::DEFAULT_BASE_URL;
use crate::api::model::Filters;
use anyhow::{bail, Result};
use serde::Deserialize;

/// The service refuses batches larger than this.
pub const MAX_QUESTIONS: usize = 50;

const DIFFICULTIES: &[&str] = &["easy", "medium", "hard"];

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        let counts = &self.quiz.question_counts;
        if counts.is_empty() {
            bail!("quiz.question_counts must not be empty");
        }
        if let Some(bad) = counts.iter().find(|&&n| n == 0 || n > MAX_QUESTIONS) {
            bail!(
                "quiz.question_counts entry {} is outside 1..={}",
                bad,
                MAX_QUESTIONS
            );
        }
        if !counts.contains(&self.quiz.default_count) {
            bail!(
                "quiz.default_count {} is not one of {:?}",
                self.quiz.default_count,
                counts
            );
        }
        if let Some(ref difficulty) = self.api.difficulty {
            if !DIFFICULTIES.contains(&difficulty.as_str()) {
                bail!(
                    "api.difficulty must be one of {:?}, got {:?}",
                    DIFFICULTIES,
                    difficulty
                );
            }
        }
        Ok(())
    }
}

/// Trivia service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `multiple` or `boolean`; empty string means any.
    #[serde(default = "default_question_type")]
    pub question_type: String,
    #[serde(default)]
    pub category: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            question_type: default_question_type(),
            category: None,
            difficulty: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Query filters sent with every question request.
    pub fn filters(&self) -> Filters {
        let mut filters = Filters::new();
        if !self.question_type.is_empty() {
            filters.push(("type".to_string(), self.question_type.clone()));
        }
        if let Some(category) = self.category {
            filters.push(("category".to_string(), category.to_string()));
        }
        if let Some(ref difficulty) = self.difficulty {
            filters.push(("difficulty".to_string(), difficulty.clone()));
        }
        filters
    }
}

/// Question-count choices offered on the intro screen.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_question_counts")]
    pub question_counts: Vec<usize>,
    #[serde(default = "default_count")]
    pub default_count: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_counts: default_question_counts(),
            default_count: default_count(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_question_type() -> String {
    "multiple".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_question_counts() -> Vec<usize> {
    vec![3, 10, 25]
}
fn default_count() -> usize {
    3
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/crabquiz/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
