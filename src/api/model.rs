//! Wire types for the trivia service's JSON replies.

use serde::Deserialize;
use std::fmt;

use super::entities::decode_html;

/// Extra query parameters for a question request (e.g. `type=multiple`).
pub type Filters = Vec<(String, String)>;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub response_code: i64,
    pub token: String,
}

/// One question as the service sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub incorrect_answers: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl RawQuestion {
    fn decode_html(&mut self) {
        self.question = decode_html(&self.question);
        self.correct_answer = decode_html(&self.correct_answer);
        for answer in &mut self.incorrect_answers {
            *answer = decode_html(answer);
        }
        if let Some(category) = self.category.as_mut() {
            *category = decode_html(category);
        }
    }
}

/// A reply from `api.php`. `results` is absent on most failure codes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionBatch {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

impl QuestionBatch {
    pub fn code(&self) -> ResponseCode {
        ResponseCode::from(self.response_code)
    }

    /// Replace HTML character references in every text field.
    pub fn decode_html(&mut self) {
        for question in &mut self.results {
            question.decode_html();
        }
    }
}

/// The service's in-body status, distinct from the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    Unknown(i64),
}

impl From<i64> for ResponseCode {
    fn from(code: i64) -> Self {
        match code {
            0 => ResponseCode::Success,
            1 => ResponseCode::NoResults,
            2 => ResponseCode::InvalidParameter,
            3 => ResponseCode::TokenNotFound,
            4 => ResponseCode::TokenEmpty,
            5 => ResponseCode::RateLimit,
            other => ResponseCode::Unknown(other),
        }
    }
}

impl ResponseCode {
    pub fn as_i64(self) -> i64 {
        match self {
            ResponseCode::Success => 0,
            ResponseCode::NoResults => 1,
            ResponseCode::InvalidParameter => 2,
            ResponseCode::TokenNotFound => 3,
            ResponseCode::TokenEmpty => 4,
            ResponseCode::RateLimit => 5,
            ResponseCode::Unknown(n) => n,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ResponseCode::Success => "success",
            ResponseCode::NoResults => "not enough questions for the query",
            ResponseCode::InvalidParameter => "invalid parameter",
            ResponseCode::TokenNotFound => "session token not found",
            ResponseCode::TokenEmpty => "session token has returned every question",
            ResponseCode::RateLimit => "rate limit exceeded",
            ResponseCode::Unknown(_) => "unknown response code",
        };
        write!(f, "{} (code {})", text, self.as_i64())
    }
}
