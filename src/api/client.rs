//! Session-token aware client for the Open Trivia Database.

use super::model::{Filters, QuestionBatch, TokenResponse};
use super::transport::{JsonTransport, ReqwestTransport};
use super::ApiError;
use reqwest::Url;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";

/// The session token issued by the service. Set once, never cleared.
#[derive(Debug, Default)]
struct Session {
    token: Option<String>,
}

/// Fetches tokens and question batches.
///
/// The token is kept behind a mutex so the client can be shared with the
/// spawned request tasks; the lock is never held across an await.
pub struct TriviaClient<T = ReqwestTransport> {
    base_url: Url,
    transport: T,
    session: Mutex<Session>,
}

impl TriviaClient<ReqwestTransport> {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Self::with_transport(base_url, ReqwestTransport::new(timeout)?)
    }
}

impl<T: JsonTransport> TriviaClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::Url(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            base_url,
            transport,
            session: Mutex::new(Session::default()),
        })
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    fn token(&self) -> Option<String> {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| ApiError::Url(format!("{}: {}", joined, e)))
    }

    pub fn token_url(&self) -> Result<Url, ApiError> {
        let mut url = self.endpoint("/api_token.php")?;
        url.query_pairs_mut().append_pair("command", "request");
        Ok(url)
    }

    /// Build the `api.php` URL. Later parameters replace earlier ones with
    /// the same key, so a filter may override `amount` or `token`.
    pub fn questions_url(&self, amount: usize, filters: &Filters) -> Result<Url, ApiError> {
        let mut params: Vec<(String, String)> = vec![("amount".to_string(), amount.to_string())];
        if let Some(token) = self.token() {
            params.push(("token".to_string(), token));
        }
        for (key, value) in filters {
            match params.iter_mut().find(|(k, _)| k == key) {
                Some(existing) => existing.1 = value.clone(),
                None => params.push((key.clone(), value.clone())),
            }
        }

        let mut url = self.endpoint("/api.php")?;
        url.query_pairs_mut().extend_pairs(params.iter());
        Ok(url)
    }

    /// Return the held token, or request a new one.
    ///
    /// A held token short-circuits without touching the network; this is a
    /// memoization guard, not a refresh.
    pub async fn fetch_token(&self) -> Result<String, ApiError> {
        if let Some(token) = self.token() {
            return Ok(token);
        }

        let url = self.token_url()?;
        tracing::debug!(%url, "requesting session token");
        let body = self.transport.get_json(url).await?;
        let response: TokenResponse = serde_json::from_value(body)?;
        if response.response_code != 0 {
            tracing::warn!(code = response.response_code, "token endpoint returned non-zero code");
        }

        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        // A concurrent request may have won the race; keep the first token.
        let token = session.token.get_or_insert(response.token).clone();
        tracing::info!("session token acquired");
        Ok(token)
    }

    /// Fetch a batch. The response code is returned to the caller unjudged.
    pub async fn fetch_questions(
        &self,
        amount: usize,
        filters: &Filters,
    ) -> Result<QuestionBatch, ApiError> {
        let url = self.questions_url(amount, filters)?;
        tracing::debug!(%url, "requesting questions");
        let body = self.transport.get_json(url).await?;
        let mut batch: QuestionBatch = serde_json::from_value(body)?;
        batch.decode_html();
        tracing::info!(
            code = batch.response_code,
            count = batch.results.len(),
            "question batch received"
        );
        Ok(batch)
    }
}
