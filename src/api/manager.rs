//! Bridges the async trivia client and the single-threaded event loop.
//!
//! Each request runs in its own task and reports back through the event
//! channel. Failures are logged and surfaced as [`AppEvent::RequestFailed`];
//! the success event for that request is never sent.

use crate::api::client::TriviaClient;
use crate::api::model::Filters;
use crate::api::transport::{JsonTransport, ReqwestTransport};
use crate::app::event::{AppEvent, RequestKind};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct ApiManager<T = ReqwestTransport> {
    client: Arc<TriviaClient<T>>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl<T: JsonTransport + 'static> ApiManager<T> {
    pub fn new(client: TriviaClient<T>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            client: Arc::new(client),
            event_tx,
        }
    }

    /// Ask for a session token. With a token already held, `TokenReady` is
    /// sent immediately and nothing is spawned.
    pub fn request_token(&self) {
        if self.client.has_token() {
            let _ = self.event_tx.send(AppEvent::TokenReady);
            return;
        }

        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            match client.fetch_token().await {
                Ok(_) => {
                    let _ = tx.send(AppEvent::TokenReady);
                }
                Err(e) => {
                    tracing::error!(error = %e, "session token request failed");
                    let _ = tx.send(AppEvent::RequestFailed {
                        request: RequestKind::Token,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    pub fn request_questions(&self, amount: usize, filters: Filters) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            match client.fetch_questions(amount, &filters).await {
                Ok(batch) => {
                    let _ = tx.send(AppEvent::QuestionsReceived(batch));
                }
                Err(e) => {
                    tracing::error!(error = %e, amount, "question request failed");
                    let _ = tx.send(AppEvent::RequestFailed {
                        request: RequestKind::Questions,
                        error: e.to_string(),
                    });
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use async_trait::async_trait;
    use reqwest::Url;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingTransport {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl JsonTransport for CountingTransport {
        async fn get_json(&self, url: Url) -> Result<serde_json::Value, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if url.path() == "/api_token.php" {
                Ok(json!({ "response_code": 0, "token": "tok" }))
            } else {
                Ok(json!({ "response_code": 1, "results": [] }))
            }
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl JsonTransport for FailingTransport {
        async fn get_json(&self, url: Url) -> Result<serde_json::Value, ApiError> {
            Err(ApiError::Status {
                status: 500,
                url: url.to_string(),
            })
        }
    }

    fn failing_manager() -> (ApiManager<FailingTransport>, mpsc::UnboundedReceiver<AppEvent>) {
        let client = TriviaClient::with_transport("https://opentdb.com", FailingTransport).unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        (ApiManager::new(client, tx), rx)
    }

    #[tokio::test]
    async fn test_failed_questions_request_reports_failure_only() {
        let (manager, mut rx) = failing_manager();
        manager.request_questions(3, vec![]);

        match rx.recv().await {
            Some(AppEvent::RequestFailed { request, error }) => {
                assert_eq!(request, RequestKind::Questions);
                assert!(error.contains("500"));
            }
            other => panic!("unexpected event: {:?}", other),
        }

        // The task has finished and dropped its sender; nothing else follows.
        drop(manager);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_token_request_reports_failure_only() {
        let (manager, mut rx) = failing_manager();
        manager.request_token();

        match rx.recv().await {
            Some(AppEvent::RequestFailed { request, .. }) => {
                assert_eq!(request, RequestKind::Token);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        drop(manager);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_held_token_reports_ready_without_request() {
        let calls = Arc::new(AtomicUsize::new(0));
        let transport = CountingTransport {
            calls: Arc::clone(&calls),
        };
        let client = TriviaClient::with_transport("https://opentdb.com", transport).unwrap();
        client.fetch_token().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = ApiManager::new(client, tx);
        manager.request_token();

        // Delivered synchronously, before any task could run.
        assert!(matches!(rx.try_recv(), Ok(AppEvent::TokenReady)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_questions_delivered_as_event() {
        let client =
            TriviaClient::with_transport("https://opentdb.com", CountingTransport::default())
                .unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = ApiManager::new(client, tx);
        manager.request_questions(3, vec![("type".into(), "multiple".into())]);

        match rx.recv().await {
            Some(AppEvent::QuestionsReceived(batch)) => assert_eq!(batch.response_code, 1),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
