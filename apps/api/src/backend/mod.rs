/// Backend client — forwards scored interviews to the job-board backend.
///
/// The backend owns persistence, application status and candidate
/// notification; this service only computes and hands over the result.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod schema;

use schema::{InterviewCreate, SaveInterviewResponse};

const SAVE_INTERVIEW_PATH: &str = "/interviews/save";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 30;
const RETRY_BASE_DELAY_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Backend unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    detail: String,
}

/// Destination for scored interviews. Carried in `AppState` as
/// `Option<Arc<dyn InterviewSink>>`; absent when no backend is configured.
#[async_trait]
pub trait InterviewSink: Send + Sync {
    async fn save_interview(
        &self,
        interview: &InterviewCreate,
    ) -> Result<SaveInterviewResponse, BackendError>;
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    retry_delay: Duration,
}

impl BackendClient {
    pub fn new(base_url: String) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_delay: Duration::from_millis(RETRY_BASE_DELAY_MS),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POSTs `body` as JSON. Only connect failures are retried (backoff 1s, 2s):
    /// the backend stores the interview before anything else can fail, so a
    /// request that reached it must not be sent again. Any non-2xx status is
    /// returned as-is.
    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let url = self.url(path);
        let mut last_error: Option<BackendError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = self.retry_delay * (1 << (attempt - 1));
                warn!(
                    "Backend at {} unreachable (attempt {}), retrying after {}ms...",
                    self.base_url,
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&url).json(body).send().await {
                Ok(r) => r,
                Err(e) if e.is_connect() => {
                    last_error = Some(BackendError::Http(e));
                    continue;
                }
                Err(e) => return Err(BackendError::Http(e)),
            };

            let status = response.status();

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                warn!("Backend returned {} for {}: {}", status, path, body);
                // FastAPI-style {"detail": "..."} when available
                let message = serde_json::from_str::<BackendErrorBody>(&body)
                    .map(|e| e.detail)
                    .unwrap_or(body);
                return Err(BackendError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: T = response.json().await?;
            debug!("Backend call to {} succeeded", path);
            return Ok(parsed);
        }

        Err(last_error.unwrap_or(BackendError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl InterviewSink for BackendClient {
    async fn save_interview(
        &self,
        interview: &InterviewCreate,
    ) -> Result<SaveInterviewResponse, BackendError> {
        self.post_json(SAVE_INTERVIEW_PATH, interview).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::backend::schema::AnswerRecord;
    use crate::models::question::QuestionType;

    /// Serves `SAVE_INTERVIEW_PATH` with a fixed reply and counts requests.
    async fn spawn_backend(status: StatusCode, reply: Value) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let app = Router::new().route(
            SAVE_INTERVIEW_PATH,
            post(move || {
                let counter = counter.clone();
                let reply = reply.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (status, Json(reply))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), hits)
    }

    fn fast_client(base_url: String) -> BackendClient {
        let mut client = BackendClient::new(base_url).unwrap();
        // Loopback stubs must not go through an HTTP_PROXY from the environment.
        client.client = Client::builder().no_proxy().build().unwrap();
        client.retry_delay = Duration::from_millis(10);
        client
    }

    fn sample_interview() -> InterviewCreate {
        InterviewCreate {
            candidate_email: "ada@example.com".to_string(),
            job_id: "3".to_string(),
            application_id: "11".to_string(),
            score: 9.0,
            max_score: 10.0,
            percentage: 94.5,
            performance: "Excellent".to_string(),
            answers: vec![AnswerRecord {
                question: "What is hoisting?".to_string(),
                answer: "Scope and hoisting determine variable visibility.".to_string(),
                question_type: QuestionType::Coding,
            }],
            time_taken: 600,
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://127.0.0.1:8000/".to_string()).unwrap();
        assert_eq!(
            client.url(SAVE_INTERVIEW_PATH),
            "http://127.0.0.1:8000/interviews/save"
        );
    }

    #[tokio::test]
    async fn test_save_parses_success_reply() {
        let (url, hits) = spawn_backend(
            StatusCode::OK,
            json!({
                "success": true,
                "message": "Interview results saved successfully",
                "interview": { "id": 1 }
            }),
        )
        .await;

        let saved = fast_client(url).save_interview(&sample_interview()).await.unwrap();
        assert!(saved.success);
        assert_eq!(saved.message, "Interview results saved successfully");
        assert_eq!(saved.interview.unwrap()["id"], 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_client_error_carries_detail() {
        let (url, hits) =
            spawn_backend(StatusCode::NOT_FOUND, json!({ "detail": "Application not found" }))
                .await;

        let err = fast_client(url)
            .save_interview(&sample_interview())
            .await
            .unwrap_err();
        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Application not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_error_is_not_resent() {
        let (url, hits) = spawn_backend(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "detail": "Failed to save interview results" }),
        )
        .await;

        let err = fast_client(url)
            .save_interview(&sample_interview())
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Api { status: 500, .. }));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_retried_then_reported() {
        // Bind then drop to get a local port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let started = std::time::Instant::now();
        let err = fast_client(format!("http://{addr}"))
            .save_interview(&sample_interview())
            .await
            .unwrap_err();
        match err {
            BackendError::Http(e) => assert!(e.is_connect()),
            other => panic!("expected connect error, got {other:?}"),
        }
        // Two backoffs: 10ms + 20ms.
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
