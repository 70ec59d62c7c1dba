//! reqwest-backed endpoint client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, warn};

use super::{build_envelope, extract_answer, AnswerClient};
use crate::errors::AskError;
use crate::model::{Question, QuestionResult};

/// Conversation id sent with every evaluation question.
const CONVERSATION_ID: &str = "TEST";
/// Conversation id for the pre-run connectivity probe.
const PROBE_CONVERSATION_ID: &str = "CONNECTION_TEST";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the question endpoint. Owns the connection pool for the
/// lifetime of one run; a single attempt per question, no retries.
pub struct HttpAnswerClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnswerClient {
    pub fn new(endpoint: impl Into<String>, auth_header: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(auth_header)
                .map_err(|e| anyhow::anyhow!("invalid authorization header: {}", e))?,
        );

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Pre-run probe: send a throwaway question and require a 2xx. The run
    /// aborts before the first pass when this fails.
    pub async fn check_connection(&self) -> Result<(), AskError> {
        let body = build_envelope("Hello", PROBE_CONVERSATION_ID)?;
        let resp = self
            .client
            .post(&self.endpoint)
            .timeout(PROBE_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| AskError::Network {
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AskError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    async fn ask_inner(&self, question: &Question) -> Result<String, AskError> {
        let body = build_envelope(&question.text, CONVERSATION_ID)?;
        debug!(question_id = %question.id, endpoint = %self.endpoint, "posting question");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AskError::Network {
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AskError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = resp.json().await.map_err(|e| AskError::InvalidBody {
            message: e.to_string(),
        })?;
        extract_answer(&json)
    }
}

#[async_trait]
impl AnswerClient for HttpAnswerClient {
    async fn ask(&self, question: &Question) -> QuestionResult {
        let started = Instant::now();
        match self.ask_inner(question).await {
            Ok(text) => {
                QuestionResult::success(&question.id, text, started.elapsed().as_secs_f64())
            }
            Err(e) => {
                warn!(question_id = %question.id, error = %e, "question failed");
                QuestionResult::failure(&question.id, e.to_string(), started.elapsed().as_secs_f64())
            }
        }
    }
}
