//! Scripted client for runner tests. No network, zero latency.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use super::AnswerClient;
use crate::model::{Question, QuestionResult};

/// Returns a canned answer per question, with optional per-id scripted
/// outcomes consumed in FIFO order (one per pass).
pub struct FakeAnswerClient {
    default_text: String,
    script: Mutex<HashMap<String, VecDeque<Result<String, String>>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeAnswerClient {
    pub fn new(default_text: impl Into<String>) -> Self {
        Self {
            default_text: default_text.into(),
            script: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue an outcome for the next `ask` of `question_id`. `Err` becomes
    /// an error result, as the HTTP client would produce.
    pub fn push_outcome(&self, question_id: &str, outcome: Result<String, String>) {
        self.script
            .lock()
            .expect("script lock")
            .entry(question_id.to_string())
            .or_default()
            .push_back(outcome);
    }

    /// Question ids in the order they were asked, across both passes.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl AnswerClient for FakeAnswerClient {
    async fn ask(&self, question: &Question) -> QuestionResult {
        self.calls
            .lock()
            .expect("calls lock")
            .push(question.id.clone());

        let scripted = self
            .script
            .lock()
            .expect("script lock")
            .get_mut(&question.id)
            .and_then(VecDeque::pop_front);

        match scripted {
            Some(Ok(text)) => QuestionResult::success(&question.id, text, 0.0),
            Some(Err(error)) => QuestionResult::failure(&question.id, error, 0.0),
            None => QuestionResult::success(&question.id, self.default_text.clone(), 0.0),
        }
    }
}
