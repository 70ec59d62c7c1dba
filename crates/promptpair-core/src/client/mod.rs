//! Endpoint client: one POST per question against the remote assistant.

pub mod fake;
pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AskError;
use crate::model::{Question, QuestionResult};

pub use http::HttpAnswerClient;

/// Seam between the runner and the remote endpoint. Implementations must
/// not fail the run: every failure mode becomes a `QuestionResult` with
/// `error` set. Pacing between calls is the runner's responsibility.
#[async_trait]
pub trait AnswerClient: Send + Sync {
    async fn ask(&self, question: &Question) -> QuestionResult;
}

/// One entry of the inner `followUpText` array.
#[derive(Debug, Serialize, Deserialize)]
pub struct FollowUp {
    pub question: String,
    pub response: String,
}

/// Build the wire envelope. The endpoint expects the follow-up array
/// serialized as a JSON string inside the outer JSON object (double-encoded).
pub fn build_envelope(
    question_text: &str,
    conversation_id: &str,
) -> Result<serde_json::Value, AskError> {
    let follow_ups = [FollowUp {
        question: question_text.to_string(),
        response: String::new(),
    }];
    let inner = serde_json::to_string(&follow_ups).map_err(|e| AskError::InvalidBody {
        message: format!("failed to encode followUpText: {}", e),
    })?;
    Ok(serde_json::json!({
        "followUpText": inner,
        "conversationId": conversation_id,
    }))
}

/// Pull the answer text out of a decoded response body.
pub fn extract_answer(body: &serde_json::Value) -> Result<String, AskError> {
    body.get("response")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or(AskError::MissingResponseField)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_double_encodes_the_follow_up_array() {
        let envelope = build_envelope("What are the pool hours?", "TEST").unwrap();
        assert_eq!(envelope["conversationId"], "TEST");

        let inner = envelope["followUpText"].as_str().expect("string field");
        let follow_ups: Vec<FollowUp> = serde_json::from_str(inner).expect("inner JSON array");
        assert_eq!(follow_ups.len(), 1);
        assert_eq!(follow_ups[0].question, "What are the pool hours?");
        assert_eq!(follow_ups[0].response, "");
    }

    #[test]
    fn envelope_survives_quotes_in_question_text() {
        let text = r#"What does "quiet hours" mean?"#;
        let envelope = build_envelope(text, "TEST").unwrap();

        // The outer document must stay valid JSON end to end.
        let reparsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&envelope).unwrap()).unwrap();
        let follow_ups: Vec<FollowUp> =
            serde_json::from_str(reparsed["followUpText"].as_str().unwrap()).unwrap();
        assert_eq!(follow_ups[0].question, text);
    }

    #[test]
    fn extract_answer_requires_response_string_field() {
        let ok = serde_json::json!({"response": "Here you go"});
        assert_eq!(extract_answer(&ok).unwrap(), "Here you go");

        let missing = serde_json::json!({"status": "ok"});
        assert!(matches!(
            extract_answer(&missing),
            Err(AskError::MissingResponseField)
        ));

        let wrong_type = serde_json::json!({"response": 42});
        assert!(matches!(
            extract_answer(&wrong_type),
            Err(AskError::MissingResponseField)
        ));
    }
}
