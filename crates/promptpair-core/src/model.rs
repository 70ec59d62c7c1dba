//! Data model for a paired prompt evaluation run.
//!
//! `EvaluationRun` is the sole persisted artifact: it is built in memory by
//! the runner, serialized once, and consumed read-only by the dashboard and
//! spreadsheet renderers. Field names in the JSON document are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One question from the input set. Identity is `id`, unique within a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_complexity")]
    pub complexity: String,
}

fn default_category() -> String {
    "general".into()
}

fn default_complexity() -> String {
    "basic".into()
}

/// One of the two prompt configurations under comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptVariant {
    pub name: String,
    pub description: String,
}

/// Which of the two result slots a pass writes into. Ordering matters: the
/// operator must have the matching prompt active on the remote system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSlot {
    First,
    Second,
}

/// Reachability outcome for a single URL found in a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkCheck {
    pub url: String,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Link validation output for one response, URLs in order of appearance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkSummary {
    pub urls: Vec<LinkCheck>,
}

impl LinkSummary {
    pub fn reachable_count(&self) -> usize {
        self.urls.iter().filter(|u| u.reachable).count()
    }
}

/// Outcome of asking one question under one variant. Exactly one of
/// `response_text` / `error` is set; `links` is filled only on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub latency_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<LinkSummary>,
}

impl QuestionResult {
    pub fn success(question_id: impl Into<String>, text: impl Into<String>, latency: f64) -> Self {
        Self {
            question_id: question_id.into(),
            response_text: Some(text.into()),
            error: None,
            latency_seconds: latency,
            links: None,
        }
    }

    pub fn failure(question_id: impl Into<String>, error: impl Into<String>, latency: f64) -> Self {
        Self {
            question_id: question_id.into(),
            response_text: None,
            error: Some(error.into()),
            latency_seconds: latency,
            links: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Per-question container holding both variants' results. One record exists
/// for every input question, even when one or both calls failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonRecord {
    pub question: Question,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<QuestionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<QuestionResult>,
}

impl ComparisonRecord {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            first: None,
            second: None,
        }
    }

    pub fn set(&mut self, slot: VariantSlot, result: QuestionResult) {
        match slot {
            VariantSlot::First => self.first = Some(result),
            VariantSlot::Second => self.second = Some(result),
        }
    }

    pub fn get(&self, slot: VariantSlot) -> Option<&QuestionResult> {
        match slot {
            VariantSlot::First => self.first.as_ref(),
            VariantSlot::Second => self.second.as_ref(),
        }
    }
}

/// The aggregate result of one full evaluation: run metadata, both variant
/// descriptors, and the comparison records in input-question order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRun {
    pub name: String,
    pub description: String,
    pub variants: [PromptVariant; 2],
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    pub records: Vec<ComparisonRecord>,
}

impl EvaluationRun {
    /// Open a run with one empty record per question, preserving input order.
    pub fn open(
        name: impl Into<String>,
        description: impl Into<String>,
        variants: [PromptVariant; 2],
        questions: &[Question],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            variants,
            started_at: Utc::now(),
            finished_at: None,
            records: questions
                .iter()
                .cloned()
                .map(ComparisonRecord::new)
                .collect(),
        }
    }

    /// Close the run timestamps. The run must not be mutated afterwards.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn variant(&self, slot: VariantSlot) -> &PromptVariant {
        match slot {
            VariantSlot::First => &self.variants[0],
            VariantSlot::Second => &self.variants[1],
        }
    }
}
