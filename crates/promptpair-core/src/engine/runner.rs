//! The evaluation orchestrator: two sequential passes over the question
//! set, one per prompt variant, with fixed pacing delays and per-question
//! failure capture.
//!
//! Execution is strictly sequential — one logical thread of control, no
//! parallel requests. The only suspension points are the pacing sleeps and
//! the HTTP calls themselves. The run under construction is owned
//! exclusively by the runner until `run` returns the finished artifact.

use std::sync::Arc;

use tokio::time::{sleep, Duration};
use tracing::info;

use crate::client::AnswerClient;
use crate::links::LinkValidator;
use crate::model::{EvaluationRun, PromptVariant, Question, VariantSlot};

/// Fixed pacing delays, in seconds.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// Wait between consecutive questions within a pass (not after the last).
    pub delay_questions: f64,
    /// Wait at the inter-pass checkpoint while the operator switches the
    /// active prompt on the remote system. Elapsed time is the only
    /// readiness signal; the harness cannot verify the switch happened.
    pub delay_prompts: f64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            delay_questions: 2.0,
            delay_prompts: 5.0,
        }
    }
}

/// Run-level metadata carried into the artifact.
#[derive(Debug, Clone)]
pub struct RunMeta {
    pub name: String,
    pub description: String,
}

pub struct Runner {
    pub client: Arc<dyn AnswerClient>,
    pub links: Arc<dyn LinkValidator>,
    pub pacing: Pacing,
}

impl Runner {
    /// Run both passes and return the finished artifact. A single question's
    /// failure never stops a pass; the run itself has no pass/fail status —
    /// completeness is judged downstream from the per-record errors.
    pub async fn run(
        &self,
        meta: RunMeta,
        questions: &[Question],
        variants: [PromptVariant; 2],
    ) -> EvaluationRun {
        let mut run = EvaluationRun::open(meta.name, meta.description, variants, questions);

        self.announce_pass(run.variant(VariantSlot::First), 1);
        self.run_pass(questions, VariantSlot::First, &mut run).await;

        self.prompt_switch_checkpoint(run.variant(VariantSlot::Second))
            .await;

        self.announce_pass(run.variant(VariantSlot::Second), 2);
        self.run_pass(questions, VariantSlot::Second, &mut run).await;

        run.finish();
        run
    }

    async fn run_pass(
        &self,
        questions: &[Question],
        slot: VariantSlot,
        run: &mut EvaluationRun,
    ) {
        let total = questions.len();
        for (i, question) in questions.iter().enumerate() {
            eprintln!("  [{}/{}] asking {}...", i + 1, total, question.id);

            let mut result = self.client.ask(question).await;
            if let Some(text) = result.response_text.clone() {
                result.links = Some(self.links.validate(&text).await);
            } else if let Some(error) = result.error.as_deref() {
                eprintln!("  [{}/{}] {} failed: {}", i + 1, total, question.id, error);
            }
            run.records[i].set(slot, result);

            if i + 1 < total {
                pause_secs(self.pacing.delay_questions).await;
            }
        }
    }

    fn announce_pass(&self, variant: &PromptVariant, pass_no: u8) {
        info!(variant = %variant.name, pass = pass_no, "starting pass");
        eprintln!("\nPass {}: {}", pass_no, variant.name);
        if !variant.description.is_empty() {
            eprintln!("  {}", variant.description);
        }
    }

    async fn prompt_switch_checkpoint(&self, next: &PromptVariant) {
        eprintln!("\n{}", "=".repeat(72));
        eprintln!("PROMPT CHANGE REQUIRED: {}", next.name);
        if !next.description.is_empty() {
            eprintln!("  {}", next.description);
        }
        eprintln!(
            "  Switch the active prompt on the remote system now; pass 2 starts in {}s.",
            self.pacing.delay_prompts
        );
        eprintln!("{}", "=".repeat(72));
        pause_secs(self.pacing.delay_prompts).await;
    }
}

async fn pause_secs(secs: f64) {
    // from_secs_f64 panics on non-finite input.
    if secs.is_finite() && secs > 0.0 {
        sleep(Duration::from_secs_f64(secs)).await;
    }
}
