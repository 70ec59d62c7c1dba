use std::path::Path;

use crate::model::EvaluationRun;

pub fn write_run(run: &EvaluationRun, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(run)?)?;
    Ok(())
}

/// Load a run artifact for rendering. Errors here are fatal to the renderer
/// invocation only, never to anything else.
pub fn load_run(path: &Path) -> anyhow::Result<EvaluationRun> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read run artifact {}: {}", path.display(), e))?;
    serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid run artifact {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PromptVariant, Question, QuestionResult, VariantSlot};

    fn sample_run() -> EvaluationRun {
        let questions = vec![Question {
            id: "Q001".into(),
            text: "Where is the mailroom?".into(),
            category: "general".into(),
            complexity: "basic".into(),
        }];
        let mut run = EvaluationRun::open(
            "roundtrip",
            "",
            [
                PromptVariant {
                    name: "A".into(),
                    description: String::new(),
                },
                PromptVariant {
                    name: "B".into(),
                    description: String::new(),
                },
            ],
            &questions,
        );
        run.records[0].set(
            VariantSlot::First,
            QuestionResult::success("Q001", "Ground floor.", 0.8),
        );
        run.records[0].set(
            VariantSlot::Second,
            QuestionResult::failure("Q001", "HTTP 500: boom", 0.2),
        );
        run.finish();
        run
    }

    #[test]
    fn write_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        let run = sample_run();
        write_run(&run, &path).unwrap();
        let loaded = load_run(&path).unwrap();
        assert_eq!(loaded, run);
    }

    #[test]
    fn load_rejects_artifact_with_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"name": "incomplete"}"#).unwrap();
        let err = load_run(&path).unwrap_err();
        assert!(err.to_string().contains("invalid run artifact"));
    }

    #[test]
    fn load_rejects_missing_file() {
        let err = load_run(Path::new("/nonexistent/run.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read run artifact"));
    }
}
