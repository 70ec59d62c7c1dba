//! Full-pipeline test: a mocked endpoint drives a two-pass run, the artifact
//! round-trips through disk, and both renderers reflect the recorded outcome.

use std::sync::Arc;

use promptpair_core::client::HttpAnswerClient;
use promptpair_core::engine::{Pacing, RunMeta, Runner};
use promptpair_core::links::NoopLinkValidator;
use promptpair_core::model::{PromptVariant, Question, VariantSlot};
use promptpair_core::report::{html, json, sheet};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn questions() -> Vec<Question> {
    vec![
        Question {
            id: "Q001".into(),
            text: "What are the pool hours?".into(),
            category: "amenities".into(),
            complexity: "basic".into(),
        },
        Question {
            id: "Q002".into(),
            text: "How do I reset the thermostat?".into(),
            category: "maintenance".into(),
            complexity: "intermediate".into(),
        },
    ]
}

fn variants() -> [PromptVariant; 2] {
    [
        PromptVariant {
            name: "Baseline Prompt (Current)".into(),
            description: String::new(),
        },
        PromptVariant {
            name: "Enhanced Prompt (Test)".into(),
            description: String::new(),
        },
    ]
}

#[tokio::test]
async fn run_artifact_and_renderers_agree_end_to_end() {
    let server = MockServer::start().await;

    // Q002 fails on the endpoint in both passes; the body matcher keys off
    // the question text carried inside the double-encoded envelope.
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_string_contains("reset the thermostat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boiler room on fire"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_string_contains("pool hours"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "The pool is open 6am-10pm daily."
        })))
        .mount(&server)
        .await;

    let client = HttpAnswerClient::new(format!("{}/chat", server.uri()), "Bearer test-token")
        .expect("client");
    let runner = Runner {
        client: Arc::new(client),
        links: Arc::new(NoopLinkValidator),
        pacing: Pacing {
            delay_questions: 0.0,
            delay_prompts: 0.0,
        },
    };

    let qs = questions();
    let run = runner
        .run(
            RunMeta {
                name: "e2e run".into(),
                description: "pipeline smoke".into(),
            },
            &qs,
            variants(),
        )
        .await;

    assert_eq!(run.records.len(), 2);
    assert!(run.finished_at.is_some());
    for slot in [VariantSlot::First, VariantSlot::Second] {
        let q001 = run.records[0].get(slot).expect("Q001 slot filled");
        assert_eq!(
            q001.response_text.as_deref(),
            Some("The pool is open 6am-10pm daily.")
        );
        let q002 = run.records[1].get(slot).expect("Q002 slot filled");
        let err = q002.error.as_deref().expect("Q002 failed");
        assert!(err.contains("HTTP 500"), "got: {}", err);
        assert!(err.contains("boiler room on fire"), "got: {}", err);
    }

    // Artifact round-trips through disk unchanged.
    let dir = tempfile::tempdir().expect("temp dir");
    let artifact = dir.path().join("run.json");
    json::write_run(&run, &artifact).expect("write artifact");
    let reloaded = json::load_run(&artifact).expect("reload artifact");
    assert_eq!(reloaded.records.len(), run.records.len());
    assert_eq!(reloaded.records[1].question.id, "Q002");

    // Both renderers surface the success and the failure.
    let page = html::render_html(&reloaded);
    assert!(page.contains("The pool is open 6am-10pm daily."));
    assert!(page.contains("ERROR:"));
    assert!(page.contains("Baseline Prompt (Current)"));

    let csv = sheet::render_sheet(&reloaded);
    assert!(csv.contains("The pool is open 6am-10pm daily."));
    assert!(csv.contains("ERROR:"));
    assert!(csv.starts_with("Question ID,"));
}
