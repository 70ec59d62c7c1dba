use std::path::PathBuf;
use std::sync::Arc;

use promptpair_core::client::HttpAnswerClient;
use promptpair_core::config::load_questions;
use promptpair_core::engine::{Pacing, RunMeta, Runner};
use promptpair_core::links::HttpLinkValidator;
use promptpair_core::model::PromptVariant;
use promptpair_core::report;

use super::super::args::RunArgs;
use crate::exit_codes::{EXIT_CONFIG_ERROR, EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

pub(crate) async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let questions = match load_questions(&args.questions) {
        Ok(qs) => qs,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    let client = match HttpAnswerClient::new(&args.endpoint, &args.auth) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    eprintln!(
        "Evaluating {} questions against {} (pacing: {}s between questions, {}s between passes)",
        questions.len(),
        args.endpoint,
        args.delay_questions,
        args.delay_prompts
    );

    if let Err(e) = client.check_connection().await {
        eprintln!("endpoint check failed: {}", e);
        return Ok(EXIT_RUNTIME_ERROR);
    }

    let runner = Runner {
        client: Arc::new(client),
        links: Arc::new(HttpLinkValidator::new()?),
        pacing: Pacing {
            delay_questions: args.delay_questions,
            delay_prompts: args.delay_prompts,
        },
    };

    let variants = [
        PromptVariant {
            name: args.prompt1_name,
            description: args.prompt1_desc,
        },
        PromptVariant {
            name: args.prompt2_name,
            description: args.prompt2_desc,
        },
    ];

    let meta = RunMeta {
        name: args.name,
        description: args.description,
    };

    let evaluation = runner.run(meta, &questions, variants).await;

    let out = args
        .output
        .unwrap_or_else(|| default_output_path(&evaluation.name, &evaluation.started_at));
    report::json::write_run(&evaluation, &out)?;
    report::console::print_summary(&evaluation);
    eprintln!("Run artifact written to {}", out.display());

    Ok(EXIT_SUCCESS)
}

fn default_output_path(name: &str, started_at: &chrono::DateTime<chrono::Utc>) -> PathBuf {
    let safe_name: String = name
        .chars()
        .map(|c| if c == ' ' || c == '/' { '_' } else { c })
        .collect();
    PathBuf::from(format!(
        "{}_{}.json",
        safe_name,
        started_at.format("%Y%m%d_%H%M%S")
    ))
}
