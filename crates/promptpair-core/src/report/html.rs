//! Question-by-question comparison dashboard: a self-contained HTML page
//! with expandable side-by-side panels for the two prompt variants.

use std::path::Path;

use crate::model::{ComparisonRecord, EvaluationRun, QuestionResult, VariantSlot};

pub fn write_html(run: &EvaluationRun, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, render_html(run))?;
    Ok(())
}

/// Pure transform; rendering the same run twice is byte-identical.
pub fn render_html(run: &EvaluationRun) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!(
        "<title>Question Comparison - {}</title>\n",
        escape(&run.name)
    ));
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    render_header(&mut html, run);

    html.push_str("<div class=\"question-list\">\n");
    for record in &run.records {
        render_record(&mut html, run, record);
    }
    html.push_str("</div>\n</div>\n<script>\n");
    html.push_str(SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");

    html
}

fn render_header(html: &mut String, run: &EvaluationRun) {
    let error_records = run
        .records
        .iter()
        .filter(|r| {
            r.first.as_ref().is_none_or(QuestionResult::is_error)
                || r.second.as_ref().is_none_or(QuestionResult::is_error)
        })
        .count();

    html.push_str("<div class=\"header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&run.name)));
    html.push_str(&format!("<p>{}</p>\n", escape(&run.description)));
    html.push_str("<div class=\"summary-stats\">\n");
    stat_card(html, &run.records.len().to_string(), "Total Questions");
    stat_card(html, "2", "Prompt Variants");
    stat_card(html, &error_records.to_string(), "Questions With Errors");
    stat_card(
        html,
        &run.started_at.format("%Y-%m-%d").to_string(),
        "Run Date",
    );
    html.push_str("</div>\n</div>\n");
}

fn stat_card(html: &mut String, number: &str, label: &str) {
    html.push_str(&format!(
        "<div class=\"stat-card\"><div class=\"stat-number\">{}</div><div class=\"stat-label\">{}</div></div>\n",
        escape(number),
        escape(label)
    ));
}

fn render_record(html: &mut String, run: &EvaluationRun, record: &ComparisonRecord) {
    let id = escape(&record.question.id);
    html.push_str("<div class=\"question-item\">\n");
    html.push_str(&format!(
        "<div class=\"question-header\" onclick=\"toggleQuestion('{}')\">\n",
        id
    ));
    html.push_str("<div class=\"question-info\">\n");
    html.push_str(&format!("<div class=\"question-id\">{}</div>\n", id));
    html.push_str(&format!(
        "<div class=\"question-text\">{}</div>\n",
        escape(&record.question.text)
    ));
    html.push_str(&format!(
        "<div class=\"question-meta\"><span>Category: {}</span><span>Complexity: {}</span></div>\n",
        escape(&record.question.category),
        escape(&record.question.complexity)
    ));
    html.push_str("</div>\n");
    html.push_str(&format!(
        "<div class=\"expand-icon\" id=\"icon-{}\">&#9660;</div>\n</div>\n",
        id
    ));
    html.push_str(&format!(
        "<div class=\"question-content\" id=\"content-{}\">\n<div class=\"responses-container\">\n",
        id
    ));

    for (slot, panel) in [(VariantSlot::First, "prompt-a"), (VariantSlot::Second, "prompt-b")] {
        render_panel(html, run, record, slot, panel);
    }

    html.push_str("</div>\n</div>\n</div>\n");
}

fn render_panel(
    html: &mut String,
    run: &EvaluationRun,
    record: &ComparisonRecord,
    slot: VariantSlot,
    panel_class: &str,
) {
    html.push_str(&format!("<div class=\"response-panel {}\">\n", panel_class));
    html.push_str("<div class=\"response-header\">\n");
    html.push_str(&format!(
        "<div class=\"prompt-name {}\">{}</div>\n",
        panel_class,
        escape(&run.variant(slot).name)
    ));

    match record.get(slot) {
        Some(result) if !result.is_error() => {
            let links = result.links.as_ref();
            let found = links.map_or(0, |l| l.urls.len());
            let reachable = links.map_or(0, |l| l.reachable_count());
            html.push_str(&format!(
                "<div class=\"response-stats\"><span>{:.2}s</span><span>{} links</span><span>{} reachable</span></div>\n</div>\n",
                result.latency_seconds, found, reachable
            ));
            html.push_str(&format!(
                "<div class=\"response-text\">{}</div>\n",
                escape(result.response_text.as_deref().unwrap_or_default())
            ));
        }
        Some(result) => {
            html.push_str(&format!(
                "<div class=\"response-stats\"><span>{:.2}s</span></div>\n</div>\n",
                result.latency_seconds
            ));
            html.push_str(&format!(
                "<div class=\"response-text no-response\">ERROR: {}</div>\n",
                escape(result.error.as_deref().unwrap_or_default())
            ));
        }
        None => {
            html.push_str("</div>\n");
            html.push_str(
                "<div class=\"response-text no-response\">No result recorded</div>\n",
            );
        }
    }

    html.push_str("</div>\n");
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLE: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f8fafc; color: #1a202c; line-height: 1.6; }
.container { max-width: 1400px; margin: 0 auto; padding: 2rem; }
.header { background: white; padding: 2rem; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); margin-bottom: 2rem; text-align: center; }
.header h1 { color: #2d3748; font-size: 2.5rem; margin-bottom: 0.5rem; }
.header p { color: #718096; font-size: 1.1rem; }
.summary-stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; margin: 1.5rem 0; }
.stat-card { background: #f7fafc; padding: 1rem; border-radius: 8px; text-align: center; border-left: 4px solid #4299e1; }
.stat-number { font-size: 2rem; font-weight: bold; color: #2d3748; }
.stat-label { color: #718096; font-size: 0.9rem; }
.question-item { background: white; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); margin-bottom: 1rem; overflow: hidden; }
.question-header { padding: 1.5rem; cursor: pointer; border-left: 4px solid #4299e1; display: flex; justify-content: space-between; align-items: center; background: #f8fafc; }
.question-header:hover { background: #f1f5f9; }
.question-id { font-weight: bold; color: #4299e1; font-size: 0.9rem; }
.question-text { color: #2d3748; font-size: 1.1rem; }
.question-meta { display: flex; gap: 1rem; font-size: 0.8rem; color: #718096; }
.expand-icon { color: #718096; font-size: 1.2rem; }
.question-content { display: none; }
.question-content.show { display: block; }
.responses-container { display: grid; grid-template-columns: 1fr 1fr; }
.response-panel { padding: 1.5rem; border-right: 1px solid #e2e8f0; }
.response-panel.prompt-a { background: #f0f9ff; border-top: 3px solid #4299e1; }
.response-panel.prompt-b { background: #f0fff4; border-top: 3px solid #48bb78; }
.response-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; padding-bottom: 0.5rem; border-bottom: 1px solid #e2e8f0; }
.prompt-name { font-weight: bold; font-size: 1.1rem; }
.prompt-name.prompt-a { color: #2b6cb0; }
.prompt-name.prompt-b { color: #2f855a; }
.response-stats { display: flex; gap: 1rem; font-size: 0.85rem; color: #718096; }
.response-text { background: white; padding: 1rem; border-radius: 8px; border: 1px solid #e2e8f0; white-space: pre-wrap; font-size: 0.95rem; max-height: 400px; overflow-y: auto; }
.no-response { color: #e53e3e; font-style: italic; background: #fed7d7; border-color: #feb2b2; }
"#;

const SCRIPT: &str = r#"function toggleQuestion(questionId) {
    const content = document.getElementById('content-' + questionId);
    const icon = document.getElementById('icon-' + questionId);
    if (content.classList.contains('show')) {
        content.classList.remove('show');
        icon.innerHTML = '&#9660;';
    } else {
        content.classList.add('show');
        icon.innerHTML = '&#9650;';
    }
}
"#;
