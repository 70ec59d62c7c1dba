//! Spreadsheet export: one CSV row per question with the two variants'
//! answers side by side, RFC 4180 quoting.

use std::path::Path;

use crate::model::{EvaluationRun, QuestionResult, VariantSlot};

pub fn write_sheet(run: &EvaluationRun, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, render_sheet(run))?;
    Ok(())
}

/// Pure transform; rendering the same run twice is byte-identical.
pub fn render_sheet(run: &EvaluationRun) -> String {
    let mut csv = String::new();

    push_row(
        &mut csv,
        &[
            "Question ID",
            "Question",
            "Category",
            "Complexity",
            &format!("Answer A ({})", run.variants[0].name),
            &format!("Answer B ({})", run.variants[1].name),
            "Latency A (s)",
            "Latency B (s)",
            "Links A",
            "Links B",
        ],
    );

    for record in &run.records {
        let first = record.get(VariantSlot::First);
        let second = record.get(VariantSlot::Second);
        push_row(
            &mut csv,
            &[
                &record.question.id,
                &record.question.text,
                &record.question.category,
                &record.question.complexity,
                &answer_cell(first),
                &answer_cell(second),
                &latency_cell(first),
                &latency_cell(second),
                &links_cell(first),
                &links_cell(second),
            ],
        );
    }

    csv
}

fn answer_cell(result: Option<&QuestionResult>) -> String {
    match result {
        Some(r) => match (&r.response_text, &r.error) {
            (Some(text), _) => text.clone(),
            (None, Some(error)) => format!("ERROR: {}", error),
            (None, None) => String::new(),
        },
        None => "NO RESULT".into(),
    }
}

fn latency_cell(result: Option<&QuestionResult>) -> String {
    result.map_or(String::new(), |r| format!("{:.2}", r.latency_seconds))
}

fn links_cell(result: Option<&QuestionResult>) -> String {
    let Some(links) = result.and_then(|r| r.links.as_ref()) else {
        return String::new();
    };
    links
        .urls
        .iter()
        .map(|u| {
            if u.reachable {
                u.url.clone()
            } else {
                format!("{} [unreachable]", u.url)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_row(csv: &mut String, fields: &[&str]) {
    let row = fields
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(",");
    csv.push_str(&row);
    csv.push_str("\r\n");
}

fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
