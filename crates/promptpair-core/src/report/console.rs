//! End-of-run summary on stderr.

use crate::model::{EvaluationRun, QuestionResult, VariantSlot};

struct PassStats {
    ok: usize,
    failed: usize,
    missing: usize,
    total_latency: f64,
    links_found: usize,
    links_reachable: usize,
}

fn collect(run: &EvaluationRun, slot: VariantSlot) -> PassStats {
    let mut stats = PassStats {
        ok: 0,
        failed: 0,
        missing: 0,
        total_latency: 0.0,
        links_found: 0,
        links_reachable: 0,
    };
    for record in &run.records {
        match record.get(slot) {
            Some(result) => {
                if result.is_error() {
                    stats.failed += 1;
                } else {
                    stats.ok += 1;
                }
                stats.total_latency += result.latency_seconds;
                if let Some(links) = &result.links {
                    stats.links_found += links.urls.len();
                    stats.links_reachable += links.reachable_count();
                }
            }
            None => stats.missing += 1,
        }
    }
    stats
}

pub fn print_summary(run: &EvaluationRun) {
    eprintln!("\nSummary: {}", run.name);
    for slot in [VariantSlot::First, VariantSlot::Second] {
        let variant = run.variant(slot);
        let stats = collect(run, slot);
        let answered = stats.ok + stats.failed;
        let avg_latency = if answered > 0 {
            stats.total_latency / answered as f64
        } else {
            0.0
        };
        eprintln!(
            "  {}: ok={} failed={} missing={} avg_latency={:.2}s links={} reachable={}",
            variant.name,
            stats.ok,
            stats.failed,
            stats.missing,
            avg_latency,
            stats.links_found,
            stats.links_reachable
        );
    }
    let with_errors = run
        .records
        .iter()
        .filter(|r| {
            r.first.as_ref().is_none_or(QuestionResult::is_error)
                || r.second.as_ref().is_none_or(QuestionResult::is_error)
        })
        .count();
    eprintln!(
        "  {} of {} questions carry an error in at least one pass",
        with_errors,
        run.records.len()
    );
}
