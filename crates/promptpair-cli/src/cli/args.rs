use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "promptpair",
    version,
    about = "A/B evaluation harness for prompt variants: paired passes over a question set against an HTTP endpoint, with link validation and comparison reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run both evaluation passes and write the run artifact (JSON)
    Run(RunArgs),
    /// Render the HTML comparison dashboard from a run artifact
    Dashboard(DashboardArgs),
    /// Render the spreadsheet (CSV) from a run artifact
    Sheet(SheetArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// API endpoint URL
    #[arg(long)]
    pub endpoint: String,

    /// Authorization header value (sent verbatim)
    #[arg(long, env = "PROMPTPAIR_AUTH")]
    pub auth: String,

    /// Question set: JSON array with required id/question fields
    #[arg(long)]
    pub questions: PathBuf,

    /// Evaluation run name
    #[arg(long, default_value = "Multi-Prompt Evaluation")]
    pub name: String,

    /// Run description
    #[arg(long, default_value = "Comparative evaluation of two prompt variants")]
    pub description: String,

    /// Name for the first prompt variant
    #[arg(long, default_value = "Baseline Prompt (Current)")]
    pub prompt1_name: String,

    /// Description for the first prompt variant
    #[arg(long, default_value = "Current production prompt")]
    pub prompt1_desc: String,

    /// Name for the second prompt variant
    #[arg(long, default_value = "Enhanced Prompt (Test)")]
    pub prompt2_name: String,

    /// Description for the second prompt variant
    #[arg(long, default_value = "Modified prompt with improvements")]
    pub prompt2_desc: String,

    /// Delay between questions (seconds)
    #[arg(long, default_value_t = 2.0, value_parser = parse_delay)]
    pub delay_questions: f64,

    /// Delay between the two passes, for manual prompt switching (seconds)
    #[arg(long, default_value_t = 5.0, value_parser = parse_delay)]
    pub delay_prompts: f64,

    /// Output path (default: <name>_<timestamp>.json)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

fn parse_delay(raw: &str) -> Result<f64, String> {
    let secs: f64 = raw.parse().map_err(|e| format!("{}", e))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err("must be a finite, non-negative number of seconds".into());
    }
    Ok(secs)
}

#[derive(clap::Args, Debug, Clone)]
pub struct DashboardArgs {
    /// Run artifact (JSON) produced by `promptpair run`
    #[arg(long)]
    pub input: PathBuf,

    /// Output HTML path (default: input path with .html extension)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SheetArgs {
    /// Run artifact (JSON) produced by `promptpair run`
    #[arg(long)]
    pub input: PathBuf,

    /// Output CSV path (default: input path with .csv extension)
    #[arg(long)]
    pub output: Option<PathBuf>,
}
