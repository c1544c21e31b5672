//! Prompt command - Render the completion prompt without calling the API.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use a11y_report::{PromptBuilder, ReportAggregator};
use a11y_summary::NOTHING_TO_SUMMARIZE;

#[derive(Args)]
pub struct PromptArgs {
    /// Directory containing Lighthouse JSON reports
    pub reports_dir: PathBuf,

    /// Output format (text, json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,
}

pub async fn execute(args: PromptArgs) -> Result<()> {
    let (batch, stats) = ReportAggregator::from_directory(&args.reports_dir)
        .with_context(|| format!("Failed to load reports from {:?}", args.reports_dir))?;

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "reports": batch,
            "stats": stats,
        }))
        .context("Failed to serialize reports")?;
        println!("{}", json);
    } else if batch.is_empty() {
        println!("{}", NOTHING_TO_SUMMARIZE);
    } else {
        println!("{}", PromptBuilder::render(&batch));
    }

    Ok(())
}
