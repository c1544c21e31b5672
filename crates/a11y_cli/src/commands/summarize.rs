//! Summarize command - Summarize a directory of Lighthouse reports.
//!
//! Prints the generated summary to stdout, or a neutral message when no
//! report in the directory could be used.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use a11y_summary::{CompletionConfig, OpenAiClient, PipelineOutcome, SummaryPipeline};

#[derive(Args)]
pub struct SummarizeArgs {
    /// Directory containing Lighthouse JSON reports
    pub reports_dir: PathBuf,

    /// Completion model (overrides A11Y_DIGEST_MODEL)
    #[arg(long)]
    pub model: Option<String>,
}

pub async fn execute(args: SummarizeArgs) -> Result<()> {
    // Credentials are checked before any report is read
    let mut config = CompletionConfig::from_env()?;
    if let Some(model) = args.model {
        config = config.with_model(model);
    }

    info!(
        "Summarizing Lighthouse reports in {:?} with model {}",
        args.reports_dir, config.model
    );

    let pipeline = SummaryPipeline::new(OpenAiClient::new(config));
    let outcome = pipeline
        .run(&args.reports_dir)
        .await
        .context("Failed to summarize accessibility reports")?;

    if let PipelineOutcome::Summary { stats, .. } = &outcome {
        info!(
            "Generated summary from {} report(s), {} skipped",
            stats.summarized, stats.skipped
        );
    }

    println!("{}", outcome.output());
    Ok(())
}
