//! End-to-end summary pipeline: load, extract, aggregate, summarize.

use std::path::Path;

use a11y_report::{AggregationStats, ReportAggregator};
use tracing::info;

use crate::completion::CompletionClient;
use crate::error::SummaryResult;
use crate::summarizer::Summarizer;

/// Message printed when no report produced a summary.
pub const NOTHING_TO_SUMMARIZE: &str = "No valid Lighthouse JSON reports found to summarize.";

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// No valid reports; the completion service was not called.
    NothingToSummarize { stats: AggregationStats },
    /// Generated summary text.
    Summary { text: String, stats: AggregationStats },
}

impl PipelineOutcome {
    /// Text to write to standard output.
    pub fn output(&self) -> &str {
        match self {
            Self::NothingToSummarize { .. } => NOTHING_TO_SUMMARIZE,
            Self::Summary { text, .. } => text,
        }
    }

    pub fn stats(&self) -> AggregationStats {
        match self {
            Self::NothingToSummarize { stats } | Self::Summary { stats, .. } => *stats,
        }
    }
}

/// Summary pipeline over a reports directory.
pub struct SummaryPipeline<C> {
    summarizer: Summarizer<C>,
}

impl<C: CompletionClient> SummaryPipeline<C> {
    pub fn new(client: C) -> Self {
        Self {
            summarizer: Summarizer::new(client),
        }
    }

    /// Run the pipeline for `reports_dir`.
    ///
    /// Fails if the directory cannot be listed or the completion call fails.
    pub async fn run(&self, reports_dir: impl AsRef<Path>) -> SummaryResult<PipelineOutcome> {
        let (batch, stats) = ReportAggregator::from_directory(reports_dir)?;

        if batch.is_empty() {
            info!("No valid reports to summarize; skipping completion request");
            return Ok(PipelineOutcome::NothingToSummarize { stats });
        }

        let text = self.summarizer.summarize(&batch).await?;
        Ok(PipelineOutcome::Summary { text, stats })
    }
}
