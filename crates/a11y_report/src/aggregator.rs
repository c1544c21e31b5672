//! Batch aggregation across report files.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::ReportResult;
use crate::extractor::{AuditExtractor, Extraction};
use crate::loader::{FileOutcome, LoadedFile, ReportLoader};
use crate::models::{Batch, ReportSummary};

/// Counters for one aggregation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregationStats {
    pub files_seen: usize,
    pub summarized: usize,
    pub skipped: usize,
}

/// Appends extracted summaries to a batch in load order.
#[derive(Debug, Default)]
pub struct ReportAggregator {
    batch: Batch,
    stats: AggregationStats,
}

impl ReportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one loaded file.
    pub fn add(&mut self, file: &LoadedFile) {
        self.stats.files_seen += 1;
        match &file.outcome {
            FileOutcome::Parsed(report) => {
                match AuditExtractor::extract(report, &file.file_name()) {
                    Extraction::Summary(summary) => self.push(summary),
                    Extraction::Skipped(_) => self.stats.skipped += 1,
                }
            }
            FileOutcome::Skipped(_) => self.stats.skipped += 1,
        }
    }

    fn push(&mut self, summary: ReportSummary) {
        self.stats.summarized += 1;
        self.batch.push(summary);
    }

    pub fn stats(&self) -> AggregationStats {
        self.stats
    }

    /// Finish aggregation, returning the batch and counters.
    pub fn finish(self) -> (Batch, AggregationStats) {
        info!(
            "Summarized {} of {} report file(s) ({} skipped)",
            self.stats.summarized, self.stats.files_seen, self.stats.skipped
        );
        (self.batch, self.stats)
    }

    /// Aggregate already-loaded files.
    pub fn aggregate(files: &[LoadedFile]) -> (Batch, AggregationStats) {
        let mut aggregator = Self::new();
        for file in files {
            aggregator.add(file);
        }
        aggregator.finish()
    }

    /// Load a directory and aggregate every report in it.
    pub fn from_directory(path: impl AsRef<Path>) -> ReportResult<(Batch, AggregationStats)> {
        let files = ReportLoader::new(path.as_ref()).load_all()?;
        Ok(Self::aggregate(&files))
    }
}
