//! # a11y_report
//!
//! Loading and normalizing Lighthouse accessibility reports for a11y-digest.
//!
//! This crate provides:
//! - **Report Loader**: reads every `*.json` file in a directory, skipping
//!   unparseable files with a warning
//! - **Audit Extractor**: pulls the accessibility score and failing checks
//!   out of one report
//! - **Report Aggregator**: collects per-file summaries into an ordered [`Batch`]
//! - **Prompt Builder**: renders a batch into a deterministic completion prompt
//!
//! ## Example
//!
//! ```rust,no_run
//! use a11y_report::{PromptBuilder, ReportAggregator};
//!
//! let (batch, stats) = ReportAggregator::from_directory("./lhci-reports").unwrap();
//! if batch.is_empty() {
//!     println!("nothing to summarize ({} files skipped)", stats.skipped);
//! } else {
//!     println!("{}", PromptBuilder::render(&batch));
//! }
//! ```

pub mod aggregator;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod models;
pub mod prompt;

pub use aggregator::{AggregationStats, ReportAggregator};
pub use error::{ReportError, ReportResult};
pub use extractor::{AuditExtractor, Extraction};
pub use loader::{FileOutcome, LoadedFile, ReportLoader, REPORT_EXTENSION};
pub use models::*;
pub use prompt::{PromptBuilder, ASSESSMENT_CUE, PROMPT_HEADER};
