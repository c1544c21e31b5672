//! # a11y_summary
//!
//! Completion-backed accessibility summaries for a11y-digest.
//!
//! This crate provides:
//! - **Completion Client**: narrow [`CompletionClient`] interface with an
//!   OpenAI-compatible HTTP implementation
//! - **Summarizer**: renders a report batch into a prompt and returns the
//!   trimmed generated text
//! - **Pipeline**: directory in, summary (or "nothing to summarize") out
//! - **Comment Poster**: narrow [`CommentPoster`] interface with a GitHub
//!   pull request implementation
//! - **Mocks**: in-memory collaborators for tests
//!
//! ## Example
//!
//! ```rust,no_run
//! use a11y_summary::{OpenAiClient, SummaryPipeline};
//!
//! # async fn run() -> a11y_summary::SummaryResult<()> {
//! let pipeline = SummaryPipeline::new(OpenAiClient::from_env()?);
//! let outcome = pipeline.run("./lhci-reports").await?;
//! println!("{}", outcome.output());
//! # Ok(())
//! # }
//! ```

pub mod comment;
pub mod completion;
pub mod config;
pub mod error;
pub mod mock;
pub mod pipeline;
pub mod summarizer;

pub use comment::{comment_body, publish_summary, CommentPoster, GitHubCommentPoster, PostOutcome, COMMENT_HEADING};
pub use completion::{parse_completion, ChatMessage, ChatRequest, CompletionClient, OpenAiClient};
pub use config::{CommentConfig, CompletionConfig};
pub use error::{SummaryError, SummaryResult};
pub use mock::{MockCommentPoster, MockCompletion};
pub use pipeline::{PipelineOutcome, SummaryPipeline, NOTHING_TO_SUMMARIZE};
pub use summarizer::Summarizer;
