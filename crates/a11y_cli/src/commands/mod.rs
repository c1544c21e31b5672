//! CLI command definitions.
//!
//! This module defines the command structure for the a11y-digest CLI.
//! Each subcommand maps to one step of the accessibility review workflow.

use clap::{Parser, Subcommand};

pub mod post_comment;
pub mod prompt;
pub mod summarize;

/// a11y-digest - Lighthouse accessibility report summaries
#[derive(Parser)]
#[command(name = "a11y-digest")]
#[command(version, about = "a11y-digest - Summarize Lighthouse accessibility reports for pull requests")]
#[command(long_about = r#"
a11y-digest reads a directory of Lighthouse JSON reports, extracts the
accessibility score and failing checks from each, and asks a completion
service for a concise review summary.

WORKFLOWS:
  summarize     → Summarize a reports directory (requires OPENAI_API_KEY)
  prompt        → Print the rendered prompt or extracted findings, no API call
  post-comment  → Post a summary as a pull request comment

ENVIRONMENT:
  OPENAI_API_KEY     Completion API credential
  A11Y_DIGEST_MODEL  Model override (default: gpt-3.5-turbo)
  OPENAI_BASE_URL    API root override (default: https://api.openai.com/v1)
  RUST_LOG           Log filter (logs are written to stderr)

EXIT CODES:
  0 - Success (including when there is nothing to summarize)
  1 - Error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level for this crate family.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a directory of Lighthouse reports
    Summarize(summarize::SummarizeArgs),

    /// Print the prompt that would be sent, without calling the API
    Prompt(prompt::PromptArgs),

    /// Post a summary as a pull request comment
    #[command(name = "post-comment")]
    PostComment(post_comment::PostCommentArgs),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_parse_summarize() {
        let cli = Cli::try_parse_from(["a11y-digest", "summarize", "./reports"]).unwrap();
        match &cli.command {
            Commands::Summarize(args) => assert_eq!(args.reports_dir, PathBuf::from("./reports")),
            _ => panic!("expected summarize"),
        }
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_missing_reports_dir_is_usage_error() {
        let err = Cli::try_parse_from(["a11y-digest", "summarize"])
            .err()
            .unwrap();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_verbose_and_quiet() {
        let cli = Cli::try_parse_from(["a11y-digest", "-v", "prompt", "r"]).unwrap();
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::try_parse_from(["a11y-digest", "prompt", "r", "--quiet"]).unwrap();
        assert_eq!(cli.log_level(), "error");

        assert!(Cli::try_parse_from(["a11y-digest", "-v", "-q", "prompt", "r"]).is_err());
    }

    #[test]
    fn test_prompt_format_is_validated() {
        assert!(Cli::try_parse_from(["a11y-digest", "prompt", "r", "--format", "json"]).is_ok());
        assert!(Cli::try_parse_from(["a11y-digest", "prompt", "r", "--format", "xml"]).is_err());
    }
}
