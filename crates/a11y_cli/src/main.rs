//! a11y-digest CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (including "nothing to summarize")
//! - 1: Any failure (bad arguments, missing credentials, unreadable
//!   directory, completion or comment API errors)

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const FAILURE: u8 = 1;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    init_logging(cli.log_level());

    let result = match cli.command {
        Commands::Summarize(args) => commands::summarize::execute(args).await,
        Commands::Prompt(args) => commands::prompt::execute(args).await,
        Commands::PostComment(args) => commands::post_comment::execute(args).await,
    };

    if let Err(e) = &result {
        eprintln!("❌ Error: {:#}", e);
    }
    ExitCode::from(result_exit_code(&result))
}

/// Help and version go to stdout with status 0; usage errors go to stderr with 1.
fn usage_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        ExitCodes::FAILURE
    } else {
        ExitCodes::SUCCESS
    }
}

fn result_exit_code(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => ExitCodes::SUCCESS,
        Err(_) => ExitCodes::FAILURE,
    }
}

/// Logs go to stderr; stdout is reserved for the summary.
fn init_logging(level: &str) {
    let mut filter = EnvFilter::from_default_env();
    for directive in [format!("a11y={}", level), "warn".to_string()] {
        if let Ok(directive) = directive.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_exit_code(args: &[&str]) -> u8 {
        match Cli::try_parse_from(args.iter().copied()) {
            Ok(_) => ExitCodes::SUCCESS,
            Err(e) => usage_exit_code(&e),
        }
    }

    #[test]
    fn test_usage_exit_codes() {
        assert_eq!(parse_exit_code(&["a11y-digest", "summarize"]), ExitCodes::FAILURE);
        assert_eq!(
            parse_exit_code(&["a11y-digest", "prompt", "r", "--format", "xml"]),
            ExitCodes::FAILURE
        );
        assert_eq!(parse_exit_code(&["a11y-digest", "--help"]), ExitCodes::SUCCESS);
        assert_eq!(parse_exit_code(&["a11y-digest", "--version"]), ExitCodes::SUCCESS);
        assert_eq!(
            parse_exit_code(&["a11y-digest", "summarize", "./reports"]),
            ExitCodes::SUCCESS
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_exits_with_failure() {
        std::env::remove_var("OPENAI_API_KEY");

        let args = commands::summarize::SummarizeArgs {
            reports_dir: "./does-not-exist".into(),
            model: None,
        };
        let result = commands::summarize::execute(args).await;

        assert_eq!(result_exit_code(&result), ExitCodes::FAILURE);
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("OPENAI_API_KEY"), "unexpected error: {}", message);
    }
}
