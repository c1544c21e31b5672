//! Post-comment command - Post a summary as a pull request comment.
//!
//! Values default to the environment used by CI: SUMMARY_CONTENT,
//! PR_NUMBER, GITHUB_REPOSITORY and GH_TOKEN.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use a11y_summary::config::DEFAULT_GITHUB_API_URL;
use a11y_summary::{publish_summary, CommentConfig, GitHubCommentPoster, PostOutcome};

#[derive(Args)]
pub struct PostCommentArgs {
    /// Summary text to post
    #[arg(long, env = "SUMMARY_CONTENT")]
    pub summary: Option<String>,

    /// Pull request number
    #[arg(long, env = "PR_NUMBER")]
    pub pr: Option<String>,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: Option<String>,

    /// GitHub token
    #[arg(long, env = "GH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API root
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    pub api_url: String,
}

pub async fn execute(args: PostCommentArgs) -> Result<()> {
    let PostCommentArgs {
        summary,
        pr,
        repo,
        token,
        api_url,
    } = args;
    let summary = summary.unwrap_or_default();

    let outcome = publish_summary(&summary, move || {
        let config = CommentConfig::new(repo.as_deref(), pr.as_deref(), token.as_deref())?
            .with_api_base(api_url);
        info!(
            "Posting accessibility summary to {}/{}#{}",
            config.owner, config.repo, config.pr_number
        );
        Ok(GitHubCommentPoster::new(config))
    })
    .await
    .context("Failed to post accessibility summary")?;

    match outcome {
        PostOutcome::Posted => info!("Accessibility summary posted"),
        PostOutcome::SkippedEmpty => {}
    }

    Ok(())
}
