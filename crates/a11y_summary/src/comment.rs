//! Pull request comment posting.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use crate::config::CommentConfig;
use crate::error::{SummaryError, SummaryResult};

/// Heading placed above the summary in the posted comment.
pub const COMMENT_HEADING: &str = "## Automated Accessibility Summary";

const USER_AGENT: &str = concat!("a11y-digest/", env!("CARGO_PKG_VERSION"));

/// Comment-posting collaborator.
#[async_trait]
pub trait CommentPoster: Send + Sync {
    /// Post `body` as a comment.
    async fn post_comment(&self, body: &str) -> SummaryResult<()>;
}

/// What happened to a summary handed to [`publish_summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    Posted,
    SkippedEmpty,
}

/// Render the comment body for a summary.
pub fn comment_body(summary: &str) -> String {
    format!("{}\n\n{}", COMMENT_HEADING, summary)
}

/// Post `summary` unless it is blank.
///
/// `connect` builds the poster and runs only for a non-blank summary, so a
/// blank summary succeeds even when no pull request is configured.
pub async fn publish_summary<P, F>(summary: &str, connect: F) -> SummaryResult<PostOutcome>
where
    P: CommentPoster,
    F: FnOnce() -> SummaryResult<P>,
{
    if summary.trim().is_empty() {
        info!("Summary is empty or only whitespace. Skipping PR comment.");
        return Ok(PostOutcome::SkippedEmpty);
    }
    let poster = connect()?;
    poster.post_comment(&comment_body(summary)).await?;
    Ok(PostOutcome::Posted)
}

/// Posts issue comments through the GitHub REST API.
pub struct GitHubCommentPoster {
    config: CommentConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

impl GitHubCommentPoster {
    pub fn new(config: CommentConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &CommentConfig {
        &self.config
    }
}

#[async_trait]
impl CommentPoster for GitHubCommentPoster {
    async fn post_comment(&self, body: &str) -> SummaryResult<()> {
        let response = self
            .client
            .post(self.config.comments_url())
            .header("Authorization", format!("token {}", self.config.token))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json")
            .json(&CommentRequest { body })
            .send()
            .await
            .map_err(|e| SummaryError::CommentRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("GitHub API responded with {}", status);
            return Err(SummaryError::CommentRejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            "Successfully posted comment to PR #{}. Status: {}",
            self.config.pr_number,
            status.as_u16()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockCommentPoster;

    #[test]
    fn test_comment_body() {
        assert_eq!(
            comment_body("Two issues found."),
            "## Automated Accessibility Summary\n\nTwo issues found."
        );
    }

    #[tokio::test]
    async fn test_publish_skips_blank_summary() {
        let outcome = publish_summary("  \n", || -> SummaryResult<MockCommentPoster> {
            Err(SummaryError::not_configured("PR_NUMBER environment variable is not set."))
        })
        .await
        .unwrap();
        assert_eq!(outcome, PostOutcome::SkippedEmpty);
    }

    #[tokio::test]
    async fn test_publish_posts_with_heading() {
        let poster = MockCommentPoster::new();
        let outcome = publish_summary("Looks fine.", || Ok(poster.clone()))
            .await
            .unwrap();
        assert_eq!(outcome, PostOutcome::Posted);
        assert_eq!(
            poster.get_bodies(),
            vec!["## Automated Accessibility Summary\n\nLooks fine.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_publish_reports_missing_config() {
        let err = publish_summary("Looks fine.", || {
            CommentConfig::new(Some("acme/site"), None, Some("t")).map(GitHubCommentPoster::new)
        })
        .await
        .unwrap_err();
        assert!(matches!(err, SummaryError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn test_publish_propagates_rejection() {
        let poster = MockCommentPoster::new().simulate_failure(403, "Resource not accessible");
        let err = publish_summary("Looks fine.", || Ok(poster.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, SummaryError::CommentRejected { status: 403, .. }));
    }
}
