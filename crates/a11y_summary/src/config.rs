//! Environment-driven configuration for the completion and comment clients.

use std::fmt;

use crate::error::{SummaryError, SummaryResult};

/// Credential for the completion API.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Optional model override.
pub const MODEL_VAR: &str = "A11Y_DIGEST_MODEL";
/// Optional API root override (OpenAI-compatible gateways).
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 600;

pub const GITHUB_TOKEN_VAR: &str = "GH_TOKEN";
pub const GITHUB_REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const PR_NUMBER_VAR: &str = "PR_NUMBER";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Completion client configuration.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build from process environment variables.
    ///
    /// Reads:
    /// 1. OPENAI_API_KEY (required)
    /// 2. A11Y_DIGEST_MODEL
    /// 3. OPENAI_BASE_URL
    pub fn from_env() -> SummaryResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> SummaryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(lookup(API_KEY_VAR)).ok_or_else(|| {
            SummaryError::not_configured(format!(
                "{} environment variable is not set.",
                API_KEY_VAR
            ))
        })?;

        let mut config = Self::new(api_key);
        if let Some(model) = non_empty(lookup(MODEL_VAR)) {
            config = config.with_model(model);
        }
        if let Some(base_url) = non_empty(lookup(BASE_URL_VAR)) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    /// Chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Target pull request for the summary comment.
#[derive(Clone)]
pub struct CommentConfig {
    pub owner: String,
    pub repo: String,
    pub pr_number: u64,
    pub token: String,
    pub api_base: String,
}

impl CommentConfig {
    /// Validate raw values. Checked in order: PR number, repository, token.
    pub fn new(
        repository: Option<&str>,
        pr_number: Option<&str>,
        token: Option<&str>,
    ) -> SummaryResult<Self> {
        let pr_number = pr_number
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                SummaryError::not_configured(format!(
                    "{} environment variable is not set.",
                    PR_NUMBER_VAR
                ))
            })?;
        let pr_number: u64 = pr_number.parse().map_err(|_| {
            SummaryError::not_configured(format!("Invalid pull request number: {}", pr_number))
        })?;

        let (owner, repo) = repository
            .and_then(|r| r.split_once('/'))
            .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
            .ok_or_else(|| {
                SummaryError::not_configured(format!(
                    "{} environment variable is not set or invalid.",
                    GITHUB_REPOSITORY_VAR
                ))
            })?;

        let token = token.filter(|t| !t.is_empty()).ok_or_else(|| {
            SummaryError::not_configured(format!(
                "{} environment variable is not set.",
                GITHUB_TOKEN_VAR
            ))
        })?;

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            pr_number,
            token: token.to_string(),
            api_base: DEFAULT_GITHUB_API_URL.to_string(),
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Issue comments endpoint for the pull request.
    pub fn comments_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.pr_number
        )
    }
}

impl fmt::Debug for CommentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentConfig")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("pr_number", &self.pr_number)
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
