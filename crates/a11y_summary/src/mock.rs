//! Mock collaborators for testing.
//!
//! In-memory implementations of [`CompletionClient`] and [`CommentPoster`]
//! that capture every call and return predefined responses, so the
//! pipeline can be exercised without network access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::comment::CommentPoster;
use crate::completion::CompletionClient;
use crate::error::{SummaryError, SummaryResult};

/// Mock completion client.
#[derive(Clone, Default)]
pub struct MockCompletion {
    /// Responses returned in order, cycling when exhausted.
    responses: Arc<RwLock<Vec<String>>>,
    /// Index of next response to return.
    response_index: Arc<AtomicUsize>,
    /// Prompts received, in call order.
    prompts: Arc<RwLock<Vec<String>>>,
    /// Simulated API failure (status, message).
    failure: Arc<RwLock<Option<(u16, String)>>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for the next call.
    pub fn add_response(self, text: impl Into<String>) -> Self {
        self.responses.write().push(text.into());
        self
    }

    /// Fail every call with an API error.
    pub fn simulate_failure(self, status: u16, message: impl Into<String>) -> Self {
        *self.failure.write() = Some((status, message.into()));
        self
    }

    /// Get all prompts received.
    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.read().clone()
    }

    /// Get the number of calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.read().len()
    }

    fn next_response(&self) -> SummaryResult<String> {
        let responses = self.responses.read();
        if responses.is_empty() {
            return Err(SummaryError::EmptyCompletion);
        }
        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        Ok(responses[index % responses.len()].clone())
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, prompt: &str) -> SummaryResult<String> {
        self.prompts.write().push(prompt.to_string());
        if let Some((status, message)) = self.failure.read().clone() {
            return Err(SummaryError::api(status, message));
        }
        self.next_response()
    }
}

/// Mock comment poster.
#[derive(Clone, Default)]
pub struct MockCommentPoster {
    bodies: Arc<RwLock<Vec<String>>>,
    failure: Arc<RwLock<Option<(u16, String)>>>,
}

impl MockCommentPoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every post with the given status.
    pub fn simulate_failure(self, status: u16, body: impl Into<String>) -> Self {
        *self.failure.write() = Some((status, body.into()));
        self
    }

    /// Get all comment bodies received.
    pub fn get_bodies(&self) -> Vec<String> {
        self.bodies.read().clone()
    }
}

#[async_trait]
impl CommentPoster for MockCommentPoster {
    async fn post_comment(&self, body: &str) -> SummaryResult<()> {
        self.bodies.write().push(body.to_string());
        if let Some((status, body)) = self.failure.read().clone() {
            return Err(SummaryError::CommentRejected { status, body });
        }
        Ok(())
    }
}
