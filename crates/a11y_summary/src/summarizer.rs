//! Turns a report batch into a natural-language summary.

use a11y_report::{Batch, PromptBuilder};
use tracing::{debug, info};

use crate::completion::CompletionClient;
use crate::error::{SummaryError, SummaryResult};

/// Summarizer backed by a completion client.
pub struct Summarizer<C> {
    client: C,
}

impl<C: CompletionClient> Summarizer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Summarize a batch of report summaries.
    pub async fn summarize(&self, batch: &Batch) -> SummaryResult<String> {
        let prompt = PromptBuilder::render(batch);
        info!("Requesting summary for {} report(s)", batch.len());
        self.summarize_prompt(&prompt).await
    }

    /// Send an already-rendered prompt and return the trimmed text.
    pub async fn summarize_prompt(&self, prompt: &str) -> SummaryResult<String> {
        let text = self.client.complete(prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(SummaryError::EmptyCompletion);
        }
        debug!("Received summary of {} chars", text.len());
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use a11y_report::ReportSummary;

    use super::*;
    use crate::mock::MockCompletion;

    fn batch() -> Batch {
        vec![ReportSummary::new("https://a", "90%").with_failing_check("Low contrast")]
            .into_iter()
            .collect()
    }

    #[tokio::test]
    async fn test_summarize_trims_and_sends_rendered_prompt() {
        let client = MockCompletion::new().add_response("\n  Mostly accessible.  \n");
        let summarizer = Summarizer::new(client.clone());

        let summary = summarizer.summarize(&batch()).await.unwrap();
        assert_eq!(summary, "Mostly accessible.");

        let prompts = client.get_prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], PromptBuilder::render(&batch()));
    }

    #[tokio::test]
    async fn test_whitespace_completion_is_an_error() {
        let summarizer = Summarizer::new(MockCompletion::new().add_response(" \n\t"));
        assert!(matches!(
            summarizer.summarize(&batch()).await,
            Err(SummaryError::EmptyCompletion)
        ));
    }

    #[tokio::test]
    async fn test_client_error_is_propagated_without_retry() {
        let client = MockCompletion::new().simulate_failure(429, "Rate limit reached");
        let summarizer = Summarizer::new(client.clone());

        let err = summarizer.summarize(&batch()).await.unwrap_err();
        assert!(matches!(err, SummaryError::Api { status: 429, .. }));
        assert_eq!(client.call_count(), 1);
    }
}
