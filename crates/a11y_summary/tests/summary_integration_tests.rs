//! Integration tests for the summary pipeline.
//!
//! These tests use mocked collaborators to avoid requiring network access
//! or an API key.

use std::fs;

use a11y_report::{PromptBuilder, ReportAggregator, ReportError};
use a11y_summary::{
    publish_summary, MockCommentPoster, MockCompletion, PipelineOutcome, PostOutcome,
    SummaryError, SummaryPipeline, NOTHING_TO_SUMMARIZE,
};
use tempfile::tempdir;

const VALID_REPORT: &str = r#"{
    "finalUrl": "http://localhost:5173/",
    "categories": {
        "accessibility": {
            "score": 0.955,
            "auditRefs": [{"id": "color-contrast"}, {"id": "aria-roles"}, {"id": "tabindex"}]
        }
    },
    "audits": {
        "color-contrast": {
            "id": "color-contrast",
            "title": "Background and foreground colors do not have a sufficient contrast ratio.",
            "score": 0,
            "scoreDisplayMode": "binary"
        },
        "aria-roles": {"id": "aria-roles", "title": "ARIA roles are valid", "score": 1, "scoreDisplayMode": "binary"},
        "tabindex": {"id": "tabindex", "title": "Tabindex", "score": null, "scoreDisplayMode": "notApplicable"}
    }
}"#;

/// Empty directories never reach the completion service.
#[tokio::test]
async fn test_nothing_to_summarize_skips_completion() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("broken.json"), "{").unwrap();

    let client = MockCompletion::new().add_response("should not be used");
    let outcome = SummaryPipeline::new(client.clone())
        .run(temp.path())
        .await
        .unwrap();

    assert!(matches!(outcome, PipelineOutcome::NothingToSummarize { .. }));
    assert_eq!(outcome.output(), NOTHING_TO_SUMMARIZE);
    assert_eq!(outcome.stats().skipped, 1);
    assert_eq!(client.call_count(), 0);
}

/// A bad file does not stop the batch.
#[tokio::test]
async fn test_pipeline_with_one_bad_file() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("a-good.json"), VALID_REPORT).unwrap();
    fs::write(temp.path().join("b-bad.json"), "not json at all").unwrap();

    let client = MockCompletion::new().add_response("\nOne contrast issue on the home page.\n");
    let outcome = SummaryPipeline::new(client.clone())
        .run(temp.path())
        .await
        .unwrap();

    assert_eq!(outcome.output(), "One contrast issue on the home page.");
    assert_eq!(outcome.stats().summarized, 1);

    let prompts = client.get_prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Report 1:\nURL: http://localhost:5173/\nAccessibility Score: 96%\n"));
    assert!(prompts[0]
        .contains("- Background and foreground colors do not have a sufficient contrast ratio.\n"));
    assert!(!prompts[0].contains("ARIA roles are valid"));
    assert!(!prompts[0].contains("Tabindex"));
    assert!(!prompts[0].contains("Report 2:"));

    let (batch, _) = ReportAggregator::from_directory(temp.path()).unwrap();
    assert_eq!(prompts[0], PromptBuilder::render(&batch));
}

#[tokio::test]
async fn test_missing_directory_is_fatal() {
    let temp = tempdir().unwrap();
    let client = MockCompletion::new().add_response("unused");

    let err = SummaryPipeline::new(client.clone())
        .run(temp.path().join("absent"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SummaryError::Report(ReportError::DirectoryNotFound(_))
    ));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_completion_failure_is_fatal() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("report.json"), VALID_REPORT).unwrap();

    let client = MockCompletion::new().simulate_failure(401, "Incorrect API key provided");
    let err = SummaryPipeline::new(client.clone())
        .run(temp.path())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Completion API error 401: Incorrect API key provided");
    assert_eq!(client.call_count(), 1);
}

/// Summary output feeds the comment poster by convention.
#[tokio::test]
async fn test_summary_to_comment() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("report.json"), VALID_REPORT).unwrap();

    let outcome = SummaryPipeline::new(MockCompletion::new().add_response("Fix contrast."))
        .run(temp.path())
        .await
        .unwrap();

    let poster = MockCommentPoster::new();
    let posted = publish_summary(outcome.output(), || Ok(poster.clone()))
        .await
        .unwrap();
    assert_eq!(posted, PostOutcome::Posted);
    assert_eq!(
        poster.get_bodies(),
        vec!["## Automated Accessibility Summary\n\nFix contrast.".to_string()]
    );
}

/// The neutral message is still a summary and gets posted.
#[tokio::test]
async fn test_nothing_to_summarize_is_posted() {
    let temp = tempdir().unwrap();
    let outcome = SummaryPipeline::new(MockCompletion::new())
        .run(temp.path())
        .await
        .unwrap();

    let poster = MockCommentPoster::new();
    let posted = publish_summary(outcome.output(), || Ok(poster.clone()))
        .await
        .unwrap();
    assert_eq!(posted, PostOutcome::Posted);
    assert_eq!(poster.get_bodies().len(), 1);
    assert!(poster.get_bodies()[0].ends_with(NOTHING_TO_SUMMARIZE));
}
