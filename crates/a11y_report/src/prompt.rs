//! Prompt rendering for the completion service.

use std::fmt::Write;

use crate::models::{Batch, ReportSummary};

/// Instructions placed before the per-report blocks.
pub const PROMPT_HEADER: &str = "Generate a concise summary of accessibility issues from the following Lighthouse reports.
For each report, include:
- URL
- Accessibility Score (%)
- Key Failing Audits (titles only, if any)

Then, provide a brief overall assessment of the accessibility status and any common themes or critical issues.
Be brief and focus on actionable insights. If no failing audits, state that.

";

/// Closing cue for the generated conclusion.
pub const ASSESSMENT_CUE: &str = "Overall Assessment:";

/// Renders a batch into a deterministic prompt.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Render the full prompt for `batch`.
    pub fn render(batch: &Batch) -> String {
        let mut prompt = String::from(PROMPT_HEADER);
        for (index, summary) in batch.iter().enumerate() {
            Self::render_report(&mut prompt, index + 1, summary);
        }
        prompt.push_str(ASSESSMENT_CUE);
        prompt
    }

    fn render_report(out: &mut String, number: usize, summary: &ReportSummary) {
        // Writing into a String cannot fail
        let _ = writeln!(out, "Report {}:", number);
        let _ = writeln!(out, "URL: {}", summary.url);
        let _ = writeln!(out, "Accessibility Score: {}", summary.score_text);
        if summary.failing_checks.is_empty() {
            out.push_str("Failing Audits: None\n");
        } else {
            out.push_str("Failing Audits:\n");
            for title in &summary.failing_checks {
                let _ = writeln!(out, "- {}", title);
            }
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_exact_layout() {
        let batch: Batch = vec![
            ReportSummary::new("https://a", "42%")
                .with_failing_check("Buttons do not have an accessible name")
                .with_failing_check("Image elements do not have [alt] attributes"),
            ReportSummary::new("https://b", "100%"),
        ]
        .into_iter()
        .collect();

        let expected = format!(
            "{}\
Report 1:
URL: https://a
Accessibility Score: 42%
Failing Audits:
- Buttons do not have an accessible name
- Image elements do not have [alt] attributes

Report 2:
URL: https://b
Accessibility Score: 100%
Failing Audits: None

Overall Assessment:",
            PROMPT_HEADER
        );

        assert_eq!(PromptBuilder::render(&batch), expected);
    }

    #[test]
    fn test_render_empty_batch() {
        let prompt = PromptBuilder::render(&Batch::new());
        assert_eq!(prompt, format!("{}{}", PROMPT_HEADER, ASSESSMENT_CUE));
    }
}
