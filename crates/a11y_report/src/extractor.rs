//! Accessibility signal extraction from a single parsed report.
//!
//! A report without `categories` or `audits` is skipped, while a report
//! that has both but lacks the accessibility category still yields a
//! placeholder summary. The two cases are kept as separate branches so the
//! anomaly stays visible in the generated summary.

use tracing::{debug, warn};

use crate::models::{format_score, RawReport, ReportSummary, SkipReason};

/// Result of extracting one report.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Summary(ReportSummary),
    Skipped(SkipReason),
}

impl Extraction {
    pub fn summary(self) -> Option<ReportSummary> {
        match self {
            Self::Summary(summary) => Some(summary),
            Self::Skipped(_) => None,
        }
    }
}

/// Extracts the accessibility score and failing checks from reports.
pub struct AuditExtractor;

impl AuditExtractor {
    /// Extract a summary from `report`. `source` names the file in diagnostics.
    pub fn extract(report: &RawReport, source: &str) -> Extraction {
        let audits = match (&report.categories, &report.audits) {
            (Some(_), Some(audits)) => audits,
            _ => {
                warn!(
                    "File {} does not appear to be a valid Lighthouse report. Skipping.",
                    source
                );
                return Extraction::Skipped(SkipReason::MissingSections);
            }
        };

        let url = report.resolved_url();

        let Some(category) = report.accessibility() else {
            warn!(
                "Accessibility category not found in report for {} (file: {}).",
                url, source
            );
            return Extraction::Summary(ReportSummary::missing_category(url));
        };

        let mut summary = ReportSummary::new(url, format_score(category.score));

        match &category.audit_refs {
            Some(refs) => {
                for id in refs.iter().filter_map(|audit_ref| audit_ref.id.as_deref()) {
                    match audits.get(id) {
                        Some(audit) if audit.is_failing() => {
                            summary.failing_checks.push(audit.label(id).to_string());
                        }
                        Some(_) => {}
                        None => debug!("Audit {} referenced but not present in {}", id, source),
                    }
                }
            }
            None => warn!(
                "Audit references missing for accessibility category in report for {} (file: {}).",
                summary.url, source
            ),
        }

        debug!(
            "Extracted {} failing check(s) from {} ({})",
            summary.failing_checks.len(),
            source,
            summary.score_text
        );
        Extraction::Summary(summary)
    }
}
