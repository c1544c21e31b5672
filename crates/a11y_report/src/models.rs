//! Data models for Lighthouse reports and their accessibility summaries.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Name of the accessibility category inside `categories`.
pub const ACCESSIBILITY_CATEGORY: &str = "accessibility";

/// URL used when a report names neither a final nor a requested URL.
pub const UNKNOWN_URL: &str = "Unknown URL";

/// Score text used when no score is available.
pub const NOT_APPLICABLE: &str = "N/A";

/// Failing-check entry injected when the accessibility category is absent.
pub const MISSING_CATEGORY_MESSAGE: &str = "Accessibility data not found in report";

/// Parsed contents of one Lighthouse JSON report.
///
/// Only the fields the extractor reads are modelled; everything else in
/// the report is ignored. `categories` and `audits` stay optional here so
/// the extractor can decide what a report without them means.
///
/// Entries of `categories` and `audits` are decoded one by one: a null or
/// oddly shaped entry is dropped without affecting its siblings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReport {
    pub final_url: Option<String>,
    pub requested_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub categories: Option<HashMap<String, Category>>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub audits: Option<HashMap<String, AuditResult>>,
}

impl RawReport {
    /// The accessibility category, if the report has one.
    pub fn accessibility(&self) -> Option<&Category> {
        self.categories
            .as_ref()
            .and_then(|categories| categories.get(ACCESSIBILITY_CATEGORY))
    }

    /// Resolve the page URL: final URL, then requested URL, then [`UNKNOWN_URL`].
    pub fn resolved_url(&self) -> String {
        [&self.final_url, &self.requested_url]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .cloned()
            .unwrap_or_else(|| UNKNOWN_URL.to_string())
    }
}

/// A scoring category such as `accessibility` or `performance`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Overall score in `[0, 1]`, null when Lighthouse could not score it.
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    /// Ordered references into the report's `audits` map.
    #[serde(default, deserialize_with = "lenient_vec")]
    pub audit_refs: Option<Vec<AuditRef>>,
}

/// Reference from a category to one audit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditRef {
    pub id: Option<String>,
}

/// Result of a single audit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    pub score_display_mode: Option<ScoreDisplayMode>,
}

impl AuditResult {
    /// Label used in summaries: title, then id, then the given map key.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .or_else(|| self.id.as_deref().filter(|id| !id.is_empty()))
            .unwrap_or(key)
    }

    /// Whether the audit is scored and below a perfect score.
    pub fn is_failing(&self) -> bool {
        let scored_below_perfect = matches!(self.score, Some(score) if score < 1.0);
        let counted = self
            .score_display_mode
            .map_or(true, |mode| !mode.is_excluded());
        scored_below_perfect && counted
    }
}

/// How Lighthouse presents an audit's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDisplayMode {
    Numeric,
    Binary,
    Manual,
    Informative,
    NotApplicable,
    Error,
    MetricSavings,
    #[serde(other)]
    Other,
}

impl ScoreDisplayMode {
    /// Modes whose audits never count as failing checks.
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Manual | Self::Informative | Self::NotApplicable)
    }
}

/// `null` is absent, an object keeps every entry that decodes as `T`, and
/// any other value counts as present but empty.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<Option<HashMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let map = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(map)) => map,
        Some(_) => return Ok(Some(HashMap::new())),
    };

    let entries = map
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(entry) => Some((key, entry)),
            Err(e) => {
                debug!("Ignoring report entry {}: {}", key, e);
                None
            }
        })
        .collect();
    Ok(Some(entries))
}

/// Array elements that do not decode as `T` are dropped; non-arrays are absent.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Non-numeric scores are treated as unscored.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| value.as_f64()))
}

/// Normalized accessibility findings for one report file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub url: String,
    pub score_text: String,
    pub failing_checks: Vec<String>,
}

impl ReportSummary {
    pub fn new(url: impl Into<String>, score_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            score_text: score_text.into(),
            failing_checks: Vec::new(),
        }
    }

    /// Placeholder for a report that has no accessibility category.
    pub fn missing_category(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            score_text: NOT_APPLICABLE.to_string(),
            failing_checks: vec![MISSING_CATEGORY_MESSAGE.to_string()],
        }
    }

    pub fn with_failing_check(mut self, title: impl Into<String>) -> Self {
        self.failing_checks.push(title.into());
        self
    }
}

/// Format a category score as a whole percentage, or [`NOT_APPLICABLE`].
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{}%", (score * 100.0).round() as i64),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Ordered summaries collected by one run. Duplicate URLs are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    summaries: Vec<ReportSummary>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, summary: ReportSummary) {
        self.summaries.push(summary);
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportSummary> {
        self.summaries.iter()
    }

    pub fn summaries(&self) -> &[ReportSummary] {
        &self.summaries
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a ReportSummary;
    type IntoIter = std::slice::Iter<'a, ReportSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.iter()
    }
}

impl FromIterator<ReportSummary> for Batch {
    fn from_iter<I: IntoIterator<Item = ReportSummary>>(iter: I) -> Self {
        Self {
            summaries: iter.into_iter().collect(),
        }
    }
}

/// Why a report file contributed nothing to the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file could not be read
    Unreadable(String),
    /// The content is not valid JSON
    InvalidJson(String),
    /// Valid JSON, but not an object
    NotAReport,
    /// `categories` or `audits` is missing or null
    MissingSections,
    /// The known sections have an unexpected shape
    UnexpectedShape(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(msg) => write!(f, "could not read file: {}", msg),
            Self::InvalidJson(msg) => write!(f, "could not parse JSON: {}", msg),
            Self::NotAReport => write!(f, "does not appear to be a valid Lighthouse report"),
            Self::MissingSections => write!(
                f,
                "does not appear to be a valid Lighthouse report (missing categories or audits)"
            ),
            Self::UnexpectedShape(msg) => write!(f, "unexpected report structure: {}", msg),
        }
    }
}
