//! SonarQube API response types.
//!
//! Only the fields this tool consumes are modeled. Every field defaults when
//! absent so a sparse server response never fails deserialization; quality
//! gate conditions and text ranges are kept as raw JSON values and passed
//! through to the report unmodified.

use serde::Deserialize;
use serde_json::Value;

/// Response from /api/qualitygates/project_status.
#[derive(Debug, Deserialize)]
pub struct QualityGateResponse {
    #[serde(rename = "projectStatus", default)]
    pub project_status: Option<ProjectStatus>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub conditions: Vec<Value>,
}

/// Response from /api/measures/component.
#[derive(Debug, Deserialize)]
pub struct MeasuresResponse {
    #[serde(default)]
    pub component: Option<MeasuresComponent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MeasuresComponent {
    #[serde(default)]
    pub measures: Vec<Measure>,
}

/// A single metric value. SonarQube reports all values as strings.
#[derive(Debug, Deserialize)]
pub struct Measure {
    pub metric: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Response from /api/issues/search (one page).
#[derive(Debug, Deserialize)]
pub struct IssuesResponse {
    /// Server-side count of matching issues, independent of page size.
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

#[derive(Debug, Deserialize)]
pub struct RawIssue {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub rule: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(rename = "type", default)]
    pub issue_type: Option<String>,
    /// Component key, prefixed with "<project_key>:".
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub line: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub effort: Option<String>,
    #[serde(rename = "textRange", default)]
    pub text_range: Option<Value>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
