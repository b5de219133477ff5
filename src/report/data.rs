/// Data structures for the project report.
///
/// Populated once by the report builder and consumed by every renderer.
/// All types serialize to the JSON shape written to the report file and
/// deserialize back unchanged.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::CodeContext;

/// Complete report for one project: quality gate verdict, the five tracked
/// measures, and the unresolved issues with their code context.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub project_key: String,
    pub generated_at: String,
    pub quality_gate: QualityGate,
    pub measures: Measures,
    pub issues: IssueSet,
}

/// Gate verdict plus the server's threshold conditions, passed through
/// as opaque JSON.
#[derive(Debug, Serialize, Deserialize)]
pub struct QualityGate {
    pub status: GateStatus,
    pub conditions: Vec<Value>,
}

/// Quality gate verdicts SonarQube reports. Anything outside this
/// vocabulary (or an absent status) maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateStatus {
    Ok,
    Error,
    Warn,
    None,
    Unknown,
}

impl GateStatus {
    pub fn from_api(raw: Option<&str>) -> GateStatus {
        match raw {
            Some("OK") => GateStatus::Ok,
            Some("ERROR") => GateStatus::Error,
            Some("WARN") => GateStatus::Warn,
            Some("NONE") => GateStatus::None,
            _ => GateStatus::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GateStatus::Ok => "OK",
            GateStatus::Error => "ERROR",
            GateStatus::Warn => "WARN",
            GateStatus::None => "NONE",
            GateStatus::Unknown => "UNKNOWN",
        }
    }
}

/// The five tracked metrics. Counts are truncated to integers, percentages
/// stay floating point. Absent or unparseable values are 0 — "absent" and
/// "zero" are indistinguishable by design.
#[derive(Debug, Serialize, Deserialize)]
pub struct Measures {
    pub coverage: f64,
    pub bugs: u64,
    pub vulnerabilities: u64,
    pub code_smells: u64,
    pub duplicated_lines_density: f64,
}

/// Unresolved issues: the server's total count, per-severity counts for the
/// fetched page, and the detailed entries in server order.
#[derive(Debug, Serialize, Deserialize)]
pub struct IssueSet {
    pub total: u64,
    pub severity_counts: BTreeMap<Severity, usize>,
    pub detailed: Vec<Issue>,
}

/// Issue severities, declared most severe first so ordered maps and the
/// fixed rendering order follow SonarQube's ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Blocker,
    Critical,
    Major,
    Minor,
    Info,
    Unknown,
}

impl Severity {
    /// The five severities SonarQube defines, in rendering order.
    pub const KNOWN: [Severity; 5] = [
        Severity::Blocker,
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Info,
    ];

    pub fn from_api(raw: Option<&str>) -> Severity {
        match raw {
            Some("BLOCKER") => Severity::Blocker,
            Some("CRITICAL") => Severity::Critical,
            Some("MAJOR") => Severity::Major,
            Some("MINOR") => Severity::Minor,
            Some("INFO") => Severity::Info,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Blocker => "BLOCKER",
            Severity::Critical => "CRITICAL",
            Severity::Major => "MAJOR",
            Severity::Minor => "MINOR",
            Severity::Info => "INFO",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

/// One issue from the fetched page, with the project-key prefix stripped
/// from the component path and code context attached when a line number
/// and an on-disk file were both resolvable.
#[derive(Debug, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    pub rule: String,
    pub severity: Severity,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,
    #[serde(rename = "textRange", default, skip_serializing_if = "Option::is_none")]
    pub text_range: Option<Value>,
    pub tags: Vec<String>,
    #[serde(rename = "codeContext", default, skip_serializing_if = "Option::is_none")]
    pub code_context: Option<CodeContext>,
}
