//! Report builder: normalizes the three raw API responses into one model.
//!
//! Issues keep their server order — no filtering, reordering, or dedup.
//! Severity counts are derived from the fetched page, so they always sum
//! to `detailed.len()` even when the server-side `total` is larger.

use std::collections::BTreeMap;

use chrono::Local;

use crate::api::types::{IssuesResponse, Measure, MeasuresResponse, QualityGateResponse, RawIssue};
use crate::config::Config;
use crate::context;

use super::data::{GateStatus, Issue, IssueSet, Measures, QualityGate, Report, Severity};

/// Assemble the report model from the three raw fetch results.
pub fn build_report(
    config: &Config,
    gate: QualityGateResponse,
    measures: MeasuresResponse,
    issues: IssuesResponse,
) -> Report {
    Report {
        project_key: config.project_key.clone(),
        generated_at: Local::now().to_rfc3339(),
        quality_gate: build_quality_gate(gate),
        measures: build_measures(measures),
        issues: build_issues(config, issues),
    }
}

fn build_quality_gate(raw: QualityGateResponse) -> QualityGate {
    match raw.project_status {
        Some(status) => QualityGate {
            status: GateStatus::from_api(status.status.as_deref()),
            conditions: status.conditions,
        },
        None => QualityGate {
            status: GateStatus::Unknown,
            conditions: Vec::new(),
        },
    }
}

/// Metric value by key, defaulting to 0.0 when absent or unparseable.
fn metric_value(measures: &[Measure], key: &str) -> f64 {
    measures
        .iter()
        .find(|m| m.metric == key)
        .and_then(|m| m.value.as_deref())
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn build_measures(raw: MeasuresResponse) -> Measures {
    let measures = raw.component.map(|c| c.measures).unwrap_or_default();
    Measures {
        coverage: metric_value(&measures, "coverage"),
        bugs: metric_value(&measures, "bugs") as u64,
        vulnerabilities: metric_value(&measures, "vulnerabilities") as u64,
        code_smells: metric_value(&measures, "code_smells") as u64,
        duplicated_lines_density: metric_value(&measures, "duplicated_lines_density"),
    }
}

fn build_issues(config: &Config, raw: IssuesResponse) -> IssueSet {
    let mut severity_counts: BTreeMap<Severity, usize> = BTreeMap::new();
    let mut detailed = Vec::with_capacity(raw.issues.len());

    for issue in raw.issues {
        let severity = Severity::from_api(issue.severity.as_deref());
        *severity_counts.entry(severity).or_insert(0) += 1;
        detailed.push(build_issue(config, severity, issue));
    }

    IssueSet {
        total: raw.total,
        severity_counts,
        detailed,
    }
}

fn build_issue(config: &Config, severity: Severity, raw: RawIssue) -> Issue {
    let component = strip_project_prefix(
        raw.component.as_deref().unwrap_or_default(),
        &config.project_key,
    );

    // Context needs both a line number and a file path to look up.
    let code_context = match raw.line {
        Some(line) if !component.is_empty() => Some(context::load_context(
            &config.source_root,
            &component,
            line as usize,
        )),
        _ => None,
    };

    Issue {
        key: raw.key.unwrap_or_default(),
        rule: raw.rule.unwrap_or_default(),
        severity,
        issue_type: raw.issue_type.unwrap_or_default(),
        component,
        line: raw.line,
        message: raw.message.unwrap_or_default(),
        effort: raw.effort,
        text_range: raw.text_range,
        tags: raw.tags,
        code_context,
    }
}

/// Strip the leading "<project_key>:" from a component key to get the
/// repository-relative file path.
fn strip_project_prefix(component: &str, project_key: &str) -> String {
    let prefix = format!("{project_key}:");
    component
        .strip_prefix(&prefix)
        .unwrap_or(component)
        .to_string()
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
