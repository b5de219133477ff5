use super::*;

use std::collections::BTreeMap;

use crate::context::{ContextLine, ContextWindow};

use super::super::data::{IssueSet, Measures, QualityGate};

fn empty_report(status: GateStatus) -> Report {
    Report {
        project_key: "demo-proj".to_string(),
        generated_at: "2026-08-30T10:00:00+00:00".to_string(),
        quality_gate: QualityGate {
            status,
            conditions: Vec::new(),
        },
        measures: Measures {
            coverage: 85.5,
            bugs: 3,
            vulnerabilities: 1,
            code_smells: 27,
            duplicated_lines_density: 4.2,
        },
        issues: IssueSet {
            total: 0,
            severity_counts: BTreeMap::new(),
            detailed: Vec::new(),
        },
    }
}

fn issue(severity: Severity, message: &str, code_context: Option<CodeContext>) -> Issue {
    Issue {
        key: "k1".to_string(),
        rule: "python:S100".to_string(),
        severity,
        issue_type: "BUG".to_string(),
        component: "src/a.py".to_string(),
        line: Some(10),
        message: message.to_string(),
        effort: Some("10min".to_string()),
        text_range: None,
        tags: vec!["pitfall".to_string()],
        code_context,
    }
}

#[test]
fn escape_html_basic() {
    assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    assert_eq!(escape_html("plain"), "plain");
    // Ampersand escaped first, so entities are not double-escaped later.
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
}

#[test]
fn script_in_message_is_escaped() {
    let mut report = empty_report(GateStatus::Ok);
    report
        .issues
        .detailed
        .push(issue(Severity::Major, "<script>alert(1)</script>", None));

    let html = render(&report);
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
}

#[test]
fn status_banner_colors() {
    assert!(render(&empty_report(GateStatus::Ok)).contains("#4CAF50"));
    assert!(render(&empty_report(GateStatus::Error)).contains("#F44336"));
    assert!(render(&empty_report(GateStatus::Warn)).contains("#FF9800"));
    assert!(render(&empty_report(GateStatus::None)).contains("#9E9E9E"));
    assert!(render(&empty_report(GateStatus::Unknown)).contains("#9E9E9E"));
}

#[test]
fn unknown_status_rendered_in_banner() {
    let html = render(&empty_report(GateStatus::Unknown));
    assert!(html.contains("Quality Gate: UNKNOWN"));
}

#[test]
fn metrics_grid_shows_all_five() {
    let html = render(&empty_report(GateStatus::Ok));
    assert!(html.contains("85.5%"));
    assert!(html.contains("Bugs"));
    assert!(html.contains("Vulnerabilities"));
    assert!(html.contains("Code Smells"));
    assert!(html.contains("4.2%"));
}

#[test]
fn severity_table_renders_missing_as_zero() {
    let mut report = empty_report(GateStatus::Ok);
    report.issues.severity_counts.insert(Severity::Major, 2);

    let html = render(&report);
    for severity in Severity::KNOWN {
        assert!(html.contains(severity.as_str()), "{}", severity.as_str());
    }
    assert!(html.contains("<td>2</td>"));
    assert!(html.contains("<td>0</td>"));
}

#[test]
fn code_window_marks_issue_line() {
    let window = CodeContext::Window(ContextWindow {
        file: "src/a.py".to_string(),
        issue_line: 10,
        start_line: 9,
        end_line: 11,
        context: vec![
            ContextLine {
                line: 9,
                code: "x = 1".to_string(),
                is_issue_line: false,
            },
            ContextLine {
                line: 10,
                code: "y = x / 0".to_string(),
                is_issue_line: true,
            },
        ],
    });
    let mut report = empty_report(GateStatus::Error);
    report
        .issues
        .detailed
        .push(issue(Severity::Blocker, "division by zero", Some(window)));

    let html = render(&report);
    assert!(html.contains("code-content issue-line"));
    assert!(html.contains("y = x / 0"));
}

#[test]
fn source_code_is_escaped() {
    let window = CodeContext::Window(ContextWindow {
        file: "src/a.py".to_string(),
        issue_line: 1,
        start_line: 1,
        end_line: 1,
        context: vec![ContextLine {
            line: 1,
            code: "if a < b && c > d:".to_string(),
            is_issue_line: true,
        }],
    });
    let mut report = empty_report(GateStatus::Ok);
    report
        .issues
        .detailed
        .push(issue(Severity::Minor, "m", Some(window)));

    let html = render(&report);
    assert!(html.contains("if a &lt; b &amp;&amp; c &gt; d:"));
}

#[test]
fn context_error_renders_warning_not_code_block() {
    let mut report = empty_report(GateStatus::Ok);
    report.issues.detailed.push(issue(
        Severity::Major,
        "m",
        Some(CodeContext::Error {
            error: "File not found: src/a.py".to_string(),
        }),
    ));

    let html = render(&report);
    assert!(html.contains("Could not load code context: File not found: src/a.py"));
    assert!(!html.contains("code-block"));
}

#[test]
fn issue_meta_shows_rule_effort_tags() {
    let mut report = empty_report(GateStatus::Ok);
    report.issues.detailed.push(issue(Severity::Info, "m", None));

    let html = render(&report);
    assert!(html.contains("Rule: python:S100 | Effort: 10min | Tags: pitfall"));
}
