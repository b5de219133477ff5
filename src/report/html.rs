//! HTML report renderer.
//!
//! Emits a single self-contained document: a status banner colored by the
//! gate verdict, a metrics grid, a severity/count table, and one detail
//! block per issue with an inline code window when context is available.
//! Every string coming from the server or from source files is HTML-escaped
//! before embedding.

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::context::CodeContext;

use super::data::{GateStatus, Issue, Report, Severity};

/// Escape the HTML metacharacters that would otherwise let issue messages
/// or source code inject markup. Ampersand first to avoid double-escaping.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Banner color per gate verdict.
fn status_color(status: GateStatus) -> &'static str {
    match status {
        GateStatus::Ok => "#4CAF50",
        GateStatus::Error => "#F44336",
        GateStatus::Warn => "#FF9800",
        GateStatus::None | GateStatus::Unknown => "#9E9E9E",
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Blocker => "severity-blocker",
        Severity::Critical => "severity-critical",
        Severity::Major => "severity-major",
        Severity::Minor => "severity-minor",
        Severity::Info => "severity-info",
        Severity::Unknown => "severity-unknown",
    }
}

const STYLE: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
       margin: 0; padding: 20px; background-color: #f5f5f5; }
.container { max-width: 1200px; margin: 0 auto; background: white; padding: 30px;
             border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
h1 { color: #333; padding-bottom: 10px; }
.status-badge { display: inline-block; padding: 8px 16px; border-radius: 4px;
                color: white; font-weight: bold; margin-bottom: 20px; }
.metrics-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 20px; margin: 30px 0; }
.metric-card { background: #f9f9f9; padding: 20px; border-radius: 6px;
               border-left: 4px solid #2196F3; }
.metric-label { font-size: 14px; color: #666; margin-bottom: 8px; }
.metric-value { font-size: 32px; font-weight: bold; color: #333; }
.issues-section { margin-top: 30px; }
.issue-severity { display: inline-block; padding: 4px 8px; border-radius: 3px;
                  font-size: 12px; font-weight: bold; margin-right: 8px; }
.severity-blocker { background: #D32F2F; color: white; }
.severity-critical { background: #F44336; color: white; }
.severity-major { background: #FF9800; color: white; }
.severity-minor { background: #FFC107; color: black; }
.severity-info { background: #2196F3; color: white; }
.severity-unknown { background: #9E9E9E; color: white; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th, td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
th { background-color: #f5f5f5; font-weight: 600; }
.issue-detail { margin: 20px 0; padding: 20px; border: 1px solid #ddd;
                border-radius: 6px; background: #fafafa; }
.issue-header { display: flex; align-items: center; margin-bottom: 15px; }
.issue-file { font-family: 'Courier New', monospace; color: #666; font-size: 14px;
              margin-left: 10px; }
.issue-message { margin: 10px 0; padding: 10px; background: #fff3cd;
                 border-left: 4px solid #ffc107; border-radius: 4px; }
.issue-meta { font-size: 12px; color: #666; margin-top: 10px; }
.code-block { background: #2d2d2d; color: #f8f8f2; padding: 15px; border-radius: 4px;
              overflow-x: auto; font-family: 'Courier New', monospace; font-size: 13px;
              line-height: 1.6; margin-top: 10px; }
.code-line { display: flex; padding: 2px 0; }
.line-number { color: #666; padding-right: 15px; text-align: right; min-width: 50px;
               user-select: none; }
.line-number.issue-line { color: #ff6b6b; font-weight: bold; }
.code-content { flex: 1; white-space: pre; }
.code-content.issue-line { background: rgba(255, 107, 107, 0.2); padding: 2px 5px;
                           border-left: 3px solid #ff6b6b; }
.context-warning { margin-top: 10px; padding: 10px; background: #fff3cd;
                   border-left: 4px solid #ffc107; border-radius: 4px;
                   font-size: 13px; color: #856404; }
.footer { margin-top: 40px; padding-top: 20px; border-top: 1px solid #ddd;
          color: #666; font-size: 12px; text-align: center; }";

/// Render the report and write it to `path`. A write failure is fatal.
pub fn write_html(report: &Report, path: &Path) -> Result<(), Box<dyn Error>> {
    fs::write(path, render(report))?;
    println!("🌐 HTML report saved to: {}", path.display());
    Ok(())
}

pub(crate) fn render(report: &Report) -> String {
    let status = report.quality_gate.status;
    let color = status_color(status);
    let mut html = String::with_capacity(16 * 1024);

    html.push_str(&format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>SonarQube Report - {}</title>\n\
         <style>\n{STYLE}\n</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         <h1 style=\"border-bottom: 3px solid {color}\">SonarQube Quality Report</h1>\n\
         <div class=\"status-badge\" style=\"background-color: {color}\">Quality Gate: {}</div>\n",
        escape_html(&report.project_key),
        status.as_str(),
    ));

    render_metrics(&mut html, report);
    render_severity_table(&mut html, report);

    html.push_str("<div class=\"issues-section\">\n<h2>Detailed Issues</h2>\n");
    for issue in &report.issues.detailed {
        render_issue(&mut html, issue);
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div class=\"footer\">Generated on {}</div>\n</div>\n</body>\n</html>\n",
        escape_html(&report.generated_at)
    ));

    html
}

fn render_metrics(html: &mut String, report: &Report) {
    let m = &report.measures;
    let cards: [(&str, String); 5] = [
        ("Coverage", format!("{:.1}%", m.coverage)),
        ("Bugs", m.bugs.to_string()),
        ("Vulnerabilities", m.vulnerabilities.to_string()),
        ("Code Smells", m.code_smells.to_string()),
        ("Duplicated Lines", format!("{:.1}%", m.duplicated_lines_density)),
    ];

    html.push_str("<div class=\"metrics-grid\">\n");
    for (label, value) in cards {
        html.push_str(&format!(
            "<div class=\"metric-card\">\
             <div class=\"metric-label\">{label}</div>\
             <div class=\"metric-value\">{value}</div>\
             </div>\n"
        ));
    }
    html.push_str("</div>\n");
}

fn render_severity_table(html: &mut String, report: &Report) {
    html.push_str(
        "<div class=\"issues-section\">\n<h2>Issues Summary</h2>\n\
         <table>\n<thead><tr><th>Severity</th><th>Count</th></tr></thead>\n<tbody>\n",
    );
    for severity in Severity::KNOWN {
        let count = report
            .issues
            .severity_counts
            .get(&severity)
            .copied()
            .unwrap_or(0);
        html.push_str(&format!(
            "<tr><td><span class=\"issue-severity {}\">{}</span></td><td>{count}</td></tr>\n",
            severity_class(severity),
            severity.as_str(),
        ));
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

fn render_issue(html: &mut String, issue: &Issue) {
    let line = issue
        .line
        .map(|l| l.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    html.push_str(&format!(
        "<div class=\"issue-detail\">\n\
         <div class=\"issue-header\">\
         <span class=\"issue-severity {}\">{}</span>\
         <span class=\"issue-file\">{}:{line}</span>\
         </div>\n\
         <div class=\"issue-message\"><strong>{}</strong></div>\n",
        severity_class(issue.severity),
        issue.severity.as_str(),
        escape_html(&issue.component),
        escape_html(&issue.message),
    ));

    let effort = issue.effort.as_deref().unwrap_or("N/A");
    html.push_str(&format!(
        "<div class=\"issue-meta\">Rule: {} | Effort: {}",
        escape_html(&issue.rule),
        escape_html(effort),
    ));
    if !issue.tags.is_empty() {
        html.push_str(&format!(" | Tags: {}", escape_html(&issue.tags.join(", "))));
    }
    html.push_str("</div>\n");

    match &issue.code_context {
        Some(CodeContext::Window(window)) => {
            html.push_str("<div class=\"code-block\">\n");
            for ctx in &window.context {
                let class = if ctx.is_issue_line { " issue-line" } else { "" };
                html.push_str(&format!(
                    "<div class=\"code-line\">\
                     <span class=\"line-number{class}\">{}</span>\
                     <span class=\"code-content{class}\">{}</span>\
                     </div>\n",
                    ctx.line,
                    escape_html(&ctx.code),
                ));
            }
            html.push_str("</div>\n");
        }
        Some(CodeContext::Error { error }) => {
            html.push_str(&format!(
                "<div class=\"context-warning\">⚠️ Could not load code context: {}</div>\n",
                escape_html(error),
            ));
        }
        None => {}
    }

    html.push_str("</div>\n");
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
