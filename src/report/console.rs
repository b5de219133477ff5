//! Console renderers: chat-style and email-style summaries plus the
//! detailed per-issue listing with inline code context.
//!
//! Severity coloring: BLOCKER and CRITICAL red, MAJOR yellow, MINOR and
//! INFO blue. The issue line inside a context window is marked with a red
//! `>>>` prefix.

use crate::context::CodeContext;

use super::data::{GateStatus, Report, Severity};

// ANSI color codes.
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Status glyph used by the chat summary.
fn status_glyph(status: GateStatus) -> &'static str {
    match status {
        GateStatus::Ok => "✅",
        GateStatus::Error => "❌",
        GateStatus::Warn => "⚠️",
        GateStatus::None => "⚪",
        GateStatus::Unknown => "❓",
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Blocker | Severity::Critical => RED,
        Severity::Major => YELLOW,
        Severity::Minor | Severity::Info => BLUE,
        Severity::Unknown => RESET,
    }
}

/// Chat-style summary with markdown-like emphasis, suitable for pasting
/// into a chat channel. Only non-zero severity counts are listed.
pub fn print_chat_summary(report: &Report) {
    let m = &report.measures;
    let separator = "=".repeat(60);

    println!();
    println!("{separator}");
    println!("📱 CHAT-FORMATTED SUMMARY");
    println!("{separator}");
    println!(
        "{} *Quality Gate Status:* {}",
        status_glyph(report.quality_gate.status),
        report.quality_gate.status.as_str()
    );
    println!("📊 *Coverage:* {:.1}%", m.coverage);
    println!("🐛 *Bugs:* {}", m.bugs);
    println!("🔒 *Vulnerabilities:* {}", m.vulnerabilities);
    println!("💨 *Code Smells:* {}", m.code_smells);
    println!("📋 *Duplicated Lines:* {:.1}%", m.duplicated_lines_density);
    println!();
    println!("*Issues by Severity:*");
    for severity in Severity::KNOWN {
        let count = severity_count(report, severity);
        if count > 0 {
            println!("  • {}: {count}", severity.as_str());
        }
    }
    println!("{separator}");
    println!();
}

/// Plain status-email summary. All five severity counts are listed,
/// zeros included.
pub fn print_email_summary(report: &Report) {
    let m = &report.measures;
    let separator = "=".repeat(60);

    println!();
    println!("{separator}");
    println!("📧 EMAIL-FORMATTED SUMMARY");
    println!("{separator}");
    println!("Quality Gate Status: {}", report.quality_gate.status.as_str());
    println!("Project: {}", report.project_key);
    println!("Generated: {}", report.generated_at);
    println!();
    println!("Metrics:");
    println!("  - Coverage: {:.1}%", m.coverage);
    println!("  - Bugs: {}", m.bugs);
    println!("  - Vulnerabilities: {}", m.vulnerabilities);
    println!("  - Code Smells: {}", m.code_smells);
    println!("  - Duplicated Lines: {:.1}%", m.duplicated_lines_density);
    println!();
    println!("Issues by Severity:");
    for severity in Severity::KNOWN {
        println!("  - {}: {}", severity.as_str(), severity_count(report, severity));
    }
    println!("{separator}");
    println!();
}

/// Per-issue listing in server order: colorized severity, location, rule,
/// message, and the code window with the issue line marked, or a warning
/// when context loading failed.
pub fn print_detailed_issues(report: &Report) {
    if report.issues.detailed.is_empty() {
        return;
    }

    let separator = "=".repeat(80);
    println!();
    println!("{separator}");
    println!("📋 DETAILED ISSUES WITH CODE CONTEXT");
    println!("{separator}");

    for (idx, issue) in report.issues.detailed.iter().enumerate() {
        let color = severity_color(issue.severity);
        let line = issue
            .line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        println!();
        println!("{color}[{}]{RESET} Issue #{}", issue.severity.as_str(), idx + 1);
        println!("  File: {}", issue.component);
        println!("  Line: {line}");
        println!("  Rule: {}", issue.rule);
        println!("  Message: {}", issue.message);

        match &issue.code_context {
            Some(CodeContext::Window(window)) => {
                println!();
                println!(
                    "  Code Context (lines {}-{}):",
                    window.start_line, window.end_line
                );
                println!("  {}", "-".repeat(76));
                for ctx in &window.context {
                    if ctx.is_issue_line {
                        println!("  {RED}>>>{RESET} {:4} | {}", ctx.line, ctx.code);
                    } else {
                        println!("      {:4} | {}", ctx.line, ctx.code);
                    }
                }
                println!("  {}", "-".repeat(76));
            }
            Some(CodeContext::Error { error }) => {
                println!("  {YELLOW}⚠️  Could not load code context: {error}{RESET}");
            }
            None => {}
        }
    }

    println!();
    println!("{separator}");
    println!();
}

/// Final success line after all renderers have run.
pub fn print_success() {
    println!("{GREEN}✅ Report generation completed successfully{RESET}");
}

fn severity_count(report: &Report, severity: Severity) -> usize {
    report
        .issues
        .severity_counts
        .get(&severity)
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "console_test.rs"]
mod tests;
