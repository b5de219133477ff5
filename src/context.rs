//! Code-context loader.
//!
//! Loads a small window of source lines around an issue line so reports can
//! show the offending code inline. Best-effort: a missing or unreadable file
//! produces an error descriptor stored on the issue, never a fatal error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Lines of context shown before and after the issue line.
const CONTEXT_LINES: usize = 3;

/// Result of a context lookup: a window of source lines, or an error
/// descriptor when the file could not be read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeContext {
    Window(ContextWindow),
    Error { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextWindow {
    pub file: String,
    pub issue_line: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub context: Vec<ContextLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextLine {
    pub line: usize,
    pub code: String,
    pub is_issue_line: bool,
}

/// Load a context window around `line` (1-based) in `file`, resolving the
/// path against `source_root` first and as given second. Out-of-range lines
/// produce an empty or clipped window, not an error.
pub fn load_context(source_root: &Path, file: &str, line: usize) -> CodeContext {
    let rooted = source_root.join(file);
    let path = if rooted.exists() {
        rooted
    } else if Path::new(file).exists() {
        Path::new(file).to_path_buf()
    } else {
        return CodeContext::Error {
            error: format!("File not found: {file}"),
        };
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            return CodeContext::Error {
                error: format!("Could not read {file}: {err}"),
            };
        }
    };

    let lines: Vec<&str> = content.lines().collect();
    // 0-based window bounds, clipped to the file.
    let start = line.saturating_sub(CONTEXT_LINES + 1);
    let end = lines.len().min(line + CONTEXT_LINES);

    let context = (start..end)
        .map(|i| ContextLine {
            line: i + 1,
            code: lines[i].to_string(),
            is_issue_line: i + 1 == line,
        })
        .collect();

    CodeContext::Window(ContextWindow {
        file: file.to_string(),
        issue_line: line,
        start_line: start + 1,
        end_line: end,
        context,
    })
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
