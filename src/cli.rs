/// CLI argument definitions for the `sonar-report` command.
///
/// Defines all flags and their defaults using the `clap` derive macros.
/// Environment fallbacks (SONAR_HOST, SONAR_TOKEN, SONAR_PROJECT_KEY)
/// are resolved in the config module, not here.
use std::path::PathBuf;

use clap::Parser;

/// Fetch a SonarQube project report: quality gate, metrics, and unresolved
/// issues, rendered as JSON, HTML, and console summaries.
#[derive(Parser)]
#[command(
    name = "sonar-report",
    version,
    about = "Fetch a SonarQube project report (quality gate, metrics, issues)"
)]
pub struct Cli {
    /// SonarQube host URL (default: $SONAR_HOST, else http://localhost:9000)
    #[arg(long)]
    pub host: Option<String>,

    /// Authentication token (default: $SONAR_TOKEN); takes precedence over user/password
    #[arg(long)]
    pub token: Option<String>,

    /// Username for basic auth (default: admin)
    #[arg(long)]
    pub user: Option<String>,

    /// Password for basic auth (default: admin)
    #[arg(long)]
    pub password: Option<String>,

    /// Project key (default: $SONAR_PROJECT_KEY)
    #[arg(long)]
    pub project: Option<String>,

    /// JSON report output path
    #[arg(long, default_value = "report.json")]
    pub json_output: PathBuf,

    /// HTML report output path
    #[arg(long, default_value = "report.html")]
    pub html_output: PathBuf,

    /// Directory where issue file paths are resolved for code context
    #[arg(long, default_value = ".")]
    pub source_root: PathBuf,
}
