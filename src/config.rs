//! Runtime configuration resolved once at startup.
//!
//! Merges CLI flags with environment fallbacks (SONAR_HOST, SONAR_TOKEN,
//! SONAR_PROJECT_KEY) into one immutable `Config` value that is passed by
//! reference to every component. A missing project key is the only fatal
//! resolution error.

use std::error::Error;
use std::path::PathBuf;

use crate::cli::Cli;

const DEFAULT_HOST: &str = "http://localhost:9000";
const DEFAULT_USER: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin";

/// Credentials for the SonarQube API: a token sent as the basic-auth
/// username with an empty password, or a plain username/password pair.
#[derive(Debug, Clone)]
pub enum Auth {
    Token(String),
    Basic { user: String, password: String },
}

/// Resolved runtime configuration, constructed once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub auth: Auth,
    pub project_key: String,
    pub json_output: PathBuf,
    pub html_output: PathBuf,
    pub source_root: PathBuf,
}

impl Config {
    /// Resolve flags and process environment into a `Config`.
    pub fn resolve(cli: Cli) -> Result<Config, Box<dyn Error>> {
        Config::resolve_with(cli, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        cli: Cli,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Config, Box<dyn Error>> {
        let project_key = cli
            .project
            .or_else(|| env("SONAR_PROJECT_KEY"))
            .filter(|key| !key.is_empty())
            .ok_or("project key is required: use --project or set SONAR_PROJECT_KEY")?;

        let host = cli
            .host
            .or_else(|| env("SONAR_HOST"))
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .trim_end_matches('/')
            .to_string();

        let token = cli.token.or_else(|| env("SONAR_TOKEN"));
        let auth = match token {
            Some(token) if !token.is_empty() => Auth::Token(token),
            _ => Auth::Basic {
                user: cli.user.unwrap_or_else(|| DEFAULT_USER.to_string()),
                password: cli.password.unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
            },
        };

        Ok(Config {
            host,
            auth,
            project_key,
            json_output: cli.json_output,
            html_output: cli.html_output,
            source_root: cli.source_root,
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
