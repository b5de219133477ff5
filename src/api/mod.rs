//! SonarQube REST API client.
//!
//! One blocking HTTP client with a fixed request timeout and three read-only
//! fetch operations: quality gate status, aggregate measures, and unresolved
//! issues. Any non-2xx response or transport failure is returned as an error
//! and aborts the whole run — a report built from partial data would be
//! meaningless, so nothing is retried.

pub(crate) mod types;

use std::error::Error;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::{Auth, Config};
use types::{IssuesResponse, MeasuresResponse, QualityGateResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Metric keys requested from /api/measures/component.
const METRIC_KEYS: &str =
    "coverage,bugs,vulnerabilities,code_smells,duplicated_lines_density,lines,lines_to_cover";

/// Page size for /api/issues/search. Only the first page is fetched: above
/// this many unresolved issues, `total` still reflects the server count but
/// detailed issues and severity counts cover the first page only.
const ISSUES_PAGE_SIZE: u32 = 500;

/// Authenticated client bound to one host and project key.
pub struct SonarClient {
    host: String,
    auth: Auth,
    project_key: String,
    http: reqwest::blocking::Client,
}

impl SonarClient {
    pub fn new(config: &Config) -> Result<SonarClient, Box<dyn Error>> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(SonarClient {
            host: config.host.clone(),
            auth: config.auth.clone(),
            project_key: config.project_key.clone(),
            http,
        })
    }

    /// Quality gate status and threshold conditions for the project.
    pub fn fetch_quality_gate(&self) -> Result<QualityGateResponse, Box<dyn Error>> {
        self.get(
            "/api/qualitygates/project_status",
            &[("projectKey", self.project_key.as_str())],
        )
    }

    /// Aggregate measures for the fixed metric-key list.
    pub fn fetch_measures(&self) -> Result<MeasuresResponse, Box<dyn Error>> {
        self.get(
            "/api/measures/component",
            &[
                ("component", self.project_key.as_str()),
                ("metricKeys", METRIC_KEYS),
            ],
        )
    }

    /// First page of unresolved issues for the project.
    pub fn fetch_issues(&self) -> Result<IssuesResponse, Box<dyn Error>> {
        let page_size = ISSUES_PAGE_SIZE.to_string();
        self.get(
            "/api/issues/search",
            &[
                ("projectKeys", self.project_key.as_str()),
                ("resolved", "false"),
                ("ps", page_size.as_str()),
            ],
        )
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, Box<dyn Error>> {
        let url = format!("{}{endpoint}", self.host);
        let request = self.http.get(&url).query(params);
        let request = match &self.auth {
            // Token auth is the token as username with an empty password.
            Auth::Token(token) => request.basic_auth(token, Some("")),
            Auth::Basic { user, password } => request.basic_auth(user, Some(password)),
        };

        let resp = request.send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(format!("SonarQube API error ({status}) on {endpoint}: {body}").into());
        }

        Ok(resp.json()?)
    }
}
