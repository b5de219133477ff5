//! Report pipeline: fetch → aggregate → render.
//!
//! Linear and single-threaded: the three API resources are fetched
//! sequentially, joined into one immutable `Report`, and every renderer
//! runs over that same value. Renderers never see partial data — any
//! fetch failure aborts before aggregation, and any report-file write
//! failure aborts the run.

mod builder;
mod console;
pub(crate) mod data;
mod html;
mod json;

use std::error::Error;

use crate::api::SonarClient;
use crate::config::Config;

/// Entry point: run the full fetch-and-render cycle for one project.
pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("🔍 Fetching report for project: {}", config.project_key);
    println!("🌐 SonarQube host: {}", config.host);

    let client = SonarClient::new(config)?;

    println!("📊 Fetching quality gate status...");
    let gate = client.fetch_quality_gate()?;

    println!("📈 Fetching measures...");
    let measures = client.fetch_measures()?;

    println!("🔎 Fetching issues...");
    let issues = client.fetch_issues()?;

    let report = builder::build_report(config, gate, measures, issues);

    json::write_json(&report, &config.json_output)?;
    html::write_html(&report, &config.html_output)?;

    console::print_chat_summary(&report);
    console::print_email_summary(&report);
    console::print_detailed_issues(&report);
    console::print_success();

    Ok(())
}
