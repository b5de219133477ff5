use std::error::Error;
use std::fs;
use std::path::Path;

use super::data::Report;

/// Write the report as pretty-printed JSON. A write failure is fatal: the
/// report file was promised to the caller.
pub fn write_json(report: &Report, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    println!("📄 JSON report saved to: {}", path.display());
    Ok(())
}
