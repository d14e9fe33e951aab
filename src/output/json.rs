//! JSON output for scripting.

use super::report::CidrReport;

/// Pretty printed JSON for one report.
pub fn render_json(report: &CidrReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
