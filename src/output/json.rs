// JSON rendering of an analysis report (`--json`).

use crate::pipeline::analysis::AnalysisReport;

/// Render the report as pretty-printed JSON.
///
/// Rankings serialize as arrays of `[word, score]` pairs, best first.
pub fn render(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
