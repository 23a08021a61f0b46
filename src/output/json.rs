use crate::errors::Result;
use crate::report::CorpusSummary;

/// Serialize the summary as pretty-printed JSON.
pub fn format_summary_json(summary: &CorpusSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
