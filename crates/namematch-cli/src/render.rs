//! Result rendering.

use namematch_core::MatchResult;

use crate::config::OutputFormat;
use crate::error::Result;

pub fn render(result: &MatchResult, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => format!(
            "{:>3}% {} ({:?} vs {:?})",
            result.percentage, result.remark, result.input_name, result.given_name
        ),
        OutputFormat::Json => serde_json::to_string(result)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(result)?,
    };
    Ok(rendered)
}
