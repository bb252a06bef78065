//! Shared output formatting helpers for commands

use scrollkeep_core::error::Result;
use serde_json::json;

/// Dispatch by output format when the JSON branch returns `Result` and the
/// human branch returns `()`.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => print_json(&value),
///     human => { println!("Done"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            scrollkeep_core::format::OutputFormat::Json => $json,
            scrollkeep_core::format::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}

pub use crate::output_by_format_result;

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a JSON status message with extra fields
pub fn print_json_status(status: &str, extra_fields: &[(&str, serde_json::Value)]) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// Shorten text to `max` characters, marking the cut with an ellipsis
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}
