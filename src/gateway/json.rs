//! Pull a JSON array out of model output.

use tracing::debug;

/// Narrow model output down to the text that should hold the task array.
///
/// A markdown fence is unwrapped and prose around a bare array is cut away.
/// Empty output reads as `[]`. Output whose top-level value is an object is
/// returned whole, never mined for a nested array, so the caller's parse
/// rejects it.
pub fn extract_json_array(text: &str) -> String {
    let body = unfence(text.trim());

    if body.is_empty() {
        return "[]".to_string();
    }

    let bracket = body.find('[');
    match (bracket, body.find('{')) {
        // Object first: the array, if any, belongs to it.
        (_, Some(brace)) if bracket.is_none_or(|b| brace < b) => {
            debug!(text = body, "Model output is not a top-level array");
            body.to_string()
        }
        (Some(start), _) => match body.rfind(']') {
            Some(end) if end > start => body[start..=end].to_string(),
            _ => body.to_string(),
        },
        _ => {
            debug!(text = body, "No JSON array found in model output");
            body.to_string()
        }
    }
}

/// Inner text of the first fenced block, minus a `json` language tag.
fn unfence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let after = &text[open + 3..];
    let Some(close) = after.find("```") else {
        return text;
    };
    let inner = &after[..close];
    inner.strip_prefix("json").unwrap_or(inner).trim()
}
