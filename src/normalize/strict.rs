//! Strict-JSON normalization: the reply is expected to be
//! `{"summary": "...", "actionItems": ["Person: Task", ...]}`.

use serde::Deserialize;
use serde_json::Value;

use super::cleanup::{clean_artifacts, embedded_object, strip_code_fence};
use crate::core::models::SummarizationResult;
use crate::errors::RecapError;

/// Person token used for items the model did not attribute to anyone.
pub const PLACEHOLDER_PERSON: &str = "---";

#[derive(Debug, Deserialize)]
struct StrictReply {
    summary: String,
    #[serde(rename = "actionItems")]
    action_items: Vec<Value>,
}

/// Parses a strict-JSON reply.
///
/// # Errors
///
/// Returns `RecapError::ParseError` when neither the reply, its fenced body,
/// nor the object embedded in it deserializes, or an item is neither a string nor a
/// `{person, task}` object.
pub fn parse_strict(raw: &str) -> Result<SummarizationResult, RecapError> {
    let cleaned = clean_artifacts(raw);
    let whole = cleaned.trim();

    // Fences are only looked for once the reply as a whole is not JSON, so
    // backticks inside string values survive.
    let reply: StrictReply = match serde_json::from_str(whole) {
        Ok(reply) => reply,
        Err(first_err) => {
            let unfenced = strip_code_fence(whole);
            serde_json::from_str(unfenced)
                .ok()
                .or_else(|| {
                    embedded_object(unfenced).and_then(|span| serde_json::from_str(span).ok())
                })
                .ok_or(first_err)?
        }
    };

    let mut items = Vec::with_capacity(reply.action_items.len());
    for value in &reply.action_items {
        let text = item_text(value)?;
        if let Some(item) = normalize_item(&text) {
            items.push(item);
        }
    }

    Ok(SummarizationResult::with_list(reply.summary.trim(), items))
}

/// Trims an item and prefixes unattributed ones with the placeholder person.
/// Empty items are dropped.
#[must_use]
pub fn normalize_item(item: &str) -> Option<String> {
    let trimmed = item.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.contains(':') {
        Some(trimmed.to_string())
    } else {
        Some(format!("{PLACEHOLDER_PERSON}: {trimmed}"))
    }
}

fn item_text(value: &Value) -> Result<String, RecapError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Object(obj) => {
            let task = obj
                .get("task")
                .and_then(Value::as_str)
                .ok_or_else(|| RecapError::ParseError("action item object without task".into()))?;
            match obj.get("person").and_then(Value::as_str).map(str::trim) {
                Some(person) if !person.is_empty() => Ok(format!("{person}: {}", task.trim())),
                _ => Ok(task.to_string()),
            }
        }
        other => Err(RecapError::ParseError(format!(
            "unexpected action item: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_item_keeps_attributed_items() {
        assert_eq!(
            normalize_item("  Alice: buy milk "),
            Some("Alice: buy milk".to_string())
        );
    }

    #[test]
    fn test_normalize_item_prefixes_unattributed_items() {
        assert_eq!(
            normalize_item("call client"),
            Some("---: call client".to_string())
        );
        assert_eq!(normalize_item("   "), None);
    }

    #[test]
    fn test_structured_items_are_flattened() {
        let raw = r#"{"summary":"S","actionItems":[{"person":"Cara","task":"email client"},{"task":"book room"}]}"#;
        let result = parse_strict(raw).unwrap();
        assert_eq!(
            result,
            SummarizationResult::with_list(
                "S",
                vec!["Cara: email client".to_string(), "---: book room".to_string()]
            )
        );
    }

    #[test]
    fn test_numeric_item_is_a_parse_error() {
        let raw = r#"{"summary":"S","actionItems":[42]}"#;
        assert!(matches!(parse_strict(raw), Err(RecapError::ParseError(_))));
    }

    #[test]
    fn test_missing_action_items_is_a_parse_error() {
        let raw = r#"{"summary":"S"}"#;
        assert!(matches!(parse_strict(raw), Err(RecapError::ParseError(_))));
    }

    #[test]
    fn test_backticks_inside_values_are_not_fences() {
        let raw = r#"{"summary":"Use ``` fences in docs, e.g. ```rust code```","actionItems":["Bob: fix"]}"#;
        let result = parse_strict(raw).unwrap();
        assert_eq!(
            result,
            SummarizationResult::with_list(
                "Use ``` fences in docs, e.g. ```rust code```",
                vec!["Bob: fix".to_string()]
            )
        );
    }

    #[test]
    fn test_fenced_reply_with_backticks_inside_values() {
        let raw = "```json\n{\"summary\":\"run `cargo fmt`\",\"actionItems\":[]}\n```";
        let result = parse_strict(raw).unwrap();
        assert_eq!(result.summary, "run `cargo fmt`");
    }

    #[test]
    fn test_object_wrapped_in_prose() {
        let raw = "Here is the JSON you asked for:\n{\"summary\":\"S\",\"actionItems\":[\"Bob: ship it\"]}\nLet me know!";
        let result = parse_strict(raw).unwrap();
        assert_eq!(
            result,
            SummarizationResult::with_list("S", vec!["Bob: ship it".to_string()])
        );
    }
}
