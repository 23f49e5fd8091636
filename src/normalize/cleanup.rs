//! Text cleanup shared by both normalization modes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Mis-decoded UTF-8 sequences models (and copy/paste) leave in bullet lists.
const MOJIBAKE: [(&str, &str); 4] = [("â€¢", "•"), ("â€“", "-"), ("â€”", "-"), ("Â·", "•")];

/// Strips markdown emphasis, normalizes line endings and repairs encoding
/// artifacts around bullet characters.
#[must_use]
pub fn clean_artifacts(raw: &str) -> String {
    let mut text = raw.replace("\r\n", "\n").replace("**", "");
    for (broken, fixed) in MOJIBAKE {
        text = text.replace(broken, fixed);
    }
    text.replace(['\u{00A0}', '\u{202F}', '\u{2007}'], " ")
}

/// Returns the body of the first fenced block (```` ```json ... ``` ````), or
/// the trimmed input when there is no fence. An opening fence with no closing
/// one is dropped on its own.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    static FENCED_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\n?(.*?)```").expect("static regex compile")
    });
    static OPENING_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*\n?").expect("static regex compile"));

    if let Some(inner) = FENCED_RE.captures(text).and_then(|c| c.get(1)) {
        return inner.as_str().trim();
    }

    let trimmed = text.trim();
    match OPENING_RE.find(trimmed) {
        Some(open) => trimmed[open.end()..].trim(),
        None => trimmed,
    }
}

/// The span from the first `{` to the last `}`, for JSON wrapped in prose.
#[must_use]
pub fn embedded_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_artifacts_strips_emphasis_and_repairs_bullets() {
        let raw = "**Summary**\r\nâ€¢ Bob:\u{00A0}update docs";
        assert_eq!(clean_artifacts(raw), "Summary\n• Bob: update docs");
    }

    #[test]
    fn test_strip_code_fence_labeled_json() {
        let raw = "```json\n{\"summary\":\"S\"}\n```";
        assert_eq!(strip_code_fence(raw), "{\"summary\":\"S\"}");
    }

    #[test]
    fn test_strip_code_fence_uppercase_label_and_surrounding_prose() {
        let raw = "Here you go:\n```JSON\n{\"a\":1}\n```\nHope that helps";
        assert_eq!(strip_code_fence(raw), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fence_unterminated() {
        let raw = "```json\n{\"a\":1}";
        assert_eq!(strip_code_fence(raw), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fence_without_fence_only_trims() {
        assert_eq!(strip_code_fence("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn test_embedded_object() {
        assert_eq!(
            embedded_object("Sure! {\"a\":{\"b\":1}} done"),
            Some("{\"a\":{\"b\":1}}")
        );
        assert_eq!(embedded_object("no braces"), None);
        assert_eq!(embedded_object("} backwards {"), None);
    }
}
