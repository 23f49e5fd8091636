//! Heuristic-text normalization: prose summary, an `Action Items:` marker,
//! then one bullet per task. Tasks are bucketed by which configured
//! participant the line mentions.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use super::cleanup::clean_artifacts;
use crate::core::models::SummarizationResult;
use crate::errors::RecapError;

pub const ACTION_ITEMS_MARKER: &str = "Action Items:";

// One bullet glyph or list number, then whitespace. "---:" is a person token.
static BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*•–]|\d+[.)])(?:\s+|$)").expect("static regex compile")
});

// Item separators: newlines, inline `•`, and a dash with space on both sides.
static SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n|•|[ \t]+[-–][ \t]+").expect("static regex compile"));

struct Participant {
    name: String,
    needle: String,
    prefix: Regex,
}

pub struct HeuristicParser {
    participants: Vec<Participant>,
    catch_all: String,
    catch_all_prefix: Regex,
}

impl HeuristicParser {
    /// # Errors
    ///
    /// Returns `RecapError::ConfigError` if no participants are given or a
    /// prefix pattern cannot be built from them.
    pub fn new(participants: &[String], catch_all: &str) -> Result<Self, RecapError> {
        if participants.is_empty() {
            return Err(RecapError::ConfigError(
                "heuristic mode needs at least one participant".into(),
            ));
        }

        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|e| RecapError::ConfigError(format!("bad pattern: {e}")))
        };

        let parsed = participants
            .iter()
            .map(|name| -> Result<Participant, RecapError> {
                Ok(Participant {
                    name: name.clone(),
                    needle: name.to_lowercase(),
                    prefix: compile(format!(r"(?i)^{}\s*:\s*", regex::escape(name)))?,
                })
            })
            .collect::<Result<Vec<_>, RecapError>>()?;

        // "(and )?(alice|bob):" generalized to any configured name list, also
        // accepting "Alice and Bob:" / "Alice, Bob:" and the bucket's own name.
        let alternatives = participants
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(catch_all))
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let catch_all_prefix = compile(format!(
            r"(?i)^(?:and\s+)?(?:{alternatives})(?:\s*(?:,|&|\band\b)\s*(?:{alternatives}))*\s*:\s*"
        ))?;

        Ok(Self {
            participants: parsed,
            catch_all: catch_all.to_string(),
            catch_all_prefix,
        })
    }

    #[must_use]
    pub fn participant_names(&self) -> Vec<&str> {
        self.participants.iter().map(|p| p.name.as_str()).collect()
    }

    /// Splits the reply into summary and bucketed tasks. Never fails: a reply
    /// without the marker is all summary.
    #[must_use]
    pub fn parse(&self, raw: &str) -> SummarizationResult {
        let cleaned = clean_artifacts(raw);
        let (summary, block) = split_on_marker(&cleaned);

        let mut assigned: BTreeMap<String, Vec<String>> = self
            .participants
            .iter()
            .map(|p| (p.name.clone(), Vec::new()))
            .collect();
        assigned.entry(self.catch_all.clone()).or_default();

        for line in item_lines(block) {
            if let Some((bucket, task)) = self.assign(&line) {
                assigned.entry(bucket).or_default().push(task);
            }
        }

        SummarizationResult::with_assigned(summary, assigned)
    }

    fn assign(&self, line: &str) -> Option<(String, String)> {
        let lower = line.to_lowercase();
        let mentioned: Vec<&Participant> = self
            .participants
            .iter()
            .filter(|p| lower.contains(&p.needle))
            .collect();

        let (bucket, task) = match mentioned.as_slice() {
            [only] => (only.name.clone(), only.prefix.replace(line, "")),
            _ => (self.catch_all.clone(), self.catch_all_prefix.replace(line, "")),
        };

        let task = task.trim();
        (!task.is_empty()).then(|| (bucket, task.to_string()))
    }
}

/// Everything before the first (case-insensitive) marker is the summary,
/// everything after is the item block.
fn split_on_marker(text: &str) -> (&str, &str) {
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    match lower.find(&ACTION_ITEMS_MARKER.to_ascii_lowercase()) {
        Some(idx) => (
            text[..idx].trim(),
            &text[idx + ACTION_ITEMS_MARKER.len()..],
        ),
        None => (text.trim(), ""),
    }
}

/// Non-empty lines of the item block with bullet markers removed. Lines are
/// split on newlines, inline `•` and inline ` - `; hyphens inside words are kept.
fn item_lines(block: &str) -> Vec<String> {
    SPLIT_RE
        .split(block)
        .map(|piece| BULLET_RE.replace(piece, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
