use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Incoming body of `POST /summarize`. A missing or `null` `text` field is
/// read as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarizationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SummarizationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True when the text has nothing left after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A single task attributed to a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub person: String,
    pub task: String,
}

impl ActionItem {
    /// Splits a `"Person: Task"` string on its first colon.
    ///
    /// Returns `None` when there is no colon or either side is empty.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (person, task) = raw.split_once(':')?;
        let person = person.trim();
        let task = task.trim();
        if person.is_empty() || task.is_empty() {
            return None;
        }
        Some(Self {
            person: person.to_string(),
            task: task.to_string(),
        })
    }
}

/// Action items in the shape produced by the active output mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionItems {
    /// Strict-JSON mode: flat `"Person: Task"` strings.
    #[serde(rename = "actionItems")]
    List(Vec<String>),
    /// Heuristic mode: tasks bucketed by person.
    #[serde(rename = "assigned")]
    Assigned(BTreeMap<String, Vec<String>>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationResult {
    pub summary: String,
    #[serde(flatten)]
    pub action_items: ActionItems,
}

impl SummarizationResult {
    pub fn with_list(summary: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            action_items: ActionItems::List(items),
        }
    }

    pub fn with_assigned(
        summary: impl Into<String>,
        assigned: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            summary: summary.into(),
            action_items: ActionItems::Assigned(assigned),
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        match &self.action_items {
            ActionItems::List(items) => items.len(),
            ActionItems::Assigned(map) => map.values().map(Vec::len).sum(),
        }
    }

    /// Tasks grouped by person regardless of mode. List items that do not
    /// split into a non-empty person and task are skipped.
    #[must_use]
    pub fn grouped_by_person(&self) -> BTreeMap<String, Vec<String>> {
        match &self.action_items {
            ActionItems::Assigned(map) => map.clone(),
            ActionItems::List(items) => {
                let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
                for item in items.iter().filter_map(|raw| ActionItem::parse(raw)) {
                    grouped.entry(item.person).or_default().push(item.task);
                }
                grouped
            }
        }
    }

    /// Plain-text rendering used by the page's "Copy" button.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = Vec::new();
        if !self.summary.is_empty() {
            out.push(format!("Summary:\n{}", self.summary));
        }

        let grouped = self.grouped_by_person();
        if grouped.values().any(|tasks| !tasks.is_empty()) {
            out.push("\nAction Items:".to_string());
            for (person, tasks) in &grouped {
                for task in tasks {
                    out.push(format!("- {person}: {task}"));
                }
            }
        }

        out.join("\n")
    }
}
