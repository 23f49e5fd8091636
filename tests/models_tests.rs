use recap::core::models::{ActionItem, SummarizationRequest, SummarizationResult};
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn test_request_missing_text_reads_as_blank() {
    let request: SummarizationRequest = serde_json::from_value(json!({})).unwrap();
    assert!(request.is_blank());

    let request = SummarizationRequest::new(" \n\t ");
    assert!(request.is_blank());

    let request = SummarizationRequest::new("Alice: hi");
    assert!(!request.is_blank());
}

#[test]
fn test_request_null_text_reads_as_blank() {
    let request: SummarizationRequest = serde_json::from_value(json!({"text": null})).unwrap();
    assert!(request.is_blank());

    let request: SummarizationRequest = serde_json::from_value(json!({"text": "hi"})).unwrap();
    assert_eq!(request.text, "hi");

    assert!(serde_json::from_value::<SummarizationRequest>(json!({"text": 42})).is_err());
}

#[test]
fn test_action_item_parse_splits_on_first_colon() {
    assert_eq!(
        ActionItem::parse("Alice: meet at 10:30"),
        Some(ActionItem {
            person: "Alice".to_string(),
            task: "meet at 10:30".to_string()
        })
    );
    assert_eq!(ActionItem::parse("no colon here"), None);
    assert_eq!(ActionItem::parse(": orphan task"), None);
    assert_eq!(ActionItem::parse("Bob:   "), None);
}

#[test]
fn test_list_result_serializes_with_action_items_key() {
    let result = SummarizationResult::with_list("S", vec!["Alice: buy milk".to_string()]);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"summary": "S", "actionItems": ["Alice: buy milk"]})
    );
}

#[test]
fn test_assigned_result_serializes_with_assigned_key() {
    let mut map = BTreeMap::new();
    map.insert("Bob".to_string(), vec!["update docs".to_string()]);
    map.insert("Alice".to_string(), Vec::new());
    let result = SummarizationResult::with_assigned("Met today.", map);

    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"summary":"Met today.","assigned":{"Alice":[],"Bob":["update docs"]}}"#
    );
}

#[test]
fn test_result_deserializes_either_shape() {
    let list: SummarizationResult =
        serde_json::from_value(json!({"summary": "S", "actionItems": ["---: x"]})).unwrap();
    assert_eq!(list, SummarizationResult::with_list("S", vec!["---: x".to_string()]));

    let assigned: SummarizationResult =
        serde_json::from_value(json!({"summary": "S", "assigned": {"Bob": ["x"]}})).unwrap();
    assert_eq!(assigned.item_count(), 1);
}

#[test]
fn test_grouped_by_person_from_list() {
    let result = SummarizationResult::with_list(
        "S",
        vec![
            "Alice: buy milk".to_string(),
            "---: call client".to_string(),
            "Alice: book room".to_string(),
            "malformed".to_string(),
        ],
    );
    let grouped = result.grouped_by_person();

    assert_eq!(grouped["Alice"], vec!["buy milk", "book room"]);
    assert_eq!(grouped["---"], vec!["call client"]);
    assert_eq!(grouped.len(), 2);
}

#[test]
fn test_to_plain_text() {
    let result = SummarizationResult::with_list(
        "We planned the launch.",
        vec!["Bob: update docs".to_string(), "Alice: send invite".to_string()],
    );
    assert_eq!(
        result.to_plain_text(),
        "Summary:\nWe planned the launch.\n\nAction Items:\n- Alice: send invite\n- Bob: update docs"
    );

    let empty = SummarizationResult::with_assigned("Quiet week.", BTreeMap::new());
    assert_eq!(empty.to_plain_text(), "Summary:\nQuiet week.");
}
