use super::*;

use serde_json::json;

#[test]
fn test_decode_well_formed_payload() {
    let raw = json!({
        "takeaways": [
            {
                "id": "T1",
                "title": "Interoception as a sixth sense",
                "claim": "Internal bodily signals are integrated into a felt sense of state.",
                "scope_keywords": ["interoception", "bodily signals"],
                "approx_page_range": "p38-42"
            }
        ]
    })
    .to_string();

    let payload = decode(&raw).unwrap();
    assert_eq!(payload.len(), 1);
    assert!(!payload.is_empty());
    assert!(payload.takeaways()[0].is_object());
}

#[test]
fn test_decode_preserves_record_order() {
    let raw = json!({
        "takeaways": [
            {"id": "T1"},
            {"id": "T2"},
            {"id": "T3"}
        ]
    })
    .to_string();

    let payload = decode(&raw).unwrap();
    let ids: Vec<_> = payload
        .takeaways()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["T1", "T2", "T3"]);
}

#[test]
fn test_decode_empty_takeaways_is_structurally_valid() {
    // Cardinality is the validator's rule, not the parser's.
    let payload = decode(r#"{"takeaways": []}"#).unwrap();
    assert!(payload.is_empty());
}

#[test]
fn test_rejects_invalid_json() {
    let err = decode("not valid json {").unwrap_err();
    assert!(matches!(err, PayloadError::Json(_)));
}

#[test]
fn test_rejects_truncated_json() {
    let err = decode(r#"{"takeaways": [{"id": "T1""#).unwrap_err();
    assert!(matches!(err, PayloadError::Json(_)));
}

#[test]
fn test_rejects_array_root() {
    let err = decode(r#"[{"takeaways": []}]"#).unwrap_err();
    assert!(matches!(err, PayloadError::RootNotObject));
}

#[test]
fn test_rejects_scalar_root() {
    let err = decode(r#""takeaways""#).unwrap_err();
    assert!(matches!(err, PayloadError::RootNotObject));
}

#[test]
fn test_rejects_missing_takeaways_field() {
    let err = decode(r#"{"records": []}"#).unwrap_err();
    assert!(matches!(err, PayloadError::MissingTakeaways));
}

#[test]
fn test_rejects_non_array_takeaways() {
    let err = decode(r#"{"takeaways": {"id": "T1"}}"#).unwrap_err();
    assert!(matches!(err, PayloadError::TakeawaysNotArray));

    let err = decode(r#"{"takeaways": "T1"}"#).unwrap_err();
    assert!(matches!(err, PayloadError::TakeawaysNotArray));
}
