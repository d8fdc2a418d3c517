//! Tests for OData plumbing

use super::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn test_discriminator_of_present() {
    let value = json!({"@odata.type": "#microsoft.graph.sitePage", "title": "Home"});
    assert_eq!(discriminator_of(&value), Some("#microsoft.graph.sitePage"));
}

#[test]
fn test_discriminator_of_absent() {
    assert_eq!(discriminator_of(&json!({"title": "Home"})), None);
}

#[test]
fn test_discriminator_of_non_object() {
    assert_eq!(discriminator_of(&json!("#microsoft.graph.sitePage")), None);
    assert_eq!(discriminator_of(&json!(null)), None);
    assert_eq!(discriminator_of(&json!([1, 2])), None);
}

#[test]
fn test_discriminator_of_non_string() {
    assert_eq!(discriminator_of(&json!({"@odata.type": 42})), None);
}

#[test]
fn test_collection_deserialize() {
    let body = json!({
        "@odata.context": "https://graph.microsoft.com/beta/$metadata#sites",
        "@odata.nextLink": "https://graph.microsoft.com/beta/sites?$skiptoken=abc",
        "@odata.count": 2,
        "value": [{"id": "1"}, {"id": "2"}]
    });

    let collection: Collection<Value> = from_json_value(body).unwrap();
    assert_eq!(collection.value.len(), 2);
    assert_eq!(collection.count, Some(2));
    assert!(collection.has_next_page());
    assert_eq!(
        collection.next_link.as_deref(),
        Some("https://graph.microsoft.com/beta/sites?$skiptoken=abc")
    );
}

#[test]
fn test_collection_missing_value_defaults_empty() {
    let collection: Collection<Value> = from_json_str("{}").unwrap();
    assert!(collection.value.is_empty());
    assert!(!collection.has_next_page());
}

#[test]
fn test_collection_preserves_unknown_annotations() {
    let body = json!({
        "value": [],
        "@odata.deltaLink": "https://graph.microsoft.com/beta/sites/delta?token=x",
        "@microsoft.graph.tips": "use $select"
    });

    let collection: Collection<Value> = from_json_value(body.clone()).unwrap();
    assert_eq!(
        collection.additional_data.get("@microsoft.graph.tips"),
        Some(&json!("use $select"))
    );

    let round_tripped = to_json_value(&collection).unwrap();
    assert_eq!(round_tripped, body);
}

#[test]
fn test_from_json_str_invalid() {
    let err = from_json_str::<Collection<Value>>("{oops").unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse JSON:"));
}

#[test]
fn test_from_json_value_wrong_shape() {
    let err = from_json_value::<Collection<Value>>(json!("not an envelope")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to decode model:"));
}
