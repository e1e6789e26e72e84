//! JSON shape of records as returned to callers.

use cardnum::*;
use serde_json::json;

#[test]
fn validation_view_omits_number() {
    let view = from_number("1234567890123452").unwrap().serialized(false);
    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "major_industry_identifier": "1",
            "issuer_identification_number": "123456",
            "personal_account_number": "789012345",
            "check_digit": "2",
            "is_valid": true
        })
    );
}

#[test]
fn generation_view_includes_number() {
    let card = NumberGenerator::with_source(CycleDigits::new([0]))
        .generate("45")
        .unwrap();
    let value = serde_json::to_value(card.serialized(true)).unwrap();
    assert_eq!(value["number"], "4500000000000007");
    assert_eq!(value["check_digit"], "7");
    assert_eq!(value["is_valid"], true);
}

#[test]
fn placeholder_view_has_null_fields() {
    let view = CardRecord::with_invalid_number("1234567890123456").serialized(false);
    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "major_industry_identifier": null,
            "issuer_identification_number": null,
            "personal_account_number": null,
            "check_digit": null,
            "is_valid": false
        })
    );
}

#[test]
fn view_deserializes_without_number() {
    let view: RecordView = serde_json::from_str(
        r#"{"major_industry_identifier":"4","issuer_identification_number":"450349",
            "personal_account_number":"545553227","check_digit":"1","is_valid":true}"#,
    )
    .unwrap();
    assert_eq!(view, from_number("4503495455532271").unwrap().serialized(false));
}

#[test]
fn number_record_serializes_all_fields() {
    let card = from_number("4503495455532271").unwrap();
    let value = serde_json::to_value(&card).unwrap();
    assert_eq!(value["number"], "4503495455532271");
    assert_eq!(value["personal_account_number"], "545553227");
}

// ---------------------------------------------------------------------------
// Snapshot tests (insta)
// ---------------------------------------------------------------------------

#[test]
fn snapshot_valid_view() {
    let view = from_number("4503495455532271").unwrap().serialized(false);
    let json = serde_json::to_string_pretty(&view).unwrap();
    insta::assert_snapshot!("valid_view", json);
}

#[test]
fn snapshot_placeholder_view() {
    let view = CardRecord::parse("1234567890123456").serialized(false);
    let json = serde_json::to_string_pretty(&view).unwrap();
    insta::assert_snapshot!("placeholder_view", json);
}
