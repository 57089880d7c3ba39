// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! End-to-end tests over snapshot JSON

use serde_json::Value;
use xml_assist_cli::{Snapshot, render_context, render_issues};
use xml_assist_schema::{SchemaElement, SchemaValidator};
use xml_assist_test_utils::{XmlFixtures, read_fixture, read_fixture_with_cursor};

fn snapshot(source: &str) -> Snapshot {
    Snapshot::from_json_str(&read_fixture(source).to_snapshot_json()).unwrap()
}

fn person_validator() -> SchemaValidator {
    SchemaValidator::new(SchemaElement::from_yaml_str(XmlFixtures::person_schema_yaml()).unwrap())
}

#[test]
fn test_context_attribute_value() {
    let json = render_context(&snapshot(XmlFixtures::note()), 43, false).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["providerType"], "attributeValue");
    assert_eq!(value["providerArgs"]["prefix"], "ti");
    assert_eq!(value["providerArgs"]["attribute"]["key"], "name");
    assert_eq!(value["providerArgs"]["element"]["name"], "from");
}

#[test]
fn test_context_with_cursor_marker() {
    let (fixture, offset) = read_fixture_with_cursor("<person>\n  <em⇶\n</person>");
    let snapshot = Snapshot::from_json_str(&fixture.to_snapshot_json()).unwrap();
    let value: Value =
        serde_json::from_str(&render_context(&snapshot, offset, false).unwrap()).unwrap();

    assert_eq!(value["providerType"], "elementName");
    assert_eq!(value["providerArgs"]["prefix"], "em");
}

#[test]
fn test_context_in_prolog_is_null() {
    let json = render_context(&snapshot(XmlFixtures::note_with_prolog()), 5, false).unwrap();
    assert_eq!(json, "null");
}

#[test]
fn test_pretty_output_is_multiline() {
    let json = render_context(&snapshot(XmlFixtures::note()), 43, true).unwrap();
    assert!(json.contains('\n'));
}

#[test]
fn test_validate_person() {
    let report = render_issues(&snapshot(XmlFixtures::person()), &person_validator(), false).unwrap();
    let value: Value = serde_json::from_str(&report.json).unwrap();

    assert_eq!(report.issue_count, 2);
    assert!(report.has_errors);
    assert_eq!(value[0]["msg"], "Missing Required Attribute: <id>");
    assert_eq!(value[0]["severity"], "error");
    assert_eq!(value[0]["node"]["name"], "person");
    assert_eq!(value[1]["msg"], "Missing Required Sub-Element: <phone>");
}

#[test]
fn test_validate_clean_document() {
    let source = "<person name=\"a\" id=\"1\" age=\"3\"><email/><phone/></person>";
    let report = render_issues(&snapshot(source), &person_validator(), false).unwrap();

    assert_eq!(report.json, "[]");
    assert_eq!(report.issue_count, 0);
    assert!(!report.has_errors);
}
