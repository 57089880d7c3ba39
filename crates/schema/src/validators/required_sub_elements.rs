// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use xml_assist_ast::{XmlDocument, XmlElement};

use crate::issue::{IssueNode, ValidationIssue};
use crate::schema::SchemaElement;

/// Report every required sub-element of `schema` missing from `elem`
///
/// `doc` is the document owning `elem`; sub-elements are resolved through it.
pub fn validate_required_sub_elements<'a>(
    doc: &'a XmlDocument,
    elem: &'a XmlElement,
    schema: &SchemaElement,
) -> Vec<ValidationIssue<'a>> {
    let actual: Vec<&str> = doc
        .sub_elements(elem)
        .filter_map(|sub| sub.name.as_deref())
        .collect();

    schema
        .elements
        .iter()
        .filter(|sub| sub.required && !actual.contains(&sub.name.as_str()))
        .map(|sub| {
            ValidationIssue::error(
                format!("Missing Required Sub-Element: <{}>", sub.name),
                IssueNode::Element(elem),
            )
        })
        .collect()
}
