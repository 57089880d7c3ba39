// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use xml_assist_ast::XmlElement;

use crate::issue::{IssueNode, ValidationIssue};
use crate::schema::SchemaElement;

/// Report every required attribute of `schema` missing from `elem`
///
/// Issues follow the declaration order of the schema.
pub fn validate_required_attributes<'a>(
    elem: &'a XmlElement,
    schema: &SchemaElement,
) -> Vec<ValidationIssue<'a>> {
    schema
        .attributes
        .iter()
        .filter(|attr| attr.required)
        .filter(|attr| elem.attribute(&attr.key).is_none())
        .map(|attr| {
            ValidationIssue::error(
                format!("Missing Required Attribute: <{}>", attr.key),
                IssueNode::Element(elem),
            )
        })
        .collect()
}
