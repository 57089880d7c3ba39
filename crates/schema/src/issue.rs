// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Validation findings

use serde::Serialize;
use xml_assist_ast::{Position, XmlAttribute, XmlElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// AST node an issue is reported on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IssueNode<'a> {
    Element(&'a XmlElement),
    Attribute(&'a XmlAttribute),
}

impl IssueNode<'_> {
    pub fn position(&self) -> Position {
        match self {
            IssueNode::Element(elem) => elem.position,
            IssueNode::Attribute(attr) => attr.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue<'a> {
    pub msg: String,
    pub node: IssueNode<'a>,
    pub severity: Severity,
}

impl<'a> ValidationIssue<'a> {
    pub fn error(msg: impl Into<String>, node: IssueNode<'a>) -> Self {
        Self {
            msg: msg.into(),
            node,
            severity: Severity::Error,
        }
    }
}
