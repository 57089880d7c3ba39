// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! JSON rendering of command results

use serde::Serialize;
use tracing::debug;
use xml_assist_context::compute_completion_context;
use xml_assist_schema::{SchemaValidator, Severity};

use crate::snapshot::Snapshot;

/// Outcome of `validate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub json: String,
    pub issue_count: usize,
    pub has_errors: bool,
}

/// Completion context at `offset` as JSON, `null` when there is none
pub fn render_context(
    snapshot: &Snapshot,
    offset: usize,
    pretty: bool,
) -> serde_json::Result<String> {
    let context = compute_completion_context(&snapshot.cst, &snapshot.ast, offset);
    to_json(&context, pretty)
}

/// Validation issues of the snapshot document as a JSON array
pub fn render_issues(
    snapshot: &Snapshot,
    validator: &SchemaValidator,
    pretty: bool,
) -> serde_json::Result<ValidationReport> {
    let issues = validator.validate_document(&snapshot.ast);
    for issue in &issues {
        let position = issue.node.position();
        debug!(
            start = position.start_offset,
            end = position.end_offset,
            msg = %issue.msg,
            "Validation issue"
        );
    }

    Ok(ValidationReport {
        json: to_json(&issues, pretty)?,
        issue_count: issues.len(),
        has_errors: issues.iter().any(|i| i.severity == Severity::Error),
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
