// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Offset-matching rules for each completion scenario
//!
//! Each rule inspects a single CST node and its aligned AST node and returns a
//! context only when the offset falls in its grammatical slot. Tokens inserted
//! by error recovery never match.

use tracing::trace;
use xml_assist_ast::{XmlAttribute, XmlElement};
use xml_assist_cst::{AttributeCst, ElementCst, present};

use crate::completion::CompletionContext;
use crate::cst_utils::{
    ContentHit, locate_content_part, non_empty, strip_quote_prefix, token_touches,
    truncate_chars,
};

/// `<⇶` - the cursor sits right behind the opening `<`
pub(crate) fn element_name_without_prefix<'a>(
    cst: &ElementCst,
    element: &'a XmlElement,
    offset: usize,
) -> Option<CompletionContext<'a>> {
    let open = present(&cst.open)?;
    if open.end_offset + 1 != offset {
        return None;
    }

    trace!(offset, "Element name scenario without prefix");
    Some(CompletionContext::element_name(element, None))
}

/// `<pe⇶` - the cursor is inside or right behind a partial element name
pub(crate) fn element_name_with_prefix<'a>(
    cst: &ElementCst,
    element: &'a XmlElement,
    offset: usize,
) -> Option<CompletionContext<'a>> {
    let name = present(&cst.name)?;
    if !(name.start_offset < offset && offset <= name.end_offset + 1) {
        return None;
    }

    let prefix = truncate_chars(&name.image, offset - name.start_offset);
    trace!(offset, %prefix, "Element name scenario with prefix");
    Some(CompletionContext::element_name(element, Some(prefix)))
}

/// Cursor inside the value or on the key of an existing attribute
pub(crate) fn attribute<'a>(
    cst: &AttributeCst,
    element: &'a XmlElement,
    attribute: &'a XmlAttribute,
    offset: usize,
) -> Option<CompletionContext<'a>> {
    // Inside the quotes: `name="ti⇶"`
    let value_match = present(&cst.string)
        .filter(|value| value.start_offset < offset && offset <= value.end_offset)
        .map(|value| {
            let prefix = strip_quote_prefix(&value.image, offset - value.start_offset);
            trace!(offset, %prefix, "Attribute value scenario");
            CompletionContext::attribute_value(element, attribute, non_empty(prefix))
        });

    // On the key: `na⇶me="tim"` or `name⇶="tim"`
    value_match.or_else(|| {
        present(&cst.name)
            .filter(|key| token_touches(key, offset))
            .map(|key| {
                let prefix = truncate_chars(&key.image, offset - key.start_offset);
                trace!(offset, %prefix, "Attribute name scenario");
                CompletionContext::attribute_name(element, Some(attribute), non_empty(prefix))
            })
    })
}

/// `<person name="x" ⇶>` - a brand new attribute in the tag body
///
/// Only consulted after the attribute rule failed for every existing
/// attribute; on its own it cannot tell `<person gen⇶>` (editing `gen`) from
/// `<person gen="Y"⇶>` (starting a new attribute).
pub(crate) fn new_attribute_key<'a>(
    cst: &ElementCst,
    element: &'a XmlElement,
    offset: usize,
) -> Option<CompletionContext<'a>> {
    let name = present(&cst.name)?;
    // Only a terminated tag body has a known extent.
    let close = present(&cst.start_close).or_else(|| present(&cst.slash_close))?;

    let from = name.end_offset + 1;
    let to = close.start_offset;
    if !(from <= offset && offset <= to) {
        return None;
    }

    let in_existing_attribute = element
        .attributes
        .iter()
        .any(|attr| attr.position.contains(offset));
    if in_existing_attribute {
        return None;
    }

    trace!(offset, "New attribute key scenario");
    Some(CompletionContext::attribute_name(element, None, None))
}

/// Cursor in the body of an element between `>` and `</` (or `/>`)
///
/// The child containing `offset - 1` decides the prefix: `abc⇶` continues
/// `abc` while `⇶abc` starts from scratch.
pub(crate) fn element_content<'a>(
    cst: &ElementCst,
    element: &'a XmlElement,
    offset: usize,
) -> Option<CompletionContext<'a>> {
    let start_close = present(&cst.start_close)?;
    let close = present(&cst.slash_open).or_else(|| present(&cst.slash_close))?;

    let from = start_close.end_offset + 1;
    let to = close.start_offset;
    if !(from <= offset && offset <= to) {
        return None;
    }

    let parts = cst
        .content
        .as_ref()
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    // `from >= 1`, so this cannot underflow.
    match locate_content_part(parts, offset - 1) {
        None => {
            trace!(offset, "Element content scenario without prefix");
            Some(CompletionContext::element_content(element, None, None))
        }
        Some(ContentHit::Chardata(idx)) => {
            let text = element.text_contents.get(idx)?;
            let prefix_len = offset.saturating_sub(text.position.start_offset);
            let prefix = truncate_chars(&text.text, prefix_len);
            trace!(offset, %prefix, "Element content scenario with prefix");
            Some(CompletionContext::element_content(
                element,
                Some(text),
                Some(prefix),
            ))
        }
        Some(ContentHit::Other) => None,
    }
}
