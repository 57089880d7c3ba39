// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # CST offset utilities
//!
//! Range tests and prefix extraction shared by the completion scenarios.
//! All ranges are inclusive at both ends and all offsets count characters.

use xml_assist_cst::{ContentPart, Token};

/// Check `start <= offset <= end + 1`
///
/// A cursor right behind the last character of a token still "touches" it.
pub fn token_touches(token: &Token, offset: usize) -> bool {
    token.start_offset <= offset && offset <= token.end_offset + 1
}

/// First `count` characters of `text`
///
/// Clamps to the text length.
pub fn truncate_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// Characters `1..end` of a quoted image, i.e. the value typed so far
/// without its opening quote
pub fn strip_quote_prefix(image: &str, end: usize) -> String {
    image.chars().take(end).skip(1).collect()
}

/// Map an empty prefix to `None`
pub fn non_empty(prefix: String) -> Option<String> {
    if prefix.is_empty() { None } else { Some(prefix) }
}

/// Content child hit by an offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentHit {
    /// The n-th chardata child of the content node
    Chardata(usize),
    /// Any other child kind (element, comment, CDATA, reference, PI)
    Other,
}

/// Find the content child whose location contains `offset`
pub fn locate_content_part(parts: &[ContentPart], offset: usize) -> Option<ContentHit> {
    let mut chardata_index = 0;
    for part in parts {
        if part.location().contains(offset) {
            return Some(if part.is_chardata() {
                ContentHit::Chardata(chardata_index)
            } else {
                ContentHit::Other
            });
        }
        if part.is_chardata() {
            chardata_index += 1;
        }
    }
    None
}
