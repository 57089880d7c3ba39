// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Cursor marker handling for content-assist test cases
//!
//! Test snippets mark the cursor with `⇶`, e.g. `<person name="ti⇶m"/>`.

use crate::fixture_reader::{XmlFixture, read_fixture};

/// Marker standing for the cursor in test snippets
pub const CURSOR_MARKER: char = '⇶';

/// Character offset of the cursor marker, if present
pub fn get_cursor_offset(source: &str) -> Option<usize> {
    source.chars().position(|c| c == CURSOR_MARKER)
}

/// Source with every cursor marker removed
pub fn remove_cursor_marker(source: &str) -> String {
    source.chars().filter(|&c| c != CURSOR_MARKER).collect()
}

/// Read a snippet containing exactly one cursor marker
///
/// Returns the fixture built from the source without the marker, and the
/// marker's offset.
///
/// # Panics
///
/// Panics if the snippet has no cursor marker.
pub fn read_fixture_with_cursor(source: &str) -> (XmlFixture, usize) {
    let offset = get_cursor_offset(source)
        .unwrap_or_else(|| panic!("missing cursor marker '{CURSOR_MARKER}' in {source:?}"));
    let fixture = read_fixture(&remove_cursor_marker(source));
    (fixture, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_offset_counts_chars() {
        assert_eq!(get_cursor_offset("<a>é⇶</a>"), Some(4));
        assert_eq!(get_cursor_offset("<a/>"), None);
    }

    #[test]
    fn test_remove_cursor_marker() {
        assert_eq!(remove_cursor_marker("<per⇶son/>"), "<person/>");
    }

    #[test]
    fn test_read_fixture_with_cursor() {
        let (fixture, offset) = read_fixture_with_cursor("<pe⇶");
        assert_eq!(offset, 3);
        assert_eq!(fixture.source, "<pe");
    }

    #[test]
    #[should_panic(expected = "missing cursor marker")]
    fn test_read_fixture_without_cursor_panics() {
        read_fixture_with_cursor("<a/>");
    }
}
