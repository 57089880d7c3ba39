// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for xml-assist
//!
//! This crate provides common testing components including:
//! - A fixture reader turning XML snippets into aligned CST/AST pairs
//! - Cursor marker (`⇶`) handling for content-assist test cases
//! - Token helpers for hand-edited CSTs
//! - Sample documents and schemas
//! - Assertions on resolved completion contexts

pub mod assertions;
pub mod cursor;
pub mod fixture_reader;
pub mod fixtures;
pub mod mock_cst;

// Re-exports for convenience
pub use assertions::ContextAssertions;
pub use cursor::{CURSOR_MARKER, get_cursor_offset, read_fixture_with_cursor, remove_cursor_marker};
pub use fixture_reader::{XmlFixture, read_fixture};
pub use fixtures::XmlFixtures;
pub use mock_cst::MockCst;
