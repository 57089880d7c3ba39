// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Helpers for hand-editing CSTs in tests
//!
//! The fixture reader never produces recovered tokens; these helpers let a
//! test turn a real token into one, or build a synthetic one.

use xml_assist_cst::{ElementCst, Token, TokenKind};

use crate::fixture_reader::XmlFixture;

/// Token constructors for hand-built CSTs
pub struct MockCst;

impl MockCst {
    /// Synthetic token as inserted by parser error recovery
    pub fn recovered(kind: TokenKind) -> Token {
        Token::recovered(kind)
    }

    /// Flag an existing token as inserted by error recovery
    pub fn mark_recovered(slot: &mut Option<Token>) {
        if let Some(token) = slot {
            token.recovered = true;
        }
    }
}

impl XmlFixture {
    /// Mutable access to the root element CST
    ///
    /// # Panics
    ///
    /// Panics if the fixture has no root element.
    pub fn root_cst_mut(&mut self) -> &mut ElementCst {
        self.cst
            .element
            .as_mut()
            .expect("fixture has a root element")
    }
}
