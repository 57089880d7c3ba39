// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # XML Content Assist - Concrete Syntax Tree
//!
//! This crate defines the CST that an external XML parser hands to the
//! content-assist layer.
//!
//! ## Overview
//!
//! The tree mirrors the grammar productions one struct per rule:
//!
//! ```text
//! document  := prolog? misc* element misc*
//! element   := OPEN Name attribute* (START_CLOSE content SLASH_OPEN Name CLOSE | SLASH_CLOSE)
//! attribute := Name EQUALS STRING
//! content   := chardata? ((element | reference | CDATA | PI | COMMENT) chardata?)*
//! ```
//!
//! Every terminal is a [`Token`]. Tokens synthesized by the parser's error
//! recovery keep their slot in the tree but carry `recovered = true`; callers
//! must use [`Token::is_present`] (or [`present`]) before looking at offsets.
//!
//! Offsets are zero-based character offsets, and every range is inclusive at
//! both ends.

pub mod node;
pub mod token;

pub use node::{
    AttributeCst, ChardataCst, ContentCst, ContentPart, DocumentCst, ElementCst, MiscCst,
    PrologCst, ReferenceCst,
};
pub use token::{Location, Token, TokenKind, present};
