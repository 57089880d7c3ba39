// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # XML Content Assist - Context Detection Layer
//!
//! This crate decides, for a cursor offset, what kind of XML construct is
//! being typed and which AST nodes a suggestion provider needs.
//!
//! ## Overview
//!
//! Context detection walks the CST produced by the XML parser together with
//! its position-aligned AST. It never parses text, never builds suggestions
//! and never mutates either tree.
//!
//! ## Core Concepts
//!
//! ### Completion Context
//!
//! [`completion::CompletionContext`] pairs a [`completion::ProviderType`]
//! (element name, attribute name, attribute value, element content) with the
//! enclosing element, the optional attribute or text segment, and the prefix
//! typed so far.
//!
//! ### CST Utilities
//!
//! The [`cst_utils`] module holds the inclusive range tests and char-based
//! prefix helpers used by the scenario rules.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use xml_assist_context::{ProviderType, compute_completion_context};
//!
//! // `cst` and `ast` come from the XML parser, `offset` from the editor.
//! match compute_completion_context(&cst, &ast, offset) {
//!     Some(ctx) if ctx.provider_type == ProviderType::AttributeValue => {
//!         // Suggest values for ctx.attribute()
//!     }
//!     Some(_) => {}
//!     None => {
//!         // Nothing to complete here (comment, prolog, ...)
//!     }
//! }
//! ```

pub mod completion;
pub mod cst_utils;
mod scenarios;

// Re-export commonly used types
pub use completion::{CompletionContext, ProviderArgs, ProviderType, compute_completion_context};
pub use cst_utils::{ContentHit, locate_content_part, truncate_chars};
