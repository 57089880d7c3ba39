// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # XML Content Assist - Abstract Syntax Tree
//!
//! This crate provides the simplified, position-annotated XML tree used by
//! tooling (completion, validation).
//!
//! ## Design
//!
//! - [`XmlDocument`] owns every [`XmlElement`] in an arena; elements refer to
//!   their children and parent through [`ElementId`]s.
//! - An [`XmlAttribute`] is owned by its element and records the owner's id.
//! - Child order is source order. The n-th attribute / sub-element lines up
//!   with the n-th attribute / element child of the matching CST node.
//! - Partial input is representable: an element may lack a name and an
//!   attribute may lack a value.

pub mod document;
pub mod node;

pub use document::{AstError, AstResult, XmlDocument};
pub use node::{
    AttributeSyntax, ElementId, ElementSyntax, Position, SyntaxToken, XmlAttribute, XmlElement,
    XmlTextContent,
};
