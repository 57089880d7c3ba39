// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # XML Content Assist - Schema
//!
//! A small declarative schema for XML documents and the structural
//! validators that check an AST against it:
//!
//! - required attributes
//! - required sub-elements
//! - attribute values (exact, pattern, one-of)
//!
//! Validators return [`ValidationIssue`]s that borrow the offending AST node.
//! [`SchemaValidator`] runs all of them over a whole document.
//!
//! ## Example
//!
//! ```ignore
//! let schema = SchemaElement::from_path(Path::new("person.yaml"))?;
//! for issue in SchemaValidator::new(schema).validate_document(&ast) {
//!     println!("{}", issue.msg);
//! }
//! ```

pub mod error;
pub mod issue;
pub mod schema;
pub mod validator;
pub mod validators;

pub use error::{SchemaError, SchemaResult};
pub use issue::{IssueNode, Severity, ValidationIssue};
pub use schema::{SchemaAttribute, SchemaElement, ValueConstraint};
pub use validator::SchemaValidator;
pub use validators::{
    validate_attribute_value, validate_required_attributes, validate_required_sub_elements,
};
