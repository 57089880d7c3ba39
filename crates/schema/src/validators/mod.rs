// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Structural validators
//!
//! Each validator checks one rule for one node and returns every violation
//! it finds. None of them recurse; [`crate::SchemaValidator`] does the walk.

mod attribute_value;
mod required_attributes;
mod required_sub_elements;

pub use attribute_value::validate_attribute_value;
pub use required_attributes::validate_required_attributes;
pub use required_sub_elements::validate_required_sub_elements;
