// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema model
//!
//! A schema describes one element: its attributes (optionally required,
//! optionally value-constrained) and its sub-elements, recursively.
//! Declarations keep their source order; lookups are by name.
//!
//! ## Format
//!
//! ```yaml
//! name: person
//! attributes:
//!   - key: name
//!     required: true
//!   - key: gender
//!     value: [male, female]      # one of
//!   - key: age
//!     value: { pattern: "^[0-9]+$" }
//!   - key: kind
//!     value: human               # exact
//! elements:
//!   - name: email
//!     required: true
//! ```

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};

/// Element declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaElement {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub attributes: Vec<SchemaAttribute>,
    #[serde(default)]
    pub elements: Vec<SchemaElement>,
}

impl SchemaElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            attributes: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_attribute(mut self, attribute: SchemaAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_element(mut self, element: SchemaElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Attribute declaration by key
    pub fn attribute(&self, key: &str) -> Option<&SchemaAttribute> {
        self.attributes.iter().find(|attr| attr.key == key)
    }

    /// Sub-element declaration by name
    pub fn element(&self, name: &str) -> Option<&SchemaElement> {
        self.elements.iter().find(|elem| elem.name == name)
    }

    pub fn from_yaml_str(source: &str) -> SchemaResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a schema file, choosing the format by extension
    pub fn from_path(path: &Path) -> SchemaResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&source),
            Some("json") => Self::from_json_str(&source),
            _ => Err(SchemaError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Attribute declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaAttribute {
    pub key: String,
    #[serde(default)]
    pub required: bool,
    /// `None` means any value is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ValueConstraint>,
}

impl SchemaAttribute {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            required: false,
            value: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: ValueConstraint) -> Self {
        self.value = Some(value);
        self
    }
}

/// Constraint on an attribute value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawConstraint", into = "RawConstraint")]
pub enum ValueConstraint {
    /// Value must equal this string
    Exact(String),
    /// Value must match this regular expression (unanchored)
    Pattern(Regex),
    /// Value must be one of these strings
    OneOf(Vec<String>),
}

impl fmt::Display for ValueConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueConstraint::Exact(value) => write!(f, "{value}"),
            ValueConstraint::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
            ValueConstraint::OneOf(values) => write!(f, "{}", values.join(",")),
        }
    }
}

/// Serialized shape of a [`ValueConstraint`]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawConstraint {
    Exact(String),
    OneOf(Vec<String>),
    Pattern { pattern: String },
}

impl TryFrom<RawConstraint> for ValueConstraint {
    type Error = regex::Error;

    fn try_from(raw: RawConstraint) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawConstraint::Exact(value) => ValueConstraint::Exact(value),
            RawConstraint::OneOf(values) => ValueConstraint::OneOf(values),
            RawConstraint::Pattern { pattern } => ValueConstraint::Pattern(Regex::new(&pattern)?),
        })
    }
}

impl From<ValueConstraint> for RawConstraint {
    fn from(constraint: ValueConstraint) -> Self {
        match constraint {
            ValueConstraint::Exact(value) => RawConstraint::Exact(value),
            ValueConstraint::OneOf(values) => RawConstraint::OneOf(values),
            ValueConstraint::Pattern(regex) => RawConstraint::Pattern {
                pattern: regex.as_str().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xml_assist_test_utils::XmlFixtures;

    #[test]
    fn test_yaml_schema_keeps_declaration_order() {
        let schema = SchemaElement::from_yaml_str(XmlFixtures::person_schema_yaml()).unwrap();

        assert_eq!(schema.name, "person");
        let keys: Vec<_> = schema.attributes.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "gender", "age", "id"]);
        assert!(schema.element("email").unwrap().required);
    }

    #[test]
    fn test_value_constraint_shapes() {
        let schema = SchemaElement::from_yaml_str(
            "name: a\nattributes:\n  - key: x\n    value: fixed\n  - key: y\n    value: [p, q]\n  - key: z\n    value:\n      pattern: '^\\d+$'\n",
        )
        .unwrap();

        assert!(matches!(
            schema.attribute("x").unwrap().value,
            Some(ValueConstraint::Exact(ref v)) if v == "fixed"
        ));
        assert!(matches!(
            schema.attribute("y").unwrap().value,
            Some(ValueConstraint::OneOf(ref v)) if v.len() == 2
        ));
        match &schema.attribute("z").unwrap().value {
            Some(ValueConstraint::Pattern(regex)) => assert!(regex.is_match("42")),
            other => panic!("Expected pattern constraint, found {:?}", other),
        }
    }

    #[test]
    fn test_attribute_without_value_has_no_constraint() {
        let schema = SchemaElement::from_json_str(
            r#"{"name":"a","attributes":[{"key":"x","required":true}]}"#,
        )
        .unwrap();
        let attr = schema.attribute("x").unwrap();

        assert!(attr.required);
        assert!(attr.value.is_none());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = SchemaElement::from_yaml_str(
            "name: a\nattributes:\n  - key: x\n    value:\n      pattern: '('\n",
        );
        assert!(matches!(result, Err(SchemaError::Yaml(_))));
    }

    #[test]
    fn test_constraint_display() {
        assert_eq!(ValueConstraint::Exact("a".into()).to_string(), "a");
        assert_eq!(
            ValueConstraint::OneOf(vec!["a".into(), "b".into()]).to_string(),
            "a,b"
        );
        assert_eq!(
            ValueConstraint::Pattern(Regex::new("^x$").unwrap()).to_string(),
            "/^x$/"
        );
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        let path = std::env::temp_dir().join("xml-assist-schema-test.xsd");
        std::fs::write(&path, "name: a").unwrap();

        let result = SchemaElement::from_path(&path);
        assert!(matches!(result, Err(SchemaError::UnsupportedFormat(_))));
        let _ = std::fs::remove_file(path);
    }
}
