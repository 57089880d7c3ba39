// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Document validation
//!
//! Walks an AST from the root, pairing each element with its schema
//! declaration by name and running every validator on the pair.

use tracing::{debug, trace};
use xml_assist_ast::{XmlDocument, XmlElement};

use crate::issue::ValidationIssue;
use crate::schema::SchemaElement;
use crate::validators::{
    validate_attribute_value, validate_required_attributes, validate_required_sub_elements,
};

/// Validates documents against one root schema declaration
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    root: SchemaElement,
}

impl SchemaValidator {
    pub fn new(root: SchemaElement) -> Self {
        Self { root }
    }

    /// Validate the whole document
    ///
    /// Elements without a matching declaration are skipped together with
    /// their subtree. Issues are ordered by document position of the element,
    /// then by validator.
    pub fn validate_document<'a>(&self, doc: &'a XmlDocument) -> Vec<ValidationIssue<'a>> {
        let mut issues = Vec::new();

        match doc.root_element() {
            Some(root) if root.name.as_deref() == Some(self.root.name.as_str()) => {
                self.validate_element(doc, root, &self.root, &mut issues);
            }
            Some(root) => debug!(
                expected = %self.root.name,
                found = ?root.name,
                "Root element does not match schema"
            ),
            None => debug!("Document has no root element"),
        }

        debug!(count = issues.len(), "Validation finished");
        issues
    }

    fn validate_element<'a>(
        &self,
        doc: &'a XmlDocument,
        elem: &'a XmlElement,
        schema: &SchemaElement,
        issues: &mut Vec<ValidationIssue<'a>>,
    ) {
        trace!(element = %schema.name, "Validating element");

        issues.extend(validate_required_attributes(elem, schema));
        issues.extend(validate_required_sub_elements(doc, elem, schema));

        for attr in &elem.attributes {
            if let Some(decl) = schema.attribute(&attr.key) {
                issues.extend(validate_attribute_value(attr, decl));
            }
        }

        for sub in doc.sub_elements(elem) {
            let decl = sub.name.as_deref().and_then(|name| schema.element(name));
            match decl {
                Some(decl) => self.validate_element(doc, sub, decl, issues),
                None => trace!(element = ?sub.name, "No declaration, skipping"),
            }
        }
    }
}
