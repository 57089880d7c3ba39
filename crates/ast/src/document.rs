// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # XML document arena
//!
//! [`XmlDocument`] owns all elements. Children are stored as ids on the parent,
//! and every element and attribute records the id of its owner, so lookups in
//! both directions go through the document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::{ElementId, Position, XmlAttribute, XmlElement};

/// Result type alias for AST construction
pub type AstResult<T> = Result<T, AstError>;

/// Errors raised while assembling a document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AstError {
    /// The referenced element is not part of this document
    #[error("Unknown element id: {0:?}")]
    UnknownElement(ElementId),

    /// A second element was inserted without a parent
    #[error("Document already has a root element: {0:?}")]
    RootAlreadySet(ElementId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XmlDocument {
    pub root_element: Option<ElementId>,
    pub elements: Vec<XmlElement>,
    pub position: Position,
}

impl XmlDocument {
    /// Create an empty document spanning `position`
    pub fn new(position: Position) -> Self {
        Self {
            root_element: None,
            elements: Vec::new(),
            position,
        }
    }

    /// Insert `element` under `parent`, or as the root when `parent` is `None`
    ///
    /// Assigns the element id and the parent links of the element and its
    /// attributes. Sub-elements are appended to the parent in call order.
    pub fn insert(
        &mut self,
        parent: Option<ElementId>,
        mut element: XmlElement,
    ) -> AstResult<ElementId> {
        let id = ElementId(self.elements.len());

        match parent {
            Some(parent_id) => {
                self.element_mut(parent_id)?.sub_elements.push(id);
            }
            None => {
                if let Some(root) = self.root_element {
                    return Err(AstError::RootAlreadySet(root));
                }
                self.root_element = Some(id);
            }
        }

        element.id = id;
        element.parent = parent;
        for attribute in &mut element.attributes {
            attribute.parent = id;
        }
        self.elements.push(element);
        Ok(id)
    }

    pub fn root_element(&self) -> Option<&XmlElement> {
        self.root_element.and_then(|id| self.element(id))
    }

    pub fn element(&self, id: ElementId) -> Option<&XmlElement> {
        self.elements.get(id.0)
    }

    pub fn element_mut(&mut self, id: ElementId) -> AstResult<&mut XmlElement> {
        self.elements
            .get_mut(id.0)
            .ok_or(AstError::UnknownElement(id))
    }

    /// The n-th sub-element of `element`
    pub fn sub_element(&self, element: &XmlElement, index: usize) -> Option<&XmlElement> {
        element
            .sub_elements
            .get(index)
            .and_then(|&id| self.element(id))
    }

    /// Sub-elements of `element` in source order
    pub fn sub_elements<'a>(
        &'a self,
        element: &'a XmlElement,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        element
            .sub_elements
            .iter()
            .filter_map(move |&id| self.element(id))
    }

    /// Parent of `element`, `None` for the root
    pub fn parent_of(&self, element: &XmlElement) -> Option<&XmlElement> {
        element.parent.and_then(|id| self.element(id))
    }

    /// Element owning `attribute`
    pub fn owner_of(&self, attribute: &XmlAttribute) -> Option<&XmlElement> {
        self.element(attribute.parent)
    }

    /// All elements in document order (pre-order)
    pub fn iter(&self) -> impl Iterator<Item = &XmlElement> {
        let mut stack: Vec<ElementId> = self.root_element.into_iter().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let element = self.element(id)?;
            stack.extend(element.sub_elements.iter().rev().copied());
            Some(element)
        })
    }
}
