// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # AST nodes
//!
//! Elements, attributes and text segments. All offsets are zero-based
//! character offsets, inclusive at both ends.

use serde::{Deserialize, Serialize};

/// Index of an element inside its [`crate::XmlDocument`] arena
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub usize);

/// Source range of an AST node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Position {
    pub fn new(start_offset: usize, end_offset: usize) -> Self {
        Self {
            start_offset,
            end_offset,
        }
    }

    /// Check whether `offset` lies in `[start, end]`
    pub fn contains(&self, offset: usize) -> bool {
        self.start_offset <= offset && offset <= self.end_offset
    }
}

/// Raw token range kept as syntax metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxToken {
    pub image: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl SyntaxToken {
    pub fn new(image: impl Into<String>, start_offset: usize, end_offset: usize) -> Self {
        Self {
            image: image.into(),
            start_offset,
            end_offset,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.start_offset, self.end_offset)
    }
}

/// Raw ranges of an element's tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementSyntax {
    /// Name token of the opening tag
    pub open_name: Option<SyntaxToken>,
    /// From `<` to the `>` or `/>` ending the opening tag
    pub open_body: Option<Position>,
    /// Name token of the closing tag
    pub close_name: Option<SyntaxToken>,
}

/// Raw ranges of an attribute's key and quoted value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeSyntax {
    pub key: Option<SyntaxToken>,
    /// Quoted value, quotes included
    pub value: Option<SyntaxToken>,
}

/// A segment of character data inside an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XmlTextContent {
    pub text: String,
    pub position: Position,
}

impl XmlTextContent {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XmlAttribute {
    pub key: String,
    /// Unquoted value; `None` while the attribute is still being typed
    pub value: Option<String>,
    pub position: Position,
    /// Owning element
    pub parent: ElementId,
    #[serde(default)]
    pub syntax: AttributeSyntax,
}

impl XmlAttribute {
    /// Create a detached attribute
    ///
    /// `parent` is assigned when the owning element is inserted into a document.
    pub fn new(key: impl Into<String>, value: Option<String>, position: Position) -> Self {
        Self {
            key: key.into(),
            value,
            position,
            parent: ElementId::default(),
            syntax: AttributeSyntax::default(),
        }
    }

    pub fn with_syntax(mut self, syntax: AttributeSyntax) -> Self {
        self.syntax = syntax;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XmlElement {
    pub id: ElementId,
    /// `None` when only `<` has been typed
    pub name: Option<String>,
    pub attributes: Vec<XmlAttribute>,
    pub sub_elements: Vec<ElementId>,
    pub text_contents: Vec<XmlTextContent>,
    pub position: Position,
    /// `None` for the root element
    pub parent: Option<ElementId>,
    #[serde(default)]
    pub syntax: ElementSyntax,
}

impl XmlElement {
    /// Create a detached element
    ///
    /// `id` and `parent` are assigned by [`crate::XmlDocument::insert`].
    pub fn new(name: Option<String>, position: Position) -> Self {
        Self {
            id: ElementId::default(),
            name,
            attributes: Vec::new(),
            sub_elements: Vec::new(),
            text_contents: Vec::new(),
            position,
            parent: None,
            syntax: ElementSyntax::default(),
        }
    }

    pub fn with_attribute(mut self, attribute: XmlAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_text(mut self, text: XmlTextContent) -> Self {
        self.text_contents.push(text);
        self
    }

    pub fn with_syntax(mut self, syntax: ElementSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Find an attribute by key
    pub fn attribute(&self, key: &str) -> Option<&XmlAttribute> {
        self.attributes.iter().find(|attr| attr.key == key)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
