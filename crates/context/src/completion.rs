// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion context detection
//!
//! This module walks the CST together with its position-aligned AST to decide
//! what is being typed at a cursor offset.
//!
//! The walk descends document → root element → attributes and content →
//! child elements. At every element the scenarios are tried in a fixed
//! priority order and the first match ends the walk; later siblings are never
//! visited.

use serde::Serialize;
use tracing::{debug, trace};
use xml_assist_ast::{XmlAttribute, XmlDocument, XmlElement, XmlTextContent};
use xml_assist_cst::{DocumentCst, ElementCst};

use crate::scenarios;

/// Kind of completion a suggestion provider should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProviderType {
    /// Typing an element name, e.g. `<pe|`
    ElementName,
    /// Typing an attribute key, e.g. `<person na|`
    AttributeName,
    /// Inside a quoted attribute value, e.g. `<person name="ti|"`
    AttributeValue,
    /// Inside the text body of an element, e.g. `<person>ab|</person>`
    ElementContent,
}

/// AST nodes and typed prefix handed to the suggestion provider
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderArgs<'a> {
    /// Element enclosing the cursor
    pub element: &'a XmlElement,
    /// Existing attribute being edited, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<&'a XmlAttribute>,
    /// Text segment the cursor is appended to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<&'a XmlTextContent>,
    /// Text already typed before the cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Resolved completion context
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionContext<'a> {
    pub provider_type: ProviderType,
    pub provider_args: ProviderArgs<'a>,
}

impl<'a> CompletionContext<'a> {
    pub fn element_name(element: &'a XmlElement, prefix: Option<String>) -> Self {
        Self::new(ProviderType::ElementName, element, None, None, prefix)
    }

    pub fn attribute_name(
        element: &'a XmlElement,
        attribute: Option<&'a XmlAttribute>,
        prefix: Option<String>,
    ) -> Self {
        Self::new(ProviderType::AttributeName, element, attribute, None, prefix)
    }

    pub fn attribute_value(
        element: &'a XmlElement,
        attribute: &'a XmlAttribute,
        prefix: Option<String>,
    ) -> Self {
        Self::new(
            ProviderType::AttributeValue,
            element,
            Some(attribute),
            None,
            prefix,
        )
    }

    pub fn element_content(
        element: &'a XmlElement,
        text_content: Option<&'a XmlTextContent>,
        prefix: Option<String>,
    ) -> Self {
        Self::new(
            ProviderType::ElementContent,
            element,
            None,
            text_content,
            prefix,
        )
    }

    fn new(
        provider_type: ProviderType,
        element: &'a XmlElement,
        attribute: Option<&'a XmlAttribute>,
        text_content: Option<&'a XmlTextContent>,
        prefix: Option<String>,
    ) -> Self {
        Self {
            provider_type,
            provider_args: ProviderArgs {
                element,
                attribute,
                text_content,
                prefix,
            },
        }
    }

    /// Text already typed before the cursor
    pub fn prefix(&self) -> Option<&str> {
        self.provider_args.prefix.as_deref()
    }

    pub fn element(&self) -> &'a XmlElement {
        self.provider_args.element
    }

    pub fn attribute(&self) -> Option<&'a XmlAttribute> {
        self.provider_args.attribute
    }

    pub fn text_content(&self) -> Option<&'a XmlTextContent> {
        self.provider_args.text_content
    }

    pub fn is_element_name(&self) -> bool {
        self.provider_type == ProviderType::ElementName
    }

    pub fn is_attribute_name(&self) -> bool {
        self.provider_type == ProviderType::AttributeName
    }

    pub fn is_attribute_value(&self) -> bool {
        self.provider_type == ProviderType::AttributeValue
    }

    pub fn is_element_content(&self) -> bool {
        self.provider_type == ProviderType::ElementContent
    }
}

/// Detect the completion context at `offset`
///
/// # Arguments
///
/// * `cst` - Concrete syntax tree of the document
/// * `ast` - AST built from the same parse; child order must match the CST
/// * `offset` - Zero-based character offset of the cursor
///
/// # Returns
///
/// `None` when the offset is not in a completable position (comments, the
/// prolog, or anything else no scenario recognizes).
///
/// # Examples
///
/// ```ignore
/// let ctx = compute_completion_context(&cst, &ast, 42);
/// if let Some(ctx) = ctx {
///     match ctx.provider_type {
///         ProviderType::AttributeValue => { /* suggest values */ }
///         _ => {}
///     }
/// }
/// ```
pub fn compute_completion_context<'a>(
    cst: &DocumentCst,
    ast: &'a XmlDocument,
    offset: usize,
) -> Option<CompletionContext<'a>> {
    let resolver = ContextResolver { ast, offset };
    let context = resolver.visit_document(cst);

    match &context {
        Some(ctx) => debug!(
            offset,
            provider = ?ctx.provider_type,
            prefix = ?ctx.prefix(),
            "Resolved completion context"
        ),
        None => debug!(offset, "No completion context at offset"),
    }

    context
}

/// Per-call walk state; holds nothing mutable
struct ContextResolver<'a> {
    ast: &'a XmlDocument,
    offset: usize,
}

impl<'a> ContextResolver<'a> {
    fn visit_document(&self, cst: &DocumentCst) -> Option<CompletionContext<'a>> {
        // Prolog and misc never yield a context.
        let element = cst.element.as_ref()?;
        let root = self.ast.root_element()?;
        self.visit_element(element, root)
    }

    fn visit_element(
        &self,
        cst: &ElementCst,
        ast: &'a XmlElement,
    ) -> Option<CompletionContext<'a>> {
        trace!(offset = self.offset, element = ?ast.name, "Visiting element");

        // Order matters: more specific scenarios first.
        scenarios::element_name_without_prefix(cst, ast, self.offset)
            .or_else(|| scenarios::element_name_with_prefix(cst, ast, self.offset))
            .or_else(|| self.visit_attributes(cst, ast))
            .or_else(|| self.visit_content(cst, ast))
            .or_else(|| scenarios::new_attribute_key(cst, ast, self.offset))
            .or_else(|| scenarios::element_content(cst, ast, self.offset))
    }

    fn visit_attributes(
        &self,
        cst: &ElementCst,
        ast: &'a XmlElement,
    ) -> Option<CompletionContext<'a>> {
        cst.attributes
            .iter()
            .zip(ast.attributes.iter())
            .find_map(|(attr_cst, attr_ast)| {
                scenarios::attribute(attr_cst, ast, attr_ast, self.offset)
            })
    }

    fn visit_content(
        &self,
        cst: &ElementCst,
        ast: &'a XmlElement,
    ) -> Option<CompletionContext<'a>> {
        let content = cst.content.as_ref()?;
        content
            .elements()
            .enumerate()
            .find_map(|(idx, child_cst)| {
                let child_ast = self.ast.sub_element(ast, idx)?;
                self.visit_element(child_cst, child_ast)
            })
    }
}
