// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! CST nodes, one per grammar production
//!
//! Optional tokens are `None` when the parser never produced them and
//! `Some(token)` with `recovered = true` when error recovery inserted them.

use serde::{Deserialize, Serialize};

use crate::token::{Location, Token};

/// `document := prolog? misc* element misc*`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentCst {
    pub prolog: Option<PrologCst>,
    pub misc: Vec<MiscCst>,
    pub element: Option<ElementCst>,
    pub location: Location,
}

/// `prolog := XML_DECL_OPEN attribute* SPECIAL_CLOSE`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrologCst {
    pub xml_decl_open: Option<Token>,
    pub attributes: Vec<AttributeCst>,
    pub special_close: Option<Token>,
    pub location: Location,
}

/// Comments, processing instructions and whitespace outside the root element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscCst {
    pub token: Token,
}

impl MiscCst {
    pub fn location(&self) -> Location {
        self.token.location()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementCst {
    /// `<`
    pub open: Option<Token>,
    /// Element name in the opening tag
    pub name: Option<Token>,
    pub attributes: Vec<AttributeCst>,
    /// `>` of the opening tag
    pub start_close: Option<Token>,
    pub content: Option<ContentCst>,
    /// `</`
    pub slash_open: Option<Token>,
    /// Element name in the closing tag
    pub end_name: Option<Token>,
    /// `>` of the closing tag
    pub close: Option<Token>,
    /// `/>`
    pub slash_close: Option<Token>,
    pub location: Location,
}

/// `attribute := Name EQUALS STRING`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeCst {
    pub name: Option<Token>,
    pub equals: Option<Token>,
    pub string: Option<Token>,
    pub location: Location,
}

/// Element body between `>` and `</`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentCst {
    /// Children in source order
    pub parts: Vec<ContentPart>,
    pub location: Location,
}

impl ContentCst {
    /// Element children in source order
    ///
    /// The n-th item lines up with the n-th AST sub-element.
    pub fn elements(&self) -> impl Iterator<Item = &ElementCst> {
        self.parts.iter().filter_map(|part| match part {
            ContentPart::Element(elem) => Some(elem),
            _ => None,
        })
    }

    /// Character data children in source order
    ///
    /// The n-th item lines up with the n-th AST text content.
    pub fn chardata(&self) -> impl Iterator<Item = &ChardataCst> {
        self.parts.iter().filter_map(|part| match part {
            ContentPart::Chardata(data) => Some(data),
            _ => None,
        })
    }
}

/// A single child of a content node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "part", rename_all = "camelCase")]
pub enum ContentPart {
    Element(ElementCst),
    Chardata(ChardataCst),
    Reference(ReferenceCst),
    CData(Token),
    ProcessingInstruction(Token),
    Comment(Token),
}

impl ContentPart {
    pub fn location(&self) -> Location {
        match self {
            ContentPart::Element(elem) => elem.location,
            ContentPart::Chardata(data) => data.location,
            ContentPart::Reference(reference) => reference.location,
            ContentPart::CData(tok)
            | ContentPart::ProcessingInstruction(tok)
            | ContentPart::Comment(tok) => tok.location(),
        }
    }

    pub fn is_chardata(&self) -> bool {
        matches!(self, ContentPart::Chardata(_))
    }
}

/// A run of `TEXT` / `SEA_WS` tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChardataCst {
    pub tokens: Vec<Token>,
    pub location: Location,
}

/// Entity or character reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCst {
    pub token: Token,
    pub location: Location,
}
