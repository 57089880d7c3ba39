// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! CST terminals and source locations

use serde::{Deserialize, Serialize};

/// Token kinds produced by the XML lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// `<`
    Open,
    /// `</`
    SlashOpen,
    /// `>` terminating an opening tag
    StartClose,
    /// `/>`
    SlashClose,
    /// `>` terminating a closing tag
    Close,
    /// `=`
    Equals,
    /// Element or attribute name
    Name,
    /// Quoted attribute value, quotes included
    String,
    /// Non-whitespace character data
    Text,
    /// Whitespace-only character data
    SeaWs,
    /// `<!-- ... -->`
    Comment,
    /// `<![CDATA[ ... ]]>`
    CData,
    /// `<? ... ?>` outside the prolog
    ProcessingInstruction,
    /// `&name;`
    EntityRef,
    /// `&#NN;` or `&#xNN;`
    CharRef,
    /// `<?xml`
    XmlDeclOpen,
    /// `?>` closing the prolog
    SpecialClose,
}

/// Inclusive character range of a node or token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Location {
    /// Create a new location
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

    /// Smallest location covering both `self` and `other`
    pub fn cover(&self, other: Location) -> Location {
        Location::new(
            self.start_offset.min(other.start_offset),
            self.end_offset.max(other.end_offset),
        )
    }
}

/// A single CST terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub kind: TokenKind,
    /// Literal source text of the token
    pub image: String,
    pub start_offset: usize,
    pub end_offset: usize,
    /// Set when the parser inserted this token during error recovery.
    /// Such tokens are not present in the source.
    #[serde(default)]
    pub recovered: bool,
}

impl Token {
    /// Create a token spanning `image` starting at `start_offset`
    pub fn new(kind: TokenKind, image: impl Into<String>, start_offset: usize) -> Self {
        let image = image.into();
        let len = image.chars().count().max(1);
        Self {
            kind,
            image,
            start_offset,
            end_offset: start_offset + len - 1,
            recovered: false,
        }
    }

    /// Create a synthetic token as inserted by error recovery
    pub fn recovered(kind: TokenKind) -> Self {
        Self {
            kind,
            image: String::new(),
            start_offset: 0,
            end_offset: 0,
            recovered: true,
        }
    }

    /// Whether the token literally exists in the source
    pub fn is_present(&self) -> bool {
        !self.recovered
    }

    pub fn location(&self) -> Location {
        Location::new(self.start_offset, self.end_offset)
    }
}

/// Return the token only if it exists and was not synthesized by recovery
pub fn present(token: &Option<Token>) -> Option<&Token> {
    token.as_ref().filter(|t| t.is_present())
}
