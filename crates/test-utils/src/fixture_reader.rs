// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Fixture reader producing aligned CST/AST pairs from XML snippets
//!
//! Test-only stand-in for the real XML parser. It understands the subset of
//! XML the context tests need (prolog, comments, PIs, CDATA, references,
//! elements, attributes, text) and tolerates the unfinished input an editor
//! sees while the user types: `<`, `<pe`, `<person gen`, `<person gen=">`.
//! Missing tokens are left as `None`; it never inserts recovered tokens.

use serde::Serialize;
use xml_assist_ast::{
    AttributeSyntax, ElementId, ElementSyntax, Position, SyntaxToken, XmlAttribute,
    XmlDocument, XmlElement, XmlTextContent,
};
use xml_assist_cst::{
    AttributeCst, ChardataCst, ContentCst, ContentPart, DocumentCst, ElementCst, Location,
    MiscCst, PrologCst, ReferenceCst, Token, TokenKind,
};

/// A parsed snippet: source plus its CST and position-aligned AST
#[derive(Debug, Clone, Serialize)]
pub struct XmlFixture {
    #[serde(skip)]
    pub source: String,
    pub cst: DocumentCst,
    pub ast: XmlDocument,
}

impl XmlFixture {
    /// Serialize as a `{ "cst": ..., "ast": ... }` snapshot
    pub fn to_snapshot_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("fixture serializes to JSON")
    }
}

/// Read a snippet into a CST/AST pair
pub fn read_fixture(source: &str) -> XmlFixture {
    let mut reader = FixtureReader::new(source);
    let cst = reader.read_document();
    XmlFixture {
        source: source.to_string(),
        cst,
        ast: reader.doc,
    }
}

struct FixtureReader {
    chars: Vec<char>,
    pos: usize,
    doc: XmlDocument,
}

impl FixtureReader {
    fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let len = chars.len();
        Self {
            chars,
            pos: 0,
            doc: XmlDocument::new(Position::new(0, len.saturating_sub(1))),
        }
    }

    fn read_document(&mut self) -> DocumentCst {
        let mut cst = DocumentCst {
            location: Location::new(0, self.chars.len().saturating_sub(1)),
            ..Default::default()
        };

        if self.at("<?xml") {
            cst.prolog = Some(self.read_prolog());
        }
        self.read_misc(&mut cst.misc);
        if self.at("<") && !self.at("</") {
            cst.element = Some(self.read_element(None));
        }
        self.read_misc(&mut cst.misc);
        cst
    }

    fn read_prolog(&mut self) -> PrologCst {
        let xml_decl_open = self.token(TokenKind::XmlDeclOpen, 5);
        let mut prolog = PrologCst {
            location: xml_decl_open.location(),
            xml_decl_open: Some(xml_decl_open),
            ..Default::default()
        };

        loop {
            self.skip_whitespace();
            if self.eof() || self.at("<") {
                break;
            }
            if self.at("?>") {
                let close = self.token(TokenKind::SpecialClose, 2);
                prolog.location = prolog.location.cover(close.location());
                prolog.special_close = Some(close);
                break;
            }
            if self.at_name_start() {
                let (attr, _) = self.read_attribute();
                prolog.location = prolog.location.cover(attr.location);
                prolog.attributes.push(attr);
            } else {
                self.pos += 1;
            }
        }
        prolog
    }

    fn read_misc(&mut self, misc: &mut Vec<MiscCst>) {
        loop {
            let token = if self.at("<!--") {
                self.delimited(TokenKind::Comment, "-->")
            } else if self.at("<?") {
                self.delimited(TokenKind::ProcessingInstruction, "?>")
            } else if self.peek().is_some_and(char::is_whitespace) {
                let start = self.pos;
                while self.peek().is_some_and(char::is_whitespace) {
                    self.pos += 1;
                }
                self.token_from(TokenKind::SeaWs, start)
            } else {
                break;
            };
            misc.push(MiscCst { token });
        }
    }

    fn read_element(&mut self, parent: Option<ElementId>) -> ElementCst {
        let open = self.token(TokenKind::Open, 1);
        let name = self.read_name();
        let mut cst = ElementCst {
            location: open.location(),
            open: Some(open),
            name,
            ..Default::default()
        };

        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            if self.eof() || self.at("<") {
                break;
            }
            if self.at("/>") {
                cst.slash_close = Some(self.token(TokenKind::SlashClose, 2));
                break;
            }
            if self.at(">") {
                cst.start_close = Some(self.token(TokenKind::StartClose, 1));
                break;
            }
            if self.at_name_start() {
                let (attr_cst, attr_ast) = self.read_attribute();
                cst.attributes.push(attr_cst);
                attributes.push(attr_ast);
            } else {
                self.pos += 1;
            }
        }

        let mut element = XmlElement::new(
            cst.name.as_ref().map(|tok| tok.image.clone()),
            Position::new(cst.location.start_offset, cst.location.end_offset),
        );
        element.attributes = attributes;
        let id = self
            .doc
            .insert(parent, element)
            .expect("fixture element parent exists");

        if cst.start_close.is_some() {
            cst.content = Some(self.read_content(id));
            if self.at("</") {
                cst.slash_open = Some(self.token(TokenKind::SlashOpen, 2));
                self.skip_whitespace();
                cst.end_name = self.read_name();
                self.skip_whitespace();
                if self.at(">") {
                    cst.close = Some(self.token(TokenKind::Close, 1));
                }
            }
        }

        cst.location = element_location(&cst);
        let syntax = element_syntax(&cst);
        let element = self
            .doc
            .element_mut(id)
            .expect("fixture element was just inserted");
        element.position = Position::new(cst.location.start_offset, cst.location.end_offset);
        element.syntax = syntax;
        cst
    }

    fn read_attribute(&mut self) -> (AttributeCst, XmlAttribute) {
        let name = self.read_name().expect("caller checked for a name start");
        let mut cst = AttributeCst {
            location: name.location(),
            ..Default::default()
        };

        self.skip_whitespace();
        if self.at("=") {
            let equals = self.token(TokenKind::Equals, 1);
            cst.location = cst.location.cover(equals.location());
            cst.equals = Some(equals);

            self.skip_whitespace();
            if let Some(len) = self.quoted_len() {
                let string = self.token(TokenKind::String, len);
                cst.location = cst.location.cover(string.location());
                cst.string = Some(string);
            } else if self.at("\"") || self.at("'") {
                // Unterminated value: the lexer drops the stray quote.
                self.pos += 1;
            }
        }

        let value = cst.string.as_ref().map(|tok| unquote(&tok.image));
        let position = Position::new(cst.location.start_offset, cst.location.end_offset);
        let attribute = XmlAttribute::new(name.image.clone(), value, position).with_syntax(
            AttributeSyntax {
                key: Some(syntax_token(&name)),
                value: cst.string.as_ref().map(syntax_token),
            },
        );
        cst.name = Some(name);
        (cst, attribute)
    }

    fn read_content(&mut self, parent: ElementId) -> ContentCst {
        let start = self.pos;
        let mut parts = Vec::new();

        loop {
            if self.eof() || self.at("</") {
                break;
            }
            let part = if self.at("<!--") {
                ContentPart::Comment(self.delimited(TokenKind::Comment, "-->"))
            } else if self.at("<![CDATA[") {
                ContentPart::CData(self.delimited(TokenKind::CData, "]]>"))
            } else if self.at("<?") {
                ContentPart::ProcessingInstruction(
                    self.delimited(TokenKind::ProcessingInstruction, "?>"),
                )
            } else if self.at("<") {
                ContentPart::Element(self.read_element(Some(parent)))
            } else if let Some((kind, len)) = self.reference_len() {
                let token = self.token(kind, len);
                ContentPart::Reference(ReferenceCst {
                    location: token.location(),
                    token,
                })
            } else {
                let data = self.read_chardata();
                let text = XmlTextContent::new(
                    data.tokens
                        .iter()
                        .map(|tok| tok.image.as_str())
                        .collect::<String>(),
                    Position::new(data.location.start_offset, data.location.end_offset),
                );
                self.doc
                    .element_mut(parent)
                    .expect("fixture content parent exists")
                    .text_contents
                    .push(text);
                ContentPart::Chardata(data)
            };
            parts.push(part);
        }

        let location = match (parts.first(), parts.last()) {
            (Some(first), Some(last)) => first.location().cover(last.location()),
            _ => Location::new(start, start),
        };
        ContentCst { parts, location }
    }

    fn read_chardata(&mut self) -> ChardataCst {
        let start = self.pos;
        // Always consume at least one char so a stray `&` cannot stall the loop.
        self.pos += 1;
        while !self.eof() && !self.at("<") && self.reference_len().is_none() {
            self.pos += 1;
        }

        let image: String = self.chars[start..self.pos].iter().collect();
        let kind = if image.chars().all(char::is_whitespace) {
            TokenKind::SeaWs
        } else {
            TokenKind::Text
        };
        let token = Token::new(kind, image, start);
        ChardataCst {
            location: token.location(),
            tokens: vec![token],
        }
    }

    fn read_name(&mut self) -> Option<Token> {
        if !self.at_name_start() {
            return None;
        }
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.pos += 1;
        }
        Some(self.token_from(TokenKind::Name, start))
    }

    /// Length of a well-formed `&name;`, `&#NN;` or `&#xNN;` at the cursor
    fn reference_len(&self) -> Option<(TokenKind, usize)> {
        if self.peek() != Some('&') {
            return None;
        }
        let kind = if self.chars.get(self.pos + 1) == Some(&'#') {
            TokenKind::CharRef
        } else {
            TokenKind::EntityRef
        };
        let body_start = if kind == TokenKind::CharRef { 2 } else { 1 };
        let mut len = body_start;
        while let Some(&c) = self.chars.get(self.pos + len) {
            if c == ';' {
                return (len > body_start).then_some((kind, len + 1));
            }
            if !c.is_alphanumeric() {
                return None;
            }
            len += 1;
        }
        None
    }

    /// Length of a terminated quoted string at the cursor
    fn quoted_len(&self) -> Option<usize> {
        let quote = self.peek().filter(|&c| c == '"' || c == '\'')?;
        let mut len = 1;
        while let Some(&c) = self.chars.get(self.pos + len) {
            if c == quote {
                return Some(len + 1);
            }
            if c == '<' {
                return None;
            }
            len += 1;
        }
        None
    }

    /// Consume up to and including `end`, or to EOF
    fn delimited(&mut self, kind: TokenKind, end: &str) -> Token {
        let start = self.pos;
        self.pos += 2;
        while !self.eof() && !self.at(end) {
            self.pos += 1;
        }
        if !self.eof() {
            self.pos += end.chars().count();
        }
        self.token_from(kind, start)
    }

    fn token(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        self.pos += len;
        self.token_from(kind, start)
    }

    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        let image: String = self.chars[start..self.pos].iter().collect();
        Token::new(kind, image, start)
    }

    fn at(&self, s: &str) -> bool {
        let mut idx = self.pos;
        for c in s.chars() {
            if self.chars.get(idx) != Some(&c) {
                return false;
            }
            idx += 1;
        }
        true
    }

    fn at_name_start(&self) -> bool {
        self.peek()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':')
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.')
}

fn unquote(image: &str) -> String {
    let mut chars = image.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}

fn syntax_token(token: &Token) -> SyntaxToken {
    SyntaxToken::new(token.image.clone(), token.start_offset, token.end_offset)
}

/// Last token or node the element actually has
fn element_location(cst: &ElementCst) -> Location {
    let start = cst.location.start_offset;
    let tail = [&cst.close, &cst.end_name, &cst.slash_open]
        .into_iter()
        .find_map(|tok| tok.as_ref().map(Token::location))
        .or_else(|| {
            cst.content
                .as_ref()
                .filter(|content| !content.parts.is_empty())
                .map(|content| content.location)
        })
        .or_else(|| {
            [&cst.start_close, &cst.slash_close]
                .into_iter()
                .find_map(|tok| tok.as_ref().map(Token::location))
        })
        .or_else(|| cst.attributes.last().map(|attr| attr.location))
        .or_else(|| cst.name.as_ref().map(Token::location))
        .unwrap_or(cst.location);
    Location::new(start, tail.end_offset)
}

fn element_syntax(cst: &ElementCst) -> ElementSyntax {
    let open_body_end = cst
        .start_close
        .as_ref()
        .or(cst.slash_close.as_ref())
        .map(|tok| tok.end_offset)
        .or_else(|| cst.attributes.last().map(|attr| attr.location.end_offset))
        .or_else(|| cst.name.as_ref().map(|tok| tok.end_offset))
        .unwrap_or(cst.location.start_offset);

    ElementSyntax {
        open_name: cst.name.as_ref().map(syntax_token),
        open_body: Some(Position::new(cst.location.start_offset, open_body_end)),
        close_name: cst.end_name.as_ref().map(syntax_token),
    }
}
