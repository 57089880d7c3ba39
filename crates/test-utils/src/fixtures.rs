// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures and sample XML documents

/// Sample XML documents for testing
pub struct XmlFixtures;

impl XmlFixtures {
    // ===== Complete documents =====

    /// Root with a text child element and a self-closing element with an attribute
    ///
    /// `name="tim"` spans offsets 35..=44, its quoted value 40..=44.
    pub const fn note() -> &'static str {
        "<note>\n    <to>Bill</to>\n    <from name=\"tim\"/>\n</note>"
    }

    /// `note` preceded by an XML declaration and a comment
    pub const fn note_with_prolog() -> &'static str {
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- greeting -->\n<note>\n    <to>Bill</to>\n</note>\n"
    }

    /// Element whose body mixes text, comments, CDATA and references
    pub const fn mixed_content() -> &'static str {
        "<p>abc<!-- note --><![CDATA[raw]]>&amp;def</p>"
    }

    /// Element with several attributes
    pub const fn person() -> &'static str {
        "<person name=\"tim\" gender=\"male\" age=\"42\">\n  <email>tim@example.com</email>\n</person>"
    }

    // ===== Schemas =====

    /// Schema for [`XmlFixtures::person`] in YAML
    pub const fn person_schema_yaml() -> &'static str {
        r#"name: person
required: true
attributes:
  - key: name
    required: true
  - key: gender
    value: [male, female]
  - key: age
    value:
      pattern: "^[0-9]+$"
  - key: id
    required: true
elements:
  - name: email
    required: true
  - name: phone
    required: true
"#
    }
}
