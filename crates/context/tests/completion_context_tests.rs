// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Completion context detection over fixture documents
//!
//! Cursor positions are written inline with the `⇶` marker.

use xml_assist_context::{CompletionContext, ProviderType, compute_completion_context};
use xml_assist_test_utils::{
    ContextAssertions, MockCst, XmlFixture, XmlFixtures, read_fixture, read_fixture_with_cursor,
};

fn context_at(fixture: &XmlFixture, offset: usize) -> Option<CompletionContext<'_>> {
    compute_completion_context(&fixture.cst, &fixture.ast, offset)
}

// ===== Element name =====

#[test]
fn test_element_name_right_after_open_bracket() {
    let fixture = read_fixture("<to></to>");
    let ctx = context_at(&fixture, 1);

    ContextAssertions::assert_context(&ctx, ProviderType::ElementName, None);
    assert_eq!(ctx.unwrap().element().name.as_deref(), Some("to"));
}

#[test]
fn test_element_name_with_partial_prefix() {
    let fixture = read_fixture("<to></to>");

    ContextAssertions::assert_context(&context_at(&fixture, 2), ProviderType::ElementName, Some("t"));
    ContextAssertions::assert_context(&context_at(&fixture, 3), ProviderType::ElementName, Some("to"));
}

#[test]
fn test_element_name_while_typing() {
    let (fixture, offset) = read_fixture_with_cursor("<pe⇶");
    ContextAssertions::assert_context(&context_at(&fixture, offset), ProviderType::ElementName, Some("pe"));
}

#[test]
fn test_element_name_of_nameless_child() {
    let (fixture, offset) = read_fixture_with_cursor("<note>\n  <⇶\n</note>");
    let ctx = context_at(&fixture, offset);

    ContextAssertions::assert_context(&ctx, ProviderType::ElementName, None);
    let element = ctx.unwrap().element();
    assert_eq!(element.name, None);
    assert_eq!(
        fixture.ast.parent_of(element).unwrap().name.as_deref(),
        Some("note")
    );
}

// ===== Attribute name =====

#[test]
fn test_attribute_name_with_prefix() {
    let (fixture, offset) = read_fixture_with_cursor("<person gen⇶>");
    let ctx = context_at(&fixture, offset);

    ContextAssertions::assert_context(&ctx, ProviderType::AttributeName, Some("gen"));
    let attr = ctx.unwrap().attribute().unwrap();
    assert_eq!(attr.key, "gen");
    assert_eq!(attr.value, None);
}

#[test]
fn test_attribute_name_prefix_is_truncated_at_cursor() {
    let (fixture, offset) = read_fixture_with_cursor("<person ge⇶nder=\"male\"/>");
    let ctx = context_at(&fixture, offset);

    ContextAssertions::assert_context(&ctx, ProviderType::AttributeName, Some("ge"));
    assert_eq!(ctx.unwrap().attribute().unwrap().key, "gender");
}

#[test]
fn test_new_attribute_in_whitespace_after_complete_attribute() {
    let (fixture, offset) = read_fixture_with_cursor("<person name=\"x\" ⇶>");
    let ctx = context_at(&fixture, offset);

    ContextAssertions::assert_context(&ctx, ProviderType::AttributeName, None);
    let ctx = ctx.unwrap();
    assert!(ctx.attribute().is_none());
    assert_eq!(ctx.element().name.as_deref(), Some("person"));
}

#[test]
fn test_new_attribute_right_after_closing_quote() {
    let (fixture, offset) = read_fixture_with_cursor("<person name=\"tim\"⇶>");
    let ctx = context_at(&fixture, offset);

    ContextAssertions::assert_context(&ctx, ProviderType::AttributeName, None);
    assert!(ctx.unwrap().attribute().is_none());
}

#[test]
fn test_new_attribute_in_self_closing_tag() {
    let (fixture, offset) = read_fixture_with_cursor("<person ⇶/>");
    ContextAssertions::assert_context(&context_at(&fixture, offset), ProviderType::AttributeName, None);
}

#[test]
fn test_no_new_attribute_inside_existing_attribute() {
    // Cursor on the opening quote: inside the attribute range but neither
    // touching its key nor inside its value.
    let (fixture, offset) = read_fixture_with_cursor("<person name=⇶\"x\">");
    ContextAssertions::assert_no_context(&context_at(&fixture, offset));
}

#[test]
fn test_no_new_attribute_at_opening_quote() {
    let fixture = read_fixture("<person name=\"x\" age=\"3\">");
    // `age` key spans 17..=19, so the `=` at 20 still touches the key
    ContextAssertions::assert_context(&context_at(&fixture, 20), ProviderType::AttributeName, Some("age"));
    // Opening quote of the `age` value
    ContextAssertions::assert_no_context(&context_at(&fixture, 21));
}

// ===== Attribute value =====

#[test]
fn test_attribute_value_prefix() {
    let fixture = read_fixture(XmlFixtures::note());

    // `"tim"` spans 40..=44; the prefix is the image up to `offset - start`
    // minus the opening quote, so 42 yields "t" and 43 yields "ti".
    ContextAssertions::assert_context(&context_at(&fixture, 43), ProviderType::AttributeValue, Some("ti"));
    ContextAssertions::assert_context(&context_at(&fixture, 42), ProviderType::AttributeValue, Some("t"));
    ContextAssertions::assert_context(&context_at(&fixture, 44), ProviderType::AttributeValue, Some("tim"));
}

#[test]
fn test_attribute_value_references_owner_element() {
    let fixture = read_fixture(XmlFixtures::note());
    let ctx = context_at(&fixture, 43).unwrap();

    let attr = ctx.attribute().unwrap();
    assert_eq!(attr.key, "name");
    assert_eq!(ctx.element().name.as_deref(), Some("from"));
    assert_eq!(fixture.ast.owner_of(attr).unwrap().id, ctx.element().id);
}

#[test]
fn test_attribute_value_empty_prefix_is_unset() {
    let (fixture, offset) = read_fixture_with_cursor("<person name=\"⇶\">");
    let ctx = context_at(&fixture, offset);

    ContextAssertions::assert_context(&ctx, ProviderType::AttributeValue, None);
    assert_eq!(ctx.unwrap().attribute().unwrap().value.as_deref(), Some(""));
}

#[test]
fn test_attribute_value_in_later_attribute() {
    let (fixture, offset) =
        read_fixture_with_cursor("<person name=\"tim\" gender=\"ma⇶le\" age=\"42\"/>");
    let ctx = context_at(&fixture, offset);

    ContextAssertions::assert_context(&ctx, ProviderType::AttributeValue, Some("ma"));
    assert_eq!(ctx.unwrap().attribute().unwrap().key, "gender");
}

// ===== Element content =====

#[test]
fn test_element_content_after_text() {
    let fixture = read_fixture("<title>abc</title>");
    let ctx = context_at(&fixture, 10);

    ContextAssertions::assert_context(&ctx, ProviderType::ElementContent, Some("abc"));
    let text = ctx.unwrap().text_content().unwrap();
    assert_eq!(text.text, "abc");
}

#[test]
fn test_element_content_before_text_has_no_prefix() {
    let fixture = read_fixture("<title>abc</title>");
    let ctx = context_at(&fixture, 7);

    ContextAssertions::assert_context(&ctx, ProviderType::ElementContent, None);
    assert!(ctx.unwrap().text_content().is_none());
}

#[test]
fn test_element_content_in_middle_of_text() {
    let (fixture, offset) = read_fixture_with_cursor("<title>ab⇶c</title>");
    let ctx = context_at(&fixture, offset);

    ContextAssertions::assert_context(&ctx, ProviderType::ElementContent, Some("ab"));
    assert_eq!(ctx.unwrap().text_content().unwrap().text, "abc");
}

#[test]
fn test_element_content_of_empty_element() {
    let (fixture, offset) = read_fixture_with_cursor("<title>⇶</title>");
    let ctx = context_at(&fixture, offset);

    ContextAssertions::assert_context(&ctx, ProviderType::ElementContent, None);
    assert_eq!(ctx.unwrap().element().name.as_deref(), Some("title"));
}

#[test]
fn test_element_content_in_deeply_nested_element() {
    let (fixture, offset) = read_fixture_with_cursor("<a><b><c>x⇶</c></b></a>");
    let ctx = context_at(&fixture, offset);

    ContextAssertions::assert_context(&ctx, ProviderType::ElementContent, Some("x"));
    assert_eq!(ctx.unwrap().element().name.as_deref(), Some("c"));
}

#[test]
fn test_element_content_picks_matching_text_segment() {
    let fixture = read_fixture(XmlFixtures::mixed_content());

    // `def` is the second text segment, after a comment, CDATA and `&amp;`.
    let ctx = context_at(&fixture, 42);
    ContextAssertions::assert_context(&ctx, ProviderType::ElementContent, Some("def"));
    assert_eq!(ctx.unwrap().text_content().unwrap().position.start_offset, 39);

    ContextAssertions::assert_context(&context_at(&fixture, 6), ProviderType::ElementContent, Some("abc"));
}

#[test]
fn test_element_content_in_whitespace_between_children() {
    let fixture = read_fixture(XmlFixtures::note());

    // "\n    " spans 24..=28, between `</to>` and `<from`.
    let ctx = context_at(&fixture, 26);
    ContextAssertions::assert_context(&ctx, ProviderType::ElementContent, Some("\n "));
    assert_eq!(ctx.unwrap().element().name.as_deref(), Some("note"));
}

#[test]
fn test_text_in_child_element() {
    let fixture = read_fixture(XmlFixtures::note());

    // `Bill` spans 15..=18
    let ctx = context_at(&fixture, 17);
    ContextAssertions::assert_context(&ctx, ProviderType::ElementContent, Some("Bi"));
    assert_eq!(ctx.unwrap().element().name.as_deref(), Some("to"));
}

// ===== No context =====

#[test]
fn test_no_context_inside_comment() {
    let fixture = read_fixture(XmlFixtures::note_with_prolog());
    let offset = fixture.source.find("greeting").unwrap();

    ContextAssertions::assert_no_context(&context_at(&fixture, offset));
}

#[test]
fn test_no_context_inside_prolog() {
    let fixture = read_fixture(XmlFixtures::note_with_prolog());
    let offset = fixture.source.find("version").unwrap() + 2;

    ContextAssertions::assert_no_context(&context_at(&fixture, offset));
}

#[test]
fn test_no_context_inside_comment_in_content() {
    let fixture = read_fixture(XmlFixtures::mixed_content());
    ContextAssertions::assert_no_context(&context_at(&fixture, 10));
}

#[test]
fn test_no_context_right_after_reference() {
    let fixture = read_fixture(XmlFixtures::mixed_content());
    ContextAssertions::assert_no_context(&context_at(&fixture, 39));
}

#[test]
fn test_no_context_right_after_child_element() {
    let fixture = read_fixture(XmlFixtures::note());
    // Offset 24 directly follows `</to>`.
    ContextAssertions::assert_no_context(&context_at(&fixture, 24));
}

#[test]
fn test_no_context_for_empty_document() {
    let fixture = read_fixture("");
    ContextAssertions::assert_no_context(&context_at(&fixture, 0));
}

// ===== Error recovery =====

#[test]
fn test_recovered_start_close_disables_content_scenario() {
    let mut fixture = read_fixture("<note>abc</note>");
    ContextAssertions::assert_context(&context_at(&fixture, 9), ProviderType::ElementContent, Some("abc"));

    MockCst::mark_recovered(&mut fixture.root_cst_mut().start_close);
    ContextAssertions::assert_no_context(&context_at(&fixture, 9));
}

#[test]
fn test_recovered_name_is_never_a_prefix() {
    let (mut fixture, offset) = read_fixture_with_cursor("<pe⇶");
    MockCst::mark_recovered(&mut fixture.root_cst_mut().name);

    ContextAssertions::assert_no_context(&context_at(&fixture, offset));
}

#[test]
fn test_recovered_attribute_value_falls_back_to_key() {
    let (mut fixture, offset) = read_fixture_with_cursor("<person name⇶=\"tim\">");
    ContextAssertions::assert_context(&context_at(&fixture, offset), ProviderType::AttributeName, Some("name"));

    MockCst::mark_recovered(&mut fixture.root_cst_mut().attributes[0].string);
    ContextAssertions::assert_context(&context_at(&fixture, offset), ProviderType::AttributeName, Some("name"));
}

// ===== Properties =====

#[test]
fn test_every_offset_resolves_deterministically() {
    for source in [
        XmlFixtures::note(),
        XmlFixtures::note_with_prolog(),
        XmlFixtures::mixed_content(),
        XmlFixtures::person(),
        "<",
        "<person gen=\">",
        "<note><to",
    ] {
        let fixture = read_fixture(source);
        for offset in 0..=source.chars().count() {
            let first = context_at(&fixture, offset);
            let second = context_at(&fixture, offset);
            assert_eq!(first, second, "non-deterministic at {offset} in {source:?}");
        }
    }
}

#[test]
fn test_context_serializes_with_provider_fields() {
    let fixture = read_fixture(XmlFixtures::note());
    let ctx = context_at(&fixture, 43).unwrap();

    let json = serde_json::to_value(&ctx).unwrap();
    assert_eq!(json["providerType"], "attributeValue");
    assert_eq!(json["providerArgs"]["prefix"], "ti");
    assert_eq!(json["providerArgs"]["attribute"]["key"], "name");
    assert_eq!(json["providerArgs"]["element"]["name"], "from");
    assert!(json["providerArgs"].get("textContent").is_none());
}
