// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use xml_assist_ast::XmlAttribute;

use crate::issue::{IssueNode, ValidationIssue};
use crate::schema::{SchemaAttribute, ValueConstraint};

/// Check the value of `attr` against the constraint of `schema`
///
/// An unconstrained declaration or an attribute without a value (partial
/// input) never produces an issue.
pub fn validate_attribute_value<'a>(
    attr: &'a XmlAttribute,
    schema: &SchemaAttribute,
) -> Vec<ValidationIssue<'a>> {
    let (Some(constraint), Some(actual)) = (&schema.value, attr.value.as_deref()) else {
        return Vec::new();
    };

    let accepted = match constraint {
        ValueConstraint::Exact(expected) => actual == expected,
        ValueConstraint::Pattern(regex) => regex.is_match(actual),
        ValueConstraint::OneOf(values) => values.iter().any(|v| v == actual),
    };
    if accepted {
        return Vec::new();
    }

    let msg = match constraint {
        ValueConstraint::Exact(_) => {
            format!("Expecting Value <{constraint}> but found <{actual}>")
        }
        ValueConstraint::Pattern(_) => {
            format!("Expecting Value matching <{constraint}> but found <{actual}>")
        }
        ValueConstraint::OneOf(_) => {
            format!("Expecting one of <{constraint}> but found <{actual}>")
        }
    };
    vec![ValidationIssue::error(msg, IssueNode::Attribute(attr))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use xml_assist_ast::Position;

    fn attr(value: Option<&str>) -> XmlAttribute {
        XmlAttribute::new("gender", value.map(String::from), Position::new(8, 20))
    }

    fn messages(attr: &XmlAttribute, constraint: ValueConstraint) -> Vec<String> {
        let schema = SchemaAttribute::new("gender").with_value(constraint);
        validate_attribute_value(attr, &schema)
            .into_iter()
            .map(|i| i.msg)
            .collect()
    }

    #[test]
    fn test_exact_value() {
        let constraint = ValueConstraint::Exact("male".into());
        assert!(messages(&attr(Some("male")), constraint.clone()).is_empty());
        assert_eq!(
            messages(&attr(Some("other")), constraint),
            vec!["Expecting Value <male> but found <other>"]
        );
    }

    #[test]
    fn test_pattern_value() {
        let constraint = ValueConstraint::Pattern(Regex::new("^[0-9]+$").unwrap());
        assert!(messages(&attr(Some("42")), constraint.clone()).is_empty());
        assert_eq!(
            messages(&attr(Some("forty")), constraint),
            vec!["Expecting Value matching </^[0-9]+$/> but found <forty>"]
        );
    }

    #[test]
    fn test_pattern_is_unanchored() {
        let constraint = ValueConstraint::Pattern(Regex::new("[0-9]").unwrap());
        assert!(messages(&attr(Some("a1b")), constraint).is_empty());
    }

    #[test]
    fn test_one_of_value() {
        let constraint = ValueConstraint::OneOf(vec!["male".into(), "female".into()]);
        assert!(messages(&attr(Some("female")), constraint.clone()).is_empty());
        assert_eq!(
            messages(&attr(Some("x")), constraint),
            vec!["Expecting one of <male,female> but found <x>"]
        );
    }

    #[test]
    fn test_issue_points_at_attribute() {
        let attribute = attr(Some("x"));
        let schema = SchemaAttribute::new("gender").with_value(ValueConstraint::Exact("m".into()));
        let issues = validate_attribute_value(&attribute, &schema);

        assert_eq!(issues[0].node, IssueNode::Attribute(&attribute));
    }

    #[test]
    fn test_no_constraint_no_issue() {
        let schema = SchemaAttribute::new("gender");
        assert!(validate_attribute_value(&attr(Some("anything")), &schema).is_empty());
    }

    #[test]
    fn test_missing_value_no_issue() {
        let constraint = ValueConstraint::Exact("male".into());
        assert!(messages(&attr(None), constraint).is_empty());
    }
}
