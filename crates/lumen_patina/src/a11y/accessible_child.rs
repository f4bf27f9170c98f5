//! Accessible content detection.
//!
//! An element exposes accessible content when a screen reader would have
//! something to announce for it: text, an image's alternative text, or an
//! explicit accessible name. When the analysis cannot tell (dynamic
//! expressions, spreads) it assumes content is there, so that only definite
//! violations are reported.

use super::attribute::{resolve_attribute, resolve_expression, ResolvedValue};
use super::hidden::is_hidden_from_screen_reader;
use lumen_relief::ast::{ChildNode, ElementNode, Expression, LiteralValue, PropNode};

/// Attributes that name an element for assistive technology
const ACCESSIBLE_NAME_ATTRIBUTES: [&str; 2] = ["aria-label", "aria-labelledby"];

/// Props that supply children without child nodes
const CONTENT_PROPS: [&str; 2] = ["children", "dangerouslySetInnerHTML"];

/// Whether `element` exposes content perceivable by assistive technology.
pub fn has_accessible_child(element: &ElementNode) -> bool {
    has_accessible_name(&element.props)
        || has_content_prop(&element.props)
        || element.children.iter().any(is_accessible_child)
}

/// Whether a literal renders visible output when used as a child.
///
/// Empty strings, booleans, `null` and `undefined` render nothing.
pub fn renders_content(value: &LiteralValue) -> bool {
    match value {
        LiteralValue::String(s) => !s.is_empty(),
        LiteralValue::Number(_) | LiteralValue::Object(_) => true,
        LiteralValue::Boolean(_) | LiteralValue::Null | LiteralValue::Undefined => false,
    }
}

fn has_accessible_name(props: &[PropNode]) -> bool {
    ACCESSIBLE_NAME_ATTRIBUTES
        .iter()
        .any(|name| match resolve_attribute(props, name) {
            ResolvedValue::Indeterminate => true,
            ResolvedValue::Literal(LiteralValue::String(label)) => !label.is_empty(),
            _ => false,
        })
}

fn has_content_prop(props: &[PropNode]) -> bool {
    CONTENT_PROPS
        .iter()
        .any(|name| match resolve_attribute(props, name) {
            ResolvedValue::Absent => false,
            ResolvedValue::Indeterminate => true,
            ResolvedValue::Literal(value) => renders_content(value),
        })
}

fn is_accessible_child(child: &ChildNode) -> bool {
    match child {
        ChildNode::Text(text) => !text.content.trim().is_empty(),
        ChildNode::ExpressionContainer(container) => expression_renders(&container.expression),
        ChildNode::Element(element) => is_accessible_element(element),
        ChildNode::Fragment(fragment) => fragment.children.iter().any(is_accessible_child),
        ChildNode::Spread(_) => true,
    }
}

#[inline]
fn expression_renders(expression: &Expression) -> bool {
    match resolve_expression(expression) {
        ResolvedValue::Literal(value) => renders_content(value),
        ResolvedValue::Indeterminate => true,
        ResolvedValue::Absent => false,
    }
}

fn is_accessible_element(element: &ElementNode) -> bool {
    let tag = element.tag();
    if tag == "img" && resolve_attribute(&element.props, "alt").is_non_empty_string() {
        return true;
    }

    has_accessible_child(element) && !is_hidden_from_screen_reader(&tag, &element.props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_relief::ast::{AttributeNode, SourceLocation, SpreadAttributeNode};

    fn el(tag: &str) -> ElementNode {
        ElementNode::new(tag, SourceLocation::STUB)
    }

    fn img(alt: &str) -> ElementNode {
        el("img")
            .with_prop(AttributeNode::string("alt", alt))
            .self_closing()
    }

    fn literal(value: LiteralValue) -> ChildNode {
        ChildNode::expression(Expression::literal(value))
    }

    #[test]
    fn test_no_children() {
        assert!(!has_accessible_child(&el("a")));
    }

    #[test]
    fn test_text() {
        assert!(has_accessible_child(&el("a").with_child(ChildNode::text("Click here"))));
    }

    #[test]
    fn test_whitespace_text() {
        assert!(!has_accessible_child(&el("a").with_child(ChildNode::text("  \n\t "))));
    }

    #[test]
    fn test_aria_label() {
        let a = el("a").with_prop(AttributeNode::string("aria-label", "Home"));
        assert!(has_accessible_child(&a));
    }

    #[test]
    fn test_whitespace_aria_label() {
        let a = el("a").with_prop(AttributeNode::string("aria-label", "   "));
        assert!(has_accessible_child(&a));

        let empty = el("a").with_prop(AttributeNode::string("aria-label", ""));
        assert!(!has_accessible_child(&empty));
    }

    #[test]
    fn test_dynamic_aria_labelledby() {
        let a = el("a").with_prop(AttributeNode::expression(
            "aria-labelledby",
            Expression::opaque("labelId"),
        ));
        assert!(has_accessible_child(&a));
    }

    #[test]
    fn test_aria_label_from_spread_keys() {
        let a = el("a").with_prop(
            SpreadAttributeNode::new(Expression::opaque("props")).with_keys(["aria-label"]),
        );
        assert!(has_accessible_child(&a));
    }

    #[test]
    fn test_non_string_aria_label() {
        let a = el("a").with_prop(AttributeNode::expression(
            "aria-label",
            Expression::literal(LiteralValue::Null),
        ));
        assert!(!has_accessible_child(&a));
    }

    #[test]
    fn test_expression_literals() {
        for value in [
            LiteralValue::string(""),
            LiteralValue::Null,
            LiteralValue::Undefined,
            LiteralValue::Boolean(true),
            LiteralValue::Boolean(false),
        ] {
            let a = el("a").with_child(literal(value.clone()));
            assert!(!has_accessible_child(&a), "{value:?} should render nothing");
        }

        for value in [LiteralValue::string("Go"), LiteralValue::Number(0.0)] {
            let a = el("a").with_child(literal(value.clone()));
            assert!(has_accessible_child(&a), "{value:?} should render content");
        }
    }

    #[test]
    fn test_opaque_expression_fails_open() {
        let a = el("a").with_child(ChildNode::expression(Expression::opaque("someVariable")));
        assert!(has_accessible_child(&a));
    }

    #[test]
    fn test_undefined_identifier_and_empty_container() {
        let a = el("a")
            .with_child(ChildNode::expression(Expression::opaque("undefined")))
            .with_child(ChildNode::expression(Expression::Empty));
        assert!(!has_accessible_child(&a));
    }

    #[test]
    fn test_img_alt() {
        assert!(has_accessible_child(&el("a").with_child(img("Download"))));
        assert!(!has_accessible_child(&el("a").with_child(img(""))));
    }

    #[test]
    fn test_img_dynamic_alt_is_not_proof() {
        let image =
            el("img").with_prop(AttributeNode::expression("alt", Expression::opaque("alt")));
        assert!(!has_accessible_child(&el("a").with_child(image)));
    }

    #[test]
    fn test_nested_text() {
        let strong = el("strong").with_child(ChildNode::text("Deep"));
        let a = el("a").with_child(el("span").with_child(strong));
        assert!(has_accessible_child(&a));
    }

    #[test]
    fn test_nested_hidden_element() {
        let hidden_span = el("span")
            .with_prop(AttributeNode::string("aria-hidden", "true"))
            .with_child(ChildNode::text("Icon"));
        assert!(!has_accessible_child(&el("a").with_child(hidden_span)));
    }

    #[test]
    fn test_nested_element_with_aria_label() {
        let svg = el("svg").with_prop(AttributeNode::string("aria-label", "Search"));
        assert!(has_accessible_child(&el("a").with_child(svg)));
    }

    #[test]
    fn test_fragment() {
        let empty = el("a").with_child(ChildNode::fragment([ChildNode::text(" ")]));
        assert!(!has_accessible_child(&empty));

        let full = el("a").with_child(ChildNode::fragment([ChildNode::fragment([
            ChildNode::text("Nested"),
        ])]));
        assert!(has_accessible_child(&full));
    }

    #[test]
    fn test_spread_child() {
        let a = el("a").with_child(ChildNode::spread(Expression::opaque("items")));
        assert!(has_accessible_child(&a));
    }

    #[test]
    fn test_content_props() {
        let inner_html = el("a").with_prop(AttributeNode::expression(
            "dangerouslySetInnerHTML",
            Expression::opaque("{ __html: html }"),
        ));
        assert!(has_accessible_child(&inner_html));

        let children = el("a").with_prop(AttributeNode::string("children", "Read more"));
        assert!(has_accessible_child(&children));

        let empty_children = el("a").with_prop(AttributeNode::string("children", ""));
        assert!(!has_accessible_child(&empty_children));
    }

    #[test]
    fn test_idempotent() {
        let a = el("a").with_child(el("span").with_child(img("")));
        let first = has_accessible_child(&a);
        assert_eq!(first, has_accessible_child(&a));
        assert!(!first);
    }
}
