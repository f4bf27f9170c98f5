//! Static attribute value resolution.
//!
//! Reads what an attribute is known to hold before the code runs. A value the
//! analysis cannot see (a dynamic expression, or a key supplied by a spread) is
//! reported as [`ResolvedValue::Indeterminate`], never guessed.

use lumen_relief::ast::{AttributeValue, Expression, LiteralValue, PropNode};

/// Valueless attributes (`<div hidden>`) read as `true`.
static TRUE: LiteralValue = LiteralValue::Boolean(true);
static UNDEFINED: LiteralValue = LiteralValue::Undefined;

/// Statically known value of an attribute or expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedValue<'a> {
    /// No attribute with that name
    Absent,
    /// Value known at analysis time
    Literal(&'a LiteralValue),
    /// Value only known at runtime
    Indeterminate,
}

impl<'a> ResolvedValue<'a> {
    #[inline]
    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    #[inline]
    pub fn is_indeterminate(self) -> bool {
        matches!(self, Self::Indeterminate)
    }

    #[inline]
    pub fn literal(self) -> Option<&'a LiteralValue> {
        match self {
            Self::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// The literal string payload, if any
    #[inline]
    pub fn as_str(self) -> Option<&'a str> {
        self.literal().and_then(LiteralValue::as_str)
    }

    /// Literal string of length > 0
    #[inline]
    pub fn is_non_empty_string(self) -> bool {
        self.as_str().is_some_and(|s| !s.is_empty())
    }

    /// Boolean reading of the literal, where `"true"`/`"false"` strings count
    /// as booleans the way markup attribute values are read.
    pub fn as_bool(self) -> Option<bool> {
        match self.literal()? {
            LiteralValue::Boolean(b) => Some(*b),
            LiteralValue::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            LiteralValue::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }

    /// Literal that is truthy; absent and indeterminate values are not.
    #[inline]
    pub fn is_truthy(self) -> bool {
        self.literal().is_some_and(is_truthy)
    }
}

/// JavaScript truthiness of a literal, after the `"false"` string reading.
pub fn is_truthy(value: &LiteralValue) -> bool {
    match value {
        LiteralValue::Boolean(b) => *b,
        LiteralValue::String(s) => !s.is_empty() && !s.eq_ignore_ascii_case("false"),
        LiteralValue::Number(n) => *n != 0.0 && !n.is_nan(),
        LiteralValue::Null | LiteralValue::Undefined => false,
        LiteralValue::Object(_) => true,
    }
}

/// Resolve the attribute `name` on an element's props.
///
/// The last matching prop wins, as later attributes overwrite earlier ones.
/// Names compare ASCII case-insensitively. A spread only matches when the
/// host listed `name` among its known keys.
pub fn resolve_attribute<'a>(props: &'a [PropNode], name: &str) -> ResolvedValue<'a> {
    for prop in props.iter().rev() {
        match prop {
            PropNode::Attribute(attr) => {
                if !attr.name.eq_ignore_ascii_case(name) {
                    continue;
                }
                return match &attr.value {
                    None => ResolvedValue::Literal(&TRUE),
                    Some(AttributeValue::Literal { value }) => ResolvedValue::Literal(value),
                    Some(AttributeValue::Expression { expression }) => {
                        resolve_expression(expression)
                    }
                };
            }
            PropNode::Spread(spread) => {
                let provides_name = spread
                    .keys
                    .as_ref()
                    .is_some_and(|keys| keys.iter().any(|key| key.eq_ignore_ascii_case(name)));
                if provides_name {
                    return ResolvedValue::Indeterminate;
                }
            }
        }
    }

    ResolvedValue::Absent
}

/// Resolve the value of a `{...}` container.
///
/// An empty container and the bare `undefined` identifier read as `undefined`.
pub fn resolve_expression(expression: &Expression) -> ResolvedValue<'_> {
    match expression {
        Expression::Literal { value } => ResolvedValue::Literal(value),
        Expression::Empty => ResolvedValue::Literal(&UNDEFINED),
        Expression::Opaque { content } if content.trim() == "undefined" => {
            ResolvedValue::Literal(&UNDEFINED)
        }
        Expression::Opaque { .. } => ResolvedValue::Indeterminate,
    }
}

/// Whether any prop named `name` exists, whatever its value
#[inline]
pub fn has_attribute(props: &[PropNode], name: &str) -> bool {
    !resolve_attribute(props, name).is_absent()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_relief::ast::{AttributeNode, SourceLocation, SpreadAttributeNode};

    fn string_attr(name: &str, value: &str) -> PropNode {
        AttributeNode::string(name, value).into()
    }

    #[test]
    fn test_absent() {
        let props = vec![string_attr("href", "/")];
        assert_eq!(resolve_attribute(&props, "alt"), ResolvedValue::Absent);
        assert!(!has_attribute(&props, "alt"));
    }

    #[test]
    fn test_string_literal() {
        let props = vec![string_attr("alt", "Download")];
        let value = resolve_attribute(&props, "alt");
        assert_eq!(value.as_str(), Some("Download"));
        assert!(value.is_non_empty_string());
    }

    #[test]
    fn test_empty_string_is_not_non_empty() {
        let props = vec![string_attr("alt", "")];
        let value = resolve_attribute(&props, "alt");
        assert_eq!(value.as_str(), Some(""));
        assert!(!value.is_non_empty_string());
    }

    #[test]
    fn test_valueless_reads_true() {
        let props = vec![AttributeNode::new("hidden", SourceLocation::STUB).into()];
        let value = resolve_attribute(&props, "hidden");
        assert_eq!(value.as_bool(), Some(true));
        assert!(value.is_truthy());
    }

    #[test]
    fn test_later_duplicate_shadows_earlier() {
        let props = vec![string_attr("title", "first"), string_attr("title", "second")];
        assert_eq!(resolve_attribute(&props, "title").as_str(), Some("second"));
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let props = vec![string_attr("ARIA-LABEL", "Close")];
        assert_eq!(resolve_attribute(&props, "aria-label").as_str(), Some("Close"));
    }

    #[test]
    fn test_expression_literal_and_opaque() {
        let props: Vec<PropNode> = vec![
            AttributeNode::expression(
                "aria-hidden",
                Expression::literal(LiteralValue::Boolean(true)),
            )
            .into(),
            AttributeNode::expression("aria-label", Expression::opaque("label")).into(),
            AttributeNode::expression("title", Expression::opaque("undefined")).into(),
        ];
        assert_eq!(resolve_attribute(&props, "aria-hidden").as_bool(), Some(true));
        assert!(resolve_attribute(&props, "aria-label").is_indeterminate());
        assert_eq!(
            resolve_attribute(&props, "title").literal(),
            Some(&LiteralValue::Undefined)
        );
    }

    #[test]
    fn test_spread_with_known_key_is_indeterminate() {
        let props: Vec<PropNode> = vec![
            string_attr("aria-label", "Static"),
            SpreadAttributeNode::new(Expression::opaque("rest"))
                .with_keys(["aria-label"])
                .into(),
        ];
        assert!(resolve_attribute(&props, "aria-label").is_indeterminate());
    }

    #[test]
    fn test_spread_without_keys_is_transparent() {
        let props: Vec<PropNode> = vec![
            string_attr("aria-label", "Static"),
            SpreadAttributeNode::new(Expression::opaque("rest")).into(),
        ];
        assert_eq!(resolve_attribute(&props, "aria-label").as_str(), Some("Static"));
        assert!(resolve_attribute(&props, "title").is_absent());
    }

    #[test]
    fn test_explicit_attribute_after_spread_wins() {
        let props: Vec<PropNode> = vec![
            SpreadAttributeNode::new(Expression::opaque("rest"))
                .with_keys(["alt"])
                .into(),
            string_attr("alt", "Logo"),
        ];
        assert_eq!(resolve_attribute(&props, "alt").as_str(), Some("Logo"));
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&LiteralValue::string("hidden")));
        assert!(!is_truthy(&LiteralValue::string("")));
        assert!(!is_truthy(&LiteralValue::string("false")));
        assert!(!is_truthy(&LiteralValue::Number(0.0)));
        assert!(!is_truthy(&LiteralValue::Number(f64::NAN)));
        assert!(is_truthy(&LiteralValue::Number(1.0)));
        assert!(!is_truthy(&LiteralValue::Null));
        assert!(!is_truthy(&LiteralValue::Undefined));
    }

    #[test]
    fn test_empty_container_reads_undefined() {
        assert_eq!(
            resolve_expression(&Expression::Empty).literal(),
            Some(&LiteralValue::Undefined)
        );
    }
}
