//! Shared evaluation for the "must have accessible content" rule family.
//!
//! Anchors and headings follow the same gates, in this order:
//!
//! 1. type: the tag is in the family or in `options.components`
//! 2. accessible child: [`has_accessible_child`] finds content
//! 3. hidden (headings only): the element itself is hidden
//! 4. attribute fallback: an `options.attributes` entry holds a non-empty string
//!
//! A candidate that passes no gate gets one diagnostic on its opening tag.

use crate::a11y::{has_accessible_child, is_hidden_from_screen_reader, resolve_attribute};
use crate::context::LintContext;
use lumen_carton::{CompactString, FxHashSet};
use lumen_relief::ast::ElementNode;
use serde::Deserialize;

/// Options shared by the content rules
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HasContentOptions {
    /// Extra component names treated as members of the family
    pub components: FxHashSet<CompactString>,
    /// Attributes whose non-empty string value counts as content
    pub attributes: Vec<CompactString>,
}

impl HasContentOptions {
    /// Deserialize options given in configuration. `None` means defaults.
    pub fn from_value(value: Option<&serde_json::Value>) -> Result<Self, serde_json::Error> {
        match value {
            None => Ok(Self::default()),
            Some(value) => Self::deserialize(value),
        }
    }

    pub fn with_components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        self.components.extend(components.into_iter().map(Into::into));
        self
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        self.attributes.extend(attributes.into_iter().map(Into::into));
        self
    }
}

/// Which gate decided an element's outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentVerdict {
    /// Not in the watched family
    NotCandidate,
    HasAccessibleChild,
    Hidden,
    AttributeFallback,
    /// No accessible content: report
    Missing,
}

impl ContentVerdict {
    #[inline]
    pub fn is_violation(self) -> bool {
        self == Self::Missing
    }
}

/// A watched tag family and how it is reported
#[derive(Debug, Clone, Copy)]
pub struct ContentFamily {
    pub builtin_tags: &'static [&'static str],
    /// Whether a hidden element passes
    pub check_hidden: bool,
    pub message_key: &'static str,
    /// Help key, formatted with `{tag}`
    pub help_key: &'static str,
}

impl ContentFamily {
    #[inline]
    pub fn is_candidate(&self, tag: &str, options: &HasContentOptions) -> bool {
        self.builtin_tags.contains(&tag) || options.components.contains(tag)
    }

    /// Run the gates on `element`.
    pub fn evaluate(
        &self,
        element: &ElementNode,
        options: &HasContentOptions,
    ) -> ContentVerdict {
        let tag = element.tag();
        if !self.is_candidate(&tag, options) {
            return ContentVerdict::NotCandidate;
        }

        if has_accessible_child(element) {
            return ContentVerdict::HasAccessibleChild;
        }

        if self.check_hidden && is_hidden_from_screen_reader(&tag, &element.props) {
            return ContentVerdict::Hidden;
        }

        let has_fallback = options
            .attributes
            .iter()
            .any(|name| resolve_attribute(&element.props, name).is_non_empty_string());
        if has_fallback {
            return ContentVerdict::AttributeFallback;
        }

        ContentVerdict::Missing
    }

    /// Evaluate `element` and report it when it lacks accessible content.
    pub fn check(
        &self,
        ctx: &mut LintContext<'_>,
        element: &ElementNode,
        options: &HasContentOptions,
    ) {
        let verdict = self.evaluate(element, options);
        if !verdict.is_violation() {
            return;
        }

        let tag = element.tag();
        tracing::trace!(
            tag = %tag,
            parent = ctx.parent_element().map(|p| p.tag.as_str()),
            "element has no accessible content"
        );

        let message = ctx.t(self.message_key);
        let help = ctx.t_fmt(self.help_key, &[("tag", tag.as_ref())]);
        ctx.report_with_help(message.as_ref(), &element.loc, help);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_relief::ast::{AttributeNode, ChildNode, SourceLocation};

    const FAMILY: ContentFamily = ContentFamily {
        builtin_tags: &["a"],
        check_hidden: false,
        message_key: "lint.a11y.anchor_has_content.message",
        help_key: "lint.a11y.anchor_has_content.help",
    };

    fn el(tag: &str) -> ElementNode {
        ElementNode::new(tag, SourceLocation::STUB)
    }

    #[test]
    fn test_verdicts() {
        let options = HasContentOptions::default().with_attributes(["title"]);

        assert_eq!(FAMILY.evaluate(&el("div"), &options), ContentVerdict::NotCandidate);
        assert_eq!(
            FAMILY.evaluate(&el("a").with_child(ChildNode::text("x")), &options),
            ContentVerdict::HasAccessibleChild
        );
        assert_eq!(
            FAMILY.evaluate(&el("a").with_prop(AttributeNode::string("title", "Go")), &options),
            ContentVerdict::AttributeFallback
        );
        assert_eq!(FAMILY.evaluate(&el("a"), &options), ContentVerdict::Missing);
    }

    #[test]
    fn test_hidden_gate_only_when_enabled() {
        let hidden = el("a").with_prop(AttributeNode::string("aria-hidden", "true"));
        let options = HasContentOptions::default();

        assert_eq!(FAMILY.evaluate(&hidden, &options), ContentVerdict::Missing);

        let with_hidden_gate = ContentFamily {
            check_hidden: true,
            ..FAMILY
        };
        assert_eq!(with_hidden_gate.evaluate(&hidden, &options), ContentVerdict::Hidden);
    }

    #[test]
    fn test_child_gate_runs_before_fallback() {
        let options = HasContentOptions::default().with_attributes(["title"]);
        let element = el("a")
            .with_prop(AttributeNode::string("title", "Go"))
            .with_child(ChildNode::text("Go"));
        assert_eq!(FAMILY.evaluate(&element, &options), ContentVerdict::HasAccessibleChild);
    }

    #[test]
    fn test_components_extend_family() {
        let options = HasContentOptions::default().with_components(["Link"]);
        assert!(FAMILY.is_candidate("Link", &options));
        assert!(!FAMILY.is_candidate("link", &options));
        assert!(!FAMILY.is_candidate("Link", &HasContentOptions::default()));
    }

    #[test]
    fn test_options_from_value() {
        let value = serde_json::json!({ "components": ["Link"], "attributes": ["label"] });
        let options = HasContentOptions::from_value(Some(&value)).unwrap();
        assert!(options.components.contains("Link"));
        assert_eq!(options.attributes, vec![CompactString::from("label")]);

        assert_eq!(
            HasContentOptions::from_value(None).unwrap(),
            HasContentOptions::default()
        );
        let partial = serde_json::json!({ "attributes": [] });
        assert!(HasContentOptions::from_value(Some(&partial)).is_ok());
        let unknown = serde_json::json!({ "elements": [] });
        assert!(HasContentOptions::from_value(Some(&unknown)).is_err());
    }
}
