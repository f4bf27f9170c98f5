//! jsx-a11y/heading-has-content
//!
//! Require heading elements (h1-h6) to have accessible content.
//!
//! Empty headings are not accessible to screen reader users. A heading that
//! is itself hidden from screen readers is left alone.
//!
//! Based on eslint-plugin-jsx-a11y heading-has-content rule.

use super::has_content::{ContentFamily, HasContentOptions};
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};
use lumen_relief::ast::ElementNode;

static META: RuleMeta = RuleMeta {
    name: HeadingHasContent::NAME,
    description: "Require heading elements to have accessible content",
    category: RuleCategory::Accessibility,
    default_severity: Severity::Warning,
};

const FAMILY: ContentFamily = ContentFamily {
    builtin_tags: &["h1", "h2", "h3", "h4", "h5", "h6"],
    check_hidden: true,
    message_key: "lint.a11y.heading_has_content.message",
    help_key: "lint.a11y.heading_has_content.tag_help",
};

/// Require heading elements to have accessible content
#[derive(Debug, Default)]
pub struct HeadingHasContent {
    pub options: HasContentOptions,
}

impl HeadingHasContent {
    pub const NAME: &'static str = "jsx-a11y/heading-has-content";

    pub fn new(options: HasContentOptions) -> Self {
        Self { options }
    }

    pub fn from_options(options: Option<&serde_json::Value>) -> Result<Self, serde_json::Error> {
        HasContentOptions::from_value(options).map(Self::new)
    }
}

impl Rule for HeadingHasContent {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn enter_element(&self, ctx: &mut LintContext<'_>, element: &ElementNode) {
        FAMILY.check(ctx, element, &self.options);
    }
}
