//! jsx-a11y/anchor-has-content
//!
//! Require anchor elements to have accessible content.
//!
//! Anchor elements without content are not accessible to screen reader users.
//! Content can be text, images with alt text, or elements with aria-label.
//!
//! ## Options
//!
//! - `components`: custom link components checked like `<a>`
//! - `attributes`: props whose non-empty string value labels the link
//!
//! Based on eslint-plugin-jsx-a11y anchor-has-content rule.

use super::has_content::{ContentFamily, HasContentOptions};
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};
use lumen_relief::ast::ElementNode;

static META: RuleMeta = RuleMeta {
    name: AnchorHasContent::NAME,
    description: "Require anchor elements to have accessible content",
    category: RuleCategory::Accessibility,
    default_severity: Severity::Warning,
};

const FAMILY: ContentFamily = ContentFamily {
    builtin_tags: &["a"],
    check_hidden: false,
    message_key: "lint.a11y.anchor_has_content.message",
    help_key: "lint.a11y.anchor_has_content.help",
};

/// Require anchor elements to have accessible content
#[derive(Debug, Default)]
pub struct AnchorHasContent {
    pub options: HasContentOptions,
}

impl AnchorHasContent {
    pub const NAME: &'static str = "jsx-a11y/anchor-has-content";

    pub fn new(options: HasContentOptions) -> Self {
        Self { options }
    }

    /// Build from configured options
    pub fn from_options(options: Option<&serde_json::Value>) -> Result<Self, serde_json::Error> {
        HasContentOptions::from_value(options).map(Self::new)
    }
}

impl Rule for AnchorHasContent {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn enter_element(&self, ctx: &mut LintContext<'_>, element: &ElementNode) {
        FAMILY.check(ctx, element, &self.options);
    }
}
