//! # lumen_patina
//!
//! Patina - The accessible-content checker for Lumen.
//!
//! ## Name Origin
//!
//! **Patina** is the layer that forms on bronze over time and tells an
//! expert whether a piece is genuine. `lumen_patina` looks at the surface a
//! JSX document presents to assistive technology and tells whether there is
//! real content under it.
//!
//! ## Usage
//!
//! ```
//! use lumen_patina::Linter;
//! use lumen_relief::{ElementNode, RootNode, SourceLocation};
//!
//! let root = RootNode::new().with_child(ElementNode::new("a", SourceLocation::STUB));
//! let result = Linter::new().lint_root(&root, "page.json");
//! assert_eq!(result.warning_count, 1);
//! ```
//!
//! ## Rules
//!
//! - `jsx-a11y/anchor-has-content` - Require anchors to have accessible content
//! - `jsx-a11y/heading-has-content` - Require headings to have accessible content
//!
//! Both accept `components` (extra tag names for the family) and
//! `attributes` (props whose non-empty string counts as content).

pub mod a11y;
pub mod config;
mod context;
mod diagnostic;
mod linter;
pub mod output;
mod rule;
pub mod rules;
mod visitor;

pub use config::{ConfigError, LintConfig, RuleLevel, RuleSetting};
pub use context::{ElementContext, LintContext};
pub use diagnostic::{LintDiagnostic, LintSummary, Severity};
pub use linter::{LintResult, Linter};
pub use lumen_carton::i18n::Locale;
pub use output::{format_results, format_summary, OutputFormat};
pub use rule::{Rule, RuleCategory, RuleEntry, RuleMeta, RuleRegistry, BUILTIN_RULES};
pub use visitor::LintVisitor;

use lumen_relief::RootNode;

/// Lint a document with the recommended rules
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::new()` directly.
pub fn lint(root: &RootNode, filename: &str) -> LintResult {
    Linter::new().lint_root(root, filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_relief::{AttributeNode, ChildNode, ElementNode, SourceLocation};

    #[test]
    fn test_lint_function() {
        let root = RootNode::new().with_child(ElementNode::new("h2", SourceLocation::STUB));
        let result = lint(&root, "test.json");
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_lint_valid_document() {
        let root = RootNode::new().with_child(
            ElementNode::new("a", SourceLocation::STUB)
                .with_prop(AttributeNode::string("href", "/docs"))
                .with_child(
                    ElementNode::new("span", SourceLocation::STUB)
                        .with_child(ChildNode::text("Docs")),
                ),
        );
        assert!(!lint(&root, "test.json").has_diagnostics());
    }
}
