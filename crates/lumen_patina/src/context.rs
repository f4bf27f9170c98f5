//! Lint context for rule execution.

use crate::diagnostic::{LintDiagnostic, Severity};
use lumen_carton::i18n::{t, t_fmt, Locale};
use lumen_carton::{CompactString, FxHashSet, SmallVec};
use lumen_relief::ast::SourceLocation;
use std::borrow::Cow;

/// Context for tracking element state during traversal
#[derive(Debug, Clone)]
pub struct ElementContext {
    /// Resolved tag or component name
    pub tag: CompactString,
}

impl ElementContext {
    #[inline]
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self { tag: tag.into() }
    }
}

/// Lint context provides utilities for rules during execution.
///
/// Holds the diagnostic sink for one document plus the ancestry of the
/// element being visited, so rules can look up their parent without the
/// AST storing back-references.
pub struct LintContext<'a> {
    /// Filename for diagnostics
    pub filename: &'a str,
    /// Collected diagnostics
    diagnostics: Vec<LintDiagnostic>,
    /// Current rule name (set by visitor before calling rule methods)
    pub current_rule: &'static str,
    /// Severity the current rule reports with (set by visitor)
    pub current_severity: Severity,
    /// Locale for i18n messages
    locale: Locale,
    /// Rules allowed to run (None = all)
    enabled_rules: Option<&'a FxHashSet<String>>,
    /// Ancestor stack, innermost last
    element_stack: SmallVec<[ElementContext; 16]>,
    error_count: usize,
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 16;

    /// Create a new lint context
    #[inline]
    pub fn new(filename: &'a str) -> Self {
        Self::with_locale(filename, Locale::default())
    }

    /// Create a new lint context with a message locale
    #[inline]
    pub fn with_locale(filename: &'a str, locale: Locale) -> Self {
        Self {
            filename,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            current_rule: "",
            current_severity: Severity::Warning,
            locale,
            enabled_rules: None,
            element_stack: SmallVec::new(),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Restrict which rules run
    #[inline]
    pub fn set_enabled_rules(&mut self, rules: Option<&'a FxHashSet<String>>) {
        self.enabled_rules = rules;
    }

    /// Check if a rule is enabled
    #[inline]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.enabled_rules
            .map_or(true, |rules| rules.contains(rule_name))
    }

    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate a message key in the context's locale
    #[inline]
    pub fn t(&self, key: &str) -> Cow<'static, str> {
        t(self.locale, key)
    }

    /// Translate a message key with `{name}` substitutions
    #[inline]
    pub fn t_fmt(&self, key: &str, vars: &[(&str, &str)]) -> String {
        t_fmt(self.locale, key, vars)
    }

    /// Report a lint diagnostic
    #[inline]
    pub fn report(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        tracing::trace!(
            rule = diagnostic.rule_name,
            file = self.filename,
            offset = diagnostic.start(),
            "reported diagnostic"
        );
        self.diagnostics.push(diagnostic);
    }

    /// Report at the current rule's configured severity
    #[inline]
    pub fn report_with_help(
        &mut self,
        message: impl Into<CompactString>,
        loc: &SourceLocation,
        help: impl Into<CompactString>,
    ) {
        self.report(
            LintDiagnostic::new(self.current_rule, self.current_severity, message, *loc)
                .with_help(help),
        );
    }

    /// Get collected diagnostics
    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }

    /// Get reference to collected diagnostics
    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Push an element onto the context stack
    #[inline]
    pub fn push_element(&mut self, ctx: ElementContext) {
        self.element_stack.push(ctx);
    }

    /// Pop an element from the context stack
    #[inline]
    pub fn pop_element(&mut self) -> Option<ElementContext> {
        self.element_stack.pop()
    }

    /// Get current element context (top of stack)
    #[inline]
    pub fn current_element(&self) -> Option<&ElementContext> {
        self.element_stack.last()
    }

    /// Get parent element context
    #[inline]
    pub fn parent_element(&self) -> Option<&ElementContext> {
        let len = self.element_stack.len();
        if len >= 2 {
            self.element_stack.get(len - 2)
        } else {
            None
        }
    }

    /// Nesting depth of the current element (1 = top level)
    #[inline]
    pub fn depth(&self) -> usize {
        self.element_stack.len()
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_stack() {
        let mut ctx = LintContext::new("test.json");
        assert!(ctx.current_element().is_none());

        ctx.push_element(ElementContext::new("nav"));
        assert!(ctx.parent_element().is_none());

        ctx.push_element(ElementContext::new("a"));
        assert_eq!(ctx.current_element().map(|e| e.tag.as_str()), Some("a"));
        assert_eq!(ctx.parent_element().map(|e| e.tag.as_str()), Some("nav"));
        assert_eq!(ctx.depth(), 2);

        ctx.pop_element();
        assert_eq!(ctx.current_element().map(|e| e.tag.as_str()), Some("nav"));
    }

    #[test]
    fn test_report_uses_current_severity() {
        let mut ctx = LintContext::new("test.json");
        ctx.current_rule = "test/rule";
        ctx.current_severity = Severity::Error;
        ctx.report_with_help("message", &SourceLocation::STUB, "help");
        ctx.current_severity = Severity::Warning;
        ctx.report_with_help("message", &SourceLocation::STUB, "help");

        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.diagnostics()[0].rule_name, "test/rule");
        assert_eq!(ctx.diagnostics()[0].help.as_deref(), Some("help"));
    }

    #[test]
    fn test_enabled_rules_filter() {
        let enabled: FxHashSet<String> = ["a/b".to_string()].into_iter().collect();
        let mut ctx = LintContext::new("test.json");
        assert!(ctx.is_rule_enabled("x/y"));
        ctx.set_enabled_rules(Some(&enabled));
        assert!(ctx.is_rule_enabled("a/b"));
        assert!(!ctx.is_rule_enabled("x/y"));
    }

    #[test]
    fn test_translation_follows_locale() {
        let ctx = LintContext::with_locale("test.json", Locale::Ja);
        assert_eq!(ctx.locale(), Locale::Ja);
        let fallback = ctx.t("lint.a11y.anchor_has_content.message");
        assert!(!fallback.is_empty());
        assert_ne!(fallback, "lint.a11y.anchor_has_content.message");
    }
}
