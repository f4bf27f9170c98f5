//! Main linter entry point.

use crate::config::{ConfigError, LintConfig};
use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary};
use crate::rule::{RuleEntry, RuleRegistry};
use crate::visitor::LintVisitor;
use lumen_carton::i18n::Locale;
use lumen_carton::FxHashSet;
use lumen_relief::{AstError, RootNode};

/// Lint result for a single file
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was linted
    pub filename: String,
    /// Collected diagnostics
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl LintResult {
    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main linter struct.
///
/// Owns the rule registry and is shared read-only across documents, so one
/// instance can lint many files in parallel.
pub struct Linter {
    registry: RuleRegistry,
    /// Locale for i18n messages
    locale: Locale,
    /// Optional set of enabled rule names (if None, all rules are enabled)
    enabled_rules: Option<FxHashSet<String>>,
}

impl Linter {
    /// Create a new linter with recommended rules
    #[inline]
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::with_recommended())
    }

    /// Create a linter with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            locale: Locale::default(),
            enabled_rules: None,
        }
    }

    /// Create a linter from a lint configuration
    pub fn from_config(config: &LintConfig) -> Result<Self, ConfigError> {
        let registry = RuleRegistry::from_config(config)?;
        let locale = config.locale()?;
        tracing::debug!(
            rules = registry.len(),
            locale = locale.code(),
            "linter configured"
        );
        Ok(Self::with_registry(registry).with_locale(locale))
    }

    /// Set the locale for i18n messages
    #[inline]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set enabled rules (if None, all rules are enabled)
    ///
    /// Pass a list of rule names to enable only those rules.
    /// Rules not in the list will be skipped during linting.
    #[inline]
    pub fn with_enabled_rules(mut self, rules: Option<Vec<String>>) -> Self {
        self.enabled_rules = rules.map(|r| r.into_iter().collect());
        self
    }

    /// Get the current locale
    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Check if a rule is enabled
    #[inline]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        match &self.enabled_rules {
            Some(set) => set.contains(rule_name),
            None => true,
        }
    }

    /// Lint one document
    pub fn lint_root(&self, root: &RootNode, filename: &str) -> LintResult {
        let mut ctx = LintContext::with_locale(filename, self.locale);
        ctx.set_enabled_rules(self.enabled_rules.as_ref());

        let mut visitor = LintVisitor::new(&mut ctx, self.registry.rules());
        visitor.visit_root(root);

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        let diagnostics = ctx.into_diagnostics();

        tracing::debug!(
            file = filename,
            errors = error_count,
            warnings = warning_count,
            "linted document"
        );

        LintResult {
            filename: filename.to_string(),
            diagnostics,
            error_count,
            warning_count,
        }
    }

    /// Lint a document serialized as JSON
    pub fn lint_json(&self, json: &str, filename: &str) -> Result<LintResult, AstError> {
        let root = RootNode::from_json(json)?;
        Ok(self.lint_root(&root, filename))
    }

    /// Lint multiple documents and aggregate results
    pub fn lint_files(&self, files: &[(String, RootNode)]) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(files.len());
        let mut summary = LintSummary::default();

        for (filename, root) in files {
            let result = self.lint_root(root, filename);
            for diagnostic in &result.diagnostics {
                summary.add(diagnostic);
            }
            results.push(result);
        }

        summary.file_count = files.len();
        (results, summary)
    }

    /// Get the rule registry
    #[inline]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Get all registered rules
    #[inline]
    pub fn rules(&self) -> &[RuleEntry] {
        self.registry.rules()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
