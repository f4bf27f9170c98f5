//! Rule trait and registry for lint rules.

use crate::config::{ConfigError, LintConfig};
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rules::a11y::{AnchorHasContent, HeadingHasContent};
use lumen_relief::ast::{ElementNode, RootNode};

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Accessibility (a11y) rules
    Accessibility,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "jsx-a11y/anchor-has-content")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Default severity
    pub default_severity: Severity,
}

/// Rule trait for implementing lint rules
///
/// Rules implement visitor-like methods that are called during AST traversal.
/// Each method receives a mutable reference to LintContext for reporting diagnostics.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Run on the document root (called once per document)
    #[allow(unused_variables)]
    fn run_on_root(&self, ctx: &mut LintContext<'_>, root: &RootNode) {}

    /// Called when entering an element node
    #[allow(unused_variables)]
    fn enter_element(&self, ctx: &mut LintContext<'_>, element: &ElementNode) {}

    /// Called when exiting an element node
    #[allow(unused_variables)]
    fn exit_element(&self, ctx: &mut LintContext<'_>, element: &ElementNode) {}
}

/// A registered rule with the severity it reports at
pub struct RuleEntry {
    pub rule: Box<dyn Rule>,
    pub severity: Severity,
}

impl RuleEntry {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.rule.meta().name
    }
}

/// Names of every built-in rule, in registration order
pub const BUILTIN_RULES: &[&str] = &[AnchorHasContent::NAME, HeadingHasContent::NAME];

/// Build a built-in rule from its configured options.
///
/// Returns `None` for names that are not built-in rules.
fn create_builtin(
    name: &str,
    options: Option<&serde_json::Value>,
) -> Option<Result<Box<dyn Rule>, serde_json::Error>> {
    let rule: Result<Box<dyn Rule>, serde_json::Error> = match name {
        AnchorHasContent::NAME => {
            AnchorHasContent::from_options(options).map(|r| Box::new(r) as Box<dyn Rule>)
        }
        HeadingHasContent::NAME => {
            HeadingHasContent::from_options(options).map(|r| Box::new(r) as Box<dyn Rule>)
        }
        _ => return None,
    };
    Some(rule)
}

/// Registry holding all enabled lint rules
pub struct RuleRegistry {
    rules: Vec<RuleEntry>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule at its default severity
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        let severity = rule.meta().default_severity;
        self.register_with_severity(rule, severity);
    }

    /// Register a rule at an explicit severity
    pub fn register_with_severity(&mut self, rule: Box<dyn Rule>, severity: Severity) {
        self.rules.push(RuleEntry { rule, severity });
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[RuleEntry] {
        &self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a registered rule by name
    pub fn get(&self, name: &str) -> Option<&RuleEntry> {
        self.rules.iter().find(|entry| entry.name() == name)
    }

    /// Create registry with all built-in rules at default options
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();

        // ============================================
        // Accessibility Rules (Warning)
        // ============================================
        // Based on eslint-plugin-jsx-a11y.

        registry.register(Box::new(AnchorHasContent::default()));
        registry.register(Box::new(HeadingHasContent::default()));

        registry
    }

    /// Create registry from a lint configuration.
    ///
    /// Every built-in rule runs unless configured `"off"`. Rule options are
    /// validated here, before any document is linted.
    pub fn from_config(config: &LintConfig) -> Result<Self, ConfigError> {
        if let Some(unknown) = config
            .rules
            .keys()
            .find(|name| !BUILTIN_RULES.contains(&name.as_str()))
        {
            return Err(ConfigError::UnknownRule(unknown.clone()));
        }

        let mut registry = Self::new();
        for &name in BUILTIN_RULES {
            let setting = config.rule(name);
            let options = setting.and_then(|s| s.options());

            let Some(rule) = create_builtin(name, options) else {
                continue;
            };
            let rule = rule.map_err(|source| ConfigError::InvalidOptions {
                rule: name.to_string(),
                source,
            })?;

            let severity = match setting {
                None => rule.meta().default_severity,
                Some(setting) => match setting.level().severity() {
                    Some(severity) => severity,
                    None => continue,
                },
            };
            registry.register_with_severity(rule, severity);
        }

        Ok(registry)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
