//! Diagnostic types for lumen_patina.
//!
//! Uses `CompactString` for efficient small string storage.

use lumen_carton::CompactString;
use lumen_relief::ast::SourceLocation;
use oxc_diagnostics::OxcDiagnostic;
use oxc_span::Span;
use serde::{Deserialize, Serialize};

/// Lint diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// ESLint-compatible numeric level (2 = error, 1 = warning)
    #[inline]
    pub const fn as_level(self) -> u8 {
        match self {
            Self::Error => 2,
            Self::Warning => 1,
        }
    }
}

/// A lint diagnostic with rich information for display.
///
/// `loc` is the opening tag of the offending element. Diagnostics are
/// immutable once reported.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// Rule that triggered this diagnostic
    pub rule_name: &'static str,
    /// Severity level
    pub severity: Severity,
    /// Primary message (CompactString for efficiency)
    pub message: CompactString,
    /// Reported span
    pub loc: SourceLocation,
    /// Help message for fixing (optional, CompactString)
    pub help: Option<CompactString>,
}

impl LintDiagnostic {
    /// Create a diagnostic with the given severity
    #[inline]
    pub fn new(
        rule_name: &'static str,
        severity: Severity,
        message: impl Into<CompactString>,
        loc: SourceLocation,
    ) -> Self {
        Self {
            rule_name,
            severity,
            message: message.into(),
            loc,
            help: None,
        }
    }

    /// Create a new error diagnostic
    #[inline]
    pub fn error(
        rule_name: &'static str,
        message: impl Into<CompactString>,
        loc: SourceLocation,
    ) -> Self {
        Self::new(rule_name, Severity::Error, message, loc)
    }

    /// Create a new warning diagnostic
    #[inline]
    pub fn warn(
        rule_name: &'static str,
        message: impl Into<CompactString>,
        loc: SourceLocation,
    ) -> Self {
        Self::new(rule_name, Severity::Warning, message, loc)
    }

    /// Add a help message
    #[inline]
    pub fn with_help(mut self, help: impl Into<CompactString>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Start byte offset
    #[inline]
    pub fn start(&self) -> u32 {
        self.loc.start.offset
    }

    /// End byte offset
    #[inline]
    pub fn end(&self) -> u32 {
        self.loc.end.offset
    }

    /// Convert to OxcDiagnostic for rich rendering
    #[inline]
    pub fn into_oxc_diagnostic(self) -> OxcDiagnostic {
        let mut diag = match self.severity {
            Severity::Error => OxcDiagnostic::error(self.message.to_string()),
            Severity::Warning => OxcDiagnostic::warn(self.message.to_string()),
        };

        diag = diag.with_label(Span::new(self.loc.start.offset, self.loc.end.offset));

        if let Some(help) = self.help {
            diag = diag.with_help(help.to_string());
        }

        diag
    }
}

/// Summary of lint results
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub file_count: usize,
}

impl LintSummary {
    #[inline]
    pub fn add(&mut self, diagnostic: &LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
