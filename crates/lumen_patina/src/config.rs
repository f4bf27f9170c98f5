//! Lint configuration.
//!
//! The `lint` section of `lumen.config.json`, in the shape ESLint users know:
//!
//! ```json
//! {
//!   "locale": "en",
//!   "rules": {
//!     "jsx-a11y/anchor-has-content": ["error", { "components": ["Link"] }],
//!     "jsx-a11y/heading-has-content": "off"
//!   }
//! }
//! ```

use crate::diagnostic::Severity;
use lumen_carton::i18n::Locale;
use lumen_carton::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Lint configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Message locale (`en`, `ja`, `zh`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Per-rule settings. Rules not listed run with their defaults.
    #[serde(default)]
    pub rules: FxHashMap<String, RuleSetting>,
}

impl LintConfig {
    /// Parse a standalone lint configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the configured locale
    pub fn locale(&self) -> Result<Locale, ConfigError> {
        match &self.locale {
            None => Ok(Locale::default()),
            Some(code) => {
                Locale::parse(code).ok_or_else(|| ConfigError::InvalidLocale(code.clone()))
            }
        }
    }

    /// Setting for `rule`, if the configuration mentions it
    #[inline]
    pub fn rule(&self, rule: &str) -> Option<&RuleSetting> {
        self.rules.get(rule)
    }
}

/// A rule's level, optionally with options: `"warn"` or `["warn", {...}]`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RuleSetting {
    Level(RuleLevel),
    WithOptions(RuleLevel, serde_json::Value),
}

impl RuleSetting {
    #[inline]
    pub fn level(&self) -> RuleLevel {
        match self {
            Self::Level(level) | Self::WithOptions(level, _) => *level,
        }
    }

    #[inline]
    pub fn options(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Level(_) => None,
            Self::WithOptions(_, options) => Some(options),
        }
    }
}

/// Rule level as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

impl RuleLevel {
    /// Severity a running rule reports with, `None` when turned off
    #[inline]
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}

/// Configuration error, raised before any document is linted
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    #[error("invalid options for `{rule}`: {source}")]
    InvalidOptions {
        rule: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported locale `{0}` (expected one of: en, ja, zh)")]
    InvalidLocale(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
