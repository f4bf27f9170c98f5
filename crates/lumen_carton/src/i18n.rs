//! Internationalization (i18n) foundation for Lumen.
//!
//! Diagnostic messages are looked up by key from catalogs embedded at compile
//! time. Lookups never fail: a missing translation falls back to English, and
//! a missing key falls back to the key itself.
//!
//! ## Supported Locales
//!
//! - `en` - English (default, always available)
//! - `ja` - Japanese
//! - `zh` - Chinese (Simplified)
//!
//! ## Usage
//!
//! ```rust
//! use lumen_carton::i18n::{t, t_fmt, Locale};
//!
//! let msg = t(Locale::En, "lint.a11y.anchor_has_content.message");
//! assert!(msg.starts_with("Anchors must have content"));
//!
//! let msg = t_fmt(Locale::En, "lint.a11y.heading_has_content.tag_help", &[("tag", "h2")]);
//! assert!(msg.contains("<h2>"));
//! ```

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::str::FromStr;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Locale {
    /// English (default)
    #[default]
    En = 0,
    /// Japanese
    Ja = 1,
    /// Chinese (Simplified)
    Zh = 2,
}

/// Error type for parsing Locale from string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLocaleError;

impl std::fmt::Display for ParseLocaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid locale string")
    }
}

impl std::error::Error for ParseLocaleError {}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_lowercase();
        match s.as_str() {
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::En),
            "ja" | "ja-jp" | "japanese" => Ok(Self::Ja),
            "zh" | "zh-cn" | "zh-hans" | "chinese" => Ok(Self::Zh),
            _ => Err(ParseLocaleError),
        }
    }
}

impl Locale {
    /// All available locales
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Ja, Locale::Zh];

    /// Try to parse locale from string (case-insensitive)
    #[inline]
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Get locale code (BCP 47 format)
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
            Self::Zh => "zh",
        }
    }

    /// Get locale as array index
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Message catalog lookup.
///
/// Messages are indexed by `[locale][key]`.
pub struct Translator {
    messages: [FxHashMap<String, String>; 3],
}

impl Translator {
    /// Get the global translator with the embedded catalogs
    #[inline]
    pub fn new() -> &'static Self {
        &GLOBAL_TRANSLATOR
    }

    /// Get a message without variable substitution
    pub fn get(&self, locale: Locale, key: &str) -> Cow<'_, str> {
        if let Some(msg) = self.messages[locale.index()].get(key) {
            return Cow::Borrowed(msg.as_str());
        }

        if locale != Locale::En {
            if let Some(msg) = self.messages[Locale::En.index()].get(key) {
                return Cow::Borrowed(msg.as_str());
            }
        }

        Cow::Owned(key.to_string())
    }

    /// Get a message with `{name}` placeholders substituted
    pub fn format(&self, locale: Locale, key: &str, vars: &[(&str, &str)]) -> String {
        let mut result = self.get(locale, key).into_owned();
        for (name, value) in vars {
            let placeholder = format!("{{{}}}", name);
            result = result.replace(&placeholder, value);
        }
        result
    }

    /// Check if a key exists for a locale (without fallback)
    #[inline]
    pub fn has_key(&self, locale: Locale, key: &str) -> bool {
        self.messages[locale.index()].contains_key(key)
    }

    /// Get all keys for a locale
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> + '_ {
        self.messages[locale.index()].keys().map(String::as_str)
    }
}

static GLOBAL_TRANSLATOR: Lazy<Translator> = Lazy::new(|| Translator {
    messages: [
        load_catalog(include_str!("i18n/en.json")),
        load_catalog(include_str!("i18n/ja.json")),
        load_catalog(include_str!("i18n/zh.json")),
    ],
});

/// Parse a flat `{ "key": "value" }` catalog. A malformed catalog loads empty
/// and every lookup in it falls back to English.
fn load_catalog(json: &str) -> FxHashMap<String, String> {
    match serde_json::from_str(json) {
        Ok(catalog) => catalog,
        Err(e) => {
            debug_assert!(false, "malformed message catalog: {e}");
            tracing::warn!(error = %e, "malformed message catalog");
            FxHashMap::default()
        }
    }
}

/// Convenience function to get the global translator
#[inline]
pub fn translator() -> &'static Translator {
    &GLOBAL_TRANSLATOR
}

/// Convenience function to translate a message
#[inline]
pub fn t(locale: Locale, key: &str) -> Cow<'static, str> {
    translator().get(locale, key)
}

/// Convenience function to translate with variables
#[inline]
pub fn t_fmt(locale: Locale, key: &str, vars: &[(&str, &str)]) -> String {
    translator().format(locale, key, vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalogs_load() {
        let t = Translator::new();
        let en = t.keys(Locale::En).count();
        assert!(en > 0);
        assert_eq!(t.keys(Locale::Ja).count(), en);
        assert_eq!(t.keys(Locale::Zh).count(), en);
        assert!(!t.has_key(Locale::En, "lint.a11y.heading_has_content.help"));
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("JA-JP".parse::<Locale>(), Ok(Locale::Ja));
        assert_eq!("zh-CN".parse::<Locale>(), Ok(Locale::Zh));
        assert!("unknown".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_code() {
        assert_eq!(Locale::En.code(), "en");
        assert_eq!(Locale::Ja.code(), "ja");
        assert_eq!(Locale::Zh.code(), "zh");
    }

    #[test]
    fn test_catalogs_share_keys() {
        let t = Translator::new();
        for key in t.keys(Locale::En) {
            assert!(t.has_key(Locale::Ja, key), "ja is missing {key}");
            assert!(t.has_key(Locale::Zh, key), "zh is missing {key}");
        }
    }

    #[test]
    fn test_english_messages() {
        assert_eq!(
            t(Locale::En, "lint.a11y.anchor_has_content.message"),
            "Anchors must have content and the content must be accessible by a screen reader."
        );
        assert_eq!(
            t(Locale::En, "lint.a11y.heading_has_content.message"),
            "Headings must have content and the content must be accessible by a screen reader."
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::Ja, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_format_substitutes_variables() {
        let msg = t_fmt(
            Locale::En,
            "lint.a11y.heading_has_content.tag_help",
            &[("tag", "h3")],
        );
        assert!(msg.contains("<h3>"));
        assert!(!msg.contains("{tag}"));
    }
}
