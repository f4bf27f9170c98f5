//! Hidden-state evaluation.
//!
//! Decides whether an element is removed from the accessibility tree no matter
//! what it contains. Only hiding that can be proven from literal values counts:
//! a dynamic `aria-hidden={flag}` leaves the element visible to the analysis.

use super::attribute::{resolve_attribute, ResolvedValue};
use lightningcss::properties::display::{Display, DisplayKeyword, Visibility};
use lightningcss::properties::Property;
use lightningcss::stylesheet::{ParserOptions, StyleAttribute};
use lumen_relief::ast::{LiteralValue, ObjectProperty, PropNode};
use std::borrow::Cow;

/// Whether the element `tag` with `props` is hidden from screen readers.
///
/// Checked in order, stopping at the first hit:
/// `aria-hidden="true"`, a truthy `hidden`, an inline style with
/// `display: none` or `visibility: hidden`, and `<input type="hidden">`.
pub fn is_hidden_from_screen_reader(tag: &str, props: &[PropNode]) -> bool {
    is_aria_hidden(props)
        || has_hidden_attribute(props)
        || has_hiding_style(props)
        || is_hidden_input(tag, props)
}

#[inline]
fn is_aria_hidden(props: &[PropNode]) -> bool {
    resolve_attribute(props, "aria-hidden").as_bool() == Some(true)
}

#[inline]
fn has_hidden_attribute(props: &[PropNode]) -> bool {
    resolve_attribute(props, "hidden").is_truthy()
}

fn has_hiding_style(props: &[PropNode]) -> bool {
    let css: Cow<'_, str> = match resolve_attribute(props, "style") {
        ResolvedValue::Literal(LiteralValue::String(css)) => Cow::Borrowed(css.as_str()),
        ResolvedValue::Literal(LiteralValue::Object(properties)) => {
            Cow::Owned(object_to_declarations(properties))
        }
        _ => return false,
    };

    declares_hidden(&css)
}

fn is_hidden_input(tag: &str, props: &[PropNode]) -> bool {
    tag == "input"
        && resolve_attribute(props, "type")
            .as_str()
            .is_some_and(|ty| ty.eq_ignore_ascii_case("hidden"))
}

/// Render a static style object as a CSS declaration list.
///
/// Only string values can spell `none` or `hidden`; other entries are skipped.
fn object_to_declarations(properties: &[ObjectProperty]) -> String {
    let mut css = String::new();
    for property in properties {
        if let LiteralValue::String(value) = &property.value {
            css.push_str(&property.key);
            css.push(':');
            css.push_str(value);
            css.push(';');
        }
    }
    css
}

/// Whether a CSS declaration list contains `display: none` or `visibility: hidden`.
///
/// Malformed declarations are skipped; the rest of the list still counts.
fn declares_hidden(css: &str) -> bool {
    let css = css.to_ascii_lowercase();
    let options = ParserOptions {
        error_recovery: true,
        ..ParserOptions::default()
    };
    let Ok(style) = StyleAttribute::parse(&css, options) else {
        tracing::trace!(css = css.as_str(), "unparsable inline style, treating as visible");
        return false;
    };

    let declarations = &style.declarations;
    declarations
        .declarations
        .iter()
        .chain(declarations.important_declarations.iter())
        .any(is_hiding_property)
}

#[inline]
fn is_hiding_property(property: &Property) -> bool {
    matches!(
        property,
        Property::Display(Display::Keyword(DisplayKeyword::None))
            | Property::Visibility(Visibility::Hidden)
    )
}
