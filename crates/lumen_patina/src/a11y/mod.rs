//! Accessible-content detection core.
//!
//! Three pure, read-only analyses over the AST, leaf first:
//!
//! - [`attribute`]: what an attribute is statically known to hold
//! - [`hidden`]: whether an element is removed from the accessibility tree
//! - [`accessible_child`]: whether an element exposes perceivable content
//!
//! Rules in [`crate::rules::a11y`] combine them into diagnostics.

pub mod accessible_child;
pub mod attribute;
pub mod hidden;

pub use accessible_child::{has_accessible_child, renders_content};
pub use attribute::{has_attribute, resolve_attribute, resolve_expression, ResolvedValue};
pub use hidden::is_hidden_from_screen_reader;
