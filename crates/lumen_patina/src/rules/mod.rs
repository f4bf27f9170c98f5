//! Lint rules for JSX-style templates.

pub mod a11y;
