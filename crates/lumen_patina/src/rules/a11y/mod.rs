//! Accessibility (a11y) lint rules.
//!
//! These rules make sure interactive and structural elements expose content
//! that assistive technologies can announce.
//!
//! Based on [eslint-plugin-jsx-a11y](https://github.com/jsx-eslint/eslint-plugin-jsx-a11y).

mod anchor_has_content;
mod has_content;
mod heading_has_content;

pub use anchor_has_content::AnchorHasContent;
pub use has_content::{ContentFamily, ContentVerdict, HasContentOptions};
pub use heading_has_content::HeadingHasContent;
