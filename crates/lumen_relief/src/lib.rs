//! Relief - The sculptured AST surface for Lumen.
//!
//! ## Name Origin
//!
//! A **relief** is a sculpture that rises from a flat background: the shape is
//! there to be read, but it stays bound to its surface. `lumen_relief` is the
//! tree a host carves out of JSX source and hands to the lint engine, which
//! reads it without ever changing it.

pub mod ast;
mod error;

pub use ast::*;
pub use error::AstError;

impl RootNode {
    /// Load a document serialized by a host
    pub fn from_json(json: &str) -> Result<Self, AstError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document back to JSON
    pub fn to_json(&self) -> Result<std::string::String, AstError> {
        Ok(serde_json::to_string(self)?)
    }
}
