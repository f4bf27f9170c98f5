//! Errors raised while loading an AST handed over by a host.

use thiserror::Error;

/// AST loading error
#[derive(Debug, Error)]
pub enum AstError {
    /// The document is not valid AST JSON
    #[error("invalid AST document: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
