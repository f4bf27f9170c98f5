//! Subcommands of the `lumen` binary.

pub mod lint;
pub mod schema;
