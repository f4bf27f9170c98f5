//! Carton - The shared toolbox for Lumen.
//!
//! Like the portfolio case an artist carries between studios, this crate holds
//! the small pieces every other Lumen crate reaches for: compact strings, fast
//! hash collections and the message catalog.
//!
//! # Modules
//!
//! - **i18n**: Locale-aware message lookup for diagnostics
//!
//! # Example
//!
//! ```
//! use lumen_carton::{CompactString, FxHashSet};
//!
//! let mut names: FxHashSet<CompactString> = FxHashSet::default();
//! names.insert(CompactString::from("Link"));
//! assert!(names.contains("Link"));
//! ```

pub mod i18n;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export smallvec for stack-optimized collections
pub use smallvec::SmallVec;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};
