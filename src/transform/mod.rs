//! Nested-tree / flat-table transforms for translation documents.
//!
//! A translation document is a nested JSON object whose leaves are UI
//! strings. The functions here convert between that shape and a flat,
//! insertion-ordered table keyed by dot-joined paths (`"timer.play"`), and
//! merge a partial override table over a complete reference table.

mod error;
mod flatten;
mod merge;
mod unflatten;

pub use error::TransformError;
pub use flatten::flatten_tree;
pub use merge::{
    merge_tables,
    override_coverage,
};
pub use unflatten::unflatten_table;
