use thiserror::Error;

/// Defines errors that may occur while transforming translation data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Error when nesting exceeds the recursion guard (cyclic or corrupt data)
    #[error("Nesting deeper than {limit} levels at '{path}'")]
    DepthExceeded {
        /// Path at which the guard tripped
        path: String,
        /// The configured depth limit
        limit: usize,
    },
    /// Error when a path is used both as a group and as a leaf
    #[error("Structural conflict at '{path}': the path is used both as a group and as a leaf")]
    StructuralConflict {
        /// The conflicting dot-joined path
        path: String,
    },
    /// Error when a flat key contains an empty path segment
    #[error("Invalid translation key '{key}': empty path segment")]
    EmptySegment {
        /// The offending flat key
        key: String,
    },
}
