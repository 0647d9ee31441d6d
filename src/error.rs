//! Errors returned by [`Tree`][crate::Tree] lookups and removals.

/// The ways a tree operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The descent reached an empty link without matching the requested key.
    #[error("key not found in tree")]
    KeyNotFound,
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
