//! Errors returned by the strict variants of the tree operations.

/// Errors triggered by [`Tree`][crate::Tree] operations whose preconditions weren't met.
///
/// Every error is detected before the tree is touched so a returned error always means the
/// tree is exactly as it was before the call.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError<K> {
    /// The key was already present. The rejected key is handed back to the caller.
    #[error("key is already present in the tree")]
    DuplicateKey(K),
    /// The key to delete was not present.
    #[error("key is not present in the tree")]
    MissingKey,
    /// An extremum was requested from a tree with no nodes.
    #[error("the tree is empty")]
    EmptyTree,
}
