//! Error types for resolution and merging
//!
//! Adapter failures never appear here: they are absorbed by the resolver
//! and only logged.

use sidebar_document::{DocumentError, DocumentPath};
use sidebar_strategy::StrategyError;
use std::fmt;

/// Errors during fallback resolution
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Document has no resolvable content identifier
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] DocumentError),

    /// Strategy list could not be built
    #[error("strategy construction failed: {0}")]
    Strategy(#[from] StrategyError),
}

/// Which side of a merge a path refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSide {
    /// The caller's document being patched
    Original,
    /// The document fragments are copied from
    Resolved,
}

impl fmt::Display for MergeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => f.write_str("original"),
            Self::Resolved => f.write_str("resolved"),
        }
    }
}

/// Errors during merging
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// Required fragment missing from a document believed well-formed
    #[error("structural mismatch in {side} document: missing '{path}'")]
    StructuralMismatch {
        /// Document the fragment was expected in
        side: MergeSide,
        /// Path of the missing fragment
        path: DocumentPath,
    },
}

impl MergeError {
    /// Create mismatch error
    #[inline]
    #[must_use]
    pub fn mismatch(side: MergeSide, path: DocumentPath) -> Self {
        Self::StructuralMismatch { side, path }
    }

    /// Path of the missing fragment
    #[inline]
    #[must_use]
    pub fn path(&self) -> &DocumentPath {
        match self {
            Self::StructuralMismatch { path, .. } => path,
        }
    }
}
