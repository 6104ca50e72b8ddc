//! Error types for the unlock orchestrator
//!
//! [`UnlockError`] is the only failure a caller observes. Per-strategy
//! adapter failures are absorbed during resolution and never reach it.

use sidebar_document::ContentId;
use sidebar_resolver::{MergeError, ResolveError};

/// Main unlock error type
#[derive(Debug, thiserror::Error)]
pub enum UnlockError {
    /// Document could not be resolved (no identifier, unbuildable strategies)
    #[error("resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// Every strategy was tried and the sidebar is still empty
    #[error("sidebar unlock failed for '{content_id}'")]
    UnlockFailed {
        /// Content the unlock was attempted for
        content_id: ContentId,
    },

    /// Recovered fragments could not be placed into the original document
    #[error("merge failed: {0}")]
    Merge(#[from] MergeError),
}

impl UnlockError {
    /// Check if the document itself was malformed
    #[inline]
    #[must_use]
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Self::Resolve(ResolveError::MalformedDocument(_)))
    }

    /// Check if all strategies were exhausted
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::UnlockFailed { .. })
    }

    /// Check if the documents disagreed with the expected structure
    #[inline]
    #[must_use]
    pub fn is_structural_mismatch(&self) -> bool {
        matches!(self, Self::Merge(MergeError::StructuralMismatch { .. }))
    }
}
