//! Fallback resolver
//!
//! Walks the strategy list cheapest-first, stopping at the first candidate
//! whose sidebar is populated. Adapter failures are logged and treated like
//! an empty candidate. The last candidate, successful or not, is cached
//! under its content identifier so a document that resists every strategy
//! is not re-resolved for the lifetime of the resolver.

use crate::cache::{CacheEntry, CacheStats, CacheStatus, ResolutionCache};
use crate::error::ResolveError;
use crate::inspector::SidebarValidator;
use parking_lot::Mutex;
use sidebar_document::{ContentDocument, ContentId};
use sidebar_strategy::{SessionContext, Strategy, StrategyBuilder};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Outcome of a resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Resolved document (an independent copy)
    pub document: ContentDocument,
    /// Whether a strategy succeeded
    pub status: CacheStatus,
    /// Whether the document came from the cache
    pub cache_hit: bool,
}

/// Resolves restricted documents through ordered fallback strategies
pub struct FallbackResolver {
    builder: StrategyBuilder,
    validator: Arc<dyn SidebarValidator>,
    session: SessionContext,
    cache: Mutex<ResolutionCache>,
}

impl FallbackResolver {
    /// Create resolver with a single-slot cache
    #[must_use]
    pub fn new(
        builder: StrategyBuilder,
        validator: Arc<dyn SidebarValidator>,
        session: SessionContext,
    ) -> Self {
        Self {
            builder,
            validator,
            session,
            cache: Mutex::new(ResolutionCache::single()),
        }
    }

    /// With cache capacity
    ///
    /// Drops anything already cached.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.cache = Mutex::new(ResolutionCache::new(capacity));
        self
    }

    /// Session snapshot used for payloads
    #[inline]
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Resolve a restricted document
    ///
    /// Returns the last candidate produced, which may still have an empty
    /// sidebar when every strategy was exhausted.
    ///
    /// # Errors
    /// - [`ResolveError::MalformedDocument`] if no content identifier is present;
    ///   no adapter is invoked in that case
    /// - [`ResolveError::Strategy`] if strategy payloads cannot be built
    pub fn resolve(&self, document: &ContentDocument) -> Result<ContentDocument, ResolveError> {
        self.resolve_with_status(document)
            .map(|resolution| resolution.document)
    }

    /// Resolve and report how the result was obtained
    ///
    /// # Errors
    /// Same as [`FallbackResolver::resolve`].
    pub fn resolve_with_status(
        &self,
        document: &ContentDocument,
    ) -> Result<Resolution, ResolveError> {
        let content_id = document.content_id()?;

        // Held across check, strategy walk and store so concurrent callers
        // for the same identifier cannot both miss.
        let mut cache = self.cache.lock();

        if let Some(entry) = cache.get(&content_id) {
            tracing::debug!(
                content_id = %content_id,
                status = ?entry.status,
                "Sidebar resolution served from cache"
            );
            return Ok(Resolution {
                document: entry.document,
                status: entry.status,
                cache_hit: true,
            });
        }

        let strategies = self.builder.build_for(&content_id, &self.session)?;
        let (resolved, status) = self.run_strategies(&content_id, &strategies);

        cache.insert(CacheEntry::new(content_id, status, resolved.clone()));

        Ok(Resolution {
            document: resolved,
            status,
            cache_hit: false,
        })
    }

    fn run_strategies(
        &self,
        content_id: &ContentId,
        strategies: &[Strategy],
    ) -> (ContentDocument, CacheStatus) {
        let mut candidate = ContentDocument::empty();

        for (index, strategy) in strategies.iter().enumerate() {
            let attempt = index + 1;
            tracing::info!(
                content_id = %content_id,
                "Trying sidebar unlock method #{} ({})",
                attempt,
                strategy.name()
            );

            match strategy.execute() {
                Ok(document) => candidate = document,
                Err(e) => {
                    tracing::error!(
                        content_id = %content_id,
                        error = %e,
                        "Sidebar unlock method #{} ({}) failed",
                        attempt,
                        strategy.name()
                    );
                }
            }

            if !self.validator.is_sidebar_empty(&candidate) {
                tracing::info!(
                    content_id = %content_id,
                    "Sidebar unlock method #{} ({}) succeeded",
                    attempt,
                    strategy.name()
                );
                return (candidate, CacheStatus::Resolved);
            }
        }

        tracing::info!(
            content_id = %content_id,
            attempts = strategies.len(),
            "All sidebar unlock methods exhausted"
        );
        (candidate, CacheStatus::Exhausted)
    }

    /// Check if a content identifier is cached
    #[must_use]
    pub fn is_cached(&self, content_id: &ContentId) -> bool {
        self.cache.lock().contains(content_id)
    }

    /// Drop cached results
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Get cache statistics
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }
}

impl std::fmt::Debug for FallbackResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackResolver")
            .field("builder", &self.builder)
            .field("session", &self.session)
            .field("cache", &self.cache_stats())
            .finish_non_exhaustive()
    }
}
