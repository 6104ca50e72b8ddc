//! Unlock Orchestrator
//!
//! The entry point a page integration calls with a restricted document:
//! - Extracts the content identifier
//! - Resolves through the fallback strategies (cached per identifier)
//! - Re-checks the resolved sidebar
//! - Merges recovered fragments into the caller's document in place

use crate::config::UnlockConfig;
use crate::error::UnlockError;
use sidebar_document::{ContentDocument, LayoutVariant};
use sidebar_resolver::{
    CacheStats, DocumentMerger, FallbackResolver, ResolveError, SidebarInspector,
    SidebarValidator,
};
use sidebar_strategy::{SessionContext, SessionContextProvider, SourceAdapters, StrategyBuilder};
use std::sync::Arc;

/// Coordinates resolution, validation and merge for one session
pub struct UnlockOrchestrator {
    /// Configuration
    config: UnlockConfig,
    /// Strategy walk plus cache
    resolver: FallbackResolver,
    /// Emptiness check shared with the resolver
    validator: Arc<dyn SidebarValidator>,
    /// Fragment transplant for the configured layout
    merger: DocumentMerger,
}

impl UnlockOrchestrator {
    /// Create orchestrator with the layout's default inspector
    ///
    /// Session values are read once from `provider`; later changes to the
    /// provider are not observed.
    #[must_use]
    pub fn new(
        config: UnlockConfig,
        adapters: SourceAdapters,
        provider: &dyn SessionContextProvider,
    ) -> Self {
        let validator = Arc::new(SidebarInspector::new(config.layout));
        Self::with_validator(config, adapters, provider, validator)
    }

    /// Create orchestrator with a custom emptiness check
    #[must_use]
    pub fn with_validator(
        config: UnlockConfig,
        adapters: SourceAdapters,
        provider: &dyn SessionContextProvider,
        validator: Arc<dyn SidebarValidator>,
    ) -> Self {
        let session = SessionContext::from_provider(provider)
            .with_embed(config.is_embed)
            .with_confirmed(config.is_confirmed);
        let resolver = FallbackResolver::new(
            StrategyBuilder::new(adapters),
            Arc::clone(&validator),
            session,
        )
        .with_cache_capacity(config.cache_capacity);

        Self {
            config,
            resolver,
            validator,
            merger: DocumentMerger::new(config.layout),
        }
    }

    /// Unlock the sidebar of `document` in place
    ///
    /// On error the document is left exactly as it was passed in.
    ///
    /// # Errors
    /// - [`UnlockError::Resolve`] if the document has no content identifier
    /// - [`UnlockError::UnlockFailed`] if no strategy produced a populated sidebar
    /// - [`UnlockError::Merge`] if either document lacks a required location
    pub fn unlock(&self, document: &mut ContentDocument) -> Result<(), UnlockError> {
        let content_id = document.content_id().map_err(ResolveError::from)?;
        tracing::info!(content_id = %content_id, layout = %self.config.layout, "Unlocking sidebar");

        let resolution = self.resolver.resolve_with_status(document)?;

        if self.validator.is_sidebar_empty(&resolution.document) {
            tracing::error!(
                content_id = %content_id,
                cache_hit = resolution.cache_hit,
                "Sidebar unlock failed"
            );
            return Err(UnlockError::UnlockFailed { content_id });
        }

        self.merger.merge(document, &resolution.document)?;
        tracing::info!(
            content_id = %content_id,
            cache_hit = resolution.cache_hit,
            "Sidebar unlocked"
        );
        Ok(())
    }

    /// Check whether `document` currently shows an empty sidebar
    #[inline]
    #[must_use]
    pub fn is_sidebar_empty(&self, document: &ContentDocument) -> bool {
        self.validator.is_sidebar_empty(document)
    }

    /// Configured layout
    #[inline]
    #[must_use]
    pub fn layout(&self) -> LayoutVariant {
        self.config.layout
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &UnlockConfig {
        &self.config
    }

    /// Session snapshot used for payloads
    #[inline]
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        self.resolver.session()
    }

    /// Cache counters
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.resolver.cache_stats()
    }

    /// Forget every cached resolution
    pub fn clear_cache(&self) {
        self.resolver.clear_cache();
    }
}

impl std::fmt::Debug for UnlockOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlockOrchestrator")
            .field("config", &self.config)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
