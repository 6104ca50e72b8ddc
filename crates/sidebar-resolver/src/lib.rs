//! Sidebar Resolution Engine
//!
//! Recovers the sidebar and description of a restricted watch-next document.
//!
//! # Core Operations
//!
//! - **Resolve**: Walk fallback strategies until one yields a populated sidebar
//! - **Cache**: Remember the last outcome per content identifier
//! - **Merge**: Transplant recovered fragments into the caller's document
//!
//! # Architecture
//!
//! ```text
//! original → FallbackResolver ─┬─ ResolutionCache (hit → copy)
//!                              └─ StrategyBuilder → adapters → SidebarValidator
//!          → DocumentMerger (layout-aware, all-or-nothing) → patched original
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use sidebar_resolver::{DocumentMerger, FallbackResolver, SidebarInspector};
//!
//! let resolver = FallbackResolver::new(builder, Arc::new(SidebarInspector::new(layout)), session);
//! let resolved = resolver.resolve(&original)?;
//! DocumentMerger::new(layout).merge(&mut original, &resolved)?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cache;
pub mod error;
pub mod inspector;
pub mod merge;
pub mod resolver;

pub use cache::{CacheEntry, CacheStats, CacheStatus, ResolutionCache};
pub use error::{MergeError, MergeSide, ResolveError};
pub use inspector::{SidebarInspector, SidebarValidator};
pub use merge::DocumentMerger;
pub use resolver::{FallbackResolver, Resolution};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the resolution engine
    pub use crate::cache::{CacheStats, CacheStatus};
    pub use crate::error::{MergeError, ResolveError};
    pub use crate::inspector::{SidebarInspector, SidebarValidator};
    pub use crate::merge::DocumentMerger;
    pub use crate::resolver::{FallbackResolver, Resolution};
    pub use sidebar_document::{ContentDocument, ContentId, LayoutVariant};
    pub use sidebar_strategy::{SessionContext, SourceAdapters, StrategyBuilder};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use serde_json::json;
    use sidebar_test_utils::{
        scripted_adapters, single_column_restricted, single_column_unlocked, ScriptedAdapter,
    };
    use std::sync::Arc;

    #[test]
    fn single_column_resolve_then_merge() {
        let layout = LayoutVariant::SingleColumn;
        let watch = ScriptedAdapter::returning(single_column_unlocked("v", false, None));
        let proxy = ScriptedAdapter::returning(single_column_unlocked(
            "v",
            true,
            Some(json!({ "text": "full" })),
        ));
        let resolver = FallbackResolver::new(
            StrategyBuilder::new(scripted_adapters(&watch, &proxy)),
            Arc::new(SidebarInspector::new(layout)),
            SessionContext::default(),
        );

        let mut original = single_column_restricted("v", json!({ "text": "stub" }));
        let resolved = resolver.resolve(&original).unwrap();
        DocumentMerger::new(layout).merge(&mut original, &resolved).unwrap();

        assert_eq!(watch.calls(), 1);
        assert_eq!(proxy.calls(), 1);
        assert!(!SidebarInspector::new(layout).is_sidebar_empty(&original));
    }
}
