//! Sidebar Unlock
//!
//! Session-level entry point for restoring the sidebar and description of
//! restricted watch-next documents.
//!
//! # Example
//!
//! ```rust,ignore
//! use sidebar_unlock::{UnlockConfig, UnlockOrchestrator};
//!
//! let orchestrator = UnlockOrchestrator::new(UnlockConfig::new().for_host(host), adapters, &session);
//! orchestrator.unlock(&mut document)?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod orchestrator;

pub use config::UnlockConfig;
pub use error::UnlockError;
pub use orchestrator::UnlockOrchestrator;

pub use sidebar_document::{ContentDocument, ContentId, LayoutVariant};
pub use sidebar_resolver::CacheStats;
pub use sidebar_strategy::{
    AdapterError, Payload, SessionContextProvider, SessionKey, SourceAdapter, SourceAdapters,
    StaticSessionContext,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
