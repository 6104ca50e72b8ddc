//! Strategy and source adapter types
//!
//! Provides the [`SourceAdapter`] trait through which every alternative data
//! source is reached, and [`Strategy`], one prioritized way of obtaining an
//! unrestricted document.

use serde_json::{Map, Value};
use sidebar_document::ContentDocument;
use std::fmt;
use std::sync::Arc;

/// Request parameters handed to an adapter
pub type Payload = Map<String, Value>;

/// Source of watch-next documents
///
/// # Contract
/// A single failed `fetch` is final for the strategy using this adapter;
/// there is no retry. Slow sources must bound their own latency.
pub trait SourceAdapter: Send + Sync {
    /// Fetch a document for the given request parameters
    ///
    /// # Errors
    /// Returns [`AdapterError`] on transport, decode, or upstream rejection.
    fn fetch(&self, payload: &Payload) -> Result<ContentDocument, AdapterError>;
}

impl<F> SourceAdapter for F
where
    F: Fn(&Payload) -> Result<ContentDocument, AdapterError> + Send + Sync,
{
    fn fetch(&self, payload: &Payload) -> Result<ContentDocument, AdapterError> {
        self(payload)
    }
}

/// Adapter failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// Source could not be reached
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// Source answered with an error status
    #[error("rejected with status {status}: {message}")]
    Rejected {
        /// Upstream status code
        status: u16,
        /// Upstream message
        message: String,
    },
}

impl AdapterError {
    /// Create rejection error
    #[inline]
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}

/// Known strategy kinds, in priority order
///
/// New strategies are added by appending a variant here and teaching the
/// builder its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Same-origin retry carrying the session token
    ///
    /// Only succeeds against weak restrictions.
    WatchEndpoint,

    /// Lookup through a trusted proxy holding verified credentials
    AccountProxy,
}

impl StrategyKind {
    /// All kinds, cheapest first
    pub const PRIORITY: [Self; 2] = [Self::WatchEndpoint, Self::AccountProxy];

    /// Diagnostic name
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::WatchEndpoint => "Watch Endpoint",
            Self::AccountProxy => "Account Proxy",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One way of obtaining an unrestricted document
#[derive(Clone)]
pub struct Strategy {
    kind: StrategyKind,
    payload: Payload,
    adapter: Arc<dyn SourceAdapter>,
}

impl Strategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new(kind: StrategyKind, payload: Payload, adapter: Arc<dyn SourceAdapter>) -> Self {
        Self {
            kind,
            payload,
            adapter,
        }
    }

    /// Strategy kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Diagnostic name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Identity payload sent to the adapter
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Invoke the adapter with this strategy's payload
    ///
    /// # Errors
    /// Propagates the adapter's [`AdapterError`].
    #[inline]
    pub fn execute(&self) -> Result<ContentDocument, AdapterError> {
        self.adapter.fetch(&self.payload)
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy")
            .field("kind", &self.kind)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}
