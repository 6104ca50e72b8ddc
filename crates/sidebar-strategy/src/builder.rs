//! Strategy list construction
//!
//! [`StrategyBuilder`] turns a restricted document plus the session snapshot
//! into the ordered list of strategies the resolver walks. Building is pure:
//! no adapter is called and the same inputs always yield the same list.

use crate::session::SessionContext;
use crate::strategy::{Payload, SourceAdapter, Strategy, StrategyKind};
use serde::Serialize;
use serde_json::Value;
use sidebar_document::{ContentDocument, ContentId, DocumentError};
use std::fmt;
use std::sync::Arc;

/// One adapter per strategy kind
#[derive(Clone)]
pub struct SourceAdapters {
    /// Same-origin watch endpoint
    pub watch: Arc<dyn SourceAdapter>,
    /// Trusted account proxy
    pub proxy: Arc<dyn SourceAdapter>,
}

impl SourceAdapters {
    /// Create adapter set
    #[inline]
    #[must_use]
    pub fn new(watch: Arc<dyn SourceAdapter>, proxy: Arc<dyn SourceAdapter>) -> Self {
        Self { watch, proxy }
    }

    /// Adapter serving a strategy kind
    #[inline]
    #[must_use]
    pub fn for_kind(&self, kind: StrategyKind) -> Arc<dyn SourceAdapter> {
        match kind {
            StrategyKind::WatchEndpoint => Arc::clone(&self.watch),
            StrategyKind::AccountProxy => Arc::clone(&self.proxy),
        }
    }
}

impl fmt::Debug for SourceAdapters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceAdapters").finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct WatchPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    session_token: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProxyPayload<'a> {
    video_id: &'a str,
    client_name: &'a str,
    client_version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hl: Option<&'a str>,
    is_embed: u8,
    is_confirmed: u8,
}

/// Builds the ordered strategy list for a document
#[derive(Debug, Clone)]
pub struct StrategyBuilder {
    adapters: SourceAdapters,
}

impl StrategyBuilder {
    /// Create builder over an adapter set
    #[inline]
    #[must_use]
    pub fn new(adapters: SourceAdapters) -> Self {
        Self { adapters }
    }

    /// Build strategies in priority order
    ///
    /// # Errors
    /// - [`StrategyError::MalformedDocument`] if the document has no content identifier
    /// - [`StrategyError::Payload`] if a payload cannot be encoded
    pub fn build(
        &self,
        document: &ContentDocument,
        session: &SessionContext,
    ) -> Result<Vec<Strategy>, StrategyError> {
        let content_id = document.content_id()?;
        self.build_for(&content_id, session)
    }

    /// Build strategies for an already extracted identifier
    ///
    /// # Errors
    /// Returns [`StrategyError::Payload`] if a payload cannot be encoded.
    pub fn build_for(
        &self,
        content_id: &ContentId,
        session: &SessionContext,
    ) -> Result<Vec<Strategy>, StrategyError> {
        StrategyKind::PRIORITY
            .into_iter()
            .map(|kind| {
                let payload = Self::payload(kind, content_id, session)?;
                Ok(Strategy::new(kind, payload, self.adapters.for_kind(kind)))
            })
            .collect()
    }

    fn payload(
        kind: StrategyKind,
        content_id: &ContentId,
        session: &SessionContext,
    ) -> Result<Payload, StrategyError> {
        match kind {
            StrategyKind::WatchEndpoint => to_payload(&WatchPayload {
                session_token: session.session_token.as_deref(),
            }),
            StrategyKind::AccountProxy => to_payload(&ProxyPayload {
                video_id: content_id.as_str(),
                client_name: &session.client_name,
                client_version: &session.client_version,
                hl: session.locale.as_deref(),
                is_embed: u8::from(session.is_embed),
                is_confirmed: u8::from(session.is_confirmed),
            }),
        }
    }
}

fn to_payload(value: &impl Serialize) -> Result<Payload, StrategyError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StrategyError::PayloadNotObject(other.to_string())),
    }
}

/// Strategy construction errors
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// Document lacks a resolvable content identifier
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] DocumentError),

    /// Payload encoding failed
    #[error("payload encoding failed: {0}")]
    Payload(#[from] serde_json::Error),

    /// Payload did not encode to an object
    #[error("payload is not an object: {0}")]
    PayloadNotObject(String),
}
