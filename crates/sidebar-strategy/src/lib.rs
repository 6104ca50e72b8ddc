//! Sidebar Strategy System
//!
//! Prioritized ways of obtaining an unrestricted watch-next document.
//!
//! # Core Concepts
//!
//! - [`SourceAdapter`]: Capability that fetches a document for a payload
//! - [`Strategy`]: A (kind, payload, adapter) triple
//! - [`StrategyBuilder`]: Produces strategies cheapest-first for a document
//! - [`SessionContext`]: Client, locale and token values used in payloads
//!
//! # Example
//!
//! ```rust,ignore
//! use sidebar_strategy::{SessionContext, SourceAdapters, StrategyBuilder};
//!
//! let builder = StrategyBuilder::new(SourceAdapters::new(watch, proxy));
//! for strategy in builder.build(&document, &SessionContext::default())? {
//!     let candidate = strategy.execute();
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod session;
mod strategy;

pub use builder::{SourceAdapters, StrategyBuilder, StrategyError};
pub use session::{
    SessionContext, SessionContextProvider, SessionKey, StaticSessionContext,
    DEFAULT_CLIENT_NAME, DEFAULT_CLIENT_VERSION,
};
pub use strategy::{AdapterError, Payload, SourceAdapter, Strategy, StrategyKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use sidebar_document::ContentDocument;
    use std::sync::Arc;

    fn echo() -> Arc<dyn SourceAdapter> {
        Arc::new(|payload: &Payload| -> Result<ContentDocument, AdapterError> {
            Ok(ContentDocument::new(json!({ "payload": payload.clone() })))
        })
    }

    proptest! {
        #[test]
        fn prop_build_is_deterministic(
            id in "[A-Za-z0-9_-]{1,11}",
            token in proptest::option::of("[a-z0-9]{1,8}"),
            embed in any::<bool>(),
        ) {
            let builder = StrategyBuilder::new(SourceAdapters::new(echo(), echo()));
            let mut provider = StaticSessionContext::new();
            if let Some(token) = &token {
                provider = provider.with(SessionKey::SessionToken, token.clone());
            }
            let session = SessionContext::from_provider(&provider).with_embed(embed);
            let doc = ContentDocument::new(json!({
                "currentVideoEndpoint": { "watchEndpoint": { "videoId": id.clone() } }
            }));

            let first = builder.build(&doc, &session).unwrap();
            let second = builder.build(&doc, &session).unwrap();
            prop_assert_eq!(first.len(), second.len());
            for (a, b) in first.iter().zip(&second) {
                prop_assert_eq!(a.kind(), b.kind());
                prop_assert_eq!(a.payload(), b.payload());
            }
            prop_assert_eq!(&first[1].payload()["videoId"], &json!(id));
        }
    }

    #[test]
    fn strategies_route_to_their_adapter() {
        let watch: Arc<dyn SourceAdapter> =
            Arc::new(|_: &Payload| -> Result<ContentDocument, AdapterError> {
                Ok(ContentDocument::new(json!({ "from": "watch" })))
            });
        let builder = StrategyBuilder::new(SourceAdapters::new(watch, echo()));
        let doc = ContentDocument::new(json!({
            "currentVideoEndpoint": { "watchEndpoint": { "videoId": "abc" } }
        }));

        let strategies = builder.build(&doc, &SessionContext::default()).unwrap();
        assert_eq!(strategies[0].execute().unwrap().as_value()["from"], "watch");
        assert_eq!(
            strategies[1].execute().unwrap().as_value()["payload"]["videoId"],
            "abc"
        );
    }
}
