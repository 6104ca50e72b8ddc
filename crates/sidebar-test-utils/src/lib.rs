//! Testing utilities for the sidebar unlock workspace
//!
//! Shared document fixtures and scripted source adapters.

#![allow(missing_docs)]

use parking_lot::Mutex;
use serde_json::{json, Value};
use sidebar_document::ContentDocument;
use sidebar_strategy::{AdapterError, Payload, SourceAdapter, SourceAdapters};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn endpoint(id: &str) -> Value {
    json!({ "watchEndpoint": { "videoId": id } })
}

fn sidebar_results(ids: &[&str]) -> Value {
    let results: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "compactVideoRenderer": { "videoId": id } }))
        .collect();
    json!({ "secondaryResults": { "results": results } })
}

fn secondary_info(description: Option<Value>) -> Value {
    let mut renderer = json!({ "owner": { "videoOwnerRenderer": {} } });
    if let Some(description) = description {
        renderer["description"] = description;
    }
    json!({ "videoSecondaryInfoRenderer": renderer })
}

/// Desktop document whose sidebar was stripped
pub fn desktop_restricted(id: &str, description: Option<Value>) -> ContentDocument {
    ContentDocument::new(json!({
        "currentVideoEndpoint": endpoint(id),
        "contents": {
            "twoColumnWatchNextResults": {
                "results": { "results": { "contents": [
                    { "videoPrimaryInfoRenderer": { "title": "restricted" } },
                    secondary_info(description),
                ] } },
                "secondaryResults": {}
            }
        }
    }))
}

/// Desktop document with a populated sidebar
pub fn desktop_unlocked(id: &str, description: Option<Value>, sidebar: &[&str]) -> ContentDocument {
    ContentDocument::new(json!({
        "currentVideoEndpoint": endpoint(id),
        "contents": {
            "twoColumnWatchNextResults": {
                "results": { "results": { "contents": [
                    { "videoPrimaryInfoRenderer": { "title": "unlocked" } },
                    secondary_info(description),
                ] } },
                "secondaryResults": sidebar_results(sidebar)
            }
        }
    }))
}

fn description_panels(body: Option<Value>) -> Value {
    let mut items = vec![json!({ "videoDescriptionHeaderRenderer": {} })];
    if let Some(body) = body {
        items.push(json!({ "expandableVideoDescriptionBodyRenderer": body }));
    }
    json!([
        { "engagementPanelSectionListRenderer": {
            "panelIdentifier": "comment-item-section",
            "content": { "sectionListRenderer": {} }
        } },
        { "engagementPanelSectionListRenderer": {
            "panelIdentifier": "video-description-ep-identifier",
            "content": { "structuredDescriptionContentRenderer": { "items": items } }
        } }
    ])
}

/// Single-column document whose watch-next feed was stripped
pub fn single_column_restricted(id: &str, description_body: Value) -> ContentDocument {
    ContentDocument::new(json!({
        "currentVideoEndpoint": endpoint(id),
        "contents": {
            "singleColumnWatchNextResults": {
                "results": { "results": { "contents": [
                    { "itemSectionRenderer": { "targetId": "watch-next-info", "contents": [] } }
                ] } }
            }
        },
        "engagementPanels": description_panels(Some(description_body))
    }))
}

/// Single-column document, optionally carrying the watch-next feed
pub fn single_column_unlocked(
    id: &str,
    with_feed: bool,
    description_body: Option<Value>,
) -> ContentDocument {
    let mut contents = vec![json!({
        "itemSectionRenderer": { "targetId": "watch-next-info", "contents": [] }
    })];
    if with_feed {
        contents.push(json!({
            "itemSectionRenderer": {
                "targetId": "watch-next-feed",
                "contents": [ { "videoWithContextRenderer": { "videoId": "next1" } } ]
            }
        }));
    }
    ContentDocument::new(json!({
        "currentVideoEndpoint": endpoint(id),
        "contents": {
            "singleColumnWatchNextResults": {
                "results": { "results": { "contents": contents } }
            }
        },
        "engagementPanels": description_panels(description_body)
    }))
}

/// Adapter returning a fixed outcome and recording every call
#[derive(Debug)]
pub struct ScriptedAdapter {
    outcome: Result<ContentDocument, AdapterError>,
    calls: AtomicUsize,
    payloads: Mutex<Vec<Payload>>,
}

impl ScriptedAdapter {
    pub fn returning(document: ContentDocument) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(document),
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: AdapterError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payloads(&self) -> Vec<Payload> {
        self.payloads.lock().clone()
    }
}

impl SourceAdapter for ScriptedAdapter {
    fn fetch(&self, payload: &Payload) -> Result<ContentDocument, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().push(payload.clone());
        self.outcome.clone()
    }
}

/// Adapter set over two scripted adapters
pub fn scripted_adapters(watch: &Arc<ScriptedAdapter>, proxy: &Arc<ScriptedAdapter>) -> SourceAdapters {
    SourceAdapters::new(watch.clone(), proxy.clone())
}
