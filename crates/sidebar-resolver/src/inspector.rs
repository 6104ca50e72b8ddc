//! Sidebar emptiness checks
//!
//! A restricted document is recognised by its missing sidebar. The check is
//! a seam ([`SidebarValidator`]) so hosts can plug their own predicate; the
//! default [`SidebarInspector`] walks the layout-specific sidebar path.

use serde_json::Value;
use sidebar_document::{keys, ContentDocument, DocumentPath, LayoutVariant};

/// Decides whether a document still lacks its sidebar
///
/// Implementations must not panic on malformed documents; a missing field
/// means "empty".
pub trait SidebarValidator: Send + Sync {
    /// `true` when the document's sidebar content is empty
    fn is_sidebar_empty(&self, document: &ContentDocument) -> bool;
}

impl<F> SidebarValidator for F
where
    F: Fn(&ContentDocument) -> bool + Send + Sync,
{
    fn is_sidebar_empty(&self, document: &ContentDocument) -> bool {
        self(document)
    }
}

/// Layout-aware default validator
#[derive(Debug, Clone, Copy)]
pub struct SidebarInspector {
    layout: LayoutVariant,
}

impl SidebarInspector {
    /// Create inspector for the session layout
    #[inline]
    #[must_use]
    pub fn new(layout: LayoutVariant) -> Self {
        Self { layout }
    }

    /// Layout this inspector checks
    #[inline]
    #[must_use]
    pub fn layout(&self) -> LayoutVariant {
        self.layout
    }

    fn desktop_sidebar_empty(document: &ContentDocument) -> bool {
        let path = DocumentPath::from(keys::TWO_COLUMN_SIDEBAR_RESULTS);
        document.get(&path).map_or(true, Value::is_null)
    }

    fn single_column_feed_missing(document: &ContentDocument) -> bool {
        let path = DocumentPath::from(keys::SINGLE_COLUMN_CONTENTS);
        let feed = document
            .get(&path)
            .and_then(Value::as_array)
            .and_then(|items| items.iter().find_map(watch_next_feed));
        feed.is_none()
    }
}

impl SidebarValidator for SidebarInspector {
    fn is_sidebar_empty(&self, document: &ContentDocument) -> bool {
        match self.layout {
            LayoutVariant::Desktop => Self::desktop_sidebar_empty(document),
            LayoutVariant::SingleColumn => Self::single_column_feed_missing(document),
        }
    }
}

/// Section renderer of a single-column item if it is the watch-next feed
pub(crate) fn watch_next_feed(item: &Value) -> Option<&Value> {
    let section = item.get(keys::ITEM_SECTION)?;
    let is_feed = section.get(keys::TARGET_ID).and_then(Value::as_str) == Some(keys::WATCH_NEXT_FEED);
    (is_feed && section.is_object()).then_some(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sidebar_test_utils::{
        desktop_restricted, desktop_unlocked, single_column_restricted, single_column_unlocked,
    };

    #[test]
    fn desktop_restricted_is_empty() {
        let inspector = SidebarInspector::new(LayoutVariant::Desktop);
        assert!(inspector.is_sidebar_empty(&desktop_restricted("a", None)));
    }

    #[test]
    fn desktop_unlocked_is_not_empty() {
        let inspector = SidebarInspector::new(LayoutVariant::Desktop);
        assert!(!inspector.is_sidebar_empty(&desktop_unlocked("a", None, &["b"])));
    }

    #[test]
    fn desktop_null_results_is_empty() {
        let inspector = SidebarInspector::new(LayoutVariant::Desktop);
        let doc = ContentDocument::new(json!({
            "contents": { "twoColumnWatchNextResults": {
                "secondaryResults": { "secondaryResults": { "results": null } }
            } }
        }));
        assert!(inspector.is_sidebar_empty(&doc));
    }

    #[test]
    fn single_column_feed_detection() {
        let inspector = SidebarInspector::new(LayoutVariant::SingleColumn);
        assert!(inspector.is_sidebar_empty(&single_column_restricted("a", json!({}))));
        assert!(inspector.is_sidebar_empty(&single_column_unlocked("a", false, None)));
        assert!(!inspector.is_sidebar_empty(&single_column_unlocked("a", true, None)));
    }

    #[test]
    fn malformed_documents_are_empty() {
        for layout in [LayoutVariant::Desktop, LayoutVariant::SingleColumn] {
            let inspector = SidebarInspector::new(layout);
            assert!(inspector.is_sidebar_empty(&ContentDocument::empty()));
            assert!(inspector.is_sidebar_empty(&ContentDocument::new(json!([1, 2]))));
            assert!(inspector.is_sidebar_empty(&ContentDocument::new(json!({ "contents": "x" }))));
        }
    }

    #[test]
    fn layout_mismatch_reports_empty() {
        let inspector = SidebarInspector::new(LayoutVariant::SingleColumn);
        assert!(inspector.is_sidebar_empty(&desktop_unlocked("a", None, &["b"])));
    }

    #[test]
    fn closure_validator() {
        let never_empty = |_: &ContentDocument| false;
        assert!(!never_empty.is_sidebar_empty(&ContentDocument::empty()));
    }
}
