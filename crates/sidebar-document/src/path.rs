//! Key paths for addressing fragments inside a content document
//!
//! Provides [`DocumentPath`] for walking nested JSON objects by key.

use serde_json::Value;
use std::fmt::{self, Display, Formatter};

/// Path of object keys from the document root
///
/// Only object keys are addressable; sequences are searched by the
/// caller (see the merger) rather than indexed positionally.
///
/// # Examples
/// - `["currentVideoEndpoint", "watchEndpoint", "videoId"]` → `currentVideoEndpoint.watchEndpoint.videoId`
/// - `["contents", "twoColumnWatchNextResults"]` → `contents.twoColumnWatchNextResults`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath(Vec<String>);

impl DocumentPath {
    /// Create new path from segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Append a segment, returning new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Resolve this path against a value
    ///
    /// Returns `None` as soon as a segment is missing or a non-object is hit.
    #[must_use]
    pub fn resolve<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.0
            .iter()
            .try_fold(root, |current, segment| current.as_object()?.get(segment))
    }

    /// Resolve this path mutably
    #[must_use]
    pub fn resolve_mut<'v>(&self, root: &'v mut Value) -> Option<&'v mut Value> {
        self.0.iter().try_fold(root, |current, segment| {
            current.as_object_mut()?.get_mut(segment)
        })
    }
}

impl Display for DocumentPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        write!(f, "{}", self.0.join("."))
    }
}

impl From<Vec<String>> for DocumentPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for DocumentPath {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(segments: &[&str]) -> DocumentPath {
        DocumentPath::from(segments)
    }

    #[test]
    fn child_appends_segment() {
        let base = path(&["contents"]);
        assert_eq!(base.child("x").to_string(), "contents.x");
        assert_eq!(base.to_string(), "contents");
    }

    #[test]
    fn owned_and_borrowed_segments_agree() {
        let owned = DocumentPath::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(owned, path(&["a", "b"]));
        assert_eq!(DocumentPath::from(vec!["a".to_string()]), path(&["a"]));
    }

    #[test]
    fn root_displays_marker() {
        assert_eq!(DocumentPath::new(Vec::new()).to_string(), "<root>");
    }

    #[test]
    fn resolve_nested_object() {
        let doc = json!({ "a": { "b": { "c": 7 } } });
        assert_eq!(path(&["a", "b", "c"]).resolve(&doc), Some(&json!(7)));
    }

    #[test]
    fn resolve_stops_at_non_object() {
        let doc = json!({ "a": [ { "b": 1 } ] });
        assert!(path(&["a", "b"]).resolve(&doc).is_none());
    }

    #[test]
    fn resolve_mut_allows_overwrite() {
        let mut doc = json!({ "a": { "b": "old" } });
        *path(&["a", "b"]).resolve_mut(&mut doc).unwrap() = json!("new");
        assert_eq!(doc, json!({ "a": { "b": "new" } }));
    }

    #[test]
    fn resolve_empty_path_returns_document() {
        let doc = json!({ "x": 1 });
        assert_eq!(DocumentPath::new(Vec::new()).resolve(&doc), Some(&doc));
    }
}
