//! Layout-aware document merging
//!
//! Transplants the recovered sidebar and description fragments from a
//! resolved document into the caller's original. Edits are staged on a
//! working copy that replaces the original only once every fragment has been
//! located, so a failed merge leaves the original untouched.

use crate::error::{MergeError, MergeSide};
use crate::inspector::watch_next_feed;
use serde_json::Value;
use sidebar_document::{keys, ContentDocument, DocumentPath, LayoutVariant};

/// Copies recovered fragments into the original document
#[derive(Debug, Clone, Copy)]
pub struct DocumentMerger {
    layout: LayoutVariant,
}

impl DocumentMerger {
    /// Create merger for the session layout
    #[inline]
    #[must_use]
    pub fn new(layout: LayoutVariant) -> Self {
        Self { layout }
    }

    /// Layout this merger patches
    #[inline]
    #[must_use]
    pub fn layout(&self) -> LayoutVariant {
        self.layout
    }

    /// Merge `resolved` into `original` in place
    ///
    /// # Errors
    /// Returns [`MergeError::StructuralMismatch`] when a target fragment is
    /// missing from `original` (or, on desktop, the sidebar is missing from
    /// `resolved`). `original` is unchanged on error.
    pub fn merge(
        &self,
        original: &mut ContentDocument,
        resolved: &ContentDocument,
    ) -> Result<(), MergeError> {
        let mut working = original.as_value().clone();

        match self.layout {
            LayoutVariant::Desktop => merge_desktop(&mut working, resolved.as_value())?,
            LayoutVariant::SingleColumn => merge_single_column(&mut working, resolved.as_value())?,
        }

        *original.as_value_mut() = working;
        tracing::debug!(layout = %self.layout, "Merged unlocked fragments into original document");
        Ok(())
    }
}

fn merge_desktop(original: &mut Value, resolved: &Value) -> Result<(), MergeError> {
    let secondary_path = DocumentPath::from(keys::TWO_COLUMN_SECONDARY_RESULTS);
    let secondary = secondary_path
        .resolve(resolved)
        .cloned()
        .ok_or_else(|| MergeError::mismatch(MergeSide::Resolved, secondary_path.clone()))?;

    let contents_path = DocumentPath::from(keys::TWO_COLUMN_PRIMARY_CONTENTS);
    let description = contents_path
        .resolve(resolved)
        .and_then(|list| find_fragment(list, keys::VIDEO_SECONDARY_INFO))
        .and_then(|info| info.get(keys::DESCRIPTION))
        .filter(|description| has_content(description))
        .cloned();

    let info_path = contents_path.child(keys::VIDEO_SECONDARY_INFO);
    let info = contents_path
        .resolve_mut(original)
        .and_then(|list| find_fragment_mut(list, keys::VIDEO_SECONDARY_INFO))
        .and_then(Value::as_object_mut)
        .ok_or_else(|| MergeError::mismatch(MergeSide::Original, info_path))?;

    if let Some(description) = description {
        info.insert(keys::DESCRIPTION.to_string(), description);
    }

    let results_path = DocumentPath::from(&[keys::CONTENTS, keys::TWO_COLUMN_RESULTS][..]);
    let results = results_path
        .resolve_mut(original)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| MergeError::mismatch(MergeSide::Original, results_path))?;
    results.insert(keys::SECONDARY_RESULTS.to_string(), secondary);

    Ok(())
}

fn merge_single_column(original: &mut Value, resolved: &Value) -> Result<(), MergeError> {
    let contents_path = DocumentPath::from(keys::SINGLE_COLUMN_CONTENTS);
    let feed = contents_path
        .resolve(resolved)
        .and_then(Value::as_array)
        .and_then(|items| items.iter().find(|item| watch_next_feed(item).is_some()))
        .cloned();

    if let Some(feed) = feed {
        contents_path
            .resolve_mut(original)
            .and_then(Value::as_array_mut)
            .ok_or_else(|| MergeError::mismatch(MergeSide::Original, contents_path.clone()))?
            .push(feed);
    }

    let body = description_items(resolved)
        .and_then(|items| find_fragment(items, keys::EXPANDABLE_DESCRIPTION_BODY))
        .cloned();

    let target = description_items_mut(original)
        .and_then(|items| items.as_array_mut())
        .and_then(|items| {
            items
                .iter_mut()
                .find(|item| item.get(keys::EXPANDABLE_DESCRIPTION_BODY).is_some())
        })
        .and_then(Value::as_object_mut)
        .ok_or_else(|| MergeError::mismatch(MergeSide::Original, description_body_path()))?;

    if let Some(body) = body {
        target.insert(keys::EXPANDABLE_DESCRIPTION_BODY.to_string(), body);
    }

    Ok(())
}

/// Diagnostic path of the single-column description body
fn description_body_path() -> DocumentPath {
    let mut segments = vec![format!("{}[]", keys::ENGAGEMENT_PANELS)];
    segments.extend(keys::STRUCTURED_DESCRIPTION_ITEMS.iter().map(|s| (*s).to_string()));
    if let Some(items) = segments.last_mut() {
        items.push_str("[]");
    }
    segments.push(keys::EXPANDABLE_DESCRIPTION_BODY.to_string());
    DocumentPath::new(segments)
}

/// Items list of the first engagement panel carrying a structured description
fn description_items(document: &Value) -> Option<&Value> {
    let items_path = DocumentPath::from(keys::STRUCTURED_DESCRIPTION_ITEMS);
    document
        .get(keys::ENGAGEMENT_PANELS)?
        .as_array()?
        .iter()
        .find_map(|panel| items_path.resolve(panel).filter(|items| items.is_array()))
}

fn description_items_mut(document: &mut Value) -> Option<&mut Value> {
    let items_path = DocumentPath::from(keys::STRUCTURED_DESCRIPTION_ITEMS);
    document
        .get_mut(keys::ENGAGEMENT_PANELS)?
        .as_array_mut()?
        .iter_mut()
        .find_map(|panel| items_path.resolve_mut(panel).filter(|items| items.is_array()))
}

/// Value under `key` in the first list element carrying it
fn find_fragment<'v>(list: &'v Value, key: &str) -> Option<&'v Value> {
    list.as_array()?.iter().find_map(|item| item.get(key))
}

fn find_fragment_mut<'v>(list: &'v mut Value, key: &str) -> Option<&'v mut Value> {
    list.as_array_mut()?
        .iter_mut()
        .find_map(|item| item.get_mut(key))
}

/// Whether a description value carries anything worth copying
fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(_) => true,
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
