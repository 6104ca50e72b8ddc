//! Content documents and their identity
//!
//! A [`ContentDocument`] is an opaque JSON tree describing one content item's
//! watch-next payload. Cloning a document is a deep copy.

use crate::keys;
use crate::path::DocumentPath;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{self, Display, Formatter};

/// Identifier of the content item a document describes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Create identifier, rejecting empty strings
    ///
    /// # Errors
    /// Returns [`DocumentError::EmptyIdentifier`] for `""`.
    pub fn new(id: impl Into<String>) -> Result<Self, DocumentError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DocumentError::EmptyIdentifier);
        }
        Ok(Self(id))
    }

    /// Borrow identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Semi-structured watch-next document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDocument(Value);

impl ContentDocument {
    /// Wrap an existing JSON value
    #[inline]
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Document with no fields (`{}`)
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Parse document from JSON text
    ///
    /// # Errors
    /// Returns [`DocumentError::Parse`] if the text is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        Ok(Self(serde_json::from_str(text)?))
    }

    /// Render document as pretty JSON
    ///
    /// # Errors
    /// Returns [`DocumentError::Parse`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Borrow the underlying tree
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Mutably borrow the underlying tree
    #[inline]
    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    /// Check whether the document carries no data at all
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Look up value at path
    #[inline]
    #[must_use]
    pub fn get(&self, path: &DocumentPath) -> Option<&Value> {
        path.resolve(&self.0)
    }

    /// Extract the content identifier
    ///
    /// # Errors
    /// Returns [`DocumentError::MissingIdentifier`] if the identifier path is
    /// absent, not a string, or empty.
    pub fn content_id(&self) -> Result<ContentId, DocumentError> {
        let path = DocumentPath::from(keys::CONTENT_ID);
        self.get(&path)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(|id| ContentId(id.to_string()))
            .ok_or(DocumentError::MissingIdentifier { path })
    }
}

impl Default for ContentDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for ContentDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Errors reading documents
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Content identifier not reachable
    #[error("missing content identifier at '{path}'")]
    MissingIdentifier {
        /// Path that was searched
        path: DocumentPath,
    },

    /// Empty identifier string
    #[error("content identifier must not be empty")]
    EmptyIdentifier,

    /// JSON encoding/decoding failure
    #[error("json error: {0}")]
    Parse(#[from] serde_json::Error),
}
