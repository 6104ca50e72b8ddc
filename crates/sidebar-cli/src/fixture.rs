//! File-backed source adapter
//!
//! Stands in for a network endpoint during offline replay. Every fetch
//! re-reads its file and ignores the payload apart from logging it.

use sidebar_document::ContentDocument;
use sidebar_strategy::{AdapterError, Payload, SourceAdapter};
use std::path::{Path, PathBuf};

/// Serves a recorded response from disk
#[derive(Debug, Clone)]
pub struct FixtureAdapter {
    source: Option<PathBuf>,
}

impl FixtureAdapter {
    /// Adapter answering with the document stored at `path`
    #[inline]
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
        }
    }

    /// Adapter that always fails, for strategies without a recording
    #[inline]
    #[must_use]
    pub fn unavailable() -> Self {
        Self { source: None }
    }

    /// Adapter for an optional recording
    #[must_use]
    pub fn optional(path: Option<&Path>) -> Self {
        path.map_or_else(Self::unavailable, Self::from_file)
    }

    /// Recording path, if any
    #[inline]
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl SourceAdapter for FixtureAdapter {
    fn fetch(&self, payload: &Payload) -> Result<ContentDocument, AdapterError> {
        let Some(path) = &self.source else {
            return Err(AdapterError::Transport("no recording configured".to_string()));
        };
        tracing::debug!(fixture = %path.display(), ?payload, "Serving recorded response");

        let text = std::fs::read_to_string(path)
            .map_err(|e| AdapterError::Transport(format!("{}: {e}", path.display())))?;
        ContentDocument::from_json_str(&text)
            .map_err(|e| AdapterError::Decode(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unavailable_is_transport_error() {
        let err = FixtureAdapter::unavailable().fetch(&Payload::new()).unwrap_err();
        assert!(matches!(err, AdapterError::Transport(_)));
    }

    #[test]
    fn reads_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "contents": {{}} }}"#).unwrap();

        let doc = FixtureAdapter::from_file(file.path()).fetch(&Payload::new()).unwrap();
        assert!(doc.as_value().get("contents").is_some());
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FixtureAdapter::from_file(file.path()).fetch(&Payload::new()).unwrap_err();
        assert!(matches!(err, AdapterError::Decode(_)));
    }

    #[test]
    fn missing_file_is_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = FixtureAdapter::optional(Some(&dir.path().join("absent.json")));
        assert!(matches!(
            adapter.fetch(&Payload::new()).unwrap_err(),
            AdapterError::Transport(_)
        ));
    }
}
