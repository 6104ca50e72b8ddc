//! Document layout variants
//!
//! A session receives exactly one layout. The variant is decided once
//! (from configuration or the serving host) and passed to every component
//! that walks layout-specific paths.

use crate::document::ContentDocument;
use crate::keys;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Host serving the single-column layout
pub const SINGLE_COLUMN_HOST: &str = "m.youtube.com";

/// Top-level document shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutVariant {
    /// Two-column layout (`twoColumnWatchNextResults`)
    #[default]
    Desktop,

    /// Single-column layout (`singleColumnWatchNextResults`)
    SingleColumn,
}

impl LayoutVariant {
    /// Layout served to a given host
    #[must_use]
    pub fn from_host(host: &str) -> Self {
        if host.eq_ignore_ascii_case(SINGLE_COLUMN_HOST) {
            Self::SingleColumn
        } else {
            Self::Desktop
        }
    }

    /// Key under `contents` that marks this layout
    #[inline]
    #[must_use]
    pub fn results_key(self) -> &'static str {
        match self {
            Self::Desktop => keys::TWO_COLUMN_RESULTS,
            Self::SingleColumn => keys::SINGLE_COLUMN_RESULTS,
        }
    }

    /// Probe a document for its layout
    ///
    /// The orchestrator never calls this; it trusts the configured layout.
    #[must_use]
    pub fn detect(document: &ContentDocument) -> Option<Self> {
        let contents = document.as_value().get(keys::CONTENTS)?.as_object()?;
        [Self::Desktop, Self::SingleColumn]
            .into_iter()
            .find(|layout| contents.contains_key(layout.results_key()))
    }

    /// Stable name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::SingleColumn => "single-column",
        }
    }
}

impl Display for LayoutVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutVariant {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(Self::Desktop),
            "single-column" => Ok(Self::SingleColumn),
            other => Err(LayoutParseError(other.to_string())),
        }
    }
}

/// Unknown layout name
#[derive(Debug, thiserror::Error)]
#[error("unknown layout '{0}' (expected 'desktop' or 'single-column')")]
pub struct LayoutParseError(pub String);
