//! Orchestrator configuration

use serde::{Deserialize, Serialize};
use sidebar_document::LayoutVariant;
use std::num::NonZeroUsize;

/// Session-wide unlock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnlockConfig {
    /// Layout every document of this session uses
    pub layout: LayoutVariant,
    /// Resolved documents kept in memory
    pub cache_capacity: NonZeroUsize,
    /// Page is an embedded player
    pub is_embed: bool,
    /// Viewer already confirmed the content warning
    pub is_confirmed: bool,
}

impl UnlockConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With layout
    #[inline]
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutVariant) -> Self {
        self.layout = layout;
        self
    }

    /// With layout derived from the serving host
    #[inline]
    #[must_use]
    pub fn for_host(self, host: &str) -> Self {
        self.with_layout(LayoutVariant::from_host(host))
    }

    /// With cache capacity
    #[inline]
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// With embed flag
    #[inline]
    #[must_use]
    pub fn with_embed(mut self, is_embed: bool) -> Self {
        self.is_embed = is_embed;
        self
    }

    /// With confirmation flag
    #[inline]
    #[must_use]
    pub fn with_confirmed(mut self, is_confirmed: bool) -> Self {
        self.is_confirmed = is_confirmed;
        self
    }
}

impl Default for UnlockConfig {
    fn default() -> Self {
        Self {
            layout: LayoutVariant::Desktop,
            cache_capacity: NonZeroUsize::MIN,
            is_embed: false,
            is_confirmed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = UnlockConfig::new();
        assert_eq!(config.layout, LayoutVariant::Desktop);
        assert_eq!(config.cache_capacity.get(), 1);
        assert!(!config.is_embed);
        assert!(!config.is_confirmed);
    }

    #[test]
    fn builders() {
        let config = UnlockConfig::new()
            .for_host("m.youtube.com")
            .with_embed(true)
            .with_cache_capacity(NonZeroUsize::new(4).unwrap());
        assert_eq!(config.layout, LayoutVariant::SingleColumn);
        assert_eq!(config.cache_capacity.get(), 4);
        assert!(config.is_embed);
    }

    #[test]
    fn partial_deserialization_uses_defaults() {
        let config: UnlockConfig = serde_json::from_str(r#"{ "layout": "single-column" }"#).unwrap();
        assert_eq!(config.layout, LayoutVariant::SingleColumn);
        assert_eq!(config.cache_capacity.get(), 1);
    }

    #[test]
    fn zero_capacity_rejected() {
        let result: Result<UnlockConfig, _> = serde_json::from_str(r#"{ "cache_capacity": 0 }"#);
        assert!(result.is_err());
    }
}
