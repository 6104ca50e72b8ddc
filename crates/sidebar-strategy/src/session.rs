//! Session context used to build strategy payloads

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Client name used when the session does not report one
pub const DEFAULT_CLIENT_NAME: &str = "WEB";

/// Client version used when the session does not report one
pub const DEFAULT_CLIENT_VERSION: &str = "2.20220203.04.00";

/// Session configuration keys read by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// Client name (`INNERTUBE_CLIENT_NAME`)
    ClientName,
    /// Client version (`INNERTUBE_CLIENT_VERSION`)
    ClientVersion,
    /// Interface locale (`HL`)
    Locale,
    /// Session/auth token (`XSRF_TOKEN`)
    SessionToken,
}

impl SessionKey {
    /// Key name as exposed by the host page configuration
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClientName => "INNERTUBE_CLIENT_NAME",
            Self::ClientVersion => "INNERTUBE_CLIENT_VERSION",
            Self::Locale => "HL",
            Self::SessionToken => "XSRF_TOKEN",
        }
    }
}

/// Read-only lookup of ambient session values
pub trait SessionContextProvider: Send + Sync {
    /// Value for key, if set
    fn value(&self, key: SessionKey) -> Option<String>;
}

/// Map-backed provider keyed by the host configuration names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticSessionContext {
    values: HashMap<String, String>,
}

impl StaticSessionContext {
    /// Create empty provider
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value
    #[must_use]
    pub fn with(mut self, key: SessionKey, value: impl Into<String>) -> Self {
        self.values.insert(key.as_str().to_string(), value.into());
        self
    }
}

impl SessionContextProvider for StaticSessionContext {
    fn value(&self, key: SessionKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }
}

/// Snapshot of the session values a strategy list is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Client name
    pub client_name: String,
    /// Client version
    pub client_version: String,
    /// Interface locale
    pub locale: Option<String>,
    /// Session/auth token
    pub session_token: Option<String>,
    /// Page is an embedded player
    pub is_embed: bool,
    /// Viewer already confirmed the content warning
    pub is_confirmed: bool,
}

impl SessionContext {
    /// Snapshot values from a provider, applying client defaults
    ///
    /// Empty strings count as unset.
    #[must_use]
    pub fn from_provider(provider: &dyn SessionContextProvider) -> Self {
        let read = |key| provider.value(key).filter(|v| !v.is_empty());
        Self {
            client_name: read(SessionKey::ClientName)
                .unwrap_or_else(|| DEFAULT_CLIENT_NAME.to_string()),
            client_version: read(SessionKey::ClientVersion)
                .unwrap_or_else(|| DEFAULT_CLIENT_VERSION.to_string()),
            locale: read(SessionKey::Locale),
            session_token: read(SessionKey::SessionToken),
            is_embed: false,
            is_confirmed: false,
        }
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

impl Default for SessionContext {
    fn default() -> Self {
        Self::from_provider(&StaticSessionContext::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied_when_unset() {
        let ctx = SessionContext::default();
        assert_eq!(ctx.client_name, "WEB");
        assert_eq!(ctx.client_version, "2.20220203.04.00");
        assert!(ctx.locale.is_none());
        assert!(ctx.session_token.is_none());
    }

    #[test]
    fn empty_values_count_as_unset() {
        let provider = StaticSessionContext::new()
            .with(SessionKey::ClientName, "")
            .with(SessionKey::Locale, "de");
        let ctx = SessionContext::from_provider(&provider);
        assert_eq!(ctx.client_name, "WEB");
        assert_eq!(ctx.locale.as_deref(), Some("de"));
    }

    #[test]
    fn provider_values_used() {
        let provider = StaticSessionContext::new()
            .with(SessionKey::ClientName, "MWEB")
            .with(SessionKey::ClientVersion, "2.1")
            .with(SessionKey::SessionToken, "tok");
        let ctx = SessionContext::from_provider(&provider)
            .with_embed(true)
            .with_confirmed(true);
        assert_eq!(ctx.client_name, "MWEB");
        assert_eq!(ctx.client_version, "2.1");
        assert_eq!(ctx.session_token.as_deref(), Some("tok"));
        assert!(ctx.is_embed && ctx.is_confirmed);
    }

    #[test]
    fn static_context_deserializes_from_map() {
        let provider: StaticSessionContext =
            serde_json::from_str(r#"{ "HL": "fr", "XSRF_TOKEN": "abc" }"#).unwrap();
        assert_eq!(provider.value(SessionKey::Locale).as_deref(), Some("fr"));
        assert_eq!(provider.value(SessionKey::SessionToken).as_deref(), Some("abc"));
        assert!(provider.value(SessionKey::ClientName).is_none());
    }
}
