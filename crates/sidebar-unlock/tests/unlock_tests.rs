use mockall::mock;
use pretty_assertions::assert_eq;
use serde_json::json;
use sidebar_document::{ContentDocument, LayoutVariant};
use sidebar_resolver::SidebarValidator;
use sidebar_strategy::{AdapterError, SessionKey, StaticSessionContext};
use sidebar_test_utils::{
    desktop_restricted, desktop_unlocked, scripted_adapters, single_column_restricted,
    single_column_unlocked, ScriptedAdapter,
};
use sidebar_unlock::{UnlockConfig, UnlockError, UnlockOrchestrator};
use std::num::NonZeroUsize;
use std::sync::Arc;

mock! {
    Validator {}
    impl SidebarValidator for Validator {
        fn is_sidebar_empty(&self, document: &ContentDocument) -> bool;
    }
}

fn orchestrator(
    config: UnlockConfig,
    watch: &Arc<ScriptedAdapter>,
    proxy: &Arc<ScriptedAdapter>,
) -> UnlockOrchestrator {
    UnlockOrchestrator::new(
        config,
        scripted_adapters(watch, proxy),
        &StaticSessionContext::new().with(SessionKey::SessionToken, "tok"),
    )
}

#[test]
fn test_desktop_unlock_end_to_end() {
    let watch = ScriptedAdapter::failing(AdapterError::Transport("offline".into()));
    let proxy = ScriptedAdapter::returning(desktop_unlocked(
        "v",
        Some(json!({ "runs": [{ "text": "full description" }] })),
        &["a", "b"],
    ));
    let unlocker = orchestrator(UnlockConfig::new(), &watch, &proxy);

    let mut doc = desktop_restricted("v", Some(json!({ "runs": [{ "text": "cut" }] })));
    unlocker.unlock(&mut doc).unwrap();

    let results = &doc.as_value()["contents"]["twoColumnWatchNextResults"];
    assert_eq!(
        results["secondaryResults"]["secondaryResults"]["results"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
    assert_eq!(
        results["results"]["results"]["contents"][1]["videoSecondaryInfoRenderer"]["description"],
        json!({ "runs": [{ "text": "full description" }] })
    );
    // Primary info stays the original's
    assert_eq!(
        results["results"]["results"]["contents"][0]["videoPrimaryInfoRenderer"]["title"],
        json!("restricted")
    );
    assert_eq!(watch.calls(), 1);
    assert_eq!(proxy.calls(), 1);
}

#[test]
fn test_single_column_unlock_end_to_end() {
    let watch = ScriptedAdapter::returning(single_column_unlocked(
        "m1",
        true,
        Some(json!({ "descriptionBodyText": "full" })),
    ));
    let proxy = ScriptedAdapter::failing(AdapterError::Transport("unused".into()));
    let unlocker = orchestrator(
        UnlockConfig::new().for_host("m.youtube.com"),
        &watch,
        &proxy,
    );
    assert_eq!(unlocker.layout(), LayoutVariant::SingleColumn);

    let mut doc = single_column_restricted("m1", json!({ "descriptionBodyText": "stub" }));
    unlocker.unlock(&mut doc).unwrap();

    let contents = doc.as_value()["contents"]["singleColumnWatchNextResults"]["results"]
        ["results"]["contents"]
        .as_array()
        .cloned()
        .unwrap();
    assert_eq!(contents.len(), 2);
    assert_eq!(contents[1]["itemSectionRenderer"]["targetId"], "watch-next-feed");

    let items = &doc.as_value()["engagementPanels"][1]["engagementPanelSectionListRenderer"]
        ["content"]["structuredDescriptionContentRenderer"]["items"];
    assert_eq!(
        items[1]["expandableVideoDescriptionBodyRenderer"],
        json!({ "descriptionBodyText": "full" })
    );
    assert_eq!(proxy.calls(), 0);
}

#[test]
fn test_exhaustion_reports_unlock_failed_and_keeps_document() {
    let watch = ScriptedAdapter::failing(AdapterError::Transport("offline".into()));
    let proxy = ScriptedAdapter::returning(desktop_restricted("v", None));
    let unlocker = orchestrator(UnlockConfig::new(), &watch, &proxy);

    let original = desktop_restricted("v", None);
    let mut doc = original.clone();
    let err = unlocker.unlock(&mut doc).unwrap_err();

    assert!(err.is_exhausted());
    assert!(matches!(err, UnlockError::UnlockFailed { ref content_id } if content_id.as_str() == "v"));
    assert_eq!(doc, original);
}

#[test]
fn test_exhausted_identifier_is_not_retried() {
    let watch = ScriptedAdapter::failing(AdapterError::Transport("offline".into()));
    let proxy = ScriptedAdapter::failing(AdapterError::rejected(403, "forbidden"));
    let unlocker = orchestrator(UnlockConfig::new(), &watch, &proxy);

    for _ in 0..3 {
        let mut doc = desktop_restricted("v", None);
        assert!(unlocker.unlock(&mut doc).unwrap_err().is_exhausted());
    }

    assert_eq!(watch.calls(), 1);
    assert_eq!(proxy.calls(), 1);
    let stats = unlocker.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 2);
}

#[test]
fn test_malformed_document_is_rejected_without_fetching() {
    let watch = ScriptedAdapter::returning(desktop_unlocked("v", None, &["a"]));
    let proxy = ScriptedAdapter::returning(desktop_unlocked("v", None, &["a"]));
    let unlocker = orchestrator(UnlockConfig::new(), &watch, &proxy);

    let mut doc = ContentDocument::new(json!({ "contents": {} }));
    let err = unlocker.unlock(&mut doc).unwrap_err();

    assert!(err.is_malformed_document());
    assert_eq!(watch.calls() + proxy.calls(), 0);
}

#[test]
fn test_merge_mismatch_leaves_original_untouched() {
    let watch = ScriptedAdapter::returning(desktop_unlocked("v", None, &["a"]));
    let proxy = ScriptedAdapter::returning(desktop_unlocked("v", None, &["a"]));
    let unlocker = orchestrator(UnlockConfig::new(), &watch, &proxy);

    // Identifier present, but no primary contents to patch
    let original = ContentDocument::new(json!({
        "currentVideoEndpoint": { "watchEndpoint": { "videoId": "v" } },
        "contents": { "twoColumnWatchNextResults": { "secondaryResults": {} } }
    }));
    let mut doc = original.clone();
    let err = unlocker.unlock(&mut doc).unwrap_err();

    assert!(err.is_structural_mismatch());
    assert_eq!(doc, original);
}

#[test]
fn test_custom_validator_decides_failure() {
    let mut validator = MockValidator::new();
    validator.expect_is_sidebar_empty().returning(|_| true);

    let watch = ScriptedAdapter::returning(desktop_unlocked("v", None, &["a"]));
    let proxy = ScriptedAdapter::returning(desktop_unlocked("v", None, &["b"]));
    let unlocker = UnlockOrchestrator::with_validator(
        UnlockConfig::new(),
        scripted_adapters(&watch, &proxy),
        &StaticSessionContext::new(),
        Arc::new(validator),
    );

    let mut doc = desktop_restricted("v", None);
    assert!(unlocker.unlock(&mut doc).unwrap_err().is_exhausted());
    assert_eq!(watch.calls(), 1);
    assert_eq!(proxy.calls(), 1);
}

#[test]
fn test_cache_capacity_bounds_entries() {
    let watch = ScriptedAdapter::failing(AdapterError::Transport("offline".into()));
    let proxy = ScriptedAdapter::failing(AdapterError::Transport("offline".into()));
    let config = UnlockConfig::new().with_cache_capacity(NonZeroUsize::new(2).unwrap());
    let unlocker = orchestrator(config, &watch, &proxy);

    for id in ["a", "b", "c"] {
        let mut doc = desktop_restricted(id, None);
        let _ = unlocker.unlock(&mut doc);
    }

    let stats = unlocker.cache_stats();
    assert_eq!(stats.entry_count, 2);
    assert_eq!(stats.evictions, 1);

    unlocker.clear_cache();
    assert_eq!(unlocker.cache_stats().entry_count, 0);
}

#[test]
fn test_session_payloads_carry_config_flags() {
    let watch = ScriptedAdapter::failing(AdapterError::Transport("offline".into()));
    let proxy = ScriptedAdapter::returning(desktop_unlocked("v", None, &["a"]));
    let config = UnlockConfig::new().with_embed(true).with_confirmed(true);
    let unlocker = orchestrator(config, &watch, &proxy);

    let mut doc = desktop_restricted("v", None);
    unlocker.unlock(&mut doc).unwrap();

    assert_eq!(watch.payloads()[0]["session_token"], "tok");
    let payload = &proxy.payloads()[0];
    assert_eq!(payload["clientName"], "WEB");
    assert_eq!(payload["isEmbed"], 1);
    assert_eq!(payload["isConfirmed"], 1);
}
