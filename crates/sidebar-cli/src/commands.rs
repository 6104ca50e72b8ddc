//! Subcommand implementations

use crate::config::CliConfig;
use crate::fixture::FixtureAdapter;
use anyhow::Context;
use serde::Serialize;
use sidebar_document::{ContentDocument, LayoutVariant};
use sidebar_resolver::{SidebarInspector, SidebarValidator};
use sidebar_strategy::SourceAdapters;
use sidebar_unlock::UnlockOrchestrator;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Inputs of the `unlock` subcommand
#[derive(Debug, Clone, Default)]
pub struct UnlockArgs {
    /// Restricted document
    pub document: PathBuf,
    /// Recorded watch endpoint response
    pub watch: Option<PathBuf>,
    /// Recorded account proxy response
    pub proxy: Option<PathBuf>,
    /// Explicit layout
    pub layout: Option<LayoutVariant>,
    /// Configuration file
    pub config: Option<PathBuf>,
}

/// Result of the `inspect` subcommand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    /// Content identifier, if present
    pub content_id: Option<String>,
    /// Layout used for the check
    pub layout: LayoutVariant,
    /// Whether the sidebar is empty under that layout
    pub sidebar_empty: bool,
}

/// Read a document from disk
///
/// # Errors
/// Fails if the file is unreadable or not JSON.
pub fn read_document(path: &Path) -> anyhow::Result<ContentDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read document '{}'", path.display()))?;
    ContentDocument::from_json_str(&text)
        .with_context(|| format!("'{}' is not a JSON document", path.display()))
}

/// Layout precedence: flag, then config file, then the document's shape
fn pick_layout(
    flag: Option<LayoutVariant>,
    config: Option<&CliConfig>,
    document: &ContentDocument,
) -> LayoutVariant {
    flag.or_else(|| config.map(|c| c.unlock.layout))
        .or_else(|| LayoutVariant::detect(document))
        .unwrap_or_default()
}

/// Unlock a recorded document and return the merged JSON
///
/// # Errors
/// Fails on unreadable inputs or when the unlock itself fails.
pub fn run_unlock(args: &UnlockArgs) -> anyhow::Result<String> {
    let file_config = args
        .config
        .as_deref()
        .map(CliConfig::load)
        .transpose()?;
    let mut document = read_document(&args.document)?;

    let layout = pick_layout(args.layout, file_config.as_ref(), &document);
    let CliConfig { unlock, session } = file_config.unwrap_or_default();
    let config = unlock.with_layout(layout);

    let adapters = SourceAdapters::new(
        Arc::new(FixtureAdapter::optional(args.watch.as_deref())),
        Arc::new(FixtureAdapter::optional(args.proxy.as_deref())),
    );
    let orchestrator = UnlockOrchestrator::new(config, adapters, &session);
    tracing::debug!(?orchestrator, "Orchestrator ready");

    orchestrator
        .unlock(&mut document)
        .with_context(|| format!("unlock of '{}' failed", args.document.display()))?;

    Ok(document.to_json_pretty()?)
}

/// Report layout and sidebar state of a recorded document
///
/// # Errors
/// Fails if the document cannot be read.
pub fn run_inspect(path: &Path, layout: Option<LayoutVariant>) -> anyhow::Result<InspectReport> {
    let document = read_document(path)?;
    let layout = pick_layout(layout, None, &document);

    Ok(InspectReport {
        content_id: document.content_id().ok().map(|id| id.as_str().to_string()),
        layout,
        sidebar_empty: SidebarInspector::new(layout).is_sidebar_empty(&document),
    })
}
