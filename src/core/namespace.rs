//! Workers Sites KV namespaces.
//!
//! A site deployment stores its assets in a namespace titled
//! `__<deploy_name>-workers_sites_assets`. Teardown finds it either by
//! scraping `wrangler kv:namespace list` output or by asking the API.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{NamespaceError, Result};

/// A KV namespace as reported by wrangler or the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub id: String,
    pub title: String,
}

/// Where to get the namespace list from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NamespaceSource {
    /// Scrape `wrangler kv:namespace list`.
    #[default]
    Cli,
    /// Query the KV namespaces endpoint.
    Api,
}

/// Title of the assets namespace for a deployment.
pub fn assets_title(deploy_name: &str) -> String {
    format!("__{}-workers_sites_assets", deploy_name)
}

fn array_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Literal pattern, checked by tests.
    PATTERN.get_or_init(|| Regex::new(r"\[\{.+\}\]").expect("valid regex"))
}

/// Pull the namespace array out of free-form CLI output.
///
/// All whitespace is removed first, then the first `[{ ... }]` run (greedy,
/// so it spans to the last `}]`) is decoded as JSON.
pub fn parse_cli_listing(output: &str) -> Result<Vec<Namespace>> {
    let compact: String = output.chars().filter(|c| !c.is_whitespace()).collect();
    let found = array_pattern()
        .find(&compact)
        .ok_or(NamespaceError::NoList)?;
    let namespaces: Vec<Namespace> =
        serde_json::from_str(found.as_str()).map_err(NamespaceError::Parse)?;
    debug!(count = namespaces.len(), "parsed namespace listing");
    Ok(namespaces)
}

/// The assets namespace for `deploy_name`.
pub fn find_assets(namespaces: &[Namespace], deploy_name: &str) -> Result<Namespace> {
    let title = assets_title(deploy_name);
    namespaces
        .iter()
        .find(|n| n.title == title)
        .cloned()
        .ok_or_else(|| NamespaceError::NotFound { title }.into())
}
