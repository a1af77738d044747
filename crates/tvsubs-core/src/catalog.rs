//! High-level catalogue pipeline API
//!
//! Combines the page client, the index walker, the pure stages, the resolver
//! and the exporter into the end-to-end run. Data flows strictly forward;
//! the output file is only created once every stage has succeeded.

use std::path::Path;

use tracing::info;

use crate::client::WikiClient;
use crate::error::Result;
use crate::export::{assemble, export_catalog};
use crate::parser::parse_index;
use crate::resolver::{resolve_all, ResolvePolicy, ResolveSubreddit};
use crate::stages::{append_manual_shows, normalize_entries, trim_meta_categories};
use crate::types::ResolvedShow;

/// End-to-end catalogue pipeline.
///
/// # Example
/// ```no_run
/// use tvsubs_core::{CatalogPipeline, RedditResolver, Settings, WikiClient};
///
/// # async fn example() -> tvsubs_core::Result<()> {
/// let settings = Settings::from_env()?;
/// let client = WikiClient::new(settings.client_config())?;
/// let resolver = RedditResolver::new(settings.credentials())?;
///
/// let rows = CatalogPipeline::new(client, resolver)
///     .run(&settings.output_path)
///     .await?;
/// println!("wrote {rows} shows");
/// # Ok(())
/// # }
/// ```
pub struct CatalogPipeline<R> {
    client: WikiClient,
    resolver: R,
    policy: ResolvePolicy,
}

impl<R: ResolveSubreddit> CatalogPipeline<R> {
    /// Create a pipeline with the default fail-fast lookup policy.
    pub fn new(client: WikiClient, resolver: R) -> Self {
        Self {
            client,
            resolver,
            policy: ResolvePolicy::default(),
        }
    }

    /// Use a different lookup-failure policy.
    pub fn with_policy(mut self, policy: ResolvePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the catalogue rows without writing them anywhere.
    pub async fn build(&self) -> Result<Vec<ResolvedShow>> {
        let html = self.client.fetch_index().await?;

        let entries = parse_index(&html)?;
        info!(count = entries.len(), "extracted index entries");

        let entries = trim_meta_categories(entries)?;
        let shows = append_manual_shows(normalize_entries(entries));
        info!(count = shows.len(), "shows to resolve");

        let names: Vec<String> = shows.iter().map(|s| s.name.clone()).collect();
        let categories: Vec<String> = shows.iter().map(|s| s.category.clone()).collect();
        let ids = resolve_all(&self.resolver, &names, self.policy).await?;

        assemble(&names, &ids, &categories)
    }

    /// Run the pipeline and write the catalogue to `path`.
    ///
    /// # Returns
    /// The number of catalogue rows written (excluding the header).
    pub async fn run(&self, path: &Path) -> Result<usize> {
        let rows = self.build().await?;
        export_catalog(path, &rows)?;
        info!(rows = rows.len(), path = %path.display(), "catalogue written");
        Ok(rows.len())
    }
}
