//! # API Facade
//!
//! The single entry point for all shipshape operations, regardless of
//! the UI driving them. The facade dispatches to the command layer and
//! returns structured `Result<CmdResult>` values; it never prints,
//! never exits, and never assumes a terminal.
//!
//! `ShipshapeApi<S: ContentStore>` is generic over the storage backend:
//! production code runs it over `FileStore`, tests over `InMemoryStore`.

use crate::commands;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::runner::RunOptions;
use crate::store::ContentStore;
use crate::venues::{Ship, Venue};
use std::path::PathBuf;

pub struct ShipshapeApi<S: ContentStore> {
    store: S,
    paths: commands::SitePaths,
    config: SiteConfig,
}

impl<S: ContentStore> ShipshapeApi<S> {
    pub fn new(store: S, paths: commands::SitePaths, config: SiteConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn run_patches(&mut self, names: &[String], opts: RunOptions) -> Result<commands::CmdResult> {
        commands::patching::run(&mut self.store, &self.config, &self.paths.root, names, opts)
    }

    pub fn list_patches(&self) -> Result<commands::CmdResult> {
        commands::patching::list()
    }

    pub fn add_venue(&mut self, venue: Venue) -> Result<commands::CmdResult> {
        commands::venues::add_venue(&mut self.store, &self.config, &self.paths.root, venue)
    }

    pub fn add_ship(&mut self, slug: &str, ship: Ship) -> Result<commands::CmdResult> {
        commands::venues::add_ship(&mut self.store, &self.config, &self.paths.root, slug, ship)
    }

    pub fn check_venues(&self) -> Result<commands::CmdResult> {
        commands::venues::check(&self.store, &self.config, &self.paths.root)
    }

    pub fn sitemap(
        &mut self,
        output: Option<PathBuf>,
        pages_file: Option<PathBuf>,
    ) -> Result<commands::CmdResult> {
        commands::sitemap::run(
            &mut self.store,
            &self.config,
            &self.paths.root,
            output,
            pages_file,
        )
    }

    pub fn convert_images(&self, paths: Vec<PathBuf>) -> Result<commands::CmdResult> {
        commands::images::run(&self.store, &self.config, &self.paths.root, paths)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        // Keep the in-memory view current after a set
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn paths(&self) -> &commands::SitePaths {
        &self.paths
    }

    pub fn site_config(&self) -> &SiteConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PatchInfo, SitePaths};
