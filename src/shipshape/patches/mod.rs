//! The shipped patch catalog.
//!
//! Each submodule builds one [`Patch`]; [`all`] is the registry in the
//! order a full run applies them. Patch construction returns `Result`
//! because the regexes are compiled at build time of the run, not of
//! the crate.

use crate::error::{Result, ShipshapeError};
use crate::patch::Patch;

pub mod dedupe;
pub mod lazy;
pub mod meta;
pub mod preload;
pub mod webp;

/// Every shipped patch, in application order.
pub fn all() -> Result<Vec<Box<dyn Patch>>> {
    Ok(vec![
        Box::new(preload::hero_preload()?),
        Box::new(meta::meta_description()?),
        Box::new(webp::webp_images()?),
        Box::new(lazy::lazy_images()?),
        Box::new(dedupe::dedupe_nav()?),
    ])
}

/// Resolve a user-supplied name list against the catalog.
/// An empty list means the whole catalog; an unknown name is an error.
pub fn by_names(names: &[String]) -> Result<Vec<Box<dyn Patch>>> {
    let catalog = all()?;
    if names.is_empty() {
        return Ok(catalog);
    }

    let known: Vec<String> = catalog.iter().map(|p| p.name().to_string()).collect();
    for name in names {
        if !known.iter().any(|k| k == name) {
            return Err(ShipshapeError::Api(format!(
                "Unknown patch: {} (available: {})",
                name,
                known.join(", ")
            )));
        }
    }

    Ok(catalog
        .into_iter()
        .filter(|p| names.iter().any(|n| n == p.name()))
        .collect())
}
