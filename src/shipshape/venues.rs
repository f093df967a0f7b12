//! The hand-maintained venues database.
//!
//! One JSON document is the sole source of truth: a ship map keyed by
//! slug plus a flat venue list. It is read, mutated in memory, and
//! written back wholesale. A document that fails to parse aborts the
//! edit before anything is written; serialization uses a `BTreeMap` for
//! ships so key order is stable across edits.

use crate::error::{Result, ShipshapeError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    pub slug: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ship {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_tonnage: Option<u32>,
    /// Ordered venue-slug references; every slug must exist in the flat list
    #[serde(default)]
    pub venues: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VenuesDatabase {
    #[serde(default)]
    pub ships: BTreeMap<String, Ship>,
    #[serde(default)]
    pub venues: Vec<Venue>,
}

/// Outcome of an integrity check over the whole document.
#[derive(Debug, Default)]
pub struct IntegrityReport {
    /// (ship slug, venue slug) pairs where the venue does not exist
    pub dangling: Vec<(String, String)>,
    pub duplicate_slugs: Vec<String>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.duplicate_slugs.is_empty()
    }
}

impl VenuesDatabase {
    pub fn from_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(ShipshapeError::Serialization)
    }

    pub fn to_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ShipshapeError::Serialization)
    }

    pub fn has_venue(&self, slug: &str) -> bool {
        self.venues.iter().any(|v| v.slug == slug)
    }

    /// Append a venue to the flat list. The slug must be new.
    pub fn add_venue(&mut self, venue: Venue) -> Result<()> {
        if self.has_venue(&venue.slug) {
            return Err(ShipshapeError::Database(format!(
                "Venue slug already exists: {}",
                venue.slug
            )));
        }
        self.venues.push(venue);
        Ok(())
    }

    /// Add or overwrite a ship record. Every referenced venue slug must
    /// already exist in the flat list (add them first in the same edit).
    pub fn upsert_ship(&mut self, slug: &str, ship: Ship) -> Result<()> {
        for venue_slug in &ship.venues {
            if !self.has_venue(venue_slug) {
                return Err(ShipshapeError::Database(format!(
                    "Ship {} references unknown venue: {}",
                    slug, venue_slug
                )));
            }
        }
        self.ships.insert(slug.to_string(), ship);
        Ok(())
    }

    pub fn check(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();

        let mut seen = HashSet::new();
        for venue in &self.venues {
            if !seen.insert(venue.slug.as_str()) {
                report.duplicate_slugs.push(venue.slug.clone());
            }
        }

        for (ship_slug, ship) in &self.ships {
            for venue_slug in &ship.venues {
                if !self.has_venue(venue_slug) {
                    report
                        .dangling
                        .push((ship_slug.clone(), venue_slug.clone()));
                }
            }
        }

        report
    }
}
