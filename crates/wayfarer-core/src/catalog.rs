//! The curated destination catalog.
//!
//! The catalog is leaf data: an ordered, read-only list of destinations
//! supplied at startup. Catalog order is meaningful: the recommendation
//! sort is stable, so ties between equal scores resolve to catalog order.

use std::fs;
use std::path::Path;

use crate::error::{Result, TrackerError};
use crate::models::{Destination, Region};

/// An immutable, ordered collection of destinations.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// The curated catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Serialization` if the embedded asset is not
    /// valid destination JSON.
    pub fn builtin() -> Result<Self> {
        let raw = include_str!("../assets/destinations.json");
        let destinations: Vec<Destination> = serde_json::from_str(raw)?;
        Ok(Self { destinations })
    }

    /// Load a catalog from a JSON file of destination records.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref()).map_err(|e| TrackerError::FileSystem {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        let destinations: Vec<Destination> = serde_json::from_str(&raw)?;
        Ok(Self { destinations })
    }

    /// Build a catalog from already-loaded records, preserving their order.
    pub fn from_destinations(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    /// All destinations in catalog order.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Look up a destination by name and region.
    ///
    /// Names are unique within a region; the comparison ignores case so
    /// CLI input does not have to reproduce the curated capitalization.
    pub fn find(&self, name: &str, region: Region) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|d| d.region == region && d.name.eq_ignore_ascii_case(name))
    }

    /// Destinations belonging to the given region, in catalog order.
    pub fn by_region(&self, region: Region) -> Vec<&Destination> {
        self.destinations
            .iter()
            .filter(|d| d.region == region)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }
}
