//! The in-memory data store.
//!
//! [`Catalog::load`] reads the four JSON documents under a data directory
//! once at startup. A missing file yields an empty collection; a file that
//! exists but does not decode, or a record that violates a range or
//! uniqueness invariant, aborts the load. The catalog is never mutated
//! afterwards and is shared read-only between sessions.

pub mod records;
pub mod types;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use records::{EatingGuide, LineageRecord, Restaurant, SideMenuCatalog};

pub const RESTAURANTS_FILE: &str = "restaurants.json";
pub const LINEAGES_FILE: &str = "lineages.json";
pub const GUIDES_FILE: &str = "eating_guides.json";
pub const SIDE_MENUS_FILE: &str = "side_menus.json";

/// All four backing files, in load order.
pub const DATA_FILES: [&str; 4] = [RESTAURANTS_FILE, LINEAGES_FILE, GUIDES_FILE, SIDE_MENUS_FILE];

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate restaurant id {id}")]
    DuplicateId { id: u32 },
    #[error("restaurant {id}: {field} = {value} is outside {range}")]
    OutOfRange {
        id: u32,
        field: &'static str,
        value: i64,
        range: &'static str,
    },
}

#[derive(Deserialize)]
struct RestaurantsDoc {
    #[serde(default)]
    restaurants: Vec<Restaurant>,
}

#[derive(Deserialize)]
struct LineagesDoc {
    #[serde(default)]
    lineages: Vec<LineageRecord>,
}

#[derive(Deserialize)]
struct GuidesDoc {
    #[serde(default)]
    eating_guides: Vec<EatingGuide>,
}

/// The loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
    pub lineages: Vec<LineageRecord>,
    pub guides: Vec<EatingGuide>,
    pub side_menus: SideMenuCatalog,
}

impl Catalog {
    /// Build a catalog from already-decoded collections, enforcing the
    /// restaurant invariants (unique ids, bounded scales).
    pub fn new(
        restaurants: Vec<Restaurant>,
        lineages: Vec<LineageRecord>,
        guides: Vec<EatingGuide>,
        side_menus: SideMenuCatalog,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(restaurants.len());
        for r in &restaurants {
            if !seen.insert(r.id) {
                return Err(CatalogError::DuplicateId { id: r.id });
            }
            if let Some((field, value, range)) = r.out_of_range() {
                return Err(CatalogError::OutOfRange {
                    id: r.id,
                    field,
                    value,
                    range,
                });
            }
        }

        Ok(Self {
            restaurants,
            lineages,
            guides,
            side_menus,
        })
    }

    /// Load every collection from `dir`. Absent files are skipped.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();

        let restaurants = read_document::<RestaurantsDoc>(&dir.join(RESTAURANTS_FILE))?
            .map(|d| d.restaurants)
            .unwrap_or_default();
        let lineages = read_document::<LineagesDoc>(&dir.join(LINEAGES_FILE))?
            .map(|d| d.lineages)
            .unwrap_or_default();
        let guides = read_document::<GuidesDoc>(&dir.join(GUIDES_FILE))?
            .map(|d| d.eating_guides)
            .unwrap_or_default();
        let side_menus = read_document::<SideMenuCatalog>(&dir.join(SIDE_MENUS_FILE))?
            .unwrap_or_default();

        let catalog = Self::new(restaurants, lineages, guides, side_menus)?;

        tracing::info!(
            dir = %dir.display(),
            restaurants = catalog.restaurants.len(),
            lineages = catalog.lineages.len(),
            guides = catalog.guides.len(),
            side_dishes = catalog.side_menus.side_dishes.len(),
            courses = catalog.side_menus.course_examples.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn restaurant_by_id(&self, id: u32) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// First restaurant, in collection order, whose name contains `fragment`.
    pub fn restaurant_by_name(&self, fragment: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.name.contains(fragment))
    }

    /// Resolve a free-form reference: a string that parses as an integer is
    /// an exact id lookup, anything else is a name-substring match.
    pub fn find_restaurant(&self, reference: &str) -> Option<&Restaurant> {
        let reference = reference.trim();
        match integer_id(reference) {
            Some(id) => id.and_then(|id| self.restaurant_by_id(id)),
            None => self.restaurant_by_name(reference),
        }
    }
}

/// Classify a reference as an integer id. `None` when the text is not an
/// integer at all; `Some(None)` for integers no restaurant can carry
/// (negative, or wider than `u32`).
pub fn integer_id(text: &str) -> Option<Option<u32>> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(
        text.parse::<i64>()
            .ok()
            .and_then(|n| u32::try_from(n).ok()),
    )
}

/// Read and decode one document. `Ok(None)` when the file does not exist.
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, CatalogError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "data file not found, collection will be empty");
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(doc))
}
