//! Keyed lookups over the lineage and eating-guide collections.

use crate::catalog::records::{EatingGuide, LineageRecord, Restaurant};
use crate::catalog::{integer_id, Catalog};

/// Keyword that switches [`lineage_info`] into aggregate mode.
pub const ALL_LINEAGES: &str = "all";

/// Lineage ids with a Korean display name, in the order they are offered
/// to callers.
pub const LINEAGE_NAMES: [(&str, &str); 5] = [
    ("wooraeok", "우래옥"),
    ("uijeongbu", "의정부파"),
    ("jangchungdong", "장충동파"),
    ("eulmildae", "을밀대"),
    ("okryugwan", "옥류관"),
];

/// Topic used when a guide request names none.
pub const DEFAULT_TOPIC: &str = "basic";

/// Map a lineage id to the display name used in lineage record titles.
/// Unknown ids pass through unchanged.
pub fn lineage_display_name(id: &str) -> &str {
    LINEAGE_NAMES
        .iter()
        .find(|(key, _)| *key == id)
        .map_or(id, |(_, name)| *name)
}

/// Single-restaurant lookup. An `id` that parses as an integer is an exact
/// id match and nothing else; an unparseable `id`, or no `id`, falls back
/// to a name-substring match on `name` (or on the `id` text when no name
/// was given).
pub fn get_restaurant<'a>(
    catalog: &'a Catalog,
    id: Option<&str>,
    name: Option<&str>,
) -> Option<&'a Restaurant> {
    if let Some(id) = id.map(str::trim) {
        if let Some(id) = integer_id(id) {
            return id.and_then(|id| catalog.restaurant_by_id(id));
        }
        return catalog.restaurant_by_name(name.unwrap_or(id));
    }
    name.and_then(|n| catalog.restaurant_by_name(n))
}

/// Comma-separated list of keys accepted by [`lineage_info`].
pub fn known_lineage_keys() -> String {
    LINEAGE_NAMES
        .iter()
        .map(|(key, _)| *key)
        .chain(std::iter::once(ALL_LINEAGES))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug)]
pub enum LineageLookup<'a> {
    /// No lineage document was loaded.
    NotLoaded,
    /// Aggregate mode: every lineage, in collection order.
    All(&'a [LineageRecord]),
    Found(&'a LineageRecord),
    /// `key` is the lowercased key that failed to match.
    NotFound { key: String },
}

/// Resolve a lineage key. `"all"` (any case) selects aggregate mode;
/// otherwise the first record whose name contains the mapped display name,
/// or whose lowercased name contains the lowercased key, wins.
pub fn lineage_info<'a>(catalog: &'a Catalog, key: &str) -> LineageLookup<'a> {
    if catalog.lineages.is_empty() {
        return LineageLookup::NotLoaded;
    }

    let key = key.trim().to_lowercase();
    if key == ALL_LINEAGES {
        return LineageLookup::All(&catalog.lineages);
    }

    let display = lineage_display_name(&key);
    catalog
        .lineages
        .iter()
        .find(|l| l.name.contains(display) || l.name.to_lowercase().contains(&key))
        .map_or(LineageLookup::NotFound { key: key.clone() }, LineageLookup::Found)
}

#[derive(Debug)]
pub enum GuideMatch<'a> {
    NotLoaded,
    Found(&'a EatingGuide),
    /// `available` lists every loaded topic in collection order.
    NotFound { available: Vec<&'a str> },
}

/// Outcome of [`eating_guide`]: the topic result plus an optional
/// restaurant whose notes are appended regardless of the topic outcome.
#[derive(Debug)]
pub struct GuideLookup<'a> {
    pub topic: String,
    pub guide: GuideMatch<'a>,
    pub restaurant: Option<&'a Restaurant>,
}

pub fn eating_guide<'a>(
    catalog: &'a Catalog,
    topic: Option<&str>,
    restaurant_hint: Option<&str>,
) -> GuideLookup<'a> {
    let topic = topic.unwrap_or(DEFAULT_TOPIC).to_string();

    let guide = if catalog.guides.is_empty() {
        GuideMatch::NotLoaded
    } else {
        match catalog.guides.iter().find(|g| g.topic == topic) {
            Some(g) => GuideMatch::Found(g),
            None => GuideMatch::NotFound {
                available: catalog.guides.iter().map(|g| g.topic.as_str()).collect(),
            },
        }
    };

    let restaurant = restaurant_hint.and_then(|hint| catalog.find_restaurant(hint));

    GuideLookup {
        topic,
        guide,
        restaurant,
    }
}
