use crate::catalog::records::Restaurant;
use crate::catalog::types::{ExperienceLevel, Lineage, Region};
use crate::catalog::Catalog;

/// Predicates for [`search`]. Every field is optional; supplied ones are
/// AND-composed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub region: Option<Region>,
    pub lineage: Option<Lineage>,
    /// Keep restaurants whose naengmyeon price is at most this (won).
    pub max_price: Option<u32>,
    pub experience_level: Option<ExperienceLevel>,
    pub michelin_only: bool,
    pub has_slush_ice: Option<bool>,
    pub tier: Option<u8>,
    /// Whitespace-separated terms, each of which must appear somewhere in
    /// the restaurant's searchable text.
    pub query: Option<String>,
}

impl SearchFilters {
    pub fn matches(&self, r: &Restaurant) -> bool {
        if self.region.is_some_and(|region| r.region != region) {
            return false;
        }
        if self.lineage.is_some_and(|lineage| r.lineage != lineage) {
            return false;
        }
        if self.max_price.is_some_and(|max| r.naengmyeon_price() > max) {
            return false;
        }
        if self
            .experience_level
            .is_some_and(|level| !r.is_recommended_for(level))
        {
            return false;
        }
        if self.michelin_only && !r.has_michelin() {
            return false;
        }
        if self
            .has_slush_ice
            .is_some_and(|slush| r.broth.has_slush_ice != slush)
        {
            return false;
        }
        if self.tier.is_some_and(|tier| r.tier != tier) {
            return false;
        }
        if let Some(query) = self.query.as_deref() {
            if !matches_query(r, query) {
                return false;
            }
        }
        true
    }
}

/// Filter the restaurant collection and order it by rating, best first.
///
/// Ordering is stable: restaurants with equal ratings keep collection order.
/// An empty result is a normal outcome.
pub fn search<'a>(catalog: &'a Catalog, filters: &SearchFilters) -> Vec<&'a Restaurant> {
    let mut results: Vec<&Restaurant> = catalog
        .restaurants
        .iter()
        .filter(|r| filters.matches(r))
        .collect();

    results.sort_by(|a, b| b.score().total_cmp(&a.score()));

    tracing::debug!(
        matched = results.len(),
        total = catalog.restaurants.len(),
        "search filtered"
    );
    results
}

fn matches_query(r: &Restaurant, query: &str) -> bool {
    let haystack = searchable_text(r);
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|term| haystack.contains(&term))
}

/// Lowercased concatenation of the free-text fields a query can hit.
fn searchable_text(r: &Restaurant) -> String {
    let mut parts: Vec<&str> = vec![
        r.name.as_str(),
        r.broth.description.as_str(),
        r.noodle.description.as_str(),
        r.expert_rating.reviewer_note.as_str(),
    ];
    if let Some(english) = r.name_english.as_deref() {
        parts.push(english);
    }
    parts.extend(r.tags.iter().map(String::as_str));
    parts.extend(r.features.iter().map(String::as_str));
    parts.extend(r.noodle.texture_keywords.iter().map(String::as_str));
    parts.join("\n").to_lowercase()
}
