use crate::catalog::records::Restaurant;
use crate::catalog::types::{BrothPreference, ExperienceLevel, Region, VisitSituation};
use crate::catalog::Catalog;

/// Most restaurants a recommendation returns.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Waits longer than this (minutes) are dropped when the caller avoids queues.
pub const LONG_WAIT_MINUTES: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub experience_level: ExperienceLevel,
    pub broth_preference: BrothPreference,
    pub region: Option<Region>,
    pub avoid_long_wait: bool,
    /// Echoed back in the rendered heading only.
    pub situation: Option<VisitSituation>,
}

impl Preferences {
    pub fn new(experience_level: ExperienceLevel) -> Self {
        Self {
            experience_level,
            broth_preference: BrothPreference::NoPreference,
            region: None,
            avoid_long_wait: false,
            situation: None,
        }
    }
}

/// Whether a restaurant's broth suits the preference.
pub fn broth_matches(preference: BrothPreference, r: &Restaurant) -> bool {
    match preference {
        BrothPreference::RichBeefy => r.broth.beef_aroma_level >= 4,
        BrothPreference::LightClean => r.broth.saltiness_level <= 2,
        BrothPreference::DongchimiSour => r.broth.dongchimi,
        BrothPreference::NoPreference => true,
    }
}

/// Rank restaurants for a diner and return the best few.
///
/// Restaurants must list the requested experience level. Ordering is tier
/// ascending (tier 1 first), then rating descending.
pub fn recommend<'a>(catalog: &'a Catalog, prefs: &Preferences) -> Vec<&'a Restaurant> {
    let mut results: Vec<&Restaurant> = catalog
        .restaurants
        .iter()
        .filter(|r| r.is_recommended_for(prefs.experience_level))
        .filter(|r| broth_matches(prefs.broth_preference, r))
        .filter(|r| prefs.region.map_or(true, |region| r.region == region))
        .filter(|r| {
            !prefs.avoid_long_wait || r.average_wait_minutes.unwrap_or(0) <= LONG_WAIT_MINUTES
        })
        .collect();

    results.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| b.score().total_cmp(&a.score()))
    });
    results.truncate(MAX_RECOMMENDATIONS);

    tracing::debug!(
        level = %prefs.experience_level,
        broth = %prefs.broth_preference,
        returned = results.len(),
        "recommendation ranked"
    );
    results
}
