//! MCP `search_restaurants` tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{parse_category, present, ValidationError};
use crate::catalog::types::{ExperienceLevel, Lineage, Region};
use crate::catalog::Catalog;
use crate::engine::search::{search, SearchFilters};
use crate::render;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchRestaurantsParams {
    #[schemars(
        description = "Region: 'jongno_euljiro', 'gangnam_seocho', 'mapo_yeouido', 'songpa_jamsil', 'gyeonggi_north', 'gyeonggi_south'"
    )]
    pub region: Option<String>,

    #[schemars(
        description = "Lineage: 'wooraeok', 'uijeongbu', 'jangchungdong', 'eulmildae', 'okryugwan', 'independent'"
    )]
    pub lineage: Option<String>,

    #[schemars(description = "Maximum naengmyeon price in won")]
    pub max_price: Option<u32>,

    #[schemars(description = "Experience level: 'beginner', 'intermediate', 'expert'")]
    pub experience_level: Option<String>,

    #[schemars(description = "Only restaurants with a Michelin certification. Defaults to false.")]
    pub michelin_only: Option<bool>,

    #[schemars(description = "Filter by slush-ice broth (true/false)")]
    pub has_slush_ice: Option<bool>,

    #[schemars(description = "Tier filter: 1 (top) to 3")]
    pub tier: Option<u8>,

    #[schemars(
        description = "Free-text keywords matched against names, tags, features and tasting notes"
    )]
    pub query: Option<String>,
}

impl SearchRestaurantsParams {
    pub fn validate(self) -> Result<SearchFilters, ValidationError> {
        if let Some(tier) = self.tier {
            if !(1..=3).contains(&tier) {
                return Err(ValidationError::OutOfRange {
                    field: "tier",
                    value: i64::from(tier),
                    range: "1..=3",
                });
            }
        }

        Ok(SearchFilters {
            region: parse_category("region", self.region, Region::expected)?,
            lineage: parse_category("lineage", self.lineage, Lineage::expected)?,
            max_price: self.max_price,
            experience_level: parse_category(
                "experience_level",
                self.experience_level,
                ExperienceLevel::expected,
            )?,
            michelin_only: self.michelin_only.unwrap_or(false),
            has_slush_ice: self.has_slush_ice,
            tier: self.tier,
            query: present(self.query),
        })
    }
}

pub fn run(catalog: &Catalog, params: SearchRestaurantsParams) -> Result<String, ValidationError> {
    let filters = params.validate()?;
    let results = search(catalog, &filters);
    Ok(render::restaurants::search_results(&results, &filters))
}
