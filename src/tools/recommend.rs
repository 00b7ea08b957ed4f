//! MCP `recommend` tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{parse_category, ValidationError};
use crate::catalog::types::{BrothPreference, ExperienceLevel, Region, VisitSituation};
use crate::catalog::Catalog;
use crate::engine::recommend::{recommend, Preferences};
use crate::render;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RecommendParams {
    #[schemars(description = "Experience level: 'beginner', 'intermediate', 'expert'")]
    pub experience_level: String,

    #[schemars(
        description = "Broth preference: 'rich_beefy', 'light_clean', 'dongchimi_sour', 'no_preference'. Defaults to 'no_preference'."
    )]
    pub broth_preference: Option<String>,

    #[schemars(
        description = "Visit situation: 'first_timer', 'date', 'business', 'solo', 'with_mania', 'hangover'"
    )]
    pub situation: Option<String>,

    #[schemars(description = "Preferred region")]
    pub region: Option<String>,

    #[schemars(description = "Skip restaurants with an average wait over 20 minutes. Defaults to false.")]
    pub avoid_long_wait: Option<bool>,
}

impl RecommendParams {
    pub fn validate(self) -> Result<Preferences, ValidationError> {
        let experience_level = parse_category(
            "experience_level",
            Some(self.experience_level),
            ExperienceLevel::expected,
        )?
        .ok_or(ValidationError::Missing {
            field: "experience_level",
        })?;

        Ok(Preferences {
            experience_level,
            broth_preference: parse_category(
                "broth_preference",
                self.broth_preference,
                BrothPreference::expected,
            )?
            .unwrap_or_default(),
            region: parse_category("region", self.region, Region::expected)?,
            avoid_long_wait: self.avoid_long_wait.unwrap_or(false),
            situation: parse_category("situation", self.situation, VisitSituation::expected)?,
        })
    }
}

pub fn run(catalog: &Catalog, params: RecommendParams) -> Result<String, ValidationError> {
    let prefs = params.validate()?;
    let results = recommend(catalog, &prefs);
    Ok(render::restaurants::recommendations(&results, &prefs))
}
