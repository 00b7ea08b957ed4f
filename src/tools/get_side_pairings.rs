//! MCP `get_side_pairings` tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{present, string_or_number, ValidationError};
use crate::catalog::Catalog;
use crate::engine::pairings::side_pairings;
use crate::render;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetSidePairingsParams {
    #[serde(default, deserialize_with = "string_or_number")]
    #[schemars(with = "Option<String>")]
    #[schemars(description = "Restaurant ID or name; its own side menu is returned when it has one")]
    pub restaurant_id: Option<String>,

    #[schemars(description = "Per-person budget in won, used to pick course bundles")]
    pub budget: Option<u64>,

    #[schemars(description = "Include alcohol pairings. Defaults to false.")]
    pub include_alcohol: Option<bool>,
}

pub fn run(catalog: &Catalog, params: GetSidePairingsParams) -> Result<String, ValidationError> {
    let hint = present(params.restaurant_id);
    let plan = side_pairings(
        catalog,
        hint.as_deref(),
        params.budget,
        params.include_alcohol.unwrap_or(false),
    );
    Ok(render::pairings::side_pairings(&plan))
}
