//! MCP `get_eating_guide` tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{present, string_or_number, ValidationError};
use crate::catalog::Catalog;
use crate::engine::lookup::eating_guide;
use crate::render;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetEatingGuideParams {
    #[serde(default, deserialize_with = "string_or_number")]
    #[schemars(with = "Option<String>")]
    #[schemars(description = "Restaurant ID or name for restaurant-specific tips")]
    pub restaurant_id: Option<String>,

    #[schemars(
        description = "Topic: 'basic', 'condiments', 'ordering', 'etiquette', 'seasonal'. Defaults to 'basic'."
    )]
    pub topic: Option<String>,
}

pub fn run(catalog: &Catalog, params: GetEatingGuideParams) -> Result<String, ValidationError> {
    let topic = present(params.topic);
    let hint = present(params.restaurant_id);
    let lookup = eating_guide(catalog, topic.as_deref(), hint.as_deref());
    Ok(render::guide::eating_guide(&lookup))
}
