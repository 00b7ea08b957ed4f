//! MCP `get_restaurant` tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{present, string_or_number, ValidationError};
use crate::catalog::Catalog;
use crate::engine::lookup::get_restaurant;
use crate::render;

/// Provide `id`, `name`, or both. A numeric `id` is an exact match; otherwise
/// the restaurant name is matched by substring.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetRestaurantParams {
    #[serde(default, deserialize_with = "string_or_number")]
    #[schemars(with = "Option<String>")]
    #[schemars(description = "Restaurant ID. Required unless 'name' is provided.")]
    pub id: Option<String>,

    #[schemars(description = "Restaurant name or part of it. Required unless 'id' is provided.")]
    pub name: Option<String>,
}

pub fn run(catalog: &Catalog, params: GetRestaurantParams) -> Result<String, ValidationError> {
    let id = present(params.id);
    let name = present(params.name);

    let query = match (&id, &name) {
        (Some(id), _) => id.clone(),
        (None, Some(name)) => name.clone(),
        (None, None) => return Err(ValidationError::Missing { field: "id or name" }),
    };

    let restaurant = get_restaurant(catalog, id.as_deref(), name.as_deref());
    Ok(render::restaurants::restaurant_detail(restaurant, &query))
}
