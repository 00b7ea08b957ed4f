//! MCP `compare` tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{parse_category, present, required_string_or_number, ValidationError};
use crate::catalog::Catalog;
use crate::engine::compare::compare;
use crate::render;
use crate::render::comparison::ComparisonFocus;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CompareParams {
    #[serde(deserialize_with = "required_string_or_number")]
    #[schemars(with = "String")]
    #[schemars(description = "First restaurant (ID or name). Wins ties.")]
    pub restaurant1: String,

    #[serde(deserialize_with = "required_string_or_number")]
    #[schemars(with = "String")]
    #[schemars(description = "Second restaurant (ID or name)")]
    pub restaurant2: String,

    #[schemars(description = "Comparison focus: 'broth', 'noodle', 'overall', 'value'. Defaults to 'overall'.")]
    pub focus_on: Option<String>,
}

fn focus_choices() -> String {
    ComparisonFocus::ALL
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn run(catalog: &Catalog, params: CompareParams) -> Result<String, ValidationError> {
    let first = present(Some(params.restaurant1))
        .ok_or(ValidationError::Missing { field: "restaurant1" })?;
    let second = present(Some(params.restaurant2))
        .ok_or(ValidationError::Missing { field: "restaurant2" })?;
    let focus: ComparisonFocus =
        parse_category("focus_on", params.focus_on, focus_choices)?.unwrap_or_default();

    let outcome = compare(catalog, &first, &second);
    Ok(render::comparison::comparison(&outcome, &first, &second, focus))
}
