//! MCP `get_lineage_info` tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{present, ValidationError};
use crate::catalog::Catalog;
use crate::engine::lookup::lineage_info;
use crate::render;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetLineageInfoParams {
    #[schemars(
        description = "Lineage id ('wooraeok', 'uijeongbu', 'jangchungdong', 'eulmildae', 'okryugwan') or 'all' for a summary of every lineage"
    )]
    pub lineage: String,
}

pub fn run(catalog: &Catalog, params: GetLineageInfoParams) -> Result<String, ValidationError> {
    let key = present(Some(params.lineage)).ok_or(ValidationError::Missing { field: "lineage" })?;
    Ok(render::lineage::lineage(&lineage_info(catalog, &key)))
}
