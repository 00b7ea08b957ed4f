//! MCP tool gateway.
//!
//! Each tool has a parameter struct (JSON schema via `schemars`) in its own
//! module, a `validate` step that turns raw parameters into engine inputs,
//! and a `run` function that executes the engine and renders text. The
//! `#[tool]` methods on [`NaengmyeonTools`] only log and delegate.

pub mod compare;
pub mod get_eating_guide;
pub mod get_lineage_info;
pub mod get_restaurant;
pub mod get_side_pairings;
pub mod recommend;
pub mod search_restaurants;

use compare::CompareParams;
use get_eating_guide::GetEatingGuideParams;
use get_lineage_info::GetLineageInfoParams;
use get_restaurant::GetRestaurantParams;
use get_side_pairings::GetSidePairingsParams;
use recommend::RecommendParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use search_restaurants::SearchRestaurantsParams;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::catalog::Catalog;

/// Rejected tool input. Reported back to the client as a tool error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid {field} '{value}': expected one of {expected}")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: String,
    },
    #[error("{field} must be in {range}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        range: &'static str,
    },
    #[error("{field} is required")]
    Missing { field: &'static str },
}

/// Trim a string input; blank counts as absent.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an optional category value, naming the field and accepted values
/// on failure.
pub(crate) fn parse_category<T: std::str::FromStr>(
    field: &'static str,
    value: Option<String>,
    expected: impl FnOnce() -> String,
) -> Result<Option<T>, ValidationError> {
    match present(value) {
        None => Ok(None),
        Some(v) => v.parse().map(Some).map_err(|_| ValidationError::UnknownValue {
            field,
            value: v,
            expected: expected(),
        }),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(i64),
}

impl From<StringOrNumber> for String {
    fn from(raw: StringOrNumber) -> Self {
        match raw {
            StringOrNumber::Text(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// Accept `"3"` or `3` for identifier fields.
pub(crate) fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<StringOrNumber>::deserialize(d)?.map(String::from))
}

/// Required variant of [`string_or_number`].
pub(crate) fn required_string_or_number<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<String, D::Error> {
    StringOrNumber::deserialize(d).map(String::from)
}

/// The MCP tool handler. Holds the shared read-only catalog and exposes the
/// seven tools via the `#[tool_router]` macro.
#[derive(Clone)]
pub struct NaengmyeonTools {
    tool_router: ToolRouter<Self>,
    catalog: Arc<Catalog>,
}

#[tool_router]
impl NaengmyeonTools {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            catalog,
        }
    }

    #[tool(description = "평양냉면 맛집을 조건으로 검색합니다. 지역(region), 계보(lineage), 최대 가격(max_price), 경험 수준(experience_level), 미쉐린(michelin_only), 살얼음(has_slush_ice), 등급(tier), 자연어 검색어(query)를 조합할 수 있습니다. 평점 높은 순으로 반환합니다.")]
    async fn search_restaurants(
        &self,
        Parameters(params): Parameters<SearchRestaurantsParams>,
    ) -> Result<String, String> {
        tracing::info!(
            region = ?params.region,
            lineage = ?params.lineage,
            tier = ?params.tier,
            "search_restaurants called"
        );
        search_restaurants::run(&self.catalog, params).map_err(|e| e.to_string())
    }

    #[tool(description = "특정 맛집의 상세 정보(기본 정보, 계보와 역사, 육수/면 프로필, 매니아 평가, 인증, 사이드 메뉴, 방문 팁)를 ID 또는 이름으로 조회합니다.")]
    async fn get_restaurant(
        &self,
        Parameters(params): Parameters<GetRestaurantParams>,
    ) -> Result<String, String> {
        tracing::info!(id = ?params.id, name = ?params.name, "get_restaurant called");
        get_restaurant::run(&self.catalog, params).map_err(|e| e.to_string())
    }

    #[tool(description = "평양냉면 계보 정보를 조회합니다. wooraeok, uijeongbu, jangchungdong, eulmildae, okryugwan 중 하나 또는 'all'로 전체 요약을 받습니다.")]
    async fn get_lineage_info(
        &self,
        Parameters(params): Parameters<GetLineageInfoParams>,
    ) -> Result<String, String> {
        tracing::info!(lineage = %params.lineage, "get_lineage_info called");
        get_lineage_info::run(&self.catalog, params).map_err(|e| e.to_string())
    }

    #[tool(description = "경험 수준과 육수 취향, 지역, 웨이팅 회피 여부에 맞춰 맛집을 최대 3곳 추천합니다. 등급이 높은 곳을 먼저, 같은 등급에서는 평점 순입니다.")]
    async fn recommend(
        &self,
        Parameters(params): Parameters<RecommendParams>,
    ) -> Result<String, String> {
        tracing::info!(
            experience_level = %params.experience_level,
            broth_preference = ?params.broth_preference,
            "recommend called"
        );
        recommend::run(&self.catalog, params).map_err(|e| e.to_string())
    }

    #[tool(description = "두 맛집(ID 또는 이름)을 기본 정보, 육수, 면, 매니아 평가로 비교하고 입문자/매니아/가성비 관점의 추천을 제공합니다.")]
    async fn compare(
        &self,
        Parameters(params): Parameters<CompareParams>,
    ) -> Result<String, String> {
        tracing::info!(
            restaurant1 = %params.restaurant1,
            restaurant2 = %params.restaurant2,
            "compare called"
        );
        compare::run(&self.catalog, params).map_err(|e| e.to_string())
    }

    #[tool(description = "평양냉면 먹는 법 가이드를 주제별로 제공합니다. 주제: basic, condiments, ordering, etiquette, seasonal. 맛집 ID를 주면 해당 맛집 특화 팁을 덧붙입니다.")]
    async fn get_eating_guide(
        &self,
        Parameters(params): Parameters<GetEatingGuideParams>,
    ) -> Result<String, String> {
        tracing::info!(
            topic = ?params.topic,
            restaurant_id = ?params.restaurant_id,
            "get_eating_guide called"
        );
        get_eating_guide::run(&self.catalog, params).map_err(|e| e.to_string())
    }

    #[tool(description = "냉면과 어울리는 사이드 메뉴를 추천합니다. 맛집 ID를 주면 해당 맛집 메뉴를, 아니면 일반 가이드와 예산별 코스, 주류 페어링을 제공합니다.")]
    async fn get_side_pairings(
        &self,
        Parameters(params): Parameters<GetSidePairingsParams>,
    ) -> Result<String, String> {
        tracing::info!(
            restaurant_id = ?params.restaurant_id,
            budget = ?params.budget,
            include_alcohol = ?params.include_alcohol,
            "get_side_pairings called"
        );
        get_side_pairings::run(&self.catalog, params).map_err(|e| e.to_string())
    }
}

#[tool_handler]
impl ServerHandler for NaengmyeonTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "Pyongyang naengmyeon guide. Use search_restaurants or recommend to find \
                 restaurants, get_restaurant and compare for details, get_lineage_info, \
                 get_eating_guide and get_side_pairings for background."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
