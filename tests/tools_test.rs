mod helpers;

use helpers::sample_catalog;
use naengmyeon::tools::compare::CompareParams;
use naengmyeon::tools::get_eating_guide::GetEatingGuideParams;
use naengmyeon::tools::get_lineage_info::GetLineageInfoParams;
use naengmyeon::tools::get_restaurant::GetRestaurantParams;
use naengmyeon::tools::get_side_pairings::GetSidePairingsParams;
use naengmyeon::tools::recommend::RecommendParams;
use naengmyeon::tools::search_restaurants::SearchRestaurantsParams;
use naengmyeon::tools::{self, NaengmyeonTools, ValidationError};
use rmcp::ServerHandler;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;

fn params<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).unwrap()
}

#[test]
fn search_rejects_unknown_region() {
    let catalog = sample_catalog();
    let err = tools::search_restaurants::run(&catalog, params(json!({ "region": "busan" })))
        .unwrap_err();
    assert!(matches!(
        &err,
        ValidationError::UnknownValue { field: "region", value, .. } if value == "busan"
    ));
    assert!(err.to_string().starts_with("invalid region 'busan': expected one of jongno_euljiro"));
}

#[test]
fn search_rejects_tier_out_of_range() {
    let catalog = sample_catalog();
    let err = tools::search_restaurants::run(&catalog, params(json!({ "tier": 4 }))).unwrap_err();
    assert_eq!(err.to_string(), "tier must be in 1..=3, got 4");
}

#[test]
fn search_runs_with_valid_filters() {
    let catalog = sample_catalog();
    let text = tools::search_restaurants::run(
        &catalog,
        params(json!({ "lineage": "eulmildae", "experience_level": "beginner" })),
    )
    .unwrap();
    assert!(text.starts_with("## 검색 결과 (1곳)"));
    assert!(text.contains("### 을밀대"));

    let none = tools::search_restaurants::run(&catalog, params(json!({ "max_price": 1000 })))
        .unwrap();
    assert_eq!(none, "조건에 맞는 맛집을 찾지 못했습니다.");
}

#[test]
fn blank_category_counts_as_absent() {
    let validated = params::<SearchRestaurantsParams>(json!({ "region": "  ", "query": "" }))
        .validate()
        .unwrap();
    assert_eq!(validated.region, None);
    assert_eq!(validated.query, None);
    assert!(!validated.michelin_only);
}

#[test]
fn restaurant_id_accepts_number_or_string() {
    let catalog = sample_catalog();
    let numeric: GetRestaurantParams = params(json!({ "id": 2 }));
    let text: GetRestaurantParams = params(json!({ "id": "2" }));
    assert_eq!(numeric.id.as_deref(), Some("2"));

    let a = tools::get_restaurant::run(&catalog, numeric).unwrap();
    let b = tools::get_restaurant::run(&catalog, text).unwrap();
    assert_eq!(a, b);
    assert!(a.starts_with("# 을밀대 (⭐ Tier 1)"));
}

#[test]
fn restaurant_requires_id_or_name() {
    let catalog = sample_catalog();
    let err = tools::get_restaurant::run(&catalog, GetRestaurantParams::default()).unwrap_err();
    assert_eq!(err, ValidationError::Missing { field: "id or name" });
    assert_eq!(err.to_string(), "id or name is required");
}

#[test]
fn unknown_restaurant_is_a_message_not_an_error() {
    let catalog = sample_catalog();
    let text = tools::get_restaurant::run(&catalog, params(json!({ "id": 999999 }))).unwrap();
    assert_eq!(text, "'999999' 맛집을 찾을 수 없습니다.");
}

#[test]
fn blank_id_falls_through_to_name() {
    let catalog = sample_catalog();
    let text =
        tools::get_restaurant::run(&catalog, params(json!({ "id": " ", "name": "봉피양" })))
            .unwrap();
    assert!(text.starts_with("# 봉피양 강남 (Tier 2)"));
}

#[test]
fn recommend_validates_level_and_preference() {
    let catalog = sample_catalog();

    let err = tools::recommend::run(&catalog, params(json!({ "experience_level": "master" })))
        .unwrap_err();
    assert!(matches!(err, ValidationError::UnknownValue { field: "experience_level", .. }));

    let err = tools::recommend::run(&catalog, params(json!({ "experience_level": " " })))
        .unwrap_err();
    assert_eq!(err, ValidationError::Missing { field: "experience_level" });

    let err = tools::recommend::run(
        &catalog,
        params(json!({ "experience_level": "beginner", "broth_preference": "spicy" })),
    )
    .unwrap_err();
    assert!(matches!(err, ValidationError::UnknownValue { field: "broth_preference", .. }));
}

#[test]
fn recommend_defaults_optional_inputs() {
    let prefs = params::<RecommendParams>(json!({ "experience_level": "expert" }))
        .validate()
        .unwrap();
    assert_eq!(
        prefs.broth_preference,
        naengmyeon::catalog::types::BrothPreference::NoPreference
    );
    assert!(!prefs.avoid_long_wait);
    assert_eq!(prefs.region, None);
    assert_eq!(prefs.situation, None);
}

#[test]
fn recommend_runs() {
    let catalog = sample_catalog();
    let text = tools::recommend::run(
        &catalog,
        params(json!({
            "experience_level": "beginner",
            "avoid_long_wait": true,
            "situation": "solo"
        })),
    )
    .unwrap();
    assert!(text.contains("_상황: 혼밥_"));
    assert!(text.contains("### 을밀대"));
    assert!(!text.contains("### 우래옥"));
}

#[test]
fn compare_accepts_mixed_references_and_focus() {
    let catalog = sample_catalog();
    let input: CompareParams = params(json!({
        "restaurant1": 1,
        "restaurant2": "을밀대",
        "focus_on": "noodle"
    }));
    let text = tools::compare::run(&catalog, input).unwrap();
    assert!(text.starts_with("# 우래옥 vs 을밀대 비교"));
    assert!(text.contains("## 면 비교"));
    assert!(!text.contains("## 육수 비교"));
}

#[test]
fn compare_rejects_unknown_focus() {
    let catalog = sample_catalog();
    let input: CompareParams = params(json!({
        "restaurant1": "1",
        "restaurant2": "2",
        "focus_on": "price"
    }));
    let err = tools::compare::run(&catalog, input).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid focus_on 'price': expected one of broth, noodle, overall, value"
    );
}

#[test]
fn compare_requires_both_references() {
    let catalog = sample_catalog();
    let input: CompareParams = params(json!({ "restaurant1": " ", "restaurant2": "2" }));
    let err = tools::compare::run(&catalog, input).unwrap_err();
    assert_eq!(err, ValidationError::Missing { field: "restaurant1" });

    assert!(serde_json::from_value::<CompareParams>(json!({ "restaurant1": "1" })).is_err());
}

#[test]
fn lineage_requires_a_key() {
    let catalog = sample_catalog();
    let err = tools::get_lineage_info::run(
        &catalog,
        GetLineageInfoParams {
            lineage: String::new(),
        },
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::Missing { field: "lineage" });

    let text = tools::get_lineage_info::run(
        &catalog,
        GetLineageInfoParams {
            lineage: " uijeongbu ".into(),
        },
    )
    .unwrap();
    assert!(text.starts_with("# 의정부파"));
}

#[test]
fn guide_takes_numeric_restaurant_id() {
    let catalog = sample_catalog();
    let input: GetEatingGuideParams = params(json!({ "restaurant_id": 1, "topic": "condiments" }));
    let text = tools::get_eating_guide::run(&catalog, input).unwrap();
    assert!(text.starts_with("# 식초와 겨자"));
    assert!(text.contains("## 우래옥 특화 팁"));
}

#[test]
fn side_pairings_defaults_alcohol_off() {
    let catalog = sample_catalog();
    let input: GetSidePairingsParams = params(json!({ "budget": 30000 }));
    let text = tools::get_side_pairings::run(&catalog, input).unwrap();
    assert!(text.contains("### 가벼운 코스"));
    assert!(!text.contains("술과 함께하는 페어링"));
}

#[test]
fn server_info_advertises_tools() {
    let handler = NaengmyeonTools::new(Arc::new(sample_catalog()));
    let info = handler.get_info();
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.is_some());
}
