mod helpers;

use helpers::{restaurants_only, sample_catalog, sample_restaurants};
use naengmyeon::engine::pairings::{side_pairings, PairingPlan};
use naengmyeon::render;

fn course_names(plan: &PairingPlan<'_>) -> Vec<String> {
    match plan {
        PairingPlan::Catalog(p) => p
            .courses
            .as_ref()
            .map(|(_, courses)| courses.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default(),
        other => panic!("expected catalog pairings, got {other:?}"),
    }
}

#[test]
fn restaurant_with_side_menu_short_circuits() {
    let catalog = sample_catalog();
    let plan = side_pairings(&catalog, Some("1"), Some(30_000), true);
    assert!(matches!(plan, PairingPlan::Restaurant(r) if r.id == 1));

    let text = render::pairings::side_pairings(&plan);
    assert!(text.starts_with("# 우래옥 사이드 메뉴"));
    assert!(text.contains("### 불고기 ⭐ 시그니처"));
    assert!(text.contains("- 가격: 42,000원"));
    assert!(text.contains("- 페어링 팁: 선육후면"));
    assert!(!text.contains("추천 코스"));
    assert!(!text.contains("술과 함께하는 페어링"));
}

#[test]
fn restaurant_without_side_menu_falls_back_to_catalog() {
    let catalog = sample_catalog();
    let plan = side_pairings(&catalog, Some("을밀대"), None, false);
    assert!(matches!(plan, PairingPlan::Catalog(_)));

    let text = render::pairings::side_pairings(&plan);
    assert!(text.starts_with("# 평양냉면 사이드 메뉴 가이드"));
    assert!(text.contains("## 녹두전"));
    assert!(text.contains("- 페어링: 막걸리, 물냉면"));
    assert!(!text.contains("추천 코스"));
}

#[test]
fn budget_keeps_courses_whose_ceiling_fits() {
    let catalog = sample_catalog();
    let plan = side_pairings(&catalog, None, Some(30_000), false);
    assert_eq!(course_names(&plan), vec!["가벼운 코스"]);

    let text = render::pairings::side_pairings(&plan);
    assert!(text.contains("## 예산 30,000원 추천 코스"));
    assert!(text.contains("### 가벼운 코스"));
    assert!(!text.contains("### 선육후면 코스"));
}

#[test]
fn course_without_digits_uses_default_ceiling() {
    let catalog = sample_catalog();
    let plan = side_pairings(&catalog, None, Some(100_000), false);
    assert_eq!(
        course_names(&plan),
        vec!["가벼운 코스", "선육후면 코스", "시가 코스"]
    );

    let plan = side_pairings(&catalog, None, Some(99_999), false);
    assert_eq!(course_names(&plan), vec!["가벼운 코스", "선육후면 코스"]);
}

#[test]
fn list_or_text_course_fields_render_the_same_way() {
    let catalog = sample_catalog();
    let text = render::pairings::side_pairings(&side_pairings(&catalog, None, Some(70_000), false));
    assert!(text.contains("- 순서: 만두 → 냉면"));
    assert!(text.contains("- 순서: 불고기, 물냉면"));
    assert!(text.contains("- 팁: 고기를 먼저"));
}

#[test]
fn small_budget_says_nothing_fits() {
    let catalog = sample_catalog();
    let plan = side_pairings(&catalog, None, Some(10_000), false);
    assert!(course_names(&plan).is_empty());
    let text = render::pairings::side_pairings(&plan);
    assert!(text.contains("예산에 맞는 코스가 없습니다."));
}

#[test]
fn alcohol_section_is_opt_in() {
    let catalog = sample_catalog();
    let with = render::pairings::side_pairings(&side_pairings(&catalog, None, None, true));
    let without = render::pairings::side_pairings(&side_pairings(&catalog, None, None, false));
    assert!(with.contains("## 술과 함께하는 페어링"));
    assert!(with.contains("막걸리: 녹두전과 함께 전통 조합"));
    assert!(!without.contains("술과 함께하는 페어링"));
}

#[test]
fn missing_side_menu_data_is_not_loaded() {
    let catalog = restaurants_only(sample_restaurants());
    let plan = side_pairings(&catalog, Some("을밀대"), Some(50_000), true);
    assert!(matches!(plan, PairingPlan::NotLoaded));
    assert_eq!(
        render::pairings::side_pairings(&plan),
        render::pairings::SIDE_MENUS_NOT_LOADED
    );

    // The restaurant shortcut still works without the side-menu document.
    let plan = side_pairings(&catalog, Some("우래옥"), None, false);
    assert!(matches!(plan, PairingPlan::Restaurant(_)));
}

#[test]
fn zero_budget_is_a_real_ceiling() {
    let catalog = sample_catalog();
    let plan = side_pairings(&catalog, None, Some(0), false);
    assert!(course_names(&plan).is_empty());
    let text = render::pairings::side_pairings(&plan);
    assert!(text.contains("## 예산 0원 추천 코스"));
    assert!(text.contains("예산에 맞는 코스가 없습니다."));
}
