#![allow(dead_code)]

use naengmyeon::catalog::records::{
    EatingGuide, LineageRecord, Restaurant, SideMenuCatalog,
};
use naengmyeon::catalog::Catalog;
use serde_json::{json, Value};
use std::path::Path;

/// A complete restaurant document with mid-range values. Tests override
/// individual fields through `Value` indexing before decoding.
pub fn restaurant_json(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "tier": 2,
        "region": "jongno_euljiro",
        "lineage": "independent",
        "address": format!("서울 중구 {id}번지"),
        "menu": { "naengmyeon_price": 14000 },
        "broth": {
            "base": "beef_only",
            "clarity_level": 3,
            "depth_level": 3,
            "saltiness_level": 3,
            "beef_aroma_level": 3,
            "description": "맑고 담백한 육수"
        },
        "noodle": {
            "style": "medium_balanced",
            "buckwheat_ratio": 70,
            "thickness": "medium"
        },
        "toppings": {},
        "expert_rating": {
            "broth_clarity": 3,
            "broth_depth": 3,
            "noodle_aroma": 3,
            "noodle_texture": 3,
            "temperature": 3,
            "overall_balance": 3,
            "authenticity_score": 70
        },
        "recommended_for": ["intermediate"]
    })
}

pub fn decode(value: Value) -> Restaurant {
    serde_json::from_value(value).unwrap()
}

/// 우래옥 as described in the reference example.
pub fn wooraeok() -> Value {
    let mut r = restaurant_json(1, "우래옥");
    r["tier"] = json!(1);
    r["lineage"] = json!("wooraeok");
    r["menu"]["naengmyeon_price"] = json!(15000);
    r["broth"]["beef_aroma_level"] = json!(5);
    r["broth"]["saltiness_level"] = json!(2);
    r["broth"]["characteristics"] = json!("진한 소고기 육향");
    r["expert_rating"]["authenticity_score"] = json!(95);
    r["expert_rating"]["overall_balance"] = json!(5);
    r["expert_rating"]["reviewer_note"] = json!("입문자에게 가장 먼저 권하는 집");
    r["rating_score"] = json!(4.8);
    r["recommended_for"] = json!(["beginner", "intermediate"]);
    r["certifications"] = json!([{ "type": "michelin_bib", "year": 2024 }]);
    r["special_notes"] = json!(["오픈 전 줄서기 권장"]);
    r["side_menus"] = json!([
        { "name": "불고기", "price": 42000, "is_signature": true, "pairing_note": "선육후면" }
    ]);
    r["average_wait_minutes"] = json!(40);
    r["history"] = json!({ "founded_year": 1946, "founder": "장원일" });
    r
}

/// 을밀대 as described in the reference example.
pub fn eulmildae() -> Value {
    let mut r = restaurant_json(2, "을밀대");
    r["tier"] = json!(1);
    r["region"] = json!("mapo_yeouido");
    r["lineage"] = json!("eulmildae");
    r["menu"]["naengmyeon_price"] = json!(12000);
    r["broth"]["beef_aroma_level"] = json!(3);
    r["broth"]["saltiness_level"] = json!(3);
    r["broth"]["has_slush_ice"] = json!(true);
    r["noodle"]["style"] = json!("thick_chewy");
    r["noodle"]["thickness"] = json!("thick");
    r["expert_rating"]["authenticity_score"] = json!(85);
    r["expert_rating"]["overall_balance"] = json!(4);
    r["rating_score"] = json!(4.5);
    r["recommended_for"] = json!(["beginner"]);
    r["average_wait_minutes"] = json!(15);
    r["tags"] = json!(["살얼음", "굵은 면"]);
    r
}

/// A salt-light dongchimi house in Gangnam with no rating score.
pub fn dongchimi_house() -> Value {
    let mut r = restaurant_json(3, "봉피양 강남");
    r["tier"] = json!(2);
    r["region"] = json!("gangnam_seocho");
    r["lineage"] = json!("jangchungdong");
    r["menu"]["naengmyeon_price"] = json!(16000);
    r["broth"]["base"] = json!("beef_dongchimi");
    r["broth"]["dongchimi"] = json!(true);
    r["broth"]["saltiness_level"] = json!(1);
    r["broth"]["beef_aroma_level"] = json!(2);
    r["broth"]["description"] = json!("동치미의 새콤함이 살짝 도는, 아주 슴슴하고 깨끗한 육수로 매니아들이 특히 좋아하는 스타일의 냉면집");
    r["expert_rating"]["authenticity_score"] = json!(90);
    r["recommended_for"] = json!(["expert", "beginner"]);
    r["certifications"] = json!([{ "type": "미쉐린 Plate", "year": 2023 }]);
    r
}

pub fn sample_restaurants() -> Vec<Restaurant> {
    vec![decode(wooraeok()), decode(eulmildae()), decode(dongchimi_house())]
}

pub fn sample_lineages() -> Vec<LineageRecord> {
    serde_json::from_value(json!([
        {
            "name": "우래옥 계열",
            "origin_history": "1946년 서울 주교동에서 시작",
            "philosophy_of_taste": "소고기 육향을 전면에 세운다. ".repeat(10),
            "distinctive_features": "진한 육향",
            "representative_restaurants": ["우래옥", "봉피양", "벽제갈비", "평양면옥"],
            "suitability": "처음 평양냉면을 먹는 사람",
            "internal_branches": [
                { "year": 1946, "event": "창업" },
                { "year": "1950년대", "event": "피란 후 재개업" }
            ]
        },
        {
            "name": "의정부파",
            "origin_history": "의정부 평양면옥에서 갈라진 계보",
            "philosophy_of_taste": "간간한 육수와 고춧가루",
            "distinctive_features": "고춧가루 고명",
            "representative_restaurants": ["의정부 평양면옥", "필동면옥"],
            "suitability": "간이 있는 맛을 좋아하는 사람"
        },
        {
            "name": "Eulmildae Style",
            "origin_history": "마포 을밀대",
            "philosophy_of_taste": "살얼음과 굵은 면",
            "distinctive_features": "살얼음",
            "representative_restaurants": ["을밀대"],
            "suitability": "여름"
        }
    ]))
    .unwrap()
}

pub fn sample_guides() -> Vec<EatingGuide> {
    serde_json::from_value(json!([
        {
            "topic": "basic",
            "title": "평양냉면 기본 먹는 법",
            "description": "처음이라면 이 순서로",
            "steps": ["면수를 마신다", "육수를 맛본다", "면을 먹는다"],
            "tips": ["식초는 나중에"],
            "common_mistakes": ["면을 가위로 자르기"],
            "expert_opinions": ["육수부터 맛보라"]
        },
        {
            "topic": "condiments",
            "title": "식초와 겨자",
            "steps": ["먼저 그대로 맛본다"],
            "tips": ["겨자는 면에"],
            "common_mistakes": ["처음부터 식초 넣기"]
        }
    ]))
    .unwrap()
}

pub fn sample_side_menus() -> SideMenuCatalog {
    serde_json::from_value(json!({
        "side_dishes": [
            {
                "name": "녹두전",
                "description": "바삭하게 부친 녹두전",
                "price_range": "10,000~15,000원",
                "portion_size": "2인",
                "pairing_notes": ["막걸리", "물냉면"],
                "best_restaurants": ["을밀대"],
                "recommended_situations": "여럿이 갈 때"
            }
        ],
        "course_examples": [
            {
                "name": "가벼운 코스",
                "budget": "20,000~30,000원",
                "dishes": ["물냉면", "만두"],
                "serving_order": "만두 → 냉면",
                "tips": "만두는 반 접시"
            },
            {
                "name": "선육후면 코스",
                "budget": "50,000~70,000원",
                "dishes": ["불고기", "물냉면"],
                "serving_order": ["불고기", "물냉면"],
                "tips": ["고기를 먼저"]
            },
            {
                "name": "시가 코스",
                "budget": "시가",
                "dishes": ["어복쟁반"],
                "serving_order": "어복쟁반 → 냉면",
                "tips": "예약 필수"
            }
        ]
    }))
    .unwrap()
}

/// Catalog with every collection populated.
pub fn sample_catalog() -> Catalog {
    Catalog::new(
        sample_restaurants(),
        sample_lineages(),
        sample_guides(),
        sample_side_menus(),
    )
    .unwrap()
}

/// Catalog with only restaurants; the other collections are empty.
pub fn restaurants_only(restaurants: Vec<Restaurant>) -> Catalog {
    Catalog::new(restaurants, Vec::new(), Vec::new(), SideMenuCatalog::default()).unwrap()
}

/// Write `value` as pretty JSON to `dir/file`.
pub fn write_json(dir: &Path, file: &str, value: &Value) {
    std::fs::write(dir.join(file), serde_json::to_string_pretty(value).unwrap()).unwrap();
}
