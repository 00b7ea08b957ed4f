use crate::catalog::records::Restaurant;
use crate::engine::pairings::{CatalogPairings, PairingPlan};

use super::won;

pub const SIDE_MENUS_NOT_LOADED: &str = "사이드 메뉴 데이터가 로드되지 않았습니다.";

const ALCOHOL_NOTES: [&str; 3] = [
    "막걸리: 녹두전과 함께 전통 조합",
    "소주: 편육, 제육과 함께 선주후면 스타일",
    "문배주: 고급 접대 자리에서 어복쟁반과 함께",
];

pub fn side_pairings(plan: &PairingPlan<'_>) -> String {
    match plan {
        PairingPlan::NotLoaded => SIDE_MENUS_NOT_LOADED.to_string(),
        PairingPlan::Restaurant(r) => restaurant_menu(r),
        PairingPlan::Catalog(pairings) => catalog_guide(pairings),
    }
}

fn restaurant_menu(r: &Restaurant) -> String {
    let mut out = format!("# {} 사이드 메뉴\n\n", r.name);
    for menu in &r.side_menus {
        let sig = if menu.is_signature { " ⭐ 시그니처" } else { "" };
        out.push_str(&format!("### {}{sig}\n", menu.name));
        out.push_str(&format!("- 가격: {}\n", won(u64::from(menu.price))));
        if let Some(note) = menu.pairing_note.as_deref() {
            out.push_str(&format!("- 페어링 팁: {note}\n"));
        }
        out.push('\n');
    }
    out
}

fn catalog_guide(p: &CatalogPairings<'_>) -> String {
    let mut out = String::from("# 평양냉면 사이드 메뉴 가이드\n\n");

    for dish in p.dishes {
        out.push_str(&format!("## {}\n", dish.name));
        out.push_str(&format!("{}\n\n", dish.description));
        out.push_str(&format!("- 가격대: {}\n", dish.price_range));
        out.push_str(&format!("- 양: {}\n", dish.portion_size));
        out.push_str(&format!("- 페어링: {}\n", dish.pairing_notes));
        if !dish.best_restaurants.is_empty() {
            out.push_str(&format!("- 추천 맛집: {}\n", dish.best_restaurants.join(", ")));
        }
        out.push_str(&format!("- 추천 상황: {}\n\n", dish.recommended_situations));
    }

    if let Some((budget, courses)) = &p.courses {
        out.push_str(&format!("\n## 예산 {} 추천 코스\n", won(*budget)));
        if courses.is_empty() {
            out.push_str("\n예산에 맞는 코스가 없습니다.\n");
        }
        for course in courses {
            out.push_str(&format!("\n### {}\n", course.name));
            out.push_str(&format!("- 예산: {}\n", course.budget));
            out.push_str(&format!("- 구성: {}\n", course.dishes.join(", ")));
            out.push_str(&format!("- 순서: {}\n", course.serving_order));
            out.push_str(&format!("- 팁: {}\n", course.tips));
        }
    }

    if p.include_alcohol {
        out.push_str("\n## 술과 함께하는 페어링\n");
        for note in ALCOHOL_NOTES {
            out.push_str(&format!("- {note}\n"));
        }
    }
    out
}
