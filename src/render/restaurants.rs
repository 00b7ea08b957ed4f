use crate::catalog::records::Restaurant;
use crate::engine::recommend::Preferences;
use crate::engine::search::SearchFilters;

use super::{glyph_bar, or_unknown, restaurant_not_found, truncate, won, DESCRIPTION_BUDGET};

pub const NO_SEARCH_RESULTS: &str = "조건에 맞는 맛집을 찾지 못했습니다.";
pub const NO_RECOMMENDATIONS: &str = "조건에 맞는 추천 맛집을 찾지 못했습니다.";

fn tier_star(r: &Restaurant) -> &'static str {
    if r.tier == 1 {
        " ⭐"
    } else {
        ""
    }
}

/// One-line summary of the filters that were applied, if any.
fn describe_filters(filters: &SearchFilters) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(region) = filters.region {
        parts.push(format!("지역={region}"));
    }
    if let Some(lineage) = filters.lineage {
        parts.push(format!("계보={lineage}"));
    }
    if let Some(max) = filters.max_price {
        parts.push(format!("최대 가격={}", won(u64::from(max))));
    }
    if let Some(level) = filters.experience_level {
        parts.push(format!("경험={level}"));
    }
    if filters.michelin_only {
        parts.push("미쉐린만".to_string());
    }
    if let Some(slush) = filters.has_slush_ice {
        parts.push(format!("살얼음={}", if slush { "있음" } else { "없음" }));
    }
    if let Some(tier) = filters.tier {
        parts.push(format!("Tier {tier}"));
    }
    if let Some(query) = filters.query.as_deref() {
        parts.push(format!("검색어='{query}'"));
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// Search result listing, or the empty-result sentence.
pub fn search_results(results: &[&Restaurant], filters: &SearchFilters) -> String {
    if results.is_empty() {
        return NO_SEARCH_RESULTS.to_string();
    }

    let mut out = format!("## 검색 결과 ({}곳)\n\n", results.len());
    if let Some(applied) = describe_filters(filters) {
        out.push_str(&format!("_필터: {applied}_\n\n"));
    }

    for r in results {
        out.push_str(&format!("### {}{}\n", r.name, tier_star(r)));
        out.push_str(&format!("- 위치: {}\n", r.address));
        out.push_str(&format!("- 계보: {}\n", r.lineage));
        out.push_str(&format!("- 가격: {}\n", won(u64::from(r.naengmyeon_price()))));
        if let Some(score) = r.rating_score {
            out.push_str(&format!("- 평점: {score}\n"));
        }
        if !r.broth.description.is_empty() {
            out.push_str(&format!(
                "- 특징: {}\n",
                truncate(&r.broth.description, DESCRIPTION_BUDGET)
            ));
        }
        out.push('\n');
    }
    out
}

/// Full detail page for one restaurant, or the not-found sentence for `query`.
pub fn restaurant_detail(restaurant: Option<&Restaurant>, query: &str) -> String {
    let Some(r) = restaurant else {
        return restaurant_not_found(query);
    };

    let badge = if r.tier == 1 {
        format!("⭐ Tier {}", r.tier)
    } else {
        format!("Tier {}", r.tier)
    };
    let mut out = format!("# {} ({badge})\n\n", r.name);

    out.push_str("## 기본 정보\n");
    out.push_str(&format!("- 주소: {}\n", r.address));
    if let Some(detail) = r.address_detail.as_deref() {
        out.push_str(&format!("- 상세주소: {detail}\n"));
    }
    out.push_str(&format!("- 전화: {}\n", or_unknown(r.phone.as_deref())));
    out.push_str(&format!("- 영업시간: {}\n", or_unknown(r.hours_string.as_deref())));
    let closed = r
        .closed_days_string
        .clone()
        .unwrap_or_else(|| r.closed_days.join(", "));
    out.push_str(&format!("- 휴무: {}\n", or_unknown(Some(closed.as_str()))));
    out.push_str(&format!("- 물냉면 가격: {}\n", won(u64::from(r.naengmyeon_price()))));
    if let Some(access) = r.accessibility.as_deref() {
        out.push_str(&format!("- 접근성: {access}\n"));
    }
    if let Some(parking) = r.parking.as_deref() {
        out.push_str(&format!("- 주차: {parking}\n"));
    }
    if let Some(wait) = r.average_wait_minutes {
        out.push_str(&format!("- 평균 대기: {wait}분\n"));
    }
    if let Some(score) = r.rating_score {
        out.push_str(&format!("- 평점: {score}\n"));
    }
    out.push('\n');

    out.push_str("## 계보와 역사\n");
    out.push_str(&format!("- 계보: {}\n", r.lineage));
    if let Some(year) = r.founded_year() {
        out.push_str(&format!("- 창업: {year}년\n"));
    }
    if let Some(founder) = r.founder() {
        out.push_str(&format!("- 창업자: {founder}\n"));
    }
    if let Some(generation) = r.generation {
        out.push_str(&format!("- 현재: {generation}대째 운영\n"));
    }
    if let Some(origin) = r.origin_story.as_deref() {
        out.push_str(&format!("- 유래: {origin}\n"));
    }
    if let Some(story) = r.history.as_ref().and_then(|h| h.story.as_deref()) {
        out.push_str(&format!("- 역사: {story}\n"));
    }
    out.push('\n');

    out.push_str("## 맛 프로필\n### 육수\n");
    if !r.broth.description.is_empty() {
        out.push_str(&format!("{}\n", r.broth.description));
    }
    out.push_str(&format!("- 베이스: {}\n", r.broth.base));
    out.push_str(&format!("- 맑기: {}\n", glyph_bar(r.broth.clarity_level)));
    out.push_str(&format!("- 깊이: {}\n", glyph_bar(r.broth.depth_level)));
    out.push_str(&format!("- 육향: {}\n", glyph_bar(r.broth.beef_aroma_level)));
    out.push_str(&format!(
        "- 간: {} ({})\n",
        glyph_bar(r.broth.saltiness_level),
        r.broth.saltiness.as_deref().unwrap_or("보통")
    ));
    out.push_str(&format!(
        "- 살얼음: {}\n",
        if r.broth.has_slush_ice { "있음" } else { "없음" }
    ));
    if r.broth.dongchimi {
        out.push_str("- 동치미: 사용\n");
    }
    out.push('\n');

    out.push_str("### 면\n");
    if !r.noodle.description.is_empty() {
        out.push_str(&format!("{}\n", r.noodle.description));
    }
    out.push_str(&format!("- 스타일: {}\n", r.noodle.style));
    out.push_str(&format!("- 메밀 함량: {}%\n", r.noodle.buckwheat_ratio));
    out.push_str(&format!("- 굵기: {}\n", r.noodle.thickness));
    if !r.noodle.texture_keywords.is_empty() {
        out.push_str(&format!("- 식감: {}\n", r.noodle.texture_keywords.join(", ")));
    }
    if r.noodle.homemade {
        out.push_str("- 자가제면: 예\n");
    }
    out.push('\n');

    let rating = &r.expert_rating;
    out.push_str("## 매니아 평가\n");
    out.push_str(&format!("- 육수 맑기: {}\n", glyph_bar(rating.broth_clarity)));
    out.push_str(&format!("- 육수 깊이: {}\n", glyph_bar(rating.broth_depth)));
    out.push_str(&format!("- 메밀향: {}\n", glyph_bar(rating.noodle_aroma)));
    out.push_str(&format!("- 면 식감: {}\n", glyph_bar(rating.noodle_texture)));
    out.push_str(&format!("- 온도: {}\n", glyph_bar(rating.temperature)));
    out.push_str(&format!("- 전체 밸런스: {}\n", glyph_bar(rating.overall_balance)));
    out.push_str(&format!("정통성 점수: {}/100\n", rating.authenticity_score));
    if !rating.reviewer_note.is_empty() {
        out.push_str(&format!("> {}\n", rating.reviewer_note));
    }
    out.push('\n');

    if !r.certifications.is_empty() {
        out.push_str("## 인증/수상\n");
        for cert in &r.certifications {
            out.push_str(&format!(
                "- {}년 {}: {}\n",
                cert.year,
                cert.kind,
                cert.detail.as_deref().unwrap_or("")
            ));
        }
        out.push('\n');
    }

    if !r.side_menus.is_empty() {
        out.push_str("## 사이드 메뉴\n");
        for menu in &r.side_menus {
            let sig = if menu.is_signature { " ⭐" } else { "" };
            out.push_str(&format!(
                "- {}{sig}: {}\n",
                menu.name,
                won(u64::from(menu.price))
            ));
            if let Some(note) = menu.pairing_note.as_deref() {
                out.push_str(&format!("  └ {note}\n"));
            }
        }
        out.push('\n');
    }

    if !r.features.is_empty() {
        out.push_str("## 특징\n");
        for feature in &r.features {
            out.push_str(&format!("- {feature}\n"));
        }
        out.push('\n');
    }

    if !r.special_notes.is_empty() {
        out.push_str("## 방문 팁\n");
        for note in &r.special_notes {
            out.push_str(&format!("- {note}\n"));
        }
    }

    out
}

/// Ranked recommendation list headed by the requested experience level.
pub fn recommendations(results: &[&Restaurant], prefs: &Preferences) -> String {
    if results.is_empty() {
        return NO_RECOMMENDATIONS.to_string();
    }

    let mut out = format!("## {} 맞춤 추천\n\n", prefs.experience_level);
    if let Some(situation) = prefs.situation {
        out.push_str(&format!("_상황: {}_\n\n", situation.label()));
    }

    for r in results {
        out.push_str(&format!("### {}{}\n", r.name, tier_star(r)));
        out.push_str(&format!("- 계보: {}\n", r.lineage));
        out.push_str(&format!("- 가격: {}\n", won(u64::from(r.naengmyeon_price()))));
        if let Some(wait) = r.average_wait_minutes {
            out.push_str(&format!("- 평균 대기: {wait}분\n"));
        }
        if !r.expert_rating.reviewer_note.is_empty() {
            out.push_str(&format!("> {}\n", r.expert_rating.reviewer_note));
        }
        out.push('\n');
    }
    out
}
