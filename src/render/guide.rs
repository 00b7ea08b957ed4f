use crate::catalog::records::{EatingGuide, Restaurant};
use crate::engine::lookup::{GuideLookup, GuideMatch};

pub const GUIDES_NOT_LOADED: &str = "먹는 법 가이드 데이터가 로드되지 않았습니다.";

/// Guide document for the requested topic, followed by the restaurant
/// addendum whenever a restaurant was resolved.
pub fn eating_guide(lookup: &GuideLookup<'_>) -> String {
    let mut out = match &lookup.guide {
        GuideMatch::NotLoaded => GUIDES_NOT_LOADED.to_string(),
        GuideMatch::Found(guide) => document(guide),
        GuideMatch::NotFound { available } => format!(
            "'{}' 주제를 찾을 수 없습니다.\n\n사용 가능한 주제: {}",
            lookup.topic,
            available.join(", ")
        ),
    };

    if let Some(r) = lookup.restaurant {
        out.push_str(&addendum(r));
    }
    out
}

fn document(guide: &EatingGuide) -> String {
    let mut out = format!("# {}\n\n", guide.title);
    if let Some(description) = guide.description.as_deref() {
        out.push_str(&format!("{description}\n\n"));
    }

    out.push_str("## 단계별 가이드\n");
    for (i, step) in guide.steps.iter().enumerate() {
        out.push_str(&format!("{}. {step}\n", i + 1));
    }
    out.push('\n');

    out.push_str("## 팁\n");
    for tip in &guide.tips {
        out.push_str(&format!("- {tip}\n"));
    }
    out.push('\n');

    out.push_str("## 흔한 실수\n");
    for mistake in &guide.common_mistakes {
        out.push_str(&format!("- ❌ {mistake}\n"));
    }

    if !guide.expert_opinions.is_empty() {
        out.push_str("\n## 전문가 의견\n");
        for opinion in &guide.expert_opinions {
            out.push_str(&format!("> {opinion}\n\n"));
        }
    }

    if !guide.restaurant_notes.is_empty() {
        out.push_str("\n## 맛집별 참고사항\n");
        for note in &guide.restaurant_notes {
            out.push_str(&format!("- {note}\n"));
        }
    }
    out
}

fn addendum(r: &Restaurant) -> String {
    let mut out = format!("\n\n## {} 특화 팁\n", r.name);
    for note in &r.special_notes {
        out.push_str(&format!("- {note}\n"));
    }
    if let Some(characteristics) = r.broth.characteristics.as_deref() {
        out.push_str(&format!("- 육수 특징: {characteristics}\n"));
    }
    out
}
