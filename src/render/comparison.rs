use crate::catalog::records::Restaurant;
use crate::engine::compare::{ComparisonOutcome, Side};

use super::{glyph_bar, restaurant_not_found, won};

/// Which tables a comparison renders. The basic table and the picks are
/// always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonFocus {
    Broth,
    Noodle,
    Value,
    #[default]
    Overall,
}

impl ComparisonFocus {
    pub const ALL: [ComparisonFocus; 4] = [Self::Broth, Self::Noodle, Self::Overall, Self::Value];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Broth => "broth",
            Self::Noodle => "noodle",
            Self::Value => "value",
            Self::Overall => "overall",
        }
    }

    fn shows_broth(self) -> bool {
        matches!(self, Self::Broth | Self::Overall)
    }

    fn shows_noodle(self) -> bool {
        matches!(self, Self::Noodle | Self::Overall)
    }

    fn shows_rating(self) -> bool {
        self == Self::Overall
    }
}

impl std::str::FromStr for ComparisonFocus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "broth" => Ok(Self::Broth),
            "noodle" => Ok(Self::Noodle),
            "value" => Ok(Self::Value),
            "overall" => Ok(Self::Overall),
            _ => Err(format!("unknown focus: {s}")),
        }
    }
}

fn table_header(out: &mut String, title: &str, a: &Restaurant, b: &Restaurant) {
    out.push_str(&format!("## {title}\n"));
    out.push_str(&format!("| 항목 | {} | {} |\n", a.name, b.name));
    out.push_str("|------|--------|--------|\n");
}

fn row(out: &mut String, label: &str, left: impl std::fmt::Display, right: impl std::fmt::Display) {
    out.push_str(&format!("| {label} | {left} | {right} |\n"));
}

fn founded(r: &Restaurant) -> String {
    r.founded_year()
        .map_or_else(|| "정보없음".to_string(), |y| format!("{y}년"))
}

fn rating(r: &Restaurant) -> String {
    r.rating_score.map_or_else(|| "-".to_string(), |s| s.to_string())
}

fn slush(r: &Restaurant) -> &'static str {
    if r.broth.has_slush_ice {
        "O"
    } else {
        "X"
    }
}

/// Side-by-side comparison document. `first_query` / `second_query` are the
/// references as the caller typed them, used in the not-found sentence.
pub fn comparison(
    outcome: &ComparisonOutcome<'_>,
    first_query: &str,
    second_query: &str,
    focus: ComparisonFocus,
) -> String {
    let cmp = match outcome {
        ComparisonOutcome::Compared(cmp) => cmp,
        ComparisonOutcome::Missing(Side::First) => return restaurant_not_found(first_query),
        ComparisonOutcome::Missing(Side::Second) => return restaurant_not_found(second_query),
    };
    let (a, b) = (cmp.first, cmp.second);

    let mut out = format!("# {} vs {} 비교\n\n", a.name, b.name);

    table_header(&mut out, "기본 정보", a, b);
    row(&mut out, "등급", format!("Tier {}", a.tier), format!("Tier {}", b.tier));
    row(&mut out, "계보", a.lineage, b.lineage);
    row(
        &mut out,
        "가격",
        won(u64::from(a.naengmyeon_price())),
        won(u64::from(b.naengmyeon_price())),
    );
    row(&mut out, "창업", founded(a), founded(b));
    row(&mut out, "평점", rating(a), rating(b));
    out.push('\n');

    if focus.shows_broth() {
        table_header(&mut out, "육수 비교", a, b);
        row(&mut out, "베이스", a.broth.base, b.broth.base);
        row(
            &mut out,
            "맑기",
            glyph_bar(a.broth.clarity_level),
            glyph_bar(b.broth.clarity_level),
        );
        row(
            &mut out,
            "깊이",
            glyph_bar(a.broth.depth_level),
            glyph_bar(b.broth.depth_level),
        );
        row(
            &mut out,
            "육향",
            glyph_bar(a.broth.beef_aroma_level),
            glyph_bar(b.broth.beef_aroma_level),
        );
        row(
            &mut out,
            "간",
            glyph_bar(a.broth.saltiness_level),
            glyph_bar(b.broth.saltiness_level),
        );
        row(&mut out, "살얼음", slush(a), slush(b));
        out.push('\n');
    }

    if focus.shows_noodle() {
        table_header(&mut out, "면 비교", a, b);
        row(&mut out, "스타일", a.noodle.style, b.noodle.style);
        row(
            &mut out,
            "메밀 함량",
            format!("{}%", a.noodle.buckwheat_ratio),
            format!("{}%", b.noodle.buckwheat_ratio),
        );
        row(&mut out, "굵기", a.noodle.thickness, b.noodle.thickness);
        out.push('\n');
    }

    if focus.shows_rating() {
        table_header(&mut out, "매니아 평가", a, b);
        row(
            &mut out,
            "정통성 점수",
            format!("{}/100", a.expert_rating.authenticity_score),
            format!("{}/100", b.expert_rating.authenticity_score),
        );
        row(
            &mut out,
            "전체 밸런스",
            glyph_bar(a.expert_rating.overall_balance),
            glyph_bar(b.expert_rating.overall_balance),
        );
        out.push('\n');
    }

    out.push_str("## 상황별 추천\n");
    out.push_str(&format!(
        "- **입문자**: {} (육향이 진하고 친숙한 맛)\n",
        cmp.get(cmp.beginner).name
    ));
    out.push_str(&format!(
        "- **매니아**: {} (정통성 점수 높음)\n",
        cmp.get(cmp.authenticity).name
    ));
    out.push_str(&format!("- **가성비**: {}\n", cmp.get(cmp.value).name));

    out
}
