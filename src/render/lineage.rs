use crate::catalog::records::{BranchYear, LineageRecord};
use crate::engine::lookup::{known_lineage_keys, LineageLookup};

use super::{truncate, DESCRIPTION_BUDGET, PHILOSOPHY_BUDGET};

pub const LINEAGES_NOT_LOADED: &str = "계보 데이터가 로드되지 않았습니다.";

/// Representative restaurants listed per lineage in aggregate mode.
const AGGREGATE_REPRESENTATIVES: usize = 3;

pub fn lineage(lookup: &LineageLookup<'_>) -> String {
    match lookup {
        LineageLookup::NotLoaded => LINEAGES_NOT_LOADED.to_string(),
        LineageLookup::All(all) => aggregate(all),
        LineageLookup::Found(record) => detail(record),
        LineageLookup::NotFound { key } => format!(
            "'{key}' 계보 정보를 찾을 수 없습니다.\n\n사용 가능한 계보: {}",
            known_lineage_keys()
        ),
    }
}

fn aggregate(all: &[LineageRecord]) -> String {
    let mut out = String::from("# 평양냉면 계보 총정리\n\n");
    for l in all {
        let representatives: Vec<&str> = l
            .representative_restaurants
            .iter()
            .take(AGGREGATE_REPRESENTATIVES)
            .map(String::as_str)
            .collect();
        out.push_str(&format!("## {}\n", l.name));
        out.push_str(&format!(
            "{}\n",
            truncate(&l.philosophy_of_taste, PHILOSOPHY_BUDGET)
        ));
        out.push_str(&format!("- 대표 맛집: {}\n", representatives.join(", ")));
        out.push_str(&format!(
            "- 적합: {}\n\n",
            truncate(&l.suitability, DESCRIPTION_BUDGET)
        ));
    }
    out
}

fn detail(l: &LineageRecord) -> String {
    let mut out = format!("# {}\n\n", l.name);
    out.push_str(&format!("## 역사\n{}\n\n", l.origin_history));
    out.push_str(&format!("## 맛 철학\n{}\n\n", l.philosophy_of_taste));
    out.push_str(&format!("## 특징\n{}\n\n", l.distinctive_features));
    out.push_str("## 대표 맛집\n");
    for name in &l.representative_restaurants {
        out.push_str(&format!("- {name}\n"));
    }
    out.push_str(&format!("\n## 누구에게 추천?\n{}\n", l.suitability));

    if !l.internal_branches.is_empty() {
        out.push_str("\n## 연혁\n");
        for branch in &l.internal_branches {
            match &branch.year {
                Some(BranchYear::Number(year)) => {
                    out.push_str(&format!("- {year}년: {}\n", branch.event));
                }
                Some(BranchYear::Text(year)) => {
                    out.push_str(&format!("- {year}: {}\n", branch.event));
                }
                None => out.push_str(&format!("- {}\n", branch.event)),
            }
        }
    }
    out
}
