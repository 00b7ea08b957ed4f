//! Markdown rendering of engine results.
//!
//! Each public function takes an engine result plus the terms the caller
//! asked with and returns a complete text document. Rendering never fails
//! and never returns an empty string.

pub mod comparison;
pub mod guide;
pub mod lineage;
pub mod pairings;
pub mod restaurants;

/// Character budget for broth and noodle descriptions in listings.
pub const DESCRIPTION_BUDGET: usize = 50;

/// Character budget for lineage philosophy in aggregate mode.
pub const PHILOSOPHY_BUDGET: usize = 100;

const FILLED: char = '★';
const EMPTY: char = '☆';

/// Five-glyph bar for a 1–5 level: `★★★☆☆` for 3.
pub fn glyph_bar(level: u8) -> String {
    let filled = usize::from(level.min(5));
    let mut bar = String::with_capacity(5 * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(5 - filled));
    bar
}

/// Cut `text` to `budget` characters, appending `...` when anything was cut.
pub fn truncate(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Price in won with thousands separators: `15,000원`.
pub fn won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('원');
    out
}

/// Sentence used whenever a restaurant reference does not resolve.
pub fn restaurant_not_found(query: &str) -> String {
    format!("'{query}' 맛집을 찾을 수 없습니다.")
}

fn or_unknown(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("정보없음")
}
