//! Catalog record definitions.
//!
//! These mirror the JSON documents under the data directory field for field.
//! Everything except the identifying block of [`Restaurant`] is optional or
//! defaulted so that sparse entries still decode.

use serde::{Deserialize, Serialize};

use super::types::{
    BrothBase, CertificationType, ExperienceLevel, Lineage, NoodleStyle, NoodleThickness,
    Region, Season,
};

fn default_tier() -> u8 {
    2
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hours {
    pub weekday: Option<String>,
    pub weekend: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    pub founded_year: Option<i32>,
    pub founder: Option<String>,
    pub origin: Option<String>,
    pub lineage: Option<String>,
    pub story: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub signature: Option<String>,
    /// Price of a bowl of mul-naengmyeon, in won.
    pub naengmyeon_price: u32,
    #[serde(default)]
    pub bibim_naengmyeon: bool,
    #[serde(default)]
    pub onmyeon: bool,
    #[serde(default)]
    pub mandu: bool,
    #[serde(default)]
    pub pyeonyuk: bool,
    #[serde(default)]
    pub other_menus: Vec<String>,
}

/// Broth profile. The four `*_level` scales run 1–5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrothProfile {
    pub base: BrothBase,
    /// 5 = very clear.
    pub clarity_level: u8,
    pub depth_level: u8,
    /// 1 = very mild, 5 = salty.
    pub saltiness_level: u8,
    pub beef_aroma_level: u8,
    #[serde(default)]
    pub has_slush_ice: bool,
    #[serde(default)]
    pub uses_soy_sauce: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dongchimi: bool,
    pub characteristics: Option<String>,
    pub taste_profile: Option<String>,
    /// Free-text saltiness note shown next to the saltiness bar.
    pub saltiness: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoodleProfile {
    pub style: NoodleStyle,
    /// Buckwheat content in percent.
    pub buckwheat_ratio: u8,
    pub thickness: NoodleThickness,
    #[serde(default)]
    pub texture_keywords: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub homemade: bool,
    pub texture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToppingsProfile {
    #[serde(default = "default_true")]
    pub has_pyeonyuk: bool,
    #[serde(default = "default_true")]
    pub has_egg: bool,
    #[serde(default = "default_true")]
    pub has_cucumber: bool,
    #[serde(default)]
    pub has_pear: bool,
    #[serde(default)]
    pub has_dongchimi_mu: bool,
    #[serde(default)]
    pub has_red_pepper_powder: bool,
    #[serde(default)]
    pub extras: Vec<String>,
}

/// Expert panel scores. Sub-scores run 1–5, authenticity 0–100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertRating {
    pub broth_clarity: u8,
    pub broth_depth: u8,
    pub noodle_aroma: u8,
    pub noodle_texture: u8,
    pub temperature: u8,
    pub overall_balance: u8,
    pub authenticity_score: u8,
    #[serde(default)]
    pub reviewer_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    #[serde(rename = "type")]
    pub kind: CertificationType,
    pub year: i32,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideMenu {
    pub name: String,
    /// Price in won.
    pub price: u32,
    #[serde(default)]
    pub is_signature: bool,
    pub pairing_note: Option<String>,
}

/// A naengmyeon restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub slug: Option<String>,
    /// 1 = top tier.
    #[serde(default = "default_tier")]
    pub tier: u8,
    pub name: String,
    pub name_hanja: Option<String>,
    pub name_english: Option<String>,

    pub region: Region,
    pub region_code: Option<String>,
    pub address: String,
    pub address_detail: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<Hours>,
    pub hours_string: Option<String>,
    #[serde(default)]
    pub closed_days: Vec<String>,
    pub closed_days_string: Option<String>,

    pub history: Option<History>,
    pub lineage: Lineage,
    pub generation: Option<u32>,
    pub origin_story: Option<String>,

    pub menu: Option<Menu>,
    pub price_range: Option<String>,

    pub broth: BrothProfile,
    pub noodle: NoodleProfile,
    pub toppings: ToppingsProfile,

    pub expert_rating: ExpertRating,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub awards: Vec<String>,
    pub rating_score: Option<f64>,

    #[serde(default)]
    pub side_menus: Vec<SideMenu>,

    #[serde(default)]
    pub features: Vec<String>,
    pub parking: Option<String>,
    pub parking_available: Option<bool>,
    pub reservation: Option<bool>,
    pub reservation_available: Option<bool>,
    pub accessibility: Option<String>,

    #[serde(default)]
    pub recommended_for: Vec<ExperienceLevel>,
    #[serde(default)]
    pub best_season: Season,
    pub average_wait_minutes: Option<u32>,

    #[serde(default)]
    pub special_notes: Vec<String>,
    #[serde(default)]
    pub famous_visitors: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,
    pub order_options: Option<String>,
}

impl Restaurant {
    /// Price of a bowl of mul-naengmyeon, or 0 when the menu is unknown.
    pub fn naengmyeon_price(&self) -> u32 {
        self.menu.as_ref().map_or(0, |m| m.naengmyeon_price)
    }

    pub fn founded_year(&self) -> Option<i32> {
        self.history.as_ref().and_then(|h| h.founded_year)
    }

    pub fn founder(&self) -> Option<&str> {
        self.history.as_ref().and_then(|h| h.founder.as_deref())
    }

    /// Rating used for ordering; an absent score counts as 0.
    pub fn score(&self) -> f64 {
        self.rating_score.unwrap_or(0.0)
    }

    pub fn is_recommended_for(&self, level: ExperienceLevel) -> bool {
        self.recommended_for.contains(&level)
    }

    pub fn has_michelin(&self) -> bool {
        self.certifications.iter().any(|c| c.kind.is_michelin())
    }

    /// Checks the bounded numeric fields. Returns the first offending
    /// `(field, value, range)` triple.
    pub fn out_of_range(&self) -> Option<(&'static str, i64, &'static str)> {
        const SCALE: &str = "1..=5";
        let scales: [(&'static str, u8); 10] = [
            ("broth.clarity_level", self.broth.clarity_level),
            ("broth.depth_level", self.broth.depth_level),
            ("broth.saltiness_level", self.broth.saltiness_level),
            ("broth.beef_aroma_level", self.broth.beef_aroma_level),
            ("expert_rating.broth_clarity", self.expert_rating.broth_clarity),
            ("expert_rating.broth_depth", self.expert_rating.broth_depth),
            ("expert_rating.noodle_aroma", self.expert_rating.noodle_aroma),
            ("expert_rating.noodle_texture", self.expert_rating.noodle_texture),
            ("expert_rating.temperature", self.expert_rating.temperature),
            ("expert_rating.overall_balance", self.expert_rating.overall_balance),
        ];
        if let Some((field, value)) = scales.into_iter().find(|(_, v)| !(1..=5).contains(v)) {
            return Some((field, i64::from(value), SCALE));
        }
        if !(1..=3).contains(&self.tier) {
            return Some(("tier", i64::from(self.tier), "1..=3"));
        }
        if self.noodle.buckwheat_ratio > 100 {
            return Some((
                "noodle.buckwheat_ratio",
                i64::from(self.noodle.buckwheat_ratio),
                "0..=100",
            ));
        }
        if self.expert_rating.authenticity_score > 100 {
            return Some((
                "expert_rating.authenticity_score",
                i64::from(self.expert_rating.authenticity_score),
                "0..=100",
            ));
        }
        None
    }
}

/// Year of a lineage branch event. The dataset mixes numbers and
/// free-text eras such as "1950년대".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BranchYear {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchEvent {
    pub year: Option<BranchYear>,
    #[serde(default)]
    pub event: String,
}

/// A recipe tradition and the restaurants that carry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineageRecord {
    pub name: String,
    pub origin_history: String,
    pub philosophy_of_taste: String,
    pub distinctive_features: String,
    pub representative_restaurants: Vec<String>,
    pub suitability: String,
    #[serde(default)]
    pub internal_branches: Vec<BranchEvent>,
}

/// A how-to document keyed by topic (`basic`, `condiments`, `ordering`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EatingGuide {
    pub topic: String,
    pub title: String,
    pub description: Option<String>,
    pub steps: Vec<String>,
    pub tips: Vec<String>,
    pub common_mistakes: Vec<String>,
    #[serde(default)]
    pub expert_opinions: Vec<String>,
    #[serde(default)]
    pub restaurant_notes: Vec<String>,
}

/// Side-menu fields are hand-edited and hold either one sentence or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl Default for TextOrList {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl std::fmt::Display for TextOrList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideDish {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub portion_size: String,
    #[serde(default)]
    pub pairing_notes: TextOrList,
    #[serde(default)]
    pub best_restaurants: Vec<String>,
    #[serde(default)]
    pub recommended_situations: TextOrList,
}

/// A suggested set of dishes for a given per-person budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseBundle {
    pub name: String,
    /// Free text such as `"30,000~40,000원"`.
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub dishes: Vec<String>,
    #[serde(default)]
    pub serving_order: TextOrList,
    #[serde(default)]
    pub tips: TextOrList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SideMenuCatalog {
    #[serde(default)]
    pub side_dishes: Vec<SideDish>,
    #[serde(default)]
    pub course_examples: Vec<CourseBundle>,
}

impl SideMenuCatalog {
    pub fn is_empty(&self) -> bool {
        self.side_dishes.is_empty() && self.course_examples.is_empty()
    }
}
