//! Category value sets used by catalog records and tool inputs.
//!
//! Every category is a closed set of snake_case strings. Each enum gets the
//! same surface: `as_str`, [`Display`](std::fmt::Display),
//! [`FromStr`](std::str::FromStr) with a readable error, and `ALL` for
//! listing accepted values in validation messages.

use serde::{Deserialize, Serialize};

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant ),+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value ),+
                }
            }

            /// Accepted values joined for error messages.
            pub fn expected() -> String {
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err(format!("unknown {}: {s}", $label)),
                }
            }
        }
    };
}

category! {
    /// Seoul-area district grouping.
    Region, "region" {
        /// Jongno, Euljiro, Jung-gu.
        JongnoEuljiro => "jongno_euljiro",
        GangnamSeocho => "gangnam_seocho",
        MapoYeouido => "mapo_yeouido",
        SongpaJamsil => "songpa_jamsil",
        /// Uijeongbu and the rest of northern Gyeonggi.
        GyeonggiNorth => "gyeonggi_north",
        /// Pangyo, Bundang and the rest of southern Gyeonggi.
        GyeonggiSouth => "gyeonggi_south",
    }
}

category! {
    /// The recipe tradition a restaurant descends from.
    Lineage, "lineage" {
        /// Deep beef aroma.
        Wooraeok => "wooraeok",
        /// Red pepper flakes, saltier broth.
        Uijeongbu => "uijeongbu",
        /// The mildest broth of the four houses.
        Jangchungdong => "jangchungdong",
        /// Slush ice, thick noodles.
        Eulmildae => "eulmildae",
        /// Pyongyang Okryugwan style.
        Okryugwan => "okryugwan",
        Independent => "independent",
    }
}

category! {
    BrothBase, "broth base" {
        BeefOnly => "beef_only",
        BeefChicken => "beef_chicken",
        BeefDongchimi => "beef_dongchimi",
        DongchimiMain => "dongchimi_main",
        /// Pheasant, pork or other mixed stocks.
        Mixed => "mixed",
    }
}

category! {
    NoodleStyle, "noodle style" {
        ThinChewy => "thin_chewy",
        ThinCrumbly => "thin_crumbly",
        ThickChewy => "thick_chewy",
        MediumBalanced => "medium_balanced",
    }
}

category! {
    NoodleThickness, "noodle thickness" {
        Thin => "thin",
        Medium => "medium",
        Thick => "thick",
    }
}

category! {
    /// How familiar a diner is with Pyongyang-style naengmyeon.
    ExperienceLevel, "experience level" {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Expert => "expert",
    }
}

category! {
    CertificationType, "certification type" {
        MichelinBib => "michelin_bib",
        MichelinStar => "michelin_star",
        MichelinGuide => "michelin_guide",
        /// Stored with its Korean label in the dataset.
        MichelinPlate => "미쉐린 Plate",
        BlueRibbon => "blue_ribbon",
        Broadcast => "broadcast",
    }
}

category! {
    /// Broth preference used by `recommend`.
    BrothPreference, "broth preference" {
        RichBeefy => "rich_beefy",
        LightClean => "light_clean",
        DongchimiSour => "dongchimi_sour",
        NoPreference => "no_preference",
    }
}

category! {
    VisitSituation, "situation" {
        FirstTimer => "first_timer",
        Date => "date",
        Business => "business",
        Solo => "solo",
        WithMania => "with_mania",
        Hangover => "hangover",
    }
}

category! {
    Season, "season" {
        Summer => "summer",
        Winter => "winter",
        All => "all",
    }
}

impl CertificationType {
    /// Prefix test used by the `michelin_only` search filter. The Korean
    /// plate label does not carry the prefix and is not matched.
    pub fn is_michelin(&self) -> bool {
        self.as_str().starts_with("michelin")
    }
}

impl Default for BrothPreference {
    fn default() -> Self {
        Self::NoPreference
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::All
    }
}

impl VisitSituation {
    /// Korean label used in rendered headings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstTimer => "첫 경험",
            Self::Date => "데이트",
            Self::Business => "비즈니스/접대",
            Self::Solo => "혼밥",
            Self::WithMania => "매니아와 함께",
            Self::Hangover => "해장",
        }
    }
}
