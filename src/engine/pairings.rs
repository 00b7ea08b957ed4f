use crate::catalog::records::{CourseBundle, Restaurant, SideDish};
use crate::catalog::Catalog;

/// Budget ceiling assumed for a course whose budget text has no digits.
pub const DEFAULT_COURSE_CEILING: u64 = 100_000;

#[derive(Debug)]
pub enum PairingPlan<'a> {
    /// The hinted restaurant has its own side menu; nothing else is shown.
    Restaurant(&'a Restaurant),
    /// The generic side-dish catalog.
    Catalog(CatalogPairings<'a>),
    /// No side-menu document was loaded.
    NotLoaded,
}

#[derive(Debug)]
pub struct CatalogPairings<'a> {
    pub dishes: &'a [SideDish],
    /// Present when a budget was given: the budget and the courses that fit.
    pub courses: Option<(u64, Vec<&'a CourseBundle>)>,
    pub include_alcohol: bool,
}

/// Upper bound of a free-text budget range such as `"30,000~40,000원"`.
///
/// Takes the text after the last `~`, keeps only its ASCII digits and
/// parses them. Text without usable digits falls back to
/// [`DEFAULT_COURSE_CEILING`]. Units are not interpreted, so `"5만원"`
/// reads as 5.
pub fn parse_budget_ceiling(budget: &str) -> u64 {
    let upper = budget.rsplit('~').next().unwrap_or(budget);
    let digits: String = upper.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(DEFAULT_COURSE_CEILING)
}

/// Courses whose budget ceiling is within `budget`, in catalog order.
pub fn courses_within(catalog: &Catalog, budget: u64) -> Vec<&CourseBundle> {
    catalog
        .side_menus
        .course_examples
        .iter()
        .filter(|c| parse_budget_ceiling(&c.budget) <= budget)
        .collect()
}

/// Plan a side-dish answer. A restaurant hint with side menus short-circuits
/// everything else.
pub fn side_pairings<'a>(
    catalog: &'a Catalog,
    restaurant_hint: Option<&str>,
    budget: Option<u64>,
    include_alcohol: bool,
) -> PairingPlan<'a> {
    if let Some(r) = restaurant_hint.and_then(|hint| catalog.find_restaurant(hint)) {
        if !r.side_menus.is_empty() {
            return PairingPlan::Restaurant(r);
        }
    }

    if catalog.side_menus.is_empty() {
        return PairingPlan::NotLoaded;
    }

    PairingPlan::Catalog(CatalogPairings {
        dishes: &catalog.side_menus.side_dishes,
        courses: budget.map(|b| (b, courses_within(catalog, b))),
        include_alcohol,
    })
}
