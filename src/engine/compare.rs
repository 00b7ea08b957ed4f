//! Pairwise comparison of two restaurants.
//!
//! Three independent heuristics each pick one winner. Ties go to the
//! restaurant supplied first.

use crate::catalog::records::Restaurant;
use crate::catalog::Catalog;

/// Which of the two compared restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    pub first: &'a Restaurant,
    pub second: &'a Restaurant,
    /// Stronger beef aroma and milder seasoning.
    pub beginner: Side,
    /// Higher authenticity score.
    pub authenticity: Side,
    /// Higher overall balance per won.
    pub value: Side,
}

impl<'a> Comparison<'a> {
    pub fn between(first: &'a Restaurant, second: &'a Restaurant) -> Self {
        Self {
            first,
            second,
            beginner: pick(beginner_affinity(first), beginner_affinity(second)),
            authenticity: pick(
                first.expert_rating.authenticity_score,
                second.expert_rating.authenticity_score,
            ),
            value: pick(value_score(first), value_score(second)),
        }
    }

    pub fn get(&self, side: Side) -> &'a Restaurant {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ComparisonOutcome<'a> {
    Compared(Comparison<'a>),
    /// The reference on this side did not resolve to a restaurant.
    Missing(Side),
}

/// Resolve both references (id or name fragment) and compare them.
/// The first reference is checked first.
pub fn compare<'a>(catalog: &'a Catalog, first: &str, second: &str) -> ComparisonOutcome<'a> {
    let Some(a) = catalog.find_restaurant(first) else {
        return ComparisonOutcome::Missing(Side::First);
    };
    let Some(b) = catalog.find_restaurant(second) else {
        return ComparisonOutcome::Missing(Side::Second);
    };
    ComparisonOutcome::Compared(Comparison::between(a, b))
}

/// Beef aroma plus mildness: `beef_aroma_level + (5 - saltiness_level)`.
pub fn beginner_affinity(r: &Restaurant) -> u32 {
    u32::from(r.broth.beef_aroma_level) + u32::from(5u8.saturating_sub(r.broth.saltiness_level))
}

/// `overall_balance * 10000 / price`, or 0 when the price is unknown.
pub fn value_score(r: &Restaurant) -> f64 {
    match r.naengmyeon_price() {
        0 => 0.0,
        price => f64::from(r.expert_rating.overall_balance) * 10_000.0 / f64::from(price),
    }
}

/// Second wins only on a strictly greater score.
fn pick<T: PartialOrd>(first: T, second: T) -> Side {
    if second > first {
        Side::Second
    } else {
        Side::First
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_prefers_first_on_tie() {
        assert_eq!(pick(3, 3), Side::First);
        assert_eq!(pick(3, 4), Side::Second);
        assert_eq!(pick(0.5, 0.25), Side::First);
    }
}
