//! Query, recommendation and comparison over a loaded [`Catalog`](crate::catalog::Catalog).
//!
//! Every operation is a pure read. Not-found and empty results are ordinary
//! return values, never errors.

pub mod compare;
pub mod lookup;
pub mod pairings;
pub mod recommend;
pub mod search;
