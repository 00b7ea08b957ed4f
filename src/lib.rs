//! Pyongyang naengmyeon guide — curated restaurant knowledge for AI agents via MCP.
//!
//! The server answers structured questions against a small static dataset
//! loaded once at startup: restaurants, the recipe lineages they descend
//! from, eating guides, and side-menu pairings.
//!
//! | Tool | Answers |
//! |------|---------|
//! | `search_restaurants` | Multi-predicate filter, best rating first |
//! | `get_restaurant` | One restaurant by id or name fragment |
//! | `get_lineage_info` | One lineage, or a summary of all |
//! | `recommend` | Top three for an experience level and broth taste |
//! | `compare` | Side-by-side tables plus beginner / authenticity / value picks |
//! | `get_eating_guide` | Topic guide with optional restaurant tips |
//! | `get_side_pairings` | Side dishes, budget courses, drink pairings |
//!
//! # Modules
//!
//! - [`catalog`] — Record types and the load-once data store
//! - [`engine`] — Search, lookup, recommendation and comparison
//! - [`render`] — Markdown documents for every engine result
//! - [`tools`] — MCP tool parameters, validation and the tool router
//! - [`server`] — stdio and Streamable HTTP transports
//! - [`config`] — Configuration loading from TOML files and environment variables

pub mod catalog;
pub mod config;
pub mod engine;
pub mod render;
pub mod server;
pub mod tools;
