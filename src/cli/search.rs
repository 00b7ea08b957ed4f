use anyhow::Result;
use clap::Args;

use naengmyeon::config::NaengmyeonConfig;
use naengmyeon::tools::search_restaurants::{self, SearchRestaurantsParams};

#[derive(Args)]
pub struct SearchArgs {
    /// Region, e.g. jongno_euljiro
    #[arg(long)]
    region: Option<String>,
    /// Lineage, e.g. wooraeok
    #[arg(long)]
    lineage: Option<String>,
    /// Maximum naengmyeon price in won
    #[arg(long)]
    max_price: Option<u32>,
    /// Experience level: beginner, intermediate, expert
    #[arg(long)]
    level: Option<String>,
    /// Only Michelin-listed restaurants
    #[arg(long)]
    michelin: bool,
    /// Require (true) or exclude (false) slush-ice broth
    #[arg(long)]
    slush_ice: Option<bool>,
    /// Tier 1-3
    #[arg(long)]
    tier: Option<u8>,
    /// Free-text keywords
    query: Vec<String>,
}

/// Run a search from the terminal and print the rendered document.
pub fn search(config: &NaengmyeonConfig, args: SearchArgs) -> Result<()> {
    let catalog = naengmyeon::server::load_catalog(config)?;

    let params = SearchRestaurantsParams {
        region: args.region,
        lineage: args.lineage,
        max_price: args.max_price,
        experience_level: args.level,
        michelin_only: Some(args.michelin),
        has_slush_ice: args.slush_ice,
        tier: args.tier,
        query: (!args.query.is_empty()).then(|| args.query.join(" ")),
    };

    let text = search_restaurants::run(&catalog, params)?;
    println!("{text}");
    Ok(())
}
