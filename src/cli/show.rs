use anyhow::Result;

use naengmyeon::config::NaengmyeonConfig;
use naengmyeon::render;

/// Print the detail page for a restaurant id or name fragment.
pub fn show(config: &NaengmyeonConfig, reference: &str) -> Result<()> {
    let catalog = naengmyeon::server::load_catalog(config)?;
    let restaurant = catalog.find_restaurant(reference);
    println!("{}", render::restaurants::restaurant_detail(restaurant, reference));
    Ok(())
}
