use property_listings::config::Config;
use property_listings::data::{seed_listings, seed_reviews};
use property_listings::details::{average_rating, format_price_try, reviews_for};
use property_listings::export::{JsonFileSink, ListingSink};
use property_listings::listings::{Clock, FilterCriteria, ListingStore, SystemClock};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Property Listings");
    info!("====================");

    let config = Config::from_env()?.with_args(std::env::args().skip(1));

    let clock = Arc::new(SystemClock);
    let store = ListingStore::with_listings(clock.clone(), seed_listings(clock.now()));

    let criteria = FilterCriteria::from_query(&config.query);
    if let Some(city) = &criteria.city {
        info!("Filtering listings in {}", city);
    }

    let listings = store.filtered_view(&criteria);
    info!(
        "✅ {} of {} listings on display\n",
        listings.len(),
        store.len()
    );

    let reviews = seed_reviews();
    for (i, listing) in listings.iter().enumerate() {
        let details = &listing.details;
        println!("{}. {} ({})", i + 1, details.title, format_price_try(details.price));
        println!(
            "   {}, {} · {} · {} m²",
            details.neighborhood,
            details.city,
            listing.room_type().unwrap_or("-"),
            details.area
        );
        let listing_reviews = reviews_for(&reviews, &listing.id);
        if let Some(rating) = average_rating(&listing_reviews) {
            println!("   Rating: {:.1} ({} reviews)", rating, listing_reviews.len());
        }
        println!("   Expires in {} days", store.remaining_days(listing));
        println!("   ID: {}", listing.id);
        println!();
    }

    if listings.is_empty() {
        println!("No properties found matching your criteria.");
    }

    let sink = JsonFileSink::new(config.export_path.clone());
    let written = sink.write(&listings).await?;
    info!("Exported {} listings via {}", written, sink.sink_name());

    Ok(())
}
