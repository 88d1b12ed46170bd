//! Print a person's profile scraped from IMDb.
//!
//! ```text
//! RUST_LOG=imdb_core=debug cargo run --example profile -- nm0000093
//! ```

use imdb_core::ImdbScraper;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let id = std::env::args().nth(1).unwrap_or_else(|| "nm0000093".to_string());
    let scraper = ImdbScraper::new()?;
    let mut person = scraper.person(&id)?;

    println!("{} ({})", person.name().await.unwrap_or_default(), person.url()?);
    if let Some(avatar) = person.avatar().await {
        println!("Avatar: {}", avatar);
    }
    println!("{}, age {}", person.birth_date().await?, person.age().await?);

    let categories = person.categories().await?;
    println!("\nCategories: {}", categories.join(", "));
    for category in &categories {
        let works = person.works_as(category).await?;
        println!("  {}: {} credits", category, works.len());
    }

    if let Some(bio) = person.bio().await {
        println!("\n{}", bio);
    }

    println!("\nPhotos:");
    for photo in person.photos_limited(3).await {
        println!(
            "  {} -> {}",
            photo.thumbnail.as_deref().unwrap_or("-"),
            photo.large.as_deref().unwrap_or("-")
        );
    }

    println!("\nVideos:");
    for video in person.video_urls().await {
        println!("  {} ({})", video.url, video.embed_url);
    }

    Ok(())
}
