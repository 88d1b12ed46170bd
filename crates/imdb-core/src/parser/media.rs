//! Photo index and image detail parsers for IMDb

use scraper::Html;

use crate::error::{ImdbError, Result};

use super::selector;

/// One thumbnail of the photo grid together with the link it points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailLink {
    /// Address of the thumbnail image
    pub thumbnail: String,
    /// Link target of the thumbnail, usually a relative image viewer path
    pub target: String,
}

/// Extract the first `limit + 1` links of the photo grid on `/name/<id>/mediaindex`.
///
/// Each entry is `None` when the link has no target or no thumbnail image,
/// so that positions in the grid are preserved.
///
/// # Errors
/// `ImdbError::ElementNotFound` if the page has no thumbnail grid.
pub fn parse_thumbnails(document: &Html, limit: usize) -> Result<Vec<Option<ThumbnailLink>>> {
    let grid_selector = selector("#media_index_thumbnail_grid")?;
    let links = selector("a")?;
    let image = selector("img")?;

    let grid = document
        .select(&grid_selector)
        .next()
        .ok_or_else(|| ImdbError::ElementNotFound("#media_index_thumbnail_grid".to_string()))?;

    Ok(grid
        .select(&links)
        .take(limit.saturating_add(1))
        .map(|link| {
            let target = link.value().attr("href")?;
            let thumbnail = link.select(&image).next()?.value().attr("src")?;
            Some(ThumbnailLink {
                thumbnail: thumbnail.to_string(),
                target: target.to_string(),
            })
        })
        .collect())
}

/// Extract the full-size image address from an image detail page.
///
/// # Errors
/// `ImdbError::ElementNotFound` if the page has no primary image.
pub fn parse_primary_image(document: &Html) -> Result<String> {
    let primary = selector("#primary-img")?;
    document
        .select(&primary)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string)
        .ok_or_else(|| ImdbError::ElementNotFound("#primary-img".to_string()))
}
