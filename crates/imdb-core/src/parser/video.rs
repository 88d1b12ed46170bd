//! Video gallery parser for IMDb

use scraper::Html;

use crate::error::Result;

use super::selector;

/// Extract the video ids of the gallery on `/name/<id>/videogallery`.
///
/// Links inside result items that carry no `data-video` attribute are dropped.
pub fn parse_video_ids(document: &Html) -> Result<Vec<String>> {
    let links = selector(".results-item a")?;

    Ok(document
        .select(&links)
        .filter_map(|a| a.value().attr("data-video"))
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect())
}

/// Relative path of the video page
pub fn video_path(video_id: &str) -> String {
    format!("/video/imdb/{}/", video_id)
}

/// Relative path of the embeddable player
pub fn embed_path(video_id: &str) -> String {
    format!("/video/imdb/{}/imdb/embed", video_id)
}
