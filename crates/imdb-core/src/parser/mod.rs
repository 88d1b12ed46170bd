//! HTML parsers for IMDb person pages
//!
//! Each parser is a pure function over an already parsed document:
//! - `profile`: main profile page (name, avatar, birth date, categories, credits)
//! - `bio`: biography page
//! - `media`: photo index and image detail pages
//! - `video`: video gallery page

pub mod bio;
pub mod media;
pub mod profile;
pub mod video;

use scraper::Selector;

use crate::error::{ImdbError, Result};

// Re-export main parsing functions
pub use bio::parse_bio;
pub use media::{parse_primary_image, parse_thumbnails, ThumbnailLink};
pub use profile::{
    category_slug, extract_title_id, parse_avatar, parse_birth_date, parse_categories,
    parse_name, parse_works,
};
pub use video::{embed_path, parse_video_ids, video_path};

/// Compile a CSS selector, reporting failures as parse errors.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ImdbError::ParseError(format!("Invalid selector {}: {:?}", css, e)))
}
