//! Data types for the IMDb scraper
//!
//! All extracted values implement Serialize and Deserialize for JSON output.

use serde::{Deserialize, Serialize};

/// Sub-page of a person profile that can be fetched and cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfilePage {
    /// `/name/<id>/`
    Main,
    /// `/name/<id>/bio`
    Bio,
    /// `/name/<id>/mediaindex`
    MediaIndex,
    /// `/name/<id>/videogallery`
    VideoGallery,
}

impl ProfilePage {
    /// Path suffix appended after `/name/<id>/`
    pub fn suffix(self) -> &'static str {
        match self {
            ProfilePage::Main => "",
            ProfilePage::Bio => "bio",
            ProfilePage::MediaIndex => "mediaindex",
            ProfilePage::VideoGallery => "videogallery",
        }
    }

    /// Relative path of this page for the given (already encoded) person id
    pub fn path(self, id: &str) -> String {
        format!("/name/{}/{}", id, self.suffix())
    }
}

/// A title the person is credited on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Numeric part of the title id, leading zeros kept (`tt0111161` -> `0111161`)
    pub id: String,
    /// Link text of the credit row, if any
    pub title: Option<String>,
}

impl Work {
    /// Relative URL of the title page
    pub fn url(&self) -> String {
        format!("/title/tt{}/", self.id)
    }
}

/// One entry of the photo gallery
///
/// Both fields are `None` when the entry could not be extracted; the entry
/// keeps its position in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Thumbnail image address
    pub thumbnail: Option<String>,
    /// Full-size image address taken from the image detail page
    pub large: Option<String>,
}

impl Photo {
    /// Whether neither address could be extracted
    pub fn is_empty(&self) -> bool {
        self.thumbnail.is_none() && self.large.is_none()
    }
}

/// One entry of the video gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Video page address
    pub url: String,
    /// Embeddable player address
    pub embed_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_page_paths() {
        assert_eq!(ProfilePage::Main.path("nm0000093"), "/name/nm0000093/");
        assert_eq!(ProfilePage::Bio.path("nm0000093"), "/name/nm0000093/bio");
        assert_eq!(
            ProfilePage::MediaIndex.path("nm0000093"),
            "/name/nm0000093/mediaindex"
        );
        assert_eq!(
            ProfilePage::VideoGallery.path("nm0000093"),
            "/name/nm0000093/videogallery"
        );
    }

    #[test]
    fn test_work_url_keeps_leading_zeros() {
        let work = Work {
            id: "0111161".to_string(),
            title: None,
        };
        assert_eq!(work.url(), "/title/tt0111161/");
    }

    #[test]
    fn test_photo_default_is_empty() {
        assert!(Photo::default().is_empty());

        let photo = Photo {
            thumbnail: Some("thumb.jpg".to_string()),
            large: None,
        };
        assert!(!photo.is_empty());
    }

    #[test]
    fn test_video_serialization() {
        let video = Video {
            url: "https://www.imdb.com/video/imdb/vi1/".to_string(),
            embed_url: "https://www.imdb.com/video/imdb/vi1/imdb/embed".to_string(),
        };

        let json = serde_json::to_string(&video).unwrap();
        let deserialized: Video = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, video);
    }
}
