//! Lazily scraped IMDb person profile
//!
//! A [`Person`] starts with nothing but an id. Every accessor fetches the
//! sub-page it needs on first use, keeps the parsed document for the lifetime
//! of the value and caches the extracted field.
//!
//! Accessors follow one of three failure policies:
//! - `avatar`, `name`, `bio`, `photos` and `video_urls` degrade to `None` or an
//!   empty list and log the cause;
//! - `birth_date`, `age`, `categories`, `works_as` and `call` return the error;
//! - inside `photos` a failing entry becomes an empty [`Photo`] while the rest
//!   of the list is still extracted.

use std::collections::HashMap;

use chrono::Datelike;
use scraper::Html;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::ImdbClient;
use crate::error::{ImdbError, Result};
use crate::operation::Operation;
use crate::parser::{
    embed_path, parse_avatar, parse_bio, parse_birth_date, parse_categories, parse_name,
    parse_primary_image, parse_thumbnails, parse_video_ids, parse_works, video_path,
    ThumbnailLink,
};
use crate::text::{sanitize_preset, trailing_year};
use crate::types::{Photo, ProfilePage, Video, Work};

/// Number of photos returned by [`Person::photos`]
pub const DEFAULT_PHOTO_LIMIT: usize = 10;

/// Profile of a single person on IMDb
///
/// Not meant to be shared between tasks: accessors take `&mut self` and the
/// cached documents are not `Send`.
#[derive(Debug)]
pub struct Person {
    id: String,
    client: ImdbClient,
    documents: HashMap<ProfilePage, Html>,
    name: Option<String>,
    avatar: Option<String>,
    bio: Option<String>,
    birth_date: Option<String>,
    categories: Option<Vec<String>>,
    photos: Option<(usize, Vec<Photo>)>,
    videos: Option<Vec<Video>>,
}

impl Person {
    /// Create a profile for `id` (e.g. `nm0000093`).
    ///
    /// # Errors
    /// `ImdbError::InvalidId` if the id is blank or contains a path separator.
    pub fn new(id: impl Into<String>, client: ImdbClient) -> Result<Self> {
        let id = id.into().trim().to_string();
        if id.is_empty() || id.contains('/') {
            return Err(ImdbError::InvalidId(id));
        }

        Ok(Self {
            id,
            client,
            documents: HashMap::new(),
            name: None,
            avatar: None,
            bio: None,
            birth_date: None,
            categories: None,
            photos: None,
            videos: None,
        })
    }

    /// Create a profile with some attributes already known.
    ///
    /// Recognised keys are `name`, `avatar`, `bio` and `birthdate` (or
    /// `birth_date`). Strings, numbers and booleans are turned into text,
    /// stripped of `"` and trimmed; other values and unknown keys are ignored.
    pub fn with_attributes(
        id: impl Into<String>,
        client: ImdbClient,
        attributes: &HashMap<String, Value>,
    ) -> Result<Self> {
        let mut person = Self::new(id, client)?;

        for (key, value) in attributes {
            let Some(text) = preset_text(value) else {
                debug!(id = %person.id, %key, "ignoring preset that is not text");
                continue;
            };
            let text = sanitize_preset(&text);

            match key.as_str() {
                "name" => person.name = Some(text),
                "avatar" => person.avatar = Some(text),
                "bio" => person.bio = Some(text),
                "birthdate" | "birth_date" => person.birth_date = Some(text),
                _ => debug!(id = %person.id, %key, "ignoring unknown preset"),
            }
        }

        Ok(person)
    }

    /// IMDb id of this person
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Absolute address of the main profile page
    pub fn url(&self) -> Result<String> {
        self.client.resolve(&self.page_path(ProfilePage::Main))
    }

    fn page_path(&self, page: ProfilePage) -> String {
        page.path(&urlencoding::encode(&self.id))
    }

    /// Parsed document of a sub-page, fetched on first use.
    ///
    /// A failed fetch leaves nothing cached, so the next call tries again.
    async fn document(&mut self, page: ProfilePage) -> Result<&Html> {
        if !self.documents.contains_key(&page) {
            let html = self.client.fetch(&self.page_path(page)).await?;
            debug!(id = %self.id, ?page, bytes = html.len(), "page cached");
            self.documents.insert(page, Html::parse_document(&html));
        }

        self.documents
            .get(&page)
            .ok_or_else(|| ImdbError::ParseError(format!("{:?} page not cached", page)))
    }

    /// Poster image address, `None` if it cannot be found.
    pub async fn avatar(&mut self) -> Option<String> {
        if self.avatar.is_none() {
            let result = self.document(ProfilePage::Main).await.map(parse_avatar);
            self.avatar = degrade("avatar", &self.id, result).flatten();
        }
        self.avatar.clone()
    }

    /// Display name, `None` if it cannot be found.
    pub async fn name(&mut self) -> Option<String> {
        self.name_refreshed(false).await
    }

    /// Display name, extracted again from the profile page when `force_refresh` is set.
    pub async fn name_refreshed(&mut self, force_refresh: bool) -> Option<String> {
        if force_refresh || self.name.is_none() {
            let result = self.document(ProfilePage::Main).await.map(parse_name);
            self.name = degrade("name", &self.id, result).flatten();
        }
        self.name.clone()
    }

    /// Birth info line as shown on the profile, e.g. `"Born: 1 January 1970"`.
    pub async fn birth_date(&mut self) -> Result<String> {
        if let Some(birth_date) = &self.birth_date {
            return Ok(birth_date.clone());
        }

        let birth_date = parse_birth_date(self.document(ProfilePage::Main).await?)?;
        self.birth_date = Some(birth_date.clone());
        Ok(birth_date)
    }

    /// Age in years as of the current calendar year.
    pub async fn age(&mut self) -> Result<i32> {
        self.age_at(chrono::Local::now().year()).await
    }

    /// Age in years as of `current_year`.
    ///
    /// # Errors
    /// Any birth date error, or `ImdbError::ParseError` when the birth date
    /// carries no year.
    pub async fn age_at(&mut self, current_year: i32) -> Result<i32> {
        let birth_date = self.birth_date().await?;
        let year = trailing_year(&birth_date)
            .ok_or_else(|| ImdbError::ParseError(format!("no year in birth date {:?}", birth_date)))?;
        Ok(current_year - year)
    }

    /// Credit categories, e.g. `["Actor", "Director"]`.
    pub async fn categories(&mut self) -> Result<Vec<String>> {
        if let Some(categories) = &self.categories {
            return Ok(categories.clone());
        }

        let categories = parse_categories(self.document(ProfilePage::Main).await?)?;
        self.categories = Some(categories.clone());
        Ok(categories)
    }

    /// Works credited under `category` (matched case-insensitively).
    ///
    /// # Errors
    /// `ImdbError::ElementNotFound` if the profile has no section for the
    /// category, or any error fetching the profile page.
    pub async fn works_as(&mut self, category: &str) -> Result<Vec<Work>> {
        let document = self.document(ProfilePage::Main).await?;
        parse_works(document, category)
    }

    /// Run a named operation such as `works_as_director`.
    ///
    /// The category must be one of [`Person::categories`]; the comparison
    /// ignores case.
    ///
    /// # Errors
    /// `ImdbError::UnknownOperation` if the name does not parse or names a
    /// category this person is not credited for.
    pub async fn call(&mut self, operation: &str) -> Result<Vec<Work>> {
        match operation.parse::<Operation>()? {
            Operation::WorksAs(category) => {
                let known = self
                    .categories()
                    .await?
                    .iter()
                    .any(|c| c.to_lowercase() == category);

                if !known {
                    return Err(ImdbError::UnknownOperation(operation.to_string()));
                }
                self.works_as(&category).await
            }
        }
    }

    /// Mini biography, `None` if it cannot be found.
    pub async fn bio(&mut self) -> Option<String> {
        if self.bio.is_none() {
            self.bio = self.extract_bio().await;
        }
        self.bio.clone()
    }

    /// Mini biography passed through `transform`.
    ///
    /// The transformed text replaces whatever biography was cached.
    pub async fn bio_with<F>(&mut self, transform: F) -> Option<String>
    where
        F: FnOnce(&str) -> String,
    {
        let raw = self.extract_bio().await?;
        let bio = transform(&raw);
        self.bio = Some(bio.clone());
        Some(bio)
    }

    async fn extract_bio(&mut self) -> Option<String> {
        let result = self
            .document(ProfilePage::Bio)
            .await
            .and_then(parse_bio);
        degrade("bio", &self.id, result)
    }

    /// Up to [`DEFAULT_PHOTO_LIMIT`] + 1 photos.
    pub async fn photos(&mut self) -> Vec<Photo> {
        self.photos_limited(DEFAULT_PHOTO_LIMIT).await
    }

    /// The first `limit + 1` photos of the gallery.
    ///
    /// Every photo needs its own image detail page. An entry whose detail page
    /// fails is returned as an empty [`Photo`] in its position.
    pub async fn photos_limited(&mut self, limit: usize) -> Vec<Photo> {
        if let Some((cached_limit, photos)) = &self.photos {
            if *cached_limit == limit {
                return photos.clone();
            }
        }

        let result = self
            .document(ProfilePage::MediaIndex)
            .await
            .and_then(|document| parse_thumbnails(document, limit));
        let Some(links) = degrade("photos", &self.id, result) else {
            return Vec::new();
        };

        let mut photos = Vec::with_capacity(links.len());
        for (position, link) in links.iter().enumerate() {
            let photo = match link {
                Some(link) => match self.fetch_photo(link).await {
                    Ok(photo) => photo,
                    Err(e) => {
                        warn!(id = %self.id, position, error = %e, "photo degraded to empty");
                        Photo::default()
                    }
                },
                None => {
                    warn!(id = %self.id, position, "thumbnail without link or image");
                    Photo::default()
                }
            };
            photos.push(photo);
        }

        self.photos = Some((limit, photos.clone()));
        photos
    }

    async fn fetch_photo(&self, link: &ThumbnailLink) -> Result<Photo> {
        let url = self.client.resolve(&link.target)?;
        let html = self.client.fetch_url(&url).await?;
        let large = parse_primary_image(&Html::parse_document(&html))?;

        Ok(Photo {
            thumbnail: Some(link.thumbnail.clone()),
            large: Some(large),
        })
    }

    /// Videos of the gallery with their page and embed addresses.
    pub async fn video_urls(&mut self) -> Vec<Video> {
        if let Some(videos) = &self.videos {
            return videos.clone();
        }

        let result = self
            .document(ProfilePage::VideoGallery)
            .await
            .and_then(parse_video_ids);
        let Some(ids) = degrade("video_urls", &self.id, result) else {
            return Vec::new();
        };

        let videos = ids
            .iter()
            .map(|vid| -> Result<Video> {
                Ok(Video {
                    url: self.client.resolve(&video_path(vid))?,
                    embed_url: self.client.resolve(&embed_path(vid))?,
                })
            })
            .collect::<Result<Vec<_>>>();

        match degrade("video_urls", &self.id, videos) {
            Some(videos) => {
                self.videos = Some(videos.clone());
                videos
            }
            None => Vec::new(),
        }
    }
}

/// Turn a preset value into text; `None` for values that have no text form.
fn preset_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Swallow an extraction error for accessors that degrade to empty.
fn degrade<T>(field: &str, id: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(%id, field, error = %e, "extraction failed");
            None
        }
    }
}
