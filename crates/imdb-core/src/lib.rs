//! IMDb Scraper Core Library
//!
//! Lazily scrapes the public profile pages of people on IMDb.
//!
//! # Features
//! - One fetch per profile sub-page, parsed documents cached per [`Person`]
//! - Name, avatar, biography, birth date and age
//! - Credit categories and the works credited under each of them
//! - Photo and video galleries
//! - Named `works_as_<category>` operations resolved against the person's categories

pub mod client;
pub mod error;
pub mod operation;
pub mod parser;
pub mod person;
pub mod scraper;
pub mod text;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, ImdbClient};
pub use error::{ImdbError, Result};
pub use operation::Operation;
pub use person::{Person, DEFAULT_PHOTO_LIMIT};
pub use self::scraper::ImdbScraper;
pub use types::{Photo, ProfilePage, Video, Work};
