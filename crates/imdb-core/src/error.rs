//! Error types for the IMDb scraper
//!
//! Network failures (`HttpError`, `NotFound`) and structure mismatches
//! (`ElementNotFound`, `ParseError`) are kept apart so callers of the
//! propagating accessors can tell them apart.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for IMDb scraper operations
#[derive(Error, Debug)]
pub enum ImdbError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Page content did not have the expected shape
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Required HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Requested page does not exist (HTTP 404)
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Invalid person id provided
    #[error("Invalid IMDb id: {0:?}")]
    InvalidId(String),

    /// Operation name does not resolve to anything this person supports
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl ImdbError {
    /// Whether the failure happened on the wire rather than in the markup.
    pub fn is_network(&self) -> bool {
        matches!(self, ImdbError::HttpError(_) | ImdbError::NotFound(_))
    }
}

/// Serialize ImdbError as its display string
impl Serialize for ImdbError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for IMDb scraper operations
pub type Result<T> = std::result::Result<T, ImdbError>;
