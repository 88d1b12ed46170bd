//! Main IMDb scraper API
//!
//! Owns a configured HTTP client and hands out [`Person`] profiles that
//! share it.

use std::collections::HashMap;

use serde_json::Value;

use crate::client::{ClientConfig, ImdbClient};
use crate::error::Result;
use crate::person::Person;

/// Entry point for scraping IMDb person profiles
///
/// # Example
/// ```no_run
/// use imdb_core::ImdbScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = ImdbScraper::new()?;
///     let mut person = scraper.person("nm0000093")?;
///
///     println!("{:?} ({:?})", person.name().await, person.birth_date().await?);
///     for work in person.call("works_as_actor").await? {
///         println!("  {}", work.url());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ImdbScraper {
    client: ImdbClient,
}

impl ImdbScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = ImdbClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = ImdbClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Create a new scraper with a pre-built client.
    pub fn with_client(client: ImdbClient) -> Self {
        Self { client }
    }

    /// Profile of the person with the given id. Nothing is fetched yet.
    ///
    /// # Errors
    /// `ImdbError::InvalidId` if the id is blank or contains a path separator.
    pub fn person(&self, id: &str) -> Result<Person> {
        Person::new(id, self.client.clone())
    }

    /// Profile with some attributes already known, see [`Person::with_attributes`].
    pub fn person_with_attributes(
        &self,
        id: &str,
        attributes: &HashMap<String, Value>,
    ) -> Result<Person> {
        Person::with_attributes(id, self.client.clone(), attributes)
    }
}
