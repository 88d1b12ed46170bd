//! Main profile page parser for IMDb
//!
//! Extracts the fields shown on `/name/<id>/`: name, poster, birth info,
//! the filmography jump list and the credit rows of each category.

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::{ImdbError, Result};
use crate::text::squish;
use crate::types::Work;

use super::selector;

/// Prefix of the id carried by each filmography section heading
const FILMO_HEAD_PREFIX: &str = "filmo-head-";

/// Extract the poster image address.
pub fn parse_avatar(document: &Html) -> Option<String> {
    let poster = selector("#name-poster").ok()?;
    document
        .select(&poster)
        .next()?
        .value()
        .attr("src")
        .map(str::to_string)
}

/// Extract the display name from the first `h1`.
pub fn parse_name(document: &Html) -> Option<String> {
    let heading = selector("h1").ok()?;
    let name = document
        .select(&heading)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Extract the birth info line, e.g. `"Born: 1 January 1970"`.
///
/// # Errors
/// `ImdbError::ElementNotFound` if the page has no birth info block.
pub fn parse_birth_date(document: &Html) -> Result<String> {
    let born = selector("#name-born-info")?;
    let element = document
        .select(&born)
        .next()
        .ok_or_else(|| ImdbError::ElementNotFound("#name-born-info".to_string()))?;

    Ok(squish(&element.text().collect::<String>()))
}

/// Extract the credit categories listed in the filmography jump bar.
///
/// # Errors
/// `ImdbError::ElementNotFound` if the jump bar is missing.
pub fn parse_categories(document: &Html) -> Result<Vec<String>> {
    let jumpto = selector("#jumpto")?;
    let links = selector("a")?;

    let nav = document
        .select(&jumpto)
        .next()
        .ok_or_else(|| ImdbError::ElementNotFound("#jumpto".to_string()))?;

    Ok(nav
        .select(&links)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect())
}

/// Turn a category label into the suffix used by its section heading id.
///
/// `"Music Department"` -> `"music_department"`.
pub fn category_slug(category: &str) -> String {
    category.trim().to_lowercase().replace(' ', "_")
}

/// Extract the works credited under `category`.
///
/// The section heading is matched case-insensitively; the credit list is the
/// heading's next element sibling and each element child of it is one row.
/// Rows without a title id are skipped and logged at debug level.
///
/// # Errors
/// `ImdbError::ElementNotFound` if there is no heading for the category or
/// the heading has no list after it.
pub fn parse_works(document: &Html, category: &str) -> Result<Vec<Work>> {
    let headings = selector(&format!("[id^='{}']", FILMO_HEAD_PREFIX))?;
    let wanted = format!("{}{}", FILMO_HEAD_PREFIX, category_slug(category));

    let heading = document
        .select(&headings)
        .find(|el| {
            el.value()
                .id()
                .is_some_and(|id| id.eq_ignore_ascii_case(&wanted))
        })
        .ok_or_else(|| ImdbError::ElementNotFound(format!("#{}", wanted)))?;

    let list = heading
        .next_siblings()
        .find_map(ElementRef::wrap)
        .ok_or_else(|| ImdbError::ElementNotFound(format!("credit list after #{}", wanted)))?;

    Ok(list
        .children()
        .filter_map(ElementRef::wrap)
        .filter_map(|row| {
            let work = parse_work_row(&row);
            if work.is_none() {
                debug!(category, row = %row.html(), "skipping credit row without title id");
            }
            work
        })
        .collect())
}

/// Parse a single credit row.
fn parse_work_row(row: &ElementRef) -> Option<Work> {
    let link = selector("a[href*='/title/']")
        .ok()
        .and_then(|sel| row.select(&sel).next());

    let id = row
        .value()
        .id()
        .and_then(extract_title_id)
        .or_else(|| link.and_then(|a| a.value().attr("href")).and_then(extract_title_id))?;

    let title = link
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    Some(Work { id, title })
}

/// Extract the numeric part of a title id from an element id or a link.
///
/// # Examples
/// ```
/// use imdb_core::parser::extract_title_id;
///
/// assert_eq!(extract_title_id("actor-tt0111161"), Some("0111161".to_string()));
/// assert_eq!(extract_title_id("/title/tt0068646/?ref_=nm_flmg"), Some("0068646".to_string()));
/// assert_eq!(extract_title_id("no digits"), None);
/// ```
pub fn extract_title_id(text: &str) -> Option<String> {
    let tagged = regex_lite::Regex::new(r"tt(\d+)").ok()?;
    if let Some(caps) = tagged.captures(text) {
        return Some(caps.get(1)?.as_str().to_string());
    }

    let bare = regex_lite::Regex::new(r"\d+").ok()?;
    bare.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r##"
        <html>
        <body>
            <img id="name-poster" src="https://m.media-amazon.com/images/M/poster.jpg">
            <h1 class="header">
                <span class="itemprop">Jane Doe</span>
            </h1>
            <div id="name-born-info" class="txt-block">
                <h4>Born:</h4>
                <time datetime="1970-1-1">1 January 1970</time>
            </div>
            <div id="jumpto">
                Jump to: <a href="#actor">Actor</a> |
                <a href="#director">Director</a> |
                <a href="#music_department">Music Department</a>
            </div>
            <div id="filmo-head-actor" class="head">Actor (2 credits)</div>
            <div class="filmo-category-section">
                <div class="filmo-row odd" id="actor-tt0111161">
                    <b><a href="/title/tt0111161/">The First</a></b>
                </div>
                <div class="filmo-row even" id="actor-tt0068646">
                    <b><a href="/title/tt0068646/">The Second</a></b>
                </div>
            </div>
            <div id="filmo-head-director" class="head">Director (1 credit)</div>
            <div class="filmo-category-section">
                <div class="filmo-row odd">
                    <b><a href="/title/tt0000042/?ref_=nm_flmg_dr_1">Directed</a></b>
                </div>
            </div>
            <div id="filmo-head-music_department" class="head">Music Department</div>
            <div class="filmo-category-section"></div>
        </body>
        </html>
    "##;

    fn profile() -> Html {
        Html::parse_document(PROFILE)
    }

    #[test]
    fn test_parse_avatar() {
        assert_eq!(
            parse_avatar(&profile()),
            Some("https://m.media-amazon.com/images/M/poster.jpg".to_string())
        );
        assert_eq!(parse_avatar(&Html::parse_document("<html></html>")), None);
    }

    #[test]
    fn test_parse_name_trims_heading_text() {
        assert_eq!(parse_name(&profile()), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_parse_name_missing_or_blank() {
        assert_eq!(parse_name(&Html::parse_document("<body></body>")), None);
        assert_eq!(parse_name(&Html::parse_document("<h1>   </h1>")), None);
    }

    #[test]
    fn test_parse_birth_date_is_squished() {
        assert_eq!(
            parse_birth_date(&profile()).unwrap(),
            "Born: 1 January 1970"
        );
    }

    #[test]
    fn test_parse_birth_date_missing() {
        let result = parse_birth_date(&Html::parse_document("<body></body>"));
        assert!(matches!(result, Err(ImdbError::ElementNotFound(_))));
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!(
            parse_categories(&profile()).unwrap(),
            vec!["Actor", "Director", "Music Department"]
        );
    }

    #[test]
    fn test_parse_categories_missing_nav() {
        let result = parse_categories(&Html::parse_document("<body></body>"));
        assert!(matches!(result, Err(ImdbError::ElementNotFound(_))));
    }

    #[test]
    fn test_category_slug() {
        assert_eq!(category_slug("Actor"), "actor");
        assert_eq!(category_slug(" Music Department "), "music_department");
    }

    #[test]
    fn test_parse_works_from_row_ids() {
        let works = parse_works(&profile(), "actor").unwrap();
        assert_eq!(works.len(), 2);
        assert_eq!(works[0].id, "0111161");
        assert_eq!(works[0].title.as_deref(), Some("The First"));
        assert_eq!(works[1].id, "0068646");
    }

    #[test]
    fn test_parse_works_falls_back_to_link() {
        let works = parse_works(&profile(), "Director").unwrap();
        assert_eq!(
            works,
            vec![Work {
                id: "0000042".to_string(),
                title: Some("Directed".to_string()),
            }]
        );
    }

    #[test]
    fn test_parse_works_skips_rows_without_title_id() {
        let html = r#"
            <div id="filmo-head-writer" class="head">Writer</div>
            <div class="filmo-category-section">
                <div class="filmo-row odd" id="writer-tt0000007"><b><a href="/title/tt0000007/">Kept</a></b></div>
                <div class="filmo-row even"><b>Untitled project</b></div>
            </div>
        "#;

        let works = parse_works(&Html::parse_document(html), "writer").unwrap();
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].id, "0000007");
    }

    #[test]
    fn test_parse_works_empty_section() {
        let works = parse_works(&profile(), "music department").unwrap();
        assert!(works.is_empty());
    }

    #[test]
    fn test_parse_works_unknown_category() {
        let result = parse_works(&profile(), "producer");
        match result {
            Err(ImdbError::ElementNotFound(msg)) => assert!(msg.contains("filmo-head-producer")),
            other => panic!("Expected ElementNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_title_id() {
        assert_eq!(extract_title_id("actor-tt0111161"), Some("0111161".to_string()));
        assert_eq!(extract_title_id("/title/tt0068646/"), Some("0068646".to_string()));
        assert_eq!(extract_title_id("row-42"), Some("42".to_string()));
        assert_eq!(extract_title_id(""), None);
    }
}
