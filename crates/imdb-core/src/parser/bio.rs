//! Biography page parser for IMDb

use scraper::Html;

use crate::error::{ImdbError, Result};
use crate::text::{strip_italic_tail, unescape_html};

use super::selector;

/// Extract the mini biography from `/name/<id>/bio`.
///
/// Takes the inner markup of the first `.soda p` block, drops the italic
/// author credit and everything after it, then decodes HTML entities.
///
/// # Errors
/// `ImdbError::ElementNotFound` if the page has no biography block.
pub fn parse_bio(document: &Html) -> Result<String> {
    let block = selector(".soda p")?;
    let paragraph = document
        .select(&block)
        .next()
        .ok_or_else(|| ImdbError::ElementNotFound(".soda p".to_string()))?;

    let markup = paragraph.inner_html();
    Ok(unescape_html(strip_italic_tail(&markup)).trim().to_string())
}
