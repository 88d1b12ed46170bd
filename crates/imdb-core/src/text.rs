//! Text helpers shared by the parsers and the preset handling.

/// Decode HTML entities (`&amp;`, `&#39;`, `&eacute;`, ...).
pub fn unescape_html(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Drop newlines, collapse whitespace runs to one space and trim.
///
/// Newlines are removed outright rather than turned into spaces, matching
/// how the profile markup splits labels from values.
pub fn squish(text: &str) -> String {
    text.replace('\n', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean a caller supplied preset value: strip `"` and surrounding whitespace.
pub fn sanitize_preset(value: &str) -> String {
    value.replace('"', "").trim().to_string()
}

/// Cut markup at the first `<i>` tag, keeping what comes before it.
///
/// Biographies end with an italic "written by" credit that is not part of
/// the text.
pub fn strip_italic_tail(markup: &str) -> &str {
    match markup.find("<i>") {
        Some(idx) => &markup[..idx],
        None => markup,
    }
}

/// Parse the last run of digits in the text as a year.
///
/// `"Born: 1 January 1970"` -> `Some(1970)`.
pub fn trailing_year(text: &str) -> Option<i32> {
    let re = regex_lite::Regex::new(r"(\d+)\D*$").ok()?;
    let caps = re.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}
