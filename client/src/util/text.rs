//! Text formatting for job cards: word truncation, keyword highlighting and
//! posted-date display.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use time::Date;
use time::macros::format_description;

/// Words kept from a job description on a card.
pub const DESCRIPTION_WORD_LIMIT: usize = 30;

/// Shown when a posting has no usable date.
pub const RECENTLY_POSTED: &str = "Recently posted";

/// A run of text that either matched the highlight keyword or did not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self { text: text.to_owned(), matched: false }
    }

    fn hit(text: &str) -> Self {
        Self { text: text.to_owned(), matched: true }
    }
}

/// Keep the first `limit` space-separated words, appending `...` only when
/// something was cut.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() <= limit {
        return text.to_owned();
    }
    format!("{}...", words[..limit].join(" "))
}

/// Split `text` into plain and matched runs for `keyword`.
///
/// Matching is a literal, case-insensitive substring search, left to right
/// and non-overlapping. The keyword is never interpreted as a pattern.
/// Concatenating the returned segments reproduces `text` exactly.
pub fn highlight_segments(text: &str, keyword: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    if keyword.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        if let Some(len) = match_len_at(&text[pos..], keyword) {
            if plain_start < pos {
                segments.push(Segment::plain(&text[plain_start..pos]));
            }
            segments.push(Segment::hit(&text[pos..pos + len]));
            pos += len;
            plain_start = pos;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }
    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }
    segments
}

/// Byte length of the prefix of `haystack` that equals `needle` ignoring
/// case, if any.
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.chars();
    let mut end = 0;
    for expected in needle.chars() {
        let actual = hay.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end += actual.len_utf8();
    }
    Some(end)
}

/// Format an ISO date or date-time as `Jan 5, 2024`.
///
/// Only the calendar date prefix is read; the time and offset, if present,
/// are ignored.
pub fn format_posted_date(raw: Option<&str>) -> String {
    raw.and_then(parse_iso_date)
        .and_then(|date| {
            date.format(format_description!("[month repr:short] [day padding:none], [year]"))
                .ok()
        })
        .unwrap_or_else(|| RECENTLY_POSTED.to_owned())
}

fn parse_iso_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    let prefix = raw.get(..10)?;
    let rest = &raw[10..];
    if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
        return None;
    }
    Date::parse(prefix, format_description!("[year]-[month]-[day]")).ok()
}
