//! Text helpers for renderer fields
//!
//! Renderer text comes either as `{"simpleText": "..."}` or as a list of
//! formatted runs `{"runs": [{"text": "..."}, ...]}`. Counts and durations are
//! localized display strings that have to be turned back into numbers.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// A number, then the word right after it (`views`, `M`, `Mio.`)
static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d[\d,.\s]*)(\p{L}+\.?)?").unwrap());

/// Text of a `simpleText` / `runs` object
pub fn text_from_object(value: &Value) -> Option<String> {
    if let Some(text) = value.get("simpleText").and_then(Value::as_str) {
        return Some(text.to_string());
    }

    let runs = value.get("runs")?.as_array()?;
    let text: String = runs
        .iter()
        .filter_map(|run| run.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Make protocol-relative thumbnail URLs absolute
pub fn fix_thumbnail_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// URL of the last (largest) thumbnail in a `{"thumbnails": [...]}` object
pub fn best_thumbnail(value: &Value) -> Option<String> {
    value
        .get("thumbnails")?
        .as_array()?
        .last()?
        .get("url")?
        .as_str()
        .map(fix_thumbnail_url)
}

/// Parse a display count such as `1,234,567 views` or `1.2M subscribers`
///
/// Counts are read as English formatted. `K`, `M` and `B` are the only
/// magnitude suffixes understood; an abbreviated word after the number that is
/// not one of them (`1,2 Mio.`) makes the count unknown rather than wrong.
/// Texts without digits yield 0 only when they start with "No".
pub fn parse_count(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let Some(caps) = COUNT_RE.captures(trimmed) else {
        return trimmed
            .to_ascii_lowercase()
            .starts_with("no ")
            .then_some(0);
    };

    let number: String = caps[1].chars().filter(|c| !c.is_whitespace()).collect();
    let word = caps.get(2).map_or("", |m| m.as_str());
    let multiplier = match word.to_ascii_uppercase().as_str() {
        "K" => 1_000.0,
        "M" => 1_000_000.0,
        "B" => 1_000_000_000.0,
        _ if word.ends_with('.') => return None,
        _ => return number.replace([',', '.'], "").parse().ok(),
    };

    let value: f64 = number.replace(',', ".").parse().ok()?;
    Some((value * multiplier).round() as i64)
}

/// Parse a `h:mm:ss` / `m:ss` duration into seconds
///
/// `None` for anything that is not a colon-separated number or would
/// overflow.
pub fn parse_duration(text: &str) -> Option<i64> {
    let mut seconds = 0i64;
    for part in text.trim().split(':') {
        let value: i64 = part.trim().parse().ok()?;
        seconds = seconds.checked_mul(60)?.checked_add(value)?;
    }
    Some(seconds)
}
