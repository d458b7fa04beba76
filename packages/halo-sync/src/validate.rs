//! Input validation for user-supplied front-matter fields.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Lowercase alphanumeric groups separated by single hyphens, no leading or
/// trailing hyphen.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Parse a publish time, accepting only the canonical form the front-matter
/// stores: `YYYY-MM-DDTHH:MM:SSZ`. Sub-second precision and non-UTC offsets
/// are rejected even though they parse as RFC 3339.
pub fn parse_publish_time(value: &str) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value).ok()?;
    let utc = parsed.with_timezone(&Utc);
    (canonical_publish_time(&utc) == value).then_some(utc)
}

pub fn is_valid_publish_time(value: &str) -> bool {
    parse_publish_time(value).is_some()
}

/// Canonical publish time: ISO-8601 UTC, whole seconds, trailing `Z`.
pub fn canonical_publish_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Derive a slug from a display name or title: ASCII alphanumerics lowercased,
/// every other run of characters collapsed into a single hyphen, ends trimmed.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_valid_slugs() {
        assert!(is_valid_slug("my-post-1"));
        assert!(is_valid_slug("hello"));
        assert!(is_valid_slug("a-b-c"));
    }

    #[test]
    fn test_invalid_slugs() {
        assert!(!is_valid_slug("My_Post"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("有中文"));
    }

    #[test]
    fn test_publish_time_canonical_form_only() {
        assert!(is_valid_publish_time("2024-01-02T03:04:05Z"));
        // sub-second precision rejected
        assert!(!is_valid_publish_time("2024-01-02T03:04:05.123Z"));
        // non-UTC offsets rejected
        assert!(!is_valid_publish_time("2024-01-02T03:04:05+08:00"));
        assert!(!is_valid_publish_time("2024-01-02T03:04:05+00:00"));
        assert!(!is_valid_publish_time("not-a-date"));
        assert!(!is_valid_publish_time("2024-01-02"));
    }

    #[test]
    fn test_canonical_publish_time_truncates_to_seconds() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(987);
        assert_eq!(canonical_publish_time(&time), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_parse_publish_time_round_trips() {
        let parsed = parse_publish_time("2024-01-02T03:04:05Z").unwrap();
        assert_eq!(canonical_publish_time(&parsed), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello"), "hello");
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
        assert_eq!(slugify("Rust 2024 Edition"), "rust-2024-edition");
        // non-ASCII is dropped rather than transliterated
        assert_eq!(slugify("中文 title"), "title");
        assert_eq!(slugify("中文"), "");
    }

    #[test]
    fn test_slugified_output_is_valid() {
        assert!(is_valid_slug(&slugify("Hello, World!")));
    }
}
