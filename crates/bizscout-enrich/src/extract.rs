//! Parse-then-validate for raw model replies.

use std::sync::LazyLock;

use bizscout_core::is_http_url;
use regex::Regex;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)```(?:json)?\s*(.*?)\s*```").expect("valid code fence regex")
});

/// Outcome of reading one model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    /// The reply parsed and produced a usable value.
    Found(T),
    /// The reply parsed but had nothing usable (null, empty, or rejected URLs).
    Nothing,
    /// The reply was not the JSON shape that was asked for.
    Malformed(String),
}

/// Returns the body of the first fenced block, or the trimmed input.
#[must_use]
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    CODE_FENCE
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .map_or(trimmed, |m| m.as_str().trim())
}

fn parse_reply(raw: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| format!("invalid JSON: {e}"))
}

/// Reads a `{"website": "<url>" | null}` reply.
///
/// A string value is only accepted when it is an HTTP(S) URL.
#[must_use]
pub fn extract_website(raw: &str) -> Extraction<String> {
    let value = match parse_reply(raw) {
        Ok(v) => v,
        Err(reason) => return Extraction::Malformed(reason),
    };

    let Some(object) = value.as_object() else {
        return Extraction::Malformed("expected a JSON object".to_string());
    };

    match object.get("website") {
        None | Some(serde_json::Value::Null) => Extraction::Nothing,
        Some(serde_json::Value::String(url)) => {
            let url = url.trim();
            if is_http_url(url) {
                Extraction::Found(url.to_string())
            } else {
                tracing::debug!(value = url, "rejecting website without an HTTP(S) scheme");
                Extraction::Nothing
            }
        }
        Some(_) => Extraction::Malformed("\"website\" is neither a string nor null".to_string()),
    }
}

/// Reads a JSON array of social profile URLs.
///
/// Non-string and non-HTTP(S) entries are dropped silently; duplicates are
/// collapsed keeping the first occurrence.
#[must_use]
pub fn extract_socials(raw: &str) -> Extraction<Vec<String>> {
    let value = match parse_reply(raw) {
        Ok(v) => v,
        Err(reason) => return Extraction::Malformed(reason),
    };

    let Some(items) = value.as_array() else {
        return Extraction::Malformed("expected a JSON array".to_string());
    };

    let mut links: Vec<String> = Vec::new();
    for url in items.iter().filter_map(serde_json::Value::as_str) {
        let url = url.trim();
        if is_http_url(url) && !links.iter().any(|l| l == url) {
            links.push(url.to_string());
        }
    }

    if links.is_empty() {
        Extraction::Nothing
    } else {
        Extraction::Found(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_code_fence_unwraps_json_block() {
        let raw = "```json\n{\"website\": null}\n```";
        assert_eq!(strip_code_fence(raw), "{\"website\": null}");
    }

    #[test]
    fn strip_code_fence_handles_bare_and_uppercase_fences() {
        assert_eq!(strip_code_fence("```\n[]\n```"), "[]");
        assert_eq!(strip_code_fence("```JSON [1] ```"), "[1]");
    }

    #[test]
    fn strip_code_fence_leaves_plain_text() {
        assert_eq!(strip_code_fence("  [\"x\"]  "), "[\"x\"]");
    }

    #[test]
    fn website_found() {
        assert_eq!(
            extract_website(r#"{"website": "https://sunrise.example"}"#),
            Extraction::Found("https://sunrise.example".to_string())
        );
    }

    #[test]
    fn website_inside_code_fence() {
        let raw = "Here you go:\n```json\n{\"website\": \"http://loaf.example/\"}\n```";
        assert_eq!(
            extract_website(raw),
            Extraction::Found("http://loaf.example/".to_string())
        );
    }

    #[test]
    fn website_null_is_nothing() {
        assert_eq!(extract_website(r#"{"website": null}"#), Extraction::Nothing);
        assert_eq!(extract_website("{}"), Extraction::Nothing);
    }

    #[test]
    fn website_without_scheme_is_rejected() {
        assert_eq!(
            extract_website(r#"{"website": "not-a-url"}"#),
            Extraction::Nothing
        );
        assert_eq!(
            extract_website(r#"{"website": "www.sunrise.example"}"#),
            Extraction::Nothing
        );
    }

    #[test]
    fn website_unparseable_is_malformed() {
        assert!(matches!(
            extract_website("I think it is sunrise.example"),
            Extraction::Malformed(_)
        ));
        assert!(matches!(
            extract_website(r#"["https://sunrise.example"]"#),
            Extraction::Malformed(_)
        ));
        assert!(matches!(
            extract_website(r#"{"website": 42}"#),
            Extraction::Malformed(_)
        ));
    }

    #[test]
    fn socials_filters_and_dedupes() {
        let raw = r#"["https://facebook.com/sunrise", 7, "instagram.com/sunrise",
                      "https://facebook.com/sunrise", "https://instagram.com/sunrise"]"#;
        assert_eq!(
            extract_socials(raw),
            Extraction::Found(vec![
                "https://facebook.com/sunrise".to_string(),
                "https://instagram.com/sunrise".to_string(),
            ])
        );
    }

    #[test]
    fn socials_empty_array_is_nothing() {
        assert_eq!(extract_socials("[]"), Extraction::Nothing);
        assert_eq!(extract_socials(r#"["@sunrise"]"#), Extraction::Nothing);
    }

    #[test]
    fn socials_in_code_fence() {
        let raw = "```json\n[\"https://x.com/sunrise\"]\n```";
        assert_eq!(
            extract_socials(raw),
            Extraction::Found(vec!["https://x.com/sunrise".to_string()])
        );
    }

    #[test]
    fn socials_non_array_is_malformed() {
        assert!(matches!(
            extract_socials(r#"{"links": []}"#),
            Extraction::Malformed(_)
        ));
        assert!(matches!(extract_socials("none"), Extraction::Malformed(_)));
    }
}
