//! Plain-text excerpts from embeddable markup.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Replace every markup tag with a space and trim the result.
///
/// Entities are left as-is.
pub fn html_to_text(html: &str) -> String {
    TAG.replace_all(html, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        let html = r#"<blockquote class="twitter-tweet"><p lang="en">Hello <b>world</b></p>&mdash; a</blockquote>"#;
        assert_eq!(html_to_text(html), "Hello  world  &mdash; a");
    }

    #[test]
    fn test_plain_text_is_trimmed_only() {
        assert_eq!(html_to_text("  just text "), "just text");
        assert_eq!(html_to_text("<br/>"), "");
    }
}
