//! Tag list codec: a multi-valued field stored in one cell.
//!
//! Tags are joined with a comma and no escaping. A tag name that contains the
//! delimiter cannot survive a round trip, which is why tag names containing
//! it are rejected at creation time (see `utils::validation`).

/// Separator between tag names inside the `tags` cell.
pub const TAG_DELIMITER: char = ',';

/// Join tags into a single cell value.
pub fn encode_tags<S: AsRef<str>>(tags: &[S]) -> String {
    let mut out = String::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            out.push(TAG_DELIMITER);
        }
        out.push_str(tag.as_ref());
    }
    out
}

/// Split a cell value into tags.
///
/// Pieces are trimmed and empty pieces dropped; order is preserved.
pub fn decode_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_DELIMITER)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_joins_without_spaces() {
        assert_eq!(encode_tags(&["sample", "tech"]), "sample,tech");
        assert_eq!(encode_tags::<&str>(&[]), "");
        assert_eq!(encode_tags(&["solo"]), "solo");
    }

    #[test]
    fn test_decode_trims_and_drops_empty() {
        assert_eq!(decode_tags(" a , b,,c ,"), vec!["a", "b", "c"]);
        assert!(decode_tags("").is_empty());
        assert!(decode_tags("  ").is_empty());
        assert!(decode_tags(",,").is_empty());
    }

    #[test]
    fn test_round_trip_for_clean_names() {
        let cases: Vec<Vec<String>> = vec![
            vec![],
            vec!["x".into()],
            vec!["x".into(), "y".into()],
            vec!["rust lang".into(), "日本語".into(), "x".into()],
            vec!["dup".into(), "dup".into()],
        ];
        for tags in cases {
            assert_eq!(decode_tags(&encode_tags(&tags)), tags);
        }
    }

    #[test]
    fn test_delimiter_inside_name_does_not_round_trip() {
        let tags = vec!["a,b".to_string()];
        assert_eq!(decode_tags(&encode_tags(&tags)), vec!["a", "b"]);
    }
}
