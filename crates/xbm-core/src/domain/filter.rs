//! Client-side bookmark filtering.

use super::Bookmark;

/// Search text and tag selection applied to a bookmark list.
///
/// Both criteria must match. A blank query matches everything; any other
/// query is compared case-insensitively, untrimmed, against `text` and
/// `author_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkFilter {
    pub query: Option<String>,
    pub tag: Option<String>,
}

impl BookmarkFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        self.matches_query(bookmark) && self.matches_tag(bookmark)
    }

    fn matches_query(&self, bookmark: &Bookmark) -> bool {
        let Some(query) = self.query.as_deref() else {
            return true;
        };
        if query.trim().is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        bookmark.text.to_lowercase().contains(&needle)
            || bookmark.author_name.to_lowercase().contains(&needle)
    }

    fn matches_tag(&self, bookmark: &Bookmark) -> bool {
        self.tag.as_deref().is_none_or(|tag| bookmark.has_tag(tag))
    }

    /// Apply the filter, preserving order.
    pub fn apply<'a>(&self, bookmarks: &'a [Bookmark]) -> Vec<&'a Bookmark> {
        bookmarks.iter().filter(|b| self.matches(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(id: &str, author: &str, text: &str, tags: &[&str]) -> Bookmark {
        Bookmark {
            id: id.to_string(),
            url: format!("https://twitter.com/{author}/status/1"),
            author_name: author.to_string(),
            text: text.to_string(),
            embedded_html: String::new(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            saved_at: String::new(),
        }
    }

    fn library() -> Vec<Bookmark> {
        vec![
            bookmark("1", "Alice", "Rust async patterns", &["tech"]),
            bookmark("2", "bob", "Cooking with pumpkins", &["food", "sample"]),
            bookmark("3", "Carol", "More RUST tips", &["tech", "sample"]),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let items = library();
        assert_eq!(BookmarkFilter::new().apply(&items).len(), 3);
        assert_eq!(BookmarkFilter::new().with_query("   ").apply(&items).len(), 3);
    }

    #[test]
    fn test_query_is_case_insensitive_over_text_and_author() {
        let items = library();
        let ids: Vec<_> = BookmarkFilter::new()
            .with_query("rust")
            .apply(&items)
            .into_iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);

        let by_author = BookmarkFilter::new().with_query("BOB").apply(&items);
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].id, "2");
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_query() {
        let items = library();
        let hits = BookmarkFilter::new().with_query(" rust").apply(&items);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");

        let hits = BookmarkFilter::new().with_query("patterns ").apply(&items);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_tag_and_query_must_both_match() {
        let items = library();
        let hits = BookmarkFilter::new()
            .with_query("rust")
            .with_tag("sample")
            .apply(&items);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let items = library();
        assert!(BookmarkFilter::new().with_tag("nope").apply(&items).is_empty());
    }
}
