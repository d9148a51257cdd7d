//! Sample data the mock store is seeded with.

use xbm_core::{Bookmark, Tag};

/// Identity reported by `MockStore::init`.
pub const MOCK_STORE_ID: &str = "mock-spreadsheet-id";

struct SeedBookmark {
    id: &'static str,
    handle: &'static str,
    status: &'static str,
    author: &'static str,
    text: &'static str,
    tags: &'static [&'static str],
    saved_at: &'static str,
}

const SEED_BOOKMARKS: &[SeedBookmark] = &[
    SeedBookmark {
        id: "mock-bookmark-1",
        handle: "chomukocomeon",
        status: "2016781181120106719",
        author: "ちょむこ",
        text: "離乳食のレシピをまとめました！ブロッコリーとかぼちゃのポタージュが大人気です",
        tags: &["sample"],
        saved_at: "2026-02-20T00:00:00.000Z",
    },
    SeedBookmark {
        id: "mock-bookmark-2",
        handle: "kensuu",
        status: "2023300749342675250",
        author: "けんすう",
        text: "けんすうのツイート：スタートアップの話",
        tags: &["sample", "tech"],
        saved_at: "2026-02-20T06:00:00.000Z",
    },
    SeedBookmark {
        id: "mock-bookmark-3",
        handle: "May_Roma",
        status: "2022714523333902444",
        author: "May_Roma めいろま 谷本真由美",
        text: "May_Romaのツイート：テクノロジーと社会",
        tags: &["tech"],
        saved_at: "2026-02-20T12:00:00.000Z",
    },
];

/// The three seeded bookmarks, oldest first.
pub fn mock_bookmarks() -> Vec<Bookmark> {
    SEED_BOOKMARKS
        .iter()
        .map(|seed| {
            let url = format!("https://twitter.com/{}/status/{}", seed.handle, seed.status);
            let embedded_html = format!(
                r#"<blockquote class="twitter-tweet"><p lang="ja" dir="ltr">{text}</p>&mdash; {author} (@{handle}) <a href="{url}">February 20, 2026</a></blockquote>"#,
                text = seed.text,
                author = seed.author,
                handle = seed.handle,
            );
            Bookmark {
                id: seed.id.to_string(),
                url,
                author_name: seed.author.to_string(),
                text: seed.text.to_string(),
                embedded_html,
                tags: seed.tags.iter().map(|t| (*t).to_string()).collect(),
                saved_at: seed.saved_at.to_string(),
            }
        })
        .collect()
}

pub fn mock_tags() -> Vec<Tag> {
    [("mock-tag-1", "sample"), ("mock-tag-2", "tech")]
        .into_iter()
        .map(|(id, name)| Tag {
            id: id.to_string(),
            name: name.to_string(),
            created_at: "2026-02-01T00:00:00.000Z".to_string(),
        })
        .collect()
}
