//! Blog post aggregate.

use crate::domain::foundation::{PostId, Timestamp};

/// Maximum number of tags kept on a post.
const MAX_TAGS: usize = 10;

/// A published article on the public blog.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    /// URL of the stored cover image; empty when none was uploaded.
    pub cover_image: String,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BlogPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        cover_image: impl Into<String>,
        tags: Vec<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: PostId::new(),
            title: title.into(),
            content: content.into(),
            author: author.into(),
            cover_image: cover_image.into(),
            tags: normalize_tags(tags),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Cleans up user-supplied tags: trims, drops empties, removes duplicates
/// while keeping first-seen order, and caps at ten.
pub fn normalize_tags(raw: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(raw.len().min(MAX_TAGS));
    for tag in raw {
        let tag = tag.trim();
        if tag.is_empty() || seen.iter().any(|s| s == tag) {
            continue;
        }
        seen.push(tag.to_string());
        if seen.len() == MAX_TAGS {
            break;
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_trims_and_drops_empties() {
        let tags = normalize_tags(vec![
            "  rust ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "web".to_string(),
        ]);
        assert_eq!(tags, vec!["rust", "web"]);
    }

    #[test]
    fn normalize_dedupes_keeping_first_occurrence() {
        let tags = normalize_tags(vec![
            "a".to_string(),
            "b".to_string(),
            "a ".to_string(),
            " b".to_string(),
        ]);
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn normalize_caps_at_ten() {
        let tags = normalize_tags((0..25).map(|i| format!("tag{}", i)).collect());
        assert_eq!(tags.len(), 10);
        assert_eq!(tags[0], "tag0");
        assert_eq!(tags[9], "tag9");
    }

    #[test]
    fn new_post_normalizes_tags() {
        let post = BlogPost::new(
            "Title",
            "Body",
            "Author",
            "",
            vec![" x ".to_string(), "x".to_string()],
            Timestamp::now(),
        );
        assert_eq!(post.tags, vec!["x"]);
    }

    proptest! {
        #[test]
        fn normalized_tags_are_trimmed_unique_and_bounded(
            raw in proptest::collection::vec(".{0,20}", 0..30)
        ) {
            let tags = normalize_tags(raw);
            prop_assert!(tags.len() <= 10);
            for (i, tag) in tags.iter().enumerate() {
                prop_assert!(!tag.is_empty());
                prop_assert_eq!(tag.trim(), tag.as_str());
                prop_assert!(!tags[..i].contains(tag));
            }
        }
    }
}
