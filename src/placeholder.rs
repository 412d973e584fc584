//! Deterministic placeholder content for development without a backend.

use crate::types::Post;

/// Sample size materialized by the default bootstrap.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Generate `count` synthetic posts.
///
/// Record `i` (0-indexed) is titled `Test Post {i}` with slug
/// `test-post-{i}`; every other field is left unset. The output depends on
/// nothing but `count`, so fixtures built from it are reproducible.
pub fn placeholder_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| Post {
            title: format!("Test Post {i}"),
            slug: Some(format!("test-post-{i}")),
            ..Post::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exactly_count_records() {
        assert_eq!(placeholder_posts(0).len(), 0);
        assert_eq!(placeholder_posts(1).len(), 1);
        assert_eq!(placeholder_posts(100).len(), 100);
    }

    #[test]
    fn records_follow_index_convention() {
        let posts = placeholder_posts(25);
        for (i, post) in posts.iter().enumerate() {
            assert_eq!(post.title, format!("Test Post {i}"));
            assert_eq!(post.slug.as_deref(), Some(format!("test-post-{i}").as_str()));
        }
    }

    #[test]
    fn only_title_and_slug_are_set() {
        let posts = placeholder_posts(3);
        for post in &posts {
            assert_eq!(post.body, "");
            assert_eq!(post.photos, None);
            assert_eq!(post.tags, None);
            assert_eq!(post.post_date, None);
            assert_eq!(post.post_type, None);
        }
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(placeholder_posts(40), placeholder_posts(40));
    }
}
