//! Pure aggregation over blog post collections.
//!
//! These functions reduce an ordered slice of blog records to summary
//! values: total likes, the single most-liked post, and the most prolific
//! or most-liked author. They hold no state, never mutate their input, and
//! touch no storage, so they are safe to call from any number of handlers
//! at once. Input order matters only for tie-breaking: the first record
//! (or first-seen author) to reach a maximum wins.

use crate::models::{Blog, FavoriteBlog};
use std::collections::HashMap;

/// Placeholder reduction kept from the earliest API scaffold. Always `1`.
pub fn dummy(_blogs: &[Blog]) -> u32 {
    1
}

/// Sum of likes across all posts. Zero for an empty slice.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The post with the highest like count, projected to title/author/likes
///
/// Returns `None` when there are no posts; the HTTP layer serializes that
/// as an empty object. Ties keep the earliest post in input order.
pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    let mut favorite: Option<&Blog> = None;

    for blog in blogs {
        match favorite {
            // Strict comparison keeps the earlier post on ties.
            Some(current) if blog.likes <= current.likes => {}
            _ => favorite = Some(blog),
        }
    }

    favorite.map(|blog| FavoriteBlog {
        title: blog.title.clone(),
        author: blog.author.clone(),
        likes: blog.likes,
    })
}

/// The author with the most posts. Empty string for an empty slice.
pub fn most_blogs(blogs: &[Blog]) -> String {
    top_author_by(blogs, |_| 1)
}

/// The author with the highest like total. Empty string for an empty slice.
pub fn most_likes(blogs: &[Blog]) -> String {
    top_author_by(blogs, |blog| blog.likes)
}

/// Group posts by author and pick the author with the highest total weight
///
/// One pass accumulates per-author totals, a second pass walks authors in
/// first-seen order so that ties resolve to the author who appeared first.
fn top_author_by<F>(blogs: &[Blog], weight: F) -> String
where
    F: Fn(&Blog) -> u64,
{
    let mut totals: HashMap<&str, u64> = HashMap::new();
    let mut seen_order: Vec<&str> = Vec::new();

    for blog in blogs {
        let author = blog.author.as_str();
        match totals.get_mut(author) {
            Some(total) => *total += weight(blog),
            None => {
                totals.insert(author, weight(blog));
                seen_order.push(author);
            }
        }
    }

    let mut top: Option<(&str, u64)> = None;
    for author in seen_order {
        let total = totals[author];
        if top.is_none_or(|(_, best)| total > best) {
            top = Some((author, total));
        }
    }

    top.map(|(author, _)| author.to_string())
        .unwrap_or_default()
}
