//! Blog statistics response models.

use paperclip::actix::Apiv2Schema;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Projection of the most-liked blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: u64,
}

/// Response model for the blog statistics endpoint
///
/// `favorite_blog` serializes as an empty object when there are no posts,
/// and the author fields fall back to an empty string.
#[derive(Debug, Clone, Serialize, Apiv2Schema)]
pub struct BlogStatsResponse {
    pub total_likes: u64,
    #[serde(serialize_with = "favorite_or_empty")]
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: String,
    pub most_likes: String,
}

fn favorite_or_empty<S>(favorite: &Option<FavoriteBlog>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match favorite {
        Some(blog) => blog.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
