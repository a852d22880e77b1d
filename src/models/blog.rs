//! Blog post data models.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// A stored blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    /// ID of the user who created the post, when it was created through
    /// an authenticated request
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<String>,
}

/// Request model for creating a blog post
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct NewBlogRequest {
    pub title: String,
    pub author: String,
    pub url: String,
    /// Like count, defaults to zero when omitted
    #[serde(default)]
    pub likes: u64,
}

/// Request model for updating a blog post's like count
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct UpdateBlogRequest {
    pub likes: u64,
}
