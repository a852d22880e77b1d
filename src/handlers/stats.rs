//! Blog statistics endpoint handler.

use crate::{
    models::BlogStatsResponse,
    services::{aggregator, store::BlogStore},
};
use actix_web::{Error, Result, web};
use paperclip::actix::api_v2_operation;

/// Blog statistics endpoint
///
/// Reduces the full blog list to summary values: the total like count,
/// the single most-liked post, the most prolific author, and the author
/// with the most accumulated likes.
#[api_v2_operation(
    summary = "Blog Statistics",
    description = "Returns aggregate statistics over all stored blog posts.",
    tags("Blogs"),
    responses(
        (status = 200, description = "Aggregated statistics", body = BlogStatsResponse)
    )
)]
pub async fn blog_stats(store: web::Data<BlogStore>) -> Result<web::Json<BlogStatsResponse>, Error> {
    // Snapshot the store first so no lock is held during aggregation.
    let blogs = store.list();

    Ok(web::Json(BlogStatsResponse {
        total_likes: aggregator::total_likes(&blogs),
        favorite_blog: aggregator::favorite_blog(&blogs),
        most_blogs: aggregator::most_blogs(&blogs),
        most_likes: aggregator::most_likes(&blogs),
    }))
}
