//! Blog post endpoint handlers.

use crate::{
    config::TokenConfig,
    models::{Blog, NewBlogRequest, UpdateBlogRequest},
    services::{
        AppMetrics, auth,
        store::{BlogStore, StoreError},
    },
};
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// List all blog posts
///
/// Posts are returned in creation order.
#[api_v2_operation(
    summary = "List Blog Posts",
    description = "Returns every stored blog post in creation order.",
    tags("Blogs"),
    responses(
        (status = 200, description = "All blog posts in creation order")
    )
)]
pub async fn list_blogs(store: web::Data<BlogStore>) -> Result<web::Json<Vec<Blog>>, Error> {
    Ok(web::Json(store.list()))
}

/// Create a blog post
///
/// Requires a bearer token; the created post is owned by the
/// authenticated user. A missing like count defaults to zero.
#[api_v2_operation(
    summary = "Create Blog Post",
    description = "Creates a new blog post owned by the authenticated user.",
    tags("Blogs"),
    responses(
        (status = 201, description = "Blog post created", body = Blog),
        (status = 400, description = "Missing title or url"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
pub async fn create_blog(
    req: HttpRequest,
    payload: web::Json<NewBlogRequest>,
    store: web::Data<BlogStore>,
    token_config: web::Data<TokenConfig>,
) -> Result<HttpResponse, Error> {
    let user_id = match auth::authenticate(&req, &token_config) {
        Ok(user_id) => user_id,
        Err(e) => {
            return Ok(HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Unauthorized",
                "message": e.to_string()
            })));
        }
    };

    let request = payload.into_inner();
    if request.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Bad Request",
            "message": "title must not be empty"
        })));
    }
    if request.url.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Bad Request",
            "message": "url must not be empty"
        })));
    }

    let blog = store.create(request, Some(user_id));

    if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
        metrics.blogs_created_total.inc();
    }

    Ok(HttpResponse::Created().json(blog))
}

/// Update a blog post's like count
#[api_v2_operation(
    summary = "Update Blog Post Likes",
    description = "Replaces the like count of an existing blog post.",
    tags("Blogs"),
    responses(
        (status = 200, description = "Updated blog post", body = Blog),
        (status = 404, description = "No blog post with this ID")
    )
)]
pub async fn update_blog(
    path: web::Path<String>,
    payload: web::Json<UpdateBlogRequest>,
    store: web::Data<BlogStore>,
) -> Result<HttpResponse, Error> {
    let id = path.into_inner();

    match store.update_likes(&id, payload.likes) {
        Ok(blog) => Ok(HttpResponse::Ok().json(blog)),
        Err(StoreError::NotFound) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Not Found",
            "message": "blog post not found"
        }))),
        Err(e) => Err(actix_web::error::ErrorInternalServerError(e.to_string())),
    }
}

/// Delete a blog post
///
/// Requires a bearer token; only the owning user may delete a post.
#[api_v2_operation(
    summary = "Delete Blog Post",
    description = "Deletes a blog post. Only the owning user may delete a post.",
    tags("Blogs"),
    responses(
        (status = 204, description = "Blog post deleted"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Authenticated user does not own the post"),
        (status = 404, description = "No blog post with this ID")
    )
)]
pub async fn delete_blog(
    req: HttpRequest,
    path: web::Path<String>,
    store: web::Data<BlogStore>,
    token_config: web::Data<TokenConfig>,
) -> Result<HttpResponse, Error> {
    let user_id = match auth::authenticate(&req, &token_config) {
        Ok(user_id) => user_id,
        Err(e) => {
            return Ok(HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Unauthorized",
                "message": e.to_string()
            })));
        }
    };

    let id = path.into_inner();
    match store.delete(&id, &user_id) {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(StoreError::NotFound) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Not Found",
            "message": "blog post not found"
        }))),
        Err(StoreError::NotOwner) => Ok(HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Forbidden",
            "message": "only the owner can delete a blog post"
        }))),
        Err(e) => Err(actix_web::error::ErrorInternalServerError(e.to_string())),
    }
}
