//! Bloglist API - a REST backend for blog posts and users
//!
//! This service manages a collection of blog posts and their authors'
//! user accounts:
//! - RESTful blog CRUD with owner-only deletion
//! - User registration and HMAC-signed bearer token authentication
//! - Aggregate blog statistics (total likes, favorite post, top authors)
//! - Prometheus metrics integration
//! - Rate limiting and security headers
//! - Structured audit logging
//! - OpenAPI documentation
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Data structures and request/response models
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `middleware/` - Custom middleware for cross-cutting concerns
//! - `services/` - Business logic: aggregation, storage, auth, metrics
//! - `utils/` - Utility functions and helpers
//! - `config/` - Configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use bloglist_api::create_base_app;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let app = create_base_app();
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::{MetricsConfig, RateLimitConfig, SecurityHeadersConfig, TokenConfig};
pub use handlers::{
    blog_stats, create_app_with_state, create_base_app, create_blog, create_openapi_spec,
    delete_blog, get_metrics, health, list_blogs, list_users, login, register_user, update_blog,
    validate_token, version,
};
pub use middleware::{
    MetricsMiddleware, MetricsService, RequestIdMiddleware, RequestIdService, SecurityHeaders,
    SecurityHeadersMiddleware,
};
pub use models::{
    AuthAuditEvent, AuthEventOutcome, AuthEventType, Blog, BlogStatsResponse, FavoriteBlog,
    HealthResponse, LoginRequest, LoginResponse, NewBlogRequest, NewUserRequest,
    TokenValidationRequest, TokenValidationResponse, UpdateBlogRequest, User, UserResponse,
    VersionResponse,
};
pub use services::{
    AppMetrics, AuthError, BlogStore, FailedLoginTracker, SimpleRateLimiter, StoreError,
    UserStore, aggregator,
};
pub use utils::{extract_client_ip, extract_route_pattern, extract_user_agent};
