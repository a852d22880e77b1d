//! OpenAPI specification generation and app factory.

use crate::{
    config::{MetricsConfig, RateLimitConfig, SecurityHeadersConfig, TokenConfig},
    handlers::{
        blog_stats, create_blog, delete_blog, get_metrics, health, list_blogs, list_users, login,
        register_user, update_blog, validate_token, version,
    },
    middleware::{MetricsMiddleware, RequestIdMiddleware, SecurityHeaders},
    services::{
        AppMetrics, FailedLoginTracker,
        rate_limit::SimpleRateLimiter,
        store::{BlogStore, UserStore},
    },
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the API
///
/// Documents the bearer token authentication scheme alongside the
/// endpoint listing generated from the handler annotations.
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Bloglist API".into(),
            version: "1.0.0".into(),
            description: Some(
                "A REST backend for managing blog posts and users.\n\n\
                ## Authentication\n\
                Mutating blog endpoints require a bearer token obtained from `POST /api/login`:\n\
                \n\
                `Authorization: Bearer <token>`\n\
                \n\
                Tokens are HMAC-SHA256 signed and expire after a configurable TTL.\n\
                \n\
                **Configuration:**\n\
                - Set `TOKEN_SECRET` to configure the signing secret\n\
                - Set `TOKEN_TTL_SECONDS` to configure token lifetime (default: 3600 seconds)\n\
                \n\
                ## Statistics\n\
                `GET /api/blogs/stats` reduces the stored posts to summary values: total\n\
                likes, the most-liked post, the most prolific author, and the author with\n\
                the most accumulated likes. Ties always resolve to the first record (or\n\
                first-seen author) in creation order."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates an app around the given stores
///
/// The stores are passed in so several workers (or a test) can share one
/// set of data while the rest of the configuration is rebuilt per app.
pub fn create_app_with_state(
    blogs: BlogStore,
    users: UserStore,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let rate_limit_config = RateLimitConfig::from_env();
    let limiter = SimpleRateLimiter::new(rate_limit_config.clone());
    let token_config = TokenConfig::from_env();
    let security_config = SecurityHeadersConfig::from_env();
    let metrics_config = MetricsConfig::from_env();
    let metrics = AppMetrics::new().expect("Failed to create metrics");
    let login_tracker = FailedLoginTracker::new();

    App::new()
        .wrap(SecurityHeaders::new(security_config))
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(rate_limit_config))
        .app_data(web::Data::new(limiter))
        .app_data(web::Data::new(token_config))
        .app_data(web::Data::new(metrics_config))
        .app_data(web::Data::new(metrics))
        .app_data(web::Data::new(login_tracker))
        .app_data(web::Data::new(blogs))
        .app_data(web::Data::new(users))
        .service(
            web::resource("/api/blogs")
                .route(web::get().to(list_blogs))
                .route(web::post().to(create_blog)),
        )
        .service(web::resource("/api/blogs/stats").route(web::get().to(blog_stats)))
        .service(
            web::resource("/api/blogs/{id}")
                .route(web::put().to(update_blog))
                .route(web::delete().to(delete_blog)),
        )
        .service(
            web::resource("/api/users")
                .route(web::get().to(list_users))
                .route(web::post().to(register_user)),
        )
        .service(web::resource("/api/login").route(web::post().to(login)))
        .service(web::resource("/api/login/validate").route(web::post().to(validate_token)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}

/// Creates a fully configured app with fresh, empty stores
///
/// Suitable for tests and as the base for the main application.
pub fn create_base_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    create_app_with_state(BlogStore::new(), UserStore::new())
}
