//! Version information endpoint handler.

use crate::{
    models::VersionResponse,
    services::rate_limit::{SimpleRateLimiter, rate_limit_middleware},
};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// Version information endpoint
///
/// Returns the current API version, commit hash, and build time. Subject
/// to rate limiting when a limiter is configured.
#[api_v2_operation(
    summary = "Version Information Endpoint",
    description = "Returns the current API version, commit hash, and build time.",
    tags("Version"),
    responses(
        (status = 200, description = "Successful response", body = VersionResponse),
        (status = 429, description = "Too Many Requests")
    )
)]
pub async fn version(req: HttpRequest) -> Result<web::Json<VersionResponse>, Error> {
    if let Some(limiter) = req.app_data::<web::Data<SimpleRateLimiter>>()
        && rate_limit_middleware(&req, limiter).is_err()
    {
        return Err(actix_web::error::ErrorTooManyRequests(
            "Rate limit exceeded. Please try again later.",
        ));
    }

    Ok(web::Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: option_env!("VERGEN_GIT_SHA").unwrap_or("unknown").to_string(),
        build_time: option_env!("VERGEN_BUILD_TIMESTAMP")
            .unwrap_or("unknown")
            .to_string(),
    }))
}
