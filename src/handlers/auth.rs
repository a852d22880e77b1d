//! Authentication endpoint handlers.

use crate::{
    config::TokenConfig,
    models::{
        audit::{AuthAuditEvent, AuthEventOutcome, AuthEventType},
        auth::{LoginRequest, LoginResponse, TokenValidationRequest, TokenValidationResponse},
    },
    services::{FailedLoginTracker, auth, store::UserStore},
    utils::http::{extract_client_ip, extract_user_agent},
};
use actix_web::{Error, HttpMessage, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// Request ID placed in extensions by the request ID middleware, if any
fn request_id(req: &HttpRequest) -> Option<String> {
    req.extensions().get::<String>().cloned()
}

/// User login endpoint
///
/// Verifies the supplied credentials against the user store and returns a
/// signed bearer token on success. All attempts are audit logged, and
/// repeated failures from one address raise a suspicious-activity event.
#[api_v2_operation(
    summary = "User Login",
    description = "Authenticate user and return a signed bearer token",
    tags("Authentication"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid username or password", body = LoginResponse)
    )
)]
pub async fn login(
    req: HttpRequest,
    payload: web::Json<LoginRequest>,
    users: web::Data<UserStore>,
    token_config: web::Data<TokenConfig>,
) -> Result<HttpResponse, Error> {
    let ip_address = extract_client_ip(&req);
    let user_agent = extract_user_agent(&req);
    let method = req.method().to_string();
    let endpoint = req.uri().path().to_string();

    let user = users.find_by_username(&payload.username);
    let verified = user
        .as_ref()
        .map(|user| auth::verify_password(&token_config, user, &payload.password))
        .unwrap_or(false);

    if let (true, Some(user)) = (verified, user) {
        let token = match auth::issue_token(&token_config, &user.id) {
            Ok(token) => token,
            Err(e) => return Err(actix_web::error::ErrorInternalServerError(e.to_string())),
        };

        AuthAuditEvent::new(
            AuthEventType::LoginSuccess,
            AuthEventOutcome::Success,
            ip_address,
            method,
            endpoint,
        )
        .with_user_id(Some(user.id.clone()))
        .with_user_agent(user_agent)
        .with_request_id(request_id(&req))
        .log();

        Ok(HttpResponse::Ok().json(LoginResponse {
            success: true,
            token: Some(token),
            message: "Login successful".to_string(),
        }))
    } else {
        AuthAuditEvent::new(
            AuthEventType::LoginFailure,
            AuthEventOutcome::Failure,
            ip_address.clone(),
            method.clone(),
            endpoint.clone(),
        )
        .with_user_agent(user_agent.clone())
        .with_request_id(request_id(&req))
        .log();

        if let Some(tracker) = req.app_data::<web::Data<FailedLoginTracker>>()
            && tracker.record_failure(&ip_address)
        {
            AuthAuditEvent::new(
                AuthEventType::SuspiciousActivity,
                AuthEventOutcome::Failure,
                ip_address,
                method,
                endpoint,
            )
            .with_user_agent(user_agent)
            .with_context(Some("repeated login failures".to_string()))
            .log();
        }

        Ok(HttpResponse::Unauthorized().json(LoginResponse {
            success: false,
            token: None,
            message: "Invalid username or password".to_string(),
        }))
    }
}

/// Token validation endpoint
///
/// Checks a bearer token's signature and age, returning the user ID it
/// was issued for when valid.
#[api_v2_operation(
    summary = "Token Validation",
    description = "Validate a bearer token",
    tags("Authentication"),
    responses(
        (status = 200, description = "Token validation response", body = TokenValidationResponse)
    )
)]
pub async fn validate_token(
    req: HttpRequest,
    payload: web::Json<TokenValidationRequest>,
    token_config: web::Data<TokenConfig>,
) -> Result<web::Json<TokenValidationResponse>, Error> {
    let ip_address = extract_client_ip(&req);
    let user_agent = extract_user_agent(&req);
    let method = req.method().to_string();
    let endpoint = req.uri().path().to_string();

    match auth::validate_token(&token_config, &payload.token) {
        Ok(user_id) => {
            AuthAuditEvent::new(
                AuthEventType::TokenValidationSuccess,
                AuthEventOutcome::Success,
                ip_address,
                method,
                endpoint,
            )
            .with_user_id(Some(user_id.clone()))
            .with_user_agent(user_agent)
            .log();

            Ok(web::Json(TokenValidationResponse {
                valid: true,
                user_id: Some(user_id),
                message: "Token is valid".to_string(),
            }))
        }
        Err(e) => {
            AuthAuditEvent::new(
                AuthEventType::TokenValidationFailure,
                AuthEventOutcome::Failure,
                ip_address,
                method,
                endpoint,
            )
            .with_user_agent(user_agent)
            .log();

            Ok(web::Json(TokenValidationResponse {
                valid: false,
                user_id: None,
                message: e.to_string(),
            }))
        }
    }
}
