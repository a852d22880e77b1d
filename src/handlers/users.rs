//! User registration and listing endpoint handlers.

use crate::{
    config::TokenConfig,
    models::{NewUserRequest, User, UserResponse},
    services::{
        AppMetrics, auth,
        store::{StoreError, UserStore},
    },
};
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;
use uuid::Uuid;

const MIN_USERNAME_LENGTH: usize = 3;
const MIN_PASSWORD_LENGTH: usize = 3;

/// User registration endpoint
#[api_v2_operation(
    summary = "Register User",
    description = "Creates a new user account with a salted, HMAC-hashed password.",
    tags("Users"),
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Username or password too short"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn register_user(
    req: HttpRequest,
    payload: web::Json<NewUserRequest>,
    users: web::Data<UserStore>,
    token_config: web::Data<TokenConfig>,
) -> Result<HttpResponse, Error> {
    let request = payload.into_inner();

    if request.username.trim().len() < MIN_USERNAME_LENGTH {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Bad Request",
            "message": "username must be at least 3 characters long"
        })));
    }
    if request.password.len() < MIN_PASSWORD_LENGTH {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Bad Request",
            "message": "password must be at least 3 characters long"
        })));
    }

    let salt = auth::generate_salt();
    let password_hash = match auth::hash_password(&token_config, &salt, &request.password) {
        Ok(hash) => hash,
        Err(e) => return Err(actix_web::error::ErrorInternalServerError(e.to_string())),
    };

    let user = User {
        id: Uuid::new_v4().to_string(),
        username: request.username.trim().to_string(),
        name: request.name,
        password_hash,
        password_salt: salt,
    };

    match users.create(user) {
        Ok(user) => {
            if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
                metrics.users_registered_total.inc();
            }

            Ok(HttpResponse::Created().json(UserResponse::from(&user)))
        }
        Err(StoreError::DuplicateUsername) => {
            Ok(HttpResponse::Conflict().json(serde_json::json!({
                "error": "Conflict",
                "message": "username is already taken"
            })))
        }
        Err(e) => Err(actix_web::error::ErrorInternalServerError(e.to_string())),
    }
}

/// User listing endpoint
///
/// Credential fields are never included in the listing.
#[api_v2_operation(
    summary = "List Users",
    description = "Returns all registered users without credential fields.",
    tags("Users"),
    responses(
        (status = 200, description = "All registered users without credential fields")
    )
)]
pub async fn list_users(users: web::Data<UserStore>) -> Result<web::Json<Vec<UserResponse>>, Error> {
    let users = users.list().iter().map(UserResponse::from).collect();
    Ok(web::Json(users))
}
