//! User account data models.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// A registered user account
///
/// Credential fields never leave the process; `UserResponse` is the
/// serialization surface for user listings.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub password_salt: String,
}

/// Request model for registering a new user
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct NewUserRequest {
    pub username: String,
    pub name: String,
    pub password: String,
}

/// Public projection of a user account
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}
