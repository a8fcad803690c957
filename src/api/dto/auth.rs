//! DTOs for account and identity-provider endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Request body for `POST /api/auth/login/`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Request body for `POST /api/auth/signup/`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password1: Option<String>,
    #[serde(default)]
    pub password2: Option<String>,
}

/// Shape checks applied after the handler's presence and confirmation
/// checks have passed.
#[derive(Debug, Validate)]
pub struct NewAccount {
    #[validate(length(min = 3, max = 150, message = "Username must be 3 to 150 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Full user payload returned by login and `GET /api/auth/user/`.
#[derive(Debug, Serialize)]
pub struct UserPayload {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserPayload {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Trimmed user payload returned by signup.
#[derive(Debug, Serialize)]
pub struct CreatedUserPayload {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for CreatedUserPayload {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Response for login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: UserPayload,
}

/// Response for signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: CreatedUserPayload,
}

/// Response for logout.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Response for `GET /api/auth/user/`.
#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    pub authenticated: bool,
    pub user: Option<UserPayload>,
}

/// One delegated identity provider.
#[derive(Debug, Serialize)]
pub struct OAuthProvider {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub login_url: &'static str,
}

/// Response for `GET /api/auth/providers/`.
#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<OAuthProvider>,
}
