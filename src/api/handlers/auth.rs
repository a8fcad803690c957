//! Handlers for account endpoints: login, signup, logout, current user and
//! the identity-provider listing.

use axum::{
    Json,
    extract::State,
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::auth::{
    CreatedUserPayload, LoginRequest, LoginResponse, LogoutResponse, NewAccount, OAuthProvider,
    ProvidersResponse, SignupRequest, SignupResponse, UserInfoResponse, UserPayload,
};
use crate::error::AppError;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session_token";

/// Extracts the raw session token from the `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and picking the
/// `session_token` key-value pair; other cookies are ignored.
pub(crate) fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}

fn session_cookie(token: &str, max_age: u64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}")
}

fn with_cookie(mut response: Response, cookie: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        response.headers_mut().insert(SET_COOKIE, value);
    }
    response
}

/// Authenticates a user and opens a session.
///
/// # Endpoint
///
/// `POST /api/auth/login/`
///
/// # Errors
///
/// Returns 400 when username or password is missing, 401 for bad
/// credentials. On success the session token is set as an `HttpOnly`
/// cookie.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(AppError::bad_request("Username and password are required"));
    };
    if username.is_empty() || password.is_empty() {
        return Err(AppError::bad_request("Username and password are required"));
    }

    let user = state
        .account_service
        .authenticate(&username, &password)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

    let token = state.account_service.create_session(user.id).await?;
    tracing::info!(username = %user.username, "user logged in");

    let response = Json(LoginResponse {
        success: true,
        message: "Login successful",
        user: UserPayload::from(user),
    })
    .into_response();

    Ok(with_cookie(
        response,
        &session_cookie(&token, state.account_service.session_ttl_seconds()),
    ))
}

/// Creates a new account.
///
/// Does not open a session; the client is expected to log in afterwards.
///
/// # Endpoint
///
/// `POST /api/auth/signup/`
///
/// # Errors
///
/// Returns 400 for missing fields, mismatched passwords, invalid shapes or
/// a taken username/email; 500 if creation fails.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, AppError> {
    let (Some(username), Some(email), Some(password1), Some(password2)) = (
        payload.username,
        payload.email,
        payload.password1,
        payload.password2,
    ) else {
        return Err(AppError::bad_request("All fields are required"));
    };
    if [&username, &email, &password1, &password2]
        .iter()
        .any(|f| f.is_empty())
    {
        return Err(AppError::bad_request("All fields are required"));
    }

    if password1 != password2 {
        return Err(AppError::bad_request("Passwords do not match"));
    }

    let account = NewAccount {
        username,
        email,
        password: password1,
    };
    account.validate()?;

    let user = state
        .account_service
        .register(&account.username, &account.email, &account.password)
        .await?;
    tracing::info!(username = %user.username, "account created");

    Ok(Json(SignupResponse {
        success: true,
        message: "Account created successfully! You can now log in.",
        user: CreatedUserPayload::from(user),
    }))
}

/// Destroys the current session, if any.
///
/// # Endpoint
///
/// `POST /api/auth/logout/`
///
/// Never fails: an absent or unknown session token still yields a success
/// response, and the cookie is expired either way.
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers)
        && let Err(e) = state.account_service.destroy_session(&token).await
    {
        tracing::warn!(error = %e, "failed to destroy session");
    }

    let response = Json(LogoutResponse {
        success: true,
        message: "Logged out successfully",
    })
    .into_response();

    with_cookie(response, &session_cookie("", 0))
}

/// Reports the currently authenticated user.
///
/// # Endpoint
///
/// `GET /api/auth/user/`
///
/// Never fails: missing, expired or unknown sessions (and lookup errors)
/// all report `authenticated: false`.
pub async fn user_info_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user = match session_token(&headers) {
        Some(token) => state
            .account_service
            .current_user(&token)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "session lookup failed");
                None
            }),
        None => None,
    };

    Json(UserInfoResponse {
        authenticated: user.is_some(),
        user: user.map(UserPayload::from),
    })
    .into_response()
}

/// Lists the delegated identity providers.
///
/// # Endpoint
///
/// `GET /api/auth/providers/`
///
/// The login/callback URLs follow the identity framework's standard URL
/// scheme and are served outside this API.
pub async fn providers_handler() -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        providers: vec![
            OAuthProvider {
                id: "github",
                name: "GitHub",
                icon: "🐙",
                login_url: "/accounts/github/login/",
            },
            OAuthProvider {
                id: "google",
                name: "Google",
                icon: "🔍",
                login_url: "/accounts/google/login/",
            },
            OAuthProvider {
                id: "facebook",
                name: "Facebook",
                icon: "📘",
                login_url: "/accounts/facebook/login/",
            },
        ],
    })
}
