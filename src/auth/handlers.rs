// HTTP handlers for authentication endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{LoginRequest, SignupRequest},
};
use crate::extract::JsonBody;
use crate::AppState;

/// Register a new user
/// POST /signup
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created, returns a session token", body = String),
        (status = 400, description = "Invalid email or password length", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse),
        (status = 500, description = "Account could not be created", body = crate::error::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn signup_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<String>), AuthError> {
    tracing::debug!("Signup attempt for {}", request.email);

    let token = state.auth_service.signup(request).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// Log a user in
/// POST /login
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, returns a new session token", body = String),
        (status = 401, description = "Wrong password", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown email", body = crate::error::ErrorResponse),
        (status = 500, description = "Token could not be stored", body = crate::error::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<String>, AuthError> {
    tracing::debug!("Login attempt for {}", request.email);

    let token = state.auth_service.login(request).await?;
    Ok(Json(token))
}

/// Revoke the token used for this request
/// POST /logout
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Token revoked, empty body"),
        (status = 401, description = "Invalid token", body = crate::error::ErrorResponse),
        (status = 500, description = "Token could not be revoked", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn logout_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<StatusCode, AuthError> {
    state.auth_service.logout(&user.token).await?;

    tracing::info!("User {} logged out", user.user_id);
    Ok(StatusCode::OK)
}
