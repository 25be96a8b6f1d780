//! Axum route handlers for signup and login.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

pub const MIN_PASSWORD_LEN: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(alias = "email")]
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: Option<User>,
    pub token: Option<String>,
    pub message: Option<String>,
}

impl AuthRequest {
    /// Returns `(username, password)` when both are present and non-blank.
    fn credentials(self) -> Result<(String, String), AppError> {
        let username = self.username.map(|u| u.trim().to_string()).unwrap_or_default();
        let password = self.password.unwrap_or_default();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Username and password are required".to_string(),
            ));
        }
        Ok((username, password))
    }
}

fn issue_response(state: &AppState, user: User, message: &str) -> Result<AuthResponse, AppError> {
    let token = state
        .tokens
        .issue(user.id)
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(AuthResponse {
        success: true,
        user: Some(user),
        token: Some(token),
        message: Some(message.to_string()),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let Json(request) = payload?;
    let (username, password) = request.credentials()?;

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    let password_hash = state.passwords.hash(&password).await?;
    let user = state
        .users
        .create_user(User::new(username, password_hash))
        .await?;
    info!("Created user {} ({})", user.username, user.id);

    let response = issue_response(&state, user, "User created successfully")?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(request) = payload?;
    let (username, password) = request.credentials()?;

    let invalid = || AppError::Unauthorized("Invalid username or password".to_string());

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or_else(invalid)?;

    if !state.passwords.verify(&password, &user.password_hash).await? {
        return Err(invalid());
    }

    Ok(Json(issue_response(&state, user, "Login successful")?))
}
