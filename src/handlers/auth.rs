use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::AppState;
use crate::error::ApiError;
use crate::services::account_service::AccountService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/signup - create an account keyed by email
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<Value>, ApiError> {
    let email = payload.email.as_deref().map(str::trim).unwrap_or_default();
    let password = payload.password.as_deref().unwrap_or_default();
    let full_name = payload.full_name.as_deref().map(str::trim).unwrap_or_default();

    if email.is_empty() || password.is_empty() || full_name.is_empty() {
        return Err(ApiError::validation(
            "Email, password, and full name are required",
        ));
    }

    let service = AccountService::new(state.tracker.clone());
    let user = service.signup(email, password, full_name).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Account created successfully",
        "user": user,
    })))
}

/// POST /api/login - exact credential match, no session issued
///
/// A successful response is the whole proof of authentication; no token or
/// server-side session state exists.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let email = payload.email.as_deref().map(str::trim).unwrap_or_default();
    let password = payload.password.as_deref().unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    let service = AccountService::new(state.tracker.clone());
    let user = service.login(email, password).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "user": user,
    })))
}
