use crate::api::controllers::dto::user_dto::UserResponse;
use crate::api::request::{LoginRequest, RegisterRequest};
use crate::api::response::LoginResponse;
use crate::services::account_service::{AccountService, NewAccount};
use crate::services::errors::AccountServiceError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn register_user(Json(payload): Json<RegisterRequest>) -> impl IntoResponse {
    if payload.user_name.trim().is_empty() || payload.password.is_empty() {
        return (StatusCode::BAD_REQUEST, "User name and password are required").into_response();
    }

    let account = NewAccount {
        user_name: payload.user_name.trim(),
        email: payload.email.trim(),
        full_name: payload.full_name.trim(),
        password: &payload.password,
    };

    match AccountService::new().register(account).await {
        Ok((user, roles)) => {
            (StatusCode::CREATED, Json(UserResponse::new(user, roles))).into_response()
        }
        Err(AccountServiceError::UserNameTaken) => {
            (StatusCode::CONFLICT, "User name is already taken").into_response()
        }
        Err(AccountServiceError::EmailTaken) => {
            (StatusCode::CONFLICT, "Email is already registered").into_response()
        }
        Err(AccountServiceError::PasswordProcessing) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to process password").into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user").into_response(),
    }
}

pub async fn login(Json(payload): Json<LoginRequest>) -> impl IntoResponse {
    match AccountService::new()
        .login(&payload.user_name, &payload.password)
        .await
    {
        Ok(token) => (
            StatusCode::OK,
            Json(LoginResponse {
                token,
                message: "Login successful".to_string(),
            }),
        )
            .into_response(),
        Err(AccountServiceError::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response()
        }
        Err(e) => {
            tracing::error!("Login failed for {}: {}", payload.user_name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to log in").into_response()
        }
    }
}
