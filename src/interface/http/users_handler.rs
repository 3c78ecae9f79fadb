use axum::{Json, extract::State, http::StatusCode};

use crate::{
    application::dto::{
        HealthResponse, LoginRequest, MessageResponse, SignupRequest, UserResponse,
    },
    interface::http::api_error::{ApiError, ApiResult},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(users))
}

pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let created = state
        .user_service
        .signup(request)
        .await
        .map_err(ApiError::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .user_service
        .login(request)
        .await
        .map_err(ApiError::from_domain)?;

    Ok(Json(MessageResponse {
        message: "logged in".to_string(),
    }))
}
