use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    application::dto::{CreatePlaceRequest, MessageResponse, PlaceResponse, UpdatePlaceRequest},
    domain::errors::DomainError,
    interface::http::api_error::{ApiError, ApiResult},
    state::AppState,
};

pub async fn create_place(
    State(state): State<AppState>,
    Json(request): Json<CreatePlaceRequest>,
) -> ApiResult<(StatusCode, Json<PlaceResponse>)> {
    let created = state
        .place_service
        .create_place(request)
        .await
        .map_err(ApiError::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PlaceResponse>> {
    let place_id = parse_place_id(&id)?;
    let place = state
        .place_service
        .get_place(place_id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(place))
}

pub async fn list_places_by_user(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> ApiResult<Json<Vec<PlaceResponse>>> {
    let owner_id = parse_owner_id(&uid)?;
    let places = state
        .place_service
        .list_places_by_owner(owner_id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(places))
}

pub async fn update_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePlaceRequest>,
) -> ApiResult<Json<PlaceResponse>> {
    let place_id = parse_place_id(&id)?;
    let updated = state
        .place_service
        .update_place(place_id, request)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(updated))
}

pub async fn delete_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let place_id = parse_place_id(&id)?;
    state
        .place_service
        .delete_place(place_id)
        .await
        .map_err(ApiError::from_domain)?;

    Ok(Json(MessageResponse {
        message: "deleted place".to_string(),
    }))
}

// Ids that do not parse are indistinguishable from ids that were never
// assigned, so both surface as a 404.
fn parse_place_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiError::from_domain(DomainError::place_not_found(
            "could not find a place for the provided id",
        ))
    })
}

fn parse_owner_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiError::from_domain(DomainError::place_not_found(
            "could not find places for the provided user id",
        ))
    })
}
