// src/handlers/billboards.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale, params::PathParams},
    models::billboard::BillboardPayload,
};

// GET /api/stores/{store_id}/billboards
pub async fn list_billboards(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    PathParams(store_id): PathParams<Uuid>,
) -> Result<impl IntoResponse, ApiError> {

    let store = app_state
        .store_service
        .get_owned_store(store_id, user.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    let billboards = app_state
        .billboard_service
        .list(store.id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(billboards)))
}

// POST /api/stores/{store_id}/billboards
pub async fn create_billboard(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    PathParams(store_id): PathParams<Uuid>,
    Json(payload): Json<BillboardPayload>,
) -> Result<impl IntoResponse, ApiError> {

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let store = app_state
        .store_service
        .get_owned_store(store_id, user.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    let billboard = app_state
        .billboard_service
        .create(store.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(billboard)))
}

// GET /api/stores/{store_id}/billboards/{billboard_id}
pub async fn get_billboard(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    PathParams((store_id, billboard_id)): PathParams<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {

    let store = app_state
        .store_service
        .get_owned_store(store_id, user.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    let billboard = app_state
        .billboard_service
        .get(store.id, billboard_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(billboard)))
}

// PATCH /api/stores/{store_id}/billboards/{billboard_id}
pub async fn update_billboard(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    PathParams((store_id, billboard_id)): PathParams<(Uuid, Uuid)>,
    Json(payload): Json<BillboardPayload>,
) -> Result<impl IntoResponse, ApiError> {

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let store = app_state
        .store_service
        .get_owned_store(store_id, user.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    let billboard = app_state
        .billboard_service
        .update(store.id, billboard_id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(billboard)))
}

// DELETE /api/stores/{store_id}/billboards/{billboard_id}
pub async fn delete_billboard(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    PathParams((store_id, billboard_id)): PathParams<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {

    let store = app_state
        .store_service
        .get_owned_store(store_id, user.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    app_state
        .billboard_service
        .delete(store.id, billboard_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}
