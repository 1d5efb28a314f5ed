// src/handlers/stores.rs

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
    models::store::StorePayload,
};

// POST /api/stores
pub async fn create_store(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    Json(payload): Json<StorePayload>,
) -> Result<impl IntoResponse, ApiError> {

    // 1. Valida antes de tocar no banco
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    // 2. Cria a loja já com o usuário como dono
    let store = app_state
        .store_service
        .create_store(user.0, &payload.name)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(store)))
}

// GET /api/stores
pub async fn list_stores(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {

    let stores = app_state
        .store_service
        .list_stores(user.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(stores)))
}

// GET /api/stores/{store_id}
pub async fn get_store(
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

    Ok((StatusCode::OK, Json(store)))
}

// PATCH /api/stores/{store_id}
pub async fn update_store(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    PathParams(store_id): PathParams<Uuid>,
    Json(payload): Json<StorePayload>,
) -> Result<impl IntoResponse, ApiError> {

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let store = app_state
        .store_service
        .rename_store(store_id, user.0, &payload.name)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(store)))
}

// DELETE /api/stores/{store_id}
pub async fn delete_store(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    PathParams(store_id): PathParams<Uuid>,
) -> Result<impl IntoResponse, ApiError> {

    app_state
        .store_service
        .delete_store(store_id, user.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}
