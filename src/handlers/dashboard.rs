// src/handlers/dashboard.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale, params::{PathParams, QueryParams}},
    models::dashboard::{RevenueGraphQuery, SalesCount},
};

// GET /api/stores/{store_id}/dashboard/summary
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    PathParams(store_id): PathParams<Uuid>,
) -> Result<impl IntoResponse, ApiError> {

    // O cálculo de receita não valida a loja (desconhecida = zero),
    // então a posse é conferida aqui.
    let store = app_state
        .store_service
        .get_owned_store(store_id, user.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    let summary = app_state
        .revenue_service
        .summary(store.id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/stores/{store_id}/dashboard/revenue-graph?year=2024
pub async fn get_revenue_graph(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    PathParams(store_id): PathParams<Uuid>,
    QueryParams(query): QueryParams<RevenueGraphQuery>,
) -> Result<impl IntoResponse, ApiError> {

    let store = app_state
        .store_service
        .get_owned_store(store_id, user.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    let year = query.year.unwrap_or_else(|| Utc::now().year());

    let graph = app_state
        .revenue_service
        .revenue_graph(store.id, year)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(graph)))
}

// GET /api/stores/{store_id}/dashboard/sales-count
pub async fn get_sales_count(
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

    let sales_count = app_state
        .revenue_service
        .sales_count(store.id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(SalesCount { sales_count })))
}
