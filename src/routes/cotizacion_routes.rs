//! Rutas de cotizaciones
//!
//! Las estadísticas y el borrado son exclusivos del administrador.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cotizacion_controller::CotizacionController;
use crate::dto::common::MessageResponse;
use crate::dto::cotizacion_dto::{
    CotizacionEnvelope, CotizacionListQuery, CotizacionListResponse, CotizacionResponse,
    CotizacionStatsResponse, CreateCotizacionRequest, UpdateCotizacionRequest, UpdateStatusRequest,
};
use crate::middleware::auth::{admin_only, auth_required};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cotizacion_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/stats", get(get_stats))
        .route("/:id", delete(delete_cotizacion))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", post(create_cotizacion).get(list_cotizaciones))
        .route("/:id", get(get_cotizacion).put(update_cotizacion))
        .route("/:id/status", patch(update_status))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_required))
}

async fn create_cotizacion(
    State(state): State<AppState>,
    Json(request): Json<CreateCotizacionRequest>,
) -> Result<(StatusCode, Json<CotizacionEnvelope>), AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let envelope = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

async fn list_cotizaciones(
    State(state): State<AppState>,
    Query(query): Query<CotizacionListQuery>,
) -> Result<Json<CotizacionListResponse>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_cotizacion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CotizacionResponse>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let cotizacion = controller.get_by_id(id).await?;
    Ok(Json(cotizacion))
}

async fn update_cotizacion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCotizacionRequest>,
) -> Result<Json<CotizacionEnvelope>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let envelope = controller.update(id, request).await?;
    Ok(Json(envelope))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<CotizacionEnvelope>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let envelope = controller.update_status(id, request).await?;
    Ok(Json(envelope))
}

async fn delete_cotizacion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<CotizacionStatsResponse>, AppError> {
    let controller = CotizacionController::new(state.pool.clone());
    let stats = controller.stats().await?;
    Ok(Json(stats))
}
