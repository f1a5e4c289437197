//! Rutas de solicitudes de cotización
//!
//! Aprobar, rechazar y las estadísticas son exclusivas del administrador.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::solicitud_controller::SolicitudController;
use crate::dto::solicitud_dto::{
    AprobacionEnvelope, CreateSolicitudRequest, ResolverSolicitudRequest, SolicitudEnvelope,
    SolicitudListQuery, SolicitudListResponse, SolicitudResponse, SolicitudStatsResponse,
};
use crate::middleware::auth::{admin_only, auth_required, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_solicitud_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/stats", get(get_stats))
        .route("/:id/aprobar", patch(aprobar_solicitud))
        .route("/:id/rechazar", patch(rechazar_solicitud))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", post(create_solicitud).get(list_solicitudes))
        .route("/:id", get(get_solicitud))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_required))
}

async fn create_solicitud(
    State(state): State<AppState>,
    Json(request): Json<CreateSolicitudRequest>,
) -> Result<(StatusCode, Json<SolicitudEnvelope>), AppError> {
    let controller = SolicitudController::new(state.pool.clone());
    let envelope = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

async fn list_solicitudes(
    State(state): State<AppState>,
    Query(query): Query<SolicitudListQuery>,
) -> Result<Json<SolicitudListResponse>, AppError> {
    let controller = SolicitudController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_solicitud(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SolicitudResponse>, AppError> {
    let controller = SolicitudController::new(state.pool.clone());
    let solicitud = controller.get_by_id(id).await?;
    Ok(Json(solicitud))
}

async fn aprobar_solicitud(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ResolverSolicitudRequest>,
) -> Result<Json<AprobacionEnvelope>, AppError> {
    let controller = SolicitudController::new(state.pool.clone());
    let envelope = controller.aprobar(id, request, user.user_id).await?;
    Ok(Json(envelope))
}

async fn rechazar_solicitud(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ResolverSolicitudRequest>,
) -> Result<Json<SolicitudEnvelope>, AppError> {
    let controller = SolicitudController::new(state.pool.clone());
    let envelope = controller.rechazar(id, request, user.user_id).await?;
    Ok(Json(envelope))
}

async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<SolicitudStatsResponse>, AppError> {
    let controller = SolicitudController::new(state.pool.clone());
    let stats = controller.stats().await?;
    Ok(Json(stats))
}
