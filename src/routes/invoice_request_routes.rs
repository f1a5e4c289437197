//! Rutas de solicitudes de facturación
//!
//! `/public` permite consultar el listado sin sesión; el resto exige
//! autenticación y el borrado es exclusivo del administrador.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::invoice_request_controller::InvoiceRequestController;
use crate::dto::common::MessageResponse;
use crate::dto::invoice_request_dto::{
    CreateInvoiceRequest, InvoiceListQuery, InvoiceRequestResponse, UpdateEstadoRequest,
    UpdateInvoiceRequest,
};
use crate::middleware::auth::{admin_only, auth_required};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_invoice_request_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/:id", delete(delete_request))
        .route_layer(middleware::from_fn(admin_only));

    let protected = Router::new()
        .route("/", post(create_request).get(list_requests))
        .route("/:id", get(get_request).put(update_request))
        .route("/:id/status", patch(update_estado))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_required));

    Router::new()
        .route("/public", get(list_requests_public))
        .merge(protected)
}

async fn create_request(
    State(state): State<AppState>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceRequestResponse>), AppError> {
    let controller = InvoiceRequestController::new(state.pool.clone());
    let created = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_requests(
    State(state): State<AppState>,
    Query(query): Query<InvoiceListQuery>,
) -> Result<Json<Vec<InvoiceRequestResponse>>, AppError> {
    let controller = InvoiceRequestController::new(state.pool.clone());
    let requests = controller.list(query).await?;
    Ok(Json(requests))
}

async fn list_requests_public(
    State(state): State<AppState>,
    Query(query): Query<InvoiceListQuery>,
) -> Result<Json<Vec<InvoiceRequestResponse>>, AppError> {
    let controller = InvoiceRequestController::new(state.pool.clone());
    let requests = controller.list(query).await?;
    Ok(Json(requests))
}

async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceRequestResponse>, AppError> {
    let controller = InvoiceRequestController::new(state.pool.clone());
    let request = controller.get_by_id(id).await?;
    Ok(Json(request))
}

async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<Json<InvoiceRequestResponse>, AppError> {
    let controller = InvoiceRequestController::new(state.pool.clone());
    let updated = controller.update(id, request).await?;
    Ok(Json(updated))
}

async fn update_estado(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEstadoRequest>,
) -> Result<Json<InvoiceRequestResponse>, AppError> {
    let controller = InvoiceRequestController::new(state.pool.clone());
    let updated = controller.update_estado(id, request).await?;
    Ok(Json(updated))
}

async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = InvoiceRequestController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
