//! Rutas de clientes
//!
//! Lectura para cualquier usuario autenticado; escritura solo admin.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::client_controller::ClientController;
use crate::dto::client_dto::{
    ClientEnvelope, ClientListQuery, ClientListResponse, ClientResponse, CreateClientRequest,
    UpdateClientRequest,
};
use crate::dto::common::MessageResponse;
use crate::middleware::auth::{admin_only, auth_required};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_client_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_client))
        .route("/:id", put(update_client).delete(delete_client))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_clients))
        .route("/:id", get(get_client))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_required))
}

async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientEnvelope>), AppError> {
    let controller = ClientController::new(state.pool.clone());
    let envelope = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<ClientListQuery>,
) -> Result<Json<ClientListResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let client = controller.get_by_id(id).await?;
    Ok(Json(client))
}

async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<ClientEnvelope>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let envelope = controller.update(id, request).await?;
    Ok(Json(envelope))
}

async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
