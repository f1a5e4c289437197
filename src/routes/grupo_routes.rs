//! Rutas de grupos

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::grupo_controller::GrupoController;
use crate::dto::common::MessageResponse;
use crate::dto::grupo_dto::{
    AddMiembroRequest, CreateGrupoRequest, GrupoEnvelope, GrupoListQuery, GrupoListResponse,
    GrupoResponse, UpdateGrupoRequest,
};
use crate::middleware::auth::{admin_only, auth_required};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_grupo_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_grupo))
        .route("/:id", put(update_grupo).delete(delete_grupo))
        .route("/:id/miembros", post(add_miembro))
        .route("/:id/miembros/:user_id", delete(remove_miembro))
        .route_layer(middleware::from_fn(admin_only));

    Router::new()
        .route("/", get(list_grupos))
        .route("/:id", get(get_grupo))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_required))
}

async fn create_grupo(
    State(state): State<AppState>,
    Json(request): Json<CreateGrupoRequest>,
) -> Result<(StatusCode, Json<GrupoEnvelope>), AppError> {
    let controller = GrupoController::new(state.pool.clone());
    let envelope = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

async fn list_grupos(
    State(state): State<AppState>,
    Query(query): Query<GrupoListQuery>,
) -> Result<Json<GrupoListResponse>, AppError> {
    let controller = GrupoController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_grupo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GrupoResponse>, AppError> {
    let controller = GrupoController::new(state.pool.clone());
    let grupo = controller.get_by_id(id).await?;
    Ok(Json(grupo))
}

async fn update_grupo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateGrupoRequest>,
) -> Result<Json<GrupoEnvelope>, AppError> {
    let controller = GrupoController::new(state.pool.clone());
    let envelope = controller.update(id, request).await?;
    Ok(Json(envelope))
}

async fn add_miembro(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddMiembroRequest>,
) -> Result<Json<GrupoEnvelope>, AppError> {
    let controller = GrupoController::new(state.pool.clone());
    let envelope = controller.add_miembro(id, request).await?;
    Ok(Json(envelope))
}

async fn remove_miembro(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<GrupoEnvelope>, AppError> {
    let controller = GrupoController::new(state.pool.clone());
    let envelope = controller.remove_miembro(id, user_id).await?;
    Ok(Json(envelope))
}

async fn delete_grupo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = GrupoController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
