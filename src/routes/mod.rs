//! Routers de la API

pub mod auth_routes;
pub mod client_routes;
pub mod cotizacion_routes;
pub mod grupo_routes;
pub mod invoice_request_routes;
pub mod solicitud_routes;

use axum::{
    http::{StatusCode, Uri},
    response::Json,
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router principal de la API (montado bajo /api)
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes::create_auth_router(state.clone()))
        .nest("/clients", client_routes::create_client_router(state.clone()))
        .nest(
            "/cotizaciones",
            cotizacion_routes::create_cotizacion_router(state.clone()),
        )
        .nest("/grupos", grupo_routes::create_grupo_router(state.clone()))
        .nest(
            "/solicitudes",
            solicitud_routes::create_solicitud_router(state.clone()),
        )
        .nest(
            "/facturacion",
            invoice_request_routes::create_invoice_request_router(state),
        )
}

/// Crear la aplicación completa: API, health check, CORS y fallback 404
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", create_api_router(state.clone()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "message": "Servidor funcionando correctamente",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback para rutas no registradas
async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "Ruta no encontrada",
            "path": uri.path(),
        })),
    )
}
