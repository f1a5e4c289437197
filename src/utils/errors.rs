//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                // Una violación de índice único del store equivale al
                // pre-chequeo de unicidad de los controladores.
                if e.as_database_error()
                    .map(|d| d.is_unique_violation())
                    .unwrap_or(false)
                {
                    (
                        StatusCode::BAD_REQUEST,
                        ErrorResponse {
                            message: "Ya existe un registro con ese valor único".to_string(),
                            errors: None,
                        },
                    )
                } else {
                    tracing::error!("Error de base de datos: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse {
                            message: "Error interno del servidor".to_string(),
                            errors: internal_detail(&e.to_string()),
                        },
                    )
                }
            }

            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: "Errores de validación".to_string(),
                    errors: Some(json!(e)),
                },
            ),

            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    message: msg,
                    errors: None,
                },
            ),

            AppError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                ErrorResponse {
                    message: msg,
                    errors: None,
                },
            ),

            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    message: msg,
                    errors: None,
                },
            ),

            // Los duplicados responden 400, no 409; el frontend
            // depende de ese código.
            AppError::Conflict(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: msg,
                    errors: None,
                },
            ),

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: msg,
                    errors: None,
                },
            ),

            AppError::Internal(msg) => {
                tracing::error!("Error no manejado: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "Error interno del servidor".to_string(),
                        errors: internal_detail(&msg),
                    },
                )
            }

            AppError::Jwt(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    message: msg,
                    errors: None,
                },
            ),

            AppError::Hash(msg) => {
                tracing::error!("Error de hashing: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "Error interno del servidor".to_string(),
                        errors: None,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// El detalle interno solo se expone en desarrollo
fn internal_detail(msg: &str) -> Option<serde_json::Value> {
    let is_dev = std::env::var("ENVIRONMENT")
        .map(|e| e == "development")
        .unwrap_or(false);
    if is_dev {
        Some(json!({ "error": msg }))
    } else {
        None
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_400() {
        let response =
            AppError::Conflict("Ya existe un cliente con ese RUT".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response =
            AppError::NotFound("Cliente no encontrado".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let response =
            AppError::Unauthorized("Credenciales inválidas".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response =
            AppError::Forbidden("No se proporcionó un token".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
