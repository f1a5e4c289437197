//! DTOs de autenticación y administración de usuarios

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::grupo::Grupo;
use crate::models::user::User;

/// Request de registro (solo administrador)
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Nombre no puede estar vacío"))]
    pub name: String,

    #[validate(email(message = "Email inválido"))]
    pub email: String,

    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,

    pub role: Option<String>,

    #[validate(length(min = 1, message = "Cargo no puede estar vacío"))]
    pub cargo: String,

    #[validate(length(
        min = 2,
        max = 4,
        message = "Las iniciales deben tener entre 2 y 4 caracteres"
    ))]
    pub iniciales: String,

    #[validate(length(
        min = 3,
        message = "El nombre de usuario debe tener al menos 3 caracteres"
    ))]
    pub username: Option<String>,
}

/// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email inválido"))]
    pub email: String,

    #[validate(length(min = 1, message = "Contraseña es requerida"))]
    pub password: String,
}

/// Request para actualizar un usuario (merge parcial, solo admin)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Nombre no puede estar vacío"))]
    pub name: Option<String>,

    #[validate(email(message = "Email inválido"))]
    pub email: Option<String>,

    pub role: Option<String>,

    #[validate(length(min = 1, message = "Cargo no puede estar vacío"))]
    pub cargo: Option<String>,

    #[validate(length(
        min = 2,
        max = 4,
        message = "Las iniciales deben tener entre 2 y 4 caracteres"
    ))]
    pub iniciales: Option<String>,

    #[validate(length(
        min = 3,
        message = "El nombre de usuario debe tener al menos 3 caracteres"
    ))]
    pub username: Option<String>,

    pub grupos: Option<Vec<Uuid>>,
}

/// Grupo embebido en las respuestas de usuario
#[derive(Debug, Clone, Serialize)]
pub struct GrupoInfo {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: String,
    pub roles: Vec<String>,
}

impl From<Grupo> for GrupoInfo {
    fn from(grupo: Grupo) -> Self {
        Self {
            id: grupo.id,
            nombre: grupo.nombre,
            descripcion: grupo.descripcion,
            roles: grupo.roles,
        }
    }
}

/// Response de usuario (sin password, con grupos poblados)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub cargo: String,
    pub iniciales: String,
    pub grupos: Vec<GrupoInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn from_user(user: User, grupos: Vec<GrupoInfo>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            role: user.role,
            cargo: user.cargo,
            iniciales: user.iniciales,
            grupos,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response del registro: el usuario recién creado, sin sesión
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub cargo: String,
    pub iniciales: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterEnvelope {
    pub message: String,
    pub user: RegisteredUser,
}

#[derive(Debug, Serialize)]
pub struct LoginEnvelope {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub message: String,
    pub user: UserResponse,
}

/// Identidad mínima embebida en /verify
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub is_valid: bool,
    pub user: SessionUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: Uuid,
    pub role: String,
}
