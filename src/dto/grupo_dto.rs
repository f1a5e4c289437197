//! DTOs de grupos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::PaginationMeta;
use crate::models::grupo::Grupo;
use crate::models::user::User;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGrupoRequest {
    #[validate(length(min = 1, message = "Nombre del grupo no puede estar vacío"))]
    pub nombre: String,

    #[validate(length(min = 1, message = "Descripción no puede estar vacía"))]
    pub descripcion: String,

    pub miembros: Option<Vec<Uuid>>,
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGrupoRequest {
    #[validate(length(min = 1, message = "Nombre del grupo no puede estar vacío"))]
    pub nombre: Option<String>,

    #[validate(length(min = 1, message = "Descripción no puede estar vacía"))]
    pub descripcion: Option<String>,

    pub miembros: Option<Vec<Uuid>>,
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct AddMiembroRequest {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

/// Miembro poblado: name email role cargo iniciales
#[derive(Debug, Clone, Serialize)]
pub struct MiembroResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub cargo: String,
    pub iniciales: String,
}

impl From<User> for MiembroResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            cargo: user.cargo,
            iniciales: user.iniciales,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrupoResponse {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: String,
    pub miembros: Vec<MiembroResponse>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GrupoResponse {
    pub fn from_grupo(grupo: Grupo, miembros: Vec<MiembroResponse>) -> Self {
        Self {
            id: grupo.id,
            nombre: grupo.nombre,
            descripcion: grupo.descripcion,
            miembros,
            roles: grupo.roles,
            created_at: grupo.created_at,
            updated_at: grupo.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GrupoEnvelope {
    pub message: String,
    pub grupo: GrupoResponse,
}

#[derive(Debug, Serialize)]
pub struct GrupoListResponse {
    pub grupos: Vec<GrupoResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct GrupoListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}
