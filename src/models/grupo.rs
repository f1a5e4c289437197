//! Modelo de Grupo

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Grupo {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: String,
    pub miembros: Vec<Uuid>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Roles que pueden tener los miembros del grupo
pub const VALID_GRUPO_ROLES: &[&str] = &["general", "gestion solicitudes", "gestion cotizaciones"];

pub fn is_valid_grupo_rol(rol: &str) -> bool {
    VALID_GRUPO_ROLES.contains(&rol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grupo_roles_are_validated() {
        assert!(is_valid_grupo_rol("general"));
        assert!(is_valid_grupo_rol("gestion solicitudes"));
        assert!(!is_valid_grupo_rol("superadmin"));
    }
}
