//! Modelo de Solicitud
//!
//! Una solicitud nace `en-revisión` y solo desde ese estado puede
//! pasar a `aprobado` o `rechazado`; ambos son terminales.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Solicitud {
    pub id: Uuid,
    pub client_id: Uuid,
    pub nombre_contacto: String,
    pub telefono: String,
    pub email: String,
    pub nombre_obra: String,
    pub ubicacion_obra: String,
    pub descripcion_servicios: String,
    pub prioridad: String,
    pub status: String,
    pub observaciones: Option<String>,
    pub cotizacion_generada: Option<Uuid>,
    pub aprobado_por: Option<Uuid>,
    pub fecha_aprobacion: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Estados de una solicitud
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolicitudStatus {
    EnRevision,
    Aprobado,
    Rechazado,
}

impl SolicitudStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolicitudStatus::EnRevision => "en-revisión",
            SolicitudStatus::Aprobado => "aprobado",
            SolicitudStatus::Rechazado => "rechazado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en-revisión" => Some(SolicitudStatus::EnRevision),
            "aprobado" => Some(SolicitudStatus::Aprobado),
            "rechazado" => Some(SolicitudStatus::Rechazado),
            _ => None,
        }
    }

    /// Solo las solicitudes en revisión admiten una resolución
    pub fn puede_resolverse(&self) -> bool {
        matches!(self, SolicitudStatus::EnRevision)
    }
}

/// Prioridades de una solicitud
pub const VALID_PRIORIDADES: &[&str] = &["Alta", "Media", "Baja"];

pub fn is_valid_prioridad(prioridad: &str) -> bool {
    VALID_PRIORIDADES.contains(&prioridad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrip() {
        for status in [
            SolicitudStatus::EnRevision,
            SolicitudStatus::Aprobado,
            SolicitudStatus::Rechazado,
        ] {
            assert_eq!(SolicitudStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SolicitudStatus::parse("pendiente"), None);
    }

    #[test]
    fn solo_en_revision_puede_resolverse() {
        assert!(SolicitudStatus::EnRevision.puede_resolverse());
        assert!(!SolicitudStatus::Aprobado.puede_resolverse());
        assert!(!SolicitudStatus::Rechazado.puede_resolverse());
    }

    #[test]
    fn prioridades_validas() {
        assert!(is_valid_prioridad("Media"));
        assert!(!is_valid_prioridad("Urgente"));
    }
}
