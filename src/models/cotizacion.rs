//! Modelo de Cotización

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::{Decimal, Json};
use sqlx::FromRow;
use uuid::Uuid;

/// Ítem de servicio dentro de una cotización
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CotizacionItem {
    pub servicio: String,
    pub telefono: String,
    #[serde(rename = "nombreContacto")]
    pub nombre_contacto: String,
    pub obra: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Cotizacion {
    pub id: Uuid,
    pub client_id: Uuid,
    pub items: Json<Vec<CotizacionItem>>,
    pub total_amount: Option<Decimal>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Estados de una cotización
pub const VALID_COTIZACION_STATUSES: &[&str] =
    &["en-revisión", "pendiente", "aprobado", "rechazado"];

/// Estados aceptados por el endpoint de cambio de estado
pub const SETTABLE_COTIZACION_STATUSES: &[&str] = &["pendiente", "aprobado", "rechazado"];

pub fn is_valid_cotizacion_status(status: &str) -> bool {
    VALID_COTIZACION_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_validated() {
        assert!(is_valid_cotizacion_status("pendiente"));
        assert!(is_valid_cotizacion_status("en-revisión"));
        assert!(!is_valid_cotizacion_status("cerrado"));
    }

    #[test]
    fn item_uses_original_wire_names() {
        let item = CotizacionItem {
            servicio: "Ensayo de hormigón".to_string(),
            telefono: "987654321".to_string(),
            nombre_contacto: "Ana Soto".to_string(),
            obra: "Edificio Central".to_string(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("nombreContacto").is_some());
        assert!(value.get("nombre_contacto").is_none());
    }
}
