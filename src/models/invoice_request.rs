//! Modelo de solicitud de facturación

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct InvoiceRequest {
    pub id: Uuid,
    pub solicitante: String,
    pub telefono: String,
    pub correo_contacto: String,
    pub obra: String,
    pub descripcion: String,
    pub fecha_solicitud: DateTime<Utc>,
    pub estado: String,
    pub observaciones: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const VALID_INVOICE_ESTADOS: &[&str] = &["pendiente", "aprobado", "rechazado"];

pub fn is_valid_invoice_estado(estado: &str) -> bool {
    VALID_INVOICE_ESTADOS.contains(&estado)
}
