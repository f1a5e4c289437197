//! Modelo de Client
//!
//! El RUT es la clave de negocio única del cliente; email también
//! lleva índice único.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub razon_social: String,
    pub rut: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
