//! Repositorios de persistencia (sqlx sobre PostgreSQL)

pub mod client_repository;
pub mod cotizacion_repository;
pub mod grupo_repository;
pub mod invoice_request_repository;
pub mod solicitud_repository;
pub mod user_repository;
