//! DTOs de request/response de la API
//!
//! Los nombres de alambre conservan el camelCase en español del
//! frontend (`razonSocial`, `nombreContacto`, `cotizacionGenerada`).

pub mod auth_dto;
pub mod client_dto;
pub mod common;
pub mod cotizacion_dto;
pub mod grupo_dto;
pub mod invoice_request_dto;
pub mod solicitud_dto;
