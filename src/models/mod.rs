//! Modelos de datos
//!
//! Structs que mapean 1:1 a las tablas de la base de datos, más los
//! enums de estados y sus listas de valores válidos.

pub mod client;
pub mod cotizacion;
pub mod grupo;
pub mod invoice_request;
pub mod solicitud;
pub mod user;
