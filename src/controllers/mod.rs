//! Controladores: reglas de negocio entre rutas y repositorios

pub mod auth_controller;
pub mod client_controller;
pub mod cotizacion_controller;
pub mod grupo_controller;
pub mod invoice_request_controller;
pub mod solicitud_controller;
