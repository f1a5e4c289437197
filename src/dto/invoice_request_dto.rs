//! DTOs de solicitudes de facturación

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::invoice_request::InvoiceRequest;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(length(min = 1, message = "El nombre del solicitante no puede estar vacío"))]
    pub solicitante: String,

    #[validate(
        length(
            min = 9,
            max = 15,
            message = "El teléfono debe tener entre 9 y 15 caracteres"
        ),
        custom = "crate::utils::validation::validate_telefono_digits"
    )]
    pub telefono: String,

    #[serde(rename = "correoContacto")]
    #[validate(email(message = "Debe ser un correo electrónico válido"))]
    pub correo_contacto: String,

    #[validate(length(min = 1, message = "El nombre de la obra no puede estar vacío"))]
    pub obra: String,

    #[validate(length(min = 1, message = "La descripción no puede estar vacía"))]
    pub descripcion: String,

    pub estado: Option<String>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInvoiceRequest {
    #[validate(length(min = 1, message = "El nombre del solicitante no puede estar vacío"))]
    pub solicitante: Option<String>,

    #[validate(
        length(
            min = 9,
            max = 15,
            message = "El teléfono debe tener entre 9 y 15 caracteres"
        ),
        custom = "crate::utils::validation::validate_telefono_digits"
    )]
    pub telefono: Option<String>,

    #[serde(rename = "correoContacto")]
    #[validate(email(message = "Debe ser un correo electrónico válido"))]
    pub correo_contacto: Option<String>,

    #[validate(length(min = 1, message = "El nombre de la obra no puede estar vacío"))]
    pub obra: Option<String>,

    #[validate(length(min = 1, message = "La descripción no puede estar vacía"))]
    pub descripcion: Option<String>,

    pub estado: Option<String>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEstadoRequest {
    pub estado: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequestResponse {
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

impl From<InvoiceRequest> for InvoiceRequestResponse {
    fn from(request: InvoiceRequest) -> Self {
        Self {
            id: request.id,
            solicitante: request.solicitante,
            telefono: request.telefono,
            correo_contacto: request.correo_contacto,
            obra: request.obra,
            descripcion: request.descripcion,
            fecha_solicitud: request.fecha_solicitud,
            estado: request.estado,
            observaciones: request.observaciones,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

/// Filtros del listado (sin paginación, como el original)
#[derive(Debug, Deserialize)]
pub struct InvoiceListQuery {
    pub estado: Option<String>,
    pub solicitante: Option<String>,
}
