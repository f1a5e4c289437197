//! DTOs de solicitudes de cotización

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::client_dto::ClientResponse;
use crate::dto::common::{PaginationMeta, StatusCount};
use crate::dto::cotizacion_dto::CotizacionResponse;
use crate::models::solicitud::Solicitud;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSolicitudRequest {
    #[serde(rename = "clientId")]
    pub client_id: Uuid,

    #[serde(rename = "nombreContacto")]
    #[validate(length(min = 1, message = "Nombre del contacto no puede estar vacío"))]
    pub nombre_contacto: String,

    #[validate(length(min = 8, message = "Teléfono debe tener al menos 8 caracteres"))]
    pub telefono: String,

    #[validate(email(message = "Email inválido"))]
    pub email: String,

    #[serde(rename = "nombreObra")]
    #[validate(length(min = 1, message = "Nombre de la obra no puede estar vacío"))]
    pub nombre_obra: String,

    #[serde(rename = "ubicacionObra")]
    #[validate(length(min = 1, message = "Ubicación de la obra no puede estar vacía"))]
    pub ubicacion_obra: String,

    #[serde(rename = "descripcionServicios")]
    #[validate(length(min = 1, message = "Descripción de servicios no puede estar vacía"))]
    pub descripcion_servicios: String,

    pub prioridad: Option<String>,
}

/// Cuerpo de aprobar/rechazar
#[derive(Debug, Deserialize)]
pub struct ResolverSolicitudRequest {
    pub observaciones: Option<String>,
}

/// Aprobador poblado (solo el nombre, como el `populate` original)
#[derive(Debug, Clone, Serialize)]
pub struct AprobadoPorInfo {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudResponse {
    pub id: Uuid,
    pub client: ClientResponse,
    pub nombre_contacto: String,
    pub telefono: String,
    pub email: String,
    pub nombre_obra: String,
    pub ubicacion_obra: String,
    pub descripcion_servicios: String,
    pub prioridad: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cotizacion_generada: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aprobado_por: Option<AprobadoPorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_aprobacion: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SolicitudResponse {
    pub fn from_parts(
        solicitud: Solicitud,
        client: ClientResponse,
        aprobado_por: Option<AprobadoPorInfo>,
    ) -> Self {
        Self {
            id: solicitud.id,
            client,
            nombre_contacto: solicitud.nombre_contacto,
            telefono: solicitud.telefono,
            email: solicitud.email,
            nombre_obra: solicitud.nombre_obra,
            ubicacion_obra: solicitud.ubicacion_obra,
            descripcion_servicios: solicitud.descripcion_servicios,
            prioridad: solicitud.prioridad,
            status: solicitud.status,
            observaciones: solicitud.observaciones,
            cotizacion_generada: solicitud.cotizacion_generada,
            aprobado_por,
            fecha_aprobacion: solicitud.fecha_aprobacion,
            created_at: solicitud.created_at,
            updated_at: solicitud.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SolicitudEnvelope {
    pub message: String,
    pub solicitud: SolicitudResponse,
}

/// Respuesta de la aprobación: la solicitud y la cotización generada
#[derive(Debug, Serialize)]
pub struct AprobacionEnvelope {
    pub message: String,
    pub solicitud: SolicitudResponse,
    pub cotizacion: CotizacionResponse,
}

#[derive(Debug, Serialize)]
pub struct SolicitudListResponse {
    pub solicitudes: Vec<SolicitudResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct SolicitudListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    #[serde(rename = "clientId")]
    pub client_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudStatsResponse {
    pub total_solicitudes: i64,
    pub status_breakdown: Vec<StatusCount>,
}
