//! DTOs de cotizaciones

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::client_dto::ClientResponse;
use crate::dto::common::PaginationMeta;
use crate::models::cotizacion::{Cotizacion, CotizacionItem};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCotizacionRequest {
    #[serde(rename = "clientId")]
    pub client_id: Uuid,

    #[validate(length(min = 1, message = "Debe haber al menos un item"))]
    pub items: Vec<CotizacionItem>,

    #[serde(rename = "totalAmount")]
    pub total_amount: Option<f64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCotizacionRequest {
    #[serde(rename = "clientId")]
    pub client_id: Option<Uuid>,

    #[validate(length(min = 1, message = "Debe haber al menos un item"))]
    pub items: Option<Vec<CotizacionItem>>,

    #[serde(rename = "totalAmount")]
    pub total_amount: Option<f64>,

    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CotizacionResponse {
    pub id: Uuid,
    pub client: ClientResponse,
    pub items: Vec<CotizacionItem>,
    pub total_amount: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CotizacionResponse {
    pub fn from_parts(cotizacion: Cotizacion, client: ClientResponse) -> Self {
        Self {
            id: cotizacion.id,
            client,
            items: cotizacion.items.0,
            total_amount: cotizacion
                .total_amount
                .map(|d| d.to_string().parse().unwrap_or(0.0)),
            status: cotizacion.status,
            created_at: cotizacion.created_at,
            updated_at: cotizacion.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CotizacionEnvelope {
    pub message: String,
    pub cotizacion: CotizacionResponse,
}

#[derive(Debug, Serialize)]
pub struct CotizacionListResponse {
    pub cotizaciones: Vec<CotizacionResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct CotizacionListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    #[serde(rename = "clientId")]
    pub client_id: Option<Uuid>,
}

/// Desglose por estado con el monto acumulado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusAmountCount {
    pub status: String,
    pub count: i64,
    pub total_amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CotizacionStatsResponse {
    pub total_cotizaciones: i64,
    pub status_breakdown: Vec<StatusAmountCount>,
}
