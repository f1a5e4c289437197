//! DTOs de clientes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::PaginationMeta;
use crate::models::client::Client;

/// Request para crear un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[serde(rename = "razonSocial")]
    #[validate(length(min = 1, message = "Razón social no puede estar vacía"))]
    pub razon_social: String,

    #[validate(length(min = 8, message = "RUT debe tener al menos 8 caracteres"))]
    pub rut: String,

    #[validate(email(message = "Email inválido"))]
    pub email: String,

    #[validate(length(min = 8, message = "Teléfono debe tener al menos 8 caracteres"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Dirección no puede estar vacía"))]
    pub address: String,
}

/// Request para actualizar un cliente (merge parcial)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[serde(rename = "razonSocial")]
    #[validate(length(min = 1, message = "Razón social no puede estar vacía"))]
    pub razon_social: Option<String>,

    #[validate(length(min = 8, message = "RUT debe tener al menos 8 caracteres"))]
    pub rut: Option<String>,

    #[validate(email(message = "Email inválido"))]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "Teléfono debe tener al menos 8 caracteres"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "Dirección no puede estar vacía"))]
    pub address: Option<String>,
}

/// Response de cliente para la API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: Uuid,
    pub razon_social: String,
    pub rut: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            razon_social: client.razon_social,
            rut: client.rut,
            email: client.email,
            phone: client.phone,
            address: client.address,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClientEnvelope {
    pub message: String,
    pub client: ClientResponse,
}

#[derive(Debug, Serialize)]
pub struct ClientListResponse {
    pub clients: Vec<ClientResponse>,
    pub pagination: PaginationMeta,
}

/// Filtros del listado de clientes
#[derive(Debug, Deserialize)]
pub struct ClientListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}
