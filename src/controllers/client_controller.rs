//! Controlador de clientes

use sqlx::PgPool;
use validator::Validate;

use uuid::Uuid;

use crate::dto::client_dto::{
    ClientEnvelope, ClientListQuery, ClientListResponse, ClientResponse, CreateClientRequest,
    UpdateClientRequest,
};
use crate::dto::common::{normalize_page_params, MessageResponse, PaginationMeta};
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct ClientController {
    clients: ClientRepository,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            clients: ClientRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateClientRequest) -> AppResult<ClientEnvelope> {
        request.validate().map_err(AppError::Validation)?;

        // Solo se pre-chequea el RUT; el índice único de email respalda
        // el resto, igual que en el registro original.
        if self.clients.rut_exists(&request.rut).await? {
            return Err(AppError::Conflict(
                "Ya existe un cliente con ese RUT o email".to_string(),
            ));
        }

        let client = self
            .clients
            .create(
                &request.razon_social,
                &request.rut,
                &request.email,
                &request.phone,
                &request.address,
            )
            .await?;

        Ok(ClientEnvelope {
            message: "Cliente creado exitosamente".to_string(),
            client: ClientResponse::from(client),
        })
    }

    pub async fn list(&self, query: ClientListQuery) -> AppResult<ClientListResponse> {
        let (page, limit) = normalize_page_params(query.page, query.limit);
        let offset = (page - 1) * limit;
        let search = query.search.as_deref();

        let clients = self.clients.list(search, limit, offset).await?;
        let total = self.clients.count(search).await?;

        Ok(ClientListResponse {
            clients: clients.into_iter().map(ClientResponse::from).collect(),
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ClientResponse> {
        let client = self
            .clients
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(ClientResponse::from(client))
    }

    pub async fn update(&self, id: Uuid, request: UpdateClientRequest) -> AppResult<ClientEnvelope> {
        request.validate().map_err(AppError::Validation)?;

        let client = self
            .clients
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        if let Some(rut) = request.rut.as_deref() {
            if rut != client.rut && self.clients.rut_exists(rut).await? {
                return Err(AppError::Conflict(
                    "Ya existe un cliente con ese RUT".to_string(),
                ));
            }
        }

        if let Some(email) = request.email.as_deref() {
            if email != client.email && self.clients.email_exists(email).await? {
                return Err(AppError::Conflict(
                    "Ya existe un cliente con ese email".to_string(),
                ));
            }
        }

        let updated = self
            .clients
            .update(
                id,
                request.razon_social,
                request.rut,
                request.email,
                request.phone,
                request.address,
            )
            .await?;

        Ok(ClientEnvelope {
            message: "Cliente actualizado exitosamente".to_string(),
            client: ClientResponse::from(updated),
        })
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<MessageResponse> {
        if !self.clients.delete(id).await? {
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }

        Ok(MessageResponse::new("Cliente eliminado exitosamente"))
    }
}
