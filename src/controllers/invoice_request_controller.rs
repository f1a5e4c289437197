//! Controlador de solicitudes de facturación

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::MessageResponse;
use crate::dto::invoice_request_dto::{
    CreateInvoiceRequest, InvoiceListQuery, InvoiceRequestResponse, UpdateEstadoRequest,
    UpdateInvoiceRequest,
};
use crate::models::invoice_request::is_valid_invoice_estado;
use crate::repositories::invoice_request_repository::InvoiceRequestRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct InvoiceRequestController {
    requests: InvoiceRequestRepository,
}

impl InvoiceRequestController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            requests: InvoiceRequestRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateInvoiceRequest,
    ) -> AppResult<InvoiceRequestResponse> {
        request.validate().map_err(AppError::Validation)?;

        let estado = match request.estado {
            None => "pendiente".to_string(),
            Some(estado) => {
                if !is_valid_invoice_estado(&estado) {
                    return Err(AppError::BadRequest("Estado no válido".to_string()));
                }
                estado
            }
        };

        let created = self
            .requests
            .create(
                &request.solicitante,
                &request.telefono,
                &request.correo_contacto,
                &request.obra,
                &request.descripcion,
                &estado,
                request.observaciones.as_deref(),
            )
            .await?;

        Ok(InvoiceRequestResponse::from(created))
    }

    pub async fn list(&self, query: InvoiceListQuery) -> AppResult<Vec<InvoiceRequestResponse>> {
        let requests = self
            .requests
            .list(query.estado.as_deref(), query.solicitante.as_deref())
            .await?;

        Ok(requests
            .into_iter()
            .map(InvoiceRequestResponse::from)
            .collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<InvoiceRequestResponse> {
        let request = self
            .requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no encontrada".to_string()))?;

        Ok(InvoiceRequestResponse::from(request))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateInvoiceRequest,
    ) -> AppResult<InvoiceRequestResponse> {
        request.validate().map_err(AppError::Validation)?;

        if let Some(estado) = request.estado.as_deref() {
            if !is_valid_invoice_estado(estado) {
                return Err(AppError::BadRequest("Estado no válido".to_string()));
            }
        }

        let updated = self
            .requests
            .update(
                id,
                request.solicitante,
                request.telefono,
                request.correo_contacto,
                request.obra,
                request.descripcion,
                request.estado,
                request.observaciones,
            )
            .await?;

        Ok(InvoiceRequestResponse::from(updated))
    }

    pub async fn update_estado(
        &self,
        id: Uuid,
        request: UpdateEstadoRequest,
    ) -> AppResult<InvoiceRequestResponse> {
        if !is_valid_invoice_estado(&request.estado) {
            return Err(AppError::BadRequest("Estado no válido".to_string()));
        }

        let updated = self
            .requests
            .update_estado(id, &request.estado)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no encontrada".to_string()))?;

        Ok(InvoiceRequestResponse::from(updated))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<MessageResponse> {
        if !self.requests.delete(id).await? {
            return Err(AppError::NotFound("Solicitud no encontrada".to_string()));
        }

        Ok(MessageResponse::new("Solicitud eliminada correctamente"))
    }
}
