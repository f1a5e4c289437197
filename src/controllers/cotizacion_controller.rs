//! Controlador de cotizaciones

use sqlx::types::Decimal;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

use crate::dto::client_dto::ClientResponse;
use crate::dto::common::{normalize_page_params, MessageResponse, PaginationMeta};
use crate::dto::cotizacion_dto::{
    CotizacionEnvelope, CotizacionListQuery, CotizacionListResponse, CotizacionResponse,
    CotizacionStatsResponse, CreateCotizacionRequest, StatusAmountCount, UpdateCotizacionRequest,
    UpdateStatusRequest,
};
use crate::models::cotizacion::{
    is_valid_cotizacion_status, Cotizacion, SETTABLE_COTIZACION_STATUSES,
};
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::cotizacion_repository::CotizacionRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct CotizacionController {
    cotizaciones: CotizacionRepository,
    clients: ClientRepository,
}

impl CotizacionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cotizaciones: CotizacionRepository::new(pool.clone()),
            clients: ClientRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCotizacionRequest) -> AppResult<CotizacionEnvelope> {
        request.validate().map_err(AppError::Validation)?;

        let client = self
            .clients
            .find_by_id(request.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let total_amount = match request.total_amount {
            Some(amount) => Some(decimal_from_f64(amount)?),
            None => None,
        };

        let cotizacion = self
            .cotizaciones
            .create(request.client_id, request.items, total_amount, "pendiente")
            .await?;

        Ok(CotizacionEnvelope {
            message: "Cotización creada exitosamente".to_string(),
            cotizacion: CotizacionResponse::from_parts(cotizacion, ClientResponse::from(client)),
        })
    }

    pub async fn list(&self, query: CotizacionListQuery) -> AppResult<CotizacionListResponse> {
        let (page, limit) = normalize_page_params(query.page, query.limit);
        let offset = (page - 1) * limit;
        let status = query.status.as_deref();

        let cotizaciones = self
            .cotizaciones
            .list(status, query.client_id, limit, offset)
            .await?;
        let total = self.cotizaciones.count(status, query.client_id).await?;

        let populated = self.populate_all(cotizaciones).await?;

        Ok(CotizacionListResponse {
            cotizaciones: populated,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CotizacionResponse> {
        let cotizacion = self
            .cotizaciones
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cotización no encontrada".to_string()))?;

        self.populate(cotizacion).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCotizacionRequest,
    ) -> AppResult<CotizacionEnvelope> {
        request.validate().map_err(AppError::Validation)?;

        let cotizacion = self
            .cotizaciones
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cotización no encontrada".to_string()))?;

        if let Some(client_id) = request.client_id {
            if client_id != cotizacion.client_id
                && self.clients.find_by_id(client_id).await?.is_none()
            {
                return Err(AppError::NotFound("Cliente no encontrado".to_string()));
            }
        }

        if let Some(status) = request.status.as_deref() {
            if !is_valid_cotizacion_status(status) {
                return Err(AppError::BadRequest("Estado inválido".to_string()));
            }
        }

        let total_amount = match request.total_amount {
            Some(amount) => Some(decimal_from_f64(amount)?),
            None => None,
        };

        let updated = self
            .cotizaciones
            .update(
                id,
                request.client_id,
                request.items,
                total_amount,
                request.status,
            )
            .await?;

        let cotizacion = self.populate(updated).await?;

        Ok(CotizacionEnvelope {
            message: "Cotización actualizada exitosamente".to_string(),
            cotizacion,
        })
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateStatusRequest,
    ) -> AppResult<CotizacionEnvelope> {
        if !SETTABLE_COTIZACION_STATUSES.contains(&request.status.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Estado inválido. Los estados válidos son: {}",
                SETTABLE_COTIZACION_STATUSES.join(", ")
            )));
        }

        let updated = self
            .cotizaciones
            .update_status(id, &request.status)
            .await?
            .ok_or_else(|| AppError::NotFound("Cotización no encontrada".to_string()))?;

        let message = format!("Cotización {} exitosamente", request.status);
        let cotizacion = self.populate(updated).await?;

        Ok(CotizacionEnvelope {
            message,
            cotizacion,
        })
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<MessageResponse> {
        if !self.cotizaciones.delete(id).await? {
            return Err(AppError::NotFound("Cotización no encontrada".to_string()));
        }

        Ok(MessageResponse::new("Cotización eliminada exitosamente"))
    }

    pub async fn stats(&self) -> AppResult<CotizacionStatsResponse> {
        let breakdown = self
            .cotizaciones
            .stats_by_status()
            .await?
            .into_iter()
            .map(|(status, count, total_amount)| StatusAmountCount {
                status,
                count,
                total_amount: total_amount.to_string().parse().unwrap_or(0.0),
            })
            .collect();

        let total = self.cotizaciones.count_all().await?;

        Ok(CotizacionStatsResponse {
            total_cotizaciones: total,
            status_breakdown: breakdown,
        })
    }

    async fn populate(&self, cotizacion: Cotizacion) -> AppResult<CotizacionResponse> {
        let client = self
            .clients
            .find_by_id(cotizacion.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(CotizacionResponse::from_parts(
            cotizacion,
            ClientResponse::from(client),
        ))
    }

    async fn populate_all(
        &self,
        cotizaciones: Vec<Cotizacion>,
    ) -> AppResult<Vec<CotizacionResponse>> {
        let mut client_ids: Vec<Uuid> = cotizaciones.iter().map(|c| c.client_id).collect();
        client_ids.sort();
        client_ids.dedup();

        let clients_by_id: HashMap<Uuid, ClientResponse> = self
            .clients
            .find_by_ids(&client_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, ClientResponse::from(c)))
            .collect();

        cotizaciones
            .into_iter()
            .map(|cotizacion| {
                let client = clients_by_id
                    .get(&cotizacion.client_id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;
                Ok(CotizacionResponse::from_parts(cotizacion, client))
            })
            .collect()
    }
}

fn decimal_from_f64(amount: f64) -> AppResult<Decimal> {
    if amount < 0.0 {
        return Err(AppError::BadRequest(
            "El monto total debe ser mayor o igual a 0".to_string(),
        ));
    }

    Decimal::from_f64_retain(amount)
        .ok_or_else(|| AppError::BadRequest("Monto total inválido".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_amounts_are_rejected() {
        assert!(decimal_from_f64(-1.0).is_err());
        assert!(decimal_from_f64(0.0).is_ok());
        assert!(decimal_from_f64(150000.5).is_ok());
    }
}
