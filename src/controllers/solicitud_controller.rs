//! Controlador de solicitudes de cotización
//!
//! Incluye el flujo de aprobación: una solicitud `en-revisión` puede
//! aprobarse (generando una cotización pendiente) o rechazarse; ambos
//! estados son terminales.

use chrono::Utc;
use sqlx::types::Decimal;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

use crate::dto::client_dto::ClientResponse;
use crate::dto::common::{normalize_page_params, PaginationMeta, StatusCount};
use crate::dto::cotizacion_dto::CotizacionResponse;
use crate::dto::solicitud_dto::{
    AprobacionEnvelope, AprobadoPorInfo, CreateSolicitudRequest, ResolverSolicitudRequest,
    SolicitudEnvelope, SolicitudListQuery, SolicitudListResponse, SolicitudResponse,
    SolicitudStatsResponse,
};
use crate::models::cotizacion::CotizacionItem;
use crate::models::solicitud::{is_valid_prioridad, Solicitud, SolicitudStatus};
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::cotizacion_repository::CotizacionRepository;
use crate::repositories::solicitud_repository::SolicitudRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct SolicitudController {
    solicitudes: SolicitudRepository,
    clients: ClientRepository,
    cotizaciones: CotizacionRepository,
    users: UserRepository,
}

impl SolicitudController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            solicitudes: SolicitudRepository::new(pool.clone()),
            clients: ClientRepository::new(pool.clone()),
            cotizaciones: CotizacionRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateSolicitudRequest) -> AppResult<SolicitudEnvelope> {
        request.validate().map_err(AppError::Validation)?;

        let client = self
            .clients
            .find_by_id(request.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let prioridad = match request.prioridad {
            None => "Media".to_string(),
            Some(prioridad) => {
                if !is_valid_prioridad(&prioridad) {
                    return Err(AppError::BadRequest("Prioridad inválida".to_string()));
                }
                prioridad
            }
        };

        let solicitud = self
            .solicitudes
            .create(
                request.client_id,
                &request.nombre_contacto,
                &request.telefono,
                &request.email,
                &request.nombre_obra,
                &request.ubicacion_obra,
                &request.descripcion_servicios,
                &prioridad,
            )
            .await?;

        Ok(SolicitudEnvelope {
            message: "Solicitud registrada exitosamente".to_string(),
            solicitud: SolicitudResponse::from_parts(solicitud, ClientResponse::from(client), None),
        })
    }

    pub async fn list(&self, query: SolicitudListQuery) -> AppResult<SolicitudListResponse> {
        let (page, limit) = normalize_page_params(query.page, query.limit);
        let offset = (page - 1) * limit;
        let status = query.status.as_deref();

        let solicitudes = self
            .solicitudes
            .list(status, query.client_id, limit, offset)
            .await?;
        let total = self.solicitudes.count(status, query.client_id).await?;

        let populated = self.populate_all(solicitudes).await?;

        Ok(SolicitudListResponse {
            solicitudes: populated,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<SolicitudResponse> {
        let solicitud = self
            .solicitudes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no encontrada".to_string()))?;

        self.populate(solicitud).await
    }

    /// Aprobar una solicitud en revisión generando su cotización
    pub async fn aprobar(
        &self,
        id: Uuid,
        request: ResolverSolicitudRequest,
        acting_user_id: Uuid,
    ) -> AppResult<AprobacionEnvelope> {
        let solicitud = self
            .solicitudes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no encontrada".to_string()))?;

        self.ensure_en_revision(&solicitud, "aprobar")?;

        // Cotización sembrada con los datos de contacto y servicio de la
        // solicitud; nace pendiente y sin monto.
        let items = vec![CotizacionItem {
            servicio: solicitud.descripcion_servicios.clone(),
            telefono: solicitud.telefono.clone(),
            nombre_contacto: solicitud.nombre_contacto.clone(),
            obra: solicitud.nombre_obra.clone(),
        }];

        let cotizacion = self
            .cotizaciones
            .create(solicitud.client_id, items, Some(Decimal::ZERO), "pendiente")
            .await?;

        // Las dos escrituras no comparten transacción: un corte entre la
        // inserción y el update deja una cotización huérfana.
        let actualizada = self
            .solicitudes
            .resolver(
                id,
                SolicitudStatus::Aprobado.as_str(),
                request.observaciones.as_deref(),
                Some(cotizacion.id),
                acting_user_id,
                Utc::now(),
            )
            .await?;

        let client = self
            .clients
            .find_by_id(actualizada.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;
        let client = ClientResponse::from(client);

        let aprobado_por = self.approver_info(Some(acting_user_id)).await?;

        Ok(AprobacionEnvelope {
            message: "Solicitud aprobada exitosamente".to_string(),
            solicitud: SolicitudResponse::from_parts(actualizada, client.clone(), aprobado_por),
            cotizacion: CotizacionResponse::from_parts(cotizacion, client),
        })
    }

    /// Rechazar una solicitud en revisión
    pub async fn rechazar(
        &self,
        id: Uuid,
        request: ResolverSolicitudRequest,
        acting_user_id: Uuid,
    ) -> AppResult<SolicitudEnvelope> {
        let solicitud = self
            .solicitudes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no encontrada".to_string()))?;

        self.ensure_en_revision(&solicitud, "rechazar")?;

        let actualizada = self
            .solicitudes
            .resolver(
                id,
                SolicitudStatus::Rechazado.as_str(),
                request.observaciones.as_deref(),
                None,
                acting_user_id,
                Utc::now(),
            )
            .await?;

        let solicitud = self.populate(actualizada).await?;

        Ok(SolicitudEnvelope {
            message: "Solicitud rechazada exitosamente".to_string(),
            solicitud,
        })
    }

    pub async fn stats(&self) -> AppResult<SolicitudStatsResponse> {
        let breakdown = self
            .solicitudes
            .stats_by_status()
            .await?
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect();

        let total = self.solicitudes.count_all().await?;

        Ok(SolicitudStatsResponse {
            total_solicitudes: total,
            status_breakdown: breakdown,
        })
    }

    fn ensure_en_revision(&self, solicitud: &Solicitud, accion: &str) -> AppResult<()> {
        let status = SolicitudStatus::parse(&solicitud.status).ok_or_else(|| {
            AppError::Internal(format!("Estado de solicitud desconocido: {}", solicitud.status))
        })?;

        if !status.puede_resolverse() {
            return Err(AppError::BadRequest(format!(
                "Solo se pueden {} solicitudes en revisión",
                accion
            )));
        }

        Ok(())
    }

    async fn approver_info(&self, user_id: Option<Uuid>) -> AppResult<Option<AprobadoPorInfo>> {
        let Some(user_id) = user_id else {
            return Ok(None);
        };

        Ok(self
            .users
            .find_by_id(user_id)
            .await?
            .map(|user| AprobadoPorInfo {
                id: user.id,
                name: user.name,
            }))
    }

    async fn populate(&self, solicitud: Solicitud) -> AppResult<SolicitudResponse> {
        let client = self
            .clients
            .find_by_id(solicitud.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let aprobado_por = self.approver_info(solicitud.aprobado_por).await?;

        Ok(SolicitudResponse::from_parts(
            solicitud,
            ClientResponse::from(client),
            aprobado_por,
        ))
    }

    async fn populate_all(&self, solicitudes: Vec<Solicitud>) -> AppResult<Vec<SolicitudResponse>> {
        let mut client_ids: Vec<Uuid> = solicitudes.iter().map(|s| s.client_id).collect();
        client_ids.sort();
        client_ids.dedup();

        let clients_by_id: HashMap<Uuid, ClientResponse> = self
            .clients
            .find_by_ids(&client_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, ClientResponse::from(c)))
            .collect();

        let mut approver_ids: Vec<Uuid> =
            solicitudes.iter().filter_map(|s| s.aprobado_por).collect();
        approver_ids.sort();
        approver_ids.dedup();

        let approvers_by_id: HashMap<Uuid, AprobadoPorInfo> = self
            .users
            .find_by_ids(&approver_ids)
            .await?
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    AprobadoPorInfo {
                        id: u.id,
                        name: u.name,
                    },
                )
            })
            .collect();

        solicitudes
            .into_iter()
            .map(|solicitud| {
                let client = clients_by_id
                    .get(&solicitud.client_id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;
                let aprobado_por = solicitud
                    .aprobado_por
                    .and_then(|id| approvers_by_id.get(&id).cloned());
                Ok(SolicitudResponse::from_parts(
                    solicitud,
                    client,
                    aprobado_por,
                ))
            })
            .collect()
    }
}
