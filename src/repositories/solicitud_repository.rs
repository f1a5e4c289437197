//! Repositorio de solicitudes de cotización

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::solicitud::Solicitud;
use crate::utils::errors::AppResult;

pub struct SolicitudRepository {
    pool: PgPool,
}

impl SolicitudRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        client_id: Uuid,
        nombre_contacto: &str,
        telefono: &str,
        email: &str,
        nombre_obra: &str,
        ubicacion_obra: &str,
        descripcion_servicios: &str,
        prioridad: &str,
    ) -> AppResult<Solicitud> {
        let solicitud = sqlx::query_as::<_, Solicitud>(
            r#"
            INSERT INTO solicitudes
                (client_id, nombre_contacto, telefono, email, nombre_obra,
                 ubicacion_obra, descripcion_servicios, prioridad, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'en-revisión')
            RETURNING *
            "#,
        )
        .bind(client_id)
        .bind(nombre_contacto)
        .bind(telefono)
        .bind(email)
        .bind(nombre_obra)
        .bind(ubicacion_obra)
        .bind(descripcion_servicios)
        .bind(prioridad)
        .fetch_one(&self.pool)
        .await?;

        Ok(solicitud)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Solicitud>> {
        let solicitud = sqlx::query_as::<_, Solicitud>("SELECT * FROM solicitudes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(solicitud)
    }

    /// Listar con filtros opcionales por estado y cliente
    pub async fn list(
        &self,
        status: Option<&str>,
        client_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Solicitud>> {
        let solicitudes = sqlx::query_as::<_, Solicitud>(
            r#"
            SELECT * FROM solicitudes
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR client_id = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(status)
        .bind(client_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(solicitudes)
    }

    pub async fn count(&self, status: Option<&str>, client_id: Option<Uuid>) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM solicitudes
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR client_id = $2)
            "#,
        )
        .bind(status)
        .bind(client_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Registrar la resolución de una solicitud (aprobación o rechazo)
    #[allow(clippy::too_many_arguments)]
    pub async fn resolver(
        &self,
        id: Uuid,
        status: &str,
        observaciones: Option<&str>,
        cotizacion_generada: Option<Uuid>,
        aprobado_por: Uuid,
        fecha_aprobacion: DateTime<Utc>,
    ) -> AppResult<Solicitud> {
        let solicitud = sqlx::query_as::<_, Solicitud>(
            r#"
            UPDATE solicitudes
            SET status = $2, observaciones = $3, cotizacion_generada = $4,
                aprobado_por = $5, fecha_aprobacion = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(observaciones)
        .bind(cotizacion_generada)
        .bind(aprobado_por)
        .bind(fecha_aprobacion)
        .fetch_one(&self.pool)
        .await?;

        Ok(solicitud)
    }

    pub async fn stats_by_status(&self) -> AppResult<Vec<(String, i64)>> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM solicitudes GROUP BY status")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }

    pub async fn count_all(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM solicitudes")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
