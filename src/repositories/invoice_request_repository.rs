//! Repositorio de solicitudes de facturación

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::invoice_request::InvoiceRequest;
use crate::utils::errors::{AppError, AppResult};

pub struct InvoiceRequestRepository {
    pool: PgPool,
}

impl InvoiceRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        solicitante: &str,
        telefono: &str,
        correo_contacto: &str,
        obra: &str,
        descripcion: &str,
        estado: &str,
        observaciones: Option<&str>,
    ) -> AppResult<InvoiceRequest> {
        let request = sqlx::query_as::<_, InvoiceRequest>(
            r#"
            INSERT INTO invoice_requests
                (solicitante, telefono, correo_contacto, obra, descripcion, estado, observaciones)
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'Sus comentarios.'))
            RETURNING *
            "#,
        )
        .bind(solicitante)
        .bind(telefono)
        .bind(correo_contacto)
        .bind(obra)
        .bind(descripcion)
        .bind(estado)
        .bind(observaciones)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<InvoiceRequest>> {
        let request =
            sqlx::query_as::<_, InvoiceRequest>("SELECT * FROM invoice_requests WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(request)
    }

    /// Listar con filtros por estado exacto y solicitante (búsqueda parcial)
    pub async fn list(
        &self,
        estado: Option<&str>,
        solicitante: Option<&str>,
    ) -> AppResult<Vec<InvoiceRequest>> {
        let like = solicitante.map(|s| format!("%{}%", s));

        let requests = sqlx::query_as::<_, InvoiceRequest>(
            r#"
            SELECT * FROM invoice_requests
            WHERE ($1::text IS NULL OR estado = $1)
              AND ($2::text IS NULL OR solicitante ILIKE $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(estado)
        .bind(&like)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        solicitante: Option<String>,
        telefono: Option<String>,
        correo_contacto: Option<String>,
        obra: Option<String>,
        descripcion: Option<String>,
        estado: Option<String>,
        observaciones: Option<String>,
    ) -> AppResult<InvoiceRequest> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no encontrada".to_string()))?;

        let request = sqlx::query_as::<_, InvoiceRequest>(
            r#"
            UPDATE invoice_requests
            SET solicitante = $2, telefono = $3, correo_contacto = $4, obra = $5,
                descripcion = $6, estado = $7, observaciones = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(solicitante.unwrap_or(current.solicitante))
        .bind(telefono.unwrap_or(current.telefono))
        .bind(correo_contacto.unwrap_or(current.correo_contacto))
        .bind(obra.unwrap_or(current.obra))
        .bind(descripcion.unwrap_or(current.descripcion))
        .bind(estado.unwrap_or(current.estado))
        .bind(observaciones.unwrap_or(current.observaciones))
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn update_estado(&self, id: Uuid, estado: &str) -> AppResult<Option<InvoiceRequest>> {
        let request = sqlx::query_as::<_, InvoiceRequest>(
            r#"
            UPDATE invoice_requests
            SET estado = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(estado)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM invoice_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
