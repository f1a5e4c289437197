//! Repositorio de cotizaciones

use sqlx::types::{Decimal, Json};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cotizacion::{Cotizacion, CotizacionItem};
use crate::utils::errors::{AppError, AppResult};

pub struct CotizacionRepository {
    pool: PgPool,
}

impl CotizacionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        client_id: Uuid,
        items: Vec<CotizacionItem>,
        total_amount: Option<Decimal>,
        status: &str,
    ) -> AppResult<Cotizacion> {
        let cotizacion = sqlx::query_as::<_, Cotizacion>(
            r#"
            INSERT INTO cotizaciones (client_id, items, total_amount, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(client_id)
        .bind(Json(items))
        .bind(total_amount)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(cotizacion)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Cotizacion>> {
        let cotizacion = sqlx::query_as::<_, Cotizacion>("SELECT * FROM cotizaciones WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cotizacion)
    }

    /// Listar con filtros opcionales por estado y cliente
    pub async fn list(
        &self,
        status: Option<&str>,
        client_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Cotizacion>> {
        let cotizaciones = sqlx::query_as::<_, Cotizacion>(
            r#"
            SELECT * FROM cotizaciones
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

        Ok(cotizaciones)
    }

    pub async fn count(&self, status: Option<&str>, client_id: Option<Uuid>) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM cotizaciones
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

    pub async fn update(
        &self,
        id: Uuid,
        client_id: Option<Uuid>,
        items: Option<Vec<CotizacionItem>>,
        total_amount: Option<Decimal>,
        status: Option<String>,
    ) -> AppResult<Cotizacion> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cotización no encontrada".to_string()))?;

        let cotizacion = sqlx::query_as::<_, Cotizacion>(
            r#"
            UPDATE cotizaciones
            SET client_id = $2, items = $3, total_amount = $4, status = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(client_id.unwrap_or(current.client_id))
        .bind(Json(items.unwrap_or(current.items.0)))
        .bind(total_amount.or(current.total_amount))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(cotizacion)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Option<Cotizacion>> {
        let cotizacion = sqlx::query_as::<_, Cotizacion>(
            r#"
            UPDATE cotizaciones
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cotizacion)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cotizaciones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Conteo y monto acumulado por estado
    pub async fn stats_by_status(&self) -> AppResult<Vec<(String, i64, Decimal)>> {
        let rows: Vec<(String, i64, Decimal)> = sqlx::query_as(
            r#"
            SELECT status, COUNT(*), COALESCE(SUM(total_amount), 0)
            FROM cotizaciones
            GROUP BY status
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn count_all(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cotizaciones")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
