//! Repositorio de clientes

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::client::Client;
use crate::utils::errors::{AppError, AppResult};

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        razon_social: &str,
        rut: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> AppResult<Client> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (razon_social, rut, email, phone, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(razon_social)
        .bind(rut)
        .bind(email)
        .bind(phone)
        .bind(address)
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    pub async fn rut_exists(&self, rut: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE rut = $1)")
                .bind(rut)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Listar con búsqueda opcional sobre razón social, RUT o email
    pub async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Client>> {
        let like = search.map(|s| format!("%{}%", s));

        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT * FROM clients
            WHERE ($1::text IS NULL
                   OR razon_social ILIKE $1
                   OR rut ILIKE $1
                   OR email ILIKE $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&like)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn count(&self, search: Option<&str>) -> AppResult<i64> {
        let like = search.map(|s| format!("%{}%", s));

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM clients
            WHERE ($1::text IS NULL
                   OR razon_social ILIKE $1
                   OR rut ILIKE $1
                   OR email ILIKE $1)
            "#,
        )
        .bind(&like)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    pub async fn update(
        &self,
        id: Uuid,
        razon_social: Option<String>,
        rut: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> AppResult<Client> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET razon_social = $2, rut = $3, email = $4, phone = $5, address = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(razon_social.unwrap_or(current.razon_social))
        .bind(rut.unwrap_or(current.rut))
        .bind(email.unwrap_or(current.email))
        .bind(phone.unwrap_or(current.phone))
        .bind(address.unwrap_or(current.address))
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
