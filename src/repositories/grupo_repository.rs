//! Repositorio de grupos

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::grupo::Grupo;
use crate::utils::errors::{AppError, AppResult};

pub struct GrupoRepository {
    pool: PgPool,
}

impl GrupoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: &str,
        descripcion: &str,
        miembros: &[Uuid],
        roles: &[String],
    ) -> AppResult<Grupo> {
        let grupo = sqlx::query_as::<_, Grupo>(
            r#"
            INSERT INTO grupos (nombre, descripcion, miembros, roles)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(nombre)
        .bind(descripcion)
        .bind(miembros)
        .bind(roles)
        .fetch_one(&self.pool)
        .await?;

        Ok(grupo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Grupo>> {
        let grupo = sqlx::query_as::<_, Grupo>("SELECT * FROM grupos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(grupo)
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Grupo>> {
        let grupos = sqlx::query_as::<_, Grupo>("SELECT * FROM grupos WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(grupos)
    }

    pub async fn nombre_exists(&self, nombre: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM grupos WHERE nombre = $1)")
                .bind(nombre)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Listar con búsqueda opcional sobre nombre o descripción
    pub async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Grupo>> {
        let like = search.map(|s| format!("%{}%", s));

        let grupos = sqlx::query_as::<_, Grupo>(
            r#"
            SELECT * FROM grupos
            WHERE ($1::text IS NULL OR nombre ILIKE $1 OR descripcion ILIKE $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&like)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(grupos)
    }

    pub async fn count(&self, search: Option<&str>) -> AppResult<i64> {
        let like = search.map(|s| format!("%{}%", s));

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM grupos
            WHERE ($1::text IS NULL OR nombre ILIKE $1 OR descripcion ILIKE $1)
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
        nombre: Option<String>,
        descripcion: Option<String>,
        miembros: Option<Vec<Uuid>>,
        roles: Option<Vec<String>>,
    ) -> AppResult<Grupo> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Grupo no encontrado".to_string()))?;

        let grupo = sqlx::query_as::<_, Grupo>(
            r#"
            UPDATE grupos
            SET nombre = $2, descripcion = $3, miembros = $4, roles = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(current.nombre))
        .bind(descripcion.unwrap_or(current.descripcion))
        .bind(miembros.unwrap_or(current.miembros))
        .bind(roles.unwrap_or(current.roles))
        .fetch_one(&self.pool)
        .await?;

        Ok(grupo)
    }

    /// Reemplazar la lista de miembros (alta/baja individual)
    pub async fn update_miembros(&self, id: Uuid, miembros: &[Uuid]) -> AppResult<Grupo> {
        let grupo = sqlx::query_as::<_, Grupo>(
            r#"
            UPDATE grupos
            SET miembros = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(miembros)
        .fetch_one(&self.pool)
        .await?;

        Ok(grupo)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM grupos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
