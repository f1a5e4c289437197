//! Controlador de grupos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{normalize_page_params, MessageResponse, PaginationMeta};
use crate::dto::grupo_dto::{
    AddMiembroRequest, CreateGrupoRequest, GrupoEnvelope, GrupoListQuery, GrupoListResponse,
    GrupoResponse, MiembroResponse, UpdateGrupoRequest,
};
use crate::models::grupo::{is_valid_grupo_rol, Grupo};
use crate::repositories::grupo_repository::GrupoRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct GrupoController {
    grupos: GrupoRepository,
    users: UserRepository,
}

impl GrupoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            grupos: GrupoRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateGrupoRequest) -> AppResult<GrupoEnvelope> {
        request.validate().map_err(AppError::Validation)?;

        if self.grupos.nombre_exists(&request.nombre).await? {
            return Err(AppError::Conflict(
                "Ya existe un grupo con ese nombre".to_string(),
            ));
        }

        let miembros = request.miembros.unwrap_or_default();
        self.verify_miembros_exist(&miembros).await?;

        let roles = request
            .roles
            .unwrap_or_else(|| vec!["general".to_string()]);
        validate_roles(&roles)?;

        let grupo = self
            .grupos
            .create(&request.nombre, &request.descripcion, &miembros, &roles)
            .await?;

        let grupo = self.populate(grupo).await?;

        Ok(GrupoEnvelope {
            message: "Grupo creado exitosamente".to_string(),
            grupo,
        })
    }

    pub async fn list(&self, query: GrupoListQuery) -> AppResult<GrupoListResponse> {
        let (page, limit) = normalize_page_params(query.page, query.limit);
        let offset = (page - 1) * limit;
        let search = query.search.as_deref();

        let grupos = self.grupos.list(search, limit, offset).await?;
        let total = self.grupos.count(search).await?;

        let mut populated = Vec::with_capacity(grupos.len());
        for grupo in grupos {
            populated.push(self.populate(grupo).await?);
        }

        Ok(GrupoListResponse {
            grupos: populated,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<GrupoResponse> {
        let grupo = self
            .grupos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Grupo no encontrado".to_string()))?;

        self.populate(grupo).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateGrupoRequest) -> AppResult<GrupoEnvelope> {
        request.validate().map_err(AppError::Validation)?;

        let grupo = self
            .grupos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Grupo no encontrado".to_string()))?;

        if let Some(nombre) = request.nombre.as_deref() {
            if nombre != grupo.nombre && self.grupos.nombre_exists(nombre).await? {
                return Err(AppError::Conflict(
                    "Ya existe un grupo con ese nombre".to_string(),
                ));
            }
        }

        if let Some(miembros) = request.miembros.as_deref() {
            self.verify_miembros_exist(miembros).await?;
        }

        if let Some(roles) = request.roles.as_deref() {
            validate_roles(roles)?;
        }

        let updated = self
            .grupos
            .update(
                id,
                request.nombre,
                request.descripcion,
                request.miembros,
                request.roles,
            )
            .await?;

        let grupo = self.populate(updated).await?;

        Ok(GrupoEnvelope {
            message: "Grupo actualizado exitosamente".to_string(),
            grupo,
        })
    }

    pub async fn add_miembro(&self, id: Uuid, request: AddMiembroRequest) -> AppResult<GrupoEnvelope> {
        let grupo = self
            .grupos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Grupo no encontrado".to_string()))?;

        if self.users.find_by_id(request.user_id).await?.is_none() {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        if grupo.miembros.contains(&request.user_id) {
            return Err(AppError::BadRequest(
                "El usuario ya es miembro del grupo".to_string(),
            ));
        }

        let mut miembros = grupo.miembros;
        miembros.push(request.user_id);

        let updated = self.grupos.update_miembros(id, &miembros).await?;
        let grupo = self.populate(updated).await?;

        Ok(GrupoEnvelope {
            message: "Miembro agregado exitosamente".to_string(),
            grupo,
        })
    }

    pub async fn remove_miembro(&self, id: Uuid, user_id: Uuid) -> AppResult<GrupoEnvelope> {
        let grupo = self
            .grupos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Grupo no encontrado".to_string()))?;

        if !grupo.miembros.contains(&user_id) {
            return Err(AppError::BadRequest(
                "El usuario no es miembro del grupo".to_string(),
            ));
        }

        let miembros: Vec<Uuid> = grupo
            .miembros
            .into_iter()
            .filter(|miembro| *miembro != user_id)
            .collect();

        let updated = self.grupos.update_miembros(id, &miembros).await?;
        let grupo = self.populate(updated).await?;

        Ok(GrupoEnvelope {
            message: "Miembro removido exitosamente".to_string(),
            grupo,
        })
    }

    /// Eliminar un grupo y limpiar su referencia en todos los usuarios
    pub async fn delete(&self, id: Uuid) -> AppResult<MessageResponse> {
        if !self.grupos.delete(id).await? {
            return Err(AppError::NotFound("Grupo no encontrado".to_string()));
        }

        self.users.remove_grupo_from_all(id).await?;

        Ok(MessageResponse::new("Grupo eliminado exitosamente"))
    }

    async fn verify_miembros_exist(&self, miembros: &[Uuid]) -> AppResult<()> {
        if miembros.is_empty() {
            return Ok(());
        }

        let found = self.users.find_by_ids(miembros).await?;
        if found.len() != miembros.len() {
            return Err(AppError::BadRequest(
                "Algunos usuarios no fueron encontrados".to_string(),
            ));
        }

        Ok(())
    }

    async fn populate(&self, grupo: Grupo) -> AppResult<GrupoResponse> {
        let miembros = if grupo.miembros.is_empty() {
            Vec::new()
        } else {
            self.users
                .find_by_ids(&grupo.miembros)
                .await?
                .into_iter()
                .map(MiembroResponse::from)
                .collect()
        };

        Ok(GrupoResponse::from_grupo(grupo, miembros))
    }
}

fn validate_roles(roles: &[String]) -> AppResult<()> {
    for rol in roles {
        if !is_valid_grupo_rol(rol) {
            return Err(AppError::BadRequest(format!("Rol de grupo inválido: {}", rol)));
        }
    }
    Ok(())
}
