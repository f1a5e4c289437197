//! Controlador de autenticación y administración de usuarios

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::{
    GrupoInfo, LoginEnvelope, LoginRequest, RegisterEnvelope, RegisterRequest, RegisteredUser,
    UpdateUserRequest, UserEnvelope, UserResponse,
};
use crate::dto::common::MessageResponse;
use crate::models::user::{User, UserRole};
use crate::repositories::grupo_repository::GrupoRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    users: UserRepository,
    grupos: GrupoRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            grupos: GrupoRepository::new(pool),
        }
    }

    /// Registro de un nuevo usuario (solo administrador)
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterEnvelope> {
        request.validate().map_err(AppError::Validation)?;

        let role = match request.role.as_deref() {
            None => UserRole::User,
            Some(value) => UserRole::parse(value)
                .ok_or_else(|| AppError::BadRequest("Rol inválido".to_string()))?,
        };

        if self.users.email_exists(&request.email).await? {
            return Err(AppError::Conflict(
                "El correo electrónico ya está registrado".to_string(),
            ));
        }

        // El username es opcional en el payload pero único en la tabla;
        // si falta se deriva del email.
        let username = match request.username {
            Some(username) => {
                if self.users.username_exists(&username).await? {
                    return Err(AppError::Conflict(
                        "El nombre de usuario ya está en uso".to_string(),
                    ));
                }
                username
            }
            None => request
                .email
                .split('@')
                .next()
                .unwrap_or(&request.email)
                .to_string(),
        };

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hasheando password: {}", e)))?;

        let user = self
            .users
            .create(
                &request.name,
                &username,
                &request.email,
                &password_hash,
                role.as_str(),
                &request.cargo,
                &request.iniciales,
            )
            .await?;

        Ok(RegisterEnvelope {
            message: "Usuario registrado con éxito".to_string(),
            user: RegisteredUser {
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role,
                cargo: user.cargo,
                iniciales: user.iniciales,
                username: user.username,
            },
        })
    }

    /// Inicio de sesión; devuelve el token firmado y el usuario poblado
    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> AppResult<(String, LoginEnvelope)> {
        request.validate().map_err(AppError::Validation)?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let password_valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando password: {}", e)))?;

        if !password_valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, &user.role, jwt_config)?;
        let grupos = self.populate_grupos(&user).await?;

        Ok((
            token,
            LoginEnvelope {
                message: "Inicio de sesión exitoso".to_string(),
                user: UserResponse::from_user(user, grupos),
            },
        ))
    }

    /// Perfil del usuario autenticado
    pub async fn profile(&self, user_id: Uuid) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let grupos = self.populate_grupos(&user).await?;
        Ok(UserResponse::from_user(user, grupos))
    }

    /// Listado completo de usuarios (solo admin, sin paginación)
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.users.list_all().await?;

        // Un solo fetch de grupos para todo el listado
        let mut grupo_ids: Vec<Uuid> = users.iter().flat_map(|u| u.grupos.clone()).collect();
        grupo_ids.sort();
        grupo_ids.dedup();

        let grupos_by_id: HashMap<Uuid, GrupoInfo> = self
            .grupos
            .find_by_ids(&grupo_ids)
            .await?
            .into_iter()
            .map(|g| (g.id, GrupoInfo::from(g)))
            .collect();

        Ok(users
            .into_iter()
            .map(|user| {
                let grupos = user
                    .grupos
                    .iter()
                    .filter_map(|id| grupos_by_id.get(id).cloned())
                    .collect();
                UserResponse::from_user(user, grupos)
            })
            .collect())
    }

    /// Actualizar usuario (solo admin)
    pub async fn update_user(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> AppResult<UserEnvelope> {
        request.validate().map_err(AppError::Validation)?;

        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        if let Some(role) = request.role.as_deref() {
            if UserRole::parse(role).is_none() {
                return Err(AppError::BadRequest("Rol inválido".to_string()));
            }
        }

        if let Some(email) = request.email.as_deref() {
            if email != user.email && self.users.email_exists(email).await? {
                return Err(AppError::Conflict(
                    "El correo electrónico ya está en uso".to_string(),
                ));
            }
        }

        if let Some(username) = request.username.as_deref() {
            if username != user.username && self.users.username_exists(username).await? {
                return Err(AppError::Conflict(
                    "El nombre de usuario ya está en uso".to_string(),
                ));
            }
        }

        let updated = self
            .users
            .update(
                id,
                request.name,
                request.email,
                request.role,
                request.cargo,
                request.iniciales,
                request.username,
                request.grupos,
            )
            .await?;

        let grupos = self.populate_grupos(&updated).await?;

        Ok(UserEnvelope {
            message: "Usuario actualizado correctamente".to_string(),
            user: UserResponse::from_user(updated, grupos),
        })
    }

    /// Eliminar usuario (solo admin)
    pub async fn delete_user(&self, id: Uuid) -> AppResult<MessageResponse> {
        if !self.users.delete(id).await? {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(MessageResponse::new("Usuario eliminado correctamente"))
    }

    async fn populate_grupos(&self, user: &User) -> AppResult<Vec<GrupoInfo>> {
        if user.grupos.is_empty() {
            return Ok(Vec::new());
        }

        let grupos = self.grupos.find_by_ids(&user.grupos).await?;
        Ok(grupos.into_iter().map(GrupoInfo::from).collect())
    }
}
