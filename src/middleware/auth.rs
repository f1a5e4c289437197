//! Middleware de autenticación
//!
//! El token de sesión viaja en la cookie HTTP-only `token`. Sin cookie
//! se responde 403; con token inválido o expirado, 401.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Extension,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::{
    models::user::UserRole,
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{verify_token, JwtConfig},
};

/// Nombre de la cookie de sesión
pub const TOKEN_COOKIE: &str = "token";

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

/// Middleware de autenticación por cookie
pub async fn auth_required(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError::Forbidden("No se proporcionó un token".to_string()))?;

    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(&token, &jwt_config)
        .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))?;
    let role = UserRole::parse(&claims.role)
        .ok_or_else(|| AppError::Unauthorized("Token inválido o expirado".to_string()))?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id, role });

    Ok(next.run(request).await)
}

/// Middleware para rutas exclusivas del administrador
pub async fn admin_only(
    Extension(user): Extension<AuthenticatedUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if user.role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "Acceso denegado: No tienes el rol requerido".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
